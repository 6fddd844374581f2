//! Screen setup, schedule wiring and teardown.
//!
//! [`setup`] inserts every resource the screen needs and registers the event
//! observers. [`add_screen_systems`] adds the platform-independent systems to
//! a schedule in their frame order; `main` wraps them with the Raylib input
//! and render systems. [`teardown`] removes the counter store so late ticks
//! and taps become no-ops.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::info;

use crate::events::increment::increment_observer;
use crate::events::reset::reset_screen_observer;
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::counterstate::CounterState;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::listscroll::ListScroll;
use crate::resources::randomsource::SpawnRng;
use crate::resources::screenlayout::ScreenLayout;
use crate::resources::screensize::ScreenSize;
use crate::resources::tickscheduler::TickSchedulers;
use crate::resources::worldtime::WorldTime;
use crate::systems::gameconfig::apply_list_capacity;
use crate::systems::input::dispatch_input;
use crate::systems::layout::update_screen_layout;
use crate::systems::ticks::{flash_tick_system, label_tick_system, particle_tick_system};

/// Insert the screen's resources and observers into `world`.
pub fn setup(world: &mut World, config: &GameConfig) {
    let screen = ScreenSize {
        w: config.window_width as i32,
        h: config.window_height as i32,
    };

    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(CounterState::new(config.list_capacity));
    world.insert_resource(TickSchedulers::default());
    world.insert_resource(SpawnRng::from_seed(config.seed));
    world.insert_resource(InputState::default());
    world.insert_resource(ListScroll::default());
    world.insert_resource(screen);
    world.insert_resource(ScreenLayout::compute(screen));
    world.insert_resource(config.clone());

    world.spawn(Observer::new(increment_observer));
    world.spawn(Observer::new(reset_screen_observer));
    world.spawn(Observer::new(switch_debug_observer));
    // Observers must exist before any system triggers an event.
    world.flush();

    info!(
        "Screen ready: {}x{}, list_capacity={}, seed={:?}",
        screen.w, screen.h, config.list_capacity, config.seed
    );
}

/// Add input dispatch, layout, config sync and the tick systems, in order.
pub fn add_screen_systems(schedule: &mut Schedule) {
    schedule.add_systems(
        (
            dispatch_input,
            update_screen_layout,
            apply_list_capacity,
            label_tick_system,
            particle_tick_system,
            flash_tick_system,
        )
            .chain(),
    );
}

/// Tear the screen down.
///
/// Pending ticks are cancelled and the counter store is removed. Systems and
/// observers that run afterwards find no store and do nothing.
pub fn teardown(world: &mut World) {
    if let Some(mut schedulers) = world.get_resource_mut::<TickSchedulers>() {
        schedulers.cancel_all();
    }
    match world.remove_resource::<CounterState>() {
        Some(state) => info!("Screen torn down at count {}", state.count()),
        None => info!("Screen already torn down"),
    }
}
