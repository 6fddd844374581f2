//! Input dispatch integration tests: clicks, keys and the mouse wheel turned
//! into taps, resets, debug toggles and list scrolling.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use tapburst::events::increment::IncrementEvent;
use tapburst::game;
use tapburst::resources::counterstate::CounterState;
use tapburst::resources::debugmode::DebugMode;
use tapburst::resources::gameconfig::GameConfig;
use tapburst::resources::input::InputState;
use tapburst::resources::listscroll::{ListScroll, SCROLL_STEP};
use tapburst::resources::screenlayout::ScreenLayout;
use tapburst::resources::screensize::ScreenSize;
use tapburst::systems::time::update_world_time;

fn make_world() -> (World, Schedule) {
    let mut config = GameConfig::new();
    config.seed = Some(3);
    let mut world = World::new();
    game::setup(&mut world, &config);
    let mut schedule = Schedule::default();
    game::add_screen_systems(&mut schedule);
    (world, schedule)
}

/// Run one frame with `input` applied, then release everything.
fn frame_with(world: &mut World, schedule: &mut Schedule, input: impl FnOnce(&mut InputState)) {
    input(&mut world.resource_mut::<InputState>());
    update_world_time(world, 0.016);
    schedule.run(world);
    world.insert_resource(InputState::default());
}

fn button_centre(world: &World) -> Vector2 {
    let b = world.resource::<ScreenLayout>().button;
    Vector2 {
        x: b.x + b.width / 2.0,
        y: b.y + b.height / 2.0,
    }
}

fn list_centre(world: &World) -> Vector2 {
    let l = world.resource::<ScreenLayout>().list;
    Vector2 {
        x: l.x + l.width / 2.0,
        y: l.y + l.height / 2.0,
    }
}

fn count(world: &World) -> u64 {
    world.resource::<CounterState>().count()
}

#[test]
fn click_on_button_taps() {
    let (mut world, mut schedule) = make_world();
    let at = button_centre(&world);
    frame_with(&mut world, &mut schedule, |i| {
        i.pointer.position = at;
        i.pointer.primary_pressed = true;
    });
    assert_eq!(count(&world), 1);
}

#[test]
fn click_outside_button_does_nothing() {
    let (mut world, mut schedule) = make_world();
    frame_with(&mut world, &mut schedule, |i| {
        i.pointer.position = Vector2 { x: 2.0, y: 2.0 };
        i.pointer.primary_pressed = true;
    });
    assert_eq!(count(&world), 0);
}

#[test]
fn space_and_enter_tap() {
    let (mut world, mut schedule) = make_world();
    frame_with(&mut world, &mut schedule, |i| {
        i.action_increment.just_pressed = true
    });
    frame_with(&mut world, &mut schedule, |i| {
        i.action_increment_alt.just_pressed = true
    });
    assert_eq!(count(&world), 2);
}

#[test]
fn click_and_key_in_same_frame_tap_once() {
    let (mut world, mut schedule) = make_world();
    let at = button_centre(&world);
    frame_with(&mut world, &mut schedule, |i| {
        i.pointer.position = at;
        i.pointer.primary_pressed = true;
        i.action_increment.just_pressed = true;
    });
    assert_eq!(count(&world), 1);
}

#[test]
fn escape_resets_and_skips_taps() {
    let (mut world, mut schedule) = make_world();
    world.trigger(IncrementEvent {});
    world.trigger(IncrementEvent {});
    frame_with(&mut world, &mut schedule, |i| {
        i.action_reset.just_pressed = true;
        i.action_increment.just_pressed = true;
    });
    assert_eq!(count(&world), 0);
    assert!(world.resource::<CounterState>().entries().is_empty());
}

#[test]
fn f11_toggles_debug_overlay() {
    let (mut world, mut schedule) = make_world();
    assert!(world.get_resource::<DebugMode>().is_none());
    frame_with(&mut world, &mut schedule, |i| i.mode_debug.just_pressed = true);
    assert!(world.get_resource::<DebugMode>().is_some());
    frame_with(&mut world, &mut schedule, |i| i.mode_debug.just_pressed = true);
    assert!(world.get_resource::<DebugMode>().is_none());
}

#[test]
fn wheel_over_list_scrolls_within_content() {
    let (mut world, mut schedule) = make_world();
    for _ in 0..20 {
        world.trigger(IncrementEvent {});
    }
    let at = list_centre(&world);
    frame_with(&mut world, &mut schedule, |i| {
        i.pointer.position = at;
        i.pointer.wheel = -1.0;
    });
    assert_eq!(world.resource::<ListScroll>().offset, SCROLL_STEP);

    frame_with(&mut world, &mut schedule, |i| {
        i.pointer.position = at;
        i.pointer.wheel = -1000.0;
    });
    let layout = *world.resource::<ScreenLayout>();
    let max = ScreenLayout::list_content_height(20) - layout.list.height;
    assert_eq!(world.resource::<ListScroll>().offset, max);
}

#[test]
fn wheel_outside_list_is_ignored() {
    let (mut world, mut schedule) = make_world();
    for _ in 0..20 {
        world.trigger(IncrementEvent {});
    }
    frame_with(&mut world, &mut schedule, |i| {
        i.pointer.position = Vector2 { x: 2.0, y: 2.0 };
        i.pointer.wheel = -1.0;
    });
    assert_eq!(world.resource::<ListScroll>().offset, 0.0);
}

#[test]
fn resize_moves_the_button() {
    let (mut world, mut schedule) = make_world();
    let before = world.resource::<ScreenLayout>().button;
    world.insert_resource(ScreenSize { w: 1000, h: 800 });
    frame_with(&mut world, &mut schedule, |_| {});
    let after = world.resource::<ScreenLayout>().button;
    assert!(after.x > before.x);
    assert!(after.width > before.width);
}
