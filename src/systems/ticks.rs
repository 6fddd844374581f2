//! Animation tick systems.
//!
//! One system per animated collection, each driving its own
//! [`TickScheduler`](crate::resources::tickscheduler::TickScheduler):
//!
//! - [`label_tick_system`] – "+1" labels every 50 ms
//! - [`particle_tick_system`] – particles every 30 ms
//! - [`flash_tick_system`] – background flash every 30 ms
//!
//! # System Flow
//!
//! Each frame, per collection:
//!
//! 1. The scheduler observes the collection: arms a tick when it became live,
//!    re-arms when a tap/reset replaced it, idles when it is empty
//! 2. The frame delta is charged against the pending tick (not on the frame
//!    it was armed)
//! 3. While a tick is due: build the next collection from the current one,
//!    replace it in the store, and let the scheduler reschedule or go idle
//!
//! Several ticks can run back to back after a long frame. They are still
//! strictly sequential.
//!
//! Without a [`CounterState`] resource (after teardown) the schedulers are
//! cancelled and nothing runs.

use bevy_ecs::prelude::*;

use crate::entities::floatinglabel::tick_labels;
use crate::entities::particle::tick_particles;
use crate::resources::counterstate::{CounterState, tick_flash};
use crate::resources::tickscheduler::{TickScheduler, TickSchedulers};
use crate::resources::worldtime::WorldTime;

/// Advance the floating labels.
pub fn label_tick_system(
    time: Res<WorldTime>,
    state: Option<ResMut<CounterState>>,
    mut schedulers: ResMut<TickSchedulers>,
) {
    let Some(mut state) = state else {
        schedulers.labels.cancel();
        return;
    };
    drive(
        &mut schedulers.labels,
        time.delta,
        &mut state,
        |s| (!s.labels().is_empty(), s.revisions().labels),
        |s| {
            let next = tick_labels(s.labels());
            s.replace_labels(next);
        },
    );
}

/// Advance the particles.
pub fn particle_tick_system(
    time: Res<WorldTime>,
    state: Option<ResMut<CounterState>>,
    mut schedulers: ResMut<TickSchedulers>,
) {
    let Some(mut state) = state else {
        schedulers.particles.cancel();
        return;
    };
    drive(
        &mut schedulers.particles,
        time.delta,
        &mut state,
        |s| (!s.particles().is_empty(), s.revisions().particles),
        |s| {
            let next = tick_particles(s.particles());
            s.replace_particles(next);
        },
    );
}

/// Decay the background flash.
pub fn flash_tick_system(
    time: Res<WorldTime>,
    state: Option<ResMut<CounterState>>,
    mut schedulers: ResMut<TickSchedulers>,
) {
    let Some(mut state) = state else {
        schedulers.flash.cancel();
        return;
    };
    drive(
        &mut schedulers.flash,
        time.delta,
        &mut state,
        |s| (s.flash() > 0.0, s.revisions().flash),
        |s| {
            let next = tick_flash(s.flash());
            s.replace_flash(next);
        },
    );
}

/// Run one frame of a scheduler against the store.
///
/// `probe` reports whether the collection is live and its revision; `tick`
/// replaces the collection with its next state.
fn drive(
    scheduler: &mut TickScheduler,
    dt: f32,
    state: &mut CounterState,
    probe: fn(&CounterState) -> (bool, u64),
    tick: fn(&mut CounterState),
) {
    let (live, revision) = probe(state);
    if !scheduler.observe(live, revision) {
        scheduler.advance(dt);
    }
    while scheduler.is_due() {
        tick(state);
        let (live, revision) = probe(state);
        scheduler.complete(live, revision);
    }
}
