//! Screen reset.
//!
//! A [`ResetScreenEvent`] clears the counter, the live effects and the
//! history list, and cancels every pending tick so no stale tick runs against
//! the replaced collections.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::counterstate::CounterState;
use crate::resources::listscroll::ListScroll;
use crate::resources::tickscheduler::TickSchedulers;

/// Request to return the screen to its initial state.
#[derive(Event, Debug, Clone, Copy)]
pub struct ResetScreenEvent {}

/// Observer that swaps in a cleared [`CounterState`] and idles the schedulers.
pub fn reset_screen_observer(
    _trigger: On<ResetScreenEvent>,
    state: Option<ResMut<CounterState>>,
    mut schedulers: ResMut<TickSchedulers>,
    mut scroll: ResMut<ListScroll>,
) {
    schedulers.cancel_all();
    scroll.reset();
    if let Some(mut state) = state {
        let cleared = state.cleared();
        *state = cleared;
        info!("Screen reset");
    }
}
