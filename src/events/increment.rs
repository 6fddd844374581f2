//! Tap handling.
//!
//! Triggering an [`IncrementEvent`] runs [`increment_observer`], which swaps
//! in the store snapshot produced by
//! [`CounterState::after_increment`](crate::resources::counterstate::CounterState::after_increment):
//! counter +1, one "+1" label, a particle burst, a history entry and a full
//! background flash.
//!
//! The tick schedulers pick the new entities up on their next run.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::resources::counterstate::CounterState;
use crate::resources::randomsource::SpawnRng;

/// A single tap on the increment control.
#[derive(Event, Debug, Clone, Copy)]
pub struct IncrementEvent {}

/// Wall-clock time as shown in history entries, e.g. `3:07:42 PM`.
pub fn local_time_string() -> String {
    chrono::Local::now().format("%-I:%M:%S %p").to_string()
}

/// Observer that applies a tap to the [`CounterState`] resource.
///
/// Does nothing when the store has already been torn down.
pub fn increment_observer(
    _trigger: On<IncrementEvent>,
    state: Option<ResMut<CounterState>>,
    mut rng: ResMut<SpawnRng>,
) {
    let Some(mut state) = state else {
        warn!("IncrementEvent ignored: counter state is gone");
        return;
    };

    let time = local_time_string();
    let next = state.after_increment(&mut rng.0, &time);
    debug!(
        "Tap: count={} labels={} particles={} entries={}",
        next.count(),
        next.labels().len(),
        next.particles().len(),
        next.entries().len()
    );
    *state = next;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_time_string_shape() {
        let t = local_time_string();
        assert!(t.ends_with("AM") || t.ends_with("PM"));
        assert_eq!(t.matches(':').count(), 2);
    }
}
