//! Transient visual entities owned by the counter store.
//!
//! These are plain values, not ECS components: the
//! [`CounterState`](crate::resources::counterstate::CounterState) resource
//! keeps them in ordered collections and the tick systems replace those
//! collections wholesale on every tick.
//!
//! Submodules:
//! - [`floatinglabel`] – the "+1" text that rises and fades after a tap
//! - [`listentry`] – timestamped line prepended to the history list
//! - [`particle`] – coloured dot emitted in bursts of [`particle::BURST_SIZE`]

pub mod floatinglabel;
pub mod listentry;
pub mod particle;

/// Values at or below this are treated as fully faded.
///
/// Repeated `f32` subtraction of 0.02 from 1.0 lands at ~4e-7 instead of 0,
/// which would keep a particle alive for one extra tick.
pub const FADE_EPSILON: f32 = 1e-4;

/// Decrease `value` by `step`, clamped to `[0, 1]`.
#[inline]
pub fn fade(value: f32, step: f32) -> f32 {
    let next = (value - step).min(1.0);
    if next <= FADE_EPSILON { 0.0 } else { next }
}
