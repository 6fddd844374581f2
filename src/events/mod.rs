//! Event types and observers.
//!
//! Input systems never mutate the counter store directly; they trigger one of
//! these events and the matching observer applies it.
//!
//! Submodules:
//! - [`increment`] – a tap on the counter
//! - [`reset`] – clear the screen and cancel pending ticks
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod increment;
pub mod reset;
pub mod switchdebug;
