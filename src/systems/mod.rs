//! Screen systems.
//!
//! This module groups all ECS systems that read input, advance the effect
//! timers, and draw the screen.
//!
//! Submodules overview
//! - [`gameconfig`] – push [`crate::resources::gameconfig::GameConfig`] changes to the window and store
//! - [`input`] – read hardware input and turn it into screen events
//! - [`layout`] – recompute widget positions when the window is resized
//! - [`render`] – draw the screen and the debug overlay using Raylib
//! - [`ticks`] – drive the label, particle and flash tick timers
//! - [`time`] – update simulation time and delta

pub mod gameconfig;
pub mod input;
pub mod layout;
pub mod render;
pub mod ticks;
pub mod time;
