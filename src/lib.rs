//! Tap counter library.
//!
//! This module exposes the screen's entities, resources, systems, and events
//! for use in integration tests.

pub mod entities;
pub mod events;
pub mod game;
pub mod palette;
pub mod resources;
pub mod systems;
