//! Per-frame input resource.
//!
//! Captures the keyboard and pointer state the screen cares about and exposes
//! it to systems via the [`InputState`] resource. Space and Enter tap the
//! counter, Escape resets the screen, F11 toggles the debug overlay.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently held this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    fn bound_to(key: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            key_binding: key,
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

/// Mouse state sampled once per frame.
#[derive(Debug, Clone, Copy)]
pub struct PointerState {
    /// Cursor position in window pixels.
    pub position: Vector2,
    /// Left button went down this frame.
    pub primary_pressed: bool,
    /// Wheel movement this frame; positive is away from the user.
    pub wheel: f32,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            position: Vector2 { x: 0.0, y: 0.0 },
            primary_pressed: false,
            wheel: 0.0,
        }
    }
}

/// Resource capturing the per-frame input relevant to the screen.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub action_increment: BoolState,
    pub action_increment_alt: BoolState,
    pub action_reset: BoolState,
    pub mode_debug: BoolState,
    pub pointer: PointerState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            action_increment: BoolState::bound_to(KeyboardKey::KEY_SPACE),
            action_increment_alt: BoolState::bound_to(KeyboardKey::KEY_ENTER),
            action_reset: BoolState::bound_to(KeyboardKey::KEY_ESCAPE),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
            pointer: PointerState::default(),
        }
    }
}

impl InputState {
    /// Whether any increment key was pressed this frame.
    pub fn increment_key_pressed(&self) -> bool {
        self.action_increment.just_pressed || self.action_increment_alt.just_pressed
    }
}
