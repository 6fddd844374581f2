//! Game configuration change detection systems.
//!
//! Monitor [`GameConfig`] for changes and apply settings to the window
//! ([`apply_gameconfig_changes`]) and to the counter store
//! ([`apply_list_capacity`]).

use crate::resources::counterstate::CounterState;
use crate::resources::gameconfig::GameConfig;
use bevy_ecs::prelude::*;
use log::info;
use raylib::ffi;

/// System that applies window-related configuration changes.
///
/// When [`GameConfig`] is added or modified, pushes target FPS and vsync to
/// the window.
///
/// # Resource Dependencies
/// - `GameConfig` (optional) - the configuration to monitor
/// - `RaylibHandle` (non-send, mutable) - for window operations
pub fn apply_gameconfig_changes(
    maybe_config: Option<Res<GameConfig>>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
) {
    let Some(config) = maybe_config else {
        return;
    };
    if !(config.is_changed() || config.is_added()) {
        return;
    }

    // Apply vsync setting
    unsafe {
        if config.vsync {
            ffi::SetWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
        } else {
            ffi::ClearWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
        }
    }

    // Apply target FPS
    rl.set_target_fps(config.target_fps);

    info!(
        "Window config applied: fps={}, vsync={}",
        config.target_fps, config.vsync
    );
}

/// System that copies the configured history capacity into the store.
///
/// Shrinking the capacity drops the oldest entries right away.
pub fn apply_list_capacity(
    maybe_config: Option<Res<GameConfig>>,
    state: Option<ResMut<CounterState>>,
) {
    let (Some(config), Some(mut state)) = (maybe_config, state) else {
        return;
    };
    if state.list_capacity() != config.list_capacity {
        info!(
            "History capacity {} -> {}",
            state.list_capacity(),
            config.list_capacity
        );
        state.set_list_capacity(config.list_capacity);
    }
}
