//! Input systems.
//!
//! - [`update_input_state`] reads hardware input from Raylib each frame and
//!   writes the results into [`crate::resources::input::InputState`].
//! - [`dispatch_input`] turns that state into events: taps
//!   ([`IncrementEvent`]), resets ([`ResetScreenEvent`]), debug toggles
//!   ([`SwitchDebugEvent`]), and scrolls the history list.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::events::increment::IncrementEvent;
use crate::events::reset::ResetScreenEvent;
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::counterstate::CounterState;
use crate::resources::input::{BoolState, InputState};
use crate::resources::listscroll::ListScroll;
use crate::resources::screenlayout::ScreenLayout;

/// Poll Raylib for keyboard and mouse input and update the `InputState` resource.
pub fn update_input_state(mut input: ResMut<InputState>, rl: NonSend<raylib::RaylibHandle>) {
    let poll = |state: &mut BoolState| {
        state.active = rl.is_key_down(state.key_binding);
        state.just_pressed = rl.is_key_pressed(state.key_binding);
    };
    poll(&mut input.action_increment);
    poll(&mut input.action_increment_alt);
    poll(&mut input.action_reset);
    poll(&mut input.mode_debug);

    input.pointer.position = rl.get_mouse_position();
    input.pointer.primary_pressed = rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT);
    input.pointer.wheel = rl.get_mouse_wheel_move();
}

/// Translate this frame's input into events and list scrolling.
///
/// A click on the increment button and a press of an increment key in the
/// same frame count as a single tap.
pub fn dispatch_input(
    input: Res<InputState>,
    layout: Res<ScreenLayout>,
    state: Option<Res<CounterState>>,
    mut scroll: ResMut<ListScroll>,
    mut commands: Commands,
) {
    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }

    if input.action_reset.just_pressed {
        commands.trigger(ResetScreenEvent {});
        return;
    }

    let clicked_button =
        input.pointer.primary_pressed && layout.button_contains(input.pointer.position);
    if clicked_button || input.increment_key_pressed() {
        commands.trigger(IncrementEvent {});
    }

    if input.pointer.wheel != 0.0 && layout.list_contains(input.pointer.position) {
        let rows = state.map_or(0, |s| s.entries().len());
        scroll.scroll_by(
            input.pointer.wheel,
            ScreenLayout::list_content_height(rows),
            layout.list.height,
        );
    }
}
