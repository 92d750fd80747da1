//! Input systems.
//!
//! - [`update_input_state`] reads hardware input from raylib each frame and
//!   writes the results into [`InputState`].
//! - [`debug_toggle_system`] turns a press of the debug key into a
//!   [`SwitchDebugEvent`].
//! - [`clear_selection_system`] drops the player's selection on Escape.
use bevy_ecs::prelude::*;

use crate::components::selected::Selected;
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::{InputBinding, InputState};
use crate::resources::selection::SelectionState;

/// Poll raylib for mouse and keyboard input and update `InputState`.
pub fn update_input_state(mut input: ResMut<InputState>, rl: NonSend<raylib::RaylibHandle>) {
    input.mouse = rl.get_mouse_position();
    for control in input.controls_mut() {
        let down = match control.binding {
            InputBinding::Key(key) => rl.is_key_down(key),
            InputBinding::Mouse(button) => rl.is_mouse_button_down(button),
        };
        control.update(down);
    }
}

pub fn debug_toggle_system(input: Res<InputState>, mut commands: Commands) {
    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
}

pub fn clear_selection_system(
    input: Res<InputState>,
    mut selection: ResMut<SelectionState>,
    selected: Query<Entity, With<Selected>>,
    mut commands: Commands,
) {
    if !input.clear_selection.just_pressed {
        return;
    }
    for entity in selected.iter() {
        commands.entity(entity).remove::<Selected>();
    }
    selection.building = None;
    selection.drag_start = None;
}
