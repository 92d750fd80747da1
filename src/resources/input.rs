//! Per-frame mouse and keyboard input resource.
//!
//! `crate::systems::input::update_input_state` fills [`InputState`] from
//! raylib once per frame; every other system reads this resource, so tests
//! can drive the game by writing it directly.
use bevy_ecs::prelude::*;
use raylib::prelude::{KeyboardKey, MouseButton, Vector2};

/// Hardware control an action is bound to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputBinding {
    Key(KeyboardKey),
    Mouse(MouseButton),
}

/// Boolean button state with edge detection.
#[derive(Debug, Clone, Copy)]
pub struct BoolState {
    /// Whether the control is held this frame.
    pub active: bool,
    /// Whether the control went down this frame.
    pub just_pressed: bool,
    /// Whether the control went up this frame.
    pub just_released: bool,
    pub binding: InputBinding,
}

impl BoolState {
    pub fn new(binding: InputBinding) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            binding,
        }
    }

    /// Feed this frame's raw state and derive the edges.
    pub fn update(&mut self, down: bool) {
        self.just_pressed = down && !self.active;
        self.just_released = !down && self.active;
        self.active = down;
    }
}

/// Resource capturing the per-frame input relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    /// Mouse position in screen pixels.
    pub mouse: Vector2,
    pub select: BoolState,
    pub command: BoolState,
    pub pan_up: BoolState,
    pub pan_down: BoolState,
    pub pan_left: BoolState,
    pub pan_right: BoolState,
    pub clear_selection: BoolState,
    pub mode_debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            mouse: Vector2::zero(),
            select: BoolState::new(InputBinding::Mouse(MouseButton::MOUSE_BUTTON_LEFT)),
            command: BoolState::new(InputBinding::Mouse(MouseButton::MOUSE_BUTTON_RIGHT)),
            pan_up: BoolState::new(InputBinding::Key(KeyboardKey::KEY_UP)),
            pan_down: BoolState::new(InputBinding::Key(KeyboardKey::KEY_DOWN)),
            pan_left: BoolState::new(InputBinding::Key(KeyboardKey::KEY_LEFT)),
            pan_right: BoolState::new(InputBinding::Key(KeyboardKey::KEY_RIGHT)),
            clear_selection: BoolState::new(InputBinding::Key(KeyboardKey::KEY_ESCAPE)),
            mode_debug: BoolState::new(InputBinding::Key(KeyboardKey::KEY_F11)),
        }
    }
}

impl InputState {
    /// All bound controls, for polling.
    pub fn controls_mut(&mut self) -> [&mut BoolState; 8] {
        [
            &mut self.select,
            &mut self.command,
            &mut self.pan_up,
            &mut self.pan_down,
            &mut self.pan_left,
            &mut self.pan_right,
            &mut self.clear_selection,
            &mut self.mode_debug,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_last_one_frame() {
        let mut s = BoolState::new(InputBinding::Key(KeyboardKey::KEY_F11));
        s.update(true);
        assert!(s.active && s.just_pressed && !s.just_released);
        s.update(true);
        assert!(s.active && !s.just_pressed);
        s.update(false);
        assert!(!s.active && s.just_released);
        s.update(false);
        assert!(!s.just_released);
    }
}
