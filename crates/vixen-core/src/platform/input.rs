// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Backend-agnostic input events and the keyboard and mouse state they drive.

use std::collections::HashSet;

use crate::math::Vec2;

/// A user input action, already detached from the windowing library.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Key went down. Auto-repeat does not produce further presses.
    KeyPressed {
        /// Physical key name, layout independent (`"KeyA"`, `"Space"`, `"Escape"`).
        key_code: String,
    },
    /// Key went up.
    KeyReleased {
        /// Physical key name.
        key_code: String,
    },
    /// Mouse button went down.
    MouseButtonPressed {
        /// Which button.
        button: MouseButton,
    },
    /// Mouse button went up.
    MouseButtonReleased {
        /// Which button.
        button: MouseButton,
    },
    /// Cursor position in physical pixels, relative to the window's top-left corner.
    MouseMoved {
        /// Horizontal position.
        x: f32,
        /// Vertical position.
        y: f32,
    },
    /// Wheel or touchpad scroll, in lines or pixels depending on the device.
    MouseWheelScrolled {
        /// Horizontal amount.
        delta_x: f32,
        /// Vertical amount.
        delta_y: f32,
    },
}

/// A mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button.
    Left,
    /// Secondary button.
    Right,
    /// Wheel click.
    Middle,
    /// Side button, "back".
    Back,
    /// Side button, "forward".
    Forward,
    /// Any further button, by platform code.
    Other(u16),
}

/// The state of the keyboard, with edges for the current frame.
#[derive(Debug, Default, Clone)]
pub struct KeyboardState {
    down: HashSet<String>,
    pressed: HashSet<String>,
    released: HashSet<String>,
}

impl KeyboardState {
    /// Creates a keyboard state with no key held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a key press. Repeated presses of a held key are ignored.
    pub fn press(&mut self, key: &str) {
        if self.down.insert(key.to_string()) {
            self.pressed.insert(key.to_string());
        }
    }

    /// Records a key release.
    pub fn release(&mut self, key: &str) {
        if self.down.remove(key) {
            self.released.insert(key.to_string());
        }
    }

    /// Returns `true` while `key` is held.
    pub fn is_down(&self, key: &str) -> bool {
        self.down.contains(key)
    }

    /// Returns `true` if `key` went down during the current frame.
    pub fn was_pressed(&self, key: &str) -> bool {
        self.pressed.contains(key)
    }

    /// Returns `true` if `key` went up during the current frame.
    pub fn was_released(&self, key: &str) -> bool {
        self.released.contains(key)
    }

    /// Iterates over every key currently held, in no particular order.
    pub fn keys_down(&self) -> impl Iterator<Item = &str> {
        self.down.iter().map(String::as_str)
    }

    /// Clears the per-frame edges.
    pub fn end_frame(&mut self) {
        self.pressed.clear();
        self.released.clear();
    }
}

/// The state of the mouse, with motion and edges for the current frame.
#[derive(Debug, Default, Clone)]
pub struct MouseState {
    position: Option<Vec2>,
    delta: Vec2,
    wheel: Vec2,
    down: HashSet<MouseButton>,
    pressed: HashSet<MouseButton>,
    released: HashSet<MouseButton>,
}

impl MouseState {
    /// Creates a mouse state with no known position and no button held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the cursor moving to `(x, y)`.
    ///
    /// The first known position produces no motion delta.
    pub fn move_to(&mut self, x: f32, y: f32) {
        let next = Vec2::new(x, y);
        if let Some(previous) = self.position {
            self.delta = self.delta + (next - previous);
        }
        self.position = Some(next);
    }

    /// Accumulates a wheel scroll.
    pub fn scroll(&mut self, delta_x: f32, delta_y: f32) {
        self.wheel = self.wheel + Vec2::new(delta_x, delta_y);
    }

    /// Records a button press.
    pub fn press(&mut self, button: MouseButton) {
        if self.down.insert(button) {
            self.pressed.insert(button);
        }
    }

    /// Records a button release.
    pub fn release(&mut self, button: MouseButton) {
        if self.down.remove(&button) {
            self.released.insert(button);
        }
    }

    /// The last known cursor position, or the origin if the cursor never moved.
    pub fn position(&self) -> Vec2 {
        self.position.unwrap_or(Vec2::ZERO)
    }

    /// The cursor motion accumulated during the current frame.
    pub fn delta(&self) -> Vec2 {
        self.delta
    }

    /// The wheel scroll accumulated during the current frame.
    pub fn wheel(&self) -> Vec2 {
        self.wheel
    }

    /// Returns `true` while `button` is held.
    pub fn is_down(&self, button: MouseButton) -> bool {
        self.down.contains(&button)
    }

    /// Returns `true` if `button` went down during the current frame.
    pub fn was_pressed(&self, button: MouseButton) -> bool {
        self.pressed.contains(&button)
    }

    /// Returns `true` if `button` went up during the current frame.
    pub fn was_released(&self, button: MouseButton) -> bool {
        self.released.contains(&button)
    }

    /// Clears motion, wheel and button edges.
    pub fn end_frame(&mut self) {
        self.delta = Vec2::ZERO;
        self.wheel = Vec2::ZERO;
        self.pressed.clear();
        self.released.clear();
    }
}

/// Applies one input event to the keyboard or mouse state it concerns.
pub fn apply_input(event: &InputEvent, keyboard: &mut KeyboardState, mouse: &mut MouseState) {
    match event {
        InputEvent::KeyPressed { key_code } => keyboard.press(key_code),
        InputEvent::KeyReleased { key_code } => keyboard.release(key_code),
        InputEvent::MouseButtonPressed { button } => mouse.press(*button),
        InputEvent::MouseButtonReleased { button } => mouse.release(*button),
        InputEvent::MouseMoved { x, y } => mouse.move_to(*x, *y),
        InputEvent::MouseWheelScrolled { delta_x, delta_y } => mouse.scroll(*delta_x, *delta_y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str) -> InputEvent {
        InputEvent::KeyPressed {
            key_code: name.to_string(),
        }
    }

    #[test]
    fn test_key_edges_last_one_frame() {
        let mut keyboard = KeyboardState::new();
        let mut mouse = MouseState::new();
        apply_input(&key("Space"), &mut keyboard, &mut mouse);
        assert!(keyboard.is_down("Space"));
        assert!(keyboard.was_pressed("Space"));

        keyboard.end_frame();
        assert!(keyboard.is_down("Space"));
        assert!(!keyboard.was_pressed("Space"));

        apply_input(
            &InputEvent::KeyReleased {
                key_code: "Space".to_string(),
            },
            &mut keyboard,
            &mut mouse,
        );
        assert!(!keyboard.is_down("Space"));
        assert!(keyboard.was_released("Space"));
    }

    #[test]
    fn test_repeated_press_is_not_a_new_edge() {
        let mut keyboard = KeyboardState::new();
        keyboard.press("KeyW");
        keyboard.end_frame();
        keyboard.press("KeyW");
        assert!(!keyboard.was_pressed("KeyW"));
        assert_eq!(keyboard.keys_down().collect::<Vec<_>>(), vec!["KeyW"]);
    }

    #[test]
    fn test_release_of_unheld_key_is_ignored() {
        let mut keyboard = KeyboardState::new();
        keyboard.release("KeyQ");
        assert!(!keyboard.was_released("KeyQ"));
    }

    #[test]
    fn test_mouse_motion_accumulates_per_frame() {
        let mut mouse = MouseState::new();
        mouse.move_to(10.0, 10.0);
        assert_eq!(mouse.delta(), Vec2::ZERO);
        mouse.move_to(15.0, 8.0);
        mouse.move_to(20.0, 8.0);
        assert_eq!(mouse.position(), Vec2::new(20.0, 8.0));
        assert_eq!(mouse.delta(), Vec2::new(10.0, -2.0));

        mouse.scroll(0.0, 1.0);
        mouse.scroll(0.0, 2.0);
        assert_eq!(mouse.wheel(), Vec2::new(0.0, 3.0));

        mouse.end_frame();
        assert_eq!(mouse.delta(), Vec2::ZERO);
        assert_eq!(mouse.wheel(), Vec2::ZERO);
        assert_eq!(mouse.position(), Vec2::new(20.0, 8.0));
    }

    #[test]
    fn test_mouse_buttons() {
        let mut keyboard = KeyboardState::new();
        let mut mouse = MouseState::new();
        apply_input(
            &InputEvent::MouseButtonPressed {
                button: MouseButton::Left,
            },
            &mut keyboard,
            &mut mouse,
        );
        assert!(mouse.is_down(MouseButton::Left));
        assert!(mouse.was_pressed(MouseButton::Left));
        assert!(!mouse.is_down(MouseButton::Right));

        mouse.end_frame();
        mouse.release(MouseButton::Left);
        assert!(!mouse.is_down(MouseButton::Left));
        assert!(mouse.was_released(MouseButton::Left));
    }
}
