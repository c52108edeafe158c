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

//! Adapter from `winit` window events to the engine's [`InputEvent`].

use vixen_core::platform::{InputEvent, MouseButton};
use winit::event::{ElementState, MouseButton as WinitMouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::PhysicalKey;

/// Translates a `winit` window event into an engine input event.
///
/// Returns `None` for anything that is not a direct user input action (resizes,
/// focus changes, close requests), for key auto-repeat, for keys without a
/// physical code and for zero-length wheel scrolls.
pub fn translate_window_event(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::KeyboardInput { event, .. } => {
            let PhysicalKey::Code(code) = event.physical_key else {
                return None;
            };
            let key_code = format!("{code:?}");
            match event.state {
                ElementState::Pressed if event.repeat => None,
                ElementState::Pressed => Some(InputEvent::KeyPressed { key_code }),
                ElementState::Released => Some(InputEvent::KeyReleased { key_code }),
            }
        }
        WindowEvent::CursorMoved { position, .. } => Some(InputEvent::MouseMoved {
            x: position.x as f32,
            y: position.y as f32,
        }),
        WindowEvent::MouseInput { state, button, .. } => {
            let button = engine_button(*button);
            Some(match state {
                ElementState::Pressed => InputEvent::MouseButtonPressed { button },
                ElementState::Released => InputEvent::MouseButtonReleased { button },
            })
        }
        WindowEvent::MouseWheel { delta, .. } => {
            let (delta_x, delta_y) = match delta {
                MouseScrollDelta::LineDelta(x, y) => (*x, *y),
                MouseScrollDelta::PixelDelta(pos) => (pos.x as f32, pos.y as f32),
            };
            (delta_x != 0.0 || delta_y != 0.0)
                .then_some(InputEvent::MouseWheelScrolled { delta_x, delta_y })
        }
        _ => None,
    }
}

fn engine_button(button: WinitMouseButton) -> MouseButton {
    match button {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(code) => MouseButton::Other(code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::{PhysicalPosition, PhysicalSize};
    use winit::event::{DeviceId, TouchPhase};

    fn mouse_input(state: ElementState, button: WinitMouseButton) -> WindowEvent {
        WindowEvent::MouseInput {
            device_id: DeviceId::dummy(),
            state,
            button,
        }
    }

    fn wheel(delta: MouseScrollDelta) -> WindowEvent {
        WindowEvent::MouseWheel {
            device_id: DeviceId::dummy(),
            delta,
            phase: TouchPhase::Moved,
        }
    }

    #[test]
    fn test_every_mouse_button_is_mapped() {
        let pairs = [
            (WinitMouseButton::Left, MouseButton::Left),
            (WinitMouseButton::Right, MouseButton::Right),
            (WinitMouseButton::Middle, MouseButton::Middle),
            (WinitMouseButton::Back, MouseButton::Back),
            (WinitMouseButton::Forward, MouseButton::Forward),
            (WinitMouseButton::Other(9), MouseButton::Other(9)),
        ];
        for (winit_button, expected) in pairs {
            assert_eq!(engine_button(winit_button), expected);
        }
    }

    #[test]
    fn test_mouse_press_and_release() {
        assert_eq!(
            translate_window_event(&mouse_input(ElementState::Pressed, WinitMouseButton::Left)),
            Some(InputEvent::MouseButtonPressed {
                button: MouseButton::Left
            })
        );
        assert_eq!(
            translate_window_event(&mouse_input(ElementState::Released, WinitMouseButton::Right)),
            Some(InputEvent::MouseButtonReleased {
                button: MouseButton::Right
            })
        );
    }

    #[test]
    fn test_cursor_position_is_forwarded() {
        let event = WindowEvent::CursorMoved {
            device_id: DeviceId::dummy(),
            position: PhysicalPosition::new(64.25, 480.5),
        };
        assert_eq!(
            translate_window_event(&event),
            Some(InputEvent::MouseMoved { x: 64.25, y: 480.5 })
        );
    }

    #[test]
    fn test_wheel_lines_and_pixels() {
        assert_eq!(
            translate_window_event(&wheel(MouseScrollDelta::LineDelta(0.0, -3.0))),
            Some(InputEvent::MouseWheelScrolled {
                delta_x: 0.0,
                delta_y: -3.0
            })
        );
        assert_eq!(
            translate_window_event(&wheel(MouseScrollDelta::PixelDelta(PhysicalPosition::new(
                12.0, 4.5
            )))),
            Some(InputEvent::MouseWheelScrolled {
                delta_x: 12.0,
                delta_y: 4.5
            })
        );
    }

    #[test]
    fn test_zero_scroll_is_dropped() {
        assert_eq!(
            translate_window_event(&wheel(MouseScrollDelta::LineDelta(0.0, 0.0))),
            None
        );
    }

    #[test]
    fn test_window_management_events_are_not_input() {
        for event in [
            WindowEvent::Resized(PhysicalSize::new(800, 600)),
            WindowEvent::Focused(false),
            WindowEvent::CloseRequested,
            WindowEvent::RedrawRequested,
        ] {
            assert_eq!(translate_window_event(&event), None);
        }
    }
}
