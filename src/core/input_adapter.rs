use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{InputEvent, KeyState};
use crate::traits::{Button, Controller};

/// Translate a winit window event into an `InputEvent`.
///
/// Keys and mouse buttons without a `Button` slot are dropped.
pub fn translate_event(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::KeyboardInput { event, .. } => match event.physical_key {
            PhysicalKey::Code(keycode) => {
                keycode_to_button(keycode).map(|button| InputEvent::Button {
                    button,
                    pressed: event.state == ElementState::Pressed,
                })
            }
            PhysicalKey::Unidentified(_) => None,
        },
        WindowEvent::MouseInput { state, button, .. } => {
            mouse_button_to_button(*button).map(|button| InputEvent::Button {
                button,
                pressed: *state == ElementState::Pressed,
            })
        }
        WindowEvent::CursorMoved { position, .. } => Some(InputEvent::CursorMoved {
            x: position.x,
            y: position.y,
        }),
        WindowEvent::Resized(size) => Some(InputEvent::Resized {
            width: size.width,
            height: size.height,
        }),
        _ => None,
    }
}

/// Map Winit KeyCode to Button
pub fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
    match keycode {
        KeyCode::KeyW => Some(Button::KeyW),
        KeyCode::KeyA => Some(Button::KeyA),
        KeyCode::KeyS => Some(Button::KeyS),
        KeyCode::KeyD => Some(Button::KeyD),
        KeyCode::KeyQ => Some(Button::KeyQ),
        KeyCode::KeyE => Some(Button::KeyE),
        KeyCode::KeyH => Some(Button::KeyH),
        KeyCode::Space => Some(Button::Space),
        KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(Button::Shift),
        KeyCode::Escape => Some(Button::Escape),
        _ => None,
    }
}

/// Map Winit MouseButton to Button
pub fn mouse_button_to_button(button: MouseButton) -> Option<Button> {
    match button {
        MouseButton::Left => Some(Button::MouseLeft),
        MouseButton::Middle => Some(Button::MouseMiddle),
        MouseButton::Right => Some(Button::MouseRight),
        _ => None,
    }
}

/// Adapter that bridges Winit events to the Controller trait
#[derive(Debug, Clone, Default)]
pub struct WinitInput {
    keys: KeyState,
    cursor: Option<(f64, f64)>,
}

impl WinitInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a Winit WindowEvent, returning the translated event for
    /// forwarding to the application
    pub fn process_event(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        let event = translate_event(event)?;
        self.apply(event);
        Some(event)
    }

    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Button { button, pressed } => {
                self.keys.set(button, pressed);
            }
            InputEvent::CursorMoved { x, y } => self.cursor = Some((x, y)),
            InputEvent::Resized { .. } => {}
        }
    }

    pub fn keys(&self) -> &KeyState {
        &self.keys
    }

    /// Last cursor position, if the cursor has entered the window
    pub fn cursor(&self) -> Option<(f64, f64)> {
        self.cursor
    }
}

impl Controller for WinitInput {
    fn is_down(&self, button: Button) -> bool {
        self.keys.is_down(button)
    }

    fn down_buttons(&self) -> Vec<Button> {
        self.keys.down_buttons()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalSize;

    // Keyboard events carry platform fields that cannot be built outside
    // winit, so key handling is covered through the mapping functions.

    #[test]
    fn test_keycode_mapping() {
        assert_eq!(keycode_to_button(KeyCode::KeyW), Some(Button::KeyW));
        assert_eq!(keycode_to_button(KeyCode::KeyH), Some(Button::KeyH));
        assert_eq!(keycode_to_button(KeyCode::ShiftRight), Some(Button::Shift));
        assert_eq!(keycode_to_button(KeyCode::KeyZ), None);
    }

    #[test]
    fn test_mouse_button_mapping() {
        assert_eq!(mouse_button_to_button(MouseButton::Middle), Some(Button::MouseMiddle));
        assert_eq!(mouse_button_to_button(MouseButton::Back), None);
    }

    #[test]
    fn test_resize_translation() {
        let event = WindowEvent::Resized(PhysicalSize::new(800, 600));
        assert_eq!(
            translate_event(&event),
            Some(InputEvent::Resized { width: 800, height: 600 })
        );
    }

    #[test]
    fn test_apply_tracks_buttons_and_cursor() {
        let mut input = WinitInput::new();
        assert_eq!(input.cursor(), None);

        input.apply(InputEvent::Button { button: Button::MouseLeft, pressed: true });
        input.apply(InputEvent::CursorMoved { x: 10.0, y: 20.0 });
        assert!(input.is_down(Button::MouseLeft));
        assert_eq!(input.cursor(), Some((10.0, 20.0)));

        input.apply(InputEvent::Button { button: Button::MouseLeft, pressed: false });
        assert!(input.down_buttons().is_empty());
    }
}
