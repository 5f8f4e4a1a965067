use crate::traits::{Button, Controller};

/// Input event in window-system independent form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Button { button: Button, pressed: bool },
    /// Cursor position in window pixels, origin top-left
    CursorMoved { x: f64, y: f64 },
    Resized { width: u32, height: u32 },
}

/// Pressed state of every `Button`, indexed by `Button::index`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState([bool; Button::COUNT]);

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press or release, returns true when the state changed
    pub fn set(&mut self, button: Button, pressed: bool) -> bool {
        let slot = &mut self.0[button.index()];
        let changed = *slot != pressed;
        *slot = pressed;
        changed
    }

    /// +1 when only `positive` is down, -1 when only `negative` is, else 0
    pub fn axis(&self, positive: Button, negative: Button) -> f64 {
        match (self.is_down(positive), self.is_down(negative)) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }

    pub fn release_all(&mut self) {
        self.0 = [false; Button::COUNT];
    }
}

impl Controller for KeyState {
    fn is_down(&self, button: Button) -> bool {
        self.0[button.index()]
    }

    fn down_buttons(&self) -> Vec<Button> {
        Button::ALL
            .iter()
            .copied()
            .filter(|button| self.is_down(*button))
            .collect()
    }
}
