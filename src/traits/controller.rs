/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyQ,
    KeyE,
    KeyH,
    Space,
    Shift,
    Escape,
    MouseLeft,
    MouseMiddle,
    MouseRight,
}

impl Button {
    pub const COUNT: usize = 13;

    pub const ALL: [Button; Button::COUNT] = [
        Button::KeyW,
        Button::KeyA,
        Button::KeyS,
        Button::KeyD,
        Button::KeyQ,
        Button::KeyE,
        Button::KeyH,
        Button::Space,
        Button::Shift,
        Button::Escape,
        Button::MouseLeft,
        Button::MouseMiddle,
        Button::MouseRight,
    ];

    /// Slot of this button in a `[_; Button::COUNT]` table
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Controller - handles button input states
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Get all currently pressed buttons
    fn down_buttons(&self) -> Vec<Button>;
}
