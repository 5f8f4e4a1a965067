pub mod clock;
pub mod controller;
pub mod frame;
pub mod input_adapter;
pub mod timer;

pub use clock::Clock;
pub use controller::{InputEvent, KeyState};
pub use frame::{FrameInfo, Frames};
pub use input_adapter::{translate_event, WinitInput};
pub use timer::Throttle;
