pub mod camera;
pub mod controller;
pub mod drawable;
pub mod renderer;

pub use camera::*;
pub use controller::*;
pub use drawable::*;
pub use renderer::*;
