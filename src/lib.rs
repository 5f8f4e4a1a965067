pub mod app;
pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod demo;
pub mod math;
pub mod primitives;
pub mod shader;
pub mod traits;
pub mod types;

pub use app::Application;
pub use camera::{FlyCamera, Projection, TargetCamera};
pub use math::{MathError, Matrix4, Vector3};
