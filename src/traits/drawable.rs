use super::renderer::Renderer;
use crate::types::CameraUniform;

/// Shape that can be animated and drawn by the application loop.
pub trait Drawable {
    /// Submit vertex data to the renderer with the camera uniforms
    fn draw(&self, renderer: &mut dyn Renderer, uniforms: &CameraUniform);

    /// Advance the shape by `dt` milliseconds
    fn update(&mut self, dt: f64);

    fn log(&self) -> String;
}
