use crate::camera::Projection;
use crate::math::{MathError, Matrix4, Vector3};
use crate::types::CameraUniform;

/// Viewpoint driven once per frame by the application loop.
///
/// Every mutation either leaves the basis orthonormal and the view matrix
/// consistent with the new state, or returns an error and changes nothing.
pub trait Camera {
    /// Multi-line dump of the camera state
    fn log(&self) -> String;

    fn view_matrix(&self) -> Matrix4;

    fn projection_matrix(&self) -> Matrix4;

    /// Eye position in world space
    fn position(&self) -> Vector3;

    /// Move forward (positive) or backward (negative)
    fn walk(&mut self, amount: f64) -> Result<(), MathError>;

    /// Move right (positive) or left (negative)
    fn strafe(&mut self, amount: f64) -> Result<(), MathError>;

    /// Move up (positive) or down (negative)
    fn lift(&mut self, amount: f64) -> Result<(), MathError>;

    /// Add yaw/pitch deltas in degrees
    fn update_direction(&mut self, d_yaw: f64, d_pitch: f64) -> Result<(), MathError>;

    fn projection(&self) -> Projection;

    /// Replace the projection parameters and cache the new matrix
    fn setup_projection(&mut self, projection: Projection) -> Result<(), MathError>;

    /// Uniform block for drawing an object with the given model matrix
    fn uniform(&self, model: &Matrix4) -> CameraUniform {
        CameraUniform::new(model, &self.view_matrix(), &self.projection_matrix())
    }
}
