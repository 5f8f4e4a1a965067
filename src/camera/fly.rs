use log::debug;

use super::{check_pitch_limits, Projection};
use crate::math::{clamp, deg_to_rad, rad_to_deg, MathError, Matrix4, Vector3};
use crate::traits::Camera;

pub const DEFAULT_MIN_PITCH: f64 = -89.0;
pub const DEFAULT_MAX_PITCH: f64 = 89.0;

/// First person camera steered by yaw/pitch angles.
///
/// Yaw is measured in the XZ plane from +X towards +Z, pitch upwards from
/// that plane, so yaw = -90 and pitch = 0 look down -Z.
#[derive(Debug, Clone)]
pub struct FlyCamera {
    position: Vector3,
    world_up: Vector3,

    front: Vector3,
    right: Vector3,
    up: Vector3,

    yaw: f64,
    pitch: f64,
    min_pitch: f64,
    max_pitch: f64,

    projection: Projection,
    projection_matrix: Matrix4,
    view_matrix: Matrix4,
}

/// Orthonormal (front, right, up) for the given angles.
fn basis(
    world_up: Vector3,
    yaw: f64,
    pitch: f64,
) -> Result<(Vector3, Vector3, Vector3), MathError> {
    let (sin_yaw, cos_yaw) = deg_to_rad(yaw).sin_cos();
    let (sin_pitch, cos_pitch) = deg_to_rad(pitch).sin_cos();

    let front = Vector3::new(cos_yaw * cos_pitch, sin_pitch, sin_yaw * cos_pitch).normalize()?;
    let right = front
        .cross(world_up)
        .normalize()
        .map_err(|_| MathError::ParallelUpVector)?;
    let up = right.cross(front).normalize()?;
    Ok((front, right, up))
}

impl FlyCamera {
    pub fn new(
        position: Vector3,
        world_up: Vector3,
        yaw: f64,
        pitch: f64,
    ) -> Result<Self, MathError> {
        if !position.is_finite() || !yaw.is_finite() || !pitch.is_finite() {
            return Err(MathError::NonFinite);
        }
        let world_up = world_up.normalize()?;
        let pitch = clamp(pitch, DEFAULT_MIN_PITCH, DEFAULT_MAX_PITCH);
        let (front, right, up) = basis(world_up, yaw, pitch)?;
        let projection = Projection::default();

        Ok(Self {
            position,
            world_up,
            front,
            right,
            up,
            yaw,
            pitch,
            min_pitch: DEFAULT_MIN_PITCH,
            max_pitch: DEFAULT_MAX_PITCH,
            projection,
            projection_matrix: projection.matrix()?,
            view_matrix: Matrix4::from_basis(right, up, -front, position),
        })
    }

    /// Camera at `position` facing `direction`, yaw/pitch derived from it.
    pub fn looking_along(
        position: Vector3,
        direction: Vector3,
        world_up: Vector3,
    ) -> Result<Self, MathError> {
        let direction = direction.normalize()?;
        let pitch = rad_to_deg(clamp(direction.y, -1.0, 1.0).asin());
        let yaw = rad_to_deg(direction.z.atan2(direction.x));
        Self::new(position, world_up, yaw, pitch)
    }

    /// Restrict pitch to `[min, max]`, both strictly inside (-90, 90); the
    /// current pitch is clamped into it.
    pub fn set_pitch_limits(&mut self, min: f64, max: f64) -> Result<(), MathError> {
        check_pitch_limits(min, max)?;
        let pitch = clamp(self.pitch, min, max);
        let (front, right, up) = basis(self.world_up, self.yaw, pitch)?;
        self.min_pitch = min;
        self.max_pitch = max;
        self.pitch = pitch;
        self.set_basis(front, right, up);
        Ok(())
    }

    pub fn front(&self) -> Vector3 {
        self.front
    }

    pub fn right(&self) -> Vector3 {
        self.right
    }

    pub fn up(&self) -> Vector3 {
        self.up
    }

    pub fn world_up(&self) -> Vector3 {
        self.world_up
    }

    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    pub fn pitch_limits(&self) -> (f64, f64) {
        (self.min_pitch, self.max_pitch)
    }

    fn set_basis(&mut self, front: Vector3, right: Vector3, up: Vector3) {
        self.front = front;
        self.right = right;
        self.up = up;
        self.update_view_matrix();
    }

    fn update_view_matrix(&mut self) {
        self.view_matrix = Matrix4::from_basis(self.right, self.up, -self.front, self.position);
    }

    fn translate(&mut self, direction: Vector3, amount: f64) -> Result<(), MathError> {
        if !amount.is_finite() {
            return Err(MathError::NonFinite);
        }
        let position = self.position + direction * amount;
        if !position.is_finite() {
            return Err(MathError::NonFinite);
        }
        self.position = position;
        self.update_view_matrix();
        Ok(())
    }
}

impl Camera for FlyCamera {
    fn log(&self) -> String {
        let mut log = format!("Position: {}\n", self.position);
        log += &format!("WorldUp: {}\n", self.world_up);
        log += &format!("Front: {}\n", self.front);
        log += &format!("Right: {}\n", self.right);
        log += &format!("Up: {}\n", self.up);
        log += &format!("Yaw: {:.6}\n", self.yaw);
        log += &format!("Pitch: {:.6} [{:.6}, {:.6}]\n", self.pitch, self.min_pitch, self.max_pitch);
        log += &format!(
            "Projection: fov {:.6}, aspect {:.6}, near {:.6}, far {:.6}\n",
            self.projection.fov, self.projection.aspect, self.projection.near, self.projection.far
        );
        log
    }

    fn view_matrix(&self) -> Matrix4 {
        self.view_matrix
    }

    fn projection_matrix(&self) -> Matrix4 {
        self.projection_matrix
    }

    fn position(&self) -> Vector3 {
        self.position
    }

    fn walk(&mut self, amount: f64) -> Result<(), MathError> {
        self.translate(self.front, amount)
    }

    fn strafe(&mut self, amount: f64) -> Result<(), MathError> {
        self.translate(self.right, amount)
    }

    fn lift(&mut self, amount: f64) -> Result<(), MathError> {
        self.translate(self.world_up, amount)
    }

    fn update_direction(&mut self, d_yaw: f64, d_pitch: f64) -> Result<(), MathError> {
        if !d_yaw.is_finite() || !d_pitch.is_finite() {
            return Err(MathError::NonFinite);
        }
        let yaw = self.yaw + d_yaw;
        let pitch = clamp(self.pitch + d_pitch, self.min_pitch, self.max_pitch);
        let (front, right, up) = basis(self.world_up, yaw, pitch)?;

        self.yaw = yaw;
        self.pitch = pitch;
        self.set_basis(front, right, up);
        debug!("camera direction: yaw {:.3}, pitch {:.3}", self.yaw, self.pitch);
        Ok(())
    }

    fn projection(&self) -> Projection {
        self.projection
    }

    fn setup_projection(&mut self, projection: Projection) -> Result<(), MathError> {
        self.projection_matrix = projection.matrix()?;
        self.projection = projection;
        Ok(())
    }
}
