use log::debug;

use super::{check_pitch_limits, Projection};
use crate::math::{clamp, rad_to_deg, MathError, Matrix4, Vector3};
use crate::traits::Camera;

pub const DEFAULT_MIN_PITCH: f64 = -60.0;
pub const DEFAULT_MAX_PITCH: f64 = 60.0;
pub const DEFAULT_MIN_DISTANCE: f64 = 0.1;
pub const DEFAULT_MAX_DISTANCE: f64 = 1000.0;

const WORLD_UP: Vector3 = Vector3::Y;

/// Camera orbiting an explicit target point.
///
/// Orientation is `R = Ry(yaw) · Rx(pitch) · Rz(roll)` and the camera basis
/// is `right = R·X`, `up = R·Y`, `back = R·Z`. The eye sits at
/// `target + back * distance`, so yaw = pitch = 0 looks down -Z.
#[derive(Debug, Clone)]
pub struct TargetCamera {
    position: Vector3,
    target: Vector3,
    look_at: Vector3,

    right: Vector3,
    up: Vector3,

    yaw: f64,
    pitch: f64,
    roll: f64,
    min_pitch: f64,
    max_pitch: f64,

    distance: f64,
    min_distance: f64,
    max_distance: f64,

    projection: Projection,
    projection_matrix: Matrix4,
    view_matrix: Matrix4,
}

/// Yaw and pitch (degrees) of a look-at view matrix.
///
/// Uses the rotation block rows `right = (cos y, 0, -sin y)` and
/// `back.y = -sin p`. Arcsine only covers [-90, 90], so yaw is mirrored to
/// `180 - asin` when the right vector points towards -X.
fn angles_from_view(view: &Matrix4) -> (f64, f64) {
    let sin_yaw = clamp(-view.get(0, 2), -1.0, 1.0);
    let yaw = if view.get(0, 0) < 0.0 {
        180.0 - rad_to_deg(sin_yaw.asin())
    } else {
        rad_to_deg(sin_yaw.asin())
    };
    let pitch = rad_to_deg(clamp(-view.get(2, 1), -1.0, 1.0).asin());
    (yaw, pitch)
}

impl TargetCamera {
    /// Camera at `position` aimed at `target`.
    pub fn new(position: Vector3, target: Vector3) -> Result<Self, MathError> {
        if !position.is_finite() {
            return Err(MathError::NonFinite);
        }
        let projection = Projection::default();
        let mut camera = Self {
            position,
            target: position,
            look_at: -Vector3::Z,
            right: Vector3::X,
            up: Vector3::Y,
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
            min_pitch: DEFAULT_MIN_PITCH,
            max_pitch: DEFAULT_MAX_PITCH,
            distance: DEFAULT_MIN_DISTANCE,
            min_distance: DEFAULT_MIN_DISTANCE,
            max_distance: DEFAULT_MAX_DISTANCE,
            projection,
            projection_matrix: projection.matrix()?,
            view_matrix: Matrix4::identity(),
        };
        camera.set_target(target)?;
        Ok(camera)
    }

    /// Aim at a new target point.
    ///
    /// Recomputes the look direction and the (clamped) distance, builds the
    /// look-at view and re-derives yaw/pitch from its rotation block. Pitch
    /// is clamped into the limits, then the eye is placed by [`Self::update`].
    /// A target straight above or below the eye has no defined yaw and is
    /// rejected with [`MathError::ParallelUpVector`].
    pub fn set_target(&mut self, target: Vector3) -> Result<(), MathError> {
        if !target.is_finite() {
            return Err(MathError::NonFinite);
        }
        let offset = target - self.position;
        let look_at = offset.normalize()?;
        let view = Matrix4::look_at(self.position, look_at, WORLD_UP)?;
        let (yaw, pitch) = angles_from_view(&view);

        self.target = target;
        self.distance = clamp(offset.length(), self.min_distance, self.max_distance);
        self.yaw = yaw;
        self.pitch = clamp(pitch, self.min_pitch, self.max_pitch);
        self.roll = 0.0;
        self.update();
        debug!("camera target {}, yaw {:.3}, pitch {:.3}", self.target, self.yaw, self.pitch);
        Ok(())
    }

    /// Rebuild eye position, basis and view matrix from yaw/pitch/roll and
    /// distance around the target.
    pub fn update(&mut self) {
        let rotation = Matrix4::yaw_pitch_roll(self.yaw, self.pitch, self.roll);
        let back = rotation.transform_direction(Vector3::Z);

        self.right = rotation.transform_direction(Vector3::X);
        self.up = rotation.transform_direction(Vector3::Y);
        self.look_at = -back;
        self.position = self.target + back * self.distance;
        self.view_matrix = Matrix4::from_basis(self.right, self.up, back, self.position);
    }

    /// Pan: shift eye and target by `right * dx + look_at * dy`.
    pub fn move_by(&mut self, dx: f64, dy: f64) -> Result<(), MathError> {
        if !dx.is_finite() || !dy.is_finite() {
            return Err(MathError::NonFinite);
        }
        self.shift(self.right * dx + self.look_at * dy)
    }

    /// Orbit around the target; pitch stays within the limits.
    pub fn rotate(&mut self, d_yaw: f64, d_pitch: f64) -> Result<(), MathError> {
        if !d_yaw.is_finite() || !d_pitch.is_finite() {
            return Err(MathError::NonFinite);
        }
        self.yaw += d_yaw;
        self.pitch = clamp(self.pitch + d_pitch, self.min_pitch, self.max_pitch);
        self.update();
        Ok(())
    }

    /// Change the distance to the target, clamped to the distance limits.
    pub fn zoom(&mut self, delta: f64) -> Result<(), MathError> {
        if !delta.is_finite() {
            return Err(MathError::NonFinite);
        }
        self.distance = clamp(self.distance + delta, self.min_distance, self.max_distance);
        self.update();
        Ok(())
    }

    pub fn set_roll(&mut self, roll: f64) -> Result<(), MathError> {
        if !roll.is_finite() {
            return Err(MathError::NonFinite);
        }
        self.roll = roll;
        self.update();
        Ok(())
    }

    /// Both limits must lie strictly inside (-90, 90).
    pub fn set_pitch_limits(&mut self, min: f64, max: f64) -> Result<(), MathError> {
        check_pitch_limits(min, max)?;
        self.min_pitch = min;
        self.max_pitch = max;
        self.pitch = clamp(self.pitch, min, max);
        self.update();
        Ok(())
    }

    pub fn set_distance_limits(&mut self, min: f64, max: f64) -> Result<(), MathError> {
        check_range(min, max)?;
        if min <= 0.0 {
            return Err(MathError::InvalidRange { min, max });
        }
        self.min_distance = min;
        self.max_distance = max;
        self.distance = clamp(self.distance, min, max);
        self.update();
        Ok(())
    }

    pub fn target(&self) -> Vector3 {
        self.target
    }

    /// Unit direction from the eye towards the target
    pub fn look_at(&self) -> Vector3 {
        self.look_at
    }

    pub fn right(&self) -> Vector3 {
        self.right
    }

    pub fn up(&self) -> Vector3 {
        self.up
    }

    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    pub fn roll(&self) -> f64 {
        self.roll
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    fn shift(&mut self, displacement: Vector3) -> Result<(), MathError> {
        let position = self.position + displacement;
        let target = self.target + displacement;
        if !position.is_finite() || !target.is_finite() {
            return Err(MathError::NonFinite);
        }
        self.position = position;
        self.target = target;
        self.update();
        Ok(())
    }
}

fn check_range(min: f64, max: f64) -> Result<(), MathError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(MathError::NonFinite);
    }
    if min > max {
        return Err(MathError::InvalidRange { min, max });
    }
    Ok(())
}

impl Camera for TargetCamera {
    fn log(&self) -> String {
        let mut log = format!("Position: {}\n", self.position);
        log += &format!("Target: {}\n", self.target);
        log += &format!("LookAt: {}\n", self.look_at);
        log += "ProjectionOptions:\n";
        log += &format!(" - fov : {:.6}\n", self.projection.fov);
        log += &format!(" - aspectRatio : {:.6}\n", self.projection.aspect);
        log += &format!(" - far : {:.6}\n", self.projection.far);
        log += &format!(" - near : {:.6}\n", self.projection.near);
        log += &format!("CameraUpDirection: {}\n", self.up);
        log += &format!("CameraRightDirection: {}\n", self.right);
        log += "CameraOptions:\n";
        log += &format!(" - yaw : {:.6}\n", self.yaw);
        log += &format!(" - pitch : {:.6}\n", self.pitch);
        log += &format!(" - roll : {:.6}\n", self.roll);
        log += &format!(" - minPitch : {:.6}\n", self.min_pitch);
        log += &format!(" - maxPitch : {:.6}\n", self.max_pitch);
        log += &format!(" - distance : {:.6}\n", self.distance);
        log += &format!(" - minDistance : {:.6}\n", self.min_distance);
        log += &format!(" - maxDistance : {:.6}\n", self.max_distance);
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

    /// Dolly towards (positive) or away from the target.
    fn walk(&mut self, amount: f64) -> Result<(), MathError> {
        self.zoom(-amount)
    }

    fn strafe(&mut self, amount: f64) -> Result<(), MathError> {
        self.move_by(amount, 0.0)
    }

    fn lift(&mut self, amount: f64) -> Result<(), MathError> {
        if !amount.is_finite() {
            return Err(MathError::NonFinite);
        }
        self.shift(self.up * amount)
    }

    fn update_direction(&mut self, d_yaw: f64, d_pitch: f64) -> Result<(), MathError> {
        self.rotate(d_yaw, d_pitch)
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
