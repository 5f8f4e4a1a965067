//! Free-fly and target (orbit) cameras.
//!
//! Angles are in degrees. Both cameras share the convention of the math
//! library: right-handed world, the camera looks down its local -Z axis and
//! projections map the near/far planes to NDC z = -1/1.

mod fly;
mod target;

pub use fly::FlyCamera;
pub use target::TargetCamera;

use serde::{Deserialize, Serialize};

use crate::math::{MathError, Matrix4};

pub const DEFAULT_FOV: f64 = 45.0;
pub const DEFAULT_NEAR: f64 = 0.1;
pub const DEFAULT_FAR: f64 = 100.0;

/// Pitch limits must stay strictly between the poles, where the basis
/// degenerates.
pub const PITCH_BOUND: f64 = 90.0;

pub(crate) fn check_pitch_limits(min: f64, max: f64) -> Result<(), MathError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(MathError::NonFinite);
    }
    if min > max || min <= -PITCH_BOUND || max >= PITCH_BOUND {
        return Err(MathError::InvalidRange { min, max });
    }
    Ok(())
}

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Projection {
    /// Full vertical field of view in degrees
    pub fov: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
}

impl Projection {
    pub fn new(fov: f64, aspect: f64, near: f64, far: f64) -> Self {
        Self {
            fov,
            aspect,
            near,
            far,
        }
    }

    pub fn matrix(&self) -> Result<Matrix4, MathError> {
        Matrix4::perspective(self.fov, self.aspect, self.near, self.far)
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(DEFAULT_FOV, 1.0, DEFAULT_NEAR, DEFAULT_FAR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_projection_is_valid() {
        let matrix = Projection::default().matrix().unwrap();
        assert!(matrix.is_finite());
        assert_eq!(matrix.get(3, 2), -1.0);
    }

    #[test]
    fn test_pitch_limits_stay_off_the_poles() {
        assert!(check_pitch_limits(-89.9, 89.9).is_ok());
        assert!(check_pitch_limits(10.0, 10.0).is_ok());
        assert_eq!(
            check_pitch_limits(-90.0, 45.0),
            Err(MathError::InvalidRange { min: -90.0, max: 45.0 })
        );
        assert!(check_pitch_limits(-45.0, 90.0).is_err());
        assert!(check_pitch_limits(30.0, -30.0).is_err());
        assert_eq!(check_pitch_limits(f64::NAN, 0.0), Err(MathError::NonFinite));
    }

    #[test]
    fn test_degenerate_projection_is_rejected() {
        let projection = Projection::new(45.0, 1.0, 0.0, 100.0);
        assert!(projection.matrix().is_err());
    }
}
