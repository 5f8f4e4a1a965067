use std::fmt;

/// Degenerate numeric input rejected by the math library or a camera.
///
/// Operations returning this error never modify the value they were called
/// on, so a camera keeps its last valid state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    /// Normalization of a vector whose length is (near) zero.
    ZeroLengthVector,
    /// Field of view outside the open interval (0, 180) degrees.
    DegenerateFieldOfView { fov: f64 },
    /// Aspect ratio that is zero, negative or not finite.
    DegenerateAspectRatio { aspect: f64 },
    /// Clip planes with `near <= 0` or `far <= near`.
    DegenerateClipPlanes { near: f64, far: f64 },
    /// Homogeneous coordinate of a transformed point is (near) zero.
    HomogeneousDivideByZero,
    /// View direction is parallel to the up vector, no right vector exists.
    ParallelUpVector,
    /// NaN or infinite input.
    NonFinite,
    /// Limits with `min > max`.
    InvalidRange { min: f64, max: f64 },
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLengthVector => write!(f, "cannot normalize a zero length vector"),
            Self::DegenerateFieldOfView { fov } => {
                write!(f, "field of view {fov} is outside (0, 180) degrees")
            }
            Self::DegenerateAspectRatio { aspect } => {
                write!(f, "aspect ratio {aspect} must be positive")
            }
            Self::DegenerateClipPlanes { near, far } => {
                write!(f, "clip planes near={near} far={far} must satisfy 0 < near < far")
            }
            Self::HomogeneousDivideByZero => {
                write!(f, "homogeneous coordinate is zero, point is at infinity")
            }
            Self::ParallelUpVector => write!(f, "view direction is parallel to the up vector"),
            Self::NonFinite => write!(f, "input contains NaN or infinite values"),
            Self::InvalidRange { min, max } => write!(f, "invalid range [{min}, {max}]"),
        }
    }
}

impl std::error::Error for MathError {}
