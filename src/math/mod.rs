mod error;
mod matrix;
mod vector;

pub use error::MathError;
pub use matrix::Matrix4;
pub use vector::{Vector3, LENGTH_EPSILON};

pub fn deg_to_rad(angle: f64) -> f64 {
    angle.to_radians()
}

pub fn rad_to_deg(angle: f64) -> f64 {
    angle.to_degrees()
}

pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
