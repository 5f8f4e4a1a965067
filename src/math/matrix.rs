use std::fmt;
use std::ops::Mul;

use super::{deg_to_rad, MathError, Vector3, LENGTH_EPSILON};

/// 4x4 matrix for homogeneous coordinates.
///
/// Components are stored row-major and the matrix is applied to column
/// vectors, so translation lives in the last column (indices 3, 7 and 11)
/// and `a.dot(&b)` applies `b` first, then `a`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4 {
    pub points: [f64; 16],
}

impl Matrix4 {
    pub const fn new(points: [f64; 16]) -> Self {
        Self { points }
    }

    /// Null matrix.
    pub const fn zero() -> Self {
        Self { points: [0.0; 16] }
    }

    pub const fn identity() -> Self {
        Self {
            points: [
                1.0, 0.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, 0.0, //
                0.0, 0.0, 1.0, 0.0, //
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    pub fn translation(v: Vector3) -> Self {
        Self {
            points: [
                1.0, 0.0, 0.0, v.x, //
                0.0, 1.0, 0.0, v.y, //
                0.0, 0.0, 1.0, v.z, //
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    pub fn scale(v: Vector3) -> Self {
        Self {
            points: [
                v.x, 0.0, 0.0, 0.0, //
                0.0, v.y, 0.0, 0.0, //
                0.0, 0.0, v.z, 0.0, //
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Rotation around the X axis, angle in degrees.
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = deg_to_rad(angle).sin_cos();
        Self {
            points: [
                1.0, 0.0, 0.0, 0.0, //
                0.0, c, -s, 0.0, //
                0.0, s, c, 0.0, //
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Rotation around the Y axis, angle in degrees.
    pub fn rotation_y(angle: f64) -> Self {
        let (s, c) = deg_to_rad(angle).sin_cos();
        Self {
            points: [
                c, 0.0, s, 0.0, //
                0.0, 1.0, 0.0, 0.0, //
                -s, 0.0, c, 0.0, //
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Rotation around the Z axis, angle in degrees.
    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = deg_to_rad(angle).sin_cos();
        Self {
            points: [
                c, -s, 0.0, 0.0, //
                s, c, 0.0, 0.0, //
                0.0, 0.0, 1.0, 0.0, //
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// `Ry(yaw) · Rx(pitch) · Rz(roll)`, angles in degrees.
    pub fn yaw_pitch_roll(yaw: f64, pitch: f64, roll: f64) -> Self {
        Self::rotation_y(yaw)
            .dot(&Self::rotation_x(pitch))
            .dot(&Self::rotation_z(roll))
    }

    /// OpenGL style perspective projection (gluPerspective).
    ///
    /// `fov` is the full vertical field of view in degrees. Eye space points
    /// on the near plane map to NDC z = -1, points on the far plane to z = 1.
    pub fn perspective(fov: f64, aspect: f64, near: f64, far: f64) -> Result<Self, MathError> {
        if !fov.is_finite() || fov <= 0.0 || fov >= 180.0 {
            return Err(MathError::DegenerateFieldOfView { fov });
        }
        if !aspect.is_finite() || aspect <= 0.0 {
            return Err(MathError::DegenerateAspectRatio { aspect });
        }
        if !near.is_finite() || !far.is_finite() || near <= 0.0 || far <= near {
            return Err(MathError::DegenerateClipPlanes { near, far });
        }

        let f = 1.0 / (deg_to_rad(fov) * 0.5).tan();
        let depth = far - near;
        let mut result = Self::zero();
        result.points[0] = f / aspect;
        result.points[5] = f;
        result.points[10] = -(far + near) / depth;
        result.points[11] = -2.0 * far * near / depth;
        result.points[14] = -1.0;
        Ok(result)
    }

    /// View matrix for an eye looking along `direction` (not at a point).
    pub fn look_at(eye: Vector3, direction: Vector3, up: Vector3) -> Result<Self, MathError> {
        if !eye.is_finite() || !up.is_finite() {
            return Err(MathError::NonFinite);
        }
        let front = direction.normalize()?;
        let right = front
            .cross(up)
            .normalize()
            .map_err(|_| MathError::ParallelUpVector)?;
        let camera_up = right.cross(front);
        Ok(Self::from_basis(right, camera_up, -front, eye))
    }

    /// View matrix from an orthonormal camera basis and eye position.
    ///
    /// The rows of the rotation block are `right`, `up` and `back`, so the
    /// eye maps to the origin of camera space.
    pub fn from_basis(right: Vector3, up: Vector3, back: Vector3, eye: Vector3) -> Self {
        Self {
            points: [
                right.x, right.y, right.z, -right.dot(eye), //
                up.x, up.y, up.z, -up.dot(eye), //
                back.x, back.y, back.z, -back.dot(eye), //
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.points[4 * row + col]
    }

    /// Matrix product; `self.dot(other)` applies `other` first.
    pub fn dot(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        for i in 0..4 {
            for j in 0..4 {
                result.points[4 * i + j] = self.points[4 * i] * other.points[j]
                    + self.points[4 * i + 1] * other.points[4 + j]
                    + self.points[4 * i + 2] * other.points[8 + j]
                    + self.points[4 * i + 3] * other.points[12 + j];
            }
        }
        result
    }

    pub fn add(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        for (i, value) in result.points.iter_mut().enumerate() {
            *value = self.points[i] + other.points[i];
        }
        result
    }

    pub fn transpose(&self) -> Self {
        let mut result = Self::zero();
        for i in 0..4 {
            for j in 0..4 {
                result.points[4 * i + j] = self.points[4 * j + i];
            }
        }
        result
    }

    /// Transforms a point (implicit w = 1) and performs the perspective divide.
    ///
    /// Points that land on the plane `h = 0` have no finite image and are
    /// reported as [`MathError::HomogeneousDivideByZero`].
    pub fn multi_vector(&self, v: Vector3) -> Result<Vector3, MathError> {
        let p = &self.points;
        let xh = p[0] * v.x + p[1] * v.y + p[2] * v.z + p[3];
        let yh = p[4] * v.x + p[5] * v.y + p[6] * v.z + p[7];
        let zh = p[8] * v.x + p[9] * v.y + p[10] * v.z + p[11];
        let h = p[12] * v.x + p[13] * v.y + p[14] * v.z + p[15];

        if !h.is_finite() || h.abs() < LENGTH_EPSILON {
            return Err(MathError::HomogeneousDivideByZero);
        }
        let result = Vector3::new(xh / h, yh / h, zh / h);
        if !result.is_finite() {
            return Err(MathError::NonFinite);
        }
        Ok(result)
    }

    /// Applies only the upper 3x3 block (w = 0), for directions.
    pub fn transform_direction(&self, v: Vector3) -> Vector3 {
        let p = &self.points;
        Vector3::new(
            p[0] * v.x + p[1] * v.y + p[2] * v.z,
            p[4] * v.x + p[5] * v.y + p[6] * v.z,
            p[8] * v.x + p[9] * v.y + p[10] * v.z,
        )
    }

    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.points
            .iter()
            .zip(other.points.iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    pub fn is_finite(&self) -> bool {
        self.points.iter().all(|v| v.is_finite())
    }

    /// Components in f32, same row-major order.
    pub fn to_f32_array(&self) -> [f32; 16] {
        let mut result = [0.0; 16];
        for (out, value) in result.iter_mut().zip(self.points.iter()) {
            *out = *value as f32;
        }
        result
    }

    /// Column-major f32 layout expected by shader uniforms.
    pub fn to_cols_array_2d_f32(&self) -> [[f32; 4]; 4] {
        let mut result = [[0.0; 4]; 4];
        for (col, column) in result.iter_mut().enumerate() {
            for (row, value) in column.iter_mut().enumerate() {
                *value = self.get(row, col) as f32;
            }
        }
        result
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Matrix4 {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        self.dot(&other)
    }
}

impl fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            writeln!(
                f,
                "[{:.6}, {:.6}, {:.6}, {:.6}]",
                self.get(row, 0),
                self.get(row, 1),
                self.get(row, 2),
                self.get(row, 3)
            )?;
        }
        Ok(())
    }
}

impl From<Matrix4> for glam::DMat4 {
    fn from(m: Matrix4) -> Self {
        glam::DMat4::from_cols_array(&m.transpose().points)
    }
}

impl From<Matrix4> for glam::Mat4 {
    fn from(m: Matrix4) -> Self {
        glam::Mat4::from_cols_array_2d(&m.to_cols_array_2d_f32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_dot() {
        let t = Matrix4::translation(Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(Matrix4::identity().dot(&t), t);
        assert_eq!(t.dot(&Matrix4::identity()), t);
    }

    #[test]
    fn test_translation_moves_point() {
        let t = Matrix4::translation(Vector3::new(10.0, 20.0, 30.0));
        let p = t.multi_vector(Vector3::new(1.0, 2.0, 3.0)).unwrap();
        assert_eq!(p, Vector3::new(11.0, 22.0, 33.0));
    }

    #[test]
    fn test_dot_applies_right_operand_first() {
        let translate = Matrix4::translation(Vector3::new(5.0, 0.0, 0.0));
        let scale = Matrix4::scale(Vector3::new(2.0, 2.0, 2.0));
        let p = Vector3::new(1.0, 0.0, 0.0);

        // scale first: 1 -> 2, then translate: 2 -> 7
        let a = translate.dot(&scale).multi_vector(p).unwrap();
        assert_eq!(a, Vector3::new(7.0, 0.0, 0.0));

        // translate first: 1 -> 6, then scale: 6 -> 12
        let b = scale.dot(&translate).multi_vector(p).unwrap();
        assert_eq!(b, Vector3::new(12.0, 0.0, 0.0));
    }

    #[test]
    fn test_transpose_twice() {
        let m = Matrix4::new([
            1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0,
        ]);
        assert_eq!(m.transpose().get(0, 3), 13.0);
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn test_add() {
        let sum = Matrix4::identity().add(&Matrix4::identity());
        assert_eq!(sum.get(2, 2), 2.0);
        assert_eq!(sum.get(2, 1), 0.0);
    }

    #[test]
    fn test_rotation_y_quarter_turn() {
        let r = Matrix4::rotation_y(90.0);
        let v = r.transform_direction(Vector3::Z);
        assert!((v.x - 1.0).abs() < 1e-12);
        assert!(v.z.abs() < 1e-12);
    }

    #[test]
    fn test_perspective_rejects_degenerate_fov() {
        assert_eq!(
            Matrix4::perspective(0.0, 1.0, 0.1, 100.0),
            Err(MathError::DegenerateFieldOfView { fov: 0.0 })
        );
        assert_eq!(
            Matrix4::perspective(180.0, 1.0, 0.1, 100.0),
            Err(MathError::DegenerateFieldOfView { fov: 180.0 })
        );
    }

    #[test]
    fn test_perspective_rejects_bad_planes() {
        assert!(matches!(
            Matrix4::perspective(45.0, 1.0, 10.0, 1.0),
            Err(MathError::DegenerateClipPlanes { .. })
        ));
        assert!(matches!(
            Matrix4::perspective(45.0, 0.0, 0.1, 1.0),
            Err(MathError::DegenerateAspectRatio { .. })
        ));
    }

    #[test]
    fn test_multi_vector_at_eye_plane_fails() {
        let p = Matrix4::perspective(45.0, 1.0, 0.1, 100.0).unwrap();
        assert_eq!(
            p.multi_vector(Vector3::ZERO),
            Err(MathError::HomogeneousDivideByZero)
        );
    }

    #[test]
    fn test_look_at_parallel_up_fails() {
        let result = Matrix4::look_at(Vector3::ZERO, Vector3::Y, Vector3::Y);
        assert_eq!(result, Err(MathError::ParallelUpVector));
    }

    #[test]
    fn test_cols_layout() {
        let t = Matrix4::translation(Vector3::new(1.0, 2.0, 3.0));
        let cols = t.to_cols_array_2d_f32();
        assert_eq!(cols[3], [1.0, 2.0, 3.0, 1.0]);
    }
}
