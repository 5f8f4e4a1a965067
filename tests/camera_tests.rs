use opengl_playground::camera::{FlyCamera, Projection};
use opengl_playground::math::{MathError, Vector3};
use opengl_playground::traits::Camera;

const EPSILON: f64 = 1e-9;

fn assert_orthonormal(front: Vector3, right: Vector3, up: Vector3) {
    for v in [front, right, up] {
        assert!((v.length() - 1.0).abs() < EPSILON, "not unit length: {}", v);
    }
    assert!(front.dot(right).abs() < EPSILON);
    assert!(front.dot(up).abs() < EPSILON);
    assert!(right.dot(up).abs() < EPSILON);
}

/// Deterministic mix of movement and turning deltas
fn steps(count: usize) -> impl Iterator<Item = (f64, f64, f64)> {
    (0..count).map(|i| {
        let t = i as f64;
        ((t * 0.7).sin() * 3.0, (t * 1.3).cos() * 25.0, (t * 0.37).sin() * 40.0)
    })
}

#[cfg(test)]
mod fly_camera_tests {
    use super::*;

    #[test]
    fn test_walk_scenario() {
        let mut camera = FlyCamera::looking_along(Vector3::new(0.0, 0.0, 5.0), -Vector3::Z, Vector3::Y).unwrap();
        camera.walk(1.0).unwrap();
        let position = camera.position();
        assert!((position - Vector3::new(0.0, 0.0, 4.0)).length() < EPSILON);
    }

    #[test]
    fn test_pitch_clamped_at_sixty() {
        let mut camera = FlyCamera::new(Vector3::ZERO, Vector3::Y, -90.0, 0.0).unwrap();
        camera.set_pitch_limits(-60.0, 60.0).unwrap();
        for _ in 0..10 {
            camera.update_direction(0.0, 20.0).unwrap();
        }
        assert_eq!(camera.pitch(), 60.0);

        camera.update_direction(0.0, -1000.0).unwrap();
        assert_eq!(camera.pitch(), -60.0);
    }

    #[test]
    fn test_basis_stays_orthonormal() {
        let mut camera = FlyCamera::new(Vector3::new(1.0, 2.0, 3.0), Vector3::Y, -90.0, 0.0).unwrap();
        for (amount, d_yaw, d_pitch) in steps(200) {
            camera.walk(amount).unwrap();
            camera.strafe(-amount).unwrap();
            camera.lift(amount * 0.5).unwrap();
            camera.update_direction(d_yaw, d_pitch).unwrap();

            assert_orthonormal(camera.front(), camera.right(), camera.up());
            let (min, max) = camera.pitch_limits();
            assert!(camera.pitch() >= min && camera.pitch() <= max);
        }
    }

    #[test]
    fn test_view_matrix_tracks_every_mutation() {
        let mut camera = FlyCamera::new(Vector3::new(0.0, 1.0, 9.5), Vector3::Y, -90.0, -34.0).unwrap();
        for (amount, d_yaw, d_pitch) in steps(50) {
            camera.strafe(amount).unwrap();
            camera.update_direction(d_yaw, d_pitch).unwrap();

            let view = camera.view_matrix();
            let eye = view.multi_vector(camera.position()).unwrap();
            assert!(eye.length() < 1e-9);
            // a point ahead of the camera lands on the -Z axis
            let ahead = view.multi_vector(camera.position() + camera.front() * 2.0).unwrap();
            assert!((ahead - Vector3::new(0.0, 0.0, -2.0)).length() < 1e-9);
        }
    }

    #[test]
    fn test_rejected_input_leaves_state_unchanged() {
        let mut camera = FlyCamera::new(Vector3::ZERO, Vector3::Y, -90.0, 0.0).unwrap();
        let view = camera.view_matrix();

        assert_eq!(camera.update_direction(f64::NAN, 0.0), Err(MathError::NonFinite));
        assert_eq!(camera.strafe(f64::INFINITY), Err(MathError::NonFinite));
        assert_eq!(
            camera.setup_projection(Projection::new(180.0, 1.0, 0.1, 100.0)),
            Err(MathError::DegenerateFieldOfView { fov: 180.0 })
        );
        assert_eq!(camera.view_matrix(), view);
        assert_eq!(camera.projection(), Projection::default());
    }

    #[test]
    fn test_zero_world_up_is_rejected() {
        let result = FlyCamera::new(Vector3::ZERO, Vector3::ZERO, -90.0, 0.0);
        assert!(matches!(result, Err(MathError::ZeroLengthVector)));
    }

    #[test]
    fn test_uniform_contains_camera_matrices() {
        let camera = FlyCamera::new(Vector3::new(0.0, 0.0, 5.0), Vector3::Y, -90.0, 0.0).unwrap();
        let uniform = camera.uniform(&opengl_playground::Matrix4::identity());
        assert_eq!(uniform.view, camera.view_matrix().to_cols_array_2d_f32());
        assert_eq!(uniform.projection, camera.projection_matrix().to_cols_array_2d_f32());
        // translation in the last column
        assert_eq!(uniform.view[3][2], -5.0);
    }
}
