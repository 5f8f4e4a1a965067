use glam::{DMat4, DVec3};
use opengl_playground::math::{MathError, Matrix4, Vector3};

const EPSILON: f64 = 1e-9;

fn approx(a: Vector3, b: Vector3) -> bool {
    (a - b).length() < EPSILON
}

#[cfg(test)]
mod matrix_tests {
    use super::*;

    #[test]
    fn test_translation_inverse_is_identity() {
        let v = Vector3::new(1.5, -2.0, 7.25);
        let product = Matrix4::translation(v).dot(&Matrix4::translation(-v));
        assert!(product.approx_eq(&Matrix4::identity(), EPSILON));
    }

    #[test]
    fn test_translation_moves_points() {
        let moved = Matrix4::translation(Vector3::new(1.0, 2.0, 3.0))
            .multi_vector(Vector3::new(1.0, 1.0, 1.0))
            .unwrap();
        assert_eq!(moved, Vector3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_dot_applies_right_operand_first() {
        let scale = Matrix4::scale(Vector3::new(2.0, 2.0, 2.0));
        let translate = Matrix4::translation(Vector3::new(1.0, 0.0, 0.0));

        // scale, then translate
        let p = translate.dot(&scale).multi_vector(Vector3::new(1.0, 0.0, 0.0)).unwrap();
        assert_eq!(p, Vector3::new(3.0, 0.0, 0.0));

        // translate, then scale
        let p = scale.dot(&translate).multi_vector(Vector3::new(1.0, 0.0, 0.0)).unwrap();
        assert_eq!(p, Vector3::new(4.0, 0.0, 0.0));
    }

    #[test]
    fn test_perspective_maps_near_and_far_planes() {
        let (near, far) = (0.1, 100.0);
        let projection = Matrix4::perspective(45.0, 4.0 / 3.0, near, far).unwrap();

        let on_near = projection.multi_vector(Vector3::new(0.0, 0.0, -near)).unwrap();
        let on_far = projection.multi_vector(Vector3::new(0.0, 0.0, -far)).unwrap();
        assert!((on_near.z + 1.0).abs() < EPSILON);
        assert!((on_far.z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_perspective_literal_values() {
        // fov 90 makes f = 1
        let projection = Matrix4::perspective(90.0, 2.0, 1.0, 3.0).unwrap();
        let expected = Matrix4::new([
            0.5, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, -2.0, -3.0, //
            0.0, 0.0, -1.0, 0.0,
        ]);
        assert!(projection.approx_eq(&expected, EPSILON));
    }

    #[test]
    fn test_perspective_matches_glam() {
        let ours: DMat4 = Matrix4::perspective(60.0, 16.0 / 9.0, 0.5, 250.0).unwrap().into();
        let oracle = DMat4::perspective_rh_gl(60f64.to_radians(), 16.0 / 9.0, 0.5, 250.0);
        assert!(ours.abs_diff_eq(oracle, EPSILON));
    }

    #[test]
    fn test_perspective_rejects_degenerate_input() {
        assert_eq!(
            Matrix4::perspective(0.0, 1.0, 0.1, 10.0),
            Err(MathError::DegenerateFieldOfView { fov: 0.0 })
        );
        assert_eq!(
            Matrix4::perspective(180.0, 1.0, 0.1, 10.0),
            Err(MathError::DegenerateFieldOfView { fov: 180.0 })
        );
        assert_eq!(
            Matrix4::perspective(45.0, 0.0, 0.1, 10.0),
            Err(MathError::DegenerateAspectRatio { aspect: 0.0 })
        );
        assert_eq!(
            Matrix4::perspective(45.0, 1.0, 1.0, 1.0),
            Err(MathError::DegenerateClipPlanes { near: 1.0, far: 1.0 })
        );
    }

    #[test]
    fn test_point_at_infinity_is_rejected() {
        let projection = Matrix4::perspective(45.0, 1.0, 0.1, 10.0).unwrap();
        // eye-space z = 0 gives w = 0
        assert_eq!(
            projection.multi_vector(Vector3::new(1.0, 1.0, 0.0)),
            Err(MathError::HomogeneousDivideByZero)
        );
    }

    #[test]
    fn test_look_at_maps_eye_to_origin() {
        let eye = Vector3::new(3.0, 4.0, 5.0);
        let view = Matrix4::look_at(eye, Vector3::new(-1.0, -0.5, -2.0), Vector3::Y).unwrap();
        assert!(approx(view.multi_vector(eye).unwrap(), Vector3::ZERO));
    }

    #[test]
    fn test_look_at_puts_targets_on_negative_z() {
        let eye = Vector3::new(0.0, 0.0, 5.0);
        let view = Matrix4::look_at(eye, -Vector3::Z, Vector3::Y).unwrap();
        let origin = view.multi_vector(Vector3::ZERO).unwrap();
        assert!(approx(origin, Vector3::new(0.0, 0.0, -5.0)));
    }

    #[test]
    fn test_look_at_matches_glam() {
        let eye = DVec3::new(-2.0, 1.0, 6.0);
        let direction = DVec3::new(0.3, -0.2, -1.0);
        let ours: DMat4 = Matrix4::look_at(eye.into(), direction.into(), Vector3::Y)
            .unwrap()
            .into();
        let oracle = DMat4::look_to_rh(eye, direction, DVec3::Y);
        assert!(ours.abs_diff_eq(oracle, EPSILON));
    }

    #[test]
    fn test_look_at_parallel_up_is_rejected() {
        let result = Matrix4::look_at(Vector3::ZERO, Vector3::Y, Vector3::Y);
        assert_eq!(result, Err(MathError::ParallelUpVector));
    }

    #[test]
    fn test_f32_columns_match_glam() {
        let view = Matrix4::look_at(Vector3::new(1.0, 2.0, 3.0), -Vector3::Z, Vector3::Y).unwrap();
        let oracle = DMat4::from(view).as_mat4();
        assert_eq!(view.to_cols_array_2d_f32(), oracle.to_cols_array_2d());
    }
}
