use proptest::prelude::*;
use voxel_life::math::{Mat4, Vec3, identity, look_at, multiply, perspective, translate};
use voxel_life::{GeometryError, camera_eye_from_angles};

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn arb_mat4() -> impl Strategy<Value = Mat4> {
    proptest::array::uniform16(-4.0f32..4.0).prop_map(Mat4)
}

fn arb_vec3(range: f32) -> impl Strategy<Value = Vec3> {
    (-range..range, -range..range, -range..range).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

/// Eyes at least one unit off the Y axis, so +Y is never parallel to the view
fn arb_eye() -> impl Strategy<Value = Vec3> {
    arb_vec3(50.0).prop_filter("off the up axis", |v| v.x.hypot(v.z) > 1.0)
}

proptest! {
    #[test]
    fn identity_is_two_sided_neutral(m in arb_mat4()) {
        prop_assert!(multiply(&identity(), &m).approx_eq(&m, 1e-6));
        prop_assert!(multiply(&m, &identity()).approx_eq(&m, 1e-6));
    }

    #[test]
    fn multiply_is_associative(a in arb_mat4(), b in arb_mat4(), c in arb_mat4()) {
        let left = multiply(&multiply(&a, &b), &c);
        let right = multiply(&a, &multiply(&b, &c));
        prop_assert!(left.approx_eq(&right, 1e-2));
    }

    #[test]
    fn translate_only_touches_translation(m in arb_mat4(), offset in arb_vec3(100.0)) {
        let t = translate(&m, offset);
        prop_assert_eq!(t.translation(), offset);
        for i in (0..12).chain(std::iter::once(15)) {
            prop_assert_eq!(t.0[i], m.0[i]);
        }
    }

    #[test]
    fn translation_matrix_moves_points(offset in arb_vec3(100.0), p in arb_vec3(100.0)) {
        let moved = translate(&identity(), offset).transform_point(p);
        prop_assert!(approx(moved[0], p.x + offset.x, 1e-3));
        prop_assert!(approx(moved[1], p.y + offset.y, 1e-3));
        prop_assert!(approx(moved[2], p.z + offset.z, 1e-3));
        prop_assert_eq!(moved[3], 1.0);
    }

    #[test]
    fn look_at_basis_is_orthonormal(eye in arb_eye(), center in arb_vec3(0.5)) {
        let view = look_at(eye, center, Vec3::Y).unwrap();
        let row = |r: usize| Vec3::new(view.get(r, 0), view.get(r, 1), view.get(r, 2));
        for r in 0..3 {
            prop_assert!(approx(row(r).length(), 1.0, 1e-4));
            for s in (r + 1)..3 {
                prop_assert!(approx(row(r).dot(row(s)), 0.0, 1e-4));
            }
        }
        // right-handed: right x up == back
        let handed = row(0).cross(row(1));
        prop_assert!(approx(handed.dot(row(2)), 1.0, 1e-4));
        prop_assert!(view.is_finite());
    }

    #[test]
    fn look_at_maps_eye_to_origin(eye in arb_eye()) {
        let view = look_at(eye, Vec3::ZERO, Vec3::Y).unwrap();
        let p = view.transform_point(eye);
        let tol = 1e-4 * eye.length().max(1.0);
        prop_assert!(p[0].abs() <= tol && p[1].abs() <= tol && p[2].abs() <= tol);
    }

    #[test]
    fn look_at_rejects_coincident_points(eye in arb_vec3(50.0)) {
        prop_assert_eq!(look_at(eye, eye, Vec3::Y), Err(GeometryError::CoincidentEyeAndTarget));
    }

    #[test]
    fn orbit_eye_never_degenerates(
        angle_x in -10.0f32..10.0,
        angle_y in -10.0f32..10.0,
        zoom in 5.0f32..30.0,
    ) {
        let eye = camera_eye_from_angles(angle_x, angle_y, zoom);
        prop_assert!(approx(eye.x.hypot(eye.z), zoom, 1e-3));
        prop_assert!(look_at(eye, Vec3::ZERO, Vec3::Y).is_ok());
    }

    #[test]
    fn perspective_is_finite_for_valid_input(
        fov in 0.1f32..3.0,
        aspect in 0.1f32..5.0,
        near in 0.01f32..10.0,
        depth in 0.1f32..1000.0,
    ) {
        let m = perspective(fov, aspect, near, near + depth).unwrap();
        prop_assert!(m.is_finite());
        prop_assert_eq!(m.0[11], -1.0);
        prop_assert_eq!(m.0[15], 0.0);
    }
}
