use glam::{Mat4, Vec3, Vec4};
use super::*;

fn assert_mat4_near(a: Mat4, b: Mat4) {
    assert!(a.abs_diff_eq(b, 1e-5), "matrices differ:\n{:?}\n{:?}", a, b);
}

// ============================================================================
// translation
// ============================================================================

#[test]
fn test_translation_zero_is_identity() {
    assert_eq!(translation(Vector3::ZERO), Mat4::IDENTITY);
}

#[test]
fn test_translation_moves_points() {
    let m = translation(Vector3::new(1.0, -2.0, 3.0));
    let p = m.transform_point3(Vec3::new(10.0, 10.0, 10.0));
    assert!(p.abs_diff_eq(Vec3::new(11.0, 8.0, 13.0), 1e-6));
}

// ============================================================================
// perspective
// ============================================================================

#[test]
fn test_perspective_matches_glu_layout() {
    let (fovy, aspect, near, far) = (30.0_f32, 1.777_f32, 0.1_f32, 1000.0_f32);
    let f = 1.0 / (fovy.to_radians() / 2.0).tan();

    let expected = Mat4::from_cols(
        Vec4::new(f / aspect, 0.0, 0.0, 0.0),
        Vec4::new(0.0, f, 0.0, 0.0),
        Vec4::new(0.0, 0.0, (far + near) / (near - far), -1.0),
        Vec4::new(0.0, 0.0, 2.0 * far * near / (near - far), 0.0),
    );

    assert_mat4_near(perspective(fovy, aspect, near, far), expected);
}

#[test]
fn test_perspective_maps_near_and_far_to_clip_bounds() {
    let m = perspective(60.0, 1.0, 1.0, 10.0);

    let near = m.project_point3(Vec3::new(0.0, 0.0, -1.0));
    let far = m.project_point3(Vec3::new(0.0, 0.0, -10.0));

    assert!((near.z + 1.0).abs() < 1e-5);
    assert!((far.z - 1.0).abs() < 1e-5);
}

#[test]
fn test_perspective_wider_aspect_shrinks_x_scale() {
    let narrow = perspective(45.0, 1.0, 0.1, 100.0);
    let wide = perspective(45.0, 2.0, 0.1, 100.0);

    assert!((wide.x_axis.x * 2.0 - narrow.x_axis.x).abs() < 1e-5);
    assert_eq!(wide.y_axis.y, narrow.y_axis.y);
}
