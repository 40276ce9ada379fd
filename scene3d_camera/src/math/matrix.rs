/// Matrix helpers — translation and perspective construction on `glam::Mat4`.
///
/// Conventions follow classic OpenGL: right-handed view space, clip-space
/// depth in [-1, 1], column-major storage.

use glam::Mat4;
use super::Vector3;

/// Translation matrix moving points by `offset`.
pub fn translation(offset: Vector3) -> Mat4 {
    Mat4::from_translation(offset.as_vec3())
}

/// Symmetric perspective projection (`gluPerspective` layout).
///
/// `fovy_degrees` is the full vertical field of view in degrees. With
/// `f = 1 / tan(fovy / 2)` the matrix is:
///
/// ```text
/// | f/aspect  0  0                        0                        |
/// | 0         f  0                        0                        |
/// | 0         0  (far+near)/(near-far)    2*far*near/(near-far)    |
/// | 0         0  -1                       0                        |
/// ```
pub fn perspective(fovy_degrees: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    Mat4::perspective_rh_gl(fovy_degrees.to_radians(), aspect, near, far)
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
