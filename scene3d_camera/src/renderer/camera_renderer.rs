/// CameraRenderer trait — the consumer side of a camera binding.

use bitflags::bitflags;
use bytemuck::{Pod, Zeroable};
use glam::Mat4;

bitflags! {
    /// Which camera matrices a notification concerns.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MatrixChange: u8 {
        /// Modelview (view) matrix
        const MODELVIEW = 1 << 0;
        /// Projection matrix
        const PROJECTION = 1 << 1;
    }
}

/// Snapshot of a camera's matrices at notification time.
///
/// Laid out as two consecutive column-major `mat4`, ready to be copied
/// into a uniform buffer with `as_bytes()`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CameraMatrices {
    /// World to camera space
    pub modelview: Mat4,
    /// Camera to clip space
    pub projection: Mat4,
}

impl CameraMatrices {
    /// Combined view-projection matrix (projection * modelview).
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.modelview
    }

    /// Raw bytes for GPU upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// Renderer notified by bound cameras.
///
/// Cameras hold a non-owning handle to the renderer
/// (`Weak<Mutex<dyn CameraRenderer>>`); the renderer is never kept alive
/// by a camera.
///
/// # Example
///
/// ```no_run
/// use scene3d_camera::scene3d::render::{CameraRenderer, CameraMatrices, MatrixChange};
///
/// struct UniformUploader {
///     staging: Vec<u8>,
/// }
///
/// impl CameraRenderer for UniformUploader {
///     fn update_matrices(&mut self, _changed: MatrixChange, matrices: &CameraMatrices) {
///         self.staging.clear();
///         self.staging.extend_from_slice(matrices.as_bytes());
///     }
/// }
/// ```
pub trait CameraRenderer: Send {
    /// Called once per camera mutation with the camera's current matrices.
    fn update_matrices(&mut self, changed: MatrixChange, matrices: &CameraMatrices);
}

#[cfg(test)]
#[path = "camera_renderer_tests.rs"]
mod tests;
