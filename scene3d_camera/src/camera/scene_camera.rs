/// SceneCamera trait — the polymorphic seam shared by all camera kinds.

use std::fmt;
use crate::error::Result;
use crate::renderer::CameraMatrices;
use super::camera::Camera;

/// Camera kinds known to the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraKind {
    /// Base camera, no projection policy (projection stays identity)
    Base,
    /// Symmetric perspective frustum
    Perspective,
    /// Declared but not implemented
    Orthographic,
}

/// Common interface of every camera kind.
///
/// Position, look-at and renderer binding live on the shared `Camera`
/// reached through `camera()` / `camera_mut()`. Each kind supplies its own
/// `update_projection_matrix`.
pub trait SceneCamera: fmt::Debug {
    /// Shared camera state.
    fn camera(&self) -> &Camera;

    /// Shared camera state, mutable.
    fn camera_mut(&mut self) -> &mut Camera;

    /// Which kind of camera this is.
    fn kind(&self) -> CameraKind;

    /// Recompute the projection matrix from this kind's parameters.
    fn update_projection_matrix(&mut self) -> Result<()>;

    /// Current matrices snapshot.
    fn matrices(&self) -> CameraMatrices {
        self.camera().matrices()
    }
}
