/// Camera — shared state of every camera kind.
///
/// Holds position, up vector, scale, look-at target and the two matrices,
/// plus an optional non-owning handle to the renderer to notify.
///
/// Every mutation recomputes the dependent matrix before returning and then
/// notifies the bound renderer exactly once. Nothing is deferred.

use std::sync::{Arc, Mutex, Weak};
use glam::Mat4;
use crate::error::Result;
use crate::math::{self, Vector3};
use crate::renderer::{CameraRenderer, CameraMatrices, MatrixChange};
use super::scene_camera::{SceneCamera, CameraKind};

const SOURCE: &str = "scene3d::Camera";

/// Base camera.
///
/// The modelview matrix is always the translation by `-position`. The
/// look-at target is stored but does not rotate the view.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vector3,
    up: Vector3,
    scale: f32,
    look_at_target: Vector3,
    modelview_matrix: Mat4,
    projection_matrix: Mat4,
    renderer: Option<Weak<Mutex<dyn CameraRenderer>>>,
}

impl Camera {
    /// Create a camera at the origin looking toward (0, 0, -1).
    pub fn new() -> Self {
        let mut camera = Self {
            position: Vector3::ZERO,
            up: Vector3::UP,
            scale: 1.0,
            look_at_target: Vector3::FORWARD,
            modelview_matrix: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
            renderer: None,
        };
        camera.look_at(Vector3::FORWARD);
        camera
    }

    // ===== GETTERS =====

    /// World-space position.
    pub fn position(&self) -> Vector3 {
        self.position
    }

    /// Shortcut for `position()`.
    pub fn pos(&self) -> Vector3 {
        self.position
    }

    pub fn up(&self) -> Vector3 {
        self.up
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Last target passed to `look_at`.
    pub fn look_at_target(&self) -> Vector3 {
        self.look_at_target
    }

    /// World to camera space.
    pub fn modelview_matrix(&self) -> &Mat4 {
        &self.modelview_matrix
    }

    /// Camera to clip space.
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * modelview).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.modelview_matrix
    }

    /// Snapshot of both matrices, as handed to the renderer.
    pub fn matrices(&self) -> CameraMatrices {
        CameraMatrices {
            modelview: self.modelview_matrix,
            projection: self.projection_matrix,
        }
    }

    // ===== POSITION =====

    /// Move the camera.
    ///
    /// Accepts a `Vector3` or anything convertible into one (`[f32; 3]`,
    /// `(f32, f32, f32)`, `glam::Vec3`). The modelview is recomputed against
    /// the current look-at target and the renderer is notified once.
    pub fn set_position(&mut self, value: impl Into<Vector3>) {
        self.position = value.into();
        self.look_at(self.look_at_target);
    }

    /// Move the camera from runtime input.
    ///
    /// The slice must hold exactly three finite values. On error the camera
    /// is left untouched and nothing is notified.
    pub fn try_set_position(&mut self, values: &[f32]) -> Result<()> {
        let position = match Vector3::try_from(values) {
            Ok(position) => position,
            Err(error) => crate::camera_bail!(SOURCE, error),
        };
        self.set_position(position);
        Ok(())
    }

    /// Overwrite the position components in place.
    ///
    /// Returns whether the position changed. Recomputation and notification
    /// happen only on change.
    pub fn set_position_components(&mut self, x: f32, y: f32, z: f32) -> bool {
        if !self.position.set_components(x, y, z) {
            return false;
        }
        self.look_at(self.look_at_target);
        true
    }

    // ===== ORIENTATION =====

    /// Point the camera at `target`.
    ///
    /// The modelview becomes the translation by `-position`; the target is
    /// recorded but no rotation toward it is applied.
    pub fn look_at(&mut self, target: impl Into<Vector3>) {
        self.modelview_matrix = math::translation(-self.position);
        self.look_at_target = target.into();
        crate::camera_trace!(
            SOURCE,
            "look_at {} from {}",
            self.look_at_target,
            self.position
        );
        self.notify(MatrixChange::MODELVIEW);
    }

    /// Set the up vector. Stored only; no matrix depends on it.
    pub fn set_up(&mut self, up: impl Into<Vector3>) {
        self.up = up.into();
        self.on_up_changed();
    }

    /// Set the scale. Stored only; no matrix depends on it.
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
        self.on_scale_changed();
    }

    fn on_up_changed(&self) {
        crate::camera_trace!(SOURCE, "up changed to {}", self.up);
    }

    fn on_scale_changed(&self) {
        crate::camera_trace!(SOURCE, "scale changed to {}", self.scale);
    }

    // ===== RENDERER BINDING =====

    /// Bind this camera to a renderer.
    ///
    /// Only a weak handle is kept. A previous binding is replaced.
    pub fn bind_to<R: CameraRenderer + 'static>(&mut self, renderer: &Arc<Mutex<R>>) {
        let renderer: Arc<Mutex<dyn CameraRenderer>> = renderer.clone();
        if self.renderer.is_some() {
            crate::camera_debug!(SOURCE, "Replacing renderer binding");
        }
        self.renderer = Some(Arc::downgrade(&renderer));
        crate::camera_debug!(SOURCE, "Camera bound to renderer");
    }

    /// Drop the renderer binding, if any.
    pub fn unbind(&mut self) {
        if self.renderer.take().is_some() {
            crate::camera_debug!(SOURCE, "Camera unbound from renderer");
        }
    }

    /// Whether a renderer is bound and still alive.
    pub fn is_bound(&self) -> bool {
        self.renderer
            .as_ref()
            .is_some_and(|handle| handle.strong_count() > 0)
    }

    /// Notify the bound renderer that all matrices may have changed.
    ///
    /// No-op without a live renderer. Never fails.
    pub fn update(&self) {
        self.notify(MatrixChange::all());
    }

    /// Replace the projection matrix (camera kinds only).
    pub(crate) fn set_projection_matrix(&mut self, matrix: Mat4) {
        self.projection_matrix = matrix;
    }

    /// Send one notification to the bound renderer.
    ///
    /// Blocks until the renderer lock is free. A renderer must not mutate a
    /// camera bound to it from inside `update_matrices`: the lock is already
    /// held there and the call would deadlock.
    pub(crate) fn notify(&self, changed: MatrixChange) {
        let Some(handle) = &self.renderer else {
            return;
        };
        let Some(renderer) = handle.upgrade() else {
            crate::camera_debug!(SOURCE, "Bound renderer was dropped, notification skipped");
            return;
        };

        let matrices = self.matrices();
        let lock = renderer.lock();
        match lock {
            Ok(mut guard) => guard.update_matrices(changed, &matrices),
            Err(_) => {
                crate::camera_warn!(SOURCE, "Renderer lock poisoned, {:?} notification skipped", changed);
            }
        };
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneCamera for Camera {
    fn camera(&self) -> &Camera {
        self
    }

    fn camera_mut(&mut self) -> &mut Camera {
        self
    }

    fn kind(&self) -> CameraKind {
        CameraKind::Base
    }

    /// The base camera has no projection policy.
    fn update_projection_matrix(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
