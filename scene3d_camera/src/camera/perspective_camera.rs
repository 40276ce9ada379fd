/// PerspectiveCamera — camera with a symmetric perspective frustum.
///
/// The projection is rebuilt synchronously whenever fov, aspect or the clip
/// planes change, and the bound renderer receives one notification per
/// change.

use crate::error::Result;
use crate::math;
use crate::renderer::MatrixChange;
use super::camera::Camera;
use super::config::PerspectiveConfig;
use super::scene_camera::{SceneCamera, CameraKind};

const SOURCE: &str = "scene3d::PerspectiveCamera";

/// Perspective camera.
///
/// `projection_matrix == perspective(fov / 2, aspect, near, far)` holds
/// after construction and after every setter.
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    camera: Camera,
    fov: f32,
    aspect: f32,
    near: f32,
    far: f32,
}

impl PerspectiveCamera {
    /// Create a perspective camera.
    ///
    /// `fov` is in degrees.
    ///
    /// # Errors
    ///
    /// `Error::InvalidProjection` if the parameters fail
    /// `PerspectiveConfig::validate`.
    pub fn new(fov: f32, aspect: f32, near: f32, far: f32) -> Result<Self> {
        Self::from_config(&PerspectiveConfig { fov, aspect, near, far })
    }

    /// Create a perspective camera from a configuration.
    pub fn from_config(config: &PerspectiveConfig) -> Result<Self> {
        if let Err(error) = config.validate() {
            crate::camera_bail!(SOURCE, error);
        }

        let mut camera = Self {
            camera: Camera::new(),
            fov: config.fov,
            aspect: config.aspect,
            near: config.near,
            far: config.far,
        };
        camera.rebuild_projection();

        crate::camera_debug!(
            SOURCE,
            "Created (fov={}, aspect={}, near={}, far={})",
            camera.fov,
            camera.aspect,
            camera.near,
            camera.far
        );
        Ok(camera)
    }

    // ===== GETTERS =====

    /// Field of view in degrees.
    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    /// Current parameters as a configuration.
    pub fn config(&self) -> PerspectiveConfig {
        PerspectiveConfig {
            fov: self.fov,
            aspect: self.aspect,
            near: self.near,
            far: self.far,
        }
    }

    // ===== SETTERS — validate, recompute, notify =====

    /// Change the aspect ratio (typically on viewport resize).
    pub fn set_aspect(&mut self, aspect: f32) -> Result<()> {
        self.apply(PerspectiveConfig { aspect, ..self.config() })
    }

    /// Change the field of view (degrees).
    pub fn set_fov(&mut self, fov: f32) -> Result<()> {
        self.apply(PerspectiveConfig { fov, ..self.config() })
    }

    /// Change both clip plane distances.
    pub fn set_clip_planes(&mut self, near: f32, far: f32) -> Result<()> {
        self.apply(PerspectiveConfig { near, far, ..self.config() })
    }

    /// Validate and install new parameters. Nothing changes on error.
    fn apply(&mut self, config: PerspectiveConfig) -> Result<()> {
        if let Err(error) = config.validate() {
            crate::camera_bail!(SOURCE, error);
        }

        self.fov = config.fov;
        self.aspect = config.aspect;
        self.near = config.near;
        self.far = config.far;
        self.rebuild_projection();
        self.camera.notify(MatrixChange::PROJECTION);
        Ok(())
    }

    fn rebuild_projection(&mut self) {
        let projection = math::perspective(self.fov * 0.5, self.aspect, self.near, self.far);
        self.camera.set_projection_matrix(projection);
    }
}

impl SceneCamera for PerspectiveCamera {
    fn camera(&self) -> &Camera {
        &self.camera
    }

    fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    fn kind(&self) -> CameraKind {
        CameraKind::Perspective
    }

    /// `perspective(fov / 2, aspect, near, far)`.
    fn update_projection_matrix(&mut self) -> Result<()> {
        self.rebuild_projection();
        Ok(())
    }
}

#[cfg(test)]
#[path = "perspective_camera_tests.rs"]
mod tests;
