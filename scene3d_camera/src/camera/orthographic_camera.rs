/// OrthographicCamera — declared camera kind without a projection.
///
/// Position, look-at and renderer binding work as for any camera. The
/// projection matrix stays identity and `update_projection_matrix` reports
/// `Error::Unimplemented`.

use crate::error::{Error, Result};
use super::camera::Camera;
use super::scene_camera::{SceneCamera, CameraKind};

const SOURCE: &str = "scene3d::OrthographicCamera";

#[derive(Debug, Clone, Default)]
pub struct OrthographicCamera {
    camera: Camera,
}

impl OrthographicCamera {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SceneCamera for OrthographicCamera {
    fn camera(&self) -> &Camera {
        &self.camera
    }

    fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    fn kind(&self) -> CameraKind {
        CameraKind::Orthographic
    }

    fn update_projection_matrix(&mut self) -> Result<()> {
        crate::camera_bail!(SOURCE, Error::Unimplemented("orthographic projection".to_string()))
    }
}

#[cfg(test)]
#[path = "orthographic_camera_tests.rs"]
mod tests;
