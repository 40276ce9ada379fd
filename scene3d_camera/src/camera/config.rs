/// Perspective camera configuration.

use crate::error::{Error, Result};

/// Parameters of a perspective camera.
///
/// `fov` is in degrees. The projection is built from half of it
/// (see `PerspectiveCamera::update_projection_matrix`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveConfig {
    /// Field of view in degrees
    pub fov: f32,
    /// Width / height
    pub aspect: f32,
    /// Near clip plane distance
    pub near: f32,
    /// Far clip plane distance
    pub far: f32,
}

impl Default for PerspectiveConfig {
    fn default() -> Self {
        Self {
            fov: 60.0,
            aspect: 4.0 / 3.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl PerspectiveConfig {
    /// Check the parameters describe a usable frustum.
    ///
    /// Requires finite values, `0 < fov < 360`, `aspect > 0`,
    /// `near > 0` and `far > near`.
    pub fn validate(&self) -> Result<()> {
        let Self { fov, aspect, near, far } = *self;

        if !(fov.is_finite() && aspect.is_finite() && near.is_finite() && far.is_finite()) {
            return Err(Error::InvalidProjection(format!(
                "parameters must be finite (fov={}, aspect={}, near={}, far={})",
                fov, aspect, near, far
            )));
        }
        if fov <= 0.0 || fov >= 360.0 {
            return Err(Error::InvalidProjection(format!("fov must be in (0, 360), got {}", fov)));
        }
        if aspect <= 0.0 {
            return Err(Error::InvalidProjection(format!("aspect must be > 0, got {}", aspect)));
        }
        if near <= 0.0 {
            return Err(Error::InvalidProjection(format!("near must be > 0, got {}", near)));
        }
        if far <= near {
            return Err(Error::InvalidProjection(format!(
                "far ({}) must be greater than near ({})",
                far, near
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
