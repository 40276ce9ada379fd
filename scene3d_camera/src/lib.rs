/*!
# Scene3D Camera

Cameras for a 3D scene graph: they track a viewpoint and produce the
modelview and projection matrices a renderer consumes.

## Architecture

- **Camera**: shared camera state (position, up, scale, look-at target,
  matrices, renderer binding)
- **SceneCamera**: trait implemented by every camera kind
- **PerspectiveCamera**: symmetric perspective frustum
- **OrthographicCamera**: declared kind, projection not implemented
- **CameraRenderer**: trait a renderer implements to be notified of matrix changes

Every mutation recomputes the dependent matrix synchronously and sends one
notification to the bound renderer, if any.
*/

// Internal modules
mod error;
pub mod log;
pub mod math;
pub mod camera;
pub mod renderer;

// Main scene3d namespace module
pub mod scene3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Cameras
    pub use crate::camera::{
        Camera, SceneCamera, CameraKind,
        PerspectiveCamera, PerspectiveConfig, OrthographicCamera,
    };

    // Math types
    pub use crate::math::Vector3;

    // Logging sub-module (types and logger slot, NOT macros)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger,
            set_logger, reset_logger,
        };
    }

    // Renderer-facing sub-module
    pub mod render {
        pub use crate::renderer::{CameraRenderer, CameraMatrices, MatrixChange};
    }
}

// Re-export math library at crate root
pub use glam;
