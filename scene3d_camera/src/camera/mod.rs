//! Camera module — scene cameras producing modelview and projection matrices.
//!
//! `Camera` holds the state every camera kind shares (position, up, scale,
//! look-at target, matrices, renderer binding). Concrete kinds wrap it and
//! implement `SceneCamera` to supply their projection policy.

mod camera;
mod config;
mod orthographic_camera;
mod perspective_camera;
mod scene_camera;

pub use camera::Camera;
pub use config::PerspectiveConfig;
pub use orthographic_camera::OrthographicCamera;
pub use perspective_camera::PerspectiveCamera;
pub use scene_camera::{SceneCamera, CameraKind};
