//! Renderer-facing types.
//!
//! The crate does not render anything. A renderer implements
//! `CameraRenderer` and is notified by the cameras bound to it whenever
//! their matrices change.

mod camera_renderer;
pub(crate) mod mock_renderer;

pub use camera_renderer::{CameraRenderer, CameraMatrices, MatrixChange};
