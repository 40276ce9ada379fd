//! Scene3D camera demo
//!
//! Binds a perspective camera to a console renderer, orbits it around the
//! origin and simulates a window resize. Camera logs are forwarded to the
//! `log` facade; set `RUST_LOG=trace` to see every recomputation.

use std::sync::{Arc, Mutex};

use scene3d_camera::glam::Vec3;
use scene3d_camera::scene3d::log::{self as camera_log, LogEntry, LogSeverity, Logger};
use scene3d_camera::scene3d::render::{CameraMatrices, CameraRenderer, MatrixChange};
use scene3d_camera::scene3d::{PerspectiveCamera, PerspectiveConfig, Result, SceneCamera};

/// Forwards camera log entries to the `log` facade.
struct LogFacade;

impl Logger for LogFacade {
    fn log(&self, entry: &LogEntry) {
        let level = match entry.severity {
            LogSeverity::Trace => log::Level::Trace,
            LogSeverity::Debug => log::Level::Debug,
            LogSeverity::Info => log::Level::Info,
            LogSeverity::Warn => log::Level::Warn,
            LogSeverity::Error => log::Level::Error,
        };
        match (entry.file, entry.line) {
            (Some(file), Some(line)) => {
                log::log!(target: entry.source.as_str(), level, "{} ({}:{})", entry.message, file, line)
            }
            _ => log::log!(target: entry.source.as_str(), level, "{}", entry.message),
        }
    }
}

/// Renderer stand-in that prints what it would upload.
#[derive(Default)]
struct ConsoleRenderer {
    uploads: usize,
    uploaded_bytes: usize,
}

impl CameraRenderer for ConsoleRenderer {
    fn update_matrices(&mut self, changed: MatrixChange, matrices: &CameraMatrices) {
        self.uploads += 1;
        self.uploaded_bytes += matrices.as_bytes().len();

        let eye = matrices.modelview.inverse().transform_point3(Vec3::ZERO);
        log::info!(
            "upload #{} {:?}: eye=({:.2}, {:.2}, {:.2}) proj[0][0]={:.4}",
            self.uploads,
            changed,
            eye.x,
            eye.y,
            eye.z,
            matrices.projection.x_axis.x
        );
    }
}

fn run() -> Result<()> {
    let renderer = Arc::new(Mutex::new(ConsoleRenderer::default()));

    let mut camera = PerspectiveCamera::from_config(&PerspectiveConfig {
        aspect: 1280.0 / 720.0,
        ..PerspectiveConfig::default()
    })?;
    camera.camera_mut().bind_to(&renderer);

    for step in 0..12 {
        let angle = step as f32 * std::f32::consts::TAU / 12.0;
        camera
            .camera_mut()
            .set_position([angle.cos() * 8.0, 3.0, angle.sin() * 8.0]);
    }
    camera.camera_mut().look_at([0.0, 0.0, 0.0]);

    // Window resized to 1920x1080, then to a portrait layout
    camera.set_aspect(1920.0 / 1080.0)?;
    camera.set_aspect(1080.0 / 1920.0)?;

    // A degenerate resize is rejected and leaves the camera as it was
    if let Err(error) = camera.set_aspect(0.0) {
        log::warn!("resize ignored: {}", error);
    }

    if let Ok(renderer) = renderer.lock() {
        log::info!(
            "{} uploads, {} bytes total",
            renderer.uploads,
            renderer.uploaded_bytes
        );
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    camera_log::set_logger(LogFacade);

    if let Err(error) = run() {
        log::error!("demo failed: {}", error);
        std::process::exit(1);
    }
}
