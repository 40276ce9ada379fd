//! Math module — thin layer over glam.
//!
//! `Vector3` adds an explicit mutation API on top of `glam::Vec3`; matrices
//! are plain `glam::Mat4` built by the helpers in `matrix`.

mod vector3;
mod matrix;

pub use vector3::Vector3;
pub use matrix::{translation, perspective};
