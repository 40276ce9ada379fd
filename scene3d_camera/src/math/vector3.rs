/// Vector3 — 3-component vector with an explicit mutation API.
///
/// Components only change through `set_components` (which reports whether
/// anything changed) or by replacing the whole value. There are no change
/// callbacks: the owner decides what to recompute after a mutation.

use std::fmt;
use std::ops::{Mul, Neg};
use glam::Vec3;
use crate::error::{Error, Result};

/// 3-component `f32` vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    inner: Vec3,
}

impl Vector3 {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self { inner: Vec3::ZERO };
    /// Up vector (0, 1, 0).
    pub const UP: Self = Self { inner: Vec3::Y };
    /// Forward vector (0, 0, -1), into the screen in right-handed coords.
    pub const FORWARD: Self = Self { inner: Vec3::NEG_Z };

    /// Create a new Vector3.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { inner: Vec3::new(x, y, z) }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.inner.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.inner.y
    }

    #[inline]
    pub fn z(&self) -> f32 {
        self.inner.z
    }

    /// Overwrite all three components.
    ///
    /// Returns `true` if at least one component differs from its previous value.
    pub fn set_components(&mut self, x: f32, y: f32, z: f32) -> bool {
        let next = Vec3::new(x, y, z);
        if next == self.inner {
            return false;
        }
        self.inner = next;
        true
    }

    /// Underlying glam vector.
    #[inline]
    pub fn as_vec3(&self) -> Vec3 {
        self.inner
    }

    #[inline]
    pub fn to_array(&self) -> [f32; 3] {
        self.inner.to_array()
    }

    /// Component-wise comparison within `max_abs_diff`.
    pub fn abs_diff_eq(&self, other: Vector3, max_abs_diff: f32) -> bool {
        self.inner.abs_diff_eq(other.inner, max_abs_diff)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: f32) -> Vector3 {
        Vector3 { inner: self.inner * rhs }
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Vector3 { inner: -self.inner }
    }
}

impl From<Vec3> for Vector3 {
    fn from(inner: Vec3) -> Self {
        Self { inner }
    }
}

impl From<Vector3> for Vec3 {
    fn from(v: Vector3) -> Self {
        v.inner
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from(a: [f32; 3]) -> Self {
        Self { inner: Vec3::from_array(a) }
    }
}

impl From<(f32, f32, f32)> for Vector3 {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self::new(x, y, z)
    }
}

/// Runtime input (e.g. a list read from a scene description).
///
/// Exactly three finite components are required.
impl TryFrom<&[f32]> for Vector3 {
    type Error = Error;

    fn try_from(values: &[f32]) -> Result<Self> {
        let [x, y, z] = values else {
            return Err(Error::InvalidVector(format!(
                "expected 3 components, got {}",
                values.len()
            )));
        };
        if !(x.is_finite() && y.is_finite() && z.is_finite()) {
            return Err(Error::InvalidVector(format!(
                "components must be finite, got ({}, {}, {})",
                x, y, z
            )));
        }
        Ok(Self::new(*x, *y, *z))
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.inner.x, self.inner.y, self.inner.z)
    }
}

#[cfg(test)]
#[path = "vector3_tests.rs"]
mod tests;
