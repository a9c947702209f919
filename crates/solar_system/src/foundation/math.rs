//! Math utilities and types
//!
//! Astronomical magnitudes span ten orders of magnitude (kilometres of radius
//! against billions of kilometres of orbit), so everything here is `f64`.

use std::f64::consts::TAU;

pub use nalgebra::{
    Vector3,
    Matrix4,
    Quaternion,
    Unit,
};

/// 3D vector type
pub type Vec3 = Vector3<f64>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f64>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f64>>;

/// Project a real quantity into visual units anchored to Earth.
///
/// Earth's `earth_actual` maps to `earth_visual`; any other body keeps the
/// ratio it has to Earth.
#[must_use]
pub fn ratio(earth_visual: f64, earth_actual: f64, body_actual: f64) -> f64 {
    earth_visual * body_actual / earth_actual
}

/// Wrap an angle into `[0, 2π)`.
///
/// Only the range is normalised; the caller's step size is not checked.
#[must_use]
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Transform representing position, rotation, and scale
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    #[must_use]
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform from its three parts
    #[must_use]
    pub const fn new(position: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self { position, rotation, scale }
    }

    /// Convert to a transformation matrix
    #[must_use]
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// Apply this transform to a point
    #[must_use]
    pub fn transform_point(&self, point: &nalgebra::Point3<f64>) -> nalgebra::Point3<f64> {
        self.to_matrix().transform_point(point)
    }
}
