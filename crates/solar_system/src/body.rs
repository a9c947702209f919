//! Orbiting body simulation
//!
//! One `OrbitingBody` per planet. It is built once from a catalog entry and
//! the scene anchors, then advanced every frame with `update_rotation` and
//! `update_position`. Everything a renderer needs is exposed as plain values:
//! sizes, angles, positions and a ready-made transform.

use std::f64::consts::{FRAC_PI_2, TAU};

use nalgebra::UnitQuaternion;
use serde::{Deserialize, Serialize};

use crate::catalog::{AphelionSide, CatalogEntry, Rings};
use crate::config::ScaleAnchors;
use crate::foundation::math::{ratio, wrap_angle, Quat, Transform, Vec3};

/// Height over width of the name label plane (720x1280 label textures)
pub const LABEL_ASPECT: f64 = 720.0 / 1280.0;

/// Label scale relative to the body radius
const LABEL_SCALE: f64 = 1.75;
/// Smallest label scale
const LABEL_MIN: f64 = 1.0;
/// Largest label scale
const LABEL_MAX: f64 = 5.0;

/// How an orbit's inclination is applied to its flat position
///
/// The flat point is rotated in the x/y plane, i.e. about the z axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InclinationProjection {
    /// True 2D rotation: both outputs are computed from the unrotated `x`
    #[default]
    Rotation,
    /// The second output reuses the already rotated `x`
    ///
    /// Not a rotation (lengths are not preserved), kept for output that
    /// matches the first web version pixel for pixel.
    Legacy,
}

impl InclinationProjection {
    /// Rotate `(x, y)` by `angle`
    #[must_use]
    pub fn apply(self, x: f64, y: f64, angle: f64) -> (f64, f64) {
        let (sin, cos) = angle.sin_cos();
        let rotated_x = x * cos - y * sin;
        let rotated_y = match self {
            Self::Rotation => x * sin + y * cos,
            Self::Legacy => rotated_x * sin + y * cos,
        };
        (rotated_x, rotated_y)
    }
}

/// Scaled orbit ellipse
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitEllipse {
    /// Semi-major axis
    pub a: f64,
    /// Semi-minor axis, always `a * sqrt(1 - e^2)`
    pub b: f64,
    /// Offset of the ellipse center; only `x` is non-zero
    pub center: Vec3,
    /// Inclination of the orbital plane in radians
    pub inclination: f64,
}

impl OrbitEllipse {
    fn new(a: f64, eccentricity: f64, center_x: f64, inclination: f64) -> Self {
        Self {
            a,
            b: a * (1.0 - eccentricity * eccentricity).sqrt(),
            center: Vec3::new(center_x, 0.0, 0.0),
            inclination,
        }
    }

    /// Eccentricity recovered from the two axes
    #[must_use]
    pub fn eccentricity(&self) -> f64 {
        (1.0 - (self.b * self.b) / (self.a * self.a)).max(0.0).sqrt()
    }

    /// Point on the orbit before the inclination is applied
    #[must_use]
    pub fn flat_point(&self, phi: f64) -> Vec3 {
        Vec3::new(
            self.a * phi.cos() - self.center.x,
            -self.center.y,
            self.b * phi.sin() - self.center.z,
        )
    }

    /// Point on the inclined orbit
    #[must_use]
    pub fn point(&self, phi: f64, projection: InclinationProjection) -> Vec3 {
        let flat = self.flat_point(phi);
        let (x, y) = projection.apply(flat.x, flat.y, self.inclination);
        Vec3::new(x, y, flat.z)
    }
}

/// Simulation state of a single body
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitingBody {
    name: String,

    // Shape
    radius: Vec3,
    tilt: f64,
    rings: Option<Rings>,

    // Rotation
    theta: f64,
    rot_speed: f64,

    // Revolution
    orbit: OrbitEllipse,
    phi: f64,
    rev_speed: f64,
    revolution_active: bool,
    projection: InclinationProjection,
}

impl OrbitingBody {
    /// Bind `entry` to the scene anchors, with `earth` as the reference body
    pub(crate) fn from_catalog(
        entry: &CatalogEntry,
        earth: &CatalogEntry,
        anchors: &ScaleAnchors,
        projection: InclinationProjection,
    ) -> Self {
        // Polar flattening is discarded
        let radius_x = ratio(
            anchors.earth_visual_radius,
            earth.shape.equatorial_radius,
            entry.shape.equatorial_radius,
        );

        let orbit = &entry.orbit;
        let a = ratio(
            anchors.earth_visual_semi_major_axis,
            earth.orbit.semi_major_axis,
            orbit.semi_major_axis,
        );
        let shift = ratio(
            anchors.earth_visual_semi_major_axis,
            earth.orbit.semi_major_axis,
            orbit.aphelion - orbit.semi_major_axis,
        );
        let center_x = match orbit.aphelion_dir {
            AphelionSide::Right => -shift,
            AphelionSide::Left => shift,
        };

        let rot_period = ratio(
            anchors.earth_visual_rotation_period,
            earth.periods.synodic_rotation_period,
            entry.periods.synodic_rotation_period,
        );
        let rev_period = ratio(
            anchors.earth_visual_revolution_period,
            earth.periods.sidereal_orbital_period,
            entry.periods.sidereal_orbital_period,
        );

        Self {
            name: entry.name.clone(),
            radius: Vec3::new(radius_x, radius_x, radius_x),
            // Catalog tilt is measured against the opposite reference axis
            tilt: -entry.shape.axial_tilt,
            rings: entry.rings,
            theta: 0.0,
            rot_speed: TAU / rot_period,
            orbit: OrbitEllipse::new(a, orbit.eccentricity, center_x, orbit.inclination),
            phi: 0.0,
            rev_speed: TAU / rev_period,
            revolution_active: true,
            projection,
        }
    }

    /// Catalog name of the body
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Advance the rotation phase by `dt` simulated seconds
    pub fn update_rotation(&mut self, dt: f64) {
        self.theta = wrap_angle(self.theta + dt * self.rot_speed);
    }

    /// Advance the revolution phase by `dt`; frozen while revolution is disabled
    pub fn update_position(&mut self, dt: f64) {
        if self.revolution_active {
            self.phi = wrap_angle(self.phi + dt * self.rev_speed);
        }
    }

    /// Advance both phases, position first
    pub fn update(&mut self, dt: f64) {
        self.update_position(dt);
        self.update_rotation(dt);
    }

    /// Resume revolving from the current phase
    pub fn enable_revolution(&mut self) {
        self.revolution_active = true;
    }

    /// Freeze the revolution phase
    pub fn disable_revolution(&mut self) {
        self.revolution_active = false;
    }

    /// Enable or disable revolution
    pub fn set_revolution_active(&mut self, active: bool) {
        self.revolution_active = active;
    }

    /// Whether the revolution phase advances on update
    #[must_use]
    pub const fn is_revolution_active(&self) -> bool {
        self.revolution_active
    }

    /// Radius on each axis (always equal)
    #[must_use]
    pub const fn size(&self) -> Vec3 {
        self.radius
    }

    /// Axial tilt in radians
    #[must_use]
    pub const fn tilt(&self) -> f64 {
        self.tilt
    }

    /// Rotation phase in `[0, 2π)`
    #[must_use]
    pub const fn rotation(&self) -> f64 {
        self.theta
    }

    /// Revolution phase in `[0, 2π)`
    #[must_use]
    pub const fn revolution_phase(&self) -> f64 {
        self.phi
    }

    /// Scaled orbit
    #[must_use]
    pub const fn orbit(&self) -> &OrbitEllipse {
        &self.orbit
    }

    /// Ring system, if the body has one
    #[must_use]
    pub const fn rings(&self) -> Option<&Rings> {
        self.rings.as_ref()
    }

    /// Inclination projection in use
    #[must_use]
    pub const fn projection(&self) -> InclinationProjection {
        self.projection
    }

    /// Rotation speed in radians per simulated second
    #[must_use]
    pub const fn rotation_speed(&self) -> f64 {
        self.rot_speed
    }

    /// Revolution speed in radians per simulated second
    #[must_use]
    pub const fn revolution_speed(&self) -> f64 {
        self.rev_speed
    }

    /// Simulated seconds per rotation
    #[must_use]
    pub fn rotation_period(&self) -> f64 {
        TAU / self.rot_speed
    }

    /// Simulated seconds per revolution
    #[must_use]
    pub fn revolution_period(&self) -> f64 {
        TAU / self.rev_speed
    }

    /// Position on the inclined orbit, Sun at the origin
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.orbit.point(self.phi, self.projection)
    }

    /// Uniform scale of the name label
    #[must_use]
    pub fn name_size(&self) -> Vec3 {
        let scale = (LABEL_SCALE * self.radius.x).clamp(LABEL_MIN, LABEL_MAX);
        Vec3::new(scale, scale, scale)
    }

    /// Position of the name label, just above the body
    #[must_use]
    pub fn name_position(&self) -> Vec3 {
        let lift = self.radius.y + self.name_size().y * LABEL_ASPECT / 2.0;
        self.position() + Vec3::new(0.0, lift, 0.0)
    }

    /// Orientation: axial tilt about z, then the spin about the body's own y axis
    #[must_use]
    pub fn orientation(&self) -> Quat {
        UnitQuaternion::from_axis_angle(&Vec3::z_axis(), self.tilt)
            * UnitQuaternion::from_axis_angle(&Vec3::y_axis(), self.theta)
    }

    /// Model transform for rendering the body sphere
    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform::new(self.position(), self.orientation(), self.radius)
    }

    /// Model transform for a flat ring mesh lying in the body's equator
    ///
    /// Scale is the body radius; the ring mesh itself carries the inner and
    /// outer radii.
    #[must_use]
    pub fn ring_transform(&self) -> Option<Transform> {
        self.rings.map(|_| {
            let rotation = UnitQuaternion::from_euler_angles(FRAC_PI_2, self.tilt, 0.0);
            Transform::new(self.position(), rotation, self.radius)
        })
    }
}
