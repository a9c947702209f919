//! Scene driver
//!
//! `SolarSystem` owns the bodies of one scene, advances them together and
//! hands the renderer a snapshot per frame. It knows nothing about meshes or
//! cameras; the snapshot is plain data.

use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use crate::body::OrbitingBody;
use crate::catalog::Catalog;
use crate::config::SceneConfig;
use crate::error::{LookupError, SceneError};
use crate::foundation::math::Vec3;
use crate::scale::ScaleController;

/// Render data for one body in one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyFrame {
    /// Catalog name
    pub name: String,
    /// Radius on each axis
    pub size: Vec3,
    /// Axial tilt
    pub tilt: f64,
    /// Rotation phase
    pub rotation: f64,
    /// Revolution phase
    pub revolution_phase: f64,
    /// Position on the orbit
    pub position: Vec3,
    /// Label scale
    pub name_size: Vec3,
    /// Label position
    pub name_position: Vec3,
}

impl From<&OrbitingBody> for BodyFrame {
    fn from(body: &OrbitingBody) -> Self {
        Self {
            name: body.name().to_string(),
            size: body.size(),
            tilt: body.tilt(),
            rotation: body.rotation(),
            revolution_phase: body.revolution_phase(),
            position: body.position(),
            name_size: body.name_size(),
            name_position: body.name_position(),
        }
    }
}

/// Render data for the Sun
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunFrame {
    /// Always the origin
    pub position: Vec3,
    /// Radius on each axis
    pub size: Vec3,
}

/// Render data for a ring system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingFrame {
    /// Body the rings belong to
    pub body: String,
    /// Center of the rings (the body's position)
    pub position: Vec3,
    /// Scale (the body's radius)
    pub scale: Vec3,
    /// Euler angles (roll, pitch, yaw): flat in the body's equator
    pub euler: Vec3,
    /// Inner edge in body radii
    pub inner_radius: f64,
    /// Outer edge in body radii
    pub outer_radius: f64,
}

/// All bodies of a scene, driven together
#[derive(Debug, Clone)]
pub struct SolarSystem {
    bodies: Vec<OrbitingBody>,
    sun_radius: f64,
    time_scale: f64,
    elapsed: f64,
    frame_count: u64,
}

impl SolarSystem {
    /// Build the scene from the built-in catalog
    pub fn new(config: &SceneConfig) -> Result<Self, SceneError> {
        Self::with_catalog(config, Catalog::builtin())
    }

    /// Build the scene from a custom catalog
    pub fn with_catalog(config: &SceneConfig, catalog: &Catalog) -> Result<Self, SceneError> {
        let controller = ScaleController::with_catalog(config.anchors, catalog)
            .with_projection(config.projection);

        let mut bodies = Vec::with_capacity(config.bodies.len());
        for name in &config.bodies {
            match controller.create_body(name) {
                Ok(mut body) => {
                    body.set_revolution_active(config.revolution_enabled);
                    bodies.push(body);
                }
                Err(err) if config.skip_unknown_bodies => {
                    log::warn!("Skipping body: {err}");
                }
                Err(err) => return Err(err.into()),
            }
        }

        if bodies.is_empty() {
            return Err(SceneError::Empty);
        }

        log::info!(
            "Solar system ready with {} bodies ({:?} projection, time scale {})",
            bodies.len(),
            config.projection,
            config.time_scale
        );

        Ok(Self {
            bodies,
            sun_radius: config.sun_visual_radius,
            time_scale: config.time_scale,
            elapsed: 0.0,
            frame_count: 0,
        })
    }

    /// Advance every body by `dt` scaled by the configured time scale
    pub fn update(&mut self, dt: f64) {
        let dt = dt * self.time_scale;
        for body in &mut self.bodies {
            body.update(dt);
        }
        self.elapsed += dt;
        self.frame_count += 1;
    }

    /// Enable or disable revolution on every body
    pub fn set_revolution_active(&mut self, active: bool) {
        for body in &mut self.bodies {
            body.set_revolution_active(active);
        }
    }

    /// Look up a body of this scene
    pub fn body(&self, name: &str) -> Result<&OrbitingBody, LookupError> {
        self.bodies
            .iter()
            .find(|body| body.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| LookupError::new(name))
    }

    /// Look up a body of this scene for mutation
    pub fn body_mut(&mut self, name: &str) -> Result<&mut OrbitingBody, LookupError> {
        self.bodies
            .iter_mut()
            .find(|body| body.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| LookupError::new(name))
    }

    /// Bodies in scene order
    #[must_use]
    pub fn bodies(&self) -> &[OrbitingBody] {
        &self.bodies
    }

    /// Number of bodies
    #[must_use]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the scene has no bodies (never true for a constructed scene)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Simulated time since construction
    #[must_use]
    pub const fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Number of updates since construction
    #[must_use]
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Snapshot of every body, in scene order
    #[must_use]
    pub fn frame(&self) -> Vec<BodyFrame> {
        self.bodies.iter().map(BodyFrame::from).collect()
    }

    /// The Sun, fixed at the origin
    #[must_use]
    pub fn sun_frame(&self) -> SunFrame {
        SunFrame {
            position: Vec3::zeros(),
            size: Vec3::repeat(self.sun_radius),
        }
    }

    /// Rings of `name`, or `None` if it has none
    pub fn ring_frame(&self, name: &str) -> Result<Option<RingFrame>, LookupError> {
        let body = self.body(name)?;
        Ok(body.rings().map(|rings| RingFrame {
            body: body.name().to_string(),
            position: body.position(),
            scale: body.size(),
            euler: Vec3::new(FRAC_PI_2, body.tilt(), 0.0),
            inner_radius: rings.inner_radius,
            outer_radius: rings.outer_radius,
        }))
    }

    /// Rings of every body that has them
    #[must_use]
    pub fn ring_frames(&self) -> Vec<RingFrame> {
        self.bodies
            .iter()
            .filter_map(|body| self.ring_frame(body.name()).ok().flatten())
            .collect()
    }
}
