//! Visual anchors the whole scene is scaled against

use serde::{Deserialize, Serialize};

use super::Config;

/// Earth's chosen visual values
///
/// Every body is scaled by the ratio it has to Earth, so these four numbers
/// fix the overall size and pace of the scene. Chosen once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleAnchors {
    /// Earth's equatorial radius in scene units
    pub earth_visual_radius: f64,

    /// Semi-major axis of Earth's orbit in scene units
    pub earth_visual_semi_major_axis: f64,

    /// Time for one Earth rotation in simulated seconds
    pub earth_visual_rotation_period: f64,

    /// Time for one Earth revolution in simulated seconds
    pub earth_visual_revolution_period: f64,
}

impl ScaleAnchors {
    /// Create a new set of anchors
    #[must_use]
    pub const fn new(
        earth_visual_radius: f64,
        earth_visual_semi_major_axis: f64,
        earth_visual_rotation_period: f64,
        earth_visual_revolution_period: f64,
    ) -> Self {
        Self {
            earth_visual_radius,
            earth_visual_semi_major_axis,
            earth_visual_rotation_period,
            earth_visual_revolution_period,
        }
    }
}

impl Default for ScaleAnchors {
    fn default() -> Self {
        Self::new(0.3, 4.3, 2.0, 10.0)
    }
}

impl Config for ScaleAnchors {}
