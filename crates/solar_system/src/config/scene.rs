//! Scene configuration

use serde::{Deserialize, Serialize};

use super::{Config, ScaleAnchors};
use crate::body::InclinationProjection;

/// The planets of the built-in catalog, in order from the Sun
pub const DEFAULT_BODIES: [&str; 8] = [
    "mercury",
    "venus",
    "earth",
    "mars",
    "jupiter",
    "saturn",
    "uranus",
    "neptune",
];

/// Which bodies make up a scene and how it is driven
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Body names, looked up in the catalog in this order
    pub bodies: Vec<String>,

    /// Log and skip unknown names instead of failing scene setup
    pub skip_unknown_bodies: bool,

    /// Whether bodies start out revolving
    pub revolution_enabled: bool,

    /// Multiplier applied to every `dt` handed to the scene
    pub time_scale: f64,

    /// Radius of the Sun in scene units (not ratio-scaled)
    pub sun_visual_radius: f64,

    /// How the inclination is applied to orbit positions
    pub projection: InclinationProjection,

    /// Earth anchors
    pub anchors: ScaleAnchors,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            bodies: DEFAULT_BODIES.iter().map(|name| (*name).to_string()).collect(),
            skip_unknown_bodies: false,
            revolution_enabled: true,
            time_scale: 1.0,
            sun_visual_radius: 1.0,
            projection: InclinationProjection::default(),
            anchors: ScaleAnchors::default(),
        }
    }
}

impl Config for SceneConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scene_lists_planets_in_order() {
        let config = SceneConfig::default();
        assert_eq!(config.bodies.len(), 8);
        assert_eq!(config.bodies.first().map(String::as_str), Some("mercury"));
        assert_eq!(config.bodies.last().map(String::as_str), Some("neptune"));
        assert!(config.revolution_enabled);
        assert!(!config.skip_unknown_bodies);
    }

    #[test]
    fn test_scene_from_toml() {
        let config: SceneConfig = toml::from_str(
            r#"
            bodies = ["earth", "pluto"]
            skip_unknown_bodies = true
            projection = "legacy"

            [anchors]
            earth_visual_radius = 1.0
            "#,
        )
        .unwrap();

        assert_eq!(config.bodies, vec!["earth", "pluto"]);
        assert!(config.skip_unknown_bodies);
        assert_eq!(config.projection, InclinationProjection::Legacy);
        assert_eq!(config.anchors.earth_visual_radius, 1.0);
        assert_eq!(config.anchors.earth_visual_semi_major_axis, 4.3);
        assert_eq!(config.time_scale, 1.0);
    }
}
