//! Application configuration

use serde::{Deserialize, Serialize};
use solar_system::{Config, SceneConfig};

/// How the demo drives the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunSettings {
    /// Number of frames to simulate
    pub frames: u64,

    /// Fixed `dt` per frame in seconds (ignored when `real_time` is set)
    pub step: f64,

    /// Use wall-clock deltas instead of the fixed step
    pub real_time: bool,

    /// Frame rate to pace real-time runs at
    pub target_fps: f64,

    /// Log a summary every this many frames (0 disables)
    pub log_every: u64,

    /// Print the last frame as RON on stdout
    pub print_final_frame: bool,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            frames: 600,
            step: 1.0 / 60.0,
            real_time: false,
            target_fps: 60.0,
            log_every: 60,
            print_final_frame: true,
        }
    }
}

/// Top-level demo configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Catalog file to use instead of the built-in table
    pub catalog_path: Option<String>,

    /// Frame loop settings
    pub run: RunSettings,

    /// Scene contents and anchors
    pub scene: SceneConfig,
}

impl Config for AppConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_config_parses() {
        let config: AppConfig =
            toml::from_str(include_str!("../config/orrery.toml")).unwrap();
        assert_eq!(config.run.frames, 600);
        assert!(!config.run.real_time);
        assert_eq!(config.scene.bodies.len(), 8);
        assert_eq!(config.scene.anchors.earth_visual_semi_major_axis, 4.3);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
