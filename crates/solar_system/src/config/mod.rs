//! Configuration system
//!
//! Anchors and scene settings are plain serde structs that load from and save
//! to either TOML or RON, picked by file extension.

mod anchors;
mod scene;

pub use anchors::ScaleAnchors;
pub use scene::SceneConfig;

pub use serde::{Serialize, Deserialize};

use std::path::Path;

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml`
    Toml,
    /// `.ron`
    Ron,
}

impl ConfigFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Some(Self::Toml),
            Some("ron") => Some(Self::Ron),
            _ => None,
        }
    }

    /// Parse `contents` in this format
    pub fn parse<T: for<'de> Deserialize<'de>>(self, contents: &str) -> Result<T, String> {
        match self {
            Self::Toml => toml::from_str(contents).map_err(|e| e.to_string()),
            Self::Ron => ron::from_str(contents).map_err(|e| e.to_string()),
        }
    }

    /// Render `value` in this format
    pub fn render<T: Serialize>(self, value: &T) -> Result<String, String> {
        match self {
            Self::Toml => toml::to_string_pretty(value).map_err(|e| e.to_string()),
            Self::Ron => ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())
                .map_err(|e| e.to_string()),
        }
    }
}

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.display().to_string()))?;
        let contents = std::fs::read_to_string(path)?;

        format.parse(&contents).map_err(ConfigError::Parse)
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.display().to_string()))?;
        let contents = format.render(self).map_err(ConfigError::Serialize)?;

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("solar_system_{}_{name}", std::process::id()))
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(ConfigFormat::from_path(Path::new("scene.toml")), Some(ConfigFormat::Toml));
        assert_eq!(ConfigFormat::from_path(Path::new("scene.ron")), Some(ConfigFormat::Ron));
        assert_eq!(ConfigFormat::from_path(Path::new("scene.json")), None);
        assert_eq!(ConfigFormat::from_path(Path::new("scene")), None);
    }

    #[test]
    fn test_anchors_toml_file_round_trip() {
        let path = temp_path("anchors.toml");
        let anchors = ScaleAnchors::new(0.5, 6.0, 3.0, 12.0);

        anchors.save_to_file(&path).unwrap();
        let loaded = ScaleAnchors::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, anchors);
    }

    #[test]
    fn test_scene_ron_file_round_trip() {
        let path = temp_path("scene.ron");
        let mut scene = SceneConfig::default();
        scene.bodies = vec!["earth".to_string(), "mars".to_string()];
        scene.time_scale = 2.0;

        scene.save_to_file(&path).unwrap();
        let loaded = SceneConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, scene);
    }

    #[test]
    fn test_unsupported_extension() {
        let result = ScaleAnchors::load_from_file("anchors.json");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = ScaleAnchors::load_from_file(temp_path("missing.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_parse_error() {
        let path = temp_path("broken.toml");
        std::fs::write(&path, "earth_visual_radius = \"wide\"").unwrap();
        let result = ScaleAnchors::load_from_file(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
