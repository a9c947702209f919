//! Reference catalog of real-world measurements
//!
//! All lengths share one unit (kilometres in the built-in table), all angles
//! are radians and all periods are Earth days. A catalog is immutable once
//! built; the built-in one lives for the whole process.

mod builtin;

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::config::ConfigFormat;
use crate::error::{CatalogError, LookupError};

/// Side of the orbit on which the aphelion lies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AphelionSide {
    /// Aphelion towards negative x
    #[serde(rename = "l")]
    Left,
    /// Aphelion towards positive x
    #[serde(rename = "r")]
    Right,
}

/// Body shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Equatorial radius
    pub equatorial_radius: f64,
    /// Polar radius; kept for reference, the model renders spheres
    #[serde(default)]
    pub polar_radius: Option<f64>,
    /// Axial tilt in radians
    pub axial_tilt: f64,
}

/// Heliocentric orbit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitData {
    /// Semi-major axis
    pub semi_major_axis: f64,
    /// Eccentricity in `[0, 1)`
    pub eccentricity: f64,
    /// Distance from the Sun at aphelion
    pub aphelion: f64,
    /// Side on which the aphelion lies
    pub aphelion_dir: AphelionSide,
    /// Inclination in radians
    pub inclination: f64,
}

/// Rotation and revolution periods in Earth days
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Periods {
    /// One revolution relative to the distant stars
    #[serde(alias = "sideral_orbital_period")]
    pub sidereal_orbital_period: f64,
    /// One rotation about the body's own axis
    pub synodic_rotation_period: f64,
}

/// Reflective properties
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Light {
    /// Geometric albedo
    pub geometric_albedo: f64,
}

/// Ring system, radii given as multiples of the body's equatorial radius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rings {
    /// Inner edge
    pub inner_radius: f64,
    /// Outer edge
    pub outer_radius: f64,
}

/// Measurements of one orbiting body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Lookup key
    pub name: String,
    /// Shape
    pub shape: Shape,
    /// Orbit
    pub orbit: OrbitData,
    /// Periods
    pub periods: Periods,
    /// Reflectivity, if known
    #[serde(default)]
    pub light: Option<Light>,
    /// Rings, if any
    #[serde(default)]
    pub rings: Option<Rings>,
}

/// The central star; it has a shape but no orbit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarEntry {
    /// Equatorial radius
    pub equatorial_radius: f64,
    /// Polar radius
    #[serde(default)]
    pub polar_radius: Option<f64>,
}

/// On-disk layout of a catalog
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    sun: Option<StarEntry>,
    bodies: Vec<CatalogEntry>,
}

/// Immutable, name-keyed table of catalog entries
#[derive(Debug, Clone)]
pub struct Catalog {
    sun: Option<StarEntry>,
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// The built-in catalog: the Sun and the eight planets
    pub fn builtin() -> &'static Self {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(|| Self::from_trusted(Some(builtin::sun()), builtin::planets()))
    }

    /// Build a catalog from entries, validating each one
    pub fn new(sun: Option<StarEntry>, entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        if let Some(sun) = &sun {
            validate_star(sun)?;
        }
        let mut seen = HashSet::new();
        for entry in &entries {
            validate_entry(entry)?;
            if !seen.insert(normalize(&entry.name)) {
                return Err(invalid(&entry.name, "duplicate name"));
            }
        }
        Ok(Self::from_trusted(sun, entries))
    }

    fn from_trusted(sun: Option<StarEntry>, entries: Vec<CatalogEntry>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (normalize(&entry.name), i))
            .collect();
        Self { sun, entries, index }
    }

    /// Load and validate a catalog from a `.toml` or `.ron` file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| CatalogError::UnsupportedFormat(path.display().to_string()))?;
        let contents = std::fs::read_to_string(path)?;
        let file: CatalogFile = format.parse(&contents).map_err(CatalogError::Parse)?;

        let catalog = Self::new(file.sun, file.bodies)?;
        log::info!("Loaded catalog with {} bodies from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Save the catalog to a `.toml` or `.ron` file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), CatalogError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| CatalogError::UnsupportedFormat(path.display().to_string()))?;
        let file = CatalogFile {
            sun: self.sun,
            bodies: self.entries.clone(),
        };
        let contents = format.render(&file).map_err(CatalogError::Parse)?;

        std::fs::write(path, contents).map_err(CatalogError::Io)
    }

    /// Look up a body by name (case-insensitive)
    pub fn get(&self, name: &str) -> Result<&CatalogEntry, LookupError> {
        self.index
            .get(&normalize(name))
            .map(|&i| &self.entries[i])
            .ok_or_else(|| LookupError::new(name))
    }

    /// Whether `name` is in the catalog
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&normalize(name))
    }

    /// Body names in catalog order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// All entries in catalog order
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// The central star, if the catalog has one
    #[must_use]
    pub const fn sun(&self) -> Option<&StarEntry> {
        self.sun.as_ref()
    }

    /// Number of orbiting bodies
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no orbiting bodies
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

fn invalid(body: &str, reason: impl Into<String>) -> CatalogError {
    CatalogError::Invalid {
        body: body.to_string(),
        reason: reason.into(),
    }
}

fn positive(body: &str, field: &str, value: f64) -> Result<(), CatalogError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(body, format!("{field} must be positive and finite, got {value}")))
    }
}

fn validate_star(sun: &StarEntry) -> Result<(), CatalogError> {
    positive("sun", "equatorial_radius", sun.equatorial_radius)
}

fn validate_entry(entry: &CatalogEntry) -> Result<(), CatalogError> {
    let name = entry.name.as_str();
    if name.trim().is_empty() {
        return Err(invalid(name, "empty name"));
    }
    positive(name, "equatorial_radius", entry.shape.equatorial_radius)?;
    positive(name, "semi_major_axis", entry.orbit.semi_major_axis)?;
    positive(name, "sidereal_orbital_period", entry.periods.sidereal_orbital_period)?;
    positive(name, "synodic_rotation_period", entry.periods.synodic_rotation_period)?;

    let orbit = &entry.orbit;
    if !(0.0..1.0).contains(&orbit.eccentricity) {
        return Err(invalid(name, format!("eccentricity {} outside [0, 1)", orbit.eccentricity)));
    }
    if !orbit.aphelion.is_finite() || orbit.aphelion < orbit.semi_major_axis {
        return Err(invalid(name, "aphelion is closer than the semi-major axis"));
    }
    if !entry.shape.axial_tilt.is_finite() || !orbit.inclination.is_finite() {
        return Err(invalid(name, "angles must be finite"));
    }
    if let Some(rings) = &entry.rings {
        positive(name, "rings.inner_radius", rings.inner_radius)?;
        if rings.outer_radius <= rings.inner_radius {
            return Err(invalid(name, "ring outer radius must exceed inner radius"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn earth() -> CatalogEntry {
        Catalog::builtin().get("earth").unwrap().clone()
    }

    #[test]
    fn test_builtin_has_planets_in_order() {
        let catalog = Catalog::builtin();
        let names: Vec<_> = catalog.names().collect();
        assert_eq!(
            names,
            ["mercury", "venus", "earth", "mars", "jupiter", "saturn", "uranus", "neptune"]
        );
        assert!(catalog.sun().is_some());
        assert!(!catalog.contains("sun"));
    }

    #[test]
    fn test_builtin_entries_are_valid() {
        let catalog = Catalog::builtin();
        let rebuilt = Catalog::new(catalog.sun().copied(), catalog.entries().to_vec());
        assert!(rebuilt.is_ok());
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get("mercury").unwrap().shape.equatorial_radius, 2440.5);
        assert_eq!(catalog.get(" Earth ").unwrap().name, "earth");
        assert_eq!(catalog.get("pluto").unwrap_err(), LookupError::new("pluto"));
    }

    #[test]
    fn test_only_saturn_has_rings() {
        let ringed: Vec<_> = Catalog::builtin()
            .entries()
            .iter()
            .filter(|entry| entry.rings.is_some())
            .map(|entry| entry.name.as_str())
            .collect();
        assert_eq!(ringed, ["saturn"]);
    }

    #[test]
    fn test_rejects_bad_eccentricity() {
        let mut entry = earth();
        entry.orbit.eccentricity = 1.0;
        let result = Catalog::new(None, vec![entry]);
        assert!(matches!(result, Err(CatalogError::Invalid { body, .. }) if body == "earth"));
    }

    #[test]
    fn test_rejects_short_aphelion() {
        let mut entry = earth();
        entry.orbit.aphelion = entry.orbit.semi_major_axis / 2.0;
        assert!(Catalog::new(None, vec![entry]).is_err());
    }

    #[test]
    fn test_rejects_zero_period() {
        let mut entry = earth();
        entry.periods.synodic_rotation_period = 0.0;
        assert!(Catalog::new(None, vec![entry]).is_err());
    }

    #[test]
    fn test_rejects_duplicates() {
        let mut shouted = earth();
        shouted.name = "EARTH".to_string();
        assert!(Catalog::new(None, vec![earth(), shouted]).is_err());
    }

    #[test]
    fn test_parses_original_field_spelling() {
        let periods: Periods = toml::from_str(
            "sideral_orbital_period = 87.9691\nsynodic_rotation_period = 176.0",
        )
        .unwrap();
        assert_eq!(periods.sidereal_orbital_period, 87.9691);
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir()
            .join(format!("solar_system_{}_catalog.ron", std::process::id()));
        Catalog::builtin().save_to_file(&path).unwrap();
        let loaded = Catalog::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.entries(), Catalog::builtin().entries());
        assert_eq!(loaded.sun(), Catalog::builtin().sun());
    }
}
