//! Built-in measurements for the Sun and the eight planets
//!
//! Kilometres, radians and Earth days.

use super::{AphelionSide, CatalogEntry, Light, OrbitData, Periods, Rings, Shape, StarEntry};

pub(super) const fn sun() -> StarEntry {
    StarEntry {
        equatorial_radius: 696_342.0,
        polar_radius: Some(696_342.0),
    }
}

/// Measurements of a single planet, flattened for the table below
struct Row {
    name: &'static str,
    equatorial_radius: f64,
    polar_radius: f64,
    axial_tilt: f64,
    semi_major_axis: f64,
    eccentricity: f64,
    aphelion: f64,
    aphelion_dir: AphelionSide,
    inclination: f64,
    sidereal_orbital_period: f64,
    synodic_rotation_period: f64,
    geometric_albedo: f64,
}

impl Row {
    fn into_entry(self) -> CatalogEntry {
        CatalogEntry {
            name: self.name.to_string(),
            shape: Shape {
                equatorial_radius: self.equatorial_radius,
                polar_radius: Some(self.polar_radius),
                axial_tilt: self.axial_tilt,
            },
            orbit: OrbitData {
                semi_major_axis: self.semi_major_axis,
                eccentricity: self.eccentricity,
                aphelion: self.aphelion,
                aphelion_dir: self.aphelion_dir,
                inclination: self.inclination,
            },
            periods: Periods {
                sidereal_orbital_period: self.sidereal_orbital_period,
                synodic_rotation_period: self.synodic_rotation_period,
            },
            light: Some(Light {
                geometric_albedo: self.geometric_albedo,
            }),
            rings: None,
        }
    }
}

pub(super) fn planets() -> Vec<CatalogEntry> {
    use AphelionSide::{Left, Right};

    let rows = [
        Row {
            name: "mercury",
            equatorial_radius: 2440.5,
            polar_radius: 2438.3,
            axial_tilt: 0.000_593_41,
            semi_major_axis: 57_909_050.0,
            eccentricity: 0.205_630,
            aphelion: 69_816_900.0,
            aphelion_dir: Right,
            inclination: 0.058_992_13,
            sidereal_orbital_period: 87.9691,
            synodic_rotation_period: 176.0,
            geometric_albedo: 0.142,
        },
        Row {
            name: "venus",
            equatorial_radius: 6051.8,
            polar_radius: 6051.8,
            axial_tilt: 3.095_515_961_3,
            semi_major_axis: 108_208_000.0,
            eccentricity: 0.006_772,
            aphelion: 108_939_000.0,
            aphelion_dir: Right,
            inclination: 0.001_175_82,
            sidereal_orbital_period: 224.701,
            synodic_rotation_period: 116.75,
            geometric_albedo: 0.689,
        },
        Row {
            name: "earth",
            equatorial_radius: 6378.137,
            polar_radius: 6356.752,
            axial_tilt: 0.409_092_62,
            semi_major_axis: 149_598_023.0,
            eccentricity: 0.016_708_6,
            aphelion: 152_097_597.0,
            aphelion_dir: Left,
            inclination: 0.124_878_31,
            sidereal_orbital_period: 365.256_363,
            synodic_rotation_period: 1.0,
            geometric_albedo: 0.367,
        },
        Row {
            name: "mars",
            equatorial_radius: 3396.2,
            polar_radius: 3376.2,
            axial_tilt: 0.439_648_44,
            semi_major_axis: 227_939_366.0,
            eccentricity: 0.0934,
            aphelion: 249_261_000.0,
            aphelion_dir: Left,
            inclination: 0.098_611_10,
            sidereal_orbital_period: 686.980,
            synodic_rotation_period: 1.027_491_25,
            geometric_albedo: 0.170,
        },
        Row {
            name: "jupiter",
            equatorial_radius: 71_492.0,
            polar_radius: 66_854.0,
            axial_tilt: 0.054_628_81,
            semi_major_axis: 778_479_000.0,
            eccentricity: 0.0489,
            aphelion: 816_363_000.0,
            aphelion_dir: Right,
            inclination: 0.106_290_60,
            sidereal_orbital_period: 4332.59,
            synodic_rotation_period: 0.413_575,
            geometric_albedo: 0.538,
        },
        Row {
            name: "saturn",
            equatorial_radius: 60_268.0,
            polar_radius: 54_364.0,
            axial_tilt: 0.466_526_51,
            semi_major_axis: 1_433_530_000.0,
            eccentricity: 0.0565,
            aphelion: 1_514_500_000.0,
            aphelion_dir: Right,
            inclination: 0.096_167_64,
            sidereal_orbital_period: 10_759.22,
            synodic_rotation_period: 0.439_304_2,
            geometric_albedo: 0.499,
        },
        Row {
            name: "uranus",
            equatorial_radius: 25_559.0,
            polar_radius: 24_973.0,
            axial_tilt: 1.741_315_00,
            semi_major_axis: 2_870_971_632.1,
            eccentricity: 0.047_17,
            aphelion: 3_006_393_609.0,
            aphelion_dir: Right,
            inclination: 0.113_097_30,
            sidereal_orbital_period: 30_688.5,
            synodic_rotation_period: 0.718_32,
            geometric_albedo: 0.488,
        },
        Row {
            name: "neptune",
            equatorial_radius: 24_764.0,
            polar_radius: 24_341.0,
            axial_tilt: 0.494_277_24,
            semi_major_axis: 4_498_408_000.0,
            eccentricity: 0.008_678,
            aphelion: 4_537_300_000.0,
            aphelion_dir: Right,
            inclination: 0.112_224_70,
            sidereal_orbital_period: 60_195.0,
            synodic_rotation_period: 0.671_25,
            geometric_albedo: 0.442,
        },
    ];

    rows.into_iter()
        .map(|row| {
            let ringed = row.name == "saturn";
            let mut entry = row.into_entry();
            if ringed {
                entry.rings = Some(Rings {
                    inner_radius: 1.0,
                    outer_radius: 2.0,
                });
            }
            entry
        })
        .collect()
}
