//! # Solar System
//!
//! An Earth-anchored scale model of the solar system.
//!
//! Real measurements (kilometres, days, radians) are projected into a
//! dimensionless visual scale in which Earth takes four chosen "anchor"
//! values. Every other body keeps the ratio it has to Earth, so the whole
//! system stays proportional while the scene size is tuned by the anchors.
//!
//! ## Features
//!
//! - **Catalog**: Built-in table of the Sun and the eight planets, or custom
//!   catalogs loaded from TOML/RON
//! - **Scaling**: `ScaleController` binds anchors and manufactures bodies
//! - **Simulation**: Closed-form rotation and elliptical revolution per body
//! - **Scene**: `SolarSystem` drives every body and produces per-frame snapshots
//!
//! ## Quick Start
//!
//! ```rust
//! use solar_system::prelude::*;
//!
//! fn main() -> Result<(), LookupError> {
//!     let controller = ScaleController::new(ScaleAnchors::default());
//!     let mut earth = controller.create_body("earth")?;
//!
//!     earth.update(1.0 / 60.0);
//!     let position = earth.position();
//!     assert!(position.x.is_finite());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod catalog;
pub mod body;
pub mod scale;
pub mod scene;
pub mod error;

#[cfg(test)]
mod tests;

pub use body::{InclinationProjection, OrbitEllipse, OrbitingBody};
pub use catalog::{AphelionSide, Catalog, CatalogEntry, StarEntry};
pub use config::{Config, ConfigError, ScaleAnchors, SceneConfig};
pub use error::{CatalogError, LookupError, SceneError};
pub use scale::ScaleController;
pub use scene::{BodyFrame, RingFrame, SolarSystem, SunFrame};

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        body::{InclinationProjection, OrbitEllipse, OrbitingBody},
        catalog::{Catalog, CatalogEntry},
        config::{Config, ScaleAnchors, SceneConfig},
        error::{CatalogError, LookupError, SceneError},
        foundation::math::{Vec3, Transform},
        scale::ScaleController,
        scene::{BodyFrame, SolarSystem},
    };
}
