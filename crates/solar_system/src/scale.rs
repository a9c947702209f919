//! Scale controller: binds anchors to a catalog and builds bodies

use crate::body::{InclinationProjection, OrbitingBody};
use crate::catalog::Catalog;
use crate::config::ScaleAnchors;
use crate::error::LookupError;

/// Name of the reference body every ratio is taken against
pub const REFERENCE_BODY: &str = "earth";

/// Factory for `OrbitingBody` instances sharing one set of anchors
///
/// Creating a body never changes the controller; every call returns a fresh,
/// independent instance.
#[derive(Debug, Clone, Copy)]
pub struct ScaleController<'a> {
    anchors: ScaleAnchors,
    catalog: &'a Catalog,
    projection: InclinationProjection,
}

impl ScaleController<'static> {
    /// Bind `anchors` to the built-in catalog
    #[must_use]
    pub fn new(anchors: ScaleAnchors) -> Self {
        Self::with_catalog(anchors, Catalog::builtin())
    }
}

impl<'a> ScaleController<'a> {
    /// Bind `anchors` to a custom catalog
    #[must_use]
    pub fn with_catalog(anchors: ScaleAnchors, catalog: &'a Catalog) -> Self {
        Self {
            anchors,
            catalog,
            projection: InclinationProjection::default(),
        }
    }

    /// Use `projection` for every body created from now on
    #[must_use]
    pub fn with_projection(mut self, projection: InclinationProjection) -> Self {
        self.projection = projection;
        self
    }

    /// The bound anchors
    #[must_use]
    pub const fn anchors(&self) -> &ScaleAnchors {
        &self.anchors
    }

    /// The catalog bodies are looked up in
    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Build the body called `name`
    ///
    /// Fails if `name` is unknown, or if the catalog has no Earth to scale
    /// against.
    pub fn create_body(&self, name: &str) -> Result<OrbitingBody, LookupError> {
        let entry = self.catalog.get(name)?;
        let earth = self.catalog.get(REFERENCE_BODY)?;

        let body = OrbitingBody::from_catalog(entry, earth, &self.anchors, self.projection);
        log::debug!(
            "Created {}: radius {:.4}, a {:.4}, b {:.4}, rotation period {:.3}s, revolution period {:.3}s",
            body.name(),
            body.size().x,
            body.orbit().a,
            body.orbit().b,
            body.rotation_period(),
            body.revolution_period()
        );
        Ok(body)
    }

    /// Build several bodies in order, stopping at the first unknown name
    pub fn create_bodies<I, S>(&self, names: I) -> Result<Vec<OrbitingBody>, LookupError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| self.create_body(name.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogEntry;

    fn earth_entry() -> CatalogEntry {
        Catalog::builtin().get("earth").unwrap().clone()
    }

    #[test]
    fn test_unknown_body_is_lookup_error() {
        let controller = ScaleController::new(ScaleAnchors::default());
        assert_eq!(controller.create_body("pluto"), Err(LookupError::new("pluto")));
    }

    #[test]
    fn test_sun_is_not_an_orbiting_body() {
        let controller = ScaleController::new(ScaleAnchors::default());
        assert!(controller.create_body("sun").is_err());
    }

    #[test]
    fn test_repeated_creation_is_independent() {
        let controller = ScaleController::new(ScaleAnchors::default());
        let mut first = controller.create_body("mars").unwrap();
        let second = controller.create_body("mars").unwrap();

        first.update(3.0);
        first.disable_revolution();

        assert_eq!(second.revolution_phase(), 0.0);
        assert_eq!(second.rotation(), 0.0);
        assert!(second.is_revolution_active());
        assert_ne!(first, second);
    }

    #[test]
    fn test_create_bodies_in_order() {
        let controller = ScaleController::new(ScaleAnchors::default());
        let bodies = controller.create_bodies(["venus", "earth"]).unwrap();
        let names: Vec<_> = bodies.iter().map(OrbitingBody::name).collect();
        assert_eq!(names, ["venus", "earth"]);

        let failed = controller.create_bodies(["venus", "vulcan", "earth"]);
        assert_eq!(failed, Err(LookupError::new("vulcan")));
    }

    #[test]
    fn test_catalog_without_earth_cannot_scale() {
        let mut mars = earth_entry();
        mars.name = "mars".to_string();
        let catalog = Catalog::new(None, vec![mars]).unwrap();
        let controller = ScaleController::with_catalog(ScaleAnchors::default(), &catalog);

        assert_eq!(controller.create_body("mars"), Err(LookupError::new(REFERENCE_BODY)));
    }

    #[test]
    fn test_circular_orbit_has_equal_axes() {
        let mut circle = earth_entry();
        circle.name = "circle".to_string();
        circle.orbit.eccentricity = 0.0;
        circle.orbit.aphelion = circle.orbit.semi_major_axis;
        let catalog = Catalog::new(None, vec![earth_entry(), circle]).unwrap();

        let body = ScaleController::with_catalog(ScaleAnchors::default(), &catalog)
            .create_body("circle")
            .unwrap();
        assert_eq!(body.orbit().b, body.orbit().a);
        assert_eq!(body.orbit().center.x, 0.0);
    }

    #[test]
    fn test_projection_is_passed_to_bodies() {
        let body = ScaleController::new(ScaleAnchors::default())
            .with_projection(InclinationProjection::Legacy)
            .create_body("earth")
            .unwrap();
        assert_eq!(body.projection(), InclinationProjection::Legacy);
    }
}
