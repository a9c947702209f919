//! Error types

use thiserror::Error;

/// A requested body is not in the catalog
///
/// Fatal to the one creation call that raised it; no partially built body
/// is ever returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown celestial body: {name}")]
pub struct LookupError {
    /// Name that was looked up
    pub name: String,
}

impl LookupError {
    /// Create a lookup error for `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Catalog loading and validation errors
#[derive(Error, Debug)]
pub enum CatalogError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// An entry holds values no orbit can be built from
    #[error("Invalid catalog entry '{body}': {reason}")]
    Invalid {
        /// Offending body
        body: String,
        /// What is wrong with it
        reason: String,
    },
}

/// Scene construction errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// A configured body could not be created
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// The scene has no bodies to simulate
    #[error("Scene has no bodies")]
    Empty,
}
