use thiserror::Error;

/// Errors surfaced to callers of the close-contact query
#[derive(Debug, Error)]
pub enum ProximityError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Contact source unavailable: {0}")]
    Source(#[from] SourceError),

    #[error("Unexpected failure: {0}")]
    Unexpected(String),
}

impl ProximityError {
    /// HTTP status code used when rendering this error at the service edge
    pub fn status_code(&self) -> u16 {
        match self {
            ProximityError::InvalidInput(_) => 400,
            ProximityError::Source(_) => 503,
            ProximityError::Unexpected(_) => 500,
        }
    }
}

/// Errors raised while acquiring contacts from a [`crate::services::ContactSource`]
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse contacts: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    Api(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Invalid source configuration: {0}")]
    Config(String),
}

/// A contact record that cannot be placed on the plane.
///
/// Coordinates are mandatory upstream, so this only shows up when the store
/// hands back a broken row. The record is skipped, never the whole query.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataIntegrityGap {
    #[error("contact '{name}' has no {axis} coordinate")]
    MissingCoordinate { name: String, axis: Axis },

    #[error("contact '{name}' has a non-finite {axis} coordinate ({value})")]
    NonFiniteCoordinate { name: String, axis: Axis, value: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}
