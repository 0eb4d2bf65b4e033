/// Result alias that carries the custom [`KnotError`] type.
pub type Result<T> = std::result::Result<T, KnotError>;

/// Common error type for the core crate.
#[derive(Debug, thiserror::Error)]
pub enum KnotError {
    /// A point or vector was built from something other than two components.
    #[error("expected exactly 2 components, found {found}")]
    InvalidDimension { found: usize },
    /// A point component was requested with an index other than 0 or 1.
    #[error("component index {index} is out of range, must be 0 or 1")]
    IndexOutOfRange { index: usize },
    /// A configuration value failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// Wrapper around JSON (de)serialisation errors.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
