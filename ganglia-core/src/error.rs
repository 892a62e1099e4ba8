use thiserror::Error;

/// Errors that can occur in ganglia-core.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// Tab-separated line with the wrong shape.
    #[error("Malformed line: {0}")]
    ParseLine(String),
    /// Mapping file missing; decoded output cannot be produced without it.
    #[error("Mapping file not found: {}", .0.display())]
    MappingNotFound(std::path::PathBuf),
}

/// Result type alias for ganglia-core.
pub type Result<T> = std::result::Result<T, Error>;
