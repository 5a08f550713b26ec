use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while emitting a dataset YAML file.
#[derive(Debug, Error)]
pub enum EmitError {
    /// The class names file does not exist. Raised before anything is written.
    #[error("class names file not found: {}", .path.display())]
    MissingInput { path: PathBuf },

    /// The expected class count disagrees with the names read from the file.
    #[error(
        "class count mismatch: expected {expected} classes, found {found} in {}",
        .path.display()
    )]
    ClassCountMismatch {
        expected: usize,
        found: usize,
        path: PathBuf,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for emitter operations.
pub type Result<T> = std::result::Result<T, EmitError>;
