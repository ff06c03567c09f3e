// ============================================================================
// ditfolder-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Core error type for the folder structure engine
//
// KEY COMPONENTS:
// - CoreError: every failure the engine can surface to a caller
// - CoreResult: result alias used throughout the crate
//
// Scan failures never appear here. An entry the scanner cannot stat or list
// is dropped from the snapshot and logged at debug level instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the folder structure engine.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The day folder already exists at a location. Nothing was created at
    /// that location; earlier locations are left as they are.
    #[error("Folder already exists at: {}", path.display())]
    Collision { path: PathBuf },

    /// An OS-level failure while creating, reading or writing `path`.
    #[error("{}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No target locations were given")]
    NoLocations,

    /// Every validation message for the shoot metadata, in form order.
    #[error("Invalid shoot metadata: {}", .0.join("; "))]
    InvalidMetadata(Vec<String>),

    #[error("Invalid preset folder: {0}")]
    InvalidPreset(String),

    #[error("Preset not found: {0}")]
    PresetNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to parse CSV: {0}")]
    CsvParse(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    OperationFailed(String),
}

impl CoreError {
    /// Wraps an I/O error with the path it happened on.
    pub fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CoreError::Filesystem {
            path: path.into(),
            source,
        }
    }
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
