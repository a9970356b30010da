//! Class metadata loading errors
//!
//! Translation itself never fails; only reading the reflective model can.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a class metadata file
#[derive(Debug, Error)]
pub enum ModelError {
    /// Failed to read the metadata file
    #[error("Failed to read class metadata: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse the metadata JSON
    #[error("Failed to parse class metadata: {0}")]
    ParseError(#[from] serde_json::Error),

    /// No metadata file exists for the requested class
    #[error("Class not found: {class} (no metadata at {})", path.display())]
    NotFound {
        /// Binary name of the requested class
        class: String,
        /// Path that was searched
        path: PathBuf,
    },
}
