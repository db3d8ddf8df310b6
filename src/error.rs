use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while converting an OSM export to GeoJSON
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The source export does not exist
    #[error("Error: File {} not found. Download your data from Overpass Turbo.", path.display())]
    NotFound { path: PathBuf },

    /// The source export parsed but carries no elements
    #[error("Error: No elements found in {}. Review your Overpass Turbo query.", path.display())]
    EmptyDataset { path: PathBuf },

    /// The source export is not valid JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration validation errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem errors while reading or writing
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors serializing or re-reading the output document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConvertError {
    /// Whether this error is one of the conditions detected before any conversion work
    pub fn is_fatal_input(&self) -> bool {
        matches!(
            self,
            ConvertError::NotFound { .. } | ConvertError::EmptyDataset { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
