mod file;
mod mock;

pub use file::*;
pub use mock::*;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::{ConvertError, Result};

/// Parsed Overpass export: the raw element list plus where it came from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceDocument {
    /// The top-level `elements` array, untouched
    pub elements: Vec<Value>,
    /// Metadata about the load
    pub metadata: SourceMetadata,
}

impl SourceDocument {
    /// Parse an Overpass JSON document.
    ///
    /// Fails with [`ConvertError::Parse`] when the text is not JSON and with
    /// [`ConvertError::EmptyDataset`] when `elements` is missing, not an array
    /// or empty. Individual elements are not inspected here.
    pub fn from_json(raw: &str, origin: &Path, metadata: SourceMetadata) -> Result<Self> {
        let mut parsed: Value = serde_json::from_str(raw)
            .map_err(|e| ConvertError::Parse(format!("Invalid JSON: {}", e)))?;

        let elements = match parsed.get_mut("elements").map(Value::take) {
            Some(Value::Array(elements)) if !elements.is_empty() => elements,
            _ => {
                return Err(ConvertError::EmptyDataset {
                    path: origin.to_path_buf(),
                });
            }
        };

        let metadata = metadata.with_element_count(elements.len());
        Ok(Self { elements, metadata })
    }

    /// Number of raw elements in the document
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the document holds no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Metadata about a loaded export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// Timestamp when the export was loaded
    pub timestamp: String,
    /// Where the data came from (file path, "mock")
    pub source: String,
    /// Provider type identifier
    pub provider_type: String,
    /// Number of elements in the export
    pub element_count: Option<usize>,
    /// Size of the raw document in bytes
    pub size_bytes: Option<usize>,
}

impl SourceMetadata {
    /// Create new metadata with basic information
    pub fn new(source: impl Into<String>, provider_type: impl Into<String>) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            source: source.into(),
            provider_type: provider_type.into(),
            element_count: None,
            size_bytes: None,
        }
    }

    /// Set the number of elements
    pub fn with_element_count(mut self, count: usize) -> Self {
        self.element_count = Some(count);
        self
    }

    /// Set the raw document size
    pub fn with_size(mut self, bytes: usize) -> Self {
        self.size_bytes = Some(bytes);
        self
    }
}

/// Source of Overpass exports
pub trait SourceProvider {
    /// Get the provider type identifier (e.g., "file", "mock")
    fn provider_type(&self) -> &'static str;

    /// Path or label identifying the data, used in error messages
    fn origin(&self) -> PathBuf;

    /// Load and parse the export
    fn fetch(&self) -> Result<SourceDocument>;

    /// Check that the export can be read without parsing it
    fn test_availability(&self) -> Result<()>;
}

/// Load the Overpass export at `path`
pub fn load(path: impl AsRef<Path>) -> Result<SourceDocument> {
    FileProvider::new(path.as_ref()).fetch()
}
