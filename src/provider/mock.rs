use std::io;
use std::path::PathBuf;

use super::{SourceDocument, SourceMetadata, SourceProvider};
use crate::{ConvertError, Result};

/// In-memory provider for tests and development
///
/// Serves a fixed Overpass document instead of reading from disk.
pub struct MockProvider {
    /// Predefined data to return
    mock_data: String,
    /// Whether to simulate an unreadable source
    simulate_failure: bool,
}

impl MockProvider {
    /// Create a new mock provider with default test data
    pub fn new() -> Self {
        Self::with_data(Self::default_test_data())
    }

    /// Create a mock provider with custom data
    pub fn with_data(data: impl Into<String>) -> Self {
        Self {
            mock_data: data.into(),
            simulate_failure: false,
        }
    }

    /// Configure the provider to simulate failures
    pub fn with_failure(mut self) -> Self {
        self.simulate_failure = true;
        self
    }

    /// Default export: one square building, one road, one café node and a
    /// building whose nodes are missing from the export
    fn default_test_data() -> String {
        r#"{
  "version": 0.6,
  "generator": "Mock Provider v1.0",
  "elements": [
    {"type": "node", "id": 1001, "lat": 52.5, "lon": 13.4},
    {"type": "node", "id": 1002, "lat": 52.501, "lon": 13.4},
    {"type": "node", "id": 1003, "lat": 52.501, "lon": 13.401},
    {"type": "node", "id": 1004, "lat": 52.5, "lon": 13.401},
    {"type": "node", "id": 2001, "lat": 52.499, "lon": 13.399},
    {"type": "node", "id": 2002, "lat": 52.502, "lon": 13.402},
    {
      "type": "node",
      "id": 4001,
      "lat": 52.5015,
      "lon": 13.4015,
      "tags": {"amenity": "cafe", "name": "Mock Cafe"}
    },
    {
      "type": "way",
      "id": 123456789,
      "nodes": [1001, 1002, 1003, 1004],
      "tags": {
        "building": "residential",
        "addr:street": "Mock Street",
        "addr:housenumber": "42"
      }
    },
    {
      "type": "way",
      "id": 987654321,
      "nodes": [2001, 2002],
      "tags": {"highway": "residential", "name": "Mock Street"}
    },
    {
      "type": "way",
      "id": 555666777,
      "nodes": [3001, 3002, 3003, 3004],
      "tags": {"building": "yes"}
    }
  ]
}"#
        .to_string()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceProvider for MockProvider {
    fn provider_type(&self) -> &'static str {
        "mock"
    }

    fn origin(&self) -> PathBuf {
        PathBuf::from("mock")
    }

    fn fetch(&self) -> Result<SourceDocument> {
        self.test_availability()?;

        tracing::debug!("Serving {} bytes of mock data", self.mock_data.len());

        let metadata =
            SourceMetadata::new("mock", self.provider_type()).with_size(self.mock_data.len());
        SourceDocument::from_json(&self.mock_data, &self.origin(), metadata)
    }

    fn test_availability(&self) -> Result<()> {
        if self.simulate_failure {
            return Err(ConvertError::Io(io::Error::other(
                "Simulated mock provider failure",
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_provider_default_data() {
        let provider = MockProvider::new();
        assert_eq!(provider.provider_type(), "mock");

        let document = provider.fetch().unwrap();
        assert_eq!(document.len(), 10);
        assert_eq!(document.metadata.source, "mock");
        assert_eq!(document.metadata.element_count, Some(10));
    }

    #[test]
    fn test_mock_provider_custom_data() {
        let provider = MockProvider::with_data(r#"{"elements": [{"type": "node", "id": 1}]}"#);
        let document = provider.fetch().unwrap();
        assert_eq!(document.len(), 1);
    }

    #[test]
    fn test_mock_provider_empty_data() {
        let provider = MockProvider::with_data(r#"{"elements": []}"#);
        match provider.fetch() {
            Err(ConvertError::EmptyDataset { path }) => assert_eq!(path, PathBuf::from("mock")),
            other => panic!("Expected EmptyDataset, got {:?}", other),
        }
    }

    #[test]
    fn test_mock_provider_failure() {
        let provider = MockProvider::new().with_failure();
        assert!(provider.test_availability().is_err());

        if let Err(ConvertError::Io(e)) = provider.fetch() {
            assert!(e.to_string().contains("Simulated"));
        } else {
            panic!("Expected Io error");
        }
    }
}
