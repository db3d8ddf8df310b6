use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{SourceDocument, SourceMetadata, SourceProvider};
use crate::{ConvertError, Result};

/// File-based provider for loading Overpass exports from disk
pub struct FileProvider {
    /// Path to the export
    file_path: PathBuf,
}

impl FileProvider {
    /// Create a new file provider
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    /// Path this provider reads from
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn not_found(&self) -> ConvertError {
        ConvertError::NotFound {
            path: self.file_path.clone(),
        }
    }
}

impl SourceProvider for FileProvider {
    fn provider_type(&self) -> &'static str {
        "file"
    }

    fn origin(&self) -> PathBuf {
        self.file_path.clone()
    }

    fn fetch(&self) -> Result<SourceDocument> {
        let data = std::fs::read_to_string(&self.file_path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => self.not_found(),
            _ => ConvertError::Io(e),
        })?;

        tracing::debug!(
            "Read {} bytes from {}",
            data.len(),
            self.file_path.display()
        );

        let metadata = SourceMetadata::new(self.file_path.display().to_string(), self.provider_type())
            .with_size(data.len());

        SourceDocument::from_json(&data, &self.file_path, metadata)
    }

    fn test_availability(&self) -> Result<()> {
        if self.file_path.is_file() {
            Ok(())
        } else {
            Err(self.not_found())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_export(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_fetch_existing_file() {
        let file = write_export(
            r#"{"elements": [{"type": "node", "id": 1, "lat": 1.0, "lon": 2.0}]}"#,
        );
        let provider = FileProvider::new(file.path());

        assert!(provider.test_availability().is_ok());
        let document = provider.fetch().unwrap();
        assert_eq!(document.len(), 1);
        assert_eq!(document.metadata.provider_type, "file");
        assert_eq!(document.metadata.element_count, Some(1));
        assert!(document.metadata.size_bytes.unwrap() > 0);
    }

    #[test]
    fn test_fetch_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("export.json");
        let provider = FileProvider::new(&missing);

        assert!(matches!(
            provider.test_availability(),
            Err(ConvertError::NotFound { .. })
        ));
        match provider.fetch() {
            Err(ConvertError::NotFound { path }) => assert_eq!(path, missing),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_fetch_empty_dataset() {
        let file = write_export(r#"{"elements": []}"#);
        let result = FileProvider::new(file.path()).fetch();
        assert!(matches!(result, Err(ConvertError::EmptyDataset { .. })));
    }

    #[test]
    fn test_load_helper() {
        let file = write_export(r#"{"elements": [{"type": "way", "id": 7, "nodes": []}]}"#);
        let document = crate::load(file.path()).unwrap();
        assert_eq!(document.elements[0]["id"], 7);
    }

    #[test]
    fn test_not_found_message() {
        let error = FileProvider::new("Downloads/export.json").not_found();
        assert_eq!(
            error.to_string(),
            "Error: File Downloads/export.json not found. Download your data from Overpass Turbo."
        );
    }
}
