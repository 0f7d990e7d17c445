use crate::domain::ports::SpecSource;
use crate::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// The default form spec document shipped inside the binary.
pub const BUNDLED_FORM_SPECS: &[u8] = include_bytes!("../../assets/form_specs.json");

/// Serves the document compiled into the build.
#[derive(Default, Debug, Clone, Copy)]
pub struct BundledSpecSource;

#[async_trait]
impl SpecSource for BundledSpecSource {
    async fn read(&self) -> Result<Vec<u8>> {
        Ok(BUNDLED_FORM_SPECS.to_vec())
    }

    fn describe(&self) -> String {
        "bundled form_specs.json".to_string()
    }
}

/// Reads a form spec document from the filesystem.
#[derive(Debug, Clone)]
pub struct FileSpecSource {
    path: PathBuf,
}

impl FileSpecSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SpecSource for FileSpecSource {
    async fn read(&self) -> Result<Vec<u8>> {
        Ok(tokio::fs::read(&self.path).await?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormSpecError;

    #[tokio::test]
    async fn test_bundled_source_is_a_json_array() {
        let bytes = BundledSpecSource.read().await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(value.is_array());
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let source = FileSpecSource::new("does/not/exist.json");
        let result = source.read().await;
        assert!(matches!(result, Err(FormSpecError::IoError(_))));
        assert_eq!(source.describe(), "does/not/exist.json");
    }
}
