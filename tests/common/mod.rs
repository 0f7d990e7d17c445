#![allow(dead_code)]

use formspec::application::provider::FormSpecProvider;
use formspec::domain::field_spec::{ApiPath, FieldSpec, NameFieldSpec};
use serde_json::Value;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

/// Loads the bundled defaults, failing the test if it takes longer than two seconds.
pub async fn loaded_provider() -> FormSpecProvider {
    let mut provider = FormSpecProvider::default();
    let loaded = tokio::time::timeout(Duration::from_secs(2), provider.load())
        .await
        .expect("default load timed out");
    assert!(loaded);
    provider
}

pub fn name_field(api_path: Option<&str>) -> FieldSpec {
    FieldSpec::Name(NameFieldSpec {
        api_path: api_path.map(|path| ApiPath::from([("v1".to_string(), path.to_string())])),
        translation_id: None,
    })
}

pub fn write_json(value: &Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{value}").unwrap();
    file
}
