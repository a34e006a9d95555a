//! Custom model definitions loaded from a JSON file.
//!
//! The file holds an array of capability records using the same field names as
//! [`ModelCapability`]. Validation happens when the records are registered.

use std::path::Path;

use super::capability::ModelCapability;
use crate::{Error, Result};

pub async fn load_custom_models(path: impl AsRef<Path>) -> Result<Vec<ModelCapability>> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path).await?;
    parse_custom_models(&content).map_err(|e| Error::Parse(format!("{}: {}", path.display(), e)))
}

pub fn parse_custom_models(
    content: &str,
) -> std::result::Result<Vec<ModelCapability>, serde_json::Error> {
    serde_json::from_str(content)
}
