//! JSON file configuration source
//!
//! Nested objects are addressed with dotted keys. A missing file reads as empty.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tokio::sync::OnceCell;

use super::ConfigResult;
use super::source::ConfigSource;

pub struct FileSource {
    path: PathBuf,
    data: OnceCell<Value>,
}

impl FileSource {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> ConfigResult<Value> {
        if !tokio::fs::try_exists(&self.path).await? {
            tracing::debug!(path = %self.path.display(), "config file not present");
            return Ok(Value::Object(Default::default()));
        }

        let content = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    async fn data(&self) -> ConfigResult<&Value> {
        self.data.get_or_try_init(|| self.load()).await
    }
}

#[async_trait::async_trait]
impl ConfigSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn get_raw(&self, key: &str) -> ConfigResult<Option<String>> {
        let mut current = self.data().await?;
        for part in key.split('.') {
            match current.get(part) {
                Some(next) => current = next,
                None => return Ok(None),
            }
        }

        match current {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s.clone())),
            other => Ok(Some(other.to_string())),
        }
    }
}

impl std::fmt::Debug for FileSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSource")
            .field("path", &self.path)
            .field("loaded", &self.data.initialized())
            .finish()
    }
}
