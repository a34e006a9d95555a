//! Configuration source trait

use serde::de::DeserializeOwned;

use super::{ConfigError, ConfigResult};

/// Read-only key/value configuration source. Keys are dotted paths such as `api.host`.
#[async_trait::async_trait]
pub trait ConfigSource: Send + Sync {
    /// Source name for logging
    fn name(&self) -> &str;

    async fn get_raw(&self, key: &str) -> ConfigResult<Option<String>>;
}

/// Typed access on top of [`ConfigSource::get_raw`]
pub trait ConfigSourceExt: ConfigSource {
    /// Parses the raw value as JSON, falling back to a JSON string for bare text.
    fn get<T: DeserializeOwned + Send>(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = ConfigResult<Option<T>>> + Send
    where
        Self: Sync,
    {
        async move {
            let Some(raw) = self.get_raw(key).await? else {
                return Ok(None);
            };

            let value: T = serde_json::from_str(&raw)
                .or_else(|_| serde_json::from_value(serde_json::Value::String(raw.clone())))
                .map_err(|e| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: e.to_string(),
                })?;
            Ok(Some(value))
        }
    }

    fn require<T: DeserializeOwned + Send>(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = ConfigResult<T>> + Send
    where
        Self: Sync,
    {
        async move {
            self.get(key).await?.ok_or_else(|| ConfigError::NotFound {
                key: key.to_string(),
            })
        }
    }
}

impl<T: ConfigSource + ?Sized> ConfigSourceExt for T {}
