//! Environment variable configuration source
//!
//! `api.host` is read from `MODEL_CAPS_API_HOST` under the default prefix.

use super::source::ConfigSource;
use super::{ConfigError, ConfigResult};

pub const DEFAULT_ENV_PREFIX: &str = "MODEL_CAPS_";

/// Read-only view of the process environment.
#[derive(Debug, Clone)]
pub struct EnvSource {
    prefix: String,
}

impl EnvSource {
    pub fn new() -> Self {
        Self::prefixed(DEFAULT_ENV_PREFIX)
    }

    pub fn prefixed(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn env_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key.to_uppercase().replace('.', "_"))
    }
}

impl Default for EnvSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ConfigSource for EnvSource {
    fn name(&self) -> &str {
        "env"
    }

    async fn get_raw(&self, key: &str) -> ConfigResult<Option<String>> {
        match std::env::var(self.env_key(key)) {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(e) => Err(ConfigError::Env(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_key_conversion() {
        let source = EnvSource::new();
        assert_eq!(source.env_key("api.host"), "MODEL_CAPS_API_HOST");
        assert_eq!(
            source.env_key("models.custom_path"),
            "MODEL_CAPS_MODELS_CUSTOM_PATH"
        );

        let source = EnvSource::prefixed("CAPS_TEST_");
        assert_eq!(source.env_key("api.token"), "CAPS_TEST_API_TOKEN");
    }

    #[tokio::test]
    async fn test_env_source_get() {
        let source = EnvSource::prefixed("CAPS_ENV_SOURCE_TEST_");

        // SAFETY: Test-only environment setup
        unsafe { std::env::set_var("CAPS_ENV_SOURCE_TEST_API_HOST", "https://api.example.com") };
        let value = source.get_raw("api.host").await.unwrap();
        assert_eq!(value.as_deref(), Some("https://api.example.com"));
        unsafe { std::env::remove_var("CAPS_ENV_SOURCE_TEST_API_HOST") };
    }

    #[tokio::test]
    async fn test_env_source_not_found() {
        let source = EnvSource::prefixed("CAPS_NONEXISTENT_PREFIX_");
        assert_eq!(source.get_raw("api.host").await.unwrap(), None);
    }
}
