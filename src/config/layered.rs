//! Chains configuration sources; earlier sources have higher priority.

use super::ConfigResult;
use super::source::ConfigSource;

#[derive(Default)]
pub struct LayeredConfig {
    sources: Vec<Box<dyn ConfigSource>>,
}

impl LayeredConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a lower-priority source.
    pub fn layer(mut self, source: Box<dyn ConfigSource>) -> Self {
        self.sources.push(source);
        self
    }

    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }
}

#[async_trait::async_trait]
impl ConfigSource for LayeredConfig {
    fn name(&self) -> &str {
        "layered"
    }

    async fn get_raw(&self, key: &str) -> ConfigResult<Option<String>> {
        for source in &self.sources {
            if let Some(value) = source.get_raw(key).await? {
                tracing::trace!(key, source = source.name(), "config value resolved");
                return Ok(Some(value));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemorySource;

    #[tokio::test]
    async fn test_first_source_wins() {
        let config = LayeredConfig::new()
            .layer(Box::new(
                MemorySource::named("high").value("api.host", "https://api.override.dev"),
            ))
            .layer(Box::new(
                MemorySource::named("low")
                    .value("api.host", "https://api.example.com")
                    .value("api.token", "tok"),
            ));

        assert_eq!(
            config.get_raw("api.host").await.unwrap().as_deref(),
            Some("https://api.override.dev")
        );
        assert_eq!(
            config.get_raw("api.token").await.unwrap().as_deref(),
            Some("tok")
        );
        assert_eq!(config.get_raw("missing").await.unwrap(), None);
        assert_eq!(config.source_names(), ["high", "low"]);
    }
}
