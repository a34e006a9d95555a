use std::fmt;

use super::provider::ModelProvider;

pub const KEY_SEPARATOR: char = '/';

/// Provider plus model id; the unique lookup key of a capability record.
///
/// Hashing is structural, so the separator inside a model id (such as
/// `openai/gpt-4o`) cannot collide with the provider boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CompositeKey {
    provider: ModelProvider,
    model_id: String,
}

impl CompositeKey {
    pub fn new(provider: ModelProvider, model_id: impl Into<String>) -> Self {
        Self {
            provider,
            model_id: model_id.into(),
        }
    }

    pub fn provider(&self) -> &ModelProvider {
        &self.provider
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }
}

impl fmt::Display for CompositeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.provider, KEY_SEPARATOR, self.model_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_concatenates_with_separator() {
        let key = CompositeKey::new(ModelProvider::OpenRouter, "openai/o1");
        assert_eq!(key.to_string(), "openrouter/openai/o1");
        assert_eq!(key.model_id(), "openai/o1");
    }

    #[test]
    fn test_same_model_id_differs_by_provider() {
        let direct = CompositeKey::new(ModelProvider::OpenAI, "openai/o1");
        let routed = CompositeKey::new(ModelProvider::OpenRouter, "openai/o1");
        assert_ne!(direct, routed);
    }
}
