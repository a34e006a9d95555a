use serde::{Deserialize, Serialize};

use super::features::{Feature, FeatureSet, OutputFormat, ReasoningEffort};
use super::key::CompositeKey;
use super::provider::ModelProvider;

pub type ModelId = String;

/// Request parameters and limits for one provider/model pairing.
///
/// `model_name` is what the provider expects in its request payloads, while
/// `model_id` distinguishes variants of the same provider model (for example
/// differing reasoning effort) and must be unique within a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelCapability {
    pub description: String,
    pub provider: ModelProvider,
    pub model_name: String,
    pub model_id: ModelId,
    /// Input context ceiling enforced by the provider.
    pub max_tokens: u64,
    /// Output ceiling enforced by the provider.
    pub max_output_tokens: u64,
    /// Share of the context window set aside for generation.
    pub reserved_output_tokens: u64,
    /// Conversation size above which callers start summarizing history.
    pub default_max_convo_tokens: u64,
    pub api_key_env_var: String,
    pub base_url: String,
    pub preferred_output_format: OutputFormat,
    #[serde(default, skip_serializing_if = "FeatureSet::is_empty")]
    pub features: FeatureSet,
    /// Reasoning effort is enabled when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning_effort: Option<ReasoningEffort>,
}

impl ModelCapability {
    pub fn key(&self) -> CompositeKey {
        CompositeKey::new(self.provider.clone(), self.model_id.clone())
    }

    /// Input budget once room for generation is reserved.
    pub fn effective_input_limit(&self) -> u64 {
        self.max_tokens.saturating_sub(self.reserved_output_tokens)
    }

    pub fn token_limits(&self) -> TokenLimits {
        TokenLimits {
            max_tokens: self.max_tokens,
            max_output_tokens: self.max_output_tokens,
            reserved_output_tokens: self.reserved_output_tokens,
            effective_input_limit: self.effective_input_limit(),
        }
    }

    pub fn has(&self, feature: Feature) -> bool {
        self.features.has(feature)
    }

    pub fn supports_images(&self) -> bool {
        self.has(Feature::ImageSupport)
    }

    pub fn reasoning_effort_enabled(&self) -> bool {
        self.reasoning_effort.is_some()
    }
}

/// Published token limits of a capability record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TokenLimits {
    pub max_tokens: u64,
    pub max_output_tokens: u64,
    pub reserved_output_tokens: u64,
    pub effective_input_limit: u64,
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn gpt_4o() -> ModelCapability {
        ModelCapability {
            description: "OpenAI gpt-4o".into(),
            provider: ModelProvider::OpenAI,
            model_name: "gpt-4o".into(),
            model_id: "openai/gpt-4o".into(),
            max_tokens: 128_000,
            max_output_tokens: 16_384,
            reserved_output_tokens: 16_384,
            default_max_convo_tokens: 10_000,
            api_key_env_var: "OPENAI_API_KEY".into(),
            base_url: "https://api.openai.com/v1".into(),
            preferred_output_format: OutputFormat::ToolCallJson,
            features: FeatureSet::new()
                .with(Feature::ImageSupport)
                .with(Feature::PredictedOutput),
            reasoning_effort: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::gpt_4o;
    use super::*;

    #[test]
    fn test_effective_input_limit() {
        let model = gpt_4o();
        assert_eq!(model.effective_input_limit(), 111_616);

        let limits = model.token_limits();
        assert_eq!(limits.max_tokens, 128_000);
        assert_eq!(limits.max_output_tokens, 16_384);
        assert_eq!(limits.reserved_output_tokens, 16_384);
        assert_eq!(limits.effective_input_limit, 111_616);
    }

    #[test]
    fn test_reserved_below_max_output() {
        // 200k context, 100k output ceiling, 40k reserved for reasoning and output
        let model = ModelCapability {
            max_tokens: 200_000,
            max_output_tokens: 100_000,
            reserved_output_tokens: 40_000,
            ..gpt_4o()
        };
        assert_eq!(model.effective_input_limit(), 160_000);
    }

    #[test]
    fn test_feature_queries() {
        let model = gpt_4o();
        assert!(model.supports_images());
        assert!(model.has(Feature::PredictedOutput));
        assert!(!model.has(Feature::SystemPromptDisabled));
        assert!(!model.reasoning_effort_enabled());
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let json = serde_json::json!({
            "description": "Local llama",
            "provider": "local",
            "model_name": "llama3",
            "model_id": "llama3-8b",
            "max_tokens": 8192,
            "max_output_tokens": 2048,
            "reserved_output_tokens": 2048,
            "default_max_convo_tokens": 2000,
            "api_key_env_var": "LOCAL_API_KEY",
            "base_url": "http://localhost:11434/v1",
            "preferred_output_format": "xml"
        });

        let model: ModelCapability = serde_json::from_value(json).unwrap();
        assert_eq!(model.provider, ModelProvider::Custom("local".into()));
        assert!(model.features.is_empty());
        assert_eq!(model.reasoning_effort, None);
        assert_eq!(model.key().to_string(), "local/llama3-8b");
    }
}
