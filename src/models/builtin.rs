//! Hand-curated capability records compiled into the program.
//!
//! `max_tokens` is the provider's input ceiling and `max_output_tokens` its
//! output ceiling. `reserved_output_tokens` is the realistic output budget: for
//! o-series models 40k leaves about 25k for reasoning and 15k for visible
//! output, so the effective input limit is 200k - 40k = 160k. Models with a low
//! output ceiling reserve all of it.

use super::capability::ModelCapability;
use super::catalog::Catalog;
use super::features::{Feature, FeatureSet, OutputFormat, ReasoningEffort};
use super::provider::ModelProvider;

pub fn register_all(catalog: &mut Catalog) {
    catalog.extend(openai_direct());
    catalog.extend(openrouter_hosted());
    catalog.extend(openai_via_openrouter());
}

#[derive(Clone, Copy)]
struct Limits {
    max_tokens: u64,
    max_output_tokens: u64,
    reserved_output_tokens: u64,
    default_max_convo_tokens: u64,
}

const O_SERIES: Limits = Limits {
    max_tokens: 200_000,
    max_output_tokens: 100_000,
    reserved_output_tokens: 40_000,
    default_max_convo_tokens: 10_000,
};

const GPT_4O: Limits = Limits {
    max_tokens: 128_000,
    max_output_tokens: 16_384,
    reserved_output_tokens: 16_384,
    default_max_convo_tokens: 10_000,
};

const CLAUDE_SONNET: Limits = Limits {
    max_tokens: 200_000,
    max_output_tokens: 128_000,
    reserved_output_tokens: 20_000,
    default_max_convo_tokens: 15_000,
};

const DEEPSEEK: Limits = Limits {
    max_tokens: 64_000,
    max_output_tokens: 8_192,
    reserved_output_tokens: 8_192,
    default_max_convo_tokens: 7_500,
};

fn record(
    provider: ModelProvider,
    description: &str,
    model_name: &str,
    model_id: &str,
    limits: Limits,
    format: OutputFormat,
) -> ModelCapability {
    ModelCapability {
        description: description.into(),
        api_key_env_var: provider.default_api_key_env_var().unwrap_or_default().into(),
        base_url: provider.default_base_url().unwrap_or_default().into(),
        provider,
        model_name: model_name.into(),
        model_id: model_id.into(),
        max_tokens: limits.max_tokens,
        max_output_tokens: limits.max_output_tokens,
        reserved_output_tokens: limits.reserved_output_tokens,
        default_max_convo_tokens: limits.default_max_convo_tokens,
        preferred_output_format: format,
        features: FeatureSet::new().with(Feature::ImageSupport),
        reasoning_effort: None,
    }
}

fn without_images(mut model: ModelCapability) -> ModelCapability {
    model.features = model
        .features
        .iter()
        .filter(|f| *f != Feature::ImageSupport)
        .collect();
    model
}

fn with(mut model: ModelCapability, features: &[Feature]) -> ModelCapability {
    for feature in features {
        model.features = model.features.with(*feature);
    }
    model
}

fn o3_mini(
    provider: ModelProvider,
    description: &str,
    model_name: &str,
    model_id: &str,
    effort: ReasoningEffort,
    reserved_output_tokens: u64,
    extra: &[Feature],
) -> ModelCapability {
    let limits = Limits {
        reserved_output_tokens,
        ..O_SERIES
    };
    let model = record(
        provider,
        description,
        model_name,
        model_id,
        limits,
        OutputFormat::ToolCallJson,
    );
    ModelCapability {
        reasoning_effort: Some(effort),
        ..with(model, extra)
    }
}

fn openai_direct() -> Vec<ModelCapability> {
    let p = || ModelProvider::OpenAI;
    let restricted = [Feature::RoleParamsDisabled];

    vec![
        o3_mini(
            p(),
            "OpenAI o3-mini-high",
            "o3-mini",
            "openai/o3-mini-high",
            ReasoningEffort::High,
            30_000,
            &restricted,
        ),
        o3_mini(
            p(),
            "OpenAI o3-mini-medium",
            "o3-mini",
            "openai/o3-mini-medium",
            ReasoningEffort::Medium,
            40_000,
            &restricted,
        ),
        o3_mini(
            p(),
            "OpenAI o3-mini-low",
            "o3-mini",
            "openai/o3-mini-low",
            ReasoningEffort::Low,
            40_000,
            &restricted,
        ),
        with(
            record(
                p(),
                "OpenAI o1",
                "o1",
                "openai/o1",
                Limits {
                    default_max_convo_tokens: 15_000,
                    ..O_SERIES
                },
                OutputFormat::Xml,
            ),
            &[Feature::SystemPromptDisabled, Feature::RoleParamsDisabled],
        ),
        with(
            record(
                p(),
                "OpenAI gpt-4o",
                "gpt-4o",
                "openai/gpt-4o",
                GPT_4O,
                OutputFormat::ToolCallJson,
            ),
            &[Feature::PredictedOutput],
        ),
        with(
            record(
                p(),
                "OpenAI gpt-4o-mini",
                "gpt-4o-mini",
                "openai/gpt-4o-mini",
                GPT_4O,
                OutputFormat::ToolCallJson,
            ),
            &[Feature::PredictedOutput],
        ),
    ]
}

fn openrouter_hosted() -> Vec<ModelCapability> {
    let p = || ModelProvider::OpenRouter;
    // OpenRouter ids equal the upstream model names unless noted
    let routed = |description: &str, name: &str, limits: Limits| {
        record(p(), description, name, name, limits, OutputFormat::Xml)
    };
    let gemini = |max_tokens: u64, default_max_convo_tokens: u64| Limits {
        max_tokens,
        max_output_tokens: 8_192,
        reserved_output_tokens: 8_192,
        default_max_convo_tokens,
    };
    let perplexity = |max_tokens: u64| Limits {
        max_tokens,
        max_output_tokens: max_tokens,
        reserved_output_tokens: 30_000,
        default_max_convo_tokens: 7_500,
    };

    vec![
        with(
            routed(
                "Anthropic Claude 3.7 Sonnet via OpenRouter",
                "anthropic/claude-3.7-sonnet",
                CLAUDE_SONNET,
            ),
            &[Feature::CacheControl],
        ),
        with(
            routed(
                "Anthropic Claude 3.5 Sonnet via OpenRouter",
                "anthropic/claude-3.5-sonnet",
                CLAUDE_SONNET,
            ),
            &[Feature::CacheControl],
        ),
        with(
            routed(
                "Anthropic Claude 3.5 Haiku via OpenRouter",
                "anthropic/claude-3.5-haiku",
                Limits {
                    max_output_tokens: 8_192,
                    reserved_output_tokens: 8_192,
                    ..CLAUDE_SONNET
                },
            ),
            &[Feature::CacheControl],
        ),
        routed(
            "Google Gemini Pro 1.5 via OpenRouter",
            "google/gemini-pro-1.5",
            gemini(2_000_000, 100_000),
        ),
        routed(
            "Google Gemini Pro 2.0 Experimental via OpenRouter",
            "google/gemini-2.0-pro-exp-02-05:free",
            gemini(2_000_000, 100_000),
        ),
        routed(
            "Google Gemini Flash 2.0 via OpenRouter",
            "google/gemini-2.0-flash-001",
            gemini(1_000_000, 75_000),
        ),
        without_images(routed(
            "DeepSeek V3 via OpenRouter",
            "deepseek/deepseek-chat",
            DEEPSEEK,
        )),
        with(
            without_images(record(
                p(),
                "DeepSeek R1 via OpenRouter (includes reasoning)",
                "deepseek/deepseek-r1",
                "deepseek/deepseek-r1-reasoning",
                DEEPSEEK,
                OutputFormat::Xml,
            )),
            &[Feature::IncludeReasoning],
        ),
        without_images(record(
            p(),
            "DeepSeek R1 via OpenRouter (reasoning hidden)",
            "deepseek/deepseek-r1",
            "deepseek/deepseek-r1-no-reasoning",
            DEEPSEEK,
            OutputFormat::Xml,
        )),
        with(
            without_images(routed(
                "Perplexity R1 1776 via OpenRouter (includes reasoning)",
                "perplexity/r1-1776",
                perplexity(128_000),
            )),
            &[Feature::IncludeReasoning],
        ),
        with(
            without_images(routed(
                "Perplexity Sonar Reasoning via OpenRouter (includes reasoning)",
                "perplexity/sonar-reasoning",
                perplexity(127_000),
            )),
            &[Feature::IncludeReasoning],
        ),
        routed(
            "Qwen 2.5 Coder 32B via OpenRouter",
            "qwen/qwen-2.5-coder-32b-instruct",
            Limits {
                max_tokens: 128_000,
                default_max_convo_tokens: 10_000,
                ..DEEPSEEK
            },
        ),
    ]
}

fn openai_via_openrouter() -> Vec<ModelCapability> {
    let p = || ModelProvider::OpenRouter;
    let restricted = [Feature::SystemPromptDisabled, Feature::RoleParamsDisabled];
    let effort = |description: &str, model_id: &str, level: ReasoningEffort| {
        o3_mini(
            p(),
            description,
            "openai/o3-mini",
            model_id,
            level,
            40_000,
            &restricted,
        )
    };

    vec![
        effort(
            "OpenAI o3-mini-high via OpenRouter",
            "openai/o3-mini-high",
            ReasoningEffort::High,
        ),
        effort(
            "OpenAI o3-mini-medium via OpenRouter",
            "openai/o3-mini-medium",
            ReasoningEffort::Medium,
        ),
        effort(
            "OpenAI o3-mini-low via OpenRouter",
            "openai/o3-mini-low",
            ReasoningEffort::Low,
        ),
        with(
            record(
                p(),
                "OpenAI o1 via OpenRouter",
                "openai/o1",
                "openai/o1",
                Limits {
                    default_max_convo_tokens: 15_000,
                    ..O_SERIES
                },
                OutputFormat::Xml,
            ),
            &restricted,
        ),
        with(
            record(
                p(),
                "OpenAI gpt-4o via OpenRouter",
                "openai/gpt-4o",
                "openai/gpt-4o",
                GPT_4O,
                OutputFormat::ToolCallJson,
            ),
            &[Feature::PredictedOutput],
        ),
        with(
            record(
                p(),
                "OpenAI gpt-4o-mini via OpenRouter",
                "openai/gpt-4o-mini",
                "openai/gpt-4o-mini",
                GPT_4O,
                OutputFormat::ToolCallJson,
            ),
            &[Feature::PredictedOutput],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::validate::validate_catalog;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 24);
        assert!(validate_catalog(&catalog).is_ok());
    }

    #[test]
    fn test_reasoning_variants_share_model_name() {
        let catalog = Catalog::builtin();
        let variants: Vec<_> = catalog
            .by_provider(&ModelProvider::OpenAI)
            .filter(|r| r.model_name == "o3-mini")
            .collect();

        assert_eq!(variants.len(), 3);
        assert!(variants.iter().all(|r| r.reasoning_effort.is_some()));
        assert!(variants.iter().all(|r| r.has(Feature::RoleParamsDisabled)));
    }

    #[test]
    fn test_deepseek_r1_reasoning_toggle() {
        let catalog = Catalog::builtin();
        let find = |id: &str| {
            catalog
                .iter()
                .find(|r| r.model_id == id)
                .cloned()
                .unwrap()
        };

        let shown = find("deepseek/deepseek-r1-reasoning");
        let hidden = find("deepseek/deepseek-r1-no-reasoning");
        assert_eq!(shown.model_name, hidden.model_name);
        assert!(shown.has(Feature::IncludeReasoning));
        assert!(!hidden.has(Feature::IncludeReasoning));
        assert!(!shown.supports_images());
    }

    #[test]
    fn test_o3_mini_high_reserves_less() {
        let catalog = Catalog::builtin();
        let high = catalog
            .by_provider(&ModelProvider::OpenAI)
            .find(|r| r.model_id == "openai/o3-mini-high")
            .unwrap();
        assert_eq!(high.reserved_output_tokens, 30_000);
        assert_eq!(high.effective_input_limit(), 170_000);
        assert_eq!(high.reasoning_effort, Some(ReasoningEffort::High));
    }
}
