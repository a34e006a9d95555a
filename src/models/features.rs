use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// How a model is expected to structure its responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Structured tool-call encoding; suits models that honor strict JSON schemas.
    ToolCallJson,
    /// Tagged-markup encoding; more reliable for models with weak JSON generation.
    Xml,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ToolCallJson => "tool-call-json",
            Self::Xml => "xml",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasoningEffort {
    Low,
    Medium,
    High,
}

impl ReasoningEffort {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Optional capabilities and request restrictions of a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    ImageSupport,
    CacheControl,
    /// Role parameters such as temperature and top_p must not be sent.
    RoleParamsDisabled,
    /// The model rejects a system prompt.
    SystemPromptDisabled,
    PredictedOutput,
    /// Provider reasoning content is included in responses.
    IncludeReasoning,
}

impl Feature {
    pub const ALL: [Feature; 6] = [
        Feature::ImageSupport,
        Feature::CacheControl,
        Feature::RoleParamsDisabled,
        Feature::SystemPromptDisabled,
        Feature::PredictedOutput,
        Feature::IncludeReasoning,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ImageSupport => "image_support",
            Self::CacheControl => "cache_control",
            Self::RoleParamsDisabled => "role_params_disabled",
            Self::SystemPromptDisabled => "system_prompt_disabled",
            Self::PredictedOutput => "predicted_output",
            Self::IncludeReasoning => "include_reasoning",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureSet(BTreeSet<Feature>);

impl FeatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, feature: Feature) -> Self {
        self.0.insert(feature);
        self
    }

    pub fn has(&self, feature: Feature) -> bool {
        self.0.contains(&feature)
    }

    pub fn iter(&self) -> impl Iterator<Item = Feature> + '_ {
        self.0.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Feature> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
