use std::fmt;

use serde::{Deserialize, Serialize};

/// Hosting service a model is served from.
///
/// Known services carry a default credential variable and endpoint root.
/// Anything else is a [`ModelProvider::Custom`] endpoint registered at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ModelProvider {
    OpenAI,
    OpenRouter,
    Anthropic,
    Google,
    Together,
    Custom(String),
}

impl ModelProvider {
    pub fn as_str(&self) -> &str {
        match self {
            Self::OpenAI => "openai",
            Self::OpenRouter => "openrouter",
            Self::Anthropic => "anthropic",
            Self::Google => "google",
            Self::Together => "together",
            Self::Custom(name) => name,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }

    pub fn default_api_key_env_var(&self) -> Option<&'static str> {
        match self {
            Self::OpenAI => Some("OPENAI_API_KEY"),
            Self::OpenRouter => Some("OPENROUTER_API_KEY"),
            Self::Anthropic => Some("ANTHROPIC_API_KEY"),
            Self::Google => Some("GEMINI_API_KEY"),
            Self::Together => Some("TOGETHER_API_KEY"),
            Self::Custom(_) => None,
        }
    }

    pub fn default_base_url(&self) -> Option<&'static str> {
        match self {
            Self::OpenAI => Some("https://api.openai.com/v1"),
            Self::OpenRouter => Some("https://openrouter.ai/api/v1"),
            Self::Anthropic => Some("https://api.anthropic.com/v1"),
            Self::Google => Some("https://generativelanguage.googleapis.com/v1beta/openai"),
            Self::Together => Some("https://api.together.xyz/v1"),
            Self::Custom(_) => None,
        }
    }
}

impl From<&str> for ModelProvider {
    fn from(name: &str) -> Self {
        match name {
            "openai" => Self::OpenAI,
            "openrouter" => Self::OpenRouter,
            "anthropic" => Self::Anthropic,
            "google" => Self::Google,
            "together" => Self::Together,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl From<String> for ModelProvider {
    fn from(name: String) -> Self {
        match Self::from(name.as_str()) {
            Self::Custom(_) => Self::Custom(name),
            known => known,
        }
    }
}

impl From<ModelProvider> for String {
    fn from(provider: ModelProvider) -> Self {
        match provider {
            ModelProvider::Custom(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ModelProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
