//! # model-capabilities
//!
//! Static capability registry for hosted language models, plus helpers for
//! opening authenticated deep links into the companion web app.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use model_capabilities::{CapabilityIndex, ModelProvider};
//!
//! fn main() -> Result<(), model_capabilities::Error> {
//!     let index = CapabilityIndex::builtin()?;
//!     if let Some(model) = index.get(&ModelProvider::OpenAI, "openai/gpt-4o") {
//!         println!("{}: {} input tokens", model.description, model.effective_input_limit());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Sign-in Links
//!
//! ```rust,no_run
//! use model_capabilities::auth::{HttpSignInCodeIssuer, SystemBrowser, open_authenticated_url};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), model_capabilities::Error> {
//!     let issuer = HttpSignInCodeIssuer::new("https://api.example.com");
//!     let url = open_authenticated_url(
//!         &issuer,
//!         &SystemBrowser,
//!         &mut std::io::stdout(),
//!         "https://api.example.com",
//!         "Opening your plan in the browser...",
//!         "/plans/42",
//!     )
//!     .await?;
//!     println!("{url}");
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod auth;
pub mod config;
pub mod models;

pub use auth::{
    BrowserLauncher, HttpSignInCodeIssuer, SignInCodeIssuer, SignInToken, SystemBrowser,
    open_authenticated_url, open_unauthenticated_url,
};
pub use config::{ConfigBuilder, ConfigError, ConfigSource, Settings};
pub use models::{
    CapabilityIndex, Catalog, CatalogError, CompositeKey, Feature, FeatureSet, ModelCapability,
    ModelProvider, OutputFormat, ReasoningEffort, SharedRegistry, TokenLimits,
};

/// Error type for model-capabilities operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// API returned an error response.
    #[error("API error (HTTP {status}): {message}", status = status.map(|s| s.to_string()).unwrap_or_else(|| "unknown".into()))]
    Api {
        message: String,
        status: Option<u16>,
    },

    /// Authentication failed.
    #[error("Authentication failed: {message}")]
    Auth { message: String },

    /// Network connectivity or request failed.
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON serialization or deserialization failed.
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to parse input or a response body.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A capability record or catalog failed validation.
    #[error(transparent)]
    Catalog(#[from] models::CatalogError),
}

/// Error category for unified error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Catalog content is wrong; fix the record and rebuild
    Authoring,
    /// Configuration, parsing, or setup errors
    Configuration,
    /// Network or server errors that may succeed on retry
    Transient,
    /// Authorization failures, IO, and unexpected API responses
    Internal,
}

impl Error {
    pub fn auth(message: impl Into<String>) -> Self {
        Error::Auth {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Catalog(_) => ErrorCategory::Authoring,

            Error::Config(_) | Error::Parse(_) => ErrorCategory::Configuration,

            Error::Network(_) => ErrorCategory::Transient,
            Error::Api {
                status: Some(429 | 500..=599),
                ..
            } => ErrorCategory::Transient,

            Error::Auth { .. } | Error::Api { .. } | Error::Io(_) | Error::Json(_) => {
                ErrorCategory::Internal
            }
        }
    }

    pub fn is_configuration_error(&self) -> bool {
        self.category() == ErrorCategory::Configuration
    }

    pub fn is_retryable(&self) -> bool {
        self.category() == ErrorCategory::Transient
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Error::Api {
                status: Some(401 | 403),
                ..
            } | Error::Auth { .. }
        )
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        match err {
            config::ConfigError::NotFound { key } => {
                Error::Config(format!("Key not found: {}", key))
            }
            config::ConfigError::InvalidValue { key, message } => {
                Error::Config(format!("Invalid value for {}: {}", key, message))
            }
            config::ConfigError::Serialization(e) => Error::Json(e),
            config::ConfigError::Io(e) => Error::Io(e),
            config::ConfigError::Env(e) => Error::Config(e.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
