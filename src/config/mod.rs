//! Layered, read-only configuration sources.
//!
//! ```rust,no_run
//! use model_capabilities::config::{ConfigBuilder, Settings};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigBuilder::new()
//!     .env()
//!     .file("model-caps.json")
//!     .build();
//! let settings = Settings::load(&config).await?;
//! # Ok(())
//! # }
//! ```

pub mod env;
pub mod file;
pub mod layered;
pub mod memory;
pub mod settings;
pub mod source;

pub use env::{DEFAULT_ENV_PREFIX, EnvSource};
pub use file::FileSource;
pub use layered::LayeredConfig;
pub use memory::MemorySource;
pub use settings::Settings;
pub use source::{ConfigSource, ConfigSourceExt};

use thiserror::Error;

/// Errors that can occur while reading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required key not found in any source
    #[error("Key not found: {key}")]
    NotFound { key: String },

    /// Value present but unusable
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Environment error: {0}")]
    Env(#[from] std::env::VarError),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Builds a [`LayeredConfig`]; sources added first take priority.
pub struct ConfigBuilder {
    sources: Vec<Box<dyn ConfigSource>>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Environment variables under [`DEFAULT_ENV_PREFIX`]
    pub fn env(self) -> Self {
        self.env_with_prefix(DEFAULT_ENV_PREFIX)
    }

    pub fn env_with_prefix(mut self, prefix: &str) -> Self {
        self.sources.push(Box::new(EnvSource::prefixed(prefix)));
        self
    }

    pub fn file(mut self, path: impl AsRef<std::path::Path>) -> Self {
        self.sources
            .push(Box::new(FileSource::new(path.as_ref().to_path_buf())));
        self
    }

    pub fn memory(mut self, source: MemorySource) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn source(mut self, source: Box<dyn ConfigSource>) -> Self {
        self.sources.push(source);
        self
    }

    pub fn build(self) -> LayeredConfig {
        self.sources
            .into_iter()
            .fold(LayeredConfig::new(), LayeredConfig::layer)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
