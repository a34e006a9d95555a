//! Resolved runtime settings.

use std::path::PathBuf;

use secrecy::SecretString;
use url::Url;

use super::source::{ConfigSource, ConfigSourceExt};
use super::{ConfigError, ConfigResult};

pub const API_HOST_KEY: &str = "api.host";
pub const API_TOKEN_KEY: &str = "api.token";
pub const CUSTOM_MODELS_KEY: &str = "models.custom_path";

#[derive(Debug, Clone)]
pub struct Settings {
    /// Base URL of the API, e.g. `https://api.example.com`. Never ends with `/`.
    pub api_host: String,
    /// Bearer token sent when requesting sign-in codes
    pub api_token: Option<SecretString>,
    /// JSON file of extra capability records merged over the built-in catalog
    pub custom_models_path: Option<PathBuf>,
}

impl Settings {
    pub async fn load<S>(source: &S) -> ConfigResult<Self>
    where
        S: ConfigSource + ?Sized,
    {
        let api_host: String = source.require(API_HOST_KEY).await?;
        let api_host = validate_api_host(&api_host)?;

        let api_token = source
            .get_raw(API_TOKEN_KEY)
            .await?
            .map(SecretString::from);
        let custom_models_path = Self::custom_models_path(source).await?;

        tracing::debug!(
            api_host = %api_host,
            has_token = api_token.is_some(),
            custom_models = ?custom_models_path,
            "settings loaded"
        );

        Ok(Self {
            api_host,
            api_token,
            custom_models_path,
        })
    }

    /// Reads only `models.custom_path`, so listing models works without `api.host`.
    pub async fn custom_models_path<S>(source: &S) -> ConfigResult<Option<PathBuf>>
    where
        S: ConfigSource + ?Sized,
    {
        Ok(source
            .get::<String>(CUSTOM_MODELS_KEY)
            .await?
            .map(PathBuf::from))
    }
}

fn validate_api_host(raw: &str) -> ConfigResult<String> {
    let invalid = |message: String| ConfigError::InvalidValue {
        key: API_HOST_KEY.to_string(),
        message,
    };

    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme '{other}'"))),
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }

    Ok(raw.trim_end_matches('/').to_string())
}
