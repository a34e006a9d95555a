use base64::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub const AUTH_PATH_PREFIX: &str = "/auth/";

/// Payload carried in an authenticated deep link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInToken {
    pub pin: String,
    #[serde(rename = "redirectTo")]
    pub redirect_to: String,
}

impl SignInToken {
    pub fn new(pin: impl Into<String>, redirect_to: impl Into<String>) -> Self {
        Self {
            pin: pin.into(),
            redirect_to: redirect_to.into(),
        }
    }

    /// Compact JSON, URL-safe base64 with padding.
    pub fn encode(&self) -> Result<String> {
        let json = serde_json::to_vec(self)?;
        Ok(BASE64_URL_SAFE.encode(json))
    }

    pub fn decode(encoded: &str) -> Result<Self> {
        let json = BASE64_URL_SAFE
            .decode(encoded)
            .map_err(|e| Error::Parse(format!("invalid sign-in token encoding: {}", e)))?;
        Ok(serde_json::from_slice(&json)?)
    }
}

/// Web host companion of an API host: the first `api.` becomes `app.`.
pub fn app_host(api_host: &str) -> String {
    api_host.replacen("api.", "app.", 1)
}

pub fn authenticated_url(api_host: &str, token: &SignInToken) -> Result<String> {
    Ok(format!(
        "{}{}{}",
        app_host(api_host),
        AUTH_PATH_PREFIX,
        token.encode()?
    ))
}

pub fn unauthenticated_url(api_host: &str, path: &str) -> String {
    format!("{}{}", app_host(api_host), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_host_replaces_first_occurrence_only() {
        assert_eq!(app_host("https://api.example.com"), "https://app.example.com");
        assert_eq!(
            app_host("https://api.api.example.com"),
            "https://app.api.example.com"
        );
        assert_eq!(app_host("http://localhost:8099"), "http://localhost:8099");
    }

    #[test]
    fn test_authenticated_url() {
        let token = SignInToken::new("123456", "/plan/42");
        let url = authenticated_url("https://api.example.com", &token).unwrap();

        let encoded = url
            .strip_prefix("https://app.example.com/auth/")
            .expect("url should start with the app host auth prefix");
        assert!(!encoded.contains('/'));
        assert!(!encoded.contains('+'));

        let json = BASE64_URL_SAFE.decode(encoded).unwrap();
        assert_eq!(
            String::from_utf8(json).unwrap(),
            r#"{"pin":"123456","redirectTo":"/plan/42"}"#
        );
        assert_eq!(SignInToken::decode(encoded).unwrap(), token);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            SignInToken::decode("not base64!"),
            Err(Error::Parse(_))
        ));

        let not_a_token = BASE64_URL_SAFE.encode(b"[1,2,3]");
        assert!(matches!(SignInToken::decode(&not_a_token), Err(Error::Json(_))));
    }

    #[test]
    fn test_unauthenticated_url() {
        assert_eq!(
            unauthenticated_url("https://api.example.com", "/settings/billing"),
            "https://app.example.com/settings/billing"
        );
    }
}
