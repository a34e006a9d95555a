use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::{Error, Result};

const SIGN_IN_CODES_PATH: &str = "/accounts/sign_in_codes";

/// Issues the short-lived code embedded in an authenticated deep link.
#[async_trait]
pub trait SignInCodeIssuer: Send + Sync {
    async fn create_sign_in_code(&self) -> Result<SecretString>;
}

/// Requests sign-in codes from the account API over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSignInCodeIssuer {
    http: reqwest::Client,
    api_host: String,
    auth_token: Option<SecretString>,
}

impl HttpSignInCodeIssuer {
    pub fn new(api_host: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_host: api_host.into(),
            auth_token: None,
        }
    }

    pub fn auth_token(mut self, token: SecretString) -> Self {
        self.auth_token = Some(token);
        self
    }

    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    fn url(&self) -> String {
        format!(
            "{}{}",
            self.api_host.trim_end_matches('/'),
            SIGN_IN_CODES_PATH
        )
    }
}

#[async_trait]
impl SignInCodeIssuer for HttpSignInCodeIssuer {
    async fn create_sign_in_code(&self) -> Result<SecretString> {
        let mut request = self.http.post(self.url());
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await.map_err(Error::Network)?;
        let status = response.status();
        let body = response.text().await.map_err(Error::Network)?;

        if !status.is_success() {
            return Err(Error::Api {
                message: body.trim().to_string(),
                status: Some(status.as_u16()),
            });
        }

        let code = body.trim();
        if code.is_empty() {
            return Err(Error::auth("sign-in code response was empty"));
        }

        tracing::debug!(host = %self.api_host, "issued sign-in code");

        Ok(SecretString::from(code.to_string()))
    }
}
