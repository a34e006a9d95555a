//! Sign-in Link Tests
//!
//! Token encoding, web host derivation, and the HTTP sign-in code issuer
//! against a mock account API.
//!
//! Run: cargo nextest run --test sign_in_tests

use std::io;
use std::sync::Mutex;

use model_capabilities::Error;
use model_capabilities::auth::{
    BrowserLauncher, HttpSignInCodeIssuer, SignInCodeIssuer, SignInToken, app_host,
    authenticated_url, open_authenticated_url,
};
use secrecy::{ExposeSecret, SecretString};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Default)]
struct RecordingBrowser {
    opened: Mutex<Vec<String>>,
}

impl BrowserLauncher for RecordingBrowser {
    fn open(&self, url: &str) -> io::Result<()> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

// =============================================================================
// Link construction
// =============================================================================

mod link_tests {
    use super::*;

    #[test]
    fn test_plan_link() {
        let token = SignInToken::new("123456", "/plan/42");
        let url = authenticated_url("https://api.example.com", &token).unwrap();

        assert_eq!(
            url,
            "https://app.example.com/auth/eyJwaW4iOiIxMjM0NTYiLCJyZWRpcmVjdFRvIjoiL3BsYW4vNDIifQ=="
        );

        let encoded = url.rsplit('/').next().unwrap();
        assert_eq!(SignInToken::decode(encoded).unwrap(), token);
    }

    #[test]
    fn test_app_host_only_first_occurrence() {
        assert_eq!(app_host("https://api.example.com"), "https://app.example.com");
        assert_eq!(
            app_host("https://api.api.example.com"),
            "https://app.api.example.com"
        );
        assert_eq!(app_host("http://localhost:8080"), "http://localhost:8080");
    }
}

// =============================================================================
// HTTP issuer
// =============================================================================

mod issuer_tests {
    use super::*;

    #[tokio::test]
    async fn test_issue_code_with_bearer_token() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/accounts/sign_in_codes"))
            .and(header("Authorization", "Bearer session-token"))
            .respond_with(ResponseTemplate::new(200).set_body_string("654321\n"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let issuer = HttpSignInCodeIssuer::new(mock_server.uri())
            .auth_token(SecretString::from("session-token"));

        let code = issuer.create_sign_in_code().await.unwrap();
        assert_eq!(code.expose_secret(), "654321");
    }

    #[tokio::test]
    async fn test_issue_code_unauthorized() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/accounts/sign_in_codes"))
            .respond_with(ResponseTemplate::new(401).set_body_string("not signed in"))
            .mount(&mock_server)
            .await;

        let issuer = HttpSignInCodeIssuer::new(mock_server.uri());
        let err = issuer.create_sign_in_code().await.unwrap_err();

        assert!(matches!(err, Error::Api { status: Some(401), .. }));
        assert!(err.is_unauthorized());
        assert!(!err.is_retryable());
        assert!(err.to_string().contains("not signed in"));
    }

    #[tokio::test]
    async fn test_issue_code_empty_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/accounts/sign_in_codes"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let issuer = HttpSignInCodeIssuer::new(mock_server.uri());
        let err = issuer.create_sign_in_code().await.unwrap_err();
        assert!(matches!(err, Error::Auth { .. }));
    }

    #[tokio::test]
    async fn test_server_error_is_retryable() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/accounts/sign_in_codes"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let issuer = HttpSignInCodeIssuer::new(mock_server.uri());
        let err = issuer.create_sign_in_code().await.unwrap_err();
        assert_eq!(err.status_code(), Some(503));
        assert!(err.is_retryable());
    }
}

// =============================================================================
// End to end
// =============================================================================

mod open_tests {
    use super::*;

    #[tokio::test]
    async fn test_open_authenticated_url() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/accounts/sign_in_codes"))
            .respond_with(ResponseTemplate::new(200).set_body_string("123456"))
            .mount(&mock_server)
            .await;

        let issuer = HttpSignInCodeIssuer::new(mock_server.uri());
        let browser = RecordingBrowser::default();
        let mut out = Vec::new();

        let url = open_authenticated_url(
            &issuer,
            &browser,
            &mut out,
            &mock_server.uri(),
            "Opening your plan...",
            "/plan/42",
        )
        .await
        .unwrap();

        let prefix = format!("{}/auth/", mock_server.uri());
        let encoded = url.strip_prefix(&prefix).expect("link under /auth/");
        let token = SignInToken::decode(encoded).unwrap();
        assert_eq!(token, SignInToken::new("123456", "/plan/42"));

        assert_eq!(*browser.opened.lock().unwrap(), vec![url.clone()]);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Opening your plan..."));
        assert!(text.contains(&url));
    }

    #[tokio::test]
    async fn test_issuer_failure_opens_nothing() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/accounts/sign_in_codes"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let issuer = HttpSignInCodeIssuer::new(mock_server.uri());
        let browser = RecordingBrowser::default();
        let mut out = Vec::new();

        let result = open_authenticated_url(
            &issuer,
            &browser,
            &mut out,
            &mock_server.uri(),
            "Opening your plan...",
            "/plan/42",
        )
        .await;

        assert!(result.is_err());
        assert!(browser.opened.lock().unwrap().is_empty());
        assert!(out.is_empty());
    }
}
