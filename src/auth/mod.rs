//! Authenticated deep links for browser sign-in.
//!
//! - **Token**: sign-in code and destination path, JSON then URL-safe base64
//! - **Issuer**: obtains a short-lived sign-in code from the account API
//! - **Browser**: prints the link and launches the default browser

mod browser;
mod issuer;
mod token;

pub use browser::{
    BrowserLauncher, SystemBrowser, open_authenticated_url, open_unauthenticated_url, present_url,
};
pub use issuer::{HttpSignInCodeIssuer, SignInCodeIssuer};
pub use token::{AUTH_PATH_PREFIX, SignInToken, app_host, authenticated_url, unauthenticated_url};
