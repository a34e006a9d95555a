use std::io::{self, Write};

use secrecy::ExposeSecret;

use super::issuer::SignInCodeIssuer;
use super::token::{SignInToken, authenticated_url, unauthenticated_url};
use crate::Result;

pub trait BrowserLauncher: Send + Sync {
    fn open(&self, url: &str) -> io::Result<()>;
}

/// Opens URLs in the user's default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl BrowserLauncher for SystemBrowser {
    fn open(&self, url: &str) -> io::Result<()> {
        webbrowser::open(url)
    }
}

/// Prints `message` and the raw URL, then tries to launch a browser.
///
/// A launch failure is reported on `out` and never returned as an error.
pub fn present_url(
    out: &mut dyn Write,
    launcher: &dyn BrowserLauncher,
    message: &str,
    url: &str,
) -> io::Result<()> {
    writeln!(
        out,
        "{}\n\nIf it doesn't open automatically, use this URL:\n{}",
        message, url
    )?;

    if let Err(e) = launcher.open(url) {
        tracing::warn!(error = %e, "failed to launch browser");
        writeln!(out, "Failed to open URL automatically: {}", e)?;
        writeln!(out, "Please open the URL manually in your browser.")?;
    }

    Ok(())
}

/// Issues a sign-in code and opens the authenticated deep link to `path`.
///
/// Returns the URL. Failing to obtain a code is an error; failing to launch a
/// browser is not.
pub async fn open_authenticated_url(
    issuer: &dyn SignInCodeIssuer,
    launcher: &dyn BrowserLauncher,
    out: &mut dyn Write,
    api_host: &str,
    message: &str,
    path: &str,
) -> Result<String> {
    let code = issuer.create_sign_in_code().await?;
    let token = SignInToken::new(code.expose_secret(), path);
    let url = authenticated_url(api_host, &token)?;

    present_url(out, launcher, message, &url)?;
    Ok(url)
}

pub fn open_unauthenticated_url(
    launcher: &dyn BrowserLauncher,
    out: &mut dyn Write,
    api_host: &str,
    message: &str,
    path: &str,
) -> Result<String> {
    let url = unauthenticated_url(api_host, path);
    present_url(out, launcher, message, &url)?;
    Ok(url)
}
