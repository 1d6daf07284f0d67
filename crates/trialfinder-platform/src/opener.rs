//! Hands URLs to the operating system's default handler.
//!
//! - macOS: `open <url>`
//! - Windows: `cmd /C start "" <url>`
//! - Other unix: `xdg-open <url>`
//!
//! Only web, mail and phone links leave the app; any other scheme is
//! refused before a process is spawned.

use trialfinder_common::PlatformError;
use tracing::{debug, info};

/// URL schemes handed to the OS.
pub const EXTERNAL_SCHEMES: &[&str] = &["http", "https", "mailto", "tel"];

/// Opens a URL outside the embedded document.
pub trait UrlOpener {
    fn open(&self, url: &str) -> Result<(), PlatformError>;
}

/// Default opener backed by the platform's URL handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemUrlOpener;

impl UrlOpener for SystemUrlOpener {
    fn open(&self, url: &str) -> Result<(), PlatformError> {
        check_scheme(url)?;
        platform_open(url)?;
        info!(url = %url, "opened url in external handler");
        Ok(())
    }
}

/// Lowercased scheme of `url`, if it has one.
pub fn url_scheme(url: &str) -> Option<String> {
    let (scheme, _) = url.trim().split_once(':')?;
    let valid = !scheme.is_empty()
        && scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then(|| scheme.to_ascii_lowercase())
}

/// Reject URLs whose scheme is not in [`EXTERNAL_SCHEMES`].
pub fn check_scheme(url: &str) -> Result<(), PlatformError> {
    match url_scheme(url) {
        Some(scheme) if EXTERNAL_SCHEMES.contains(&scheme.as_str()) => Ok(()),
        Some(scheme) => Err(PlatformError::UnsupportedScheme(scheme)),
        None => Err(PlatformError::UnsupportedScheme(format!(
            "no scheme in '{url}'"
        ))),
    }
}

#[cfg(target_os = "macos")]
fn handler_command(url: &str) -> std::process::Command {
    let mut cmd = std::process::Command::new("open");
    cmd.arg(url);
    cmd
}

#[cfg(windows)]
fn handler_command(url: &str) -> std::process::Command {
    let mut cmd = std::process::Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(url);
    cmd
}

#[cfg(all(unix, not(target_os = "macos")))]
fn handler_command(url: &str) -> std::process::Command {
    let mut cmd = std::process::Command::new("xdg-open");
    cmd.arg(url);
    cmd
}

#[cfg(any(unix, windows))]
fn platform_open(url: &str) -> Result<(), PlatformError> {
    let mut child = handler_command(url)
        .stdin(std::process::Stdio::null())
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .spawn()
        .map_err(|e| PlatformError::OpenerError(format!("failed to launch url handler: {e}")))?;

    // Reap the handler off the UI thread.
    std::thread::spawn(move || match child.wait() {
        Ok(status) => debug!(?status, "url handler exited"),
        Err(e) => debug!(error = %e, "url handler wait failed"),
    });
    Ok(())
}

#[cfg(not(any(unix, windows)))]
fn platform_open(_url: &str) -> Result<(), PlatformError> {
    Err(PlatformError::NotSupported(
        "no external url handler on this platform".into(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_is_lowercased() {
        assert_eq!(url_scheme("HTTPS://Example.com").as_deref(), Some("https"));
        assert_eq!(url_scheme("mailto:a@b.c").as_deref(), Some("mailto"));
    }

    #[test]
    fn scheme_missing_or_invalid() {
        assert_eq!(url_scheme("example.com/path"), None);
        assert_eq!(url_scheme(":nothing"), None);
        assert_eq!(url_scheme("1http://x"), None);
    }

    #[test]
    fn web_mail_and_phone_schemes_pass() {
        assert!(check_scheme("https://example.com/x").is_ok());
        assert!(check_scheme("http://example.com").is_ok());
        assert!(check_scheme("mailto:study@example.org").is_ok());
        assert!(check_scheme("tel:+15555550100").is_ok());
    }

    #[test]
    fn other_schemes_are_refused() {
        for url in [
            "javascript:alert(1)",
            "file:///etc/passwd",
            "data:text/html,hi",
            "intent://scan/#Intent;end",
        ] {
            let err = check_scheme(url).unwrap_err();
            assert!(
                matches!(err, PlatformError::UnsupportedScheme(_)),
                "{url} should be refused"
            );
        }
    }

    #[test]
    fn system_opener_refuses_before_spawning() {
        let err = SystemUrlOpener.open("javascript:void(0)").unwrap_err();
        assert_eq!(err.to_string(), "unsupported url scheme: javascript");
    }
}
