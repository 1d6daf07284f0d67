use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("unsupported url scheme: {0}")]
    UnsupportedScheme(String),

    #[error("url opener error: {0}")]
    OpenerError(String),

    #[error("location service error: {0}")]
    LocationError(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

/// Failures inside the embedding bridge. None of them stop the widget
/// from rendering.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("location unavailable: {0}")]
    LocationUnavailable(String),

    #[error("failed to open {url} externally: {reason}")]
    ExternalOpenFailure { url: String, reason: String },

    #[error("malformed bridge message: {0}")]
    MalformedMessage(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TrialFinderError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("webview error: {0}")]
    WebView(String),

    #[error("{0}")]
    Other(String),
}
