//! Error types for Portal.

use std::io;

/// Errors produced by the Portal launcher.
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("store error: {0}")]
    Store(String),

    #[error("TLS error: {0}")]
    Tls(String),

    #[error("URL error: {0}")]
    Url(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("launch error: {0}")]
    Launch(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, PortalError>;
