//! Error type for the configuration and command-line layer.

use thiserror::Error;

/// Errors from the configuration and command-line layer.
///
/// Locating a parse failure never produces one of these.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not determine home directory")]
    ConfigDir,

    #[error("unknown locale '{0}' (expected 'en' or 'zh-CN')")]
    UnknownLocale(String),

    #[error("{0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, Error>;
