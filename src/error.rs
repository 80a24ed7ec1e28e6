//! Error type shared by the controller and its collaborators.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("unknown theme value: {0:?}")]
    UnknownTheme(String),

    #[error("preference storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("preference storage failed: {0}")]
    Storage(String),

    #[error("color-scheme query unavailable: {0}")]
    MediaQuery(String),

    #[error("document error: {0}")]
    Dom(String),

    #[error("invalid theme config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid theme config: `{0}` must not be empty")]
    EmptyConfigField(&'static str),
}

pub type Result<T> = std::result::Result<T, ThemeError>;
