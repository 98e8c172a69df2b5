use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatusError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response status: {0}")]
    UnexpectedStatus(reqwest::StatusCode),

    #[error("Could not decode account list: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StatusError {
    /// Network failures and non-2xx answers, as opposed to a body that
    /// arrived but could not be read.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, StatusError::Http(_) | StatusError::UnexpectedStatus(_))
    }
}

pub type Result<T> = std::result::Result<T, StatusError>;
