use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Fatal errors that abort the client. Per-read fetch failures are not
/// fatal; they surface as [`crate::client::ClientError`] notices instead.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("invalid base url: {0}")]
    BaseUrl(String),
    #[error("terminal io: {0}")]
    Io(#[from] std::io::Error),
    #[error("terminal: {0}")]
    Terminal(String),
}
