use thiserror::Error;

/// Main error type for SharkDeal
#[derive(Debug, Error)]
pub enum SharkDealError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse classification of a [`SharkDealError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Upstream,
    Config,
}

impl SharkDealError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SharkDealError::Network(_) => ErrorKind::Network,
            SharkDealError::Upstream(_) => ErrorKind::Upstream,
            SharkDealError::Config(_) => ErrorKind::Config,
        }
    }
}

/// Result type alias using SharkDealError
pub type Result<T> = std::result::Result<T, SharkDealError>;
