use thiserror::Error;

#[derive(Debug, Error)]
pub enum CardlinkError {
    #[error("card not found: {0}")]
    CardNotFound(String),

    #[error("card already exists: {0}")]
    CardExists(String),

    #[error("invalid card id '{0}': expected 24 hex characters")]
    InvalidCardId(String),

    #[error("invalid visit target '{0}': not a card id and not an absolute URL")]
    InvalidVisitTarget(String),

    #[error("action not found: {0}")]
    ActionNotFound(u32),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, CardlinkError>;
