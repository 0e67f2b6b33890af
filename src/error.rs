use thiserror::Error;

#[derive(Error, Debug)]
pub enum DraftpadError {
    #[error("Cannot save an empty message")]
    EmptyContent,

    #[error("A save is already in progress")]
    SaveInProgress,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, DraftpadError>;
