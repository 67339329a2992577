use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
