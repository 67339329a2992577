use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("field '{field}' holds non-numeric answer '{value}'")]
    UnparseableValue { field: String, value: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
