use thiserror::Error;

use clearbrook_core::CoreError;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("invalid answer: {0}")]
    Answer(#[from] CoreError),
}
