use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("chart render error: {0}")]
    Render(String),

    #[error("checkout error: {0}")]
    Checkout(String),

    #[error("scheduling error: {0}")]
    Scheduling(String),
}
