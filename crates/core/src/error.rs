#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Format error: {0}")]
    Format(String),

    #[error("Out of range: {0}")]
    OutOfRange(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}
