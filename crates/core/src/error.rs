/// Domain errors raised by the pure analysis logic.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
}
