use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Invalid color format: {0}")]
    InvalidColorFormat(String),

    #[error("Canvas buffer size mismatch: expected {expected} bytes, got {actual}")]
    CanvasSizeMismatch { expected: usize, actual: usize },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

pub type DomainResult<T> = Result<T, DomainError>;
