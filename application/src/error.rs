use std::io;
use thiserror::Error;

use domain::error::DomainError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Invalid coordinates: {message}")]
    InvalidCoordinates { message: String },

    #[error("Invalid color format: {message}")]
    InvalidColorFormat { message: String },

    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("API error: {message}")]
    ApiError { message: String },

    #[error("Canvas endpoint unavailable")]
    ServiceUnavailable,

    #[error("Rate limited, retry in {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Task error: {message}")]
    TaskError { message: String },
}

pub type AppResult<T> = Result<T, AppError>;
