use std::io;
use std::path::PathBuf;
use thiserror::Error;

use domain::error::DomainError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Not a valid ICO file: {message}")]
    InvalidContainer { message: String },

    #[error("Codec error: {message}")]
    CodecError { message: String },

    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

pub type AppResult<T> = Result<T, AppError>;
