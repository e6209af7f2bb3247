use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("No sizes available in ICO")]
    NoSizesAvailable,

    #[error("Invalid size: {0}")]
    InvalidSizeSpec(String),

    #[error("Invalid color format: {0}")]
    InvalidColorFormat(String),

    #[error("Invalid bitmap: {0}")]
    InvalidBitmap(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
