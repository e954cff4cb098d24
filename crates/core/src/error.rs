use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("File '{path}' not found.")]
    NotFound { path: String },

    #[error("{0}")]
    Unexpected(String),
}

impl From<io::Error> for ExtractError {
    fn from(err: io::Error) -> Self {
        ExtractError::Unexpected(err.to_string())
    }
}
