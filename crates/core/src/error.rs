use thiserror::Error;

use crate::types::document::Category;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", .0.missing_folder_message())]
    MissingFolderPath(Category),

    #[error("Please select both a trade agreement and a term sheet")]
    MissingSelection,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("service responded with status {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },

    #[error("malformed response body: {0}")]
    Decode(String),
}

impl RemoteError {
    /// Human-readable message supplied by the service in its `error` field, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } => Some(message.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("comparison payload is not valid json: {0}")]
    Comparison(#[from] serde_json::Error),
}
