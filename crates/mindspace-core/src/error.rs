//! Error types for the MindSpace client.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("network error: {0}")]
    Network(String),

    #[error("{message}")]
    Backend { status: u16, message: String },

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_error_displays_message_only() {
        let err = Error::Backend {
            status: 409,
            message: "User with this email already exists".to_string(),
        };
        assert_eq!(err.to_string(), "User with this email already exists");
    }

    #[test]
    fn storage_error_carries_cause() {
        let err = Error::Storage("quota exceeded".to_string());
        assert_eq!(err.to_string(), "storage error: quota exceeded");
    }
}
