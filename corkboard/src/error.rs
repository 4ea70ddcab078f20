//! Error types for the board client

use thiserror::Error;

/// Result type for board client operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur in board client operations
#[derive(Debug, Error)]
pub enum BoardError {
    /// Board not found on the server
    #[error("board not found: {id}")]
    BoardNotFound { id: String },

    /// The server answered with a GraphQL-level error
    #[error("GraphQL error: {message}")]
    Graphql { message: String },

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid endpoint URL
    #[error("invalid endpoint: {0}")]
    Url(#[from] url::ParseError),
}

impl BoardError {
    /// Create a GraphQL error from a server-supplied message
    pub fn graphql(message: impl Into<String>) -> Self {
        Self::Graphql {
            message: message.into(),
        }
    }

    /// Create a board-not-found error
    pub fn board_not_found(id: impl Into<String>) -> Self {
        Self::BoardNotFound { id: id.into() }
    }
}
