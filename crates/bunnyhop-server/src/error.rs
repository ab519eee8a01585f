//! Server error types and handling

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use bunnyhop_commands::CommandError;
use thiserror::Error;

use crate::pages;

/// Server error types
#[derive(Debug, Error)]
pub enum ServerError {
    /// Loading the command table or building a destination failed
    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    /// Reading the server configuration failed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Binding or serving failed
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(pages::FAILURE_PAGE),
        )
            .into_response()
    }
}

/// Result type alias for server operations
pub type ServerResult<T> = Result<T, ServerError>;
