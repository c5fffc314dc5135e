//! Error types for the todo client

use thiserror::Error;

/// Errors raised by the fallible helpers of the todo client.
///
/// None of these escape [`TodoClient::get_todos`](crate::TodoClient::get_todos)
/// or [`TodoClient::get_uncompleted_todos`](crate::TodoClient::get_uncompleted_todos):
/// the fetch stage collapses them into `None` and the filter stage into an
/// empty list.
#[derive(Debug, Error)]
pub enum TodoError {
    /// The configured base URL cannot be parsed or joined with `todos`
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// HTTP request failed before a response was received
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response body is not a JSON array of objects
    #[error("Response parsing failed: {0}")]
    ResponseParseFailed(String),

    /// A record does not have the shape of a [`Todo`](crate::Todo)
    #[error("Invalid todo record: {0}")]
    InvalidRecord(String),
}

/// Result alias for todo client operations
pub type Result<T> = std::result::Result<T, TodoError>;
