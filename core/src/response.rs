//! Successful fetch results

use crate::error::{Result, TodoError};
use crate::types::{Todo, TodoRecord};
use reqwest::{Response, StatusCode, Url};

/// Whether a status counts as a usable response.
///
/// Anything below 400 is accepted, so informational and redirect statuses the
/// client hands back unfollowed pass as well.
#[must_use]
pub fn is_ok_status(status: StatusCode) -> bool {
    !(status.is_client_error() || status.is_server_error())
}

/// A response whose status passed [`is_ok_status`].
///
/// The body has not been read yet; call [`records`](Self::records) or
/// [`todos`](Self::todos) to consume it.
#[derive(Debug)]
pub struct TodoResponse {
    inner: Response,
}

impl TodoResponse {
    /// Wraps a response, returning `None` for a non-success status
    #[must_use]
    pub fn from_response(response: Response) -> Option<Self> {
        is_ok_status(response.status()).then_some(Self { inner: response })
    }

    /// HTTP status of the response
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.inner.status()
    }

    /// Always true for a constructed value
    #[must_use]
    pub fn is_ok(&self) -> bool {
        is_ok_status(self.status())
    }

    /// Final URL, after any redirects
    #[must_use]
    pub fn url(&self) -> &Url {
        self.inner.url()
    }

    /// Decode the body as a JSON array of objects.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::ResponseParseFailed` if the body cannot be read, is
    /// not JSON, is not an array, or contains a non-object element.
    pub async fn records(self) -> Result<Vec<TodoRecord>> {
        self.inner
            .json::<Vec<TodoRecord>>()
            .await
            .map_err(|e| TodoError::ResponseParseFailed(e.to_string()))
    }

    /// Decode the body strictly as typed todos.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::ResponseParseFailed` if any element lacks one of the
    /// todo fields or the body is otherwise malformed.
    pub async fn todos(self) -> Result<Vec<Todo>> {
        self.inner
            .json::<Vec<Todo>>()
            .await
            .map_err(|e| TodoError::ResponseParseFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_and_redirect_statuses_are_ok() {
        assert!(is_ok_status(StatusCode::OK));
        assert!(is_ok_status(StatusCode::NO_CONTENT));
        assert!(is_ok_status(StatusCode::NOT_MODIFIED));
        assert!(is_ok_status(StatusCode::FOUND));
    }

    #[test]
    fn test_error_statuses_are_not_ok() {
        assert!(!is_ok_status(StatusCode::BAD_REQUEST));
        assert!(!is_ok_status(StatusCode::NOT_FOUND));
        assert!(!is_ok_status(StatusCode::TOO_MANY_REQUESTS));
        assert!(!is_ok_status(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(!is_ok_status(StatusCode::SERVICE_UNAVAILABLE));
    }
}
