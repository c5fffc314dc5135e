//! Configuration for the todo backend.
//!
//! Loads the backend root URL from the environment with a sensible default.

use crate::error::{Result, TodoError};
use reqwest::Url;
use std::env;

/// Environment variable holding the backend root URL
pub const BASE_URL_VAR: &str = "BASE_URL";

/// Backend used when `BASE_URL` is not set
pub const DEFAULT_BASE_URL: &str = "http://jsonplaceholder.typicode.com/";

/// Resource path joined onto the base URL
pub const TODOS_PATH: &str = "todos";

/// Backend configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root URL of the backend service
    pub base_url: String,
}

impl Config {
    /// Create a configuration for an explicit base URL
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Falls back to [`DEFAULT_BASE_URL`] when `BASE_URL` is unset.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// `lookup` is asked for `BASE_URL`; `None` selects [`DEFAULT_BASE_URL`].
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            base_url: lookup(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    /// Resolve the todos endpoint.
    ///
    /// Uses RFC 3986 reference resolution, so a base without a trailing slash
    /// has its last path segment replaced: `http://h/api` resolves to
    /// `http://h/todos` while `http://h/api/` resolves to `http://h/api/todos`.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::InvalidBaseUrl` if the base URL is not an absolute URL
    /// that can carry a path.
    pub fn todos_url(&self) -> Result<Url> {
        let base = Url::parse(&self.base_url)
            .map_err(|e| TodoError::InvalidBaseUrl(format!("{}: {e}", self.base_url)))?;

        base.join(TODOS_PATH)
            .map_err(|e| TodoError::InvalidBaseUrl(format!("{}: {e}", self.base_url)))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
