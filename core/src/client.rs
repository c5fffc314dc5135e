//! Todo backend client implementation

use crate::{
    config::Config,
    error::{Result, TodoError},
    filter,
    response::TodoResponse,
    types::TodoRecord,
};
use reqwest::{Client, Url};
use tracing::{debug, warn};

/// Client for the todo backend
#[derive(Clone, Debug)]
pub struct TodoClient {
    client: Client,
    todos_url: Url,
}

impl TodoClient {
    /// Create a client for the given backend root URL
    ///
    /// # Errors
    ///
    /// Returns `TodoError::InvalidBaseUrl` if the URL cannot be joined with `todos`
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::from_config(&Config::new(base_url))
    }

    /// Create a client from configuration
    ///
    /// # Errors
    ///
    /// Returns `TodoError::InvalidBaseUrl` if the configured URL is invalid
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            todos_url: config.todos_url()?,
        })
    }

    /// Create a client with the base URL from the environment
    ///
    /// # Errors
    ///
    /// Returns `TodoError::InvalidBaseUrl` if `BASE_URL` is invalid
    pub fn from_env() -> Result<Self> {
        Self::from_config(&Config::from_env())
    }

    /// The resolved todos endpoint
    #[must_use]
    pub const fn todos_url(&self) -> &Url {
        &self.todos_url
    }

    /// Fetch the todo list.
    ///
    /// Returns `None` when the request fails or the status is 400 or above;
    /// the two cases are indistinguishable to the caller.
    #[tracing::instrument(skip(self), fields(url = %self.todos_url))]
    pub async fn get_todos(&self) -> Option<TodoResponse> {
        match self.send().await {
            Ok(response) => {
                let status = response.status();
                let result = TodoResponse::from_response(response);
                if result.is_none() {
                    debug!(status = status.as_u16(), "Todos request returned non-success status");
                }
                result
            }
            Err(e) => {
                warn!(error = %e, "Todos request failed");
                None
            }
        }
    }

    /// Fetch the todo list and keep only the uncompleted records.
    ///
    /// Never fails: an absent fetch or a malformed body yields an empty list.
    pub async fn get_uncompleted_todos(&self) -> Vec<TodoRecord> {
        filter::from_response(self.get_todos().await).await
    }

    async fn send(&self) -> Result<reqwest::Response> {
        self.client
            .get(self.todos_url.clone())
            .send()
            .await
            .map_err(|e| TodoError::RequestFailed(e.to_string()))
    }
}
