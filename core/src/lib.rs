//! # Todo Filter Core
//!
//! Fetches a remote todo list over HTTP and filters it down to the items
//! that are not yet completed.
//!
//! The work happens in two stages, run in sequence:
//!
//! - **Fetch**: one `GET {BASE_URL}/todos`. A usable response (status below
//!   400) comes back as `Some`. Transport failures and error statuses both
//!   come back as `None`.
//! - **Filter**: decode the body as an array of objects and keep, in order,
//!   those whose `completed` field is the literal boolean `false`. An absent
//!   fetch or a malformed body produces an empty list.
//!
//! No error escapes either stage. The fallible building blocks
//! ([`Config::todos_url`], [`TodoResponse::records`], [`TodoRecord::to_todo`])
//! return [`TodoError`] for callers who want the detail.
//!
//! ## Example
//!
//! ```no_run
//! use todo_filter_core::TodoClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TodoClient::new("http://jsonplaceholder.typicode.com/")?;
//!
//!     for todo in client.get_uncompleted_todos().await {
//!         println!("{:?}: {:?}", todo.id(), todo.title());
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod response;
pub mod types;

// Re-export main types for convenience
pub use client::TodoClient;
pub use config::{BASE_URL_VAR, Config, DEFAULT_BASE_URL, TODOS_PATH};
pub use error::TodoError;
pub use response::TodoResponse;
pub use types::{Todo, TodoRecord};

/// Fetch the todo list from the backend named by `BASE_URL`.
///
/// Configuration is read from the environment on every call.
pub async fn get_todos() -> Option<TodoResponse> {
    get_todos_with(&Config::from_env()).await
}

/// Fetch the todo list from the backend named by `BASE_URL` and keep only
/// the uncompleted records.
pub async fn get_uncompleted_todos() -> Vec<TodoRecord> {
    get_uncompleted_todos_with(&Config::from_env()).await
}

/// Fetch the todo list from the backend in `config`.
///
/// An invalid base URL is treated like any other failure and yields `None`.
pub async fn get_todos_with(config: &Config) -> Option<TodoResponse> {
    match TodoClient::from_config(config) {
        Ok(client) => client.get_todos().await,
        Err(e) => {
            tracing::warn!(error = %e, "Cannot build todos client");
            None
        }
    }
}

/// Fetch the todo list from the backend in `config` and keep only the
/// uncompleted records.
pub async fn get_uncompleted_todos_with(config: &Config) -> Vec<TodoRecord> {
    filter::from_response(get_todos_with(config).await).await
}
