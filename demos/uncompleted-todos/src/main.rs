//! Uncompleted todos demo
//!
//! Fetches the todo list once and prints the items that are not completed.
//!
//! ## Usage
//!
//! Point it at a backend (defaults to the public JSONPlaceholder service):
//! ```bash
//! export BASE_URL="http://localhost:3000/"
//! ```
//!
//! Run the example:
//! ```bash
//! cargo run -p uncompleted-todos
//! ```

use todo_filter_core::{Config, TodoClient};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::from_env();
    let client = TodoClient::from_config(&config)?;
    info!(url = %client.todos_url(), "Fetching todos");

    let todos = client.get_uncompleted_todos().await;
    info!(count = todos.len(), "Fetched uncompleted todos");

    println!("=== Uncompleted Todos ({}) ===\n", todos.len());
    for todo in &todos {
        let id = todo.id().map_or_else(|| "?".to_string(), |id| id.to_string());
        println!("  [ ] #{id} {}", todo.title().unwrap_or("<untitled>"));
    }

    Ok(())
}

/// Initialize tracing with an env-driven filter
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "uncompleted_todos=info,todo_filter_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
