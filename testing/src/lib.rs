//! # Todo Filter Testing
//!
//! Testing utilities and helpers for the todo filter client.
//!
//! This crate provides:
//! - A mock todo backend served over real HTTP
//! - Todo fixtures as JSON values
//! - Property-based testing strategies
//! - A tracing initializer for tests
//!
//! ## Example
//!
//! ```ignore
//! use todo_filter_core::TodoClient;
//! use todo_filter_testing::{MockTodoBackend, fixtures::todo};
//! use serde_json::json;
//!
//! #[tokio::test]
//! async fn test_filters_completed() {
//!     let backend = MockTodoBackend::start().await;
//!     backend.serve_todos(&json!([todo(1, true), todo(2, false)])).await;
//!
//!     let client = TodoClient::new(backend.base_url()).unwrap();
//!     assert_eq!(client.get_uncompleted_todos().await.len(), 1);
//! }
//! ```

use serde_json::Value;
use std::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock backend implementations
pub mod mocks {
    use super::{Mock, MockServer, ResponseTemplate, Value, method, path};

    /// A todo backend running on a local port.
    ///
    /// Dropping it shuts the server down and verifies any mounted
    /// expectations.
    pub struct MockTodoBackend {
        server: MockServer,
    }

    impl MockTodoBackend {
        /// Start a backend with nothing mounted; every request gets a 404
        pub async fn start() -> Self {
            Self {
                server: MockServer::start().await,
            }
        }

        /// Root URL to hand to the client, without a trailing slash
        #[must_use]
        pub fn base_url(&self) -> String {
            self.server.uri()
        }

        /// Serve `body` as JSON at `GET /todos`
        pub async fn serve_todos(&self, body: &Value) {
            self.serve_todos_at("/todos", body).await;
        }

        /// Serve `body` as JSON at `GET {route}`
        pub async fn serve_todos_at(&self, route: &str, body: &Value) {
            Mock::given(method("GET"))
                .and(path(route))
                .respond_with(ResponseTemplate::new(200).set_body_json(body))
                .mount(&self.server)
                .await;
        }

        /// Serve `body` verbatim with a JSON content type at `GET /todos`
        pub async fn serve_raw(&self, body: &str) {
            Mock::given(method("GET"))
                .and(path("/todos"))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_raw(body.as_bytes().to_vec(), "application/json"),
                )
                .mount(&self.server)
                .await;
        }

        /// Answer `GET /todos` with `status` and an empty body
        pub async fn serve_status(&self, status: u16) {
            Mock::given(method("GET"))
                .and(path("/todos"))
                .respond_with(ResponseTemplate::new(status))
                .mount(&self.server)
                .await;
        }

        /// Serve `body` at `GET /todos` and require exactly `times` requests
        pub async fn expect_todos(&self, body: &Value, times: u64) {
            Mock::given(method("GET"))
                .and(path("/todos"))
                .respond_with(ResponseTemplate::new(200).set_body_json(body))
                .expect(times)
                .mount(&self.server)
                .await;
        }

        /// Number of requests the backend has received so far
        pub async fn request_count(&self) -> usize {
            self.server
                .received_requests()
                .await
                .map_or(0, |requests| requests.len())
        }
    }
}

/// Base URL of a local port with nothing listening on it.
///
/// Binds an ephemeral port and releases it immediately, so connecting is
/// refused. Falls back to port 9 (discard) if binding fails.
#[must_use]
pub fn unreachable_base_url() -> String {
    let port = TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .map_or(9, |addr| addr.port());
    format!("http://127.0.0.1:{port}")
}

/// Todo fixtures as JSON values
pub mod fixtures {
    use serde_json::{Value, json};

    /// A complete todo object
    #[must_use]
    pub fn todo(id: i64, completed: bool) -> Value {
        json!({
            "userId": 1,
            "id": id,
            "title": format!("todo {id}"),
            "completed": completed,
        })
    }

    /// Minimal `{"id", "completed"}` object
    #[must_use]
    pub fn todo_json(id: i64, completed: bool) -> Value {
        json!({"id": id, "completed": completed})
    }

    /// Five todos in the shape the public backend serves; ids 1, 2 and 4
    /// are uncompleted
    #[must_use]
    pub fn sample_todos() -> Value {
        json!([
            {"userId": 1, "id": 1, "title": "delectus aut autem", "completed": false},
            {"userId": 1, "id": 2, "title": "quis ut nam facilis et officia qui", "completed": false},
            {"userId": 1, "id": 3, "title": "fugiat veniam minus", "completed": true},
            {"userId": 1, "id": 4, "title": "et porro tempora", "completed": false},
            {"userId": 2, "id": 5, "title": "laboriosam mollitia et enim quasi", "completed": true},
        ])
    }
}

/// Property-based testing utilities using proptest.
pub mod properties {
    use proptest::prelude::*;
    use serde_json::{Map, Value};

    /// Any value a backend might put in `completed`, or `None` for a missing
    /// field
    pub fn arb_completed() -> impl Strategy<Value = Option<Value>> {
        prop_oneof![
            3 => Just(Some(Value::Bool(false))),
            3 => Just(Some(Value::Bool(true))),
            1 => Just(None),
            1 => Just(Some(Value::Null)),
            1 => any::<i64>().prop_map(|n| Some(Value::from(n))),
            1 => "[a-z]{0,5}".prop_map(|s| Some(Value::from(s))),
        ]
    }

    /// A todo object with a random id and an arbitrary `completed`
    pub fn arb_record() -> impl Strategy<Value = Value> {
        (any::<i64>(), arb_completed()).prop_map(|(id, completed)| {
            let mut fields = Map::new();
            fields.insert("id".to_string(), Value::from(id));
            if let Some(completed) = completed {
                fields.insert("completed".to_string(), completed);
            }
            Value::Object(fields)
        })
    }

    /// Up to 32 todo objects
    pub fn arb_records() -> impl Strategy<Value = Vec<Value>> {
        prop::collection::vec(arb_record(), 0..32)
    }
}

/// Install a test subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call takes effect.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_filter_core=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

// Re-export commonly used items
pub use mocks::MockTodoBackend;
