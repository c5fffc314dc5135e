//! Domain types for the todo backend.
//!
//! The backend serves an array of todo objects. The filter works on
//! [`TodoRecord`], the raw object as received, so records lacking fields the
//! typed [`Todo`] requires still flow through unchanged. [`Todo`] is the strict
//! typed view for callers that want one.

use crate::error::{Result, TodoError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single todo item as served by the backend
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Owner of the todo
    pub user_id: i64,
    /// Identifier
    pub id: i64,
    /// Title/description of the todo
    pub title: String,
    /// Whether the todo is completed
    pub completed: bool,
}

/// One element of the todos array, kept as the JSON object it arrived as
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoRecord(Map<String, Value>);

impl TodoRecord {
    /// The `completed` flag, if present and a JSON boolean
    #[must_use]
    pub fn completed(&self) -> Option<bool> {
        self.0.get("completed").and_then(Value::as_bool)
    }

    /// True only when `completed` is the literal boolean `false`.
    ///
    /// Missing, `null`, `0` or `""` do not count as uncompleted.
    #[must_use]
    pub fn is_uncompleted(&self) -> bool {
        self.completed() == Some(false)
    }

    /// The `id` field, if present and an integer
    #[must_use]
    pub fn id(&self) -> Option<i64> {
        self.0.get("id").and_then(Value::as_i64)
    }

    /// The `title` field, if present and a string
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.0.get("title").and_then(Value::as_str)
    }

    /// Converts into the strict typed view.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::InvalidRecord` if any of `userId`, `id`, `title`
    /// or `completed` is missing or has the wrong type.
    pub fn to_todo(&self) -> Result<Todo> {
        serde_json::from_value(Value::Object(self.0.clone()))
            .map_err(|e| TodoError::InvalidRecord(e.to_string()))
    }
}

impl From<Todo> for TodoRecord {
    fn from(todo: Todo) -> Self {
        let mut fields = Map::new();
        fields.insert("userId".to_string(), Value::from(todo.user_id));
        fields.insert("id".to_string(), Value::from(todo.id));
        fields.insert("title".to_string(), Value::from(todo.title));
        fields.insert("completed".to_string(), Value::from(todo.completed));
        Self(fields)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use serde_json::json;

    fn record(value: Value) -> TodoRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_todo_uses_camel_case_user_id() {
        let todo: Todo = serde_json::from_value(json!({
            "userId": 1,
            "id": 2,
            "title": "delectus aut autem",
            "completed": false
        }))
        .unwrap();

        assert_eq!(todo.user_id, 1);
        assert_eq!(todo.id, 2);
        assert!(!todo.completed);
    }

    #[test]
    fn test_only_literal_false_is_uncompleted() {
        assert!(record(json!({"id": 1, "completed": false})).is_uncompleted());

        assert!(!record(json!({"id": 1, "completed": true})).is_uncompleted());
        assert!(!record(json!({"id": 1, "completed": null})).is_uncompleted());
        assert!(!record(json!({"id": 1, "completed": 0})).is_uncompleted());
        assert!(!record(json!({"id": 1, "completed": ""})).is_uncompleted());
        assert!(!record(json!({"id": 1, "completed": "false"})).is_uncompleted());
        assert!(!record(json!({"id": 1})).is_uncompleted());
    }

    #[test]
    fn test_partial_record_accessors() {
        let partial = record(json!({"id": 7, "completed": false}));

        assert_eq!(partial.id(), Some(7));
        assert_eq!(partial.completed(), Some(false));
        assert_eq!(partial.title(), None);
        assert!(matches!(partial.to_todo(), Err(TodoError::InvalidRecord(_))));
    }

    #[test]
    fn test_record_serializes_unchanged() {
        let raw = json!({"id": 1, "completed": false, "extra": [1, 2]});
        let parsed = record(raw.clone());
        assert_eq!(serde_json::to_value(&parsed).unwrap(), raw);
    }

    #[test]
    fn test_todo_record_conversion() {
        let todo = Todo {
            user_id: 3,
            id: 4,
            title: "write docs".to_string(),
            completed: true,
        };

        let record = TodoRecord::from(todo.clone());
        assert_eq!(record.completed(), Some(true));
        assert_eq!(record.to_todo().unwrap(), todo);
    }

    #[test]
    fn test_non_object_is_not_a_record() {
        let result: std::result::Result<TodoRecord, _> = serde_json::from_value(json!([1, 2]));
        assert!(result.is_err());
    }
}
