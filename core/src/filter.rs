//! Filtering fetched todos down to the uncompleted ones

use crate::response::TodoResponse;
use crate::types::TodoRecord;
use tracing::{debug, warn};

/// Keep only records whose `completed` field is the literal `false`,
/// preserving order.
#[must_use]
pub fn uncompleted(records: Vec<TodoRecord>) -> Vec<TodoRecord> {
    records
        .into_iter()
        .filter(TodoRecord::is_uncompleted)
        .collect()
}

/// Turn a fetch result into the uncompleted records it holds.
///
/// An absent result yields an empty list. So does a body that is not a JSON
/// array of objects; the decode error is logged and dropped.
pub async fn from_response(response: Option<TodoResponse>) -> Vec<TodoRecord> {
    let Some(response) = response else {
        return Vec::new();
    };

    match response.records().await {
        Ok(records) => {
            let total = records.len();
            let kept = uncompleted(records);
            debug!(total, uncompleted = kept.len(), "Filtered todos");
            kept
        }
        Err(e) => {
            warn!(error = %e, "Discarding malformed todos body");
            Vec::new()
        }
    }
}
