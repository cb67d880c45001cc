use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{Column, Priority, Task};

/// Distinguishes an absent field from an explicit `null`: absent leaves the
/// stored value untouched, `null` clears it.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateColumnRequest {
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateColumnRequest {
    pub title: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub column_id: String,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub due_date: Option<Option<NaiveDate>>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub estimated_time: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}

/// Drag-relocation event. Indices are zero-based positions within the
/// source and destination columns' ordered task-id lists.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveTaskRequest {
    pub source_column_id: String,
    pub dest_column_id: String,
    pub source_index: usize,
    pub dest_index: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnView {
    pub id: String,
    pub title: String,
    pub tasks: Vec<Task>,
}

impl ColumnView {
    /// Projects a column with its tasks resolved in board order.
    pub fn from_column(column: Column, tasks: &[Task]) -> Self {
        let ordered = column
            .task_ids
            .iter()
            .filter_map(|id| tasks.iter().find(|t| &t.id == id).cloned())
            .collect();
        Self {
            id: column.id,
            title: column.title,
            tasks: ordered,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardResponse {
    pub columns: Vec<ColumnView>,
}
