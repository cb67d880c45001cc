use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::Priority;

/// A single board item. `column_id` must name an existing [`Column`] whose
/// `task_ids` lists this task's id exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
    pub estimated_time: String,
    pub completed: bool,
    pub column_id: String,
}

/// A workflow stage. `task_ids` defines the within-column display order;
/// no id may appear in more than one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: String,
    pub title: String,
    pub task_ids: Vec<String>,
}
