use uuid::Uuid;

use crate::api::dto::{
    BoardResponse, ColumnView, CreateColumnRequest, CreateTaskRequest, MoveTaskRequest,
    UpdateColumnRequest, UpdateTaskRequest,
};
use crate::domain::{Column, Priority, StudBudError, Task};
use crate::services::reorder::{reorder, TaskMove};
use crate::storage::Store;

const DEFAULT_TASK_TITLE: &str = "New Task";
const DEFAULT_COLUMN_TITLE: &str = "New Column";
const DEFAULT_ESTIMATED_TIME: &str = "1:00";

/// Mutations over the task/column collections. Every operation loads the
/// collections it touches, computes the new value in full, and persists it
/// before returning, so no partial write is ever observable.
pub struct BoardService;

impl BoardService {
    // ── Column CRUD ────────────────────────────────────────────

    pub fn create_column(
        store: &Store,
        req: CreateColumnRequest,
    ) -> Result<Column, StudBudError> {
        let mut columns = store.columns()?;
        let column = Column {
            id: Uuid::new_v4().to_string(),
            title: req.title.unwrap_or_else(|| DEFAULT_COLUMN_TITLE.into()),
            task_ids: Vec::new(),
        };
        columns.push(column.clone());
        store.save_columns(&columns)?;
        Ok(column)
    }

    pub fn update_column(
        store: &Store,
        id: &str,
        req: UpdateColumnRequest,
    ) -> Result<Column, StudBudError> {
        let mut columns = store.columns()?;
        let column = columns
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StudBudError::NotFound(format!("Column not found: {}", id)))?;
        column.title = req.title;
        let updated = column.clone();
        store.save_columns(&columns)?;
        Ok(updated)
    }

    /// Deletes a column and cascade-deletes its member tasks, so no task is
    /// ever left pointing at a column that no longer exists.
    pub fn delete_column(store: &Store, id: &str) -> Result<(), StudBudError> {
        let mut columns = store.columns()?;
        let before = columns.len();
        columns.retain(|c| c.id != id);
        if columns.len() == before {
            return Err(StudBudError::NotFound(format!("Column not found: {}", id)));
        }

        let mut tasks = store.tasks()?;
        let task_count = tasks.len();
        tasks.retain(|t| t.column_id != id);
        let removed = task_count - tasks.len();

        store.save_columns(&columns)?;
        store.save_tasks(&tasks)?;

        if removed > 0 {
            tracing::debug!(column_id = id, removed, "Cascade-deleted member tasks");
        }
        Ok(())
    }

    // ── Task CRUD ──────────────────────────────────────────────

    pub fn create_task(store: &Store, req: CreateTaskRequest) -> Result<Task, StudBudError> {
        let mut columns = store.columns()?;
        let column = columns
            .iter_mut()
            .find(|c| c.id == req.column_id)
            .ok_or_else(|| {
                StudBudError::NotFound(format!("Column not found: {}", req.column_id))
            })?;

        let task = Task {
            id: Uuid::new_v4().to_string(),
            title: req.title.unwrap_or_else(|| DEFAULT_TASK_TITLE.into()),
            due_date: None,
            priority: Priority::Medium,
            estimated_time: DEFAULT_ESTIMATED_TIME.into(),
            completed: false,
            column_id: column.id.clone(),
        };
        column.task_ids.push(task.id.clone());

        let mut tasks = store.tasks()?;
        tasks.push(task.clone());

        store.save_tasks(&tasks)?;
        store.save_columns(&columns)?;
        Ok(task)
    }

    /// Field-wise patch. Column membership is not touched here; relocation
    /// goes through [`BoardService::move_task`] so the ordered id lists stay
    /// in sync with `column_id`.
    pub fn update_task(
        store: &Store,
        id: &str,
        req: UpdateTaskRequest,
    ) -> Result<Task, StudBudError> {
        let mut tasks = store.tasks()?;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| StudBudError::NotFound(format!("Task not found: {}", id)))?;

        if let Some(title) = req.title {
            task.title = title;
        }
        if let Some(due_date) = req.due_date {
            task.due_date = due_date;
        }
        if let Some(priority) = req.priority {
            task.priority = priority;
        }
        if let Some(estimated_time) = req.estimated_time {
            task.estimated_time = estimated_time;
        }
        if let Some(completed) = req.completed {
            task.completed = completed;
        }
        let updated = task.clone();

        store.save_tasks(&tasks)?;
        Ok(updated)
    }

    /// Removes the task and strips its id from every column's ordered list.
    pub fn delete_task(store: &Store, id: &str) -> Result<(), StudBudError> {
        let mut tasks = store.tasks()?;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        if tasks.len() == before {
            return Err(StudBudError::NotFound(format!("Task not found: {}", id)));
        }

        let mut columns = store.columns()?;
        for column in &mut columns {
            column.task_ids.retain(|task_id| task_id != id);
        }

        store.save_tasks(&tasks)?;
        store.save_columns(&columns)?;
        Ok(())
    }

    pub fn move_task(
        store: &Store,
        id: &str,
        req: MoveTaskRequest,
    ) -> Result<BoardResponse, StudBudError> {
        let columns = store.columns()?;
        let mut tasks = store.tasks()?;

        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| StudBudError::NotFound(format!("Task not found: {}", id)))?;

        // The request's claimed source must match the stored owner, or the
        // column_id rewrite below would detach the task from the column that
        // still lists it. The no-op path in reorder skips all other checks,
        // so this one cannot be left to the engine.
        if task.column_id != req.source_column_id {
            return Err(StudBudError::BadRequest(format!(
                "Task '{}' is in column '{}', not '{}'",
                id, task.column_id, req.source_column_id
            )));
        }

        let mv = TaskMove {
            task_id: id.to_string(),
            source_column_id: req.source_column_id,
            dest_column_id: req.dest_column_id.clone(),
            source_index: req.source_index,
            dest_index: req.dest_index,
        };
        let columns = reorder(&columns, &mv)?;

        task.column_id = req.dest_column_id;

        store.save_columns(&columns)?;
        store.save_tasks(&tasks)?;

        Ok(Self::board_view(columns, tasks))
    }

    pub fn get_board(store: &Store) -> Result<BoardResponse, StudBudError> {
        Ok(Self::board_view(store.columns()?, store.tasks()?))
    }

    fn board_view(columns: Vec<Column>, tasks: Vec<Task>) -> BoardResponse {
        BoardResponse {
            columns: columns
                .into_iter()
                .map(|c| ColumnView::from_column(c, &tasks))
                .collect(),
        }
    }
}
