use uuid::Uuid;

use crate::domain::{Column, StudBudError};
use crate::storage::Store;

const DEFAULT_COLUMN_TITLES: [&str; 3] = ["To Do", "In Progress", "Done"];

/// Creates the default board columns on first run. Idempotent: any existing
/// column collection is left alone.
pub fn seed_default_columns(store: &Store) -> Result<(), StudBudError> {
    if !store.columns()?.is_empty() {
        tracing::debug!("Columns already present, skipping seed");
        return Ok(());
    }

    let columns: Vec<Column> = DEFAULT_COLUMN_TITLES
        .iter()
        .map(|title| Column {
            id: Uuid::new_v4().to_string(),
            title: (*title).to_string(),
            task_ids: Vec::new(),
        })
        .collect();
    store.save_columns(&columns)?;

    tracing::info!("Seeded {} default columns", columns.len());
    Ok(())
}
