use crate::domain::{Column, StudBudError};

/// A single drag-relocation of one task id between (or within) columns.
#[derive(Debug, Clone)]
pub struct TaskMove {
    pub task_id: String,
    pub source_column_id: String,
    pub dest_column_id: String,
    pub source_index: usize,
    pub dest_index: usize,
}

/// Recomputes the ordered task-id lists for a relocation event.
///
/// Returns a full column collection in which at most the source and
/// destination columns changed. The id found at `source_index` must equal
/// `task_id`; a mismatch means the caller's view of the board is stale and
/// the move is rejected rather than silently removing the wrong entry.
/// Total task-id membership across all columns is preserved.
pub fn reorder(columns: &[Column], mv: &TaskMove) -> Result<Vec<Column>, StudBudError> {
    let mut columns = columns.to_vec();

    // Exact repeat of the current position is a no-op.
    if mv.source_column_id == mv.dest_column_id && mv.source_index == mv.dest_index {
        return Ok(columns);
    }

    let source_pos = columns
        .iter()
        .position(|c| c.id == mv.source_column_id)
        .ok_or_else(|| StudBudError::NotFound(format!("Column not found: {}", mv.source_column_id)))?;
    let dest_pos = columns
        .iter()
        .position(|c| c.id == mv.dest_column_id)
        .ok_or_else(|| StudBudError::NotFound(format!("Column not found: {}", mv.dest_column_id)))?;

    let source_len = columns[source_pos].task_ids.len();
    if mv.source_index >= source_len {
        return Err(StudBudError::BadRequest(format!(
            "Source index {} out of range for column '{}' (length {})",
            mv.source_index, mv.source_column_id, source_len
        )));
    }

    let found = &columns[source_pos].task_ids[mv.source_index];
    if found != &mv.task_id {
        return Err(StudBudError::BadRequest(format!(
            "Task id mismatch at source position {}: expected '{}', found '{}'",
            mv.source_index, mv.task_id, found
        )));
    }

    // For a same-column move the insertion applies to the already-shortened
    // list, so its length is the valid upper bound either way.
    let dest_len = if source_pos == dest_pos {
        source_len - 1
    } else {
        columns[dest_pos].task_ids.len()
    };
    if mv.dest_index > dest_len {
        return Err(StudBudError::BadRequest(format!(
            "Destination index {} out of range for column '{}' (length {})",
            mv.dest_index, mv.dest_column_id, dest_len
        )));
    }

    let removed = columns[source_pos].task_ids.remove(mv.source_index);
    columns[dest_pos].task_ids.insert(mv.dest_index, removed);

    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(id: &str, task_ids: &[&str]) -> Column {
        Column {
            id: id.to_string(),
            title: id.to_string(),
            task_ids: task_ids.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn membership_count(columns: &[Column]) -> usize {
        columns.iter().map(|c| c.task_ids.len()).sum()
    }

    fn mv(task: &str, src: &str, dst: &str, si: usize, di: usize) -> TaskMove {
        TaskMove {
            task_id: task.to_string(),
            source_column_id: src.to_string(),
            dest_column_id: dst.to_string(),
            source_index: si,
            dest_index: di,
        }
    }

    #[test]
    fn move_across_columns() {
        let columns = vec![column("a", &["t1", "t2"]), column("b", &[])];
        let result = reorder(&columns, &mv("t1", "a", "b", 0, 0)).unwrap();

        assert_eq!(result[0].task_ids, vec!["t2"]);
        assert_eq!(result[1].task_ids, vec!["t1"]);
        assert_eq!(membership_count(&result), membership_count(&columns));
    }

    #[test]
    fn same_position_is_a_no_op() {
        let columns = vec![column("a", &["t1", "t2"])];
        let result = reorder(&columns, &mv("t1", "a", "a", 0, 0)).unwrap();
        assert_eq!(result, columns);
    }

    #[test]
    fn reorder_within_one_column() {
        let columns = vec![column("a", &["t1", "t2", "t3"])];
        let result = reorder(&columns, &mv("t1", "a", "a", 0, 2)).unwrap();
        assert_eq!(result[0].task_ids, vec!["t2", "t3", "t1"]);
    }

    #[test]
    fn append_at_destination_length() {
        let columns = vec![column("a", &["t1"]), column("b", &["t2", "t3"])];
        let result = reorder(&columns, &mv("t1", "a", "b", 0, 2)).unwrap();
        assert_eq!(result[1].task_ids, vec!["t2", "t3", "t1"]);
    }

    #[test]
    fn untouched_columns_keep_their_content() {
        let columns = vec![
            column("a", &["t1"]),
            column("b", &[]),
            column("c", &["t4", "t5"]),
        ];
        let result = reorder(&columns, &mv("t1", "a", "b", 0, 0)).unwrap();
        assert_eq!(result[2], columns[2]);
    }

    #[test]
    fn rejects_task_id_mismatch_at_source() {
        let columns = vec![column("a", &["t1", "t2"]), column("b", &[])];
        let err = reorder(&columns, &mv("t2", "a", "b", 0, 0)).unwrap_err();
        assert!(matches!(err, StudBudError::BadRequest(_)));
    }

    #[test]
    fn rejects_source_index_out_of_range() {
        let columns = vec![column("a", &["t1"]), column("b", &[])];
        let err = reorder(&columns, &mv("t1", "a", "b", 1, 0)).unwrap_err();
        assert!(matches!(err, StudBudError::BadRequest(_)));
    }

    #[test]
    fn rejects_destination_index_out_of_range() {
        let columns = vec![column("a", &["t1"]), column("b", &["t2"])];
        let err = reorder(&columns, &mv("t1", "a", "b", 0, 2)).unwrap_err();
        assert!(matches!(err, StudBudError::BadRequest(_)));
    }

    #[test]
    fn rejects_unknown_column() {
        let columns = vec![column("a", &["t1"])];
        let err = reorder(&columns, &mv("t1", "a", "missing", 0, 0)).unwrap_err();
        assert!(matches!(err, StudBudError::NotFound(_)));
    }

    #[test]
    fn membership_preserved_over_a_sequence_of_moves() {
        let mut columns = vec![
            column("a", &["t1", "t2", "t3"]),
            column("b", &["t4"]),
            column("c", &[]),
        ];
        let before = membership_count(&columns);

        columns = reorder(&columns, &mv("t2", "a", "c", 1, 0)).unwrap();
        columns = reorder(&columns, &mv("t4", "b", "c", 0, 1)).unwrap();
        columns = reorder(&columns, &mv("t1", "a", "a", 0, 1)).unwrap();

        assert_eq!(membership_count(&columns), before);
        assert_eq!(columns[0].task_ids, vec!["t3", "t1"]);
        assert_eq!(columns[1].task_ids, Vec::<String>::new());
        assert_eq!(columns[2].task_ids, vec!["t2", "t4"]);
    }
}
