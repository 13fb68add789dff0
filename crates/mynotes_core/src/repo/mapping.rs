//! Row-to-entity mapping for the `note` table.
//!
//! # Invariants
//! - Rows are mapped in the order the query returns them.
//! - A row with an unusable column fails the whole mapping instead of being
//!   skipped.

use crate::db::contract::{COLUMN_DATE, COLUMN_DESCRIPTION, COLUMN_ID, COLUMN_TITLE};
use crate::model::note::{Note, NoteId};
use crate::repo::note_repo::{RepoError, RepoResult};
use rusqlite::{Row, Rows};

/// Maps one `note` row into a [`Note`].
pub fn map_row_to_note(row: &Row<'_>) -> RepoResult<Note> {
    let id: i64 = row.get(COLUMN_ID)?;
    if id <= 0 {
        return Err(RepoError::InvalidData(format!(
            "invalid id value `{id}` in note._id"
        )));
    }

    Ok(Note {
        id: NoteId(id),
        title: row.get(COLUMN_TITLE)?,
        description: row.get(COLUMN_DESCRIPTION)?,
        date: row.get(COLUMN_DATE)?,
    })
}

/// Drains a result set into notes, preserving query order.
pub fn map_rows_to_notes(mut rows: Rows<'_>) -> RepoResult<Vec<Note>> {
    let mut notes = Vec::new();
    while let Some(row) = rows.next()? {
        notes.push(map_row_to_note(row)?);
    }
    Ok(notes)
}

#[cfg(test)]
mod tests {
    use super::map_rows_to_notes;
    use crate::db::open_db_in_memory;
    use crate::repo::note_repo::RepoError;

    #[test]
    fn maps_rows_in_query_order() {
        let conn = open_db_in_memory().expect("open db");
        conn.execute_batch(
            "INSERT INTO note (TITLE, description, date) VALUES ('A', 'a', 'd1');
             INSERT INTO note (TITLE, description, date) VALUES ('B', 'b', 'd2');",
        )
        .expect("seed rows");

        let mut stmt = conn
            .prepare("SELECT _id, TITLE, description, date FROM note ORDER BY _id DESC;")
            .expect("prepare");
        let notes = map_rows_to_notes(stmt.query([]).expect("query")).expect("map rows");

        let titles: Vec<&str> = notes.iter().map(|note| note.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A"]);
    }

    #[test]
    fn empty_result_maps_to_empty_vec() {
        let conn = open_db_in_memory().expect("open db");
        let mut stmt = conn
            .prepare("SELECT _id, TITLE, description, date FROM note;")
            .expect("prepare");
        let notes = map_rows_to_notes(stmt.query([]).expect("query")).expect("map rows");
        assert!(notes.is_empty());
    }

    #[test]
    fn non_positive_id_is_rejected() {
        let conn = open_db_in_memory().expect("open db");
        let mut stmt = conn
            .prepare("SELECT 0 AS _id, 'x' AS TITLE, 'y' AS description, 'z' AS date;")
            .expect("prepare");
        let err = map_rows_to_notes(stmt.query([]).expect("query")).unwrap_err();
        assert!(matches!(err, RepoError::InvalidData(_)));
    }
}
