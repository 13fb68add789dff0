//! Note repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide query-all / query-by-id / insert / update / delete-by-id over
//!   the single `note` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `query_all` returns rows ordered by `_id ASC`.
//! - `update` never touches `_id` or `date`.
//! - Writes that match no row return `RepoError::NotFound`.

use crate::db::contract::{
    COLUMNS, COLUMN_DATE, COLUMN_DESCRIPTION, COLUMN_ID, COLUMN_TITLE, TABLE_NAME,
};
use crate::db::DbError;
use crate::model::note::{Note, NoteDraft, NoteId};
use crate::repo::mapping::{map_row_to_note, map_rows_to_notes};
use log::debug;
use rusqlite::{params, Connection};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for note persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(NoteId),
    InvalidData(String),
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted note data: {message}"),
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "missing required column `{table}.{column}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for note CRUD operations.
pub trait NoteRepository {
    /// Returns every note in `_id` ascending order.
    fn query_all(&self) -> RepoResult<Vec<Note>>;
    fn query_by_id(&self, id: NoteId) -> RepoResult<Option<Note>>;
    /// Inserts a draft and returns the storage-assigned id.
    fn insert(&self, draft: &NoteDraft) -> RepoResult<NoteId>;
    /// Replaces title and description of the note with `note.id`.
    fn update(&self, note: &Note) -> RepoResult<()>;
    fn delete_by_id(&self, id: NoteId) -> RepoResult<()>;
}

/// SQLite-backed note repository.
pub struct SqliteNoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteRepository<'conn> {
    /// Constructs a repository after checking the `note` table shape.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_note_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl NoteRepository for SqliteNoteRepository<'_> {
    fn query_all(&self) -> RepoResult<Vec<Note>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM {TABLE_NAME} ORDER BY {COLUMN_ID} ASC;",
            COLUMNS.join(", ")
        ))?;
        let notes = map_rows_to_notes(stmt.query([])?)?;
        debug!(
            "event=note_query_all module=repo status=ok rows={}",
            notes.len()
        );
        Ok(notes)
    }

    fn query_by_id(&self, id: NoteId) -> RepoResult<Option<Note>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM {TABLE_NAME} WHERE {COLUMN_ID} = ?1;",
            COLUMNS.join(", ")
        ))?;
        let mut rows = stmt.query([id.get()])?;
        match rows.next()? {
            Some(row) => Ok(Some(map_row_to_note(row)?)),
            None => Ok(None),
        }
    }

    fn insert(&self, draft: &NoteDraft) -> RepoResult<NoteId> {
        self.conn.execute(
            &format!(
                "INSERT INTO {TABLE_NAME} ({COLUMN_TITLE}, {COLUMN_DESCRIPTION}, {COLUMN_DATE})
                 VALUES (?1, ?2, ?3);"
            ),
            params![
                draft.title.as_str(),
                draft.description.as_str(),
                draft.date.as_str()
            ],
        )?;
        let id = NoteId(self.conn.last_insert_rowid());
        debug!("event=note_insert module=repo status=ok id={id}");
        Ok(id)
    }

    fn update(&self, note: &Note) -> RepoResult<()> {
        let changed = self.conn.execute(
            &format!(
                "UPDATE {TABLE_NAME}
                 SET {COLUMN_TITLE} = ?1, {COLUMN_DESCRIPTION} = ?2
                 WHERE {COLUMN_ID} = ?3;"
            ),
            params![note.title.as_str(), note.description.as_str(), note.id.get()],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(note.id));
        }

        debug!("event=note_update module=repo status=ok id={}", note.id);
        Ok(())
    }

    fn delete_by_id(&self, id: NoteId) -> RepoResult<()> {
        let changed = self.conn.execute(
            &format!("DELETE FROM {TABLE_NAME} WHERE {COLUMN_ID} = ?1;"),
            [id.get()],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        debug!("event=note_delete module=repo status=ok id={id}");
        Ok(())
    }
}

fn ensure_note_connection_ready(conn: &Connection) -> RepoResult<()> {
    if !table_exists(conn, TABLE_NAME)? {
        return Err(RepoError::MissingRequiredTable(TABLE_NAME));
    }

    for column in COLUMNS {
        if !table_has_column(conn, TABLE_NAME, column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: TABLE_NAME,
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
