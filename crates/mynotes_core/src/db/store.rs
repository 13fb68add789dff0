//! Explicitly scoped note store handle.
//!
//! # Responsibility
//! - Remember where the note database lives.
//! - Open a connection for one unit of work and close it afterwards.
//!
//! # Invariants
//! - No connection outlives the unit of work that opened it.
//! - The handle is cheap to clone and safe to move onto a blocking thread.

use super::{open_db, DbError};
use crate::model::note::Note;
use crate::repo::note_repo::{NoteRepository, RepoError, RepoResult, SqliteNoteRepository};
use log::{info, warn};
use rusqlite::Connection;
use std::path::PathBuf;
use std::time::Instant;

/// Handle to the on-disk note database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteStore {
    path: PathBuf,
}

impl NoteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Opens a connection with the schema applied.
    ///
    /// Callers own the connection and must hand it back to [`NoteStore::close`].
    pub fn open(&self) -> Result<Connection, DbError> {
        open_db(&self.path)
    }

    /// Closes a connection opened by [`NoteStore::open`].
    pub fn close(&self, conn: Connection) -> Result<(), DbError> {
        match conn.close() {
            Ok(()) => {
                info!("event=db_close module=db status=ok");
                Ok(())
            }
            Err((_conn, err)) => {
                warn!("event=db_close module=db status=error error={err}");
                Err(err.into())
            }
        }
    }

    /// Runs `work` against a repository on a freshly opened connection.
    ///
    /// The connection is closed once `work` returns, whatever its result.
    /// A close failure is only reported when `work` itself succeeded.
    pub fn with_repository<T, E>(
        &self,
        work: impl FnOnce(SqliteNoteRepository<'_>) -> Result<T, E>,
    ) -> Result<T, E>
    where
        E: From<RepoError>,
    {
        let conn = open_db(&self.path).map_err(RepoError::from)?;
        let result = match SqliteNoteRepository::try_new(&conn) {
            Ok(repo) => work(repo),
            Err(err) => Err(err.into()),
        };
        let closed = self.close(conn);
        let value = result?;
        closed.map_err(RepoError::from)?;
        Ok(value)
    }

    /// Opens the store, queries and maps every note, then closes it.
    ///
    /// Blocking; run it off the async executor.
    pub fn load_all(&self) -> RepoResult<Vec<Note>> {
        let started_at = Instant::now();
        let notes = self.with_repository(|repo| repo.query_all())?;
        info!(
            "event=notes_load module=db status=ok rows={} duration_ms={}",
            notes.len(),
            started_at.elapsed().as_millis()
        );
        Ok(notes)
    }
}
