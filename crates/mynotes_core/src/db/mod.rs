//! SQLite storage bootstrap and the scoped note store handle.
//!
//! # Responsibility
//! - Open and configure SQLite connections for the note table.
//! - Create the single-table schema and track its version.
//! - Hand out a store handle that is opened and closed per unit of work.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - No note is read or written before the schema is in place.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod contract;
pub mod migrations;
mod open;
mod store;

pub use open::{open_db, open_db_in_memory};
pub use store::NoteStore;

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "note database schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
