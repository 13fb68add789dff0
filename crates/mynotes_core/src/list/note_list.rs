//! In-memory ordered note list backing the list screen.
//!
//! # Invariants
//! - Order is insertion order: loaded rows first, then appended notes.
//! - A rejected update/remove leaves the list unchanged.

use crate::list::outcome::EditOutcome;
use crate::model::note::Note;
use crate::repo::note_repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error for list screen operations.
#[derive(Debug)]
pub enum ListError {
    /// Outcome targets a position the list does not have.
    PositionOutOfRange { position: usize, len: usize },
    /// Initial load failed in storage.
    Repo(RepoError),
    /// Background load task panicked or was aborted by the runtime.
    LoadTaskFailed(String),
}

impl Display for ListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PositionOutOfRange { position, len } => {
                write!(f, "position {position} is out of range for {len} note(s)")
            }
            Self::Repo(err) => write!(f, "{err}"),
            Self::LoadTaskFailed(message) => write!(f, "note load task failed: {message}"),
        }
    }
}

impl Error for ListError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ListError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Change applied to the list by one outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListChange {
    Appended { position: usize },
    Replaced { position: usize },
    Removed { position: usize },
    Unchanged,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteList {
    items: Vec<Note>,
}

impl NoteList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Note] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Note> {
        self.items.get(position)
    }

    /// Replaces the whole list in one step.
    pub fn set_notes(&mut self, notes: Vec<Note>) {
        self.items = notes;
    }

    /// Appends and returns the new note's position.
    pub fn add_item(&mut self, note: Note) -> usize {
        self.items.push(note);
        self.items.len() - 1
    }

    pub fn update_item(&mut self, position: usize, note: Note) -> Result<(), ListError> {
        let len = self.items.len();
        let slot = self
            .items
            .get_mut(position)
            .ok_or(ListError::PositionOutOfRange { position, len })?;
        *slot = note;
        Ok(())
    }

    pub fn remove_item(&mut self, position: usize) -> Result<Note, ListError> {
        if position >= self.items.len() {
            return Err(ListError::PositionOutOfRange {
                position,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(position))
    }

    /// Applies one edit outcome without touching storage.
    pub fn apply(&mut self, outcome: EditOutcome) -> Result<ListChange, ListError> {
        match outcome {
            EditOutcome::Added { note } => Ok(ListChange::Appended {
                position: self.add_item(note),
            }),
            EditOutcome::Updated { position, note } => {
                self.update_item(position, note)?;
                Ok(ListChange::Replaced { position })
            }
            EditOutcome::Deleted { position } => {
                self.remove_item(position)?;
                Ok(ListChange::Removed { position })
            }
            EditOutcome::NoOp => Ok(ListChange::Unchanged),
        }
    }
}

impl From<Vec<Note>> for NoteList {
    fn from(items: Vec<Note>) -> Self {
        Self { items }
    }
}
