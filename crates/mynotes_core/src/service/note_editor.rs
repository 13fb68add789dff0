//! Edit screen persistence.
//!
//! # Responsibility
//! - Validate edit screen input.
//! - Insert, update or delete through the repository.
//! - Produce the [`EditOutcome`] the list screen reconciles against.
//!
//! # Invariants
//! - Insert stamps `date` once; update keeps the stored date.
//! - An outcome is only produced after the write succeeded.

use crate::list::controller::EditRequest;
use crate::list::outcome::EditOutcome;
use crate::model::note::{Note, NoteDraft, NoteId};
use crate::repo::note_repo::{NoteRepository, RepoError};
use chrono::{DateTime, Local, TimeZone};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Display format of `note.date`.
pub const NOTE_DATE_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

#[derive(Debug)]
pub enum EditError {
    /// Title is empty or whitespace only.
    BlankTitle,
    /// Delete requested from a create-mode edit screen.
    NothingToDelete,
    /// Target note no longer exists in storage.
    NotFound(NoteId),
    Repo(RepoError),
}

impl Display for EditError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "title can not be blank"),
            Self::NothingToDelete => write!(f, "no existing note to delete"),
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EditError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for EditError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Formats a timestamp the way `note.date` stores it.
pub fn format_note_date<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(NOTE_DATE_FORMAT).to_string()
}

fn local_now() -> String {
    format_note_date(&Local::now())
}

/// Edit screen facade over a note repository.
pub struct NoteEditor<R: NoteRepository> {
    repo: R,
    clock: fn() -> String,
}

impl<R: NoteRepository> NoteEditor<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            clock: local_now,
        }
    }

    /// Uses `clock` instead of local time for the insert date.
    pub fn with_clock(repo: R, clock: fn() -> String) -> Self {
        Self { repo, clock }
    }

    /// Saves the edit screen form.
    ///
    /// Create mode inserts and returns `Added`; edit mode updates title and
    /// description and returns `Updated` at the request position.
    pub fn submit(
        &self,
        request: &EditRequest,
        title: &str,
        description: &str,
    ) -> Result<EditOutcome, EditError> {
        if title.trim().is_empty() {
            return Err(EditError::BlankTitle);
        }

        match request.note.as_ref() {
            Some(existing) => {
                let note = Note {
                    title: title.to_string(),
                    description: description.to_string(),
                    ..existing.clone()
                };
                self.repo.update(&note)?;
                info!("event=note_edit module=service status=ok action=update id={}", note.id);
                Ok(EditOutcome::Updated {
                    position: request.position.unwrap_or(0),
                    note,
                })
            }
            None => {
                let draft = NoteDraft::new(title, description, (self.clock)());
                let id = self.repo.insert(&draft)?;
                info!("event=note_edit module=service status=ok action=insert id={id}");
                Ok(EditOutcome::Added {
                    note: Note::from_draft(id, draft),
                })
            }
        }
    }

    /// Deletes the note the edit screen was opened with.
    pub fn delete(&self, request: &EditRequest) -> Result<EditOutcome, EditError> {
        let note = request.note.as_ref().ok_or(EditError::NothingToDelete)?;
        self.repo.delete_by_id(note.id)?;
        info!("event=note_edit module=service status=ok action=delete id={}", note.id);
        Ok(EditOutcome::Deleted {
            position: request.position.unwrap_or(0),
        })
    }

    /// Re-reads one note, e.g. before opening it for edit.
    pub fn find(&self, id: NoteId) -> Result<Note, EditError> {
        self.repo.query_by_id(id)?.ok_or(EditError::NotFound(id))
    }
}
