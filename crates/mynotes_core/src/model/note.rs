//! Note domain model.
//!
//! # Responsibility
//! - Define the single persisted entity shown by the note list.
//! - Separate not-yet-persisted drafts from stored notes.
//!
//! # Invariants
//! - `id` is assigned by storage and never changes afterwards.
//! - `date` keeps the value stamped at creation time.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Storage-assigned identifier (`note._id`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub i64);

impl NoteId {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for NoteId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Stored note as shown by the list screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub description: String,
    /// Creation timestamp text, `yyyy/MM/dd HH:mm:ss`.
    pub date: String,
}

impl Note {
    pub fn new(
        id: NoteId,
        title: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            date: date.into(),
        }
    }

    /// Promotes a draft once storage assigned its id.
    pub fn from_draft(id: NoteId, draft: NoteDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            date: draft.date,
        }
    }
}

/// Note content before insert; storage assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub description: String,
    pub date: String,
}

impl NoteDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            date: date.into(),
        }
    }
}
