//! Edit screen result contract.
//!
//! The edit screen reports back with a raw result code plus an optional
//! payload. [`EditOutcome::from_result`] turns that into a tagged variant the
//! list controller can match on.

use crate::model::note::Note;
use serde::{Deserialize, Serialize};

/// Result code for a note inserted by the edit screen.
pub const RESULT_ADD: i32 = 101;
/// Result code for a note updated by the edit screen.
pub const RESULT_UPDATE: i32 = 201;
/// Result code for a note deleted by the edit screen.
pub const RESULT_DELETE: i32 = 301;

/// What the edit screen did, as seen by the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EditOutcome {
    Added { note: Note },
    Updated { position: usize, note: Note },
    Deleted { position: usize },
    NoOp,
}

/// Extras attached to an edit screen result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultPayload {
    pub note: Option<Note>,
    pub position: Option<usize>,
}

impl EditOutcome {
    /// Decodes a raw edit screen result.
    ///
    /// Rules:
    /// - missing payload or unknown code: `NoOp`
    /// - add/update without a note: `NoOp`
    /// - update/delete without a position target position `0`
    pub fn from_result(code: i32, payload: Option<ResultPayload>) -> Self {
        let Some(payload) = payload else {
            return Self::NoOp;
        };
        let position = payload.position.unwrap_or(0);

        match (code, payload.note) {
            (RESULT_ADD, Some(note)) => Self::Added { note },
            (RESULT_UPDATE, Some(note)) => Self::Updated { position, note },
            (RESULT_DELETE, _) => Self::Deleted { position },
            _ => Self::NoOp,
        }
    }

    /// Raw result code for this outcome, `None` for `NoOp`.
    pub fn result_code(&self) -> Option<i32> {
        match self {
            Self::Added { .. } => Some(RESULT_ADD),
            Self::Updated { .. } => Some(RESULT_UPDATE),
            Self::Deleted { .. } => Some(RESULT_DELETE),
            Self::NoOp => None,
        }
    }

    /// Splits this outcome back into result code and payload.
    pub fn into_result(self) -> Option<(i32, ResultPayload)> {
        let code = self.result_code()?;
        let payload = match self {
            Self::Added { note } => ResultPayload {
                note: Some(note),
                position: None,
            },
            Self::Updated { position, note } => ResultPayload {
                note: Some(note),
                position: Some(position),
            },
            Self::Deleted { position } => ResultPayload {
                note: None,
                position: Some(position),
            },
            Self::NoOp => return None,
        };
        Some((code, payload))
    }
}

#[cfg(test)]
mod tests {
    use super::{EditOutcome, ResultPayload, RESULT_ADD, RESULT_DELETE, RESULT_UPDATE};
    use crate::model::note::{Note, NoteId};

    fn note(id: i64, title: &str) -> Note {
        Note::new(NoteId(id), title, "", "2024/01/01 00:00:00")
    }

    #[test]
    fn missing_payload_is_noop() {
        assert_eq!(EditOutcome::from_result(RESULT_ADD, None), EditOutcome::NoOp);
        assert_eq!(EditOutcome::from_result(RESULT_DELETE, None), EditOutcome::NoOp);
    }

    #[test]
    fn unknown_code_is_noop() {
        let payload = ResultPayload {
            note: Some(note(1, "A")),
            position: Some(0),
        };
        assert_eq!(EditOutcome::from_result(0, Some(payload)), EditOutcome::NoOp);
    }

    #[test]
    fn update_without_position_targets_first_item() {
        let payload = ResultPayload {
            note: Some(note(1, "A")),
            position: None,
        };
        assert_eq!(
            EditOutcome::from_result(RESULT_UPDATE, Some(payload)),
            EditOutcome::Updated {
                position: 0,
                note: note(1, "A"),
            }
        );
    }

    #[test]
    fn add_without_note_is_noop() {
        let payload = ResultPayload {
            note: None,
            position: Some(3),
        };
        assert_eq!(
            EditOutcome::from_result(RESULT_ADD, Some(payload)),
            EditOutcome::NoOp
        );
    }

    #[test]
    fn delete_ignores_note_extra() {
        let payload = ResultPayload {
            note: Some(note(9, "Z")),
            position: Some(2),
        };
        assert_eq!(
            EditOutcome::from_result(RESULT_DELETE, Some(payload)),
            EditOutcome::Deleted { position: 2 }
        );
    }

    #[test]
    fn into_result_restores_code_and_payload() {
        let outcome = EditOutcome::Updated {
            position: 4,
            note: note(2, "B"),
        };
        let (code, payload) = outcome.clone().into_result().expect("not a noop");
        assert_eq!(code, RESULT_UPDATE);
        assert_eq!(EditOutcome::from_result(code, Some(payload)), outcome);
        assert!(EditOutcome::NoOp.into_result().is_none());
    }
}
