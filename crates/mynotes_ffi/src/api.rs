//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose list load and edit screen persistence to Dart via FRB.
//! - Return the raw edit result code so the UI can feed it back into its list.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every failure is reported as a message string in the response envelope.

use log::warn;
use mynotes_core::{
    core_version as core_version_inner, empty_state_message, init_logging as init_logging_inner,
    ping as ping_inner, EditError, EditOutcome, EditRequest, Note, NoteEditor, NoteId, NoteStore,
};
use std::path::PathBuf;
use std::sync::OnceLock;

const DB_FILE_NAME: &str = "mynotes.sqlite3";
const DB_PATH_ENV: &str = "MYNOTES_DB_PATH";
static DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One note row as shown by the list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteItem {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub date: String,
}

/// Initial list load response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesLoadResponse {
    pub ok: bool,
    /// Notes in storage order; empty on failure or empty storage.
    pub items: Vec<NoteItem>,
    /// Transient notification text; empty when nothing should be shown.
    pub message: String,
}

/// Edit screen result envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditResultResponse {
    pub ok: bool,
    /// `101` add, `201` update, `301` delete; `None` on failure.
    pub result_code: Option<i32>,
    pub note: Option<NoteItem>,
    pub position: Option<u32>,
    pub message: String,
}

impl EditResultResponse {
    fn from_outcome(outcome: EditOutcome) -> Self {
        match outcome.into_result() {
            Some((code, payload)) => Self {
                ok: true,
                result_code: Some(code),
                note: payload.note.map(to_note_item),
                position: payload.position.map(to_ffi_position),
                message: String::new(),
            },
            None => Self::failure("edit produced no result"),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            result_code: None,
            note: None,
            position: None,
            message: message.into(),
        }
    }
}

/// Loads every stored note for the list screen.
///
/// # FFI contract
/// - Sync call, DB-backed execution; call it off the UI thread.
/// - Never panics.
/// - Empty storage returns `ok=true`, no items and the "no data" message.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_load() -> NotesLoadResponse {
    match note_store().load_all() {
        Ok(notes) => NotesLoadResponse {
            ok: true,
            message: empty_state_message(&notes).unwrap_or_default().to_string(),
            items: notes.into_iter().map(to_note_item).collect(),
        },
        Err(err) => {
            warn!("event=ffi_notes_load module=ffi status=error error={err}");
            NotesLoadResponse {
                ok: false,
                items: Vec::new(),
                message: format!("notes_load failed: {err}"),
            }
        }
    }
}

/// Saves the edit screen form.
///
/// Input semantics:
/// - `existing_id = None`: insert a new note, result code `101`.
/// - `existing_id = Some(id)`: update title/description, result code `201`
///   with `position` echoed back (defaults to `0`).
/// - `title` is trimmed; `description` is stored as entered.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; blank titles are rejected with a message.
#[flutter_rust_bridge::frb(sync)]
pub fn note_save(
    existing_id: Option<i64>,
    position: Option<u32>,
    title: String,
    description: String,
) -> EditResultResponse {
    let result = note_store().with_repository(|repo| {
        let editor = NoteEditor::new(repo);
        let request = match existing_id {
            Some(id) => EditRequest::edit(
                editor.find(NoteId(id))?,
                position.map_or(0, from_ffi_position),
            ),
            None => EditRequest::create(),
        };
        editor.submit(&request, title.trim(), description.as_str())
    });
    respond("note_save", result)
}

/// Deletes one note by id and echoes `position` back with result code `301`.
#[flutter_rust_bridge::frb(sync)]
pub fn note_delete(id: i64, position: u32) -> EditResultResponse {
    let result = note_store().with_repository(|repo| {
        let editor = NoteEditor::new(repo);
        let existing = editor.find(NoteId(id))?;
        editor.delete(&EditRequest::edit(existing, from_ffi_position(position)))
    });
    respond("note_delete", result)
}

fn respond(operation: &str, result: Result<EditOutcome, EditError>) -> EditResultResponse {
    match result {
        Ok(outcome) => EditResultResponse::from_outcome(outcome),
        Err(err) => {
            warn!("event=ffi_edit module=ffi status=error op={operation} error={err}");
            EditResultResponse::failure(format!("{operation} failed: {err}"))
        }
    }
}

fn note_store() -> NoteStore {
    NoteStore::new(resolve_db_path())
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var(DB_PATH_ENV) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(DB_FILE_NAME)
        })
        .clone()
}

fn to_note_item(note: Note) -> NoteItem {
    NoteItem {
        id: note.id.get(),
        title: note.title,
        description: note.description,
        date: note.date,
    }
}

fn to_ffi_position(position: usize) -> u32 {
    u32::try_from(position).unwrap_or(u32::MAX)
}

fn from_ffi_position(position: u32) -> usize {
    position as usize
}

#[cfg(test)]
mod tests {
    use super::{core_version, init_logging, note_delete, note_save, notes_load, ping};
    use mynotes_core::{RESULT_ADD, RESULT_DELETE, RESULT_UPDATE};
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn save_update_delete_round_through_result_codes() {
        let title = unique_token("ffi-note");
        let added = note_save(None, None, format!("  {title}  "), "body".to_string());
        assert!(added.ok, "{}", added.message);
        assert_eq!(added.result_code, Some(RESULT_ADD));
        let item = added.note.expect("add should return the note");
        assert_eq!(item.title, title);

        let loaded = notes_load();
        assert!(loaded.ok, "{}", loaded.message);
        assert!(loaded.items.iter().any(|note| note.id == item.id));

        let updated = note_save(Some(item.id), Some(4), "renamed".to_string(), String::new());
        assert!(updated.ok, "{}", updated.message);
        assert_eq!(updated.result_code, Some(RESULT_UPDATE));
        assert_eq!(updated.position, Some(4));
        assert_eq!(updated.note.map(|note| note.date), Some(item.date));

        let deleted = note_delete(item.id, 4);
        assert!(deleted.ok, "{}", deleted.message);
        assert_eq!(deleted.result_code, Some(RESULT_DELETE));
        assert_eq!(deleted.position, Some(4));
        assert!(!notes_load().items.iter().any(|note| note.id == item.id));
    }

    #[test]
    fn save_rejects_blank_title() {
        let response = note_save(None, None, "   ".to_string(), "body".to_string());
        assert!(!response.ok);
        assert!(response.result_code.is_none());
        assert!(response.message.contains("blank"));
    }

    #[test]
    fn save_keeps_description_exactly_as_entered() {
        let description = "  first line\n\tindented  \n";
        let added = note_save(
            None,
            None,
            unique_token("ffi-desc"),
            description.to_string(),
        );
        assert!(added.ok, "{}", added.message);
        let item = added.note.expect("add should return the note");
        assert_eq!(item.description, description);

        let stored = notes_load()
            .items
            .into_iter()
            .find(|note| note.id == item.id)
            .expect("saved note should load");
        assert_eq!(stored.description, description);

        let updated = note_save(Some(item.id), Some(0), item.title, " x ".to_string());
        assert_eq!(updated.note.map(|note| note.description), Some(" x ".to_string()));
        assert!(note_delete(item.id, 0).ok);
    }

    #[test]
    fn delete_of_unknown_id_fails_without_panic() {
        let response = note_delete(i64::MAX, 0);
        assert!(!response.ok);
        assert!(response.message.contains("not found"));
    }

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }
}
