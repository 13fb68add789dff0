//! Core logic for the MyNotes list screen.
//! Storage, edit outcomes and list reconciliation live here; UI hosts only
//! implement `NoteListView`.

pub mod db;
pub mod list;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::NoteStore;
pub use list::controller::{
    empty_state_message, EditRequest, LoadStatus, NoteListController, NoteListView,
    SavedListState, MESSAGE_ADDED, MESSAGE_DELETED, MESSAGE_NO_DATA, MESSAGE_UPDATED,
};
pub use list::note_list::{ListChange, ListError, NoteList};
pub use list::outcome::{EditOutcome, ResultPayload, RESULT_ADD, RESULT_DELETE, RESULT_UPDATE};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteDraft, NoteId};
pub use repo::note_repo::{NoteRepository, RepoError, RepoResult, SqliteNoteRepository};
pub use service::note_editor::{format_note_date, EditError, NoteEditor};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
