//! List screen controller.
//!
//! # Responsibility
//! - Populate the note list once per screen creation, either from storage or
//!   from saved screen state.
//! - Reflect edit screen outcomes into the in-memory list without re-reading
//!   storage.
//! - Drive the host view (loading indicator, render, scroll, messages).
//!
//! # Invariants
//! - Creation without saved notes loads from storage exactly once.
//! - Restoring saved notes never queries storage.
//! - The list is assigned once per load, after the full result is ready.
//! - A load abandoned by `on_destroy` leaves the list untouched.

use crate::db::NoteStore;
use crate::list::note_list::{ListChange, ListError, NoteList};
use crate::list::outcome::EditOutcome;
use crate::model::note::Note;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

pub const MESSAGE_NO_DATA: &str = "No data currently";
pub const MESSAGE_ADDED: &str = "One item added successfully";
pub const MESSAGE_UPDATED: &str = "One item updated successfully";
pub const MESSAGE_DELETED: &str = "One item deleted successfully";

/// Notification for a freshly loaded list, `None` when there is something to show.
pub fn empty_state_message(notes: &[Note]) -> Option<&'static str> {
    if notes.is_empty() {
        Some(MESSAGE_NO_DATA)
    } else {
        None
    }
}

/// Presentation side of the list screen, implemented by the host UI.
pub trait NoteListView {
    fn set_loading(&mut self, visible: bool);
    /// Full list after any change.
    fn render(&mut self, notes: &[Note]);
    fn scroll_to(&mut self, position: usize);
    /// Short transient notification.
    fn show_message(&mut self, message: &str);
}

/// Screen state kept across rotation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedListState {
    #[serde(rename = "extra_state")]
    pub notes: Option<Vec<Note>>,
}

impl SavedListState {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}

/// How a load or restore ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded(usize),
    Empty,
    Restored(usize),
    Cancelled,
}

/// What the edit screen should open with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditRequest {
    pub note: Option<Note>,
    pub position: Option<usize>,
}

impl EditRequest {
    pub fn create() -> Self {
        Self::default()
    }

    pub fn edit(note: Note, position: usize) -> Self {
        Self {
            note: Some(note),
            position: Some(position),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.note.is_some()
    }
}

pub struct NoteListController<V: NoteListView> {
    store: NoteStore,
    view: V,
    notes: NoteList,
    lifetime: CancellationToken,
}

impl<V: NoteListView> NoteListController<V> {
    pub fn new(store: NoteStore, view: V) -> Self {
        Self {
            store,
            view,
            notes: NoteList::new(),
            lifetime: CancellationToken::new(),
        }
    }

    pub fn notes(&self) -> &[Note] {
        self.notes.items()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Token cancelled when the screen goes away; clones observe the same state.
    pub fn lifetime(&self) -> CancellationToken {
        self.lifetime.clone()
    }

    /// Screen creation entry point.
    ///
    /// Saved notes are reused verbatim. Without saved state, or when the
    /// saved state carries no list, notes are loaded from storage.
    pub async fn on_create(
        &mut self,
        saved: Option<SavedListState>,
    ) -> Result<LoadStatus, ListError> {
        match saved.and_then(|state| state.notes) {
            Some(notes) => {
                let count = notes.len();
                self.notes.set_notes(notes);
                self.view.render(self.notes.items());
                info!("event=notes_restore module=list status=ok rows={count}");
                Ok(LoadStatus::Restored(count))
            }
            None => self.load_notes().await,
        }
    }

    /// Loads every note from storage on a blocking worker.
    ///
    /// The store is opened and closed inside the worker. Zero rows reset the
    /// list and show [`MESSAGE_NO_DATA`].
    pub async fn load_notes(&mut self) -> Result<LoadStatus, ListError> {
        if self.lifetime.is_cancelled() {
            return Ok(LoadStatus::Cancelled);
        }

        self.view.set_loading(true);
        let store = self.store.clone();
        let task = tokio::task::spawn_blocking(move || store.load_all());

        let joined = tokio::select! {
            biased;
            _ = self.lifetime.cancelled() => {
                self.view.set_loading(false);
                info!("event=notes_load module=list status=cancelled");
                return Ok(LoadStatus::Cancelled);
            }
            joined = task => joined,
        };
        self.view.set_loading(false);

        let notes = match joined {
            Ok(result) => result?,
            Err(err) => {
                warn!("event=notes_load module=list status=error error={err}");
                return Err(ListError::LoadTaskFailed(err.to_string()));
            }
        };

        if let Some(message) = empty_state_message(&notes) {
            self.notes.set_notes(Vec::new());
            self.view.render(self.notes.items());
            self.view.show_message(message);
            return Ok(LoadStatus::Empty);
        }

        let count = notes.len();
        self.notes.set_notes(notes);
        self.view.render(self.notes.items());
        Ok(LoadStatus::Loaded(count))
    }

    /// State to persist before the screen is torn down for rotation.
    pub fn on_save_state(&self) -> SavedListState {
        SavedListState {
            notes: Some(self.notes.items().to_vec()),
        }
    }

    /// Request for tapping the note at `position`.
    pub fn edit_request_for(&self, position: usize) -> Option<EditRequest> {
        self.notes
            .get(position)
            .map(|note| EditRequest::edit(note.clone(), position))
    }

    /// Reflects an edit screen outcome into the list.
    pub fn on_edit_result(&mut self, outcome: EditOutcome) -> Result<ListChange, ListError> {
        let change = self.notes.apply(outcome)?;
        match change {
            ListChange::Appended { position } => {
                self.view.render(self.notes.items());
                self.view.scroll_to(position);
                self.view.show_message(MESSAGE_ADDED);
            }
            ListChange::Replaced { position } => {
                self.view.render(self.notes.items());
                self.view.scroll_to(position);
                self.view.show_message(MESSAGE_UPDATED);
            }
            ListChange::Removed { .. } => {
                self.view.render(self.notes.items());
                self.view.show_message(MESSAGE_DELETED);
            }
            ListChange::Unchanged => {}
        }
        Ok(change)
    }

    /// Ends the screen lifetime, abandoning any in-flight load.
    pub fn on_destroy(&self) {
        self.lifetime.cancel();
    }
}
