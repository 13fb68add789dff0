//! Domain model for the note list.
//!
//! # Responsibility
//! - Define the canonical note entity used by storage, list and editor.
//!
//! # Invariants
//! - Every stored note is identified by a storage-assigned `NoteId`.
//! - Deletion is a hard delete by id; there are no tombstones.

pub mod note;
