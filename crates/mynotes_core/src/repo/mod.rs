//! Repository layer for the `note` table.
//!
//! # Responsibility
//! - Define the note data access contract.
//! - Isolate SQLite query and row mapping details from services.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod mapping;
pub mod note_repo;
