//! List screen logic.
//!
//! # Responsibility
//! - Decode edit screen results into tagged outcomes.
//! - Keep the in-memory note list in step with storage without re-reading it.
//! - Own the screen lifetime for the initial background load.

pub mod controller;
pub mod note_list;
pub mod outcome;
