//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into edit screen level APIs.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod note_editor;
