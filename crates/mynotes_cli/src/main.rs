//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `mynotes_core` linkage.
//! - Print stored notes when `MYNOTES_DB_PATH` points at a database.

use mynotes_core::{NoteStore, MESSAGE_NO_DATA};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("mynotes_core ping={}", mynotes_core::ping());
    println!("mynotes_core version={}", mynotes_core::core_version());

    let Some(path) = std::env::var_os("MYNOTES_DB_PATH") else {
        return ExitCode::SUCCESS;
    };

    match NoteStore::new(path).load_all() {
        Ok(notes) if notes.is_empty() => {
            println!("{MESSAGE_NO_DATA}");
            ExitCode::SUCCESS
        }
        Ok(notes) => {
            for note in notes {
                println!("{}\t{}\t{}", note.id, note.date, note.title);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("failed to load notes: {err}");
            ExitCode::FAILURE
        }
    }
}
