use mynotes_core::db::open_db_in_memory;
use mynotes_core::{
    EditError, EditOutcome, EditRequest, Note, NoteEditor, NoteId, NoteRepository,
    SqliteNoteRepository,
};

fn fixed_clock() -> String {
    "2024/05/06 07:08:09".to_string()
}

#[test]
fn submit_in_create_mode_inserts_and_returns_added() {
    let conn = open_db_in_memory().unwrap();
    let editor = NoteEditor::with_clock(SqliteNoteRepository::try_new(&conn).unwrap(), fixed_clock);

    let outcome = editor
        .submit(&EditRequest::create(), "Groceries", "milk")
        .unwrap();

    let note = match outcome {
        EditOutcome::Added { note } => note,
        other => panic!("expected Added, got {other:?}"),
    };
    assert_eq!(note.title, "Groceries");
    assert_eq!(note.date, "2024/05/06 07:08:09");

    let stored = SqliteNoteRepository::try_new(&conn).unwrap().query_all().unwrap();
    assert_eq!(stored, vec![note]);
}

#[test]
fn submit_in_edit_mode_updates_and_returns_position() {
    let conn = open_db_in_memory().unwrap();
    let editor = NoteEditor::with_clock(SqliteNoteRepository::try_new(&conn).unwrap(), fixed_clock);
    let EditOutcome::Added { note } = editor.submit(&EditRequest::create(), "A", "a").unwrap()
    else {
        panic!("expected Added");
    };

    let outcome = editor
        .submit(&EditRequest::edit(note.clone(), 3), "A'", "a'")
        .unwrap();

    assert_eq!(
        outcome,
        EditOutcome::Updated {
            position: 3,
            note: Note::new(note.id, "A'", "a'", note.date.clone()),
        }
    );
    assert_eq!(editor.find(note.id).unwrap().title, "A'");
}

#[test]
fn submit_rejects_blank_title_without_writing() {
    let conn = open_db_in_memory().unwrap();
    let editor = NoteEditor::new(SqliteNoteRepository::try_new(&conn).unwrap());

    let err = editor
        .submit(&EditRequest::create(), "   ", "body")
        .unwrap_err();
    assert!(matches!(err, EditError::BlankTitle));

    let stored = SqliteNoteRepository::try_new(&conn).unwrap().query_all().unwrap();
    assert!(stored.is_empty());
}

#[test]
fn delete_returns_deleted_position_and_removes_row() {
    let conn = open_db_in_memory().unwrap();
    let editor = NoteEditor::with_clock(SqliteNoteRepository::try_new(&conn).unwrap(), fixed_clock);
    let EditOutcome::Added { note } = editor.submit(&EditRequest::create(), "A", "a").unwrap()
    else {
        panic!("expected Added");
    };

    let outcome = editor.delete(&EditRequest::edit(note.clone(), 0)).unwrap();
    assert_eq!(outcome, EditOutcome::Deleted { position: 0 });
    assert!(matches!(editor.find(note.id), Err(EditError::NotFound(id)) if id == note.id));
}

#[test]
fn delete_in_create_mode_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let editor = NoteEditor::new(SqliteNoteRepository::try_new(&conn).unwrap());

    let err = editor.delete(&EditRequest::create()).unwrap_err();
    assert!(matches!(err, EditError::NothingToDelete));
}

#[test]
fn update_of_vanished_note_maps_to_not_found() {
    let conn = open_db_in_memory().unwrap();
    let editor = NoteEditor::new(SqliteNoteRepository::try_new(&conn).unwrap());
    let ghost = Note::new(NoteId(41), "ghost", "", "2024/01/01 00:00:00");

    let err = editor
        .submit(&EditRequest::edit(ghost, 0), "title", "")
        .unwrap_err();
    assert!(matches!(err, EditError::NotFound(NoteId(41))));
}

#[test]
fn default_clock_stamps_slash_formatted_date() {
    let conn = open_db_in_memory().unwrap();
    let editor = NoteEditor::new(SqliteNoteRepository::try_new(&conn).unwrap());

    let EditOutcome::Added { note } = editor.submit(&EditRequest::create(), "A", "").unwrap()
    else {
        panic!("expected Added");
    };
    let bytes = note.date.as_bytes();
    assert_eq!(note.date.len(), "yyyy/MM/dd HH:mm:ss".len());
    assert_eq!(bytes[4], b'/');
    assert_eq!(bytes[7], b'/');
    assert_eq!(bytes[10], b' ');
    assert_eq!(bytes[13], b':');
}
