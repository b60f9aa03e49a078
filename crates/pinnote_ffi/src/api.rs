//! FFI use-case API for UI-facing calls.
//!
//! # Responsibility
//! - Expose note list use-cases as sync functions returning plain envelopes.
//! - Reopen the configured store on every call so the host never holds
//!   Rust-side state.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Every mutation persists the whole note array before returning.
//! - Messages are UTF-8 strings meant for direct display.

use pinnote_core::{
    core_version as core_version_inner, init_logging as init_logging_inner,
    ping as ping_inner, resolve_db_path, Note, NoteDraft, NoteId, NoteList, NoteListError,
    NoteListView, SqliteStore,
};
use std::path::Path;

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes core logging once per process.
///
/// Returns an empty string on success and an error message otherwise.
/// Repeating the same `level + log_dir` is accepted.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One note card as seen by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCard {
    pub id: u64,
    pub title: String,
    pub tagline: String,
    pub body: String,
    pub pinned: bool,
    pub pin_label: String,
}

/// Page snapshot envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesPageResponse {
    pub ok: bool,
    pub message: String,
    pub items: Vec<NoteCard>,
    /// Page actually shown; out-of-range requests fall back to page 1.
    pub page: u32,
    pub page_count: u32,
    pub total: u32,
}

/// Generic mutation envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteActionResponse {
    pub ok: bool,
    /// Note id touched by the action, when it succeeded.
    pub note_id: Option<u64>,
    /// Toast text on success, error text otherwise.
    pub message: String,
    /// Inline form error to display, if any.
    pub inline_error: Option<String>,
}

impl NoteActionResponse {
    fn success(note_id: NoteId, message: String) -> Self {
        Self {
            ok: true,
            note_id: Some(note_id),
            message,
            inline_error: None,
        }
    }

    fn failure(message: String, inline_error: Option<String>) -> Self {
        Self {
            ok: false,
            note_id: None,
            message,
            inline_error,
        }
    }
}

/// Returns one page of notes.
///
/// # FFI contract
/// - Sync call, store-backed.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_page(page: u32) -> NotesPageResponse {
    notes_page_at(&resolve_db_path(), page)
}

/// Adds a note from the three form fields.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_add(title: String, tagline: String, body: String) -> NoteActionResponse {
    notes_add_at(&resolve_db_path(), NoteDraft::new(title, tagline, body))
}

/// Saves edited fields onto every note with `id`.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_save(
    id: u64,
    title: String,
    tagline: String,
    body: String,
    pinned: bool,
) -> NoteActionResponse {
    let edited = Note {
        id,
        title,
        tagline,
        body,
        pinned,
    };
    mutate_at(&resolve_db_path(), id, |list| list.save_note(&edited).map(|_| ()))
}

#[flutter_rust_bridge::frb(sync)]
pub fn notes_delete(id: u64) -> NoteActionResponse {
    mutate_at(&resolve_db_path(), id, |list| list.delete_note(id).map(|_| ()))
}

#[flutter_rust_bridge::frb(sync)]
pub fn notes_toggle_pin(id: u64) -> NoteActionResponse {
    mutate_at(&resolve_db_path(), id, |list| list.toggle_pin(id).map(|_| ()))
}

fn notes_page_at(db_path: &Path, page: u32) -> NotesPageResponse {
    let mut list = match open_list(db_path) {
        Ok(list) => list,
        Err(message) => {
            return NotesPageResponse {
                ok: false,
                message,
                items: Vec::new(),
                page: 1,
                page_count: 0,
                total: 0,
            };
        }
    };

    let message = match list.paginate(page as usize) {
        Ok(()) => String::new(),
        Err(err) => {
            log::debug!("event=ffi_notes_page module=ffi status=fallback page={page}");
            err.to_string()
        }
    };
    let view = list.view();
    to_page_response(view, message)
}

fn notes_add_at(db_path: &Path, draft: NoteDraft) -> NoteActionResponse {
    let mut list = match open_list(db_path) {
        Ok(list) => list,
        Err(message) => return NoteActionResponse::failure(message, None),
    };

    match list.add(draft) {
        Ok(note) => NoteActionResponse::success(note.id, last_message(&mut list)),
        Err(NoteListError::MissingFields(_)) => NoteActionResponse::failure(
            last_message(&mut list),
            list.error().map(str::to_string),
        ),
        Err(err) => NoteActionResponse::failure(format!("notes_add failed: {err}"), None),
    }
}

fn mutate_at(
    db_path: &Path,
    id: NoteId,
    f: impl FnOnce(&mut NoteList<SqliteStore>) -> Result<(), NoteListError>,
) -> NoteActionResponse {
    let mut list = match open_list(db_path) {
        Ok(list) => list,
        Err(message) => return NoteActionResponse::failure(message, None),
    };

    match f(&mut list) {
        Ok(()) => NoteActionResponse::success(id, last_message(&mut list)),
        Err(err) => NoteActionResponse::failure(err.to_string(), None),
    }
}

fn open_list(db_path: &Path) -> Result<NoteList<SqliteStore>, String> {
    let store =
        SqliteStore::open(db_path).map_err(|err| format!("note store open failed: {err}"))?;
    NoteList::load(store).map_err(|err| format!("note list load failed: {err}"))
}

fn last_message(list: &mut NoteList<SqliteStore>) -> String {
    list.take_notifications()
        .pop()
        .map(|notification| notification.message)
        .unwrap_or_default()
}

fn to_page_response(view: NoteListView, message: String) -> NotesPageResponse {
    NotesPageResponse {
        ok: true,
        message,
        items: view
            .cards
            .into_iter()
            .map(|card| NoteCard {
                id: card.id,
                title: card.title,
                tagline: card.tagline,
                body: card.body,
                pinned: card.pinned,
                pin_label: card.pin_label.to_string(),
            })
            .collect(),
        page: view.current_page as u32,
        page_count: view.pages.len() as u32,
        total: view.total_notes as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::{mutate_at, notes_add_at, notes_page_at, ping};
    use pinnote_core::NoteDraft;

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn add_then_page_reports_cards() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ffi.sqlite3");

        for n in 0..7 {
            let response = notes_add_at(&path, NoteDraft::new(format!("t{n}"), "g", "b"));
            assert!(response.ok);
            assert_eq!(response.message, "Note added successfully");
        }

        let first = notes_page_at(&path, 1);
        assert!(first.ok);
        assert_eq!(first.items.len(), 6);
        assert_eq!(first.page_count, 2);
        assert_eq!(first.total, 7);

        let second = notes_page_at(&path, 2);
        assert_eq!(second.page, 2);
        assert_eq!(second.items.len(), 1);
        assert_eq!(second.items[0].id, 7);
    }

    #[test]
    fn rejected_add_returns_inline_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ffi.sqlite3");

        let response = notes_add_at(&path, NoteDraft::new("", "g", "b"));
        assert!(!response.ok);
        assert_eq!(response.message, "Note not added. Please fill out all fields.");
        assert_eq!(
            response.inline_error.as_deref(),
            Some("Please fill out all fields")
        );
    }

    #[test]
    fn out_of_range_page_falls_back_with_message() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ffi.sqlite3");

        let response = notes_page_at(&path, 4);
        assert!(response.ok);
        assert_eq!(response.page, 1);
        assert!(response.message.contains("out of range"));
    }

    #[test]
    fn pin_on_missing_note_fails_without_panicking() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ffi.sqlite3");

        let response = mutate_at(&path, 3, |list| list.toggle_pin(3).map(|_| ()));
        assert!(!response.ok);
        assert_eq!(response.message, "note not found: 3");
    }
}
