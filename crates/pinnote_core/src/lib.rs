//! Core domain logic for pinnote.
//! This crate is the single source of truth for note list invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod view;

pub use config::{resolve_db_path, resolve_log_dir, resolve_log_level};
pub use logging::{default_log_level, init_logging, logging_status, LogConfig, LoggingError};
pub use model::note::{Note, NoteDraft, NoteId};
pub use model::notification::{Notification, NotificationKind};
pub use service::note_item::{NoteAction, NoteItem};
pub use service::note_list::{NoteList, NoteListError, NoteListResult, NOTES_KEY};
pub use service::pagination::{page_count, page_range, NOTES_PER_PAGE};
pub use store::{KeyValueStore, MemoryStore, SqliteStore, StoreError, StoreResult};
pub use view::{NoteCardView, NoteListView, PageButtonView};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
