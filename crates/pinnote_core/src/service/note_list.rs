//! Note list container state.
//!
//! # Responsibility
//! - Own the canonical note array, the current page, the add-note draft,
//!   the inline error, the dark-mode flag and pending notifications.
//! - Apply mutations requested by items and write the whole array back to
//!   the key-value store after every change.
//!
//! # Invariants
//! - Storage key `notes` always holds the full array after a successful
//!   mutation. A failed write leaves in-memory notes unchanged.
//! - New ids are `len + 1`; id-addressed mutations hit every matching note.
//! - `current_page` stays within `1..=max(page_count, 1)`.
//! - Log events carry ids and counts only, never note text.

use crate::model::note::{Note, NoteDraft, NoteId};
use crate::model::notification::Notification;
use crate::service::note_item::{NoteAction, NoteItem};
use crate::service::pagination::{last_page, page_count, page_range, NOTES_PER_PAGE};
use crate::store::{KeyValueStore, StoreError};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Storage key holding the serialized note array.
pub const NOTES_KEY: &str = "notes";

const MISSING_FIELDS_MESSAGE: &str = "Please fill out all fields";
const ADD_REJECTED_MESSAGE: &str = "Note not added. Please fill out all fields.";
const ADDED_MESSAGE: &str = "Note added successfully";
const UPDATED_MESSAGE: &str = "Note updated successfully";
const DELETED_MESSAGE: &str = "Note deleted successfully";

pub type NoteListResult<T> = Result<T, NoteListError>;

/// Error for note list use-cases.
#[derive(Debug)]
pub enum NoteListError {
    /// Draft has empty fields; names are listed in form order.
    MissingFields(Vec<&'static str>),
    /// No note carries this id.
    NoteNotFound(NoteId),
    /// Requested page is outside `1..=last_page`.
    PageOutOfRange { page: usize, last_page: usize },
    /// Backing store failure.
    Store(StoreError),
    /// Stored payload could not be decoded, or state could not be encoded.
    Json(serde_json::Error),
}

impl Display for NoteListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFields(fields) => {
                write!(f, "missing required fields: {}", fields.join(", "))
            }
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::PageOutOfRange { page, last_page } => {
                write!(f, "page {page} is out of range 1..={last_page}")
            }
            Self::Store(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "invalid `{NOTES_KEY}` payload: {err}"),
        }
    }
}

impl Error for NoteListError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for NoteListError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<serde_json::Error> for NoteListError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Container owning all note state for one widget instance.
pub struct NoteList<S: KeyValueStore> {
    store: S,
    notes: Vec<Note>,
    current_page: usize,
    draft: NoteDraft,
    error: Option<String>,
    dark_mode: bool,
    notifications: Vec<Notification>,
}

impl<S: KeyValueStore> NoteList<S> {
    /// Loads notes from `store` and starts on page 1 in light mode.
    ///
    /// A missing `notes` key yields an empty list.
    ///
    /// # Errors
    /// - `Store` when the read fails.
    /// - `Json` when the stored value is not a note array.
    pub fn load(store: S) -> NoteListResult<Self> {
        let notes = read_notes(&store)?;
        info!(
            "event=notes_load module=note_list status=ok count={}",
            notes.len()
        );
        Ok(Self {
            store,
            notes,
            current_page: 1,
            draft: NoteDraft::default(),
            error: None,
            dark_mode: false,
            notifications: Vec::new(),
        })
    }

    /// Replaces in-memory notes with the stored array.
    ///
    /// A missing key leaves the current notes in place.
    pub fn reload(&mut self) -> NoteListResult<()> {
        let stored = read_stored_notes(&self.store)?;
        self.replace_notes(stored);
        Ok(())
    }

    /// Full canonical note array in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn draft(&self) -> &NoteDraft {
        &self.draft
    }

    pub fn set_draft_title(&mut self, value: impl Into<String>) {
        self.draft.title = value.into();
    }

    pub fn set_draft_tagline(&mut self, value: impl Into<String>) {
        self.draft.tagline = value.into();
    }

    pub fn set_draft_body(&mut self, value: impl Into<String>) {
        self.draft.body = value.into();
    }

    /// Inline validation message shown above the add-note form.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Adds the current draft as a new unpinned note.
    ///
    /// # Errors
    /// - `MissingFields` when any draft field is empty. The inline error and
    ///   an error notification are set; notes and storage are untouched.
    /// - `Store`/`Json` when persisting fails.
    pub fn add_note(&mut self) -> NoteListResult<Note> {
        let missing = self.draft.missing_fields();
        if !missing.is_empty() {
            warn!(
                "event=note_add module=note_list status=rejected missing={}",
                missing.join(",")
            );
            self.error = Some(MISSING_FIELDS_MESSAGE.to_string());
            self.notify(Notification::error(ADD_REJECTED_MESSAGE));
            return Err(NoteListError::MissingFields(missing));
        }

        let id = self.notes.len() as NoteId + 1;
        let note = Note::from_draft(id, self.draft.clone());
        let mut updated = self.notes.clone();
        updated.push(note.clone());
        self.commit(updated)?;

        self.draft = NoteDraft::default();
        self.error = None;
        self.notify(Notification::success(ADDED_MESSAGE));
        info!(
            "event=note_add module=note_list status=ok id={} count={}",
            id,
            self.notes.len()
        );
        Ok(note)
    }

    /// Replaces the draft with `draft`, then adds it.
    pub fn add(&mut self, draft: NoteDraft) -> NoteListResult<Note> {
        self.draft = draft;
        self.add_note()
    }

    /// Copies edited fields into every note sharing `edited.id`.
    ///
    /// Returns the number of notes updated.
    pub fn save_note(&mut self, edited: &Note) -> NoteListResult<usize> {
        let mut updated = self.notes.clone();
        let mut matched = 0;
        for note in updated.iter_mut().filter(|note| note.id == edited.id) {
            note.merge_from(edited);
            matched += 1;
        }
        if matched == 0 {
            return Err(self.not_found("note_save", edited.id));
        }

        self.commit(updated)?;
        self.notify(Notification::success(UPDATED_MESSAGE));
        info!(
            "event=note_save module=note_list status=ok id={} matched={}",
            edited.id, matched
        );
        Ok(matched)
    }

    /// Removes every note with `id` and keeps the current page in range.
    ///
    /// Returns the number of notes removed.
    pub fn delete_note(&mut self, id: NoteId) -> NoteListResult<usize> {
        let updated: Vec<Note> = self
            .notes
            .iter()
            .filter(|note| note.id != id)
            .cloned()
            .collect();
        let removed = self.notes.len() - updated.len();
        if removed == 0 {
            return Err(self.not_found("note_delete", id));
        }

        self.commit(updated)?;
        self.clamp_page();
        self.notify(Notification::success(DELETED_MESSAGE));
        info!(
            "event=note_delete module=note_list status=ok id={} removed={} count={}",
            id,
            removed,
            self.notes.len()
        );
        Ok(removed)
    }

    /// Flips `pinned` on every note with `id`.
    ///
    /// Returns the new pinned state of the first matching note.
    pub fn toggle_pin(&mut self, id: NoteId) -> NoteListResult<bool> {
        let mut updated = self.notes.clone();
        let mut first_state = None;
        for note in updated.iter_mut().filter(|note| note.id == id) {
            note.pinned = !note.pinned;
            if first_state.is_none() {
                first_state = Some(note.pinned);
            }
        }
        let Some(pinned) = first_state else {
            return Err(self.not_found("note_pin", id));
        };

        self.commit(updated)?;
        let state = if pinned { "pinned" } else { "unpinned" };
        self.notify(Notification::success(format!("Note {state} successfully")));
        info!("event=note_pin module=note_list status=ok id={id} pinned={pinned}");
        Ok(pinned)
    }

    /// Applies an action emitted by a `NoteItem`.
    pub fn apply(&mut self, action: NoteAction) -> NoteListResult<()> {
        match action {
            NoteAction::Save(edited) => self.save_note(&edited).map(|_| ()),
            NoteAction::TogglePin(id) => self.toggle_pin(id).map(|_| ()),
            NoteAction::Delete(id) => self.delete_note(id).map(|_| ()),
        }
    }

    /// 1-based page currently displayed.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Number of page buttons to render; zero for an empty list.
    pub fn page_count(&self) -> usize {
        page_count(self.notes.len(), NOTES_PER_PAGE)
    }

    /// Switches to `page`.
    ///
    /// # Errors
    /// - `PageOutOfRange` unless `1 <= page <= max(page_count, 1)`.
    pub fn paginate(&mut self, page: usize) -> NoteListResult<()> {
        let last = last_page(self.notes.len(), NOTES_PER_PAGE);
        if page == 0 || page > last {
            return Err(NoteListError::PageOutOfRange {
                page,
                last_page: last,
            });
        }
        self.current_page = page;
        Ok(())
    }

    /// Notes shown on the current page.
    pub fn current_notes(&self) -> &[Note] {
        &self.notes[page_range(self.current_page, NOTES_PER_PAGE, self.notes.len())]
    }

    /// Fresh view-mode items for the current page.
    pub fn items(&self) -> Vec<NoteItem> {
        self.current_notes()
            .iter()
            .cloned()
            .map(NoteItem::new)
            .collect()
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Flips the theme and re-reads notes from storage.
    ///
    /// Returns the new dark-mode state. When the read fails the theme is
    /// left as it was.
    pub fn toggle_dark_mode(&mut self) -> NoteListResult<bool> {
        let stored = read_stored_notes(&self.store)?;
        self.dark_mode = !self.dark_mode;
        debug!(
            "event=dark_mode module=note_list status=ok enabled={}",
            self.dark_mode
        );
        self.replace_notes(stored);
        Ok(self.dark_mode)
    }

    /// Pending notifications, oldest first.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Removes the notification with `id`. Returns whether it was pending.
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|notification| notification.id != id);
        self.notifications.len() != before
    }

    /// Drains all pending notifications.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    fn commit(&mut self, updated: Vec<Note>) -> NoteListResult<()> {
        let payload = serde_json::to_string(&updated)?;
        if let Err(err) = self.store.set(NOTES_KEY, &payload) {
            warn!(
                "event=notes_persist module=note_list status=error count={} error={}",
                updated.len(),
                err
            );
            return Err(err.into());
        }
        self.notes = updated;
        Ok(())
    }

    // A missing key keeps the in-memory notes.
    fn replace_notes(&mut self, stored: Option<Vec<Note>>) {
        if let Some(notes) = stored {
            self.notes = notes;
        }
        self.clamp_page();
        debug!(
            "event=notes_reload module=note_list status=ok count={}",
            self.notes.len()
        );
    }

    fn clamp_page(&mut self) {
        let last = last_page(self.notes.len(), NOTES_PER_PAGE);
        if self.current_page > last {
            self.current_page = last;
        }
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    fn not_found(&self, event: &str, id: NoteId) -> NoteListError {
        warn!("event={event} module=note_list status=not_found id={id}");
        NoteListError::NoteNotFound(id)
    }
}

fn read_notes(store: &impl KeyValueStore) -> NoteListResult<Vec<Note>> {
    Ok(read_stored_notes(store)?.unwrap_or_default())
}

// A stored JSON `null` is treated the same as a missing key.
fn read_stored_notes(store: &impl KeyValueStore) -> NoteListResult<Option<Vec<Note>>> {
    match store.get(NOTES_KEY)? {
        Some(raw) => Ok(serde_json::from_str::<Option<Vec<Note>>>(&raw)?),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::{NoteList, NoteListError, NOTES_KEY};
    use crate::model::note::{Note, NoteDraft};
    use crate::model::notification::NotificationKind;
    use crate::store::{KeyValueStore, MemoryStore, StoreError, StoreResult};

    fn draft(n: usize) -> NoteDraft {
        NoteDraft::new(format!("title {n}"), format!("tagline {n}"), format!("body {n}"))
    }

    fn list_with(count: usize) -> NoteList<MemoryStore> {
        let mut list = NoteList::load(MemoryStore::new()).unwrap();
        for n in 0..count {
            list.add(draft(n)).unwrap();
        }
        list.take_notifications();
        list
    }

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> StoreResult<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> StoreResult<()> {
            Err(StoreError::Sqlite(rusqlite::Error::InvalidQuery))
        }
    }

    #[test]
    fn rejected_add_sets_inline_error_and_error_toast() {
        let mut list = list_with(0);
        list.set_draft_title("only a title");

        let err = list.add_note().unwrap_err();
        assert!(matches!(err, NoteListError::MissingFields(ref f) if f == &["tagline", "body"]));
        assert_eq!(list.error(), Some("Please fill out all fields"));
        assert_eq!(list.notifications().len(), 1);
        assert_eq!(list.notifications()[0].kind, NotificationKind::Error);
        assert_eq!(
            list.notifications()[0].message,
            "Note not added. Please fill out all fields."
        );
        assert!(list.notes().is_empty());
        assert_eq!(list.store().get(NOTES_KEY).unwrap(), None);
        assert_eq!(list.draft().title, "only a title");
    }

    #[test]
    fn successful_add_clears_draft_and_error() {
        let mut list = list_with(0);
        list.set_draft_title("t");
        let _ = list.add_note();
        list.set_draft_tagline("g");
        list.set_draft_body("b");

        let note = list.add_note().unwrap();
        assert_eq!(note.id, 1);
        assert!(!note.pinned);
        assert_eq!(list.error(), None);
        assert_eq!(list.draft(), &NoteDraft::default());
        assert_eq!(
            list.notifications().last().map(|n| n.message.as_str()),
            Some("Note added successfully")
        );
    }

    #[test]
    fn delete_on_last_page_moves_back_a_page() {
        let mut list = list_with(7);
        list.paginate(2).unwrap();
        assert_eq!(list.current_notes().len(), 1);

        list.delete_note(7).unwrap();
        assert_eq!(list.page_count(), 1);
        assert_eq!(list.current_page(), 1);
        assert_eq!(list.current_notes().len(), 6);
    }

    #[test]
    fn paginate_rejects_pages_outside_range() {
        let mut list = list_with(7);
        assert!(matches!(
            list.paginate(0),
            Err(NoteListError::PageOutOfRange { page: 0, last_page: 2 })
        ));
        assert!(matches!(
            list.paginate(3),
            Err(NoteListError::PageOutOfRange { page: 3, last_page: 2 })
        ));
        list_with(0).paginate(1).unwrap();
    }

    #[test]
    fn unknown_id_changes_nothing() {
        let mut list = list_with(2);
        let before = list.store().get(NOTES_KEY).unwrap();

        assert!(matches!(list.toggle_pin(9), Err(NoteListError::NoteNotFound(9))));
        assert!(matches!(list.delete_note(9), Err(NoteListError::NoteNotFound(9))));
        let edited = Note::from_draft(9, draft(9));
        assert!(matches!(
            list.save_note(&edited),
            Err(NoteListError::NoteNotFound(9))
        ));
        assert!(list.notifications().is_empty());
        assert_eq!(list.store().get(NOTES_KEY).unwrap(), before);
    }

    #[test]
    fn failed_write_keeps_previous_notes() {
        let mut list = NoteList::load(FailingStore).unwrap();
        let err = list.add(draft(0)).unwrap_err();
        assert!(matches!(err, NoteListError::Store(_)));
        assert!(list.notes().is_empty());
        assert!(list.notifications().is_empty());
    }

    #[test]
    fn dismiss_removes_only_matching_notification() {
        let mut list = list_with(0);
        list.add(draft(0)).unwrap();
        list.toggle_pin(1).unwrap();
        let first = list.notifications()[0].id;

        assert!(list.dismiss(first));
        assert!(!list.dismiss(first));
        assert_eq!(list.notifications().len(), 1);
        assert_eq!(list.notifications()[0].message, "Note pinned successfully");
    }
}
