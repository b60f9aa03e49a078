//! Render-ready snapshot of the note list.
//!
//! # Responsibility
//! - Project `NoteList` state into plain serializable structs for a renderer.
//! - Own CSS class naming for the list root, cards and page buttons.
//!
//! # Invariants
//! - Cards cover the current page only.
//! - Page buttons run `1..=page_count`; exactly one is active when any exist.

use crate::model::note::{Note, NoteId};
use crate::service::note_item::pin_label;
use crate::service::note_list::NoteList;
use crate::store::KeyValueStore;
use serde::Serialize;

const HEADING: &str = "Notes";
const ROOT_CLASS: &str = "note-list";
const CARD_CLASS: &str = "note";
const DARK_MODE_CLASS: &str = "dark-mode";
const PINNED_CLASS: &str = "pinned";
const ACTIVE_CLASS: &str = "active";

/// Whole-widget view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteListView {
    pub heading: &'static str,
    pub root_class: String,
    pub dark_mode: bool,
    pub error: Option<String>,
    pub cards: Vec<NoteCardView>,
    pub pages: Vec<PageButtonView>,
    pub current_page: usize,
    pub total_notes: usize,
}

/// One note card in view mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteCardView {
    pub id: NoteId,
    pub title: String,
    pub tagline: String,
    pub body: String,
    pub pinned: bool,
    pub class: String,
    pub pin_label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageButtonView {
    pub number: usize,
    pub active: bool,
    pub class: &'static str,
}

impl NoteCardView {
    fn from_note(note: &Note) -> Self {
        let class = if note.pinned {
            format!("{CARD_CLASS} {PINNED_CLASS}")
        } else {
            CARD_CLASS.to_string()
        };
        Self {
            id: note.id,
            title: note.title.clone(),
            tagline: note.tagline.clone(),
            body: note.body.clone(),
            pinned: note.pinned,
            class,
            pin_label: pin_label(note.pinned),
        }
    }
}

impl<S: KeyValueStore> NoteList<S> {
    /// Builds the current render snapshot.
    pub fn view(&self) -> NoteListView {
        let current_page = self.current_page();
        let pages = (1..=self.page_count())
            .map(|number| {
                let active = number == current_page;
                PageButtonView {
                    number,
                    active,
                    class: if active { ACTIVE_CLASS } else { "" },
                }
            })
            .collect();
        let root_class = if self.dark_mode() {
            format!("{ROOT_CLASS} {DARK_MODE_CLASS}")
        } else {
            ROOT_CLASS.to_string()
        };

        NoteListView {
            heading: HEADING,
            root_class,
            dark_mode: self.dark_mode(),
            error: self.error().map(str::to_string),
            cards: self
                .current_notes()
                .iter()
                .map(NoteCardView::from_note)
                .collect(),
            pages,
            current_page,
            total_notes: self.notes().len(),
        }
    }
}
