//! Per-note edit-mode state.
//!
//! # Responsibility
//! - Hold edit buffers for one note while it is being edited.
//! - Turn user intent into `NoteAction`s for the owning list.
//!
//! # Invariants
//! - An item never mutates list state; it only emits actions.
//! - `Save` carries the original id and pinned flag with the buffered text.
//! - `cancel` restores buffers from the note snapshot.

use crate::model::note::{Note, NoteId};

/// Mutation requested by an item and applied by `NoteList::apply`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteAction {
    Save(Note),
    TogglePin(NoteId),
    Delete(NoteId),
}

/// Edit-mode controller for one rendered note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteItem {
    note: Note,
    editing: bool,
    edited_title: String,
    edited_tagline: String,
    edited_body: String,
}

impl NoteItem {
    /// Creates an item in view mode for `note`.
    pub fn new(note: Note) -> Self {
        Self {
            edited_title: note.title.clone(),
            edited_tagline: note.tagline.clone(),
            edited_body: note.body.clone(),
            note,
            editing: false,
        }
    }

    pub fn note(&self) -> &Note {
        &self.note
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn begin_edit(&mut self) {
        self.editing = true;
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.edited_title = value.into();
    }

    pub fn set_tagline(&mut self, value: impl Into<String>) {
        self.edited_tagline = value.into();
    }

    pub fn set_body(&mut self, value: impl Into<String>) {
        self.edited_body = value.into();
    }

    /// Buffered `(title, tagline, body)`.
    pub fn edited_fields(&self) -> (&str, &str, &str) {
        (
            self.edited_title.as_str(),
            self.edited_tagline.as_str(),
            self.edited_body.as_str(),
        )
    }

    /// Leaves edit mode and returns the save request for the list.
    ///
    /// Buffers are not validated; an edit may clear fields.
    pub fn save(&mut self) -> NoteAction {
        self.editing = false;
        NoteAction::Save(Note {
            id: self.note.id,
            title: self.edited_title.clone(),
            tagline: self.edited_tagline.clone(),
            body: self.edited_body.clone(),
            pinned: self.note.pinned,
        })
    }

    /// Leaves edit mode, discarding buffered changes.
    pub fn cancel(&mut self) {
        self.edited_title.clone_from(&self.note.title);
        self.edited_tagline.clone_from(&self.note.tagline);
        self.edited_body.clone_from(&self.note.body);
        self.editing = false;
    }

    pub fn toggle_pin(&self) -> NoteAction {
        NoteAction::TogglePin(self.note.id)
    }

    pub fn delete(&self) -> NoteAction {
        NoteAction::Delete(self.note.id)
    }

    /// Label for the pin button.
    pub fn pin_label(&self) -> &'static str {
        pin_label(self.note.pinned)
    }
}

pub(crate) fn pin_label(pinned: bool) -> &'static str {
    if pinned {
        "Unpin"
    } else {
        "Pin"
    }
}
