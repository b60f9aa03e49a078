//! Note record and add-note draft.
//!
//! # Responsibility
//! - Define the JSON shape stored under the `notes` key.
//! - Validate draft input before a note is created.
//!
//! # Invariants
//! - Serialized field names are `id`, `title`, `tagline`, `body`, `pinned`.
//! - A draft is complete only when all three text fields are non-empty.

use serde::{Deserialize, Serialize};

/// Positional note identifier.
///
/// Assigned as `list length + 1` when a note is added, so it is not stable
/// under deletion and two live notes may share one.
pub type NoteId = u64;

/// One persisted note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub tagline: String,
    pub body: String,
    pub pinned: bool,
}

impl Note {
    /// Creates an unpinned note from a draft.
    pub fn from_draft(id: NoteId, draft: NoteDraft) -> Self {
        Self {
            id,
            title: draft.title,
            tagline: draft.tagline,
            body: draft.body,
            pinned: false,
        }
    }

    /// Copies the editable fields of `edited` into this note.
    ///
    /// The id is left untouched.
    pub fn merge_from(&mut self, edited: &Note) {
        self.title.clone_from(&edited.title);
        self.tagline.clone_from(&edited.tagline);
        self.body.clone_from(&edited.body);
        self.pinned = edited.pinned;
    }
}

/// Contents of the add-note form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub tagline: String,
    pub body: String,
}

impl NoteDraft {
    pub fn new(
        title: impl Into<String>,
        tagline: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            tagline: tagline.into(),
            body: body.into(),
        }
    }

    /// Returns names of the fields that are still empty.
    ///
    /// Whitespace-only values count as filled in.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.is_empty() {
            missing.push("title");
        }
        if self.tagline.is_empty() {
            missing.push("tagline");
        }
        if self.body.is_empty() {
            missing.push("body");
        }
        missing
    }
}
