//! Domain model for the note list widget.
//!
//! # Responsibility
//! - Define the persisted `Note` record and the add-note `NoteDraft`.
//! - Define transient notifications raised after list mutations.
//!
//! # Invariants
//! - Note ids are positional (`len + 1` at creation) and may collide after
//!   deletions. Nothing in this module assumes uniqueness.

pub mod note;
pub mod notification;
