//! Note list use-case services.
//!
//! # Responsibility
//! - Own canonical note state and apply mutations requested by items.
//! - Keep page arithmetic separate from list state.
//!
//! # See also
//! - `store` for the persistence contract.

pub mod note_item;
pub mod note_list;
pub mod pagination;
