//! Field specifications for the mapping builder
//!
//! A field specification is plain data: a string, `true`, or a list whose
//! entries name keys to copy, defaults to fall back on, aliases to rename
//! to and one-level nested paths to read. This module turns that data into
//! a closed set of [`FieldEntry`] variants before anything is applied.
//!
//! # Module Organization
//!
//! - [`types`] - [`FieldEntry`] and how each entry writes into the result
//! - [`classify`] - shape classification of raw spec values
//! - [`list`] - [`FieldList`], a fluent way to write field lists
//!
//! # Examples
//!
//! ```
//! use paramshape_core::fields::{classify_entries, FieldEntry};
//! use serde_json::json;
//!
//! let entries = classify_entries(&json!({
//!     "0": "id",
//!     "nick": "name",
//!     "1": ["role", "guest"],
//! })).unwrap();
//!
//! assert_eq!(entries[0], FieldEntry::Key("id".to_string()));
//! assert_eq!(entries[1].target_key(), "name");
//! assert_eq!(entries[2].target_key(), "role");
//! ```
//!
//! Copyright (c) 2025 Paramshape Team
//! Licensed under the Apache-2.0 license

pub mod types;

pub mod classify;

pub mod list;

#[cfg(test)]
mod tests;

pub use types::FieldEntry;
pub use classify::{classify_entries, classify_entry, named_entry};
pub use list::FieldList;
