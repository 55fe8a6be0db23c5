//! Paramshape Core - spec-driven extraction and reshaping of key-value data
//!
//! This crate turns loosely shaped request parameters into structured
//! mappings. The central operation is a builder that reads `(source, spec)`
//! pairs, where the spec is ordinary data (a key name, `true`, or a field
//! list with defaults, aliases and one-level dotted paths) describing what
//! to copy out of the source.
//!
//! # Main Components
//!
//! - **Builder**: [`build`], [`build_flat`] and [`MappingBuilder`]
//! - **Field specifications**: [`FieldEntry`] classification and the
//!   [`FieldList`] builder
//! - **Helpers**: [`extract`] for defaults-driven field extraction and
//!   [`eject`] for extract-and-remove
//! - **Error Handling**: [`Error`] using `thiserror`
//!
//! # Example
//!
//! ```
//! use paramshape_core::{build_flat, Result};
//! use serde_json::json;
//!
//! fn example() -> Result<()> {
//!     let args = vec![
//!         json!({"id": 4, "profile": {"name": "ada"}, "token": "x"}),
//!         json!(["id", "profile.name", ["role", "member"]]),
//!         json!("version"),
//!         json!(2),
//!     ];
//!     let result = build_flat(&args)?;
//!     assert_eq!(serde_json::Value::Object(result), json!({
//!         "id": 4,
//!         "name": "ada",
//!         "role": "member",
//!         "version": 2,
//!     }));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod error;
pub mod value;
pub mod source;
pub mod fields;
pub mod builder;
pub mod extract;
pub mod eject;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use value::{DottedPath, Mapping};
pub use source::{Source, ToMapping};
pub use fields::{FieldEntry, FieldList};
pub use builder::{build, build_flat, parse_arguments, Directive, MappingBuilder, Pair};
pub use extract::{extract, extract_values, Extracted, FieldDescriptor};
pub use eject::{eject, eject_value, EjectKey};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_error_creation() {
        let err = Error::invalid_arguments("Test error");
        assert!(err.to_string().contains("Test error"));
    }
}
