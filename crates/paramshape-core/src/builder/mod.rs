//! Spec-driven mapping builder
//!
//! The builder consumes `(source, spec)` pairs and accumulates a single
//! result mapping. Each pair is classified into a [`Directive`] first, then
//! applied; pairs never see each other except through the result, where
//! later pairs overwrite earlier keys.
//!
//! Copyright (c) 2025 Paramshape Team
//! Licensed under the Apache-2.0 license

mod types;
mod driver;

pub use types::{Directive, Pair};
pub use driver::{build, build_flat, parse_arguments, MappingBuilder};

#[cfg(test)]
mod tests;
