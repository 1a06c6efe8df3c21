//! Sequence helpers shared across farmbuild.
//!
//! This crate provides a thin convenience layer over `Vec` and JSON arrays:
//!
//! - [`Collections`]: lookup by property, positional insert/remove, removal by
//!   structural equality, and `first`/`last`/`size`/`is_empty` accessors
//! - [`JsonCollections`]: the same operations for untyped `serde_json::Value`
//!   input, with explicit validation that the value is an array
//! - [`Equality`] and [`Fields`]: the seams through which items are compared
//!   and their named fields are read
//!
//! Invalid positions never panic. The typed operations log a diagnostic and
//! leave the sequence unchanged, while `try_*` variants and the JSON layer
//! report a [`farmbuild_common::error::Error`].

pub mod collections;
pub mod config;
pub mod fields;
pub mod json;
pub mod validations;


pub use collections::Collections;
pub use config::CollectionsConfig;
pub use farmbuild_common::sink::{LogCrateSink, LogSink, NullSink};
pub use fields::Fields;
pub use json::JsonCollections;
pub use validations::{Equality, JsonEquality, Structural, is_array, is_defined};
