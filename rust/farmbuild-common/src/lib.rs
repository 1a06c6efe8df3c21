//! Core definitions (error types, result helpers and the diagnostic sink trait),
//! relied upon by all farmbuild-* crates.

pub mod error;
pub mod result;
pub mod sink;

pub use result::Result;
pub use sink::LogSink;
