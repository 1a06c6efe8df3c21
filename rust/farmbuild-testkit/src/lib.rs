//! Test utilities and helpers for the farmbuild crates.
//!
//! This crate provides:
//! - A [`LogSink`](farmbuild_common::LogSink) that records messages for assertions
//! - Fixture sequences, built in code or loaded from the sample directory
//! - Directory and path management for test resources
//!
//! # Usage
//!
//! This crate is intended for use as a dev-dependency of the farmbuild crates.

pub mod dirs;
pub mod fixtures;
pub mod recording_sink;

pub use recording_sink::{Record, RecordingSink};
