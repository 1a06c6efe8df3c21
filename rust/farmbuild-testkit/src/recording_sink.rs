//! A [`LogSink`] that keeps every message for later inspection.

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use farmbuild_common::LogSink;
use log::Level;

/// A single recorded message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub level: Level,
    pub message: String,
}

/// Records messages in arrival order. Accepts every level.
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Mutex<Vec<Record>>,
}

impl RecordingSink {
    pub fn new() -> RecordingSink {
        Default::default()
    }

    /// Returns a copy of everything recorded so far.
    pub fn records(&self) -> Vec<Record> {
        self.lock().clone()
    }

    /// Messages recorded at exactly `level`, in order.
    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|record| record.level == level)
            .map(|record| record.message.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Record>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LogSink for RecordingSink {
    fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        self.lock().push(Record {
            level,
            message: args.to_string(),
        });
    }
}
