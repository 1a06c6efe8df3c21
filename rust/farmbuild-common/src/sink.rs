//! Leveled diagnostic sink.
//!
//! Utilities report soft failures (rejected indices, removal traces) through a
//! [`LogSink`] handed to them at construction time, rather than reaching for a
//! global logger directly. [`LogCrateSink`] forwards to the `log` facade and is
//! the default; [`NullSink`] discards everything.

use std::fmt;
use std::sync::Arc;

use log::Level;

/// Default `log` target used by [`LogCrateSink`].
pub const DEFAULT_TARGET: &str = "farmbuild::collections";

/// A destination for leveled, formatted diagnostic messages.
///
/// Messages are side effects only: callers must never branch on whether
/// a message was accepted.
pub trait LogSink {
    /// Records a single message at the given level.
    fn log(&self, level: Level, args: fmt::Arguments<'_>);

    /// Returns `true` if messages at `level` would be recorded.
    fn enabled(&self, _level: Level) -> bool {
        true
    }
}

impl<S: LogSink + ?Sized> LogSink for &S {
    fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        (**self).log(level, args)
    }

    fn enabled(&self, level: Level) -> bool {
        (**self).enabled(level)
    }
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        (**self).log(level, args)
    }

    fn enabled(&self, level: Level) -> bool {
        (**self).enabled(level)
    }
}

impl<S: LogSink + ?Sized> LogSink for Arc<S> {
    fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        (**self).log(level, args)
    }

    fn enabled(&self, level: Level) -> bool {
        (**self).enabled(level)
    }
}

/// Forwards messages to the `log` facade under a fixed target.
#[derive(Debug, Clone, Copy)]
pub struct LogCrateSink {
    target: &'static str,
}

impl LogCrateSink {
    pub fn new(target: &'static str) -> LogCrateSink {
        LogCrateSink { target }
    }

    pub fn target(&self) -> &'static str {
        self.target
    }
}

impl Default for LogCrateSink {
    fn default() -> Self {
        LogCrateSink::new(DEFAULT_TARGET)
    }
}

impl LogSink for LogCrateSink {
    fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        log::log!(target: self.target, level, "{args}");
    }

    fn enabled(&self, level: Level) -> bool {
        log::log_enabled!(target: self.target, level)
    }
}

/// Discards every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl LogSink for NullSink {
    fn log(&self, _level: Level, _args: fmt::Arguments<'_>) {}

    fn enabled(&self, _level: Level) -> bool {
        false
    }
}
