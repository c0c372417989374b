//! Main logger implementation

use super::{
    level::Level,
    sink::{shared, SharedSink, Sink, SinkKind},
    style::Style,
};
use crate::sinks::{StderrSink, StdoutSink};
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A leveled logger with two output routes.
///
/// Trace through Warn go to the standard sink, Error and Fatal to the error
/// sink. Every emitted line follows the fixed `LABEL|prefix|message` template
/// with one trailing newline. Emission is fire-and-forget: a failing sink is
/// silently ignored and a filtered-out message leaves no trace.
///
/// All emission operations take `&self`, so one instance can be shared across
/// threads behind an `Arc`. When the serialize flag is set, emissions are
/// mutually exclusive; otherwise concurrent writes may interleave at the
/// granularity of the underlying sink.
pub struct Logger {
    prefix: String,
    level: RwLock<Level>,
    out: RwLock<SharedSink>,
    err: RwLock<SharedSink>,
    serialize: AtomicBool,
    write_lock: Mutex<()>,
    style: Arc<Style>,
}

impl Logger {
    /// Create a logger with the default configuration: threshold
    /// [`Level::Debug`], standard output/error sinks, and unserialized
    /// writes.
    ///
    /// On Windows the defaults differ: writes are serialized and colors are
    /// disabled process-wide, since the classic console handles neither ANSI
    /// escapes nor interleaved writes well.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::builder(prefix).build()
    }

    /// Create a builder for a logger with non-default wiring
    #[must_use]
    pub fn builder(prefix: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(prefix)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn level(&self) -> Level {
        *self.level.read()
    }

    pub fn serialized(&self) -> bool {
        self.serialize.load(Ordering::Relaxed)
    }

    pub fn style(&self) -> &Arc<Style> {
        &self.style
    }

    /// Replace the minimum admitted severity.
    ///
    /// Any rank is accepted without validation, including [`Level::Off`],
    /// which suppresses every emission. Not synchronized with in-flight
    /// emissions: a racing emission may be filtered against either the old
    /// or the new threshold.
    pub fn set_level(&self, level: Level) {
        *self.level.write() = level;
    }

    /// Point both routes at one destination. Error-level output is no longer
    /// separated from normal output after this call.
    ///
    /// The serialize flag is derived from the destination kind: an in-memory
    /// buffer forces serialized writes and disables colors on this logger's
    /// styling context, a file or console stream leaves the flag untouched,
    /// and any other destination turns serialization off.
    ///
    /// Not synchronized with in-flight emissions (see [`Logger::set_level`]).
    pub fn set_output(&self, sink: impl Sink + 'static) {
        match sink.kind() {
            SinkKind::Stream => {}
            SinkKind::Memory => {
                self.serialize.store(true, Ordering::Relaxed);
                self.style.set_colors(false);
            }
            SinkKind::Other => self.serialize.store(false, Ordering::Relaxed),
        }
        let handle = shared(sink);
        *self.out.write() = Arc::clone(&handle);
        *self.err.write() = handle;
    }

    #[inline]
    pub fn trace(&self, message: impl fmt::Display) {
        self.emit(Level::Trace, &message);
    }

    #[inline]
    pub fn debug(&self, message: impl fmt::Display) {
        self.emit(Level::Debug, &message);
    }

    #[inline]
    pub fn info(&self, message: impl fmt::Display) {
        self.emit(Level::Info, &message);
    }

    #[inline]
    pub fn notice(&self, message: impl fmt::Display) {
        self.emit(Level::Notice, &message);
    }

    #[inline]
    pub fn warn(&self, message: impl fmt::Display) {
        self.emit(Level::Warn, &message);
    }

    #[inline]
    pub fn error(&self, message: impl fmt::Display) {
        self.emit(Level::Error, &message);
    }

    /// Log at Fatal severity.
    ///
    /// Only formats and writes a line. It does not terminate the process or
    /// unwind; exiting on fatal conditions is the caller's decision.
    #[inline]
    pub fn fatal(&self, message: impl fmt::Display) {
        self.emit(Level::Fatal, &message);
    }

    fn emit(&self, level: Level, message: &dyn fmt::Display) {
        let route = match level {
            Level::Error | Level::Fatal => &self.err,
            _ => &self.out,
        };

        // Held across the threshold check and the write, released on every
        // exit path by the guard's drop.
        let _guard = if self.serialize.load(Ordering::Relaxed) {
            Some(self.write_lock.lock())
        } else {
            None
        };

        if level < *self.level.read() {
            return;
        }

        let line = format!("{}|{}|{}\n", self.style.paint(level), self.prefix, message);
        let sink = Arc::clone(&route.read());
        // Fire-and-forget: a failed write must never reach the caller.
        let _ = sink.lock().write_line(line.as_bytes());
    }
}

/// Builder for constructing a [`Logger`] with a fluent API
///
/// # Example
/// ```
/// use pipelog::prelude::*;
///
/// let out = MemorySink::new();
/// let logger = Logger::builder("app")
///     .level(Level::Info)
///     .style(Style::new(false))
///     .sinks(out.clone(), MemorySink::new())
///     .build();
/// logger.info("started");
/// assert_eq!(out.contents_utf8(), "INFO|app|started\n");
/// ```
pub struct LoggerBuilder {
    prefix: String,
    level: Level,
    style: Option<Arc<Style>>,
    out: Option<SharedSink>,
    err: Option<SharedSink>,
    serialize: Option<bool>,
}

impl LoggerBuilder {
    fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            level: Level::Debug,
            style: None,
            out: None,
            err: None,
            serialize: None,
        }
    }

    /// Set the minimum admitted severity
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Inject a styling context instead of the shared process-wide one
    #[must_use = "builder methods return a new value"]
    pub fn style(mut self, style: Arc<Style>) -> Self {
        self.style = Some(style);
        self
    }

    /// Wire distinct standard and error sinks
    #[must_use = "builder methods return a new value"]
    pub fn sinks(mut self, out: impl Sink + 'static, err: impl Sink + 'static) -> Self {
        self.out = Some(shared(out));
        self.err = Some(shared(err));
        self
    }

    /// Override the platform default for the serialize flag
    #[must_use = "builder methods return a new value"]
    pub fn serialize(mut self, serialize: bool) -> Self {
        self.serialize = Some(serialize);
        self
    }

    /// Build the logger
    pub fn build(self) -> Logger {
        let style = self.style.unwrap_or_else(Style::global);
        if cfg!(windows) {
            style.set_colors(false);
        }
        let serialize = self.serialize.unwrap_or(cfg!(windows));
        Logger {
            prefix: self.prefix,
            level: RwLock::new(self.level),
            out: RwLock::new(self.out.unwrap_or_else(|| shared(StdoutSink))),
            err: RwLock::new(self.err.unwrap_or_else(|| shared(StderrSink))),
            serialize: AtomicBool::new(serialize),
            write_lock: Mutex::new(()),
            style,
        }
    }
}
