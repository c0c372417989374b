//! Sink trait for log output destinations

use super::error::Result;
use parking_lot::Mutex;
use std::sync::Arc;

/// What kind of destination a sink is.
///
/// [`Logger::set_output`](super::logger::Logger::set_output) derives the
/// serialization and color defaults from this tag rather than from the
/// concrete type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    /// A real file or console stream whose writes the OS already serializes.
    Stream,
    /// A growable in-memory buffer with no concurrency guarantees of its own.
    Memory,
    /// Any other destination.
    Other,
}

pub trait Sink: Send {
    /// Write one formatted line, including its trailing newline.
    fn write_line(&mut self, line: &[u8]) -> Result<()>;

    fn kind(&self) -> SinkKind;
}

/// A sink behind shared ownership, so both logger routes can alias one
/// destination after `set_output`.
pub type SharedSink = Arc<Mutex<Box<dyn Sink>>>;

pub(crate) fn shared(sink: impl Sink + 'static) -> SharedSink {
    let boxed: Box<dyn Sink> = Box::new(sink);
    Arc::new(Mutex::new(boxed))
}
