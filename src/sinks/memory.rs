//! In-memory buffer sink

use crate::core::{Result, Sink, SinkKind};
use parking_lot::Mutex;
use std::sync::Arc;

/// A growable in-memory destination.
///
/// Clones share one underlying buffer, so a caller can hand one clone to
/// [`Logger::set_output`](crate::core::Logger::set_output) and read the
/// captured output through another. The buffer itself carries no concurrency
/// guarantees beyond its own lock, which is why its kind is
/// [`SinkKind::Memory`] and the logger serializes writes to it.
#[derive(Clone, Default)]
pub struct MemorySink {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of everything written so far
    #[must_use]
    pub fn contents(&self) -> Vec<u8> {
        self.buf.lock().clone()
    }

    /// Captured output as UTF-8, for assertions on line content
    #[must_use]
    pub fn contents_utf8(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock()).into_owned()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.lock().is_empty()
    }
}

impl Sink for MemorySink {
    fn write_line(&mut self, line: &[u8]) -> Result<()> {
        self.buf.lock().extend_from_slice(line);
        Ok(())
    }

    fn kind(&self) -> SinkKind {
        SinkKind::Memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_one_buffer() {
        let sink = MemorySink::new();
        let mut writer = sink.clone();
        writer.write_line(b"captured\n").unwrap();
        assert_eq!(sink.contents_utf8(), "captured\n");
        assert!(!sink.is_empty());
    }

    #[test]
    fn reports_memory_kind() {
        assert_eq!(MemorySink::new().kind(), SinkKind::Memory);
    }
}
