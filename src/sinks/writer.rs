//! Adapter for arbitrary writers

use crate::core::{Result, Sink, SinkKind};
use std::io::Write;

/// Wraps any [`io::Write`](std::io::Write) destination.
///
/// Reported as [`SinkKind::Other`], so routing output here turns the
/// logger's write serialization off.
pub struct WriterSink<W> {
    inner: W,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write_line(&mut self, line: &[u8]) -> Result<()> {
        self.inner.write_all(line)?;
        Ok(())
    }

    fn kind(&self) -> SinkKind {
        SinkKind::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_through_to_the_inner_writer() {
        let mut sink = WriterSink::new(Vec::new());
        sink.write_line(b"hello\n").unwrap();
        assert_eq!(sink.into_inner(), b"hello\n");
    }

    #[test]
    fn reports_other_kind() {
        assert_eq!(WriterSink::new(std::io::sink()).kind(), SinkKind::Other);
    }
}
