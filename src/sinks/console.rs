//! Process standard stream sinks

use crate::core::{Result, Sink, SinkKind};
use std::io::Write;

/// The process's standard output stream
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write_line(&mut self, line: &[u8]) -> Result<()> {
        std::io::stdout().write_all(line)?;
        Ok(())
    }

    fn kind(&self) -> SinkKind {
        SinkKind::Stream
    }
}

/// The process's standard error stream
pub struct StderrSink;

impl Sink for StderrSink {
    fn write_line(&mut self, line: &[u8]) -> Result<()> {
        std::io::stderr().write_all(line)?;
        Ok(())
    }

    fn kind(&self) -> SinkKind {
        SinkKind::Stream
    }
}
