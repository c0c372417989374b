//! Append-mode file sink

use crate::core::{Result, Sink, SinkKind};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// A log file opened in append mode, created if missing.
///
/// Reported as [`SinkKind::Stream`]: like a console stream, the OS already
/// serializes appends, so routing output here leaves the logger's serialize
/// flag untouched.
pub struct FileSink {
    file: File,
}

impl FileSink {
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file })
    }
}

impl Sink for FileSink {
    fn write_line(&mut self, line: &[u8]) -> Result<()> {
        self.file.write_all(line)?;
        Ok(())
    }

    fn kind(&self) -> SinkKind {
        SinkKind::Stream
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn appends_lines_to_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");

        let mut sink = FileSink::new(&path).unwrap();
        sink.write_line(b"first\n").unwrap();

        // Reopening must append, not truncate
        let mut sink = FileSink::new(&path).unwrap();
        sink.write_line(b"second\n").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }

    #[test]
    fn missing_parent_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("app.log");
        assert!(FileSink::new(&path).is_err());
    }
}
