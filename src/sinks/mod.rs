//! Concrete output destinations

pub mod console;
pub mod file;
pub mod memory;
pub mod writer;

pub use console::{StderrSink, StdoutSink};
pub use file::FileSink;
pub use memory::MemorySink;
pub use writer::WriterSink;
