//! # pipelog
//!
//! A minimal leveled logging library with severity-based stream routing.
//!
//! Messages are classified into seven ordered severities, filtered against a
//! configurable minimum level, and routed to one of two destinations: Trace
//! through Warn go to the standard sink, Error and Fatal to the error sink.
//! Each admitted message becomes one line in the fixed
//! `LABEL|prefix|message` template.
//!
//! ## Features
//!
//! - **Severity Routing**: normal and error output kept on separate streams
//! - **Colored Labels**: severity labels colorized, with a process-scoped toggle
//! - **Optional Serialization**: writes made mutually exclusive for
//!   destinations that cannot guarantee atomic appends
//! - **Fire and Forget**: write failures never reach the caller
//!
//! ```
//! use pipelog::prelude::*;
//!
//! let logger = Logger::new("app");
//! logger.info("started");
//! logger.set_level(Level::Warn);
//! logger.debug("silently dropped");
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Level, Logger, LoggerBuilder, Result, SharedSink, Sink, SinkError, SinkKind, Style,
    };
    pub use crate::sinks::{FileSink, MemorySink, StderrSink, StdoutSink, WriterSink};
}

pub use crate::core::{
    Level, Logger, LoggerBuilder, Result, SharedSink, Sink, SinkError, SinkKind, Style,
};
pub use crate::sinks::{FileSink, MemorySink, StderrSink, StdoutSink, WriterSink};
