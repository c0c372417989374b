//! Core logger types and traits

pub mod error;
pub mod level;
pub mod logger;
pub mod sink;
pub mod style;

pub use error::{Result, SinkError};
pub use level::Level;
pub use logger::{Logger, LoggerBuilder};
pub use sink::{SharedSink, Sink, SinkKind};
pub use style::Style;
