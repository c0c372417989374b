//! Error types for sink writes
//!
//! Only the [`Sink`](super::sink::Sink) layer is fallible. The logger
//! discards these errors: a failed write never reaches the caller.

pub type Result<T> = std::result::Result<T, SinkError>;

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Destination can no longer accept writes
    #[error("Sink closed: {0}")]
    Closed(String),
}

impl SinkError {
    /// Create a closed-sink error
    pub fn closed(message: impl Into<String>) -> Self {
        SinkError::Closed(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SinkError::closed("pipe gone");
        assert_eq!(err.to_string(), "Sink closed: pipe gone");

        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "broken pipe");
        let err = SinkError::from(io);
        assert!(matches!(err, SinkError::Io(_)));
    }
}
