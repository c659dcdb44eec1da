//! Error types for hello-app

use std::io;
use thiserror::Error;

/// Errors raised while producing the report
#[derive(Debug, Error)]
pub enum AppError {
    /// Writing a report line to the output sink failed
    #[error("Output error: failed to write {what}: {source}")]
    Output {
        what: &'static str,
        #[source]
        source: io::Error,
    },
}

impl AppError {
    /// Create an output error for the named report part
    pub fn output(what: &'static str, source: io::Error) -> Self {
        Self::Output { what, source }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_error_message() {
        let err = AppError::output(
            "greeting",
            io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"),
        );
        let msg = err.to_string();
        assert!(msg.contains("Output error"));
        assert!(msg.contains("greeting"));
        assert!(msg.contains("pipe closed"));
    }

    #[test]
    fn test_output_error_keeps_source() {
        use std::error::Error as _;

        let err = AppError::output("sum", io::Error::from(io::ErrorKind::WriteZero));
        let source = err.source().and_then(|s| s.downcast_ref::<io::Error>());
        assert_eq!(source.map(io::Error::kind), Some(io::ErrorKind::WriteZero));
    }
}
