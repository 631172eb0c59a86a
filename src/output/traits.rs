//! Output sink trait and error types

use crate::harvester::Record;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Destination for the final record collection
///
/// `write` receives the complete collection once, after every page has been
/// harvested. Implementations replace whatever the destination held before.
pub trait RecordSink {
    /// Writes the full ordered collection
    fn write(&self, records: &[Record]) -> OutputResult<()>;

    /// Human-readable description of the destination, for logging
    fn destination(&self) -> String;
}
