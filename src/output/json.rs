use crate::harvester::Record;
use crate::output::traits::{OutputResult, RecordSink};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::{Path, PathBuf};

/// Serializes records as a JSON array indented with four spaces
///
/// No trailing newline is added.
pub fn records_to_json(records: &[Record]) -> OutputResult<Vec<u8>> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    records.serialize(&mut serializer)?;
    Ok(buffer)
}

/// Writes records to a JSON file, replacing any previous content
pub fn write_records(records: &[Record], path: &Path) -> OutputResult<()> {
    let json = records_to_json(records)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// [`RecordSink`] writing a pretty-printed JSON file
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSink for JsonFileSink {
    fn write(&self, records: &[Record]) -> OutputResult<()> {
        write_records(records, &self.path)
    }

    fn destination(&self) -> String {
        self.path.display().to_string()
    }
}
