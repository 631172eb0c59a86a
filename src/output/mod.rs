//! Output module for harvested records
//!
//! Records are written once, at the end of a successful run, as a single
//! pretty-printed JSON array.

mod json;
mod traits;

pub use json::{records_to_json, write_records, JsonFileSink};
pub use traits::{OutputError, OutputResult, RecordSink};
