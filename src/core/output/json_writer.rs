//! JSON output writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::report::Report;
use crate::error::Result;
use crate::message::ChatMessage;

/// Writes messages to JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"sender": "Kari", "text": "Hei", "date": "1. mai 2020", "time": "10:00"},
///   {"sender": "Ola", "text": "Hei", "reactions": [{"emoji": "👍", "reactor": "Kari"}], "date": "1. mai 2020", "time": "10:01"}
/// ]
/// ```
pub fn write_json(messages: &[ChatMessage], output_path: impl AsRef<Path>) -> Result<()> {
    let json = to_json(messages)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts messages to a pretty JSON array string.
pub fn to_json(messages: &[ChatMessage]) -> Result<String> {
    Ok(serde_json::to_string_pretty(messages)?)
}

/// Writes a year report as pretty JSON.
pub fn write_report_json(report: &Report, output_path: impl AsRef<Path>) -> Result<()> {
    let mut writer = BufWriter::new(File::create(output_path)?);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
