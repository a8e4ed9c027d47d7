//! JSON Lines (JSONL) output writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::message::ChatMessage;

/// Writes messages to JSONL (JSON Lines) format, one object per line.
pub fn write_jsonl(messages: &[ChatMessage], output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(messages, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Converts messages to a JSONL string.
pub fn to_jsonl(messages: &[ChatMessage]) -> Result<String> {
    let mut buf = Vec::new();
    write_lines(messages, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

fn write_lines<W: Write>(messages: &[ChatMessage], out: &mut W) -> Result<()> {
    for msg in messages {
        let line = serde_json::to_string(msg)?;
        writeln!(out, "{line}")?;
    }
    Ok(())
}
