//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::message::{ChatMessage, Reaction};

const HEADER: [&str; 5] = ["Date", "Time", "Sender", "Text", "Reactions"];

/// Writes messages to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Date`, `Time`, `Sender`, `Text`, `Reactions`
/// - Reactions: `emoji reactor` pairs joined by `, `
/// - Encoding: UTF-8
pub fn write_csv(messages: &[ChatMessage], output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(messages, file)
}

/// Converts messages to a CSV string, same format as [`write_csv`].
pub fn to_csv(messages: &[ChatMessage]) -> Result<String> {
    let mut buf = Vec::new();
    write_records(messages, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

fn write_records<W: Write>(messages: &[ChatMessage], out: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);

    writer.write_record(HEADER)?;
    for msg in messages {
        writer.write_record([
            msg.date.as_str(),
            msg.time.as_str(),
            msg.sender.as_str(),
            msg.text.as_str(),
            &format_reactions(&msg.reactions),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

fn format_reactions(reactions: &[Reaction]) -> String {
    reactions
        .iter()
        .map(|r| format!("{} {}", r.emoji, r.reactor))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn sample() -> Vec<ChatMessage> {
        vec![
            ChatMessage::new("Kari", "Hei", "1. mai 2020", "10:00").with_reactions(vec![
                Reaction::new("👍", "Ola"),
                Reaction::new("😂", "Per"),
            ]),
            ChatMessage::new("Ola", "Hei; hei", "1. mai 2020", "10:01"),
        ]
    }

    #[test]
    fn test_to_csv() {
        let csv = to_csv(&sample()).unwrap();
        let mut lines = csv.lines();

        assert_eq!(lines.next(), Some("Date;Time;Sender;Text;Reactions"));
        assert_eq!(
            lines.next(),
            Some("1. mai 2020;10:00;Kari;Hei;👍 Ola, 😂 Per")
        );
        assert_eq!(lines.next(), Some("1. mai 2020;10:01;Ola;\"Hei; hei\";"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_write_csv_file() {
        let temp_file = NamedTempFile::new().unwrap();
        write_csv(&sample(), temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.starts_with("Date;Time;Sender;Text;Reactions"));
        assert!(content.contains("Kari;Hei"));
    }

    #[test]
    fn test_csv_header_only_when_empty() {
        assert_eq!(to_csv(&[]).unwrap(), "Date;Time;Sender;Text;Reactions\n");
    }
}
