//! Integration tests over archives written to disk.

use std::fs;
use std::path::Path;

use chatwrapped::archive::WalkSummary;
use chatwrapped::config::WalkerConfig;
use chatwrapped::format::{OutputFormat, write_to_format};
use chatwrapped::prelude::*;
use tempfile::{TempDir, tempdir};

fn message(sender: &str, body: &str, reactions: Option<&str>, stamp: &str) -> String {
    let reactions = reactions
        .map(|r| format!(r#"<ul class="_tqp"><li>{r}</li></ul>"#))
        .unwrap_or_default();
    format!(
        r#"<div class="pam _3-95 _2pi0 _2lej uiBoxWhite noborder"><div class="_3-96 _2pio _2lek _2lel">{sender}</div><div class="_3-96 _2let"><div><div>{body}</div></div>{reactions}</div><div class="_3-94 _2lem">{stamp}</div></div>"#
    )
}

fn document(messages: &[String]) -> String {
    format!(
        "<html><head><meta charset=\"utf-8\"/></head><body>{}</body></html>",
        messages.concat()
    )
}

fn write_archive(documents: &[String]) -> TempDir {
    let dir = tempdir().unwrap();
    for (i, doc) in documents.iter().enumerate() {
        fs::write(dir.path().join(format!("message_{}.html", i + 1)), doc).unwrap();
    }
    dir
}

/// Three documents: 2021 + 2020, 2020 + 2019, and an unvisited final one.
fn three_document_archive() -> TempDir {
    write_archive(&[
        document(&[
            message("Kari", "Godt nytt år!", Some("👍Ola"), "1. januar 2021, 00:01"),
            message("Ola", "Skål", None, "31. desember 2020, 23:59"),
        ]),
        document(&[
            message("Kari", "Pizza i kveld?", Some("😂Ola👍Per"), "2. mai 2020, 17:00"),
            message("Per", "Gammelt", None, "20. desember 2019, 10:00"),
            message("Per", "Enda eldre", None, "19. desember 2019, 10:00"),
        ]),
        document(&[message("Ola", "Aldri lest", None, "3. mai 2020, 12:00")]),
    ])
}

#[test]
fn test_walk_directory_archive() {
    let dir = three_document_archive();
    let source = DirectorySource::new(dir.path());
    assert_eq!(source.document_count().unwrap(), 3);

    let walker = ArchiveWalker::new(2020).unwrap();
    let (messages, summary) = walker.walk_with_summary(&source, Vec::new()).unwrap();

    let texts: Vec<_> = messages.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, ["Skål", "Pizza i kveld?"]);
    assert_eq!(
        messages[1].reactions,
        vec![Reaction::new("😂", "Ola"), Reaction::new("👍", "Per")]
    );
    assert_eq!(messages[1].date, "2. mai 2020");
    assert_eq!(messages[1].time, "17:00");

    assert_eq!(
        summary,
        WalkSummary {
            documents_visited: 2,
            records: 2,
            skipped_elements: 0,
            stopped_at: None,
        }
    );
}

#[test]
fn test_walk_includes_final_document_when_asked() {
    let dir = write_archive(&[
        document(&[message("Kari", "Nyest", None, "4. mai 2020, 12:00")]),
        document(&[message("Ola", "Eldst", None, "3. mai 2020, 12:00")]),
    ]);
    let config = WalkerConfig::new().with_include_final_document(true);
    let source = DirectorySource::with_config(dir.path(), config.clone());

    let default = ArchiveWalker::new(2020).unwrap().walk(&source).unwrap();
    assert_eq!(default.len(), 1);

    let all = ArchiveWalker::new(2020)
        .unwrap()
        .with_config(config)
        .walk(&source)
        .unwrap();
    let texts: Vec<_> = all.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, ["Nyest", "Eldst"]);
}

#[test]
fn test_walk_stops_at_older_document() {
    let dir = write_archive(&[
        document(&[message("Kari", "2022", None, "1. mars 2022, 12:00")]),
        document(&[message("Kari", "2018", None, "1. mars 2018, 12:00")]),
        document(&[message("Kari", "2020", None, "1. mars 2020, 12:00")]),
        document(&[]),
    ]);
    let source = DirectorySource::new(dir.path());

    let (messages, summary) = ArchiveWalker::new(2020)
        .unwrap()
        .walk_with_summary(&source, Vec::new())
        .unwrap();

    assert!(messages.is_empty());
    assert_eq!(summary.documents_visited, 2);
    assert_eq!(summary.stopped_at, Some(2));
}

#[test]
fn test_missing_document_file_fails() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("message_1.html"), document(&[])).unwrap();
    fs::write(dir.path().join("message_3.html"), document(&[])).unwrap();
    fs::write(dir.path().join("other.html"), document(&[])).unwrap();

    let source = DirectorySource::new(dir.path());
    let err = ArchiveWalker::new(2020).unwrap().walk(&source).unwrap_err();

    assert!(err.is_document_read());
    assert_eq!(err.document_index(), Some(2));
}

#[cfg(unix)]
#[test]
fn test_unreadable_document_fails() {
    let dir = write_archive(&[
        document(&[message("Kari", "Hei", None, "1. mai 2020, 12:00")]),
        document(&[]),
        document(&[]),
    ]);
    // A directory in place of a document cannot be read as a file.
    let path = dir.path().join("message_2.html");
    fs::remove_file(&path).unwrap();
    fs::create_dir(&path).unwrap();

    let source = DirectorySource::new(dir.path());
    let err = ArchiveWalker::new(2020).unwrap().walk(&source).unwrap_err();

    assert!(matches!(err, WrappedError::DocumentRead { index: 2, .. }));
    assert!(err.to_string().contains("message_2.html"));
}

#[test]
fn test_missing_directory_is_io_error() {
    let source = DirectorySource::new(Path::new("/definitely/not/here"));
    let err = source.document_count().unwrap_err();
    assert!(err.is_io());
}

#[test]
fn test_report_from_archive() {
    let dir = three_document_archive();
    let messages = ArchiveWalker::new(2020)
        .unwrap()
        .walk(&DirectorySource::new(dir.path()))
        .unwrap();

    let config = ReportConfig::new().with_search_terms(["pizza"]);
    let report = Report::build(&messages, 2020, &config);

    assert_eq!(report.general.messages, 2);
    assert_eq!(report.general.active_days, 2);
    assert_eq!(report.general.reactions, 2);
    assert_eq!(report.participants, ["Kari", "Ola"]);

    let reactions = report.reactions.as_ref().unwrap();
    let ola = reactions.iter().find(|t| t.name == "Ola").unwrap();
    assert_eq!(ola.total_given(), 1);
    assert_eq!(ola.total_received(), 0);

    let pizza = &report.term_frequencies[0];
    assert_eq!(pizza.per_person[0].name, "Kari");
    assert!((pizza.per_person[0].relative - 1.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_export_formats_from_archive() {
    let dir = three_document_archive();
    let messages = ArchiveWalker::new(2020)
        .unwrap()
        .walk(&DirectorySource::new(dir.path()))
        .unwrap();
    let out = tempdir().unwrap();

    let csv_path = out.path().join("messages.csv");
    write_to_format(&messages, &csv_path, OutputFormat::from_path(&csv_path).unwrap()).unwrap();
    let csv = fs::read_to_string(&csv_path).unwrap();
    assert!(csv.starts_with("Date;Time;Sender;Text;Reactions\n"));
    assert!(csv.contains("2. mai 2020;17:00;Kari;Pizza i kveld?;😂 Ola, 👍 Per"));

    let json_path = out.path().join("messages.json");
    write_to_format(&messages, &json_path, OutputFormat::Json).unwrap();
    let parsed: Vec<ChatMessage> =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(parsed, messages);

    let jsonl_path = out.path().join("messages.jsonl");
    write_to_format(&messages, &jsonl_path, OutputFormat::Jsonl).unwrap();
    assert_eq!(fs::read_to_string(&jsonl_path).unwrap().lines().count(), 2);
}

#[test]
fn test_report_json_file() {
    let dir = three_document_archive();
    let messages = ArchiveWalker::new(2020)
        .unwrap()
        .walk(&DirectorySource::new(dir.path()))
        .unwrap();
    let report = Report::build(&messages, 2020, &ReportConfig::new());

    let out = tempdir().unwrap();
    let path = out.path().join("report.json");
    write_report_json(&report, &path).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["general"]["year"], 2020);
    assert_eq!(value["general"]["messages"], 2);
    assert!(value["share"].is_array());
}
