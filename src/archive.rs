//! Archive access and the year-bounded archive walk.
//!
//! A Messenger export splits one conversation over `message_1.html`,
//! `message_2.html`, ... with the newest messages in the lowest index. The
//! [`ArchiveWalker`] scans those documents in index order and decides after
//! each one whether the target year can still appear further on:
//!
//! | Document result | Decision |
//! |-----------------|----------|
//! | target-year records | [`WalkDecision::Accept`] - keep them, go on |
//! | no records, no year older than target | [`WalkDecision::Skip`] - go on |
//! | no records, some older year | [`WalkDecision::StopArchive`] - stop |
//!
//! Documents are read through the [`DocumentSource`] trait, so the walk can
//! run over a directory ([`DirectorySource`]) or in-memory strings
//! ([`MemorySource`]).
//!
//! # Example
//!
//! ```
//! use chatwrapped::archive::{ArchiveWalker, MemorySource};
//!
//! let doc = |stamp: &str| format!(
//!     r#"<div class="pam _3-95 _2pi0 _2lej uiBoxWhite noborder"><div class="_3-96 _2pio _2lek _2lel">Kari</div><div class="_3-96 _2let">Hei</div><div class="_3-94 _2lem">{stamp}</div></div>"#
//! );
//!
//! // The last document is not visited by default.
//! let source = MemorySource::new(vec![
//!     doc("4. mars 2021, 22:30"),
//!     doc("1. mai 2020, 12:00"),
//!     doc("1. mai 2020, 11:00"),
//! ]);
//!
//! let walker = ArchiveWalker::new(2020)?;
//! let messages = walker.walk(&source)?;
//! assert_eq!(messages.len(), 1);
//! # Ok::<(), chatwrapped::WrappedError>(())
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::WalkerConfig;
use crate::error::{Result, WrappedError};
use crate::extractor::{DocumentScan, MessageExtractor};
use crate::message::ChatMessage;

/// Resolves 1-based document indices to raw markup.
pub trait DocumentSource {
    /// Number of documents in the archive.
    fn document_count(&self) -> Result<usize>;

    /// Returns the markup of document `index`, or `None` if there is no such
    /// document. An empty document is `Some("")`.
    ///
    /// # Errors
    ///
    /// Returns [`WrappedError::DocumentRead`] if the document exists but
    /// cannot be read.
    fn document(&self, index: usize) -> Result<Option<String>>;
}

/// Documents stored as files in one directory.
///
/// The archive length is the number of files with the configured extension,
/// whatever their names.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
    config: WalkerConfig,
}

impl DirectorySource {
    /// Creates a source for `message_<n>.html` files in `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_config(dir, WalkerConfig::default())
    }

    /// Creates a source using the file naming of `config`.
    pub fn with_config(dir: impl Into<PathBuf>, config: WalkerConfig) -> Self {
        Self {
            dir: dir.into(),
            config,
        }
    }

    /// Returns the archive directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the document at `index`.
    pub fn path_of(&self, index: usize) -> PathBuf {
        self.dir.join(self.config.file_name(index))
    }
}

impl DocumentSource for DirectorySource {
    fn document_count(&self) -> Result<usize> {
        let suffix = format!(".{}", self.config.file_extension);
        let mut count = 0;
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if entry.file_name().to_string_lossy().ends_with(&suffix) {
                count += 1;
            }
        }
        Ok(count)
    }

    fn document(&self, index: usize) -> Result<Option<String>> {
        let path = self.path_of(index);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(WrappedError::document_read(index, Some(path), e)),
        }
    }
}

/// Documents held in memory, index 1 being the first element.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: Vec<String>,
}

impl MemorySource {
    /// Creates a source from documents in archive order.
    pub fn new(documents: Vec<String>) -> Self {
        Self { documents }
    }
}

impl DocumentSource for MemorySource {
    fn document_count(&self) -> Result<usize> {
        Ok(self.documents.len())
    }

    fn document(&self, index: usize) -> Result<Option<String>> {
        Ok(index
            .checked_sub(1)
            .and_then(|i| self.documents.get(i))
            .cloned())
    }
}

/// What the walker does after scanning one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkDecision {
    /// Append the document's records and continue.
    Accept,
    /// Nothing from the target year, but nothing older either; continue.
    Skip,
    /// The target year lies behind us; stop the walk.
    StopArchive,
}

impl WalkDecision {
    /// Derives the decision for a scanned document.
    pub fn from_scan(scan: &DocumentScan, target_year: i32) -> Self {
        if !scan.records.is_empty() {
            WalkDecision::Accept
        } else if scan.all_years_at_least(target_year) {
            WalkDecision::Skip
        } else {
            WalkDecision::StopArchive
        }
    }
}

/// Bookkeeping for one archive walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Documents scanned.
    pub documents_visited: usize,
    /// Records collected.
    pub records: usize,
    /// Message containers skipped as unusable.
    pub skipped_elements: usize,
    /// Index of the document that stopped the walk, if any.
    pub stopped_at: Option<usize>,
}

/// Walks an archive and collects the messages of one year.
#[derive(Debug, Clone)]
pub struct ArchiveWalker {
    extractor: MessageExtractor,
    config: WalkerConfig,
    target_year: i32,
}

impl ArchiveWalker {
    /// Creates a walker with the default extractor and configuration.
    pub fn new(target_year: i32) -> Result<Self> {
        Ok(Self::with_extractor(MessageExtractor::new()?, target_year))
    }

    /// Creates a walker around a preconfigured extractor.
    pub fn with_extractor(extractor: MessageExtractor, target_year: i32) -> Self {
        Self {
            extractor,
            config: WalkerConfig::default(),
            target_year,
        }
    }

    /// Sets the walker configuration.
    #[must_use]
    pub fn with_config(mut self, config: WalkerConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the year being collected.
    pub fn target_year(&self) -> i32 {
        self.target_year
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Collects all target-year messages of the archive.
    pub fn walk<S>(&self, source: &S) -> Result<Vec<ChatMessage>>
    where
        S: DocumentSource + ?Sized,
    {
        self.walk_into(source, Vec::new())
    }

    /// Collects target-year messages, appending them to `messages`.
    pub fn walk_into<S>(&self, source: &S, messages: Vec<ChatMessage>) -> Result<Vec<ChatMessage>>
    where
        S: DocumentSource + ?Sized,
    {
        self.walk_with_summary(source, messages)
            .map(|(messages, _)| messages)
    }

    /// Like [`walk_into`](Self::walk_into), also returning a [`WalkSummary`].
    ///
    /// # Errors
    ///
    /// Any document that cannot be obtained aborts the walk; records
    /// collected so far are dropped.
    pub fn walk_with_summary<S>(
        &self,
        source: &S,
        mut messages: Vec<ChatMessage>,
    ) -> Result<(Vec<ChatMessage>, WalkSummary)>
    where
        S: DocumentSource + ?Sized,
    {
        let count = source.document_count()?;
        let end = self.config.end_index(count);
        let mut summary = WalkSummary::default();

        for index in 1..end {
            let html = source
                .document(index)?
                .ok_or_else(|| WrappedError::missing_document(index))?;

            let scan = self.extractor.scan(&html, self.target_year);
            summary.documents_visited += 1;
            summary.skipped_elements += scan.skipped;

            let decision = WalkDecision::from_scan(&scan, self.target_year);
            debug!(index, ?decision, years = ?scan.years_seen, "walked document");

            match decision {
                WalkDecision::Accept => {
                    summary.records += scan.records.len();
                    messages.extend(scan.records);
                }
                WalkDecision::Skip => {}
                WalkDecision::StopArchive => {
                    summary.stopped_at = Some(index);
                    break;
                }
            }
        }

        info!(
            year = self.target_year,
            documents = summary.documents_visited,
            records = summary.records,
            skipped = summary.skipped_elements,
            "archive walk finished"
        );
        Ok((messages, summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn msg(sender: &str, stamp: &str) -> String {
        format!(
            r#"<div class="pam _3-95 _2pi0 _2lej uiBoxWhite noborder"><div class="_3-96 _2pio _2lek _2lel">{sender}</div><div class="_3-96 _2let">tekst</div><div class="_3-94 _2lem">{stamp}</div></div>"#
        )
    }

    /// Records which indices were requested.
    struct RecordingSource {
        inner: MemorySource,
        visited: RefCell<Vec<usize>>,
    }

    impl RecordingSource {
        fn new(documents: Vec<String>) -> Self {
            Self {
                inner: MemorySource::new(documents),
                visited: RefCell::new(Vec::new()),
            }
        }
    }

    impl DocumentSource for RecordingSource {
        fn document_count(&self) -> Result<usize> {
            self.inner.document_count()
        }

        fn document(&self, index: usize) -> Result<Option<String>> {
            self.visited.borrow_mut().push(index);
            self.inner.document(index)
        }
    }

    #[test]
    fn test_memory_source_indexing() {
        let source = MemorySource::new(vec!["a".into(), String::new()]);
        assert_eq!(source.document_count().unwrap(), 2);
        assert_eq!(source.document(0).unwrap(), None);
        assert_eq!(source.document(1).unwrap().as_deref(), Some("a"));
        assert_eq!(source.document(2).unwrap().as_deref(), Some(""));
        assert_eq!(source.document(3).unwrap(), None);
    }

    #[test]
    fn test_decision_from_scan() {
        let mut scan = DocumentScan::default();
        assert_eq!(WalkDecision::from_scan(&scan, 2020), WalkDecision::Skip);

        scan.years_seen.insert(2021);
        assert_eq!(WalkDecision::from_scan(&scan, 2020), WalkDecision::Skip);

        scan.years_seen.insert(2019);
        assert_eq!(WalkDecision::from_scan(&scan, 2020), WalkDecision::StopArchive);

        scan.records.push(ChatMessage::new("Kari", "x", "1. mai 2020", "12:00"));
        assert_eq!(WalkDecision::from_scan(&scan, 2020), WalkDecision::Accept);
    }

    #[test]
    fn test_three_document_scenario() {
        let source = RecordingSource::new(vec![
            msg("Kari", "1. februar 2021, 10:00"),
            [
                msg("Kari", "3. mars 2020, 10:00"),
                msg("Ola", "2. mars 2020, 10:00"),
                msg("Per", "30. desember 2019, 10:00"),
                msg("Kari", "1. mars 2020, 10:00"),
            ]
            .concat(),
            msg("Ola", "1. juni 2018, 10:00"),
            msg("Per", "1. juni 2017, 10:00"),
            String::new(),
        ]);

        let walker = ArchiveWalker::new(2020).unwrap();
        let (messages, summary) = walker.walk_with_summary(&source, Vec::new()).unwrap();

        let senders: Vec<_> = messages.iter().map(|m| m.sender.as_str()).collect();
        assert_eq!(senders, ["Kari", "Ola"]);
        assert_eq!(*source.visited.borrow(), vec![1, 2, 3]);
        assert_eq!(summary.stopped_at, Some(3));
        assert_eq!(summary.documents_visited, 3);
        assert_eq!(summary.records, 2);
    }

    #[test]
    fn test_final_document_not_visited_by_default() {
        let source = RecordingSource::new(vec![
            msg("Kari", "1. mai 2020, 10:00"),
            msg("Ola", "1. april 2020, 10:00"),
        ]);

        let messages = ArchiveWalker::new(2020).unwrap().walk(&source).unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(*source.visited.borrow(), vec![1]);
    }

    #[test]
    fn test_final_document_visited_when_enabled() {
        let source = RecordingSource::new(vec![
            msg("Kari", "1. mai 2020, 10:00"),
            msg("Ola", "1. april 2020, 10:00"),
        ]);

        let walker = ArchiveWalker::new(2020)
            .unwrap()
            .with_config(WalkerConfig::new().with_include_final_document(true));
        let messages = walker.walk(&source).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(*source.visited.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_gap_documents_are_skipped() {
        let source = MemorySource::new(vec![
            msg("Kari", "1. mai 2022, 10:00"),
            msg("Kari", "1. mai 2021, 10:00"),
            String::new(),
            msg("Ola", "1. mai 2020, 10:00"),
            msg("Per", "1. mai 2019, 10:00"),
        ]);

        let messages = ArchiveWalker::new(2020).unwrap().walk(&source).unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender, "Ola");
    }

    #[test]
    fn test_walk_into_keeps_existing_messages() {
        let source = MemorySource::new(vec![msg("Ola", "1. mai 2020, 10:00"), String::new()]);
        let existing = vec![ChatMessage::new("Kari", "før", "1. juni 2020", "10:00")];

        let messages = ArchiveWalker::new(2020)
            .unwrap()
            .walk_into(&source, existing)
            .unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender, "Kari");
        assert_eq!(messages[1].sender, "Ola");
    }

    #[test]
    fn test_missing_document_aborts() {
        struct Holey;
        impl DocumentSource for Holey {
            fn document_count(&self) -> Result<usize> {
                Ok(4)
            }
            fn document(&self, index: usize) -> Result<Option<String>> {
                Ok((index != 2).then(String::new))
            }
        }

        let err = ArchiveWalker::new(2020).unwrap().walk(&Holey).unwrap_err();
        assert!(err.is_document_read());
        assert_eq!(err.document_index(), Some(2));
    }

    #[test]
    fn test_empty_archive() {
        let messages = ArchiveWalker::new(2020)
            .unwrap()
            .walk(&MemorySource::default())
            .unwrap();
        assert!(messages.is_empty());
    }
}
