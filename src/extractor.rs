//! Message extraction from one archive document.
//!
//! A Messenger export document is a flat list of message containers, newest
//! first. For every container the extractor looks up four parts (sender,
//! reaction summary, body, timestamp) with CSS selectors, and decides what
//! to do with it based on the message year:
//!
//! | Year vs target | Verdict | Effect |
//! |----------------|---------|--------|
//! | equal | [`ElementVerdict::Keep`] | record is collected |
//! | newer | [`ElementVerdict::Newer`] | skipped, scanning continues |
//! | older | [`ElementVerdict::Older`] | scanning of this document stops |
//!
//! Containers lacking a part, or with an unusable timestamp, are skipped
//! with a [`SkipReason`] and never abort the scan. Every year that could be
//! read is recorded in [`DocumentScan::years_seen`].
//!
//! # Example
//!
//! ```
//! use chatwrapped::config::ExtractorConfig;
//! use chatwrapped::extractor::MessageExtractor;
//!
//! let config = ExtractorConfig::new()
//!     .with_message_selector("div.msg")
//!     .with_sender_selector(".from")
//!     .with_reaction_selector(".reactions")
//!     .with_body_selector(".body")
//!     .with_timestamp_selector(".at");
//! let extractor = MessageExtractor::with_config(config)?;
//!
//! let html = r#"
//!   <div class="msg"><div class="from">Kari</div><div class="body">Godt nytt år!</div><div class="at">1. januar 2021, 00:01</div></div>
//!   <div class="msg"><div class="from">Ola</div><div class="body">Fyrverkeri?</div><div class="at">31. desember 2020, 23:58</div></div>
//! "#;
//!
//! let scan = extractor.scan(html, 2021);
//! assert_eq!(scan.records.len(), 1);
//! assert_eq!(scan.records[0].sender, "Kari");
//! assert!(scan.stopped_early());
//! # Ok::<(), chatwrapped::WrappedError>(())
//! ```

use std::cmp::Ordering;
use std::collections::BTreeSet;

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace};

use crate::config::ExtractorConfig;
use crate::error::{Result, WrappedError};
use crate::message::ChatMessage;
use crate::parsing::reactions::parse_reactions;
use crate::parsing::timestamp::{split_timestamp, year_of};

/// Why a message container produced no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No sender element, or it was blank (system notices look like this).
    MissingSender,
    /// No body element.
    MissingBody,
    /// No timestamp element.
    MissingTimestamp,
    /// The timestamp has no date/time delimiter.
    MalformedTimestamp,
    /// The date does not end in a four-digit year.
    MalformedYear,
}

/// Outcome for a single message container.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementVerdict {
    /// The message belongs to the target year.
    Keep(ChatMessage),
    /// The message is from a later year; keep scanning.
    Newer(i32),
    /// The message is from an earlier year; stop scanning this document.
    Older(i32),
    /// The container is not a usable message.
    Skip(SkipReason),
}

/// Result of scanning one document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentScan {
    /// Target-year records in document order.
    pub records: Vec<ChatMessage>,

    /// Every year read from a timestamp, including the one that stopped the
    /// scan.
    pub years_seen: BTreeSet<i32>,

    /// Containers skipped for a [`SkipReason`].
    pub skipped: usize,

    /// The older year that stopped the scan, if any.
    pub stopped_at: Option<i32>,
}

impl DocumentScan {
    /// Returns `true` if scanning stopped at an older-year message.
    pub fn stopped_early(&self) -> bool {
        self.stopped_at.is_some()
    }

    /// Returns `true` if no year older than `year` was seen.
    ///
    /// Vacuously `true` for a document with no readable years.
    pub fn all_years_at_least(&self, year: i32) -> bool {
        self.years_seen.iter().all(|&y| y >= year)
    }

    /// Splits the scan into `(records, years_seen)`.
    pub fn into_parts(self) -> (Vec<ChatMessage>, BTreeSet<i32>) {
        (self.records, self.years_seen)
    }
}

/// Extracts [`ChatMessage`] records from Messenger HTML documents.
///
/// Selectors are compiled once at construction, so one extractor can scan
/// every document of an archive.
#[derive(Debug, Clone)]
pub struct MessageExtractor {
    config: ExtractorConfig,
    message: Selector,
    sender: Selector,
    reaction: Selector,
    body: Selector,
    timestamp: Selector,
}

impl MessageExtractor {
    /// Creates an extractor for the default Messenger export layout.
    pub fn new() -> Result<Self> {
        Self::with_config(ExtractorConfig::default())
    }

    /// Creates an extractor with custom selectors.
    ///
    /// # Errors
    ///
    /// Returns [`WrappedError::InvalidSelector`] if any selector fails to parse.
    pub fn with_config(config: ExtractorConfig) -> Result<Self> {
        Ok(Self {
            message: compile(&config.message_selector)?,
            sender: compile(&config.sender_selector)?,
            reaction: compile(&config.reaction_selector)?,
            body: compile(&config.body_selector)?,
            timestamp: compile(&config.timestamp_selector)?,
            config,
        })
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Scans one document for messages from `target_year`.
    ///
    /// Containers are visited in document order. The scan stops at the first
    /// message older than `target_year`; records collected up to that point
    /// are kept.
    pub fn scan(&self, html: &str, target_year: i32) -> DocumentScan {
        let document = Html::parse_document(html);
        let mut scan = DocumentScan::default();

        for element in document.select(&self.message) {
            match self.classify(element, target_year) {
                ElementVerdict::Keep(message) => {
                    scan.years_seen.insert(target_year);
                    scan.records.push(message);
                }
                ElementVerdict::Newer(year) => {
                    scan.years_seen.insert(year);
                }
                ElementVerdict::Older(year) => {
                    scan.years_seen.insert(year);
                    scan.stopped_at = Some(year);
                    break;
                }
                ElementVerdict::Skip(reason) => {
                    trace!(?reason, "skipping message element");
                    scan.skipped += 1;
                }
            }
        }

        debug!(
            records = scan.records.len(),
            skipped = scan.skipped,
            years = ?scan.years_seen,
            stopped_at = ?scan.stopped_at,
            "scanned document"
        );
        scan
    }

    /// Decides what to do with one message container.
    pub fn classify(&self, element: ElementRef<'_>, target_year: i32) -> ElementVerdict {
        let Some(sender) = element.select(&self.sender).next() else {
            return ElementVerdict::Skip(SkipReason::MissingSender);
        };
        let sender = collect_text(sender);
        let sender = sender.trim();
        if sender.is_empty() {
            return ElementVerdict::Skip(SkipReason::MissingSender);
        }

        let reaction = element.select(&self.reaction).next();
        let reactions = reaction
            .map(|r| parse_reactions(&collect_text(r)))
            .unwrap_or_default();

        let Some(body) = element.select(&self.body).next() else {
            return ElementVerdict::Skip(SkipReason::MissingBody);
        };
        let text = body_text(body, reaction);

        let Some(stamp) = element.select(&self.timestamp).next() else {
            return ElementVerdict::Skip(SkipReason::MissingTimestamp);
        };
        let stamp = collect_text(stamp);
        let Some((date, time)) = split_timestamp(
            stamp.trim(),
            &self.config.timestamp_delimiter,
            self.config.delimiter_position,
        ) else {
            return ElementVerdict::Skip(SkipReason::MalformedTimestamp);
        };

        let Some(year) = year_of(date) else {
            return ElementVerdict::Skip(SkipReason::MalformedYear);
        };

        match year.cmp(&target_year) {
            Ordering::Equal => ElementVerdict::Keep(
                ChatMessage::new(sender, text, date, time).with_reactions(reactions),
            ),
            Ordering::Greater => ElementVerdict::Newer(year),
            Ordering::Less => ElementVerdict::Older(year),
        }
    }
}

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| WrappedError::invalid_selector(selector, e.to_string()))
}

fn collect_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Body text without the reaction summary.
///
/// When the summary is nested inside the body its text nodes are left out by
/// position. Otherwise any literal copy of the summary text is removed.
fn body_text(body: ElementRef<'_>, reaction: Option<ElementRef<'_>>) -> String {
    let Some(reaction) = reaction else {
        return collect_text(body);
    };

    let nested = reaction.ancestors().any(|node| node.id() == body.id());
    if nested {
        return body
            .descendants()
            .filter(|node| {
                node.id() != reaction.id()
                    && !node.ancestors().any(|a| a.id() == reaction.id())
            })
            .filter_map(|node| node.value().as_text())
            .map(|text| &**text)
            .collect();
    }

    let summary = collect_text(reaction);
    let full = collect_text(body);
    if summary.is_empty() {
        full
    } else {
        full.replace(&summary, "")
    }
}
