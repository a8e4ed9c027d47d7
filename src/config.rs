//! Configuration types for extraction, archive walking and reporting.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ExtractorConfig`] - CSS selectors and timestamp splitting
//! - [`WalkerConfig`] - document naming and the final-document boundary
//! - [`ReportConfig`] - stop words, search terms and report sections
//!
//! # Example
//!
//! ```rust
//! use chatwrapped::config::{ExtractorConfig, ReportConfig};
//!
//! let extractor = ExtractorConfig::new().with_body_selector("div.body");
//!
//! let report = ReportConfig::new()
//!     .with_extra_stop_words(["Kari", "Ola"])
//!     .with_search_terms(["Pizza"]);
//!
//! assert_eq!(report.extra_stop_words, vec!["kari", "ola"]);
//! assert_eq!(report.search_terms, vec!["pizza"]);
//! ```

use serde::{Deserialize, Serialize};

pub use crate::parsing::timestamp::DelimiterPosition;
use crate::parsing::timestamp::TIMESTAMP_DELIMITER;

/// Selectors and timestamp rules used by the
/// [`MessageExtractor`](crate::extractor::MessageExtractor).
///
/// Defaults match the HTML produced by Facebook's "Download your
/// information" Messenger export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Selector for one message container (default: Messenger message box)
    pub message_selector: String,

    /// Selector for the sender name inside a message
    pub sender_selector: String,

    /// Selector for the reaction summary inside a message
    pub reaction_selector: String,

    /// Selector for the message body inside a message
    pub body_selector: String,

    /// Selector for the timestamp inside a message
    pub timestamp_selector: String,

    /// Separator between date and time (default: `", "`)
    pub timestamp_delimiter: String,

    /// Which delimiter occurrence to split at (default: first)
    pub delimiter_position: DelimiterPosition,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            message_selector: "div.pam._3-95._2pi0._2lej.uiBoxWhite.noborder".to_string(),
            sender_selector: "._3-96._2pio._2lek._2lel".to_string(),
            reaction_selector: "._tqp".to_string(),
            body_selector: "._3-96._2let".to_string(),
            timestamp_selector: "._3-94._2lem".to_string(),
            timestamp_delimiter: TIMESTAMP_DELIMITER.to_string(),
            delimiter_position: DelimiterPosition::First,
        }
    }
}

impl ExtractorConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the message container selector.
    #[must_use]
    pub fn with_message_selector(mut self, selector: impl Into<String>) -> Self {
        self.message_selector = selector.into();
        self
    }

    /// Sets the sender selector.
    #[must_use]
    pub fn with_sender_selector(mut self, selector: impl Into<String>) -> Self {
        self.sender_selector = selector.into();
        self
    }

    /// Sets the reaction summary selector.
    #[must_use]
    pub fn with_reaction_selector(mut self, selector: impl Into<String>) -> Self {
        self.reaction_selector = selector.into();
        self
    }

    /// Sets the body selector.
    #[must_use]
    pub fn with_body_selector(mut self, selector: impl Into<String>) -> Self {
        self.body_selector = selector.into();
        self
    }

    /// Sets the timestamp selector.
    #[must_use]
    pub fn with_timestamp_selector(mut self, selector: impl Into<String>) -> Self {
        self.timestamp_selector = selector.into();
        self
    }

    /// Sets the date/time delimiter.
    #[must_use]
    pub fn with_timestamp_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.timestamp_delimiter = delimiter.into();
        self
    }

    /// Sets which delimiter occurrence splits date from time.
    #[must_use]
    pub fn with_delimiter_position(mut self, position: DelimiterPosition) -> Self {
        self.delimiter_position = position;
        self
    }
}

/// Configuration for the [`ArchiveWalker`](crate::archive::ArchiveWalker).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkerConfig {
    /// Visit the document with the highest index too (default: false).
    ///
    /// Exports have historically been walked over indices `1..count`, which
    /// leaves the last document out. The default keeps that boundary.
    pub include_final_document: bool,

    /// File name prefix of archive documents (default: `message_`)
    pub file_prefix: String,

    /// File name extension of archive documents, without dot (default: `html`)
    pub file_extension: String,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            include_final_document: false,
            file_prefix: "message_".to_string(),
            file_extension: "html".to_string(),
        }
    }
}

impl WalkerConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the highest-indexed document is visited.
    #[must_use]
    pub fn with_include_final_document(mut self, include: bool) -> Self {
        self.include_final_document = include;
        self
    }

    /// Sets the document file prefix.
    #[must_use]
    pub fn with_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    /// Sets the document file extension.
    #[must_use]
    pub fn with_file_extension(mut self, extension: impl Into<String>) -> Self {
        self.file_extension = extension.into();
        self
    }

    /// File name of the document at `index`, e.g. `message_3.html`.
    pub fn file_name(&self, index: usize) -> String {
        format!("{}{}.{}", self.file_prefix, index, self.file_extension)
    }

    /// Last index (exclusive) the walker visits for an archive of `count`
    /// documents.
    pub fn end_index(&self, count: usize) -> usize {
        if self.include_final_document {
            count + 1
        } else {
            count
        }
    }
}

/// Configuration for [`Report`](crate::core::report::Report) building.
///
/// Words and search terms are stored lower-cased, since all matching is done
/// against lower-cased message text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// How many of the most frequent words become stop words (default: 100)
    pub stop_word_count: usize,

    /// Additional stop words, e.g. participant names
    pub extra_stop_words: Vec<String>,

    /// Terms to compute relative frequency for
    pub search_terms: Vec<String>,

    /// Maximum words per word cloud (default: 100)
    pub cloud_max_words: usize,

    /// Include per-person reaction tallies (default: true)
    pub reactions: bool,

    /// Include the share of messages per person (default: true)
    pub share_of_messages: bool,

    /// Include per-person word clouds (default: true)
    pub word_clouds: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            stop_word_count: 100,
            extra_stop_words: Vec::new(),
            search_terms: Vec::new(),
            cloud_max_words: 100,
            reactions: true,
            share_of_messages: true,
            word_clouds: true,
        }
    }
}

impl ReportConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of frequent words treated as stop words.
    #[must_use]
    pub fn with_stop_word_count(mut self, count: usize) -> Self {
        self.stop_word_count = count;
        self
    }

    /// Adds extra stop words (lower-cased).
    #[must_use]
    pub fn with_extra_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extra_stop_words
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    /// Adds search terms (lower-cased).
    #[must_use]
    pub fn with_search_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.search_terms
            .extend(terms.into_iter().map(|t| t.as_ref().to_lowercase()));
        self
    }

    /// Sets the word cloud size.
    #[must_use]
    pub fn with_cloud_max_words(mut self, max: usize) -> Self {
        self.cloud_max_words = max;
        self
    }

    /// Enables or disables reaction tallies.
    #[must_use]
    pub fn with_reactions(mut self, enabled: bool) -> Self {
        self.reactions = enabled;
        self
    }

    /// Enables or disables the share of messages.
    #[must_use]
    pub fn with_share_of_messages(mut self, enabled: bool) -> Self {
        self.share_of_messages = enabled;
        self
    }

    /// Enables or disables word clouds.
    #[must_use]
    pub fn with_word_clouds(mut self, enabled: bool) -> Self {
        self.word_clouds = enabled;
        self
    }
}
