//! Record model for extracted chat messages.
//!
//! This module provides [`ChatMessage`], the typed record the extractor
//! produces for every message element that carries a sender, a body and a
//! timestamp, and [`Reaction`], one `(symbol, reactor)` pair parsed from the
//! message's reaction summary.
//!
//! Records are plain values: created once by the extractor, never mutated
//! afterwards, and handed to the aggregation code by shared reference.
//!
//! # Examples
//!
//! ```
//! use chatwrapped::{ChatMessage, Reaction};
//!
//! let msg = ChatMessage::new("Kari", "God jul!", "24. desember 2020", "18:02")
//!     .with_reactions(vec![Reaction::new("❤", "Ola")]);
//!
//! assert_eq!(msg.sender(), "Kari");
//! assert_eq!(msg.year(), Some(2020));
//! assert_eq!(msg.reactions().len(), 1);
//! ```
//!
//! ## Serialization
//!
//! ```
//! use chatwrapped::ChatMessage;
//!
//! let msg = ChatMessage::new("Kari", "Hei", "1. mars 2020", "09:15");
//! let json = serde_json::to_string(&msg)?;
//! let parsed: ChatMessage = serde_json::from_str(&json)?;
//!
//! assert_eq!(msg, parsed);
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::parsing::timestamp::year_of;

/// A single reaction on a message: the symbol cluster and the name that
/// followed it in the reaction summary.
///
/// The reactor name may be empty when the summary ends with a symbol cluster
/// that has no name after it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reaction {
    /// Emoji or other symbol glyph(s).
    pub emoji: String,

    /// Display name of the participant who reacted.
    pub reactor: String,
}

impl Reaction {
    /// Creates a new reaction pair.
    pub fn new(emoji: impl Into<String>, reactor: impl Into<String>) -> Self {
        Self {
            emoji: emoji.into(),
            reactor: reactor.into(),
        }
    }
}

/// A message extracted from one document of a chat archive.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `sender` | `String` | Display name of the author, never empty |
/// | `text` | `String` | Body with the reaction summary removed, may be empty |
/// | `reactions` | `Vec<Reaction>` | Parsed reaction pairs in source order |
/// | `date` | `String` | Date part of the timestamp, source locale |
/// | `time` | `String` | Time part of the timestamp, source locale |
///
/// Dates stay in the export's locale format. The year is the trailing four
/// characters of `date`, see [`year`](Self::year).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Display name of the message author.
    pub sender: String,

    /// Message body with any reaction annotation removed.
    pub text: String,

    /// Reactions in the order they appear in the summary.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reactions: Vec<Reaction>,

    /// Date string, e.g. `4. mars 2021`.
    pub date: String,

    /// Time string, e.g. `22:30`.
    pub time: String,
}

impl ChatMessage {
    /// Creates a message without reactions.
    pub fn new(
        sender: impl Into<String>,
        text: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            sender: sender.into(),
            text: text.into(),
            reactions: Vec::new(),
            date: date.into(),
            time: time.into(),
        }
    }

    /// Builder method to attach reactions.
    #[must_use]
    pub fn with_reactions(mut self, reactions: Vec<Reaction>) -> Self {
        self.reactions = reactions;
        self
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message body.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the parsed reactions.
    pub fn reactions(&self) -> &[Reaction] {
        &self.reactions
    }

    /// Returns the date string.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Returns the time string.
    pub fn time(&self) -> &str {
        &self.time
    }

    // =========================================================================
    // Utility methods
    // =========================================================================

    /// Returns the year encoded in the trailing four characters of the date,
    /// or `None` if they are not a number.
    pub fn year(&self) -> Option<i32> {
        year_of(&self.date)
    }

    /// Number of whitespace-separated words in the body.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Returns `true` if the body is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Returns `true` if anyone reacted to this message.
    pub fn has_reactions(&self) -> bool {
        !self.reactions.is_empty()
    }
}
