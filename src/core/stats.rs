//! Descriptive statistics over extracted messages.
//!
//! Every function here is a pure transformation of already-extracted
//! records. Per-person results are computed from [`SenderGroups`] so the
//! grouping happens once per report.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

use super::grouping::SenderGroups;
use super::words::full_text;
use crate::message::ChatMessage;

/// Width of the general statistics headline.
const HEADLINE_WIDTH: usize = 60;

/// Archive-wide totals for one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneralStats {
    /// The year the messages belong to.
    pub year: i32,
    /// Number of messages.
    pub messages: usize,
    /// Number of distinct dates with at least one message.
    pub active_days: usize,
    /// Number of whitespace-separated words.
    pub words: usize,
    /// Number of reaction pairs.
    pub reactions: usize,
}

impl GeneralStats {
    /// Computes totals for `messages`.
    pub fn compute(messages: &[ChatMessage], year: i32) -> Self {
        let active_days = messages
            .iter()
            .map(|m| m.date.as_str())
            .collect::<BTreeSet<_>>()
            .len();

        Self {
            year,
            messages: messages.len(),
            active_days,
            words: messages.iter().map(ChatMessage::word_count).sum(),
            reactions: messages.iter().map(|m| m.reactions.len()).sum(),
        }
    }

    /// Headline centered in a 60 column line of `#`.
    ///
    /// ```
    /// use chatwrapped::core::stats::GeneralStats;
    ///
    /// let headline = GeneralStats::compute(&[], 2020).headline();
    /// assert_eq!(headline.chars().count(), 60);
    /// assert!(headline.contains(" Chat message stats, 2020 "));
    /// ```
    pub fn headline(&self) -> String {
        let title = format!(" Chat message stats, {} ", self.year);
        format!("{title:#^HEADLINE_WIDTH$}")
    }
}

impl fmt::Display for GeneralStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.headline())?;
        writeln!(f, "Total number of messages: {}", self.messages)?;
        writeln!(f, "Total number of active days: {}", self.active_days)?;
        writeln!(f, "Total number of words: {}", self.words)?;
        write!(f, "Total number of reactions: {}", self.reactions)
    }
}

/// One participant's share of all messages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonShare {
    pub name: String,
    pub messages: usize,
    /// Percentage of all messages (0.0..=100.0).
    pub percent: f64,
}

/// Share of messages per participant, in name order.
pub fn message_share(groups: &SenderGroups<'_>) -> Vec<PersonShare> {
    let total: usize = groups.values().map(Vec::len).sum();
    groups
        .iter()
        .map(|(name, msgs)| PersonShare {
            name: (*name).to_string(),
            messages: msgs.len(),
            percent: if total == 0 {
                0.0
            } else {
                msgs.len() as f64 * 100.0 / total as f64
            },
        })
        .collect()
}

/// Mean message length of one participant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonAverage {
    pub name: String,
    /// Mean number of words per message.
    pub average_words: f64,
}

/// Mean words per message for each participant, longest first.
pub fn average_message_length(groups: &SenderGroups<'_>) -> Vec<PersonAverage> {
    let mut averages: Vec<PersonAverage> = groups
        .iter()
        .filter(|(_, msgs)| !msgs.is_empty())
        .map(|(name, msgs)| {
            let words: usize = msgs.iter().map(|m| m.word_count()).sum();
            PersonAverage {
                name: (*name).to_string(),
                average_words: words as f64 / msgs.len() as f64,
            }
        })
        .collect();

    averages.sort_by(|a, b| b.average_words.total_cmp(&a.average_words));
    averages
}

/// How often one emoji was given and received by a participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmojiCount {
    pub emoji: String,
    /// Reactions with this emoji the participant put on any message.
    pub given: usize,
    /// Reactions with this emoji on the participant's own messages.
    pub received: usize,
}

/// Reaction counts for one participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionTally {
    pub name: String,
    /// Union of given and received emojis, sorted.
    pub emojis: Vec<EmojiCount>,
}

impl ReactionTally {
    /// Total reactions given.
    pub fn total_given(&self) -> usize {
        self.emojis.iter().map(|e| e.given).sum()
    }

    /// Total reactions received.
    pub fn total_received(&self) -> usize {
        self.emojis.iter().map(|e| e.received).sum()
    }
}

/// Reactions given and received per participant.
///
/// A reaction counts as given by a participant when its reactor name equals
/// the participant's sender name exactly.
pub fn reaction_tallies(messages: &[ChatMessage], groups: &SenderGroups<'_>) -> Vec<ReactionTally> {
    groups
        .iter()
        .map(|(name, sent)| {
            let mut counts: BTreeMap<&str, (usize, usize)> = BTreeMap::new();

            for reaction in messages.iter().flat_map(|m| &m.reactions) {
                if reaction.reactor == *name {
                    counts.entry(reaction.emoji.as_str()).or_default().0 += 1;
                }
            }
            for reaction in sent.iter().flat_map(|m| &m.reactions) {
                counts.entry(reaction.emoji.as_str()).or_default().1 += 1;
            }

            ReactionTally {
                name: (*name).to_string(),
                emojis: counts
                    .into_iter()
                    .map(|(emoji, (given, received))| EmojiCount {
                        emoji: emoji.to_string(),
                        given,
                        received,
                    })
                    .collect(),
            }
        })
        .collect()
}

/// Relative frequency of a term for one participant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonFrequency {
    pub name: String,
    /// Non-overlapping occurrences of the term in the participant's text.
    pub occurrences: usize,
    /// Words written by the participant.
    pub words: usize,
    /// `occurrences / words`, 0.0 when the participant wrote no words.
    pub relative: f64,
}

/// Relative frequency of one search term across participants.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermFrequency {
    pub term: String,
    /// Highest relative frequency first.
    pub per_person: Vec<PersonFrequency>,
}

/// Counts `term` in each participant's lower-cased text, relative to the
/// number of words they wrote.
///
/// Matching is by substring, so `ha` also counts inside `haha` (once per
/// non-overlapping match).
pub fn relative_term_frequency(groups: &SenderGroups<'_>, term: &str) -> TermFrequency {
    let term = term.to_lowercase();
    let mut per_person: Vec<PersonFrequency> = groups
        .iter()
        .map(|(name, msgs)| {
            let text = full_text(msgs.iter().copied());
            let occurrences = if term.is_empty() {
                0
            } else {
                text.matches(term.as_str()).count()
            };
            let words = text.split_whitespace().count();
            PersonFrequency {
                name: (*name).to_string(),
                occurrences,
                words,
                relative: if words == 0 {
                    0.0
                } else {
                    occurrences as f64 / words as f64
                },
            }
        })
        .collect();

    per_person.sort_by(|a, b| b.relative.total_cmp(&a.relative));
    TermFrequency { term, per_person }
}
