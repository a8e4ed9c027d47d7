//! Word frequencies, stop words and word-cloud data.
//!
//! Text is treated as opaque whitespace-separated tokens of the lower-cased
//! message bodies. No stemming, no punctuation stripping.

use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::message::ChatMessage;

/// Lower-cased message bodies joined with single spaces.
pub fn full_text<'a, I>(messages: I) -> String
where
    I: IntoIterator<Item = &'a ChatMessage>,
{
    messages
        .into_iter()
        .map(|m| m.text.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Counts whitespace tokens of `text`, most frequent first.
///
/// Words with equal counts keep the order of their first occurrence.
///
/// ```
/// use chatwrapped::core::words::word_frequencies;
///
/// let freq = word_frequencies("b a b c a b");
/// assert_eq!(freq, [("b", 3), ("a", 2), ("c", 1)]);
/// ```
pub fn word_frequencies(text: &str) -> Vec<(&str, usize)> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for word in text.split_whitespace() {
        match positions.entry(word) {
            Entry::Occupied(e) => counts[*e.get()].1 += 1,
            Entry::Vacant(e) => {
                e.insert(counts.len());
                counts.push((word, 1));
            }
        }
    }

    // Stable sort keeps first-occurrence order among ties.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Builds the stop-word set: the `count` most frequent words of all
/// messages plus `extra` (lower-cased).
pub fn derive_stop_words(messages: &[ChatMessage], extra: &[String], count: usize) -> BTreeSet<String> {
    let text = full_text(messages);
    word_frequencies(&text)
        .into_iter()
        .take(count)
        .map(|(word, _)| word.to_string())
        .chain(extra.iter().map(|w| w.to_lowercase()))
        .collect()
}

/// One word of a word cloud.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedWord {
    /// The word, lower-cased.
    pub word: String,
    /// Occurrences.
    pub count: usize,
    /// Count relative to the most frequent word of the cloud (0.0..=1.0).
    pub weight: f64,
}

/// Word cloud input for one set of messages: the `max_words` most frequent
/// words not in `stop_words`.
pub fn word_cloud<'a, I>(messages: I, stop_words: &BTreeSet<String>, max_words: usize) -> Vec<WeightedWord>
where
    I: IntoIterator<Item = &'a ChatMessage>,
{
    let text = full_text(messages);
    let top: Vec<(&str, usize)> = word_frequencies(&text)
        .into_iter()
        .filter(|(word, _)| !stop_words.contains(*word))
        .take(max_words)
        .collect();

    let max = top.first().map_or(1, |(_, count)| *count).max(1);
    top.into_iter()
        .map(|(word, count)| WeightedWord {
            word: word.to_string(),
            count,
            weight: count as f64 / max as f64,
        })
        .collect()
}
