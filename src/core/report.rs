//! Year report assembled from extracted messages.
//!
//! [`Report::build`] runs every enabled statistic once and keeps the results
//! as plain data, so the same report can be printed with [`Report::render`]
//! or serialized as JSON.

use std::fmt::Write as _;

use serde::Serialize;

use super::grouping::{group_by_sender, participants};
use super::stats::{
    GeneralStats, PersonAverage, PersonShare, ReactionTally, TermFrequency, average_message_length,
    message_share, reaction_tallies, relative_term_frequency,
};
use super::words::{WeightedWord, derive_stop_words, word_cloud};
use crate::config::ReportConfig;
use crate::message::ChatMessage;

/// Width of the longest bar in rendered output.
const BAR_WIDTH: usize = 40;

/// Word cloud data of one participant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonCloud {
    pub name: String,
    pub words: Vec<WeightedWord>,
}

/// All statistics for one year of messages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub general: GeneralStats,
    pub participants: Vec<String>,
    pub average_length: Vec<PersonAverage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share: Option<Vec<PersonShare>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reactions: Option<Vec<ReactionTally>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_clouds: Option<Vec<PersonCloud>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub term_frequencies: Vec<TermFrequency>,
}

impl Report {
    /// Computes the report for `messages` of `year`.
    ///
    /// # Example
    ///
    /// ```
    /// use chatwrapped::ChatMessage;
    /// use chatwrapped::config::ReportConfig;
    /// use chatwrapped::core::Report;
    ///
    /// let messages = vec![
    ///     ChatMessage::new("Kari", "hei", "1. mai 2020", "10:00"),
    ///     ChatMessage::new("Ola", "heisann", "1. mai 2020", "10:01"),
    /// ];
    /// let report = Report::build(&messages, 2020, &ReportConfig::new());
    ///
    /// assert_eq!(report.general.messages, 2);
    /// assert_eq!(report.participants, ["Kari", "Ola"]);
    /// ```
    pub fn build(messages: &[ChatMessage], year: i32, config: &ReportConfig) -> Self {
        let groups = group_by_sender(messages);

        let word_clouds = config.word_clouds.then(|| {
            let stop_words =
                derive_stop_words(messages, &config.extra_stop_words, config.stop_word_count);
            tracing::debug!(stop_words = stop_words.len(), "Derived stop words");

            groups
                .iter()
                .map(|(name, sent)| PersonCloud {
                    name: (*name).to_string(),
                    words: word_cloud(sent.iter().copied(), &stop_words, config.cloud_max_words),
                })
                .collect::<Vec<_>>()
        });

        Self {
            general: GeneralStats::compute(messages, year),
            participants: participants(messages).into_iter().map(String::from).collect(),
            average_length: average_message_length(&groups),
            share: config.share_of_messages.then(|| message_share(&groups)),
            reactions: config
                .reactions
                .then(|| reaction_tallies(messages, &groups)),
            word_clouds,
            term_frequencies: config
                .search_terms
                .iter()
                .map(|term| relative_term_frequency(&groups, term))
                .collect(),
        }
    }

    /// Renders the report as plain text with ASCII bars.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.general);

        if let Some(share) = &self.share {
            section(&mut out, "Share of messages");
            let rows: Vec<_> = share
                .iter()
                .map(|s| {
                    let label = format!("{:.1}% ({})", s.percent, s.messages);
                    (s.name.as_str(), s.percent, label)
                })
                .collect();
            bars(&mut out, &rows);
        }

        section(&mut out, "Average message length (words)");
        let rows: Vec<_> = self
            .average_length
            .iter()
            .map(|a| (a.name.as_str(), a.average_words, format!("{:.2}", a.average_words)))
            .collect();
        bars(&mut out, &rows);

        if let Some(reactions) = &self.reactions {
            section(&mut out, "Reactions given / received");
            for tally in reactions {
                let _ = writeln!(
                    out,
                    "{}: given {}, received {}",
                    tally.name,
                    tally.total_given(),
                    tally.total_received()
                );
                for emoji in &tally.emojis {
                    let _ = writeln!(out, "  {} {} / {}", emoji.emoji, emoji.given, emoji.received);
                }
            }
        }

        if let Some(clouds) = &self.word_clouds {
            section(&mut out, "Most used words");
            for cloud in clouds {
                let words: Vec<_> = cloud
                    .words
                    .iter()
                    .take(10)
                    .map(|w| format!("{} ({})", w.word, w.count))
                    .collect();
                let _ = writeln!(out, "{}: {}", cloud.name, words.join(", "));
            }
        }

        for freq in &self.term_frequencies {
            section(&mut out, &format!("Relative frequency of \"{}\"", freq.term));
            let rows: Vec<_> = freq
                .per_person
                .iter()
                .map(|p| {
                    let label = format!("{:.4} ({}/{})", p.relative, p.occurrences, p.words);
                    (p.name.as_str(), p.relative, label)
                })
                .collect();
            bars(&mut out, &rows);
        }

        out
    }
}

fn section(out: &mut String, title: &str) {
    let _ = write!(out, "\n{title}\n{}\n", "-".repeat(title.chars().count()));
}

/// Writes one labelled bar per row, scaled to the largest value.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn bars(out: &mut String, rows: &[(&str, f64, String)]) {
    let max = rows.iter().map(|(_, v, _)| *v).fold(0.0_f64, f64::max);
    let name_width = rows.iter().map(|(n, _, _)| n.chars().count()).max().unwrap_or(0);

    for (name, value, label) in rows {
        let len = if max > 0.0 {
            (value / max * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let _ = writeln!(out, "{name:<name_width$} | {} {label}", "#".repeat(len));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Reaction;

    fn sample() -> Vec<ChatMessage> {
        vec![
            ChatMessage::new("Kari", "pizza i kveld?", "1. mai 2020", "17:00")
                .with_reactions(vec![Reaction::new("👍", "Ola")]),
            ChatMessage::new("Ola", "ja pizza", "1. mai 2020", "17:05"),
            ChatMessage::new("Kari", "haha", "2. mai 2020", "09:00"),
        ]
    }

    #[test]
    fn test_build_default() {
        let report = Report::build(&sample(), 2020, &ReportConfig::new());

        assert_eq!(report.general.messages, 3);
        assert_eq!(report.participants, ["Kari", "Ola"]);
        assert!(report.share.is_some());
        assert!(report.reactions.is_some());
        assert!(report.term_frequencies.is_empty());

        // Every word is among the 100 most frequent, so clouds are empty.
        let clouds = report.word_clouds.unwrap();
        assert!(clouds.iter().all(|c| c.words.is_empty()));
    }

    #[test]
    fn test_build_disabled_sections() {
        let config = ReportConfig::new()
            .with_reactions(false)
            .with_share_of_messages(false)
            .with_word_clouds(false);
        let report = Report::build(&sample(), 2020, &config);

        assert!(report.share.is_none());
        assert!(report.reactions.is_none());
        assert!(report.word_clouds.is_none());

        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("share").is_none());
        assert!(json.get("reactions").is_none());
        assert!(json.get("term_frequencies").is_none());
    }

    #[test]
    fn test_build_word_clouds_and_terms() {
        let config = ReportConfig::new()
            .with_stop_word_count(1)
            .with_search_terms(["Pizza"]);
        let report = Report::build(&sample(), 2020, &config);

        let clouds = report.word_clouds.unwrap();
        let kari = clouds.iter().find(|c| c.name == "Kari").unwrap();
        assert!(kari.words.iter().all(|w| w.word != "pizza"));
        assert!(kari.words.iter().any(|w| w.word == "haha"));

        assert_eq!(report.term_frequencies.len(), 1);
        assert_eq!(report.term_frequencies[0].term, "pizza");
        assert_eq!(report.term_frequencies[0].per_person[0].name, "Ola");
    }

    #[test]
    fn test_render() {
        let config = ReportConfig::new().with_search_terms(["pizza"]);
        let text = Report::build(&sample(), 2020, &config).render();

        assert!(text.starts_with("#"));
        assert!(text.contains("Chat message stats, 2020"));
        assert!(text.contains("Share of messages"));
        assert!(text.contains("Kari: given 0, received 1"));
        assert!(text.contains("Relative frequency of \"pizza\""));
        assert!(text.contains(&format!("Kari | {} 66.7% (2)", "#".repeat(BAR_WIDTH))));
    }

    #[test]
    fn test_render_empty() {
        let text = Report::build(&[], 2021, &ReportConfig::new()).render();
        assert!(text.contains("Total number of messages: 0"));
    }
}
