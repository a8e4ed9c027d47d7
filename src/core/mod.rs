//! Aggregation over extracted messages.
//!
//! - [`grouping`] - participants and per-sender grouping
//! - [`words`] - word frequencies, stop words, word-cloud data
//! - [`stats`] - totals, message share, average length, reactions, term frequency
//! - [`report`] - the assembled year [`Report`]
//! - [`output`] - format writers (CSV, JSON, JSONL)

pub mod grouping;
pub mod output;
pub mod report;
pub mod stats;
pub mod words;

pub use grouping::{SenderGroups, group_by_sender, participants};
pub use report::{PersonCloud, Report};
pub use stats::{
    GeneralStats, PersonAverage, PersonShare, ReactionTally, TermFrequency, average_message_length,
    message_share, reaction_tallies, relative_term_frequency,
};
pub use words::{WeightedWord, derive_stop_words, word_cloud, word_frequencies};

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl, write_report_json};
