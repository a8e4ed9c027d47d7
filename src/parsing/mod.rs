//! Low-level text parsing shared by the extractor.
//!
//! - [`reactions`] - tokenizer for reaction summaries (`👍Kari😂Ola`)
//! - [`timestamp`] - timestamp splitting and year extraction
//!
//! Nothing here touches markup: the functions operate on text already
//! pulled out of a document by [`extractor`](crate::extractor).

pub mod reactions;
pub mod timestamp;

pub use reactions::{Run, RunKind, RunTokenizer, parse_reactions};
pub use timestamp::{DelimiterPosition, TIMESTAMP_DELIMITER, split_timestamp, year_of};
