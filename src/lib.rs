//! # Chatwrapped
//!
//! Year-in-review statistics for Messenger chat archives exported as HTML.
//!
//! ## Overview
//!
//! A Messenger export stores one conversation as numbered documents,
//! `message_1.html` holding the newest messages. Chatwrapped:
//!
//! 1. walks the documents newest-first and stops once the requested year
//!    lies behind it ([`archive`])
//! 2. extracts sender, body, reactions and timestamp from each message
//!    container ([`extractor`], [`parsing`])
//! 3. computes statistics over the collected messages ([`core`])
//! 4. writes them as text, JSON, CSV or JSONL ([`core::output`], [`format`])
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatwrapped::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let source = DirectorySource::new("inbox/groupchat");
//!     let messages = ArchiveWalker::new(2020)?.walk(&source)?;
//!
//!     let report = Report::build(&messages, 2020, &ReportConfig::new());
//!     println!("{}", report.render());
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`archive`] - [`DocumentSource`](archive::DocumentSource), [`ArchiveWalker`](archive::ArchiveWalker)
//! - [`extractor`] - [`MessageExtractor`](extractor::MessageExtractor) for one document
//! - [`parsing`] - reaction summaries and timestamps
//! - [`config`] - selectors, walker and report settings
//! - [`core`] - grouping, word statistics, the year [`Report`](core::Report), writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) selection
//! - [`cli`] - clap arguments (feature `cli`)
//! - [`error`] - [`WrappedError`], [`Result`]
//! - [`prelude`] - convenient re-exports

pub mod archive;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod extractor;
pub mod format;
pub mod message;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use error::{Result, WrappedError};
pub use message::{ChatMessage, Reaction};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatwrapped::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Result, WrappedError};
    pub use crate::message::{ChatMessage, Reaction};

    pub use crate::archive::{ArchiveWalker, DirectorySource, DocumentSource, MemorySource};
    pub use crate::config::{ExtractorConfig, ReportConfig, WalkerConfig};
    pub use crate::extractor::MessageExtractor;

    pub use crate::core::{GeneralStats, Report, group_by_sender, participants};
    pub use crate::format::OutputFormat;

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl, write_report_json};
}
