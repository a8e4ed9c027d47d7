//! Command-line interface definition using clap.
//!
//! [`Args`] maps one-to-one onto the library configuration types, see
//! [`Args::walker_config`] and [`Args::report_config`].

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::{ReportConfig, WalkerConfig};
use crate::format::OutputFormat;

/// Year-in-review statistics for an exported HTML chat archive.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatwrapped")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatwrapped ./inbox/groupchat
    chatwrapped ./inbox/groupchat --year 2021 --search pizza --search haha
    chatwrapped ./inbox/groupchat --remove-names kari ola --no-wordcloud
    chatwrapped ./inbox/groupchat --export messages.csv --report report.json")]
pub struct Args {
    /// Directory holding message_1.html, message_2.html, ... (newest first)
    pub in_dir: PathBuf,

    /// Year to collect messages from
    #[arg(short, long, default_value_t = 2020)]
    pub year: i32,

    /// Extra words to leave out of word clouds (e.g. participant names)
    #[arg(long, value_name = "WORD", num_args = 1..)]
    pub remove_names: Vec<String>,

    /// Term to compute relative frequency for (repeatable)
    #[arg(short, long, value_name = "TERM")]
    pub search: Vec<String>,

    /// Skip reaction statistics
    #[arg(long)]
    pub no_reactions: bool,

    /// Skip share-of-messages statistics
    #[arg(long)]
    pub no_share: bool,

    /// Skip word-cloud statistics
    #[arg(long)]
    pub no_wordcloud: bool,

    /// Export the extracted messages to this file
    #[arg(short, long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Export format (detected from the file extension when omitted)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the report as JSON to this file
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Also read the last numbered document of the archive
    #[arg(long)]
    pub include_final_document: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Walker settings selected by the flags.
    pub fn walker_config(&self) -> WalkerConfig {
        WalkerConfig::new().with_include_final_document(self.include_final_document)
    }

    /// Report settings selected by the flags.
    pub fn report_config(&self) -> ReportConfig {
        ReportConfig::new()
            .with_extra_stop_words(&self.remove_names)
            .with_search_terms(&self.search)
            .with_reactions(!self.no_reactions)
            .with_share_of_messages(!self.no_share)
            .with_word_clouds(!self.no_wordcloud)
    }

    /// Format for `--export`: the explicit `--format`, else the extension.
    pub fn export_format(&self) -> crate::Result<Option<OutputFormat>> {
        match (&self.export, self.format) {
            (None, _) => Ok(None),
            (Some(_), Some(format)) => Ok(Some(format)),
            (Some(path), None) => OutputFormat::from_path(path).map(Some),
        }
    }

    /// Default tracing filter directive for the verbosity count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
