//! Output format writers.
//!
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter, requires `csv-output`
//! - [`write_json`] / [`to_json`] - JSON array of messages, requires `json-output`
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, requires `json-output`
//! - [`write_report_json`] - the year report as pretty JSON, requires `json-output`
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatwrapped::Result<()> {
//! use chatwrapped::ChatMessage;
//! use chatwrapped::core::output::{to_csv, write_json};
//!
//! let messages = vec![ChatMessage::new("Kari", "Hei", "1. mai 2020", "10:00")];
//!
//! write_json(&messages, "messages.json")?;
//! let csv = to_csv(&messages)?;
//! assert!(csv.starts_with("Date;Time;Sender;Text;Reactions"));
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json, write_report_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
