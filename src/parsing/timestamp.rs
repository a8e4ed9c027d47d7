//! Timestamp splitting and year extraction.
//!
//! Messenger timestamps are a single locale-formatted string such as
//! `4. mars 2021, 22:30`. The date and time are separated by a comma and a
//! space; the year is the last four characters of the date.

use serde::{Deserialize, Serialize};

/// Separator between the date and the time of a timestamp.
pub const TIMESTAMP_DELIMITER: &str = ", ";

/// Which occurrence of the delimiter separates date from time.
///
/// Locales that put a comma inside the date (`Mar 4, 2021, 10:30 PM`) need
/// [`Last`](DelimiterPosition::Last).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DelimiterPosition {
    /// Split at the first delimiter.
    #[default]
    First,
    /// Split at the last delimiter.
    Last,
}

/// Splits a raw timestamp into `(date, time)`.
///
/// Returns `None` if the delimiter does not occur.
///
/// ```
/// use chatwrapped::parsing::{DelimiterPosition, split_timestamp};
///
/// assert_eq!(
///     split_timestamp("4. mars 2021, 22:30", ", ", DelimiterPosition::First),
///     Some(("4. mars 2021", "22:30"))
/// );
/// assert_eq!(split_timestamp("4. mars 2021 22:30", ", ", DelimiterPosition::First), None);
/// ```
pub fn split_timestamp<'a>(
    raw: &'a str,
    delimiter: &str,
    position: DelimiterPosition,
) -> Option<(&'a str, &'a str)> {
    match position {
        DelimiterPosition::First => raw.split_once(delimiter),
        DelimiterPosition::Last => raw.rsplit_once(delimiter),
    }
}

/// Returns the year formed by the trailing four characters of `date`.
///
/// The tail must be exactly four ASCII digits; anything else yields `None`.
///
/// ```
/// use chatwrapped::parsing::year_of;
///
/// assert_eq!(year_of("4. mars 2021"), Some(2021));
/// assert_eq!(year_of("4. mars"), None);
/// ```
pub fn year_of(date: &str) -> Option<i32> {
    let (start, _) = date.char_indices().rev().nth(3)?;
    let tail = &date[start..];
    if !tail.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    tail.parse().ok()
}
