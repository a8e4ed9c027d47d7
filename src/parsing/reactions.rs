//! Reaction summary tokenizer.
//!
//! Messenger renders the reactions of a message as one run of text where
//! every reaction is a symbol cluster directly followed by the reactor's
//! name: `👍Kari Nordmann😂Ola`. There is no separator between entries, so
//! the text is split into alternating runs:
//!
//! | Run | Characters |
//! |-----|------------|
//! | [`RunKind::Symbols`] | anything that is not a word character (letters, digits, `_`) |
//! | [`RunKind::Name`] | word characters and spaces |
//! | [`RunKind::Leading`] | word characters before the first symbol, discarded |
//!
//! Each symbol run is paired with the name run that follows it. A symbol run
//! at the very end of the input gets an empty name. Two symbol glyphs with
//! nothing between them form a single cluster, so `👍😂Kari` is one pair
//! `("👍😂", "Kari")`; the export does not distinguish that from two
//! separate reactions.
//!
//! # Example
//!
//! ```
//! use chatwrapped::parsing::parse_reactions;
//! use chatwrapped::Reaction;
//!
//! let pairs = parse_reactions("👍John😂Mary");
//! assert_eq!(pairs, vec![Reaction::new("👍", "John"), Reaction::new("😂", "Mary")]);
//! ```

use crate::message::Reaction;

/// Kind of a run produced by [`RunTokenizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunKind {
    /// Word characters before the first symbol.
    Leading,
    /// One or more non-word characters.
    Symbols,
    /// Word characters and spaces following a symbol run.
    Name,
}

impl RunKind {
    /// Returns the state to switch to if `c` does not belong to a run of
    /// this kind.
    fn next_state(self, c: char) -> Option<RunKind> {
        match self {
            RunKind::Leading if !is_word_char(c) => Some(RunKind::Symbols),
            RunKind::Symbols if is_word_char(c) => Some(RunKind::Name),
            RunKind::Name if !is_name_char(c) => Some(RunKind::Symbols),
            _ => None,
        }
    }
}

/// A maximal run of characters of one [`RunKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run<'a> {
    /// What the run contains.
    pub kind: RunKind,
    /// The run's text, borrowed from the input.
    pub text: &'a str,
}

/// Splits a reaction summary into alternating symbol and name runs.
///
/// ```
/// use chatwrapped::parsing::{RunKind, RunTokenizer};
///
/// let kinds: Vec<_> = RunTokenizer::new("x👍Kari").map(|r| r.kind).collect();
/// assert_eq!(kinds, [RunKind::Leading, RunKind::Symbols, RunKind::Name]);
/// ```
#[derive(Debug, Clone)]
pub struct RunTokenizer<'a> {
    input: &'a str,
    pos: usize,
    state: RunKind,
}

impl<'a> RunTokenizer<'a> {
    /// Creates a tokenizer positioned at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            state: RunKind::Leading,
        }
    }
}

impl<'a> Iterator for RunTokenizer<'a> {
    type Item = Run<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let input = self.input;
        loop {
            let rest = &input[self.pos..];
            if rest.is_empty() {
                return None;
            }

            let kind = self.state;
            let boundary = rest
                .char_indices()
                .find_map(|(i, c)| kind.next_state(c).map(|next| (i, next)));

            let len = match boundary {
                Some((i, next)) => {
                    self.state = next;
                    i
                }
                None => rest.len(),
            };
            self.pos += len;

            // Only the initial leading run can be empty.
            if len > 0 {
                return Some(Run {
                    kind,
                    text: &rest[..len],
                });
            }
        }
    }
}

/// Parses a raw reaction summary into `(symbol, reactor)` pairs.
///
/// Empty input yields an empty list. Malformed input never fails; at worst
/// pairs come out merged or with an empty reactor name.
pub fn parse_reactions(raw: &str) -> Vec<Reaction> {
    let mut pairs = Vec::new();
    let mut pending: Option<&str> = None;

    for run in RunTokenizer::new(raw) {
        match run.kind {
            RunKind::Leading => {}
            RunKind::Symbols => {
                if let Some(symbols) = pending.replace(run.text) {
                    pairs.push(Reaction::new(symbols, ""));
                }
            }
            RunKind::Name => {
                if let Some(symbols) = pending.take() {
                    pairs.push(Reaction::new(symbols, run.text));
                }
            }
        }
    }

    if let Some(symbols) = pending {
        pairs.push(Reaction::new(symbols, ""));
    }

    pairs
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_name_char(c: char) -> bool {
    is_word_char(c) || c == ' '
}
