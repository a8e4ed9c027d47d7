//! Grouping of extracted messages by participant.

use std::collections::BTreeMap;

use crate::message::ChatMessage;

/// Messages grouped by sender, in sender name order.
pub type SenderGroups<'a> = BTreeMap<&'a str, Vec<&'a ChatMessage>>;

/// Returns the distinct senders, sorted.
///
/// ```
/// use chatwrapped::ChatMessage;
/// use chatwrapped::core::grouping::participants;
///
/// let messages = vec![
///     ChatMessage::new("Ola", "a", "1. mai 2020", "10:00"),
///     ChatMessage::new("Kari", "b", "1. mai 2020", "10:01"),
///     ChatMessage::new("Ola", "c", "1. mai 2020", "10:02"),
/// ];
/// assert_eq!(participants(&messages), ["Kari", "Ola"]);
/// ```
pub fn participants(messages: &[ChatMessage]) -> Vec<&str> {
    group_by_sender(messages).into_keys().collect()
}

/// Groups messages by sender, keeping each sender's messages in input order.
pub fn group_by_sender(messages: &[ChatMessage]) -> SenderGroups<'_> {
    let mut groups: SenderGroups<'_> = BTreeMap::new();
    for msg in messages {
        groups.entry(msg.sender.as_str()).or_default().push(msg);
    }
    groups
}
