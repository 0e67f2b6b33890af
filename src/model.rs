use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// The serialized form a rich-document editor reports when its buffer holds
/// nothing but an empty paragraph.
pub const EMPTY_DOCUMENT: &str = "<p></p>";

/// True when `content` carries nothing worth saving or rendering: empty,
/// whitespace-only, or the editor's canonical empty document.
pub fn is_blank(content: &str) -> bool {
    content.trim().is_empty() || content == EMPTY_DOCUMENT
}

/// A saved unit of composed content.
///
/// `content` is opaque to this crate; it is whatever serialized string the
/// editor surface produced. `timestamp` is the last-modified instant and is
/// refreshed on every save. It persists as epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub content: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(content: String, now: DateTime<Utc>) -> Self {
        Self {
            id: next_message_id(now),
            content,
            timestamp: now,
        }
    }
}

static ID_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Time-based message id. The process-wide sequence suffix keeps ids distinct
/// even when two messages are created within the same millisecond.
pub fn next_message_id(now: DateTime<Utc>) -> String {
    let seq = ID_SEQUENCE.fetch_add(1, Ordering::SeqCst);
    format!("{}-{}", now.timestamp_millis(), seq)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_distinct_within_the_same_instant() {
        let now = Utc::now();
        let a = next_message_id(now);
        let b = next_message_id(now);
        assert_ne!(a, b);
    }

    #[test]
    fn blank_detection_covers_the_canonical_empty_document() {
        assert!(is_blank(""));
        assert!(is_blank("   \n"));
        assert!(is_blank(EMPTY_DOCUMENT));
        assert!(!is_blank("<p>Hi</p>"));
    }

    #[test]
    fn timestamp_round_trips_as_epoch_millis() {
        let message = Message::new("<p>Hi</p>".into(), Utc::now());
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(
            json["timestamp"].as_i64().unwrap(),
            message.timestamp.timestamp_millis()
        );
        let back: Message = serde_json::from_value(json).unwrap();
        assert_eq!(back.id, message.id);
        assert_eq!(
            back.timestamp.timestamp_millis(),
            message.timestamp.timestamp_millis()
        );
    }
}
