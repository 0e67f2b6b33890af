//! Saved-list projections for a sidebar: markup-stripped previews capped at a
//! display width, relative saved-time labels, and the active-entry flag.

use crate::model::Message;
use chrono::{DateTime, Utc};
use unicode_width::UnicodeWidthChar;

const PREVIEW_WIDTH: usize = 80;
const EMPTY_PREVIEW: &str = "(Empty message)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageSummary {
    pub id: String,
    pub preview: String,
    pub saved_ago: String,
    pub is_active: bool,
}

pub fn summarize(
    messages: &[Message],
    active_id: Option<&str>,
    now: DateTime<Utc>,
) -> Vec<MessageSummary> {
    let formatter = timeago::Formatter::new();
    messages
        .iter()
        .map(|message| {
            let elapsed = (now - message.timestamp).to_std().unwrap_or_default();
            MessageSummary {
                id: message.id.clone(),
                preview: preview_text(&message.content),
                saved_ago: formatter.convert(elapsed),
                is_active: active_id == Some(message.id.as_str()),
            }
        })
        .collect()
}

/// Markup stripped and truncated to the sidebar's width. Content that strips
/// down to nothing gets the empty-message fallback.
fn preview_text(content: &str) -> String {
    let text = strip_tags(content);
    let text = text.trim();
    if text.is_empty() {
        return EMPTY_PREVIEW.to_string();
    }
    truncate_to_width(text, PREVIEW_WIDTH)
}

fn strip_tags(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut in_tag = false;
    for ch in content.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width {
            out.push_str("...");
            return out;
        }
        width += ch_width;
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn message(id: &str, content: &str, timestamp: DateTime<Utc>) -> Message {
        Message {
            id: id.to_string(),
            content: content.to_string(),
            timestamp,
        }
    }

    #[test]
    fn strips_markup_and_flags_the_active_entry() {
        let now = Utc::now();
        let messages = vec![
            message("a-0", "<p>Hello <strong>world</strong></p>", now),
            message("b-1", "<p>Older</p>", now - Duration::minutes(5)),
        ];

        let summaries = summarize(&messages, Some("a-0"), now);

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].preview, "Hello world");
        assert!(summaries[0].is_active);
        assert!(!summaries[1].is_active);
        assert!(summaries[1].saved_ago.contains("minutes"));
    }

    #[test]
    fn markup_only_content_falls_back_to_the_empty_label() {
        let now = Utc::now();
        let messages = vec![message("a-0", "<p></p>", now)];
        let summaries = summarize(&messages, None, now);
        assert_eq!(summaries[0].preview, EMPTY_PREVIEW);
    }

    #[test]
    fn long_previews_are_truncated_with_an_ellipsis() {
        let now = Utc::now();
        let long = format!("<p>{}</p>", "x".repeat(200));
        let messages = vec![message("a-0", &long, now)];

        let summaries = summarize(&messages, None, now);

        assert!(summaries[0].preview.ends_with("..."));
        assert_eq!(summaries[0].preview.chars().count(), PREVIEW_WIDTH + 3);
    }

    #[test]
    fn wide_characters_count_by_display_width() {
        let now = Utc::now();
        // Fullwidth characters are two columns each, so 50 of them overflow
        // the 80-column budget.
        let wide = format!("<p>{}</p>", "あ".repeat(50));
        let messages = vec![message("a-0", &wide, now)];

        let summaries = summarize(&messages, None, now);

        assert!(summaries[0].preview.ends_with("..."));
        assert!(summaries[0].preview.chars().count() <= 40 + 3);
    }
}
