//! Parsing of the freeform comment blob attached to each post.
//!
//! The blob holds zero or more comments separated by a blank line. Each block
//! usually looks like:
//!
//! ```text
//! comment: Great post!
//! sentiment: positive
//! ```
//!
//! Both markers are optional and matched case-insensitively.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Delimiter between comment blocks.
const BLOCK_DELIMITER: &str = "\n\n";

static SENTIMENT_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)sentiment:\s*(\w+)").expect("valid sentiment regex"));

static SENTIMENT_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)sentiment:\s*\w+").expect("valid sentiment marker regex"));

static COMMENT_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)comment:\s*").expect("valid comment prefix regex"));

/// Comment-level sentiment tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl Sentiment {
    /// Map a tag word to a sentiment. Unknown words are neutral.
    #[must_use]
    pub fn from_tag(word: &str) -> Self {
        match word.to_lowercase().as_str() {
            "positive" => Self::Positive,
            "negative" => Self::Negative,
            _ => Self::Neutral,
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }

    /// Text, background and border classes for this sentiment.
    #[must_use]
    pub const fn style(&self) -> SentimentStyle {
        match self {
            Self::Positive => SentimentStyle {
                text: "text-green-600",
                background: "bg-green-50",
                border: "border-green-200",
            },
            Self::Negative => SentimentStyle {
                text: "text-red-600",
                background: "bg-red-50",
                border: "border-red-200",
            },
            Self::Neutral => SentimentStyle {
                text: "text-yellow-600",
                background: "bg-yellow-50",
                border: "border-yellow-200",
            },
        }
    }
}

/// Display classes for one sentiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentimentStyle {
    pub text: &'static str,
    pub background: &'static str,
    pub border: &'static str,
}

impl SentimentStyle {
    /// All three classes joined for a `class` attribute.
    #[must_use]
    pub fn classes(&self) -> String {
        format!("{} {} {}", self.text, self.background, self.border)
    }
}

/// One parsed comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentEntry {
    pub text: String,
    pub sentiment: Sentiment,
}

/// Split a details blob into comment entries.
///
/// Blocks without a sentiment tag are neutral. An empty blob produces no
/// entries. Whitespace-only blocks between comments are dropped too, rather
/// than showing up as blank neutral entries.
#[must_use]
pub fn parse_comments(details: &str) -> Vec<CommentEntry> {
    details
        .split(BLOCK_DELIMITER)
        .filter(|block| !block.trim().is_empty())
        .map(parse_block)
        .collect()
}

fn parse_block(block: &str) -> CommentEntry {
    let sentiment = SENTIMENT_TAG
        .captures(block)
        .and_then(|caps| caps.get(1))
        .map_or(Sentiment::Neutral, |m| Sentiment::from_tag(m.as_str()));

    // Only the first occurrence of each marker is removed.
    let without_prefix = COMMENT_PREFIX.replace(block, "");
    let cleaned = SENTIMENT_MARKER.replace(&without_prefix, "");

    CommentEntry {
        text: cleaned.trim().to_string(),
        sentiment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_tagged_blocks() {
        let entries = parse_comments(
            "comment: Great post!\nsentiment: positive\n\ncomment: Meh\nsentiment: neutral",
        );

        assert_eq!(
            entries,
            vec![
                CommentEntry {
                    text: "Great post!".to_string(),
                    sentiment: Sentiment::Positive,
                },
                CommentEntry {
                    text: "Meh".to_string(),
                    sentiment: Sentiment::Neutral,
                },
            ]
        );
    }

    #[test]
    fn test_missing_tag_is_neutral() {
        let entries = parse_comments("comment: Nice");

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "Nice");
        assert_eq!(entries[0].sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_missing_prefix() {
        let entries = parse_comments("Terrible service\nsentiment: negative");

        assert_eq!(entries[0].text, "Terrible service");
        assert_eq!(entries[0].sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_case_insensitive_markers() {
        let entries = parse_comments("Comment: Love it\nSENTIMENT: Positive");

        assert_eq!(entries[0].text, "Love it");
        assert_eq!(entries[0].sentiment, Sentiment::Positive);
    }

    #[test]
    fn test_unknown_tag_is_neutral() {
        let entries = parse_comments("comment: hmm\nsentiment: mixed");

        assert_eq!(entries[0].text, "hmm");
        assert_eq!(entries[0].sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_blank_block_between_comments_is_dropped() {
        let entries = parse_comments("comment: first\n\n   \n\ncomment: second\nsentiment: negative");

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].text, "first");
        assert_eq!(entries[1].text, "second");
        assert_eq!(entries[1].sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_empty_details() {
        assert!(parse_comments("").is_empty());
        assert!(parse_comments("  \n ").is_empty());
        assert!(parse_comments("\n\n\n\n").is_empty());
    }

    #[test]
    fn test_styles_are_distinct() {
        assert_eq!(Sentiment::Positive.style().text, "text-green-600");
        assert_eq!(Sentiment::Negative.style().background, "bg-red-50");
        assert_eq!(
            Sentiment::Neutral.style().classes(),
            "text-yellow-600 bg-yellow-50 border-yellow-200"
        );
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&Sentiment::Negative).unwrap();
        assert_eq!(json, "\"negative\"");
    }
}
