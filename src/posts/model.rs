//! Post schema at the ingestion boundary.
//!
//! The remote API produces loosely typed records: identifiers arrive as
//! strings or numbers, counts may be missing, and sentiment magnitudes are
//! sometimes encoded as strings. [`RawPost`] accepts all of that and
//! [`Post`] is the normalized record the rest of the crate works with.

use chrono::DateTime;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::constants::DEFAULT_CATEGORY;

/// A post record exactly as the remote API sends it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPost {
    #[serde(rename = "Post_ID", default, deserialize_with = "scalar_text")]
    pub post_id: String,
    #[serde(rename = "Post_Content", default, deserialize_with = "scalar_text")]
    pub post_content: String,
    #[serde(rename = "Created_Time", default, deserialize_with = "scalar_text")]
    pub created_time: String,
    #[serde(rename = "Page_Name", default, deserialize_with = "scalar_text")]
    pub page_name: String,
    #[serde(rename = "Reaction_Count", default, deserialize_with = "scalar_text")]
    pub reaction_count: String,
    #[serde(rename = "Comment_Count", default, deserialize_with = "scalar_text")]
    pub comment_count: String,
    #[serde(rename = "Share_Count", default, deserialize_with = "scalar_text")]
    pub share_count: String,
    #[serde(rename = "Positive", default, deserialize_with = "magnitude")]
    pub positive: f64,
    #[serde(rename = "Neutral", default, deserialize_with = "magnitude")]
    pub neutral: f64,
    #[serde(rename = "Negative", default, deserialize_with = "magnitude")]
    pub negative: f64,
    #[serde(rename = "Details", default, deserialize_with = "scalar_text")]
    pub details: String,
}

/// Post-level sentiment magnitudes.
///
/// The values are whatever the analysis backend produced; they are not
/// required to sum to 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SentimentBreakdown {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

impl SentimentBreakdown {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.positive + self.neutral + self.negative
    }
}

/// A normalized post.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    /// Opaque identifier, also the key for the expanded comments panel.
    pub id: String,
    pub content: String,
    pub created_time: String,
    /// Page the post belongs to. Never blank.
    pub category: String,
    pub reaction_count: String,
    pub comment_count: String,
    pub share_count: String,
    pub sentiment: SentimentBreakdown,
    /// Freeform comment blob, see [`crate::posts::comments`].
    pub details: String,
}

impl From<RawPost> for Post {
    fn from(raw: RawPost) -> Self {
        Self {
            id: raw.post_id,
            content: raw.post_content,
            created_time: raw.created_time,
            category: category_or_default(raw.page_name),
            reaction_count: raw.reaction_count,
            comment_count: raw.comment_count,
            share_count: raw.share_count,
            sentiment: SentimentBreakdown {
                positive: raw.positive,
                neutral: raw.neutral,
                negative: raw.negative,
            },
            details: raw.details,
        }
    }
}

impl Post {
    /// Creation time formatted for display.
    ///
    /// RFC 3339 and the `+0000` offset style used by the Graph API are
    /// reformatted with seconds and offset intact; anything else is shown
    /// verbatim.
    #[must_use]
    pub fn display_time(&self) -> String {
        let raw = self.created_time.trim();
        DateTime::parse_from_rfc3339(raw)
            .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z"))
            .map_or_else(
                |_| self.created_time.clone(),
                |dt| dt.format("%Y-%m-%d %H:%M:%S %:z").to_string(),
            )
    }
}

/// Substitute the default category for a missing or blank page name.
#[must_use]
pub fn category_or_default(name: String) -> String {
    if name.trim().is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        name
    }
}

/// Accept any JSON scalar and keep its textual form. `null` becomes empty.
fn scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// Accept a number or a numeric string. Anything else counts as zero.
fn magnitude<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    };
    Ok(if value.is_finite() { value } else { 0.0 })
}
