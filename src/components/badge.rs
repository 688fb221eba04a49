//! Badge components for categories, counts and comment sentiment.

use maud::{html, Markup, Render};

use crate::posts::Sentiment;

/// The page a post was published on.
#[derive(Debug, Clone, Copy)]
pub struct CategoryBadge<'a> {
    pub category: &'a str,
}

impl<'a> CategoryBadge<'a> {
    #[must_use]
    pub const fn new(category: &'a str) -> Self {
        Self { category }
    }
}

impl Render for CategoryBadge<'_> {
    fn render(&self) -> Markup {
        html! {
            p class="category-badge" {
                "\u{1F4D8} " (self.category) // 📘
            }
        }
    }
}

/// Engagement counter kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountKind {
    Reactions,
    Comments,
    Shares,
}

impl CountKind {
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Reactions => "\u{1F44D}", // 👍
            Self::Comments => "\u{1F4AC}",  // 💬
            Self::Shares => "\u{1F501}",    // 🔁
        }
    }

    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Reactions => "Reactions",
            Self::Comments => "Comments",
            Self::Shares => "Shares",
        }
    }
}

/// An engagement count. The value is displayed exactly as received.
#[derive(Debug, Clone, Copy)]
pub struct CountBadge<'a> {
    pub kind: CountKind,
    pub value: &'a str,
}

impl<'a> CountBadge<'a> {
    #[must_use]
    pub const fn new(kind: CountKind, value: &'a str) -> Self {
        Self { kind, value }
    }
}

impl Render for CountBadge<'_> {
    fn render(&self) -> Markup {
        html! {
            span class="count-badge" title=(self.kind.title()) {
                (self.kind.icon()) " " (self.value)
            }
        }
    }
}

/// Sentiment label shown on the right of each comment.
#[derive(Debug, Clone, Copy)]
pub struct SentimentBadge {
    pub sentiment: Sentiment,
}

impl SentimentBadge {
    #[must_use]
    pub const fn new(sentiment: Sentiment) -> Self {
        Self { sentiment }
    }
}

impl Render for SentimentBadge {
    fn render(&self) -> Markup {
        html! {
            span class="sentiment-badge" { (self.sentiment.label()) }
        }
    }
}
