//! Category extraction and the two-stage post filter.
//!
//! Both filters are pure and recomputed from the current collection on every
//! request; results keep the collection order.

use crate::constants::ALL_CATEGORIES;

use super::Post;

/// Lowercase a category and drop all whitespace so `"Lao Pride"` and
/// `"laopride"` compare equal.
#[must_use]
pub fn normalize_category(category: &str) -> String {
    category
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Distinct category labels in first-seen order.
#[must_use]
pub fn categories(posts: &[Post]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for post in posts {
        if !seen.contains(&post.category.as_str()) {
            seen.push(&post.category);
        }
    }
    seen
}

/// Which posts the category selector lets through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    /// Holds the normalized category.
    Only(String),
}

impl CategoryFilter {
    /// Build a filter from the selected value. The reserved `All` value
    /// disables filtering.
    #[must_use]
    pub fn from_selection(selected: &str) -> Self {
        if selected == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(normalize_category(selected))
        }
    }

    #[must_use]
    pub fn matches(&self, post: &Post) -> bool {
        match self {
            Self::All => true,
            Self::Only(normalized) => normalize_category(&post.category) == *normalized,
        }
    }
}

/// Case-insensitive substring match on post content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFilter {
    needle: String,
}

impl TextFilter {
    #[must_use]
    pub fn new(search: &str) -> Self {
        Self {
            needle: search.to_lowercase(),
        }
    }

    #[must_use]
    pub fn matches(&self, post: &Post) -> bool {
        self.needle.is_empty() || post.content.to_lowercase().contains(&self.needle)
    }
}

/// Apply the category filter, then the text filter.
#[must_use]
pub fn filter_posts<'a>(posts: &'a [Post], category: &str, search: &str) -> Vec<&'a Post> {
    let category = CategoryFilter::from_selection(category);
    let text = TextFilter::new(search);

    posts
        .iter()
        .filter(|post| category.matches(post))
        .filter(|post| text.matches(post))
        .collect()
}
