//! Card components for displaying posts and their comments.

use maud::{html, Markup, Render};

use crate::components::badge::{CategoryBadge, CountBadge, CountKind, SentimentBadge};
use crate::components::chart::SentimentChart;
use crate::posts::{parse_comments, CommentEntry, Post};

/// A post card: content, engagement counts, sentiment chart and the
/// comments toggle.
///
/// # Example
///
/// ```ignore
/// use crate::components::card::PostCard;
///
/// let card = PostCard::new(&post, "/?expanded=123").expanded(true);
/// ```
#[derive(Debug, Clone)]
pub struct PostCard<'a> {
    pub post: &'a Post,
    /// Link that flips this post's comments panel.
    pub toggle_url: &'a str,
    pub expanded: bool,
}

impl<'a> PostCard<'a> {
    /// Create a collapsed post card.
    #[must_use]
    pub const fn new(post: &'a Post, toggle_url: &'a str) -> Self {
        Self {
            post,
            toggle_url,
            expanded: false,
        }
    }

    /// Set whether the comments panel is open.
    #[must_use]
    pub const fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }
}

impl Render for PostCard<'_> {
    fn render(&self) -> Markup {
        let post = self.post;
        let toggle_label = if self.expanded {
            "Hide Comments \u{25B2}" // ▲
        } else {
            "View Comments \u{25BC}" // ▼
        };

        html! {
            article class="post-card" id={ "post-" (post.id) } {
                div class="post-header" {
                    h2 class="post-content" { (post.content) }
                    p class="post-time" { (post.display_time()) }
                }
                (CategoryBadge::new(&post.category))
                div class="post-counts" {
                    (CountBadge::new(CountKind::Reactions, &post.reaction_count))
                    (CountBadge::new(CountKind::Comments, &post.comment_count))
                    (CountBadge::new(CountKind::Shares, &post.share_count))
                }
                (SentimentChart::new(post.sentiment))
                div class="comments-toggle" {
                    a href=(self.toggle_url) aria-expanded=(if self.expanded { "true" } else { "false" }) {
                        (toggle_label)
                    }
                }
                @if self.expanded {
                    (CommentPanel::new(&parse_comments(&post.details)))
                }
            }
        }
    }
}

/// The expanded list of comments for a post.
#[derive(Debug, Clone)]
pub struct CommentPanel<'a> {
    pub comments: &'a [CommentEntry],
}

impl<'a> CommentPanel<'a> {
    #[must_use]
    pub const fn new(comments: &'a [CommentEntry]) -> Self {
        Self { comments }
    }
}

impl Render for CommentPanel<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="comment-panel" {
                @for comment in self.comments {
                    div class={ "comment " (comment.sentiment.style().classes()) } {
                        "\u{1F4AC} " (comment.text) // 💬
                        (SentimentBadge::new(comment.sentiment))
                    }
                }
            }
        }
    }
}

/// An empty state component for when no posts are visible.
#[derive(Debug, Clone)]
pub struct EmptyState<'a> {
    pub message: &'a str,
}

impl EmptyState<'_> {
    /// Create a "no results" empty state.
    #[must_use]
    pub const fn no_results() -> Self {
        Self {
            message: "No posts found. Try another keyword or page.",
        }
    }
}

impl Render for EmptyState<'_> {
    fn render(&self) -> Markup {
        html! {
            p class="empty-state" { (self.message) }
        }
    }
}
