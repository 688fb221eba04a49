//! Maud HTML template components for the web UI.
//!
//! Components are organized into submodules by functionality:
//!
//! - `layout`: Base page layout
//! - `badge`: Category, engagement count and sentiment badges
//! - `card`: Post cards, the comments panel and the empty state
//! - `chart`: Sentiment pie chart and legend
//! - `form`: Filter bar form controls
//!
//! # Example
//!
//! ```ignore
//! use maud::{html, Markup};
//! use crate::components::{BaseLayout, EmptyState};
//!
//! fn my_page() -> Markup {
//!     let content = html! {
//!         h1 { "Hello World" }
//!         (EmptyState::no_results())
//!     };
//!     BaseLayout::new("My Page").render(content)
//! }
//! ```

pub mod badge;
pub mod card;
pub mod chart;
pub mod form;
pub mod layout;

pub use badge::{CategoryBadge, CountBadge, CountKind, SentimentBadge};
pub use card::{CommentPanel, EmptyState, PostCard};
pub use chart::SentimentChart;
pub use form::{Form, Input, Select, SelectOption};
pub use layout::BaseLayout;

/// Re-export maud for convenience
pub use maud::{html, Markup, PreEscaped, DOCTYPE};
