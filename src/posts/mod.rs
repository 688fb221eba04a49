//! The post collection and everything derived from it.
//!
//! - `model`: wire schema and normalized [`Post`]
//! - `loader`: the one-shot fetch from the analysis API
//! - `store`: shared holder for the fetched collection
//! - `filter`: category extraction and the category/text filters
//! - `comments`: details-blob parsing into sentiment-tagged comments
//! - `expand`: the single-open comments panel state

pub mod comments;
pub mod expand;
pub mod filter;
pub mod loader;
pub mod model;
pub mod store;

pub use comments::{parse_comments, CommentEntry, Sentiment, SentimentStyle};
pub use expand::ExpandState;
pub use filter::{categories, filter_posts, normalize_category, CategoryFilter, TextFilter};
pub use loader::{load_posts, FetchError, HttpPostSource, PostSource};
pub use model::{category_or_default, Post, RawPost, SentimentBreakdown};
pub use store::PostStore;
