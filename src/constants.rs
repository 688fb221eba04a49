//! Shared constants used across the application.

/// Category assigned to posts whose page name is missing or blank.
///
/// This is the product's home page, not a generic placeholder, so it is also
/// the category selected when a visitor first opens the dashboard.
pub const DEFAULT_CATEGORY: &str = "LaoPride";

/// Reserved category value that disables the category filter.
pub const ALL_CATEGORIES: &str = "All";

/// Endpoint serving the analyzed post collection.
pub const DEFAULT_POSTS_URL: &str = "https://web-production-b01ad.up.railway.app/posts";

/// User agent sent with the post collection request.
pub const USER_AGENT: &str = concat!("emotion-lens/", env!("CARGO_PKG_VERSION"));
