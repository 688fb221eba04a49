//! EmotionLens library.
//!
//! Serves a dashboard of sentiment-analyzed social media posts fetched from a
//! remote analysis API, with category and text filters, a per-post sentiment
//! chart and expandable comment lists. Files from the static bundle directory
//! are served alongside it.

// Allow raw string hashes for safety - they're harmless and prevent issues if content changes
#![allow(clippy::needless_raw_string_hashes)]

pub mod components;
pub mod config;
pub mod constants;
pub mod posts;
pub mod web;
