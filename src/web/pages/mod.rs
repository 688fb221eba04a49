//! Maud-based page templates for the web UI.
//!
//! Each page module exports a render function that produces the complete HTML.

pub mod dashboard;

pub use dashboard::{render_dashboard, ViewParams, ViewState};
