//! Base layout components for the web UI.
//!
//! This module provides the main page layout structure including
//! the HTML skeleton, header and footer.

use maud::{html, Markup, DOCTYPE};

/// Application name shown in titles and the header.
pub const APP_NAME: &str = "EmotionLens";

/// Base page layout builder.
///
/// # Example
///
/// ```ignore
/// use maud::html;
/// use crate::components::layout::BaseLayout;
///
/// let content = html! { h1 { "Hello World" } };
/// let page = BaseLayout::new("My Page").render(content);
/// ```
#[derive(Debug, Clone)]
pub struct BaseLayout<'a> {
    title: &'a str,
}

impl<'a> BaseLayout<'a> {
    /// Create a new base layout with the given page title.
    #[must_use]
    pub fn new(title: &'a str) -> Self {
        Self { title }
    }

    /// Render the complete HTML page with the given content.
    ///
    /// The content will be placed inside the `<main class="container">` element.
    #[must_use]
    pub fn render(self, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    title { (self.title) " - " (APP_NAME) }
                    link rel="stylesheet" href="/css/style.css";
                    link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>💬</text></svg>";
                }
                body {
                    main class="container" {
                        (content)
                    }
                    (Self::render_footer())
                }
            }
        }
    }

    /// Render the page footer.
    fn render_footer() -> Markup {
        html! {
            footer class="container" {
                small {
                    (APP_NAME) " | "
                    a href="/api/posts?category=All" { "JSON" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_layout_basic_structure() {
        let content = html! { h1 { "Test Content" } };
        let page = BaseLayout::new("Test Page").render(content);
        let html = page.into_string();

        // Check DOCTYPE and html structure
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="en">"#));

        // Check head elements
        assert!(html.contains(r#"<meta charset="UTF-8">"#));
        assert!(html.contains("<title>Test Page - EmotionLens</title>"));
        assert!(html.contains(r#"<link rel="stylesheet" href="/css/style.css">"#));

        // Check body structure
        assert!(html.contains(r#"<main class="container"><h1>Test Content</h1></main>"#));
    }

    #[test]
    fn test_base_layout_footer() {
        let html = BaseLayout::new("Footer Test")
            .render(html! {})
            .into_string();

        assert!(html.contains(r#"<footer class="container">"#));
        assert!(html.contains(r#"<a href="/api/posts?category=All">JSON</a>"#));
    }
}
