//! The posts dashboard.
//!
//! View state (selected category, search text, expanded post) lives in the
//! query string. Every render recomputes categories and the filtered list
//! from the current collection.

use maud::{html, Markup};
use url::form_urlencoded;
use urlencoding::encode;

use crate::components::{BaseLayout, EmptyState, Form, Input, PostCard, Select, SelectOption};
use crate::constants::{ALL_CATEGORIES, DEFAULT_CATEGORY};
use crate::posts::{categories, filter_posts, ExpandState, Post};

/// Heading shown above the filter bar.
pub const HEADING: &str = "EmotionLens: Facebook Posts & Comments Analyzer";

/// Raw query parameters accepted by the dashboard.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ViewParams {
    pub category: Option<String>,
    pub q: Option<String>,
    pub expanded: Option<String>,
}

impl ViewParams {
    /// Parse a raw query string. Repeated keys keep their first value and
    /// unknown keys are ignored.
    #[must_use]
    pub fn from_query(query: Option<&str>) -> Self {
        let mut params = Self::default();
        for (key, value) in form_urlencoded::parse(query.unwrap_or_default().as_bytes()) {
            let slot = match key.as_ref() {
                "category" => &mut params.category,
                "q" => &mut params.q,
                "expanded" => &mut params.expanded,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        params
    }
}

/// Dashboard view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Selected category, or `All`.
    pub category: String,
    pub search: String,
    pub expand: ExpandState,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            category: DEFAULT_CATEGORY.to_string(),
            search: String::new(),
            expand: ExpandState::collapsed(),
        }
    }
}

impl From<ViewParams> for ViewState {
    fn from(params: ViewParams) -> Self {
        Self {
            category: params
                .category
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            search: params.q.unwrap_or_default(),
            expand: ExpandState::from_param(params.expanded.as_deref()),
        }
    }
}

impl ViewState {
    /// Dashboard URL for this category and search with the given expand state.
    #[must_use]
    pub fn url_with(&self, expand: &ExpandState) -> String {
        let mut url = format!("/?category={}", encode(&self.category));
        if !self.search.is_empty() {
            url.push_str("&q=");
            url.push_str(&encode(&self.search));
        }
        if let Some(id) = expand.expanded_id() {
            url.push_str("&expanded=");
            url.push_str(&encode(id));
        }
        url
    }

    /// Link that toggles the comments panel of post `id`.
    #[must_use]
    pub fn toggle_url(&self, id: &str) -> String {
        format!("{}#post-{}", self.url_with(&self.expand.toggled(id)), encode(id))
    }

    /// The posts visible under this view.
    #[must_use]
    pub fn visible<'a>(&self, posts: &'a [Post]) -> Vec<&'a Post> {
        filter_posts(posts, &self.category, &self.search)
    }
}

/// Render the dashboard page.
#[must_use]
pub fn render_dashboard(posts: &[Post], view: &ViewState) -> Markup {
    let visible = view.visible(posts);

    let content = html! {
        h1 class="page-title" { (HEADING) }
        (render_filter_bar(posts, view))
        @if visible.is_empty() {
            (EmptyState::no_results())
        } @else {
            div class="post-list" {
                @for post in &visible {
                    @let toggle_url = view.toggle_url(&post.id);
                    (PostCard::new(post, &toggle_url).expanded(view.expand.is_expanded(&post.id)))
                }
            }
        }
    };

    BaseLayout::new("Posts").render(content)
}

fn render_filter_bar(posts: &[Post], view: &ViewState) -> Markup {
    let category_select = Select::new("category")
        .id("category")
        .class("category-select")
        .option(ALL_CATEGORIES, "All Pages")
        .options(categories(posts).into_iter().map(|c| SelectOption::new(c, c)))
        .selected(&view.category)
        .auto_submit();

    let search_input = Input::search("q")
        .id("search")
        .class("search-input")
        .value(&view.search)
        .placeholder("\u{1F50D} Search post...");

    let fields = html! {
        (category_select)
        (search_input)
        @if let Some(id) = view.expand.expanded_id() {
            (Input::hidden("expanded", id))
        }
        button type="submit" { "Filter" }
    };

    html! {
        (Form::get("/", fields).class("filter-bar").id("filters"))
    }
}
