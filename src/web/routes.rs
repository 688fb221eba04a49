use axum::extract::{RawQuery, State};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Json;
use axum::Router;
use serde::Serialize;

use super::pages::{render_dashboard, ViewParams, ViewState};
use super::AppState;
use crate::posts::{categories, parse_comments, CommentEntry, Post};

/// Create the router with all application routes.
///
/// Paths not listed here fall through to the static bundle, see
/// [`super::create_app`].
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard))
        .route("/api/posts", get(api_posts))
        .route("/healthz", get(health))
}

// ========== HTML Routes ==========

pub(super) async fn dashboard(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Response {
    let posts = state.posts.snapshot();
    let view = ViewState::from(ViewParams::from_query(query.as_deref()));

    let html = render_dashboard(&posts, &view);
    Html(html.into_string()).into_response()
}

async fn health() -> &'static str {
    "OK"
}

// ========== API Routes ==========

#[derive(Debug, Serialize)]
struct ApiPost<'a> {
    #[serde(flatten)]
    post: &'a Post,
    parsed_comments: Vec<CommentEntry>,
}

#[derive(Debug, Serialize)]
struct ApiPostsResponse<'a> {
    category: &'a str,
    search: &'a str,
    categories: Vec<&'a str>,
    posts: Vec<ApiPost<'a>>,
}

/// Filtered posts as JSON. Accepts the same parameters as the dashboard.
async fn api_posts(State(state): State<AppState>, RawQuery(query): RawQuery) -> Response {
    let posts = state.posts.snapshot();
    let view = ViewState::from(ViewParams::from_query(query.as_deref()));

    let body = ApiPostsResponse {
        category: &view.category,
        search: &view.search,
        categories: categories(&posts),
        posts: view
            .visible(&posts)
            .into_iter()
            .map(|post| ApiPost {
                post,
                parsed_comments: parse_comments(&post.details),
            })
            .collect(),
    };

    Json(body).into_response()
}
