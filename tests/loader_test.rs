//! Integration tests for fetching the post collection.

use std::time::Duration;

use emotion_lens::constants::{DEFAULT_CATEGORY, USER_AGENT};
use emotion_lens::posts::{load_posts, FetchError, HttpPostSource, PostSource, PostStore};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SAMPLE_POSTS: &str = r#"[
    {
        "Post_ID": "100_1",
        "Post_Content": "Boun Pi Mai celebrations",
        "Created_Time": "2024-04-14T08:00:00+0000",
        "Page_Name": "Lao News",
        "Reaction_Count": 250,
        "Comment_Count": 2,
        "Share_Count": 14,
        "Positive": 80,
        "Neutral": 15,
        "Negative": 5,
        "Details": "comment: Happy new year!\nsentiment: positive\n\ncomment: Too crowded\nsentiment: negative"
    },
    {
        "Post_ID": 200,
        "Post_Content": "Community clean-up this weekend",
        "Page_Name": null,
        "Positive": "40",
        "Neutral": "40",
        "Negative": "20",
        "Details": null
    }
]"#;

fn source_for(server: &MockServer) -> HttpPostSource {
    HttpPostSource::new(format!("{}/posts", server.uri()), Duration::from_secs(5))
        .expect("Failed to build post source")
}

#[tokio::test]
async fn test_fetch_decodes_loose_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .and(header("user-agent", USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_raw(SAMPLE_POSTS, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let raw = source_for(&server).fetch_posts().await.unwrap();

    assert_eq!(raw.len(), 2);
    assert_eq!(raw[0].post_id, "100_1");
    assert_eq!(raw[1].post_id, "200");
    assert_eq!(raw[1].page_name, "");
    assert_eq!(raw[1].details, "");
    assert!((raw[1].negative - 20.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_load_defaults_missing_category() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(SAMPLE_POSTS, "application/json"))
        .mount(&server)
        .await;

    let posts = load_posts(&source_for(&server)).await;

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].category, "Lao News");
    assert_eq!(posts[1].category, DEFAULT_CATEGORY);
}

#[tokio::test]
async fn test_server_error_is_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = source_for(&server).fetch_posts().await.unwrap_err();
    assert!(matches!(err, FetchError::Status { status, .. } if status.as_u16() == 500));
}

#[tokio::test]
async fn test_server_error_yields_empty_collection_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    assert!(load_posts(&source_for(&server)).await.is_empty());
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = source_for(&server).fetch_posts().await.unwrap_err();
    assert!(matches!(err, FetchError::Decode { .. }));
}

#[tokio::test]
async fn test_unreachable_endpoint_leaves_store_empty() {
    // Port 9 (discard) is not expected to accept HTTP connections
    let source = HttpPostSource::new("http://127.0.0.1:9/posts", Duration::from_secs(2)).unwrap();
    let store = PostStore::new();

    store.spawn_load(source).await.unwrap();

    assert!(store.snapshot().is_empty());
}
