use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, error, info};

use super::{Post, RawPost};
use crate::config::Config;
use crate::constants::USER_AGENT;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("failed to decode posts from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Somewhere the post collection can be read from.
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Fetch the complete collection.
    async fn fetch_posts(&self) -> Result<Vec<RawPost>, FetchError>;
}

/// Reads the collection from the remote analysis API.
#[derive(Debug, Clone)]
pub struct HttpPostSource {
    client: reqwest::Client,
    url: String,
}

impl HttpPostSource {
    /// Create a source for `url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Create a source from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        Self::new(config.posts_url.clone(), config.fetch_timeout)
    }
}

#[async_trait]
impl PostSource for HttpPostSource {
    async fn fetch_posts(&self) -> Result<Vec<RawPost>, FetchError> {
        debug!(url = %self.url, "Fetching posts");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status,
            });
        }

        response
            .json::<Vec<RawPost>>()
            .await
            .map_err(|source| FetchError::Decode {
                url: self.url.clone(),
                source,
            })
    }
}

/// Fetch and normalize the post collection.
///
/// Failures are logged and yield an empty collection; there is no retry.
pub async fn load_posts(source: &dyn PostSource) -> Vec<Post> {
    match source.fetch_posts().await {
        Ok(raw) => {
            let posts: Vec<Post> = raw.into_iter().map(Post::from).collect();
            info!(count = posts.len(), "Loaded posts");
            posts
        }
        Err(e) => {
            error!("Error loading data: {e}");
            Vec::new()
        }
    }
}
