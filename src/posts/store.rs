//! Process-wide holder for the post collection.
//!
//! The collection is written once, when the startup fetch completes, and read
//! by every request. Readers take a cheap snapshot so the lock is never held
//! across rendering.

use std::sync::{Arc, RwLock};

use tokio::task::JoinHandle;

use super::loader::{load_posts, PostSource};
use super::Post;

/// Shared, initially empty post collection.
#[derive(Debug, Clone, Default)]
pub struct PostStore {
    posts: Arc<RwLock<Arc<Vec<Post>>>>,
}

impl PostStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `posts`.
    #[must_use]
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: Arc::new(RwLock::new(Arc::new(posts))),
        }
    }

    /// The current collection.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Vec<Post>> {
        match self.posts.read() {
            Ok(guard) => Arc::clone(&*guard),
            Err(poisoned) => Arc::clone(&*poisoned.into_inner()),
        }
    }

    /// Replace the collection.
    pub fn set(&self, posts: Vec<Post>) {
        let posts = Arc::new(posts);
        match self.posts.write() {
            Ok(mut guard) => *guard = posts,
            Err(poisoned) => *poisoned.into_inner() = posts,
        }
    }

    /// Run the single load from `source` and store the result.
    pub async fn load_from(&self, source: &dyn PostSource) {
        let posts = load_posts(source).await;
        self.set(posts);
    }

    /// Start the load in the background. Requests served before it finishes
    /// see an empty collection.
    pub fn spawn_load<S>(&self, source: S) -> JoinHandle<()>
    where
        S: PostSource + 'static,
    {
        let store = self.clone();
        tokio::spawn(async move {
            store.load_from(&source).await;
        })
    }
}
