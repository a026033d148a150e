//! Post service - In-memory post collection management.

use async_trait::async_trait;
use mockall::automock;
use tokio::sync::Mutex;

use crate::config::INITIAL_ENTITY_ID;
use crate::domain::Post;
use crate::errors::{AppError, AppResult, OptionExt};

/// Post service trait for dependency injection.
#[automock]
#[async_trait]
pub trait PostService: Send + Sync {
    /// Create a new post and return its assigned id.
    ///
    /// Fails with a validation error if `title` or `content` is empty.
    /// `user_id` is accepted without an existence check; a post may
    /// reference a user that was never registered.
    async fn create(&self, title: String, content: String, user_id: i64) -> AppResult<i64>;

    /// All current posts in insertion order
    async fn list(&self) -> Vec<Post>;

    /// Look up a post by id
    async fn find_by_id(&self, id: i64) -> AppResult<Post>;

    /// All posts with the given `user_id`, in insertion order.
    /// Empty when none match, including for unknown users.
    async fn find_by_user_id(&self, user_id: i64) -> Vec<Post>;

    /// Remove a post by id; returns whether a post was removed
    async fn delete(&self, id: i64) -> bool;
}

struct PostStoreState {
    posts: Vec<Post>,
    next_id: i64,
}

/// In-memory implementation of [`PostService`].
///
/// Same allocation rules as the user store: sequential ids from 1,
/// never reused, mutex-guarded state.
pub struct PostStore {
    state: Mutex<PostStoreState>,
}

impl PostStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            state: Mutex::new(PostStoreState {
                posts: Vec::new(),
                next_id: INITIAL_ENTITY_ID,
            }),
        }
    }
}

impl Default for PostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostService for PostStore {
    async fn create(&self, title: String, content: String, user_id: i64) -> AppResult<i64> {
        if title.is_empty() || content.is_empty() {
            return Err(AppError::validation("title and content are required"));
        }

        let mut state = self.state.lock().await;

        let id = state.next_id;
        state.posts.push(Post {
            id,
            title,
            content,
            user_id,
        });
        state.next_id += 1;

        tracing::debug!(post_id = id, user_id, "post created");
        Ok(id)
    }

    async fn list(&self) -> Vec<Post> {
        self.state.lock().await.posts.clone()
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Post> {
        self.state
            .lock()
            .await
            .posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_not_found()
    }

    async fn find_by_user_id(&self, user_id: i64) -> Vec<Post> {
        self.state
            .lock()
            .await
            .posts
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect()
    }

    async fn delete(&self, id: i64) -> bool {
        let mut state = self.state.lock().await;
        match state.posts.iter().position(|p| p.id == id) {
            Some(index) => {
                state.posts.remove(index);
                true
            }
            None => false,
        }
    }
}
