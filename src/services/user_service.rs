//! User service - In-memory user collection management.

use async_trait::async_trait;
use mockall::automock;
use tokio::sync::Mutex;

use crate::config::INITIAL_ENTITY_ID;
use crate::domain::User;
use crate::errors::{AppError, AppResult, OptionExt};

/// User service trait for dependency injection.
#[automock]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new user and return its assigned id.
    ///
    /// Fails with a validation error if `name` or `email` is empty, and
    /// with a conflict error if the email belongs to a current user.
    async fn register(&self, name: String, email: String) -> AppResult<i64>;

    /// All current users in insertion order
    async fn list(&self) -> Vec<User>;

    /// Look up a user by id
    async fn find_by_id(&self, id: i64) -> AppResult<User>;

    /// Remove a user by id; returns whether a user was removed
    async fn delete(&self, id: i64) -> bool;
}

struct UserStoreState {
    users: Vec<User>,
    next_id: i64,
}

/// In-memory implementation of [`UserService`].
///
/// Ids are assigned sequentially starting at 1 and are never reused,
/// even after deletion. A mutex guards the collection and the id
/// counter so concurrent handlers cannot interleave mutations.
pub struct UserStore {
    state: Mutex<UserStoreState>,
}

impl UserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            state: Mutex::new(UserStoreState {
                users: Vec::new(),
                next_id: INITIAL_ENTITY_ID,
            }),
        }
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserService for UserStore {
    async fn register(&self, name: String, email: String) -> AppResult<i64> {
        if name.is_empty() || email.is_empty() {
            return Err(AppError::validation("name and email are required"));
        }

        let mut state = self.state.lock().await;

        // Exact, case-sensitive match against current users only;
        // deleting a user frees its email for reuse.
        if state.users.iter().any(|u| u.email == email) {
            return Err(AppError::conflict("email"));
        }

        let id = state.next_id;
        state.users.push(User { id, name, email });
        state.next_id += 1;

        tracing::debug!(user_id = id, "user registered");
        Ok(id)
    }

    async fn list(&self) -> Vec<User> {
        self.state.lock().await.users.clone()
    }

    async fn find_by_id(&self, id: i64) -> AppResult<User> {
        self.state
            .lock()
            .await
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_not_found()
    }

    async fn delete(&self, id: i64) -> bool {
        let mut state = self.state.lock().await;
        match state.users.iter().position(|u| u.id == id) {
            Some(index) => {
                state.users.remove(index);
                true
            }
            None => false,
        }
    }
}
