//! Application state - Dependency injection container.
//!
//! Holds the two resource stores behind their trait objects. The state
//! is constructed once at startup and cloned into every handler.

use std::sync::Arc;

use crate::services::{PostService, PostStore, UserService, UserStore};

/// Application state containing both stores (DI container)
#[derive(Clone)]
pub struct AppState {
    /// User store
    pub user_service: Arc<dyn UserService>,
    /// Post store
    pub post_service: Arc<dyn PostService>,
}

impl AppState {
    /// Create application state backed by fresh in-memory stores.
    ///
    /// The collections live for the process lifetime; nothing persists
    /// across restarts.
    pub fn in_memory() -> Self {
        Self {
            user_service: Arc::new(UserStore::new()),
            post_service: Arc::new(PostStore::new()),
        }
    }

    /// Create application state with manually injected services.
    ///
    /// Used by tests to substitute mock services.
    pub fn new(user_service: Arc<dyn UserService>, post_service: Arc<dyn PostService>) -> Self {
        Self {
            user_service,
            post_service,
        }
    }
}
