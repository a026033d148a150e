//! User Posts API - A RESTful API for managing users and their posts.
//!
//! Two in-memory resource stores (users and posts) exposed over a JSON
//! HTTP surface built with Axum. State is process-local and does not
//! survive a restart.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and request types
//! - **services**: Resource stores and their trait contracts
//! - **api**: HTTP handlers, routes, and extractors
//! - **types**: Shared response helpers
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Pick a port
//! cargo run -- serve --port 8059
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Post, User};
pub use errors::{AppError, AppResult};
