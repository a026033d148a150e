//! Domain layer - Core business entities.
//!
//! Contains the user and post entities plus their request payloads,
//! independent of transport and storage concerns.

pub mod post;
pub mod user;

pub use post::{CreatePost, Post};
pub use user::{RegisterUser, User};
