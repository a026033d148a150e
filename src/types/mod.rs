//! Shared types - Response helpers.

pub mod response;

pub use response::{Created, IdResponse, NoContent};
