//! Service layer - Resource stores and their trait contracts.
//!
//! Each store owns the full lifecycle of one entity type. The stores do
//! not reference each other; the user/post relationship is a logical
//! foreign key only.

pub mod post_service;
pub mod user_service;

pub use post_service::{MockPostService, PostService, PostStore};
pub use user_service::{MockUserService, UserService, UserStore};
