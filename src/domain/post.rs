//! Post domain entity and request types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Post domain entity.
///
/// `user_id` is a logical reference to a [`super::User`]; it is not
/// enforced against the user collection, so a post may outlive (or
/// predate) the user it points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Post {
    /// Unique post identifier
    #[schema(example = 1)]
    pub id: i64,
    /// Post title
    #[schema(example = "Hello world")]
    pub title: String,
    /// Post body text
    #[schema(example = "My first post.")]
    pub content: String,
    /// Id of the authoring user
    #[schema(example = 1)]
    pub user_id: i64,
}

/// Post creation request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreatePost {
    /// Post title
    #[validate(length(min = 1, message = "title is required"))]
    #[schema(example = "Hello world")]
    pub title: String,
    /// Post body text
    #[validate(length(min = 1, message = "content is required"))]
    #[schema(example = "My first post.")]
    pub content: String,
    /// Id of the authoring user (accepted without an existence check)
    #[schema(example = 1)]
    pub user_id: i64,
}
