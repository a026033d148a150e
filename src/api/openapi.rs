//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{post_handler, user_handler};
use crate::domain::{CreatePost, Post, RegisterUser, User};
use crate::types::IdResponse;

/// OpenAPI documentation for the User Posts API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Posts API",
        version = "0.1.0",
        description = "A RESTful API for managing users and their posts",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        // User endpoints
        user_handler::register_user,
        user_handler::list_users,
        user_handler::get_user,
        user_handler::delete_user,
        user_handler::list_user_posts,
        // Post endpoints
        post_handler::create_post,
        post_handler::list_posts,
        post_handler::get_post,
        post_handler::delete_post,
    ),
    components(
        schemas(User, RegisterUser, Post, CreatePost, IdResponse)
    ),
    tags(
        (name = "Users", description = "User management operations"),
        (name = "Posts", description = "Post management operations")
    )
)]
pub struct ApiDoc;
