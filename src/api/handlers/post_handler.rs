//! Post handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{CreatePost, Post};
use crate::errors::{AppError, AppResult};
use crate::types::{Created, IdResponse, NoContent};

/// Create post routes
pub fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_posts).post(create_post))
        .route("/:id", get(get_post).delete(delete_post))
}

/// Create a new post
#[utoipa::path(
    post,
    path = "/posts",
    tag = "Posts",
    request_body = CreatePost,
    responses(
        (status = 201, description = "Post created", body = IdResponse),
        (status = 400, description = "Missing title or content")
    )
)]
pub async fn create_post(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreatePost>,
) -> AppResult<Created<IdResponse>> {
    let id = state
        .post_service
        .create(payload.title, payload.content, payload.user_id)
        .await?;

    Ok(Created(IdResponse { id }))
}

/// List all posts
#[utoipa::path(
    get,
    path = "/posts",
    tag = "Posts",
    responses(
        (status = 200, description = "List of all posts", body = Vec<Post>)
    )
)]
pub async fn list_posts(State(state): State<AppState>) -> Json<Vec<Post>> {
    Json(state.post_service.list().await)
}

/// Get post by ID
#[utoipa::path(
    get,
    path = "/posts/{id}",
    tag = "Posts",
    params(
        ("id" = i64, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Post", body = Post),
        (status = 400, description = "Invalid post ID"),
        (status = 404, description = "Post not found")
    )
)]
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Post>> {
    let post = state.post_service.find_by_id(id).await?;
    Ok(Json(post))
}

/// Delete post by ID
#[utoipa::path(
    delete,
    path = "/posts/{id}",
    tag = "Posts",
    params(
        ("id" = i64, Path, description = "Post ID")
    ),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 400, description = "Invalid post ID"),
        (status = 404, description = "Post not found")
    )
)]
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<NoContent> {
    if !state.post_service.delete(id).await {
        return Err(AppError::NotFound);
    }
    Ok(NoContent)
}
