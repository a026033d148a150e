//! User handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{Post, RegisterUser, User};
use crate::errors::{AppError, AppResult};
use crate::types::{Created, IdResponse, NoContent};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(register_user))
        .route("/:id", get(get_user).delete(delete_user))
        .route("/:id/posts", get(list_user_posts))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = RegisterUser,
    responses(
        (status = 201, description = "User created", body = IdResponse),
        (status = 400, description = "Missing field or duplicate email")
    )
)]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterUser>,
) -> AppResult<Created<IdResponse>> {
    let id = state
        .user_service
        .register(payload.name, payload.email)
        .await?;

    Ok(Created(IdResponse { id }))
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "List of all users", body = Vec<User>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.user_service.list().await)
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User", body = User),
        (status = 400, description = "Invalid user ID"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<User>> {
    let user = state.user_service.find_by_id(id).await?;
    Ok(Json(user))
}

/// Delete user by ID
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Invalid user ID"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<NoContent> {
    if !state.user_service.delete(id).await {
        return Err(AppError::NotFound);
    }
    Ok(NoContent)
}

/// List posts authored by a user.
///
/// The id is not checked against the user collection; an unknown user
/// simply yields an empty list.
#[utoipa::path(
    get,
    path = "/users/{id}/posts",
    tag = "Posts",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Posts authored by the user", body = Vec<Post>),
        (status = 400, description = "Invalid user ID")
    )
)]
pub async fn list_user_posts(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Json<Vec<Post>> {
    Json(state.post_service.find_by_user_id(id).await)
}
