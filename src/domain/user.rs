//! User domain entity and request types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// User domain entity.
///
/// The id is assigned by the store and never changes; the record itself
/// is immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique user identifier
    #[schema(example = 1)]
    pub id: i64,
    /// User display name
    #[schema(example = "Alice Smith")]
    pub name: String,
    /// User email address, unique among current users
    #[schema(example = "alice@example.com")]
    pub email: String,
}

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterUser {
    /// User display name
    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "Alice Smith")]
    pub name: String,
    /// User email address
    #[validate(length(min = 1, message = "email is required"))]
    #[schema(example = "alice@example.com")]
    pub email: String,
}
