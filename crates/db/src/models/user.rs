//! User entity models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use agriops_core::types::{DbId, Timestamp};

/// A row from the `users` table, including the password hash.
///
/// Never serialized to API responses; use [`UserPublic`] for that.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub full_name: String,
    pub password_hash: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// User projection safe to return to API consumers.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserPublic {
    pub id: DbId,
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a user (register endpoint, admin only).
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub email: String,
    pub full_name: String,
    pub password_hash: String,
    pub role: String,
}

/// DTO for updating a user.
#[derive(Debug, Deserialize)]
pub struct UpdateUser {
    pub full_name: Option<String>,
    pub role: Option<String>,
    pub is_active: Option<bool>,
}
