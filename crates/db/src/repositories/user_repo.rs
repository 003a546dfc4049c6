//! Repository for the `users` table.

use sqlx::PgPool;

use agriops_core::types::DbId;

use crate::models::user::{CreateUser, UpdateUser, User, UserPublic};

/// Column list for full `users` queries.
const COLUMNS: &str =
    "id, email, full_name, password_hash, role, is_active, created_at, updated_at";

/// Column list for the public projection (no password hash).
const PUBLIC_COLUMNS: &str = "id, email, full_name, role, is_active, created_at, updated_at";

pub struct UserRepo;

impl UserRepo {
    /// Create a user, returning the stored row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, full_name, password_hash, role) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .bind(&input.full_name)
            .bind(&input.password_hash)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }

    /// Look up a user by email (login path).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all users, newest first, without password hashes.
    pub async fn list(pool: &PgPool) -> Result<Vec<UserPublic>, sqlx::Error> {
        let query = format!("SELECT {PUBLIC_COLUMNS} FROM users ORDER BY created_at DESC");
        sqlx::query_as::<_, UserPublic>(&query).fetch_all(pool).await
    }

    /// Apply a partial update, returning the updated public projection when
    /// the user exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUser,
    ) -> Result<Option<UserPublic>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET \
                 full_name = COALESCE($2, full_name), \
                 role = COALESCE($3, role), \
                 is_active = COALESCE($4, is_active), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {PUBLIC_COLUMNS}"
        );
        sqlx::query_as::<_, UserPublic>(&query)
            .bind(id)
            .bind(&input.full_name)
            .bind(&input.role)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Soft-deactivate a user. Returns `true` when a row was updated.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE users SET is_active = false, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
