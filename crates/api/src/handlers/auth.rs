//! Handlers for login, registration, and the current-user endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use agriops_core::error::CoreError;
use agriops_core::roles::{validate_role, ROLE_WORKER};
use agriops_db::models::user::{CreateUser, UserPublic};
use agriops_db::repositories::UserRepo;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: SessionUser,
}

/// User info returned alongside the token.
#[derive(Debug, Serialize)]
pub struct SessionUser {
    pub id: agriops_core::types::DbId,
    pub email: String,
    pub full_name: String,
    pub role: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: Option<String>,
}

/// POST /auth/login
///
/// Authenticate and receive a JWT. Unknown emails, wrong passwords, and
/// deactivated accounts all yield the same 401.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_email(&state.pool, &input.email).await?;

    let Some(user) = user.filter(|u| u.is_active) else {
        tracing::warn!(email = %input.email, "Login attempt failed - invalid credentials");
        return Err(AppError::invalid_credentials());
    };

    let valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {e}")))?;
    if !valid {
        tracing::warn!(email = %input.email, "Login attempt failed - invalid password");
        return Err(AppError::invalid_credentials());
    }

    let token = generate_access_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    tracing::info!(user_id = user.id, role = %user.role, "User logged in");

    Ok(Json(DataResponse {
        data: LoginResponse {
            token,
            user: SessionUser {
                id: user.id,
                email: user.email,
                full_name: user.full_name,
                role: user.role,
            },
        },
    }))
}

/// POST /auth/register
///
/// Create a user account (admin only). Role defaults to `WORKER`.
pub async fn register(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<impl IntoResponse> {
    validate_password_strength(&input.password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let role = input.role.unwrap_or_else(|| ROLE_WORKER.to_string());
    validate_role(&role)?;

    if UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Email already registered".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email: input.email,
            full_name: input.full_name,
            password_hash,
            role,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, role = %user.role, "New user registered");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: SessionUser {
                id: user.id,
                email: user.email,
                full_name: user.full_name,
                role: user.role,
            },
        }),
    ))
}

/// GET /auth/me
///
/// Current authenticated user's profile.
pub async fn me(auth: AuthUser, State(state): State<AppState>) -> AppResult<Json<DataResponse<UserPublic>>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        })?;

    Ok(Json(DataResponse {
        data: UserPublic {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            role: user.role,
            is_active: user.is_active,
            created_at: user.created_at,
            updated_at: user.updated_at,
        },
    }))
}
