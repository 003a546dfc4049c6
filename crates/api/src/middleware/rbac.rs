//! Role-gating extractors layered on [`AuthUser`].
//!
//! Each extractor names an audience rather than a single role, so the
//! handler signature documents who may call it.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use agriops_core::error::CoreError;
use agriops_core::roles::{ROLE_ADMIN, ROLE_SUPERVISOR, ROLE_WORKER};

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

async fn authorize(
    parts: &mut Parts,
    state: &AppState,
    allowed: &[&str],
    requirement: &str,
) -> Result<AuthUser, AppError> {
    let user = AuthUser::from_request_parts(parts, state).await?;
    if allowed.contains(&user.role.as_str()) {
        Ok(user)
    } else {
        Err(AppError::Core(CoreError::Forbidden(format!(
            "{requirement} role required"
        ))))
    }
}

/// Admin only: user and field management, registration.
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authorize(parts, state, &[ROLE_ADMIN], "Admin")
            .await
            .map(RequireAdmin)
    }
}

/// Supervisor or admin: task and incident status updates, manual tasks.
pub struct RequireSupervisor(pub AuthUser);

impl FromRequestParts<AppState> for RequireSupervisor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authorize(
            parts,
            state,
            &[ROLE_SUPERVISOR, ROLE_ADMIN],
            "Supervisor or Admin",
        )
        .await
        .map(RequireSupervisor)
    }
}

/// Worker or supervisor: readings and incident reports come from staff in
/// the field. Admins are deliberately not on this list.
pub struct RequireFieldStaff(pub AuthUser);

impl FromRequestParts<AppState> for RequireFieldStaff {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authorize(
            parts,
            state,
            &[ROLE_WORKER, ROLE_SUPERVISOR],
            "Worker or Supervisor",
        )
        .await
        .map(RequireFieldStaff)
    }
}
