//! Route definitions for admin user management.

use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// ```text
/// GET    /        -> list_users (admin)
/// PATCH  /{id}    -> update_user (admin)
/// DELETE /{id}    -> deactivate_user (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(users::list_users))
        .route(
            "/{id}",
            axum::routing::patch(users::update_user).delete(users::deactivate_user),
        )
}
