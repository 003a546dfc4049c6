//! Route definitions for fields.

use axum::routing::get;
use axum::Router;

use crate::handlers::fields;
use crate::state::AppState;

/// ```text
/// GET    /        -> list_fields (any auth)
/// POST   /        -> create_field (admin)
/// GET    /{id}    -> get_field (any auth)
/// PATCH  /{id}    -> update_field (admin)
/// DELETE /{id}    -> delete_field (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(fields::list_fields).post(fields::create_field))
        .route(
            "/{id}",
            get(fields::get_field)
                .patch(fields::update_field)
                .delete(fields::delete_field),
        )
}
