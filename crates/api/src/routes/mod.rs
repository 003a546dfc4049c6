pub mod auth;
pub mod fields;
pub mod health;
pub mod incidents;
pub mod internal;
pub mod irrigation;
pub mod tasks;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/login                   login (public)
/// /auth/register                register (admin)
/// /auth/me                      current user
///
/// /users                        list (admin)
/// /users/{id}                   update, deactivate (admin)
///
/// /fields                       list, create
/// /fields/{id}                  get, update, delete
///
/// /irrigation-logs              list, create (classifier trigger)
///
/// /incidents                    list, create
/// /incidents/{id}/status        update status
///
/// /tasks                        list, create
/// /tasks/{id}/status            update status
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .nest("/fields", fields::router())
        .nest("/irrigation-logs", irrigation::router())
        .nest("/incidents", incidents::router())
        .nest("/tasks", tasks::router())
}
