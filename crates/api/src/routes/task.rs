//! Route definitions for the `/tasks` resource.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::{task, update};
use crate::state::AppState;

/// Routes mounted at `/tasks`.
///
/// ```text
/// POST   /                        -> create
/// GET    /{id}                    -> get_by_id
/// PUT    /{id}                    -> update
/// DELETE /{id}                    -> delete
/// PATCH  /{id}/state              -> update_state
/// GET    /{id}/updates            -> update::list_by_task
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(task::create))
        .route(
            "/{id}",
            get(task::get_by_id).put(task::update).delete(task::delete),
        )
        .route("/{id}/state", patch(task::update_state))
        .route("/{id}/updates", get(update::list_by_task))
}
