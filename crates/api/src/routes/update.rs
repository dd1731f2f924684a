//! Route definitions for the `/updates` resource.

use axum::routing::{post, put};
use axum::Router;

use crate::handlers::update;
use crate::state::AppState;

/// Routes mounted at `/updates`.
///
/// ```text
/// POST   /                        -> create
/// PUT    /{id}                    -> update
/// DELETE /{id}                    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(update::create))
        .route("/{id}", put(update::update).delete(update::delete))
}
