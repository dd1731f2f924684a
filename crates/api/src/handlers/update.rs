//! Handlers for the `/updates` resource and task-scoped update listing.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use kanbee_core::error::CoreError;
use kanbee_core::types::DbId;
use kanbee_db::models::update::{CreateUpdate, UpdateUpdate};
use kanbee_db::repositories::UpdateRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::cancellation::CallContext;
use crate::response::{ListUpdatesResponse, UpdateResponse};
use crate::state::AppState;

/// POST /api/v1/updates
pub async fn create(
    ctx: CallContext,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateUpdate>,
) -> AppResult<(StatusCode, Json<UpdateResponse>)> {
    ctx.ensure_active()?;
    let update = UpdateRepo::create(&state.pool, &input).await?;
    tracing::info!(
        update_id = update.id,
        task_id = update.task_id,
        attachment_bytes = update.attachment_data.as_ref().map_or(0, Vec::len),
        "Update created"
    );
    Ok((StatusCode::CREATED, Json(update.into())))
}

/// GET /api/v1/tasks/{id}/updates
pub async fn list_by_task(
    ctx: CallContext,
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
) -> AppResult<Json<ListUpdatesResponse>> {
    ctx.ensure_active()?;
    let updates = UpdateRepo::list_by_task(&state.pool, task_id).await?;
    Ok(Json(updates.into()))
}

/// PUT /api/v1/updates/{id}
pub async fn update(
    ctx: CallContext,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateUpdate>,
) -> AppResult<Json<UpdateResponse>> {
    ctx.ensure_active()?;
    let update = UpdateRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Update",
            id,
        }))?;
    tracing::info!(update_id = id, task_id = update.task_id, "Update edited");
    Ok(Json(update.into()))
}

/// DELETE /api/v1/updates/{id}
pub async fn delete(
    ctx: CallContext,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    ctx.ensure_active()?;
    let deleted = UpdateRepo::delete(&state.pool, id).await?;
    tracing::debug!(update_id = id, deleted, "Update delete handled");
    Ok(StatusCode::NO_CONTENT)
}
