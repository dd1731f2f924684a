//! Handlers for the `/tasks` resource and project-scoped task listing.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use kanbee_core::error::CoreError;
use kanbee_core::types::DbId;
use kanbee_core::validation::validate_task_title;
use kanbee_db::models::task::{CreateTask, UpdateTask, UpdateTaskState};
use kanbee_db::repositories::TaskRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::cancellation::CallContext;
use crate::query::ListTasksParams;
use crate::response::{ListTasksResponse, TaskResponse};
use crate::state::AppState;

fn task_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Task", id })
}

/// POST /api/v1/tasks
pub async fn create(
    ctx: CallContext,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateTask>,
) -> AppResult<(StatusCode, Json<TaskResponse>)> {
    ctx.ensure_active()?;
    validate_task_title(&input.title)?;

    let task = TaskRepo::create(&state.pool, &input).await?;
    tracing::info!(
        task_id = task.id,
        project_id = task.project_id,
        state = %task.state,
        "Task created"
    );
    Ok((StatusCode::CREATED, Json(task.into())))
}

/// GET /api/v1/projects/{id}/tasks[?state=]
pub async fn list_by_project(
    ctx: CallContext,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    params: Result<Query<ListTasksParams>, QueryRejection>,
) -> AppResult<Json<ListTasksResponse>> {
    ctx.ensure_active()?;
    let Query(params) = params.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let tasks = TaskRepo::list_by_project(&state.pool, project_id, params.state).await?;
    Ok(Json(tasks.into()))
}

/// GET /api/v1/tasks/{id}
pub async fn get_by_id(
    ctx: CallContext,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<TaskResponse>> {
    ctx.ensure_active()?;
    let task = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| task_not_found(id))?;
    Ok(Json(task.into()))
}

/// PUT /api/v1/tasks/{id}
pub async fn update(
    ctx: CallContext,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateTask>,
) -> AppResult<Json<TaskResponse>> {
    ctx.ensure_active()?;
    validate_task_title(&input.title)?;

    let task = TaskRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| task_not_found(id))?;
    tracing::info!(task_id = id, project_id = task.project_id, "Task updated");
    Ok(Json(task.into()))
}

/// PATCH /api/v1/tasks/{id}/state
pub async fn update_state(
    ctx: CallContext,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateTaskState>,
) -> AppResult<Json<TaskResponse>> {
    ctx.ensure_active()?;
    let task = TaskRepo::update_state(&state.pool, id, input.state)
        .await?
        .ok_or_else(|| task_not_found(id))?;
    tracing::info!(task_id = id, state = %task.state, "Task state changed");
    Ok(Json(task.into()))
}

/// DELETE /api/v1/tasks/{id}
///
/// Removes the task's updates too. Deleting an unknown id is a no-op.
pub async fn delete(
    ctx: CallContext,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    ctx.ensure_active()?;
    let deleted = TaskRepo::delete(&state.pool, id).await?;
    tracing::info!(task_id = id, deleted, "Task delete handled");
    Ok(StatusCode::NO_CONTENT)
}
