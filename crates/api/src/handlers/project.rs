//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use kanbee_core::error::CoreError;
use kanbee_core::types::DbId;
use kanbee_core::validation::validate_project_name;
use kanbee_db::models::project::{CreateProject, UpdateProject};
use kanbee_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::cancellation::CallContext;
use crate::response::{ListProjectsResponse, ProjectResponse};
use crate::state::AppState;

/// POST /api/v1/projects
pub async fn create(
    ctx: CallContext,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateProject>,
) -> AppResult<(StatusCode, Json<ProjectResponse>)> {
    ctx.ensure_active()?;
    validate_project_name(&input.name)?;

    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = project.id, "Project created");
    Ok((StatusCode::CREATED, Json(project.into())))
}

/// GET /api/v1/projects
pub async fn list(
    ctx: CallContext,
    State(state): State<AppState>,
) -> AppResult<Json<ListProjectsResponse>> {
    ctx.ensure_active()?;
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects.into()))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    ctx: CallContext,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectResponse>> {
    ctx.ensure_active()?;
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project.into()))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    ctx: CallContext,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateProject>,
) -> AppResult<Json<ProjectResponse>> {
    ctx.ensure_active()?;
    validate_project_name(&input.name)?;

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    tracing::info!(project_id = id, "Project updated");
    Ok(Json(project.into()))
}

/// DELETE /api/v1/projects/{id}
///
/// Removes the project's tasks and updates too. Deleting an unknown id is a no-op.
pub async fn delete(
    ctx: CallContext,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    ctx.ensure_active()?;
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    tracing::info!(project_id = id, deleted, "Project delete handled");
    Ok(StatusCode::NO_CONTENT)
}
