pub mod health;
pub mod project;
pub mod task;
pub mod update;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy (one route per kanban call):
///
/// ```text
/// /projects                        ListProjects (GET), CreateProject (POST)
/// /projects/{id}                   GetProjectById, UpdateProject (PUT), DeleteProject
/// /projects/{id}/tasks             ListTasks (GET, optional ?state=)
///
/// /tasks                           CreateTask (POST)
/// /tasks/{id}                      GetTaskById, UpdateTask (PUT), DeleteTask
/// /tasks/{id}/state                UpdateTaskState (PATCH)
/// /tasks/{id}/updates              ListUpdates (GET)
///
/// /updates                         CreateUpdate (POST)
/// /updates/{id}                    UpdateUpdate (PUT), DeleteUpdate
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/tasks", task::router())
        .nest("/updates", update::router())
}
