//! Response messages returned by the kanban calls.
//!
//! Every call answers with a named envelope (`{"project": ...}`,
//! `{"tasks": [...]}`, ...). Field names are camelCase and timestamps are
//! rendered with [`kanbee_core::timestamp::DISPLAY_FORMAT`].

use kanbee_core::timestamp::{format_display, format_display_opt};
use kanbee_core::types::DbId;
use kanbee_db::models::project::Project;
use kanbee_db::models::task::{Task, TaskState};
use kanbee_db::models::update::Update;
use serde::Serialize;

/* --------------------------------------------------------------------------
   Entity messages
   -------------------------------------------------------------------------- */

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMessage {
    pub id: DbId,
    pub name: String,
    pub description: String,
}

impl From<Project> for ProjectMessage {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            name: project.name,
            description: project.description,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskMessage {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub description: String,
    pub state: TaskState,
    pub deadline: Option<String>,
    pub created_at: String,
}

impl From<Task> for TaskMessage {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            project_id: task.project_id,
            title: task.title,
            description: task.description,
            state: task.state,
            deadline: format_display_opt(task.deadline.as_ref()),
            created_at: format_display(&task.created_at),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMessage {
    pub id: DbId,
    pub task_id: DbId,
    pub message: String,
    #[serde(with = "kanbee_core::encoding::base64_opt")]
    pub attachment_data: Option<Vec<u8>>,
    pub filename: Option<String>,
    pub created_at: String,
}

impl From<Update> for UpdateMessage {
    fn from(update: Update) -> Self {
        Self {
            id: update.id,
            task_id: update.task_id,
            message: update.message,
            attachment_data: update.attachment_data,
            filename: update.filename,
            created_at: format_display(&update.created_at),
        }
    }
}

/* --------------------------------------------------------------------------
   Envelopes
   -------------------------------------------------------------------------- */

#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub project: ProjectMessage,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        Self {
            project: project.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListProjectsResponse {
    pub projects: Vec<ProjectMessage>,
}

impl From<Vec<Project>> for ListProjectsResponse {
    fn from(projects: Vec<Project>) -> Self {
        Self {
            projects: projects.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub task: TaskMessage,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self { task: task.into() }
    }
}

#[derive(Debug, Serialize)]
pub struct ListTasksResponse {
    pub tasks: Vec<TaskMessage>,
}

impl From<Vec<Task>> for ListTasksResponse {
    fn from(tasks: Vec<Task>) -> Self {
        Self {
            tasks: tasks.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub update: UpdateMessage,
}

impl From<Update> for UpdateResponse {
    fn from(update: Update) -> Self {
        Self {
            update: update.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListUpdatesResponse {
    pub updates: Vec<UpdateMessage>,
}

impl From<Vec<Update>> for ListUpdatesResponse {
    fn from(updates: Vec<Update>) -> Self {
        Self {
            updates: updates.into_iter().map(Into::into).collect(),
        }
    }
}
