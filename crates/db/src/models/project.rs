//! Project entity model and DTOs.

use kanbee_core::types::DbId;
use serde::Deserialize;
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: String,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// DTO for updating an existing project. Both fields are overwritten.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub name: String,
    #[serde(default)]
    pub description: String,
}
