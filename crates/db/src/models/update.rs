//! Update entity model and DTOs.
//!
//! An update is a timestamped note on a task, optionally carrying a named
//! binary attachment.

use kanbee_core::types::{DbId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;

/// An update row from the `updates` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Update {
    pub id: DbId,
    pub task_id: DbId,
    pub message: String,
    pub filename: Option<String>,
    pub attachment_data: Option<Vec<u8>>,
    pub created_at: Timestamp,
}

/// DTO for appending an update to a task. `attachmentData` is base64 on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUpdate {
    pub task_id: DbId,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default, with = "kanbee_core::encoding::base64_opt")]
    pub attachment_data: Option<Vec<u8>>,
}

/// DTO for replacing an update's message, attachment and task reference.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUpdate {
    pub task_id: DbId,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default, with = "kanbee_core::encoding::base64_opt")]
    pub attachment_data: Option<Vec<u8>>,
}
