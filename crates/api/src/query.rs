//! Query parameter types for API handlers.

use kanbee_db::models::task::TaskState;
use serde::Deserialize;

/// Query parameters for listing a project's tasks (`?state=`).
///
/// An absent `state` means "no filter"; it is never conflated with a state value.
#[derive(Debug, Default, Deserialize)]
pub struct ListTasksParams {
    pub state: Option<TaskState>,
}
