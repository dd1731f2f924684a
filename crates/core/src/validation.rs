//! Required-field checks applied by the request handlers before any
//! storage access.

use crate::error::CoreError;

/* --------------------------------------------------------------------------
   Validation limits
   -------------------------------------------------------------------------- */

/// Maximum length for a project name.
pub const MAX_PROJECT_NAME_LEN: usize = 255;

/// Maximum length for a task title.
pub const MAX_TASK_TITLE_LEN: usize = 255;

/* --------------------------------------------------------------------------
   Validation functions
   -------------------------------------------------------------------------- */

/// Validate a project name: non-empty and within length limit.
pub fn validate_project_name(name: &str) -> Result<(), CoreError> {
    validate_required("Project name", name, MAX_PROJECT_NAME_LEN)
}

/// Validate a task title: non-empty and within length limit.
pub fn validate_task_title(title: &str) -> Result<(), CoreError> {
    validate_required("Task title", title, MAX_TASK_TITLE_LEN)
}

/// Mirrors the store's `length(...) > 0` CHECK, so whitespace counts as content.
fn validate_required(field: &str, value: &str, max_len: usize) -> Result<(), CoreError> {
    if value.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(CoreError::Validation(format!(
            "{field} too long: {len} chars (max {max_len})"
        )));
    }
    Ok(())
}
