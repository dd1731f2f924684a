use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// The call was cancelled before it reached the store.
    #[error("Call cancelled before it was handled")]
    Cancelled,

    #[error("Internal error: {0}")]
    Internal(String),
}
