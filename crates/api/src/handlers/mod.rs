//! Request handlers, one per kanban call.
//!
//! Every handler checks its [`CallContext`](crate::middleware::cancellation::CallContext)
//! first, validates required fields, then makes exactly one repository call.

pub mod project;
pub mod task;
pub mod update;
