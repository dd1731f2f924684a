//! Domain primitives shared by the data-access layer and the API server.

pub mod encoding;
pub mod error;
pub mod timestamp;
pub mod types;
pub mod validation;
