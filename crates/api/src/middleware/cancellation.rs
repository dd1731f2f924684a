//! Per-call cancellation signal for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use kanbee_core::error::CoreError;
use tokio_util::sync::CancellationToken;

use crate::error::AppError;
use crate::state::AppState;

/// Cancellation signal handed to every handler alongside its request.
///
/// Holds a child of the server's shutdown token, so it flips as soon as the
/// process starts shutting down. Extraction itself fails with
/// [`CoreError::Cancelled`] once shutdown has begun, before any body is read.
/// Handlers check it again on entry:
///
/// ```ignore
/// async fn my_handler(ctx: CallContext, State(state): State<AppState>) -> AppResult<Json<()>> {
///     ctx.ensure_active()?;
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CallContext {
    cancel: CancellationToken,
}

impl CallContext {
    pub fn new(cancel: CancellationToken) -> Self {
        Self { cancel }
    }

    /// Fail with [`CoreError::Cancelled`] if the signal is already set.
    pub fn ensure_active(&self) -> Result<(), CoreError> {
        if self.cancel.is_cancelled() {
            tracing::debug!("Rejecting call: cancellation already signalled");
            return Err(CoreError::Cancelled);
        }
        Ok(())
    }
}

impl FromRequestParts<AppState> for CallContext {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let ctx = CallContext::new(state.shutdown.child_token());
        ctx.ensure_active()?;
        Ok(ctx)
    }
}
