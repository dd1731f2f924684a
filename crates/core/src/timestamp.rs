//! Human-readable timestamp rendering for API responses.

use crate::types::Timestamp;

/// Fixed display pattern for timestamps in responses, e.g. `31/08/2024 - 12:59:13`.
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y - %H:%M:%S";

/// Render a UTC timestamp with [`DISPLAY_FORMAT`].
pub fn format_display(ts: &Timestamp) -> String {
    ts.format(DISPLAY_FORMAT).to_string()
}

/// Render an optional timestamp, keeping `None` as `None`.
pub fn format_display_opt(ts: Option<&Timestamp>) -> Option<String> {
    ts.map(format_display)
}
