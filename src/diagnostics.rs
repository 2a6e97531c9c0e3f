//! Diagnostic sink for error events
//!
//! The error dialog reports every error it shows through a [`DiagnosticSink`]
//! rather than writing to the log directly, so tests can assert on what
//! gets emitted.

use crate::error::ErrorInfo;

/// Log filter used when `RUST_LOG` is unset
///
/// Targets are module paths of the `json-explorer` binary crate.
pub const DEFAULT_LOG_FILTER: &str = "json_explorer=info";

/// Headline emitted before each error dump
pub const ERROR_HEADLINE: &str = "Error logging:";

/// Receiver for error diagnostics
#[cfg_attr(test, mockall::automock)]
pub trait DiagnosticSink {
    /// Emit a plain-text line announcing an error event
    fn announce(&self, headline: &str);

    /// Emit a structured dump of the error
    fn dump(&self, error: &ErrorInfo);
}

/// Sink that forwards diagnostics to `tracing`
///
/// The dialog reports on every frame it is drawn, so both lines go out at
/// debug level: `RUST_LOG=json_explorer::diagnostics=debug` shows them.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn announce(&self, headline: &str) {
        tracing::debug!("{headline}");
    }

    fn dump(&self, error: &ErrorInfo) {
        let dump = dump_error(error);
        tracing::debug!(error = %dump, kind = ?error.kind, "error dump");
    }
}

/// Pretty JSON form of an error, or its Debug form if that fails
pub fn dump_error(error: &ErrorInfo) -> String {
    serde_json::to_string_pretty(error).unwrap_or_else(|_| format!("{error:?}"))
}
