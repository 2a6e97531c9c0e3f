//! Error model shared by the explorer and the error dialog

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Text shown when an error carries no message
pub const FALLBACK_MESSAGE: &str = "No Message";

/// Failures raised while loading and exploring documents
#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} is empty", path.display())]
    EmptyDocument { path: PathBuf },

    #[error("No document to open.\nPass a path: json-explorer <PATH>")]
    NoDocument,
}

impl ExplorerError {
    /// Short classifier recorded on the captured error
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Read { .. } => "io",
            Self::Parse { .. } => "parse",
            Self::EmptyDocument { .. } => "empty",
            Self::NoDocument => "no-document",
        }
    }
}

/// An error captured for display
///
/// The message is optional: some errors render to nothing useful, and the
/// dialog falls back to [`FALLBACK_MESSAGE`] for those.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub message: Option<String>,
    pub kind: Option<String>,
    #[serde(default)]
    pub causes: Vec<String>,
    pub occurred_at: DateTime<Utc>,
}

impl ErrorInfo {
    /// Capture an error with the given message
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            kind: None,
            causes: Vec::new(),
            occurred_at: Utc::now(),
        }
    }

    /// Capture an error that has no message
    #[allow(dead_code)]
    pub fn without_message() -> Self {
        Self {
            message: None,
            kind: None,
            causes: Vec::new(),
            occurred_at: Utc::now(),
        }
    }

    /// Capture any error along with its source chain
    pub fn from_error(err: &(dyn std::error::Error + 'static)) -> Self {
        let text = err.to_string();
        let message = if text.trim().is_empty() {
            None
        } else {
            Some(text)
        };

        let mut causes = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            causes.push(cause.to_string());
            source = cause.source();
        }

        Self {
            message,
            kind: None,
            causes,
            occurred_at: Utc::now(),
        }
    }

    /// Set the classifier
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// The text the dialog shows for this error
    pub fn display_message(&self) -> &str {
        match self.message.as_deref() {
            Some(message) if !message.is_empty() => message,
            _ => FALLBACK_MESSAGE,
        }
    }
}

impl From<&ExplorerError> for ErrorInfo {
    fn from(err: &ExplorerError) -> Self {
        ErrorInfo::from_error(err).kind(err.kind())
    }
}

impl From<ExplorerError> for ErrorInfo {
    fn from(err: ExplorerError) -> Self {
        ErrorInfo::from(&err)
    }
}
