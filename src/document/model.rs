//! Loaded JSON document

use crate::error::ExplorerError;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// A parsed JSON document ready for display
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    value: Value,
    lines: Vec<String>,
    loaded_at: DateTime<Utc>,
}

impl Document {
    /// Parse document text read from `path`
    pub fn parse(path: impl Into<PathBuf>, text: &str) -> Result<Self, ExplorerError> {
        let path = path.into();
        if text.trim().is_empty() {
            return Err(ExplorerError::EmptyDocument { path });
        }

        let value: Value = match serde_json::from_str(text) {
            Ok(value) => value,
            Err(source) => return Err(ExplorerError::Parse { path, source }),
        };
        let pretty = serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string());
        let lines = pretty.lines().map(str::to_string).collect();

        Ok(Self {
            path,
            value,
            lines,
            loaded_at: Utc::now(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Pretty-printed lines
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// File name for headers, falling back to the full path
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Root type and size, e.g. "object, 3 keys"
    pub fn summary(&self) -> String {
        match &self.value {
            Value::Object(map) => plural(map.len(), "object", "key"),
            Value::Array(items) => plural(items.len(), "array", "item"),
            Value::String(_) => "string".to_string(),
            Value::Number(_) => "number".to_string(),
            Value::Bool(_) => "boolean".to_string(),
            Value::Null => "null".to_string(),
        }
    }
}

fn plural(count: usize, kind: &str, noun: &str) -> String {
    if count == 1 {
        format!("{kind}, 1 {noun}")
    } else {
        format!("{kind}, {count} {noun}s")
    }
}
