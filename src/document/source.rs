//! Trait abstraction for document loading to enable mocking in tests

use super::Document;
use crate::error::ExplorerError;
use async_trait::async_trait;
use std::path::Path;

/// Where documents come from
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Load and parse the document at `path`
    async fn load(&self, path: &Path) -> Result<Document, ExplorerError>;
}

/// Loads documents from the local file system
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSource;

#[async_trait]
impl DocumentSource for FileSource {
    async fn load(&self, path: &Path) -> Result<Document, ExplorerError> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ExplorerError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        Document::parse(path, &text)
    }
}
