//! Application state definitions

use crate::document::Document;
use crate::error::ErrorInfo;
use std::collections::VecDeque;

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    /// Currently displayed document
    pub document: Option<Document>,
    /// First visible document line
    pub scroll: usize,
    /// Errors waiting to be shown, front is on screen
    errors: VecDeque<ErrorInfo>,
    /// Status bar message
    pub status_message: Option<String>,
}

impl AppState {
    /// Queue an error for display
    pub fn push_error(&mut self, error: ErrorInfo) {
        self.errors.push_back(error);
    }

    /// Whether any error is waiting to be shown
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The error currently on screen
    pub fn current_error(&self) -> Option<&ErrorInfo> {
        self.errors.front()
    }

    /// Number of queued errors, including the one on screen
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Drop the error on screen so the next one (if any) shows
    pub fn dismiss_error(&mut self) -> Option<ErrorInfo> {
        self.errors.pop_front()
    }

    /// Replace the document and scroll back to the top
    pub fn set_document(&mut self, document: Document) {
        self.document = Some(document);
        self.scroll = 0;
    }

    fn max_scroll(&self) -> usize {
        self.document
            .as_ref()
            .map(|doc| doc.line_count().saturating_sub(1))
            .unwrap_or(0)
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_add(lines).min(self.max_scroll());
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }
}
