//! Application state and core logic

use crate::config::TuiConfig;
use crate::diagnostics::DiagnosticSink;
use crate::document::DocumentSource;
use crate::error::{ErrorInfo, ExplorerError};
use crate::state::AppState;
use crate::ui::ErrorDialog;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::path::{Path, PathBuf};

/// Lines moved per mouse wheel notch
const WHEEL_STEP: usize = 3;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where documents are loaded from
    source: Box<dyn DocumentSource>,
    /// Receiver for error diagnostics
    sink: Box<dyn DiagnosticSink>,
    /// Document shown by the explorer
    document_path: Option<PathBuf>,
    /// Lines moved by PageUp/PageDown
    pub scroll_step: usize,
    /// Maximum width of the error dialog
    pub dialog_max_width: u16,
    /// Area of the last drawn frame, used for mouse hit-testing
    pub frame_area: Rect,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(
        source: Box<dyn DocumentSource>,
        sink: Box<dyn DiagnosticSink>,
        document_path: Option<PathBuf>,
        config: &TuiConfig,
    ) -> Self {
        Self {
            state: AppState::default(),
            source,
            sink,
            document_path,
            scroll_step: config.scroll_step(),
            dialog_max_width: config.dialog_max_width(),
            frame_area: Rect::default(),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    pub fn document_path(&self) -> Option<&Path> {
        self.document_path.as_deref()
    }

    pub fn sink(&self) -> &dyn DiagnosticSink {
        self.sink.as_ref()
    }

    /// Push an error to the error queue for display
    pub fn push_error(&mut self, error: impl Into<ErrorInfo>) {
        self.state.push_error(error.into());
    }

    /// Load (or reload) the document. Returns true on success.
    ///
    /// On failure the current document stays on screen and the error is
    /// queued for the error dialog.
    pub async fn load_document(&mut self) -> bool {
        let Some(path) = self.document_path.clone() else {
            self.push_error(ExplorerError::NoDocument);
            return false;
        };

        match self.source.load(&path).await {
            Ok(document) => {
                tracing::info!(
                    "Loaded {} ({} lines)",
                    document.path().display(),
                    document.line_count()
                );
                self.state.status_message = Some(format!("Loaded {}", document.display_name()));
                self.state.set_document(document);
                true
            }
            Err(err) => {
                tracing::warn!("Failed to load {}: {err}", path.display());
                self.push_error(&err);
                false
            }
        }
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            self.handle_error_dialog_key(key);
            return Ok(());
        }

        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('r') => {
                self.load_document().await;
            }
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_up(1),
            KeyCode::Down | KeyCode::Char('j') => self.state.scroll_down(1),
            KeyCode::PageUp => self.state.scroll_up(self.scroll_step),
            KeyCode::PageDown => self.state.scroll_down(self.scroll_step),
            KeyCode::Home | KeyCode::Char('g') => self.state.scroll_to_top(),
            KeyCode::End | KeyCode::Char('G') => self.state.scroll_to_bottom(),
            _ => {}
        }

        Ok(())
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if self.state.has_errors() {
            self.handle_error_dialog_mouse(mouse);
            return Ok(());
        }

        match mouse.kind {
            MouseEventKind::ScrollUp => self.state.scroll_up(WHEEL_STEP),
            MouseEventKind::ScrollDown => self.state.scroll_down(WHEEL_STEP),
            _ => {}
        }

        Ok(())
    }

    fn handle_error_dialog_key(&mut self, key: KeyEvent) {
        let mut closed = false;
        if let Some(error) = self.state.current_error() {
            ErrorDialog::new(true, error, || closed = true).handle_key(key);
        }
        if closed {
            self.dismiss_error();
        }
    }

    fn handle_error_dialog_mouse(&mut self, mouse: MouseEvent) {
        let mut closed = false;
        if let Some(error) = self.state.current_error() {
            ErrorDialog::new(true, error, || closed = true)
                .max_width(self.dialog_max_width)
                .handle_mouse(mouse, self.frame_area);
        }
        if closed {
            self.dismiss_error();
        }
    }

    fn dismiss_error(&mut self) {
        if let Some(error) = self.state.dismiss_error() {
            tracing::debug!(
                "Dismissed error ({} remaining): {}",
                self.state.error_count(),
                error.display_message()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::TracingSink;
    use crate::document::{Document, MockDocumentSource};
    use crossterm::event::{KeyModifiers, MouseButton};

    fn document(lines: usize) -> Document {
        let items: Vec<String> = (0..lines.saturating_sub(2)).map(|i| i.to_string()).collect();
        Document::parse("data.json", &format!("[{}]", items.join(","))).unwrap()
    }

    fn app_with(source: MockDocumentSource, path: Option<&str>) -> App {
        let mut app = App::new(
            Box::new(source),
            Box::new(TracingSink),
            path.map(PathBuf::from),
            &TuiConfig::default(),
        );
        app.frame_area = Rect::new(0, 0, 80, 24);
        app
    }

    fn loading(lines: usize) -> MockDocumentSource {
        let mut source = MockDocumentSource::new();
        source.expect_load().returning(move |_| Ok(document(lines)));
        source
    }

    fn failing() -> MockDocumentSource {
        let mut source = MockDocumentSource::new();
        source.expect_load().returning(|path| {
            Err(ExplorerError::EmptyDocument {
                path: path.to_path_buf(),
            })
        });
        source
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn current_message(app: &App) -> Option<&str> {
        app.state.current_error().map(|e| e.display_message())
    }

    mod load {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_load_success_sets_document() {
            let mut app = app_with(loading(10), Some("data.json"));

            assert!(app.load_document().await);
            assert_eq!(app.state.document.as_ref().map(|d| d.line_count()), Some(10));
            assert!(!app.state.has_errors());
            assert_eq!(app.state.status_message.as_deref(), Some("Loaded data.json"));
        }

        #[tokio::test]
        async fn test_load_failure_queues_error() {
            let mut app = app_with(failing(), Some("blank.json"));

            assert!(!app.load_document().await);
            assert!(app.state.document.is_none());
            assert_eq!(current_message(&app), Some("blank.json is empty"));
            assert_eq!(
                app.state.current_error().and_then(|e| e.kind.as_deref()),
                Some("empty")
            );
        }

        #[tokio::test]
        async fn test_load_without_path_queues_no_document() {
            let mut source = MockDocumentSource::new();
            source.expect_load().never();
            let mut app = app_with(source, None);

            assert!(!app.load_document().await);
            assert_eq!(
                app.state.current_error().and_then(|e| e.kind.as_deref()),
                Some("no-document")
            );
        }

        #[tokio::test]
        async fn test_failed_reload_keeps_document() {
            let mut source = MockDocumentSource::new();
            let mut calls = 0;
            source.expect_load().times(2).returning(move |path| {
                calls += 1;
                if calls == 1 {
                    Ok(document(5))
                } else {
                    Err(ExplorerError::EmptyDocument {
                        path: path.to_path_buf(),
                    })
                }
            });
            let mut app = app_with(source, Some("data.json"));

            app.load_document().await;
            app.handle_key(key(KeyCode::Char('r'))).await.unwrap();

            assert!(app.state.document.is_some());
            assert!(app.state.has_errors());
        }
    }

    mod keys {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_q_quits() {
            let mut app = app_with(loading(5), Some("data.json"));
            app.handle_key(key(KeyCode::Char('q'))).await.unwrap();
            assert!(app.should_quit());
        }

        #[tokio::test]
        async fn test_scroll_keys() {
            let mut app = app_with(loading(50), Some("data.json"));
            app.load_document().await;

            app.handle_key(key(KeyCode::Char('j'))).await.unwrap();
            app.handle_key(key(KeyCode::Down)).await.unwrap();
            assert_eq!(app.state.scroll, 2);

            app.handle_key(key(KeyCode::PageDown)).await.unwrap();
            assert_eq!(app.state.scroll, 12);

            app.handle_key(key(KeyCode::Char('k'))).await.unwrap();
            assert_eq!(app.state.scroll, 11);

            app.handle_key(key(KeyCode::Char('G'))).await.unwrap();
            assert_eq!(app.state.scroll, 49);

            app.handle_key(key(KeyCode::Home)).await.unwrap();
            assert_eq!(app.state.scroll, 0);
        }

        #[tokio::test]
        async fn test_error_dialog_is_modal() {
            let mut app = app_with(failing(), Some("blank.json"));
            app.load_document().await;

            app.handle_key(key(KeyCode::Char('q'))).await.unwrap();
            assert!(!app.should_quit());
            assert!(app.state.has_errors());
        }

        #[tokio::test]
        async fn test_enter_dismisses_one_error_at_a_time() {
            let mut app = app_with(loading(5), Some("data.json"));
            app.push_error(ErrorInfo::with_message("first"));
            app.push_error(ErrorInfo::without_message());

            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(current_message(&app), Some("No Message"));

            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert!(!app.state.has_errors());
        }
    }

    mod mouse {
        use super::*;
        use pretty_assertions::assert_eq;

        fn event(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
            MouseEvent {
                kind,
                column,
                row,
                modifiers: KeyModifiers::NONE,
            }
        }

        #[test]
        fn test_click_close_button_dismisses() {
            let mut app = app_with(loading(5), Some("data.json"));
            app.push_error(ErrorInfo::with_message("Network timeout"));

            let error = app.state.current_error().cloned().unwrap();
            let button = ErrorDialog::new(true, &error, || {})
                .max_width(app.dialog_max_width)
                .layout(app.frame_area)
                .and_then(|layout| layout.button)
                .unwrap();

            app.handle_mouse(event(
                MouseEventKind::Down(MouseButton::Left),
                button.x + 2,
                button.y + 1,
            ))
            .unwrap();
            assert!(!app.state.has_errors());
        }

        #[test]
        fn test_click_elsewhere_keeps_dialog() {
            let mut app = app_with(loading(5), Some("data.json"));
            app.push_error(ErrorInfo::with_message("Network timeout"));

            app.handle_mouse(event(MouseEventKind::Down(MouseButton::Left), 0, 0))
                .unwrap();
            assert!(app.state.has_errors());
        }

        #[tokio::test]
        async fn test_wheel_scrolls_document() {
            let mut app = app_with(loading(20), Some("data.json"));
            app.load_document().await;

            app.handle_mouse(event(MouseEventKind::ScrollDown, 10, 10))
                .unwrap();
            assert_eq!(app.state.scroll, WHEEL_STEP);

            app.handle_mouse(event(MouseEventKind::ScrollUp, 10, 10))
                .unwrap();
            assert_eq!(app.state.scroll, 0);
        }
    }
}
