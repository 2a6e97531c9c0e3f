//! Error dialog component
//!
//! A modal that shows a captured [`ErrorInfo`] over the rest of the UI. The
//! dialog keeps no state of its own: the caller passes visibility, the error
//! and a close callback every frame, and decides what happens when the
//! callback fires. Closing the dialog never changes `open` here.

use super::base::{dialog_layout, render_dialog, DialogConfig, DialogLayout};
use crate::diagnostics::{DiagnosticSink, ERROR_HEADLINE};
use crate::error::ErrorInfo;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

pub const ERROR_TITLE: &str = "Error";
pub const ERROR_LEAD: &str = "An error has been detected";
pub const CLOSE_LABEL: &str = "Close";

/// Default maximum dialog width in columns
pub const DEFAULT_MAX_WIDTH: u16 = 60;

/// Error dialog for a single render pass
pub struct ErrorDialog<'a, F: FnMut()> {
    open: bool,
    error: &'a ErrorInfo,
    on_close: F,
    max_width: u16,
}

impl<'a, F: FnMut()> ErrorDialog<'a, F> {
    pub fn new(open: bool, error: &'a ErrorInfo, on_close: F) -> Self {
        Self {
            open,
            error,
            on_close,
            max_width: DEFAULT_MAX_WIDTH,
        }
    }

    /// Cap the dialog width
    pub fn max_width(mut self, max_width: u16) -> Self {
        self.max_width = max_width;
        self
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The message line the dialog shows
    pub fn message(&self) -> &'a str {
        self.error.display_message()
    }

    fn config(&self) -> DialogConfig<'a> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let hint = vec![
            Span::raw("Press "),
            Span::styled("Enter", key_style),
            Span::raw(" or "),
            Span::styled("Esc", key_style),
            Span::raw(" to dismiss"),
        ];

        DialogConfig {
            title: ERROR_TITLE,
            title_color: Color::Red,
            border_color: Color::Red,
            lead: Some(ERROR_LEAD),
            message: self.message(),
            hint: Some(hint),
            button: Some(CLOSE_LABEL),
            max_width: self.max_width,
        }
    }

    /// Where the dialog would be drawn inside `area`, `None` while closed
    pub fn layout(&self, area: Rect) -> Option<DialogLayout> {
        self.open.then(|| dialog_layout(area, &self.config()))
    }

    /// Render the dialog centered on the frame
    ///
    /// Every render while open reports the error to `sink`. Returns the
    /// drawn layout, or `None` when closed and nothing was drawn.
    pub fn render(&self, frame: &mut Frame, sink: &dyn DiagnosticSink) -> Option<DialogLayout> {
        if !self.is_open() {
            return None;
        }

        sink.announce(ERROR_HEADLINE);
        sink.dump(self.error);

        Some(render_dialog(frame, self.config()))
    }

    /// Handle a key press. Returns true if the dialog consumed it.
    ///
    /// While open the dialog is modal and swallows every key; `Enter` and
    /// `Esc` invoke the close callback.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if !self.open {
            return false;
        }
        if key.kind == KeyEventKind::Press && matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            (self.on_close)();
        }
        true
    }

    /// Handle a mouse event against the dialog drawn inside `area`.
    /// Returns true if the dialog consumed it.
    ///
    /// A left click on the close button invokes the close callback.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) -> bool {
        let Some(layout) = self.layout(area) else {
            return false;
        };

        let clicked = matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left));
        let on_button = layout
            .button
            .is_some_and(|button| button.contains(Position::new(mouse.column, mouse.row)));
        if clicked && on_button {
            (self.on_close)();
        }
        true
    }
}
