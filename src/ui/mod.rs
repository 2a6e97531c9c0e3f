//! UI module for rendering the TUI

mod components;
mod document_view;
mod layout;

pub use components::{ErrorDialog, DEFAULT_DIALOG_WIDTH};

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);
    document_view::draw(frame, main_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Error dialog goes last so it sits on top
    if let Some(error) = app.state.current_error() {
        ErrorDialog::new(app.state.has_errors(), error, || {})
            .max_width(app.dialog_max_width)
            .render(frame, app.sink());
    }
}
