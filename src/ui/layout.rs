//! Layout components (header, status bar)

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header, document pane and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Document
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the header with the document name and summary
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        " json-explorer ",
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(doc) = &app.state.document {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            doc.display_name(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(doc.summary(), Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            format!(
                "loaded {}",
                doc.loaded_at()
                    .with_timezone(&chrono::Local)
                    .format("%H:%M:%S")
            ),
            Style::default().fg(Color::DarkGray),
        ));
    } else if let Some(path) = app.document_path() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            path.display().to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    if app.state.has_errors() {
        let count = app.state.error_count();
        let label = if count == 1 {
            " 1 error ".to_string()
        } else {
            format!(" {count} errors ")
        };
        spans.push(Span::styled(
            label,
            Style::default().fg(Color::White).bg(Color::Red),
        ));
        spans.push(Span::styled(
            " Enter/Esc:dismiss",
            Style::default().fg(Color::Gray),
        ));
    } else if let Some(msg) = &app.state.status_message {
        spans.push(Span::styled(
            format!(" {msg}"),
            Style::default().fg(Color::Green),
        ));
    } else {
        spans.push(Span::styled(
            " j/k:scroll  PgUp/PgDn:page  g/G:top/bottom  r:reload  q:quit",
            Style::default().fg(Color::Gray),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Line position on the right
    if let Some(doc) = &app.state.document {
        let position = format!(" Ln {}/{} ", app.state.scroll + 1, doc.line_count());
        let width = (position.len() as u16).min(area.width);
        let position_area = Rect {
            x: area.x + area.width.saturating_sub(width),
            y: area.y,
            width,
            height: area.height,
        };
        let widget =
            Paragraph::new(position).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
        frame.render_widget(widget, position_area);
    }
}
