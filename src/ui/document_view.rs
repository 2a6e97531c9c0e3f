//! Scrollable, line-numbered document view

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the document pane
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(doc) = &app.state.document else {
        draw_empty_state(frame, area);
        return;
    };

    let visible = area.height.saturating_sub(2) as usize;
    let gutter = doc.line_count().to_string().len();

    let content: Vec<Line> = doc
        .lines()
        .iter()
        .enumerate()
        .skip(app.state.scroll)
        .take(visible)
        .map(|(idx, line)| {
            let mut spans = vec![Span::styled(
                format!("{:>gutter$} ", idx + 1),
                Style::default().fg(Color::DarkGray),
            )];
            spans.extend(highlight(line));
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(format!(" {} ", doc.display_name()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(paragraph, area);
}

/// Draw empty state when no document is loaded
fn draw_empty_state(frame: &mut Frame, area: Rect) {
    let text = "No document loaded.\n\nPress 'r' to reload.";
    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .title(" Document ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(paragraph, area);
}

/// Color object keys in a pretty-printed JSON line
fn highlight(line: &str) -> Vec<Span<'_>> {
    let indent = line.len() - line.trim_start().len();
    let body = &line[indent..];

    if let Some(key_end) = key_end(body) {
        let (key, rest) = body.split_at(key_end);
        vec![
            Span::raw(&line[..indent]),
            Span::styled(key, Style::default().fg(Color::Cyan)),
            Span::raw(rest),
        ]
    } else {
        vec![Span::raw(line)]
    }
}

/// Byte offset just past the closing quote of a leading `"key":`
fn key_end(body: &str) -> Option<usize> {
    if !body.starts_with('"') {
        return None;
    }
    let mut escaped = false;
    for (idx, ch) in body.char_indices().skip(1) {
        match ch {
            '\\' if !escaped => escaped = true,
            '"' if !escaped => {
                let end = idx + 1;
                return body[end..].starts_with(':').then_some(end);
            }
            _ => escaped = false,
        }
    }
    None
}
