//! Base dialog component

use crate::ui::components::button::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

/// Horizontal padding inside the border (one column each side)
const PADDING: u16 = 2;
/// Left and right border columns
const BORDERS: u16 = 2;

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    /// Dialog title
    pub title: &'a str,
    /// Title color
    pub title_color: Color,
    /// Border color
    pub border_color: Color,
    /// Fixed line shown above the message
    pub lead: Option<&'a str>,
    /// Message content (can be multi-line with \n)
    pub message: &'a str,
    /// Hint text shown below the message (e.g., "Press Enter to dismiss")
    pub hint: Option<Vec<Span<'a>>>,
    /// Label of the button at the bottom of the dialog
    pub button: Option<&'a str>,
    /// Maximum width of the dialog
    pub max_width: u16,
}

impl Default for DialogConfig<'_> {
    fn default() -> Self {
        Self {
            title: "Dialog",
            title_color: Color::White,
            border_color: Color::White,
            lead: None,
            message: "",
            hint: None,
            button: None,
            max_width: 60,
        }
    }
}

/// Screen regions occupied by a rendered dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogLayout {
    /// The whole dialog, borders included
    pub area: Rect,
    /// The button, if the dialog has one
    pub button: Option<Rect>,
}

/// Compute where a dialog lands inside `area` without drawing it
pub fn dialog_layout(area: Rect, config: &DialogConfig) -> DialogLayout {
    let (lead_lines, wrapped_lines) = wrap_body(area, config);
    compute_layout(area, config, &lead_lines, &wrapped_lines)
}

/// Word-wrap the lead and the message to the dialog's text width
fn wrap_body(area: Rect, config: &DialogConfig) -> (Vec<String>, Vec<String>) {
    let max_width = config.max_width.min(area.width);
    let text_cols = max_width.saturating_sub(PADDING + BORDERS) as usize;
    let lead_lines = config
        .lead
        .map(|lead| wrap_text(lead, text_cols))
        .unwrap_or_default();
    (lead_lines, wrap_text(config.message, text_cols))
}

fn compute_layout(
    area: Rect,
    config: &DialogConfig,
    lead_lines: &[String],
    wrapped_lines: &[String],
) -> DialogLayout {
    let max_width = config.max_width.min(area.width);

    let hint_width = config
        .hint
        .as_ref()
        .map(|spans| spans.iter().map(|s| s.width()).sum::<usize>())
        .unwrap_or(0);
    let button_cols = config.button.map(button_width).unwrap_or(0) as usize;

    // Calculate dialog dimensions
    let content_width = lead_lines
        .iter()
        .chain(wrapped_lines)
        .map(|l| text_width(l))
        .chain([text_width(config.title), hint_width, button_cols])
        .max()
        .unwrap_or(0);
    let content_width = u16::try_from(content_width).unwrap_or(u16::MAX);
    let dialog_width = content_width
        .saturating_add(PADDING + BORDERS)
        .min(max_width);

    // Height: title + blank + lead + message lines + blank/hint + button row + borders
    let body_lines = u16::try_from(lead_lines.len() + wrapped_lines.len()).unwrap_or(u16::MAX);
    let hint_lines = if config.hint.is_some() { 2 } else { 0 };
    let button_lines = if config.button.is_some() { BUTTON_HEIGHT } else { 0 };
    let dialog_height = body_lines
        .saturating_add(2 + hint_lines + button_lines + 2)
        .max(5)
        .min(area.height);

    // Center the dialog
    let dialog_x = area.x + (area.width.saturating_sub(dialog_width)) / 2;
    let dialog_y = area.y + (area.height.saturating_sub(dialog_height)) / 2;

    let dialog_area = Rect {
        x: dialog_x,
        y: dialog_y,
        width: dialog_width,
        height: dialog_height,
    };

    let button = config.button.map(|label| {
        let inner = dialog_block(config.border_color).inner(dialog_area);
        let width = button_width(label).min(inner.width);
        let height = BUTTON_HEIGHT.min(inner.height);
        Rect {
            x: inner.x + (inner.width.saturating_sub(width)) / 2,
            y: inner.y + inner.height.saturating_sub(height),
            width,
            height,
        }
    });

    DialogLayout {
        area: dialog_area,
        button,
    }
}

/// Render a centered dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) -> DialogLayout {
    let area = frame.area();

    // Word-wrap the lead and message
    let (lead_lines, wrapped_lines) = wrap_body(area, &config);
    let layout = compute_layout(area, &config, &lead_lines, &wrapped_lines);

    // Clear the area behind the dialog
    frame.render_widget(Clear, layout.area);

    // Build content
    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for line in lead_lines.into_iter().chain(wrapped_lines) {
        content.push(Line::from(line));
    }

    if let Some(hint_spans) = config.hint {
        content.push(Line::from(""));
        content.push(Line::from(hint_spans));
    }

    let block = dialog_block(config.border_color);
    let mut text_area = block.inner(layout.area);
    if let Some(button) = layout.button {
        text_area.height = button.y.saturating_sub(text_area.y);
    }

    frame.render_widget(block, layout.area);
    frame.render_widget(
        Paragraph::new(content).style(Style::default().bg(Color::Black)),
        text_area,
    );

    if let (Some(label), Some(button)) = (config.button, layout.button) {
        render_button(frame, button, label, true);
    }

    layout
}

fn dialog_block(border_color: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(Color::Black))
}

/// Button label plus a space each side plus borders
fn button_width(label: &str) -> u16 {
    u16::try_from(text_width(label))
        .unwrap_or(u16::MAX)
        .saturating_add(4)
}

fn text_width(text: &str) -> usize {
    Span::raw(text).width()
}

/// Wrap text to fit within a maximum width
///
/// Lines that already fit are kept verbatim, whitespace included.
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let paragraph = paragraph.trim_end_matches('\r');
        if text_width(paragraph) <= max_width {
            lines.push(paragraph.to_string());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            for piece in split_long_word(word, max_width) {
                if !current_line.is_empty()
                    && text_width(&current_line) + text_width(&piece) + 1 > max_width
                {
                    lines.push(std::mem::take(&mut current_line));
                }
                if !current_line.is_empty() {
                    current_line.push(' ');
                }
                current_line.push_str(&piece);
            }
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Break a word wider than `max_width` into chunks
fn split_long_word(word: &str, max_width: usize) -> Vec<String> {
    if text_width(word) <= max_width {
        return vec![word.to_string()];
    }

    let mut pieces = Vec::new();
    let mut current = String::new();
    for ch in word.chars() {
        current.push(ch);
        if text_width(&current) >= max_width {
            pieces.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}
