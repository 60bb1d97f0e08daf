//! Question editor rendering.
//!
//! The editor grows with its content up to [`MAX_INPUT_ROWS`] rows and then
//! scrolls so the cursor stays visible.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::theme::{
    BG_SECONDARY, BORDER_SUBTLE, ROUNDED_BORDERS, SKY_STRONG, TEXT_DISABLED, TEXT_MUTED,
    TEXT_PRIMARY, TEXT_SECONDARY,
};

pub const MAX_INPUT_ROWS: u16 = 8;

const PLACEHOLDER: &str = "Type your question here...";

/// Total height of the editor box (borders included) for a given outer width
pub fn input_height(app: &App, width: u16) -> u16 {
    let rows = app.question.layout(width.saturating_sub(2)).rows.len();
    let rows = rows.min(usize::from(MAX_INPUT_ROWS)) as u16;
    rows.max(1) + 2
}

/// Render the question editor and place the terminal cursor
pub fn render_question_input(area: Rect, app: &App, frame: &mut Frame) {
    let border_color = if app.is_loading { BORDER_SUBTLE } else { SKY_STRONG };
    let send_style = if app.can_submit() {
        Style::default()
            .fg(TEXT_PRIMARY)
            .bg(SKY_STRONG)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT_DISABLED)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(ROUNDED_BORDERS)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(" Question ", Style::default().fg(TEXT_SECONDARY)))
        .title_bottom(Line::from(Span::styled(" ➤ Send ", send_style)).right_aligned())
        .style(Style::default().bg(BG_SECONDARY));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    if app.question.is_empty() {
        let placeholder = Paragraph::new(Span::styled(PLACEHOLDER, Style::default().fg(TEXT_MUTED)));
        frame.render_widget(placeholder, inner);
        if !app.is_loading {
            frame.set_cursor_position((inner.x, inner.y));
        }
        return;
    }

    let layout = app.question.layout(inner.width);
    let visible = usize::from(inner.height);
    let first_row = (layout.cursor_row + 1).saturating_sub(visible);
    let text_color = if app.is_loading { TEXT_MUTED } else { TEXT_PRIMARY };

    let lines: Vec<Line> = layout
        .rows
        .iter()
        .skip(first_row)
        .take(visible)
        .map(|row| Line::from(Span::styled(row.clone(), Style::default().fg(text_color))))
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);

    if !app.is_loading {
        let x = inner.x + layout.cursor_col as u16;
        let y = inner.y + (layout.cursor_row - first_row) as u16;
        frame.set_cursor_position((x, y));
    }
}
