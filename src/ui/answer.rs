//! Answer panel rendering: loading, error, answer and welcome states

use std::time::Duration;

use ratatui::{
    layout::Margin,
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::helpers::center_vertically;
use crate::app::App;
use crate::models::AnswerView;
use crate::theme::{
    get_pulse_color, BG_SECONDARY, BORDER_SUBTLE, INDIGO_ACCENT, RED_ERROR, ROUNDED_BORDERS,
    SKY_PRIMARY, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const BOT_ICON: [&str; 4] = ["  ╷  ", "╭─┴─╮", "│• •│", "╰───╯"];

/// Render the answer panel and update the answer scroll bounds
pub fn render_answer_panel(area: Rect, app: &mut App, frame: &mut Frame) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .title(Span::styled(
            app.answer_view().title(),
            Style::default().fg(TEXT_SECONDARY),
        ))
        .style(Style::default().bg(BG_SECONDARY));

    // Padding of one column on each side of the answer text
    let text_area = block.inner(area).inner(Margin::new(1, 0));

    // Clamp scrolling against the rows ratatui actually wraps the answer into
    let rows = answer_paragraph(&app.answer).line_count(text_area.width);
    let max_scroll = rows.saturating_sub(usize::from(text_area.height));
    app.answer_max_scroll = u16::try_from(max_scroll).unwrap_or(u16::MAX);
    app.answer_scroll = app.answer_scroll.min(app.answer_max_scroll);

    if app.answer_max_scroll > 0 && matches!(app.answer_view(), AnswerView::Answer(_)) {
        block = block.title_bottom(
            Line::from(Span::styled(
                format!(" PgUp/PgDn {}/{} ", app.answer_scroll, app.answer_max_scroll),
                Style::default().fg(TEXT_MUTED),
            ))
            .right_aligned(),
        );
    }
    frame.render_widget(block, area);

    match app.answer_view() {
        AnswerView::Loading => render_loading(text_area, app, frame),
        AnswerView::Error(message) => render_error(text_area, message, frame),
        AnswerView::Answer(answer) => {
            let paragraph = answer_paragraph(answer).scroll((app.answer_scroll, 0));
            frame.render_widget(paragraph, text_area);
        }
        AnswerView::Welcome => render_welcome(text_area, frame),
        AnswerView::Blank => {}
    }
}

fn answer_paragraph(answer: &str) -> Paragraph<'_> {
    Paragraph::new(answer)
        .style(Style::default().fg(TEXT_PRIMARY))
        .wrap(Wrap { trim: false })
}

/// Elapsed request time as MM:SS
fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02} elapsed", secs / 60, secs % 60)
}

fn render_loading(area: Rect, app: &App, frame: &mut Frame) {
    let spinner = SPINNER_FRAMES[(app.animation_tick % SPINNER_FRAMES.len() as u64) as usize];
    let elapsed = app
        .request_start
        .map(|start| format_elapsed(start.elapsed()))
        .unwrap_or_default();

    let lines = vec![
        Line::from(Span::styled(
            spinner,
            Style::default().fg(SKY_PRIMARY).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Thinking...",
            Style::default().fg(get_pulse_color(app.animation_tick, SKY_PRIMARY, TEXT_MUTED)),
        )),
        Line::from(Span::styled(elapsed, Style::default().fg(TEXT_MUTED))),
    ];

    let height = lines.len() as u16;
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, center_vertically(area, height));
}

fn render_error(area: Rect, message: &str, frame: &mut Frame) {
    let lines = vec![
        Line::from(Span::styled(
            "Error",
            Style::default().fg(RED_ERROR).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(TEXT_SECONDARY))),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    let height = u16::try_from(paragraph.line_count(area.width)).unwrap_or(u16::MAX);
    frame.render_widget(paragraph, center_vertically(area, height));
}

fn render_welcome(area: Rect, frame: &mut Frame) {
    let mut lines: Vec<Line> = BOT_ICON
        .iter()
        .map(|row| Line::from(Span::styled(*row, Style::default().fg(INDIGO_ACCENT))))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Ask me anything!",
        Style::default().fg(TEXT_SECONDARY).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        "Your answer will appear here.",
        Style::default().fg(TEXT_MUTED),
    )));

    let height = lines.len() as u16;
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, center_vertically(area, height));
}
