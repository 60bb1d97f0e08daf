//! Top-level screen layout

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use super::answer::render_answer_panel;
use super::helpers::center_horizontally;
use super::input::{input_height, render_question_input};
use crate::app::App;
use crate::theme::{BG_PRIMARY, INDIGO_ACCENT, SKY_PRIMARY, SKY_STRONG, TEXT_MUTED};

/// Widest the content column gets on large terminals
const MAX_CONTENT_WIDTH: u16 = 96;

/// Render the whole screen
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(BG_PRIMARY)), area);

    // Create main layout: content area + bottom bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Main content area
            Constraint::Length(1), // Bottom bar (single line)
        ])
        .split(area);

    let content_area = center_horizontally(main_layout[0], MAX_CONTENT_WIDTH);
    let editor_height = input_height(app, content_area.width);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Title + subtitle
            Constraint::Min(5),                // Answer panel
            Constraint::Length(editor_height), // Question editor
        ])
        .split(content_area);

    render_header(sections[0], &app.model_label, frame);
    render_answer_panel(sections[1], app, frame);
    render_question_input(sections[2], app, frame);
    render_key_hints(main_layout[1], app.is_loading, frame);
}

fn render_header(area: Rect, model: &str, frame: &mut Frame) {
    let lines = vec![
        Line::from(vec![
            Span::styled("✦ ", Style::default().fg(INDIGO_ACCENT)),
            Span::styled(
                "AI Question Solver",
                Style::default().fg(SKY_PRIMARY).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("Powered by {}", display_model_name(model)),
            Style::default().fg(TEXT_MUTED),
        )),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_key_hints(area: Rect, is_loading: bool, frame: &mut Frame) {
    let hints = if is_loading {
        " Waiting for answer... | PgUp/PgDn: Scroll | Esc: Quit "
    } else {
        " Enter: Send | Shift+Enter: New line | Ctrl+U: Clear | PgUp/PgDn: Scroll | Esc: Quit "
    };
    let keybindings =
        Paragraph::new(hints).style(Style::default().fg(Color::Black).bg(SKY_STRONG));
    frame.render_widget(keybindings, area);
}

/// Turn a model id like `gemini-2.5-flash` into `Gemini 2.5 Flash`
fn display_model_name(model: &str) -> String {
    model
        .split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::solver::RequestFailure;

    fn draw(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn type_question(app: &mut App, text: &str) {
        for c in text.chars() {
            app.question.insert_char(c);
        }
    }

    #[test]
    fn test_display_model_name() {
        assert_eq!(display_model_name("gemini-2.5-flash"), "Gemini 2.5 Flash");
        assert_eq!(display_model_name("custom"), "Custom");
    }

    #[test]
    fn test_welcome_screen() {
        let mut app = App::new("gemini-2.5-flash");
        let screen = draw(&mut app, 80, 24);

        assert!(screen.contains("AI Question Solver"));
        assert!(screen.contains("Powered by Gemini 2.5 Flash"));
        assert!(screen.contains("Ask me anything!"));
        assert!(screen.contains("Your answer will appear here."));
        assert!(screen.contains("Type your question here..."));
        assert!(screen.contains("Enter: Send"));
    }

    #[test]
    fn test_loading_screen() {
        let mut app = App::new("gemini-2.5-flash");
        type_question(&mut app, "What is 2+2?");
        app.submit();

        let screen = draw(&mut app, 80, 24);

        assert!(screen.contains("Thinking..."));
        assert!(screen.contains("What is 2+2?"));
        assert!(screen.contains("Waiting for answer..."));
        assert!(!screen.contains("Ask me anything!"));
    }

    #[test]
    fn test_error_screen() {
        let mut app = App::new("gemini-2.5-flash");
        type_question(&mut app, "q");
        app.submit();
        app.finish(Err(RequestFailure::Unknown));

        let screen = draw(&mut app, 120, 24);

        assert!(screen.contains("Error"));
        assert!(screen.contains("An unknown error occurred"));
    }

    #[test]
    fn test_answer_preserves_whitespace() {
        let mut app = App::new("gemini-2.5-flash");
        type_question(&mut app, "q");
        app.submit();
        app.finish(Ok("Steps:\n    1. add\n    2. done".to_string()));

        let screen = draw(&mut app, 80, 24);

        assert!(screen.contains("Steps:"));
        assert!(screen.contains("    1. add"));
        assert!(screen.contains("    2. done"));
        assert_eq!(app.answer_max_scroll, 0);
    }

    #[test]
    fn test_long_answer_is_scrollable() {
        let mut app = App::new("gemini-2.5-flash");
        type_question(&mut app, "q");
        app.submit();
        let answer = (1..=60).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
        app.finish(Ok(answer));

        let screen = draw(&mut app, 80, 24);

        assert!(app.answer_max_scroll > 0);
        assert!(screen.contains("line 1"));
        assert!(screen.contains("PgUp/PgDn 0/"));
    }

    #[test]
    fn test_answer_with_long_tokens_scrolls_to_the_end() {
        let mut app = App::new("gemini-2.5-flash");
        type_question(&mut app, "q");
        app.submit();
        let answer = (0..20)
            .map(|i| format!("{}END{i}", "x".repeat(200)))
            .collect::<Vec<_>>()
            .join("\n");
        app.finish(Ok(answer));

        draw(&mut app, 80, 24);
        for _ in 0..100 {
            app.scroll_answer_down();
        }
        let screen = draw(&mut app, 80, 24);

        assert!(screen.contains("END19"));
        assert!(app.answer_max_scroll >= 40);
    }

    #[test]
    fn test_wide_characters_all_visible_in_editor() {
        let mut app = App::new("gemini-2.5-flash");
        type_question(&mut app, &"字".repeat(30));

        let screen = draw(&mut app, 40, 24);

        assert_eq!(screen.matches('字').count(), 30);
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = App::new("gemini-2.5-flash");
        type_question(&mut app, "a question that is longer than the screen");
        draw(&mut app, 10, 5);
    }
}
