//! Application state and core logic for the question solver.
//!
//! This module contains the `App` struct which holds the question being
//! edited, the last answer or error, and the loading flag. Only the event
//! loop mutates it; the remote call reports back through [`App::finish`].

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::models::{Action, AnswerView, QuestionInput};
use crate::solver::{Outcome, RequestFailure};

/// Lines moved by one PageUp/PageDown
const SCROLL_STEP: u16 = 5;

/// Application state
pub struct App {
    pub question: QuestionInput,
    pub answer: String,
    pub is_loading: bool,
    pub error: Option<String>,
    // Set by the first accepted submit and never cleared
    pub has_asked: bool,
    // Model name shown under the title
    pub model_label: String,
    // Answer panel scroll offset, clamped by the renderer
    pub answer_scroll: u16,
    pub answer_max_scroll: u16,
    // Animation state
    pub animation_tick: u64,
    // When the in-flight request was submitted
    pub request_start: Option<Instant>,
}

impl App {
    pub fn new(model_label: impl Into<String>) -> Self {
        Self {
            question: QuestionInput::default(),
            answer: String::new(),
            is_loading: false,
            error: None,
            has_asked: false,
            model_label: model_label.into(),
            answer_scroll: 0,
            answer_max_scroll: 0,
            animation_tick: 0,
            request_start: None,
        }
    }

    /// Whether the submit action is currently available
    pub fn can_submit(&self) -> bool {
        !self.is_loading && !self.question.is_blank()
    }

    /// Start a request for the current question.
    ///
    /// Returns the prompt to dispatch, or `None` without touching any state
    /// when the question is blank or a request is already in flight.
    pub fn submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }

        self.is_loading = true;
        self.error = None;
        self.answer.clear();
        self.has_asked = true;
        self.answer_scroll = 0;
        self.request_start = Some(Instant::now());

        let prompt = self.question.value().to_string();
        tracing::debug!(chars = prompt.chars().count(), "Question submitted");
        Some(prompt)
    }

    /// Apply the result of the in-flight request
    pub fn finish(&mut self, outcome: Outcome) {
        match outcome {
            Ok(answer) => {
                self.answer = answer;
                self.error = None;
            }
            Err(RequestFailure::Service(message)) => {
                self.answer.clear();
                self.error = Some(format!(
                    "An error occurred: {}. Please check your API key and network connection.",
                    message
                ));
            }
            Err(RequestFailure::Unknown) => {
                self.answer.clear();
                self.error =
                    Some("An unknown error occurred while trying to get an answer.".to_string());
            }
        }

        if let Some(start) = self.request_start.take() {
            tracing::info!(
                elapsed_ms = start.elapsed().as_millis() as u64,
                failed = self.error.is_some(),
                "Request finished"
            );
        }
        self.is_loading = false;
        self.answer_scroll = 0;
    }

    /// What the answer panel should show right now
    pub fn answer_view(&self) -> AnswerView<'_> {
        if self.is_loading {
            AnswerView::Loading
        } else if let Some(error) = self.error.as_deref() {
            AnswerView::Error(error)
        } else if !self.answer.is_empty() {
            AnswerView::Answer(&self.answer)
        } else if !self.has_asked {
            AnswerView::Welcome
        } else {
            AnswerView::Blank
        }
    }

    /// Advance animations
    pub fn on_tick(&mut self) {
        self.animation_tick = self.animation_tick.wrapping_add(1);
    }

    pub fn scroll_answer_up(&mut self) {
        self.answer_scroll = self.answer_scroll.saturating_sub(SCROLL_STEP);
    }

    pub fn scroll_answer_down(&mut self) {
        self.answer_scroll = self
            .answer_scroll
            .saturating_add(SCROLL_STEP)
            .min(self.answer_max_scroll);
    }

    /// Insert pasted text at the cursor, normalizing line endings
    pub fn handle_paste(&mut self, text: &str) {
        if self.is_loading {
            return;
        }
        self.question.insert_str(text);
    }

    /// Handle one key event and report what the event loop should do
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.kind == KeyEventKind::Release {
            return Action::None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Always available, even while a request is in flight
        match key.code {
            KeyCode::Esc => return Action::Quit,
            KeyCode::Char('c') if ctrl => return Action::Quit,
            KeyCode::PageUp => {
                self.scroll_answer_up();
                return Action::None;
            }
            KeyCode::PageDown => {
                self.scroll_answer_down();
                return Action::None;
            }
            _ => {}
        }

        // The editor is disabled while loading
        if self.is_loading {
            return Action::None;
        }

        match key.code {
            KeyCode::Enter
                if key.modifiers.intersects(KeyModifiers::SHIFT | KeyModifiers::ALT) =>
            {
                self.question.insert_newline();
            }
            KeyCode::Enter => {
                return self.submit().map_or(Action::None, Action::Submit);
            }
            KeyCode::Char('u') if ctrl => self.question.clear(),
            KeyCode::Char(c) if !ctrl => self.question.insert_char(c),
            KeyCode::Backspace => self.question.backspace(),
            KeyCode::Delete => self.question.delete(),
            KeyCode::Left => self.question.move_left(),
            KeyCode::Right => self.question.move_right(),
            KeyCode::Home => self.question.move_home(),
            KeyCode::End => self.question.move_end(),
            _ => {}
        }

        Action::None
    }
}
