//! Enums used throughout the question solver
//!
//! This module contains the small enum types the UI state is expressed in.

/// What the answer panel shows; exactly one applies at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerView<'a> {
    Loading,          // A request is in flight
    Error(&'a str),   // Last request failed
    Answer(&'a str),  // Last request succeeded
    Welcome,          // Nothing asked yet
    Blank,            // Asked before, but nothing to show
}

/// Result of handling one key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Submit(String), // Prompt to send to the solver
    Quit,
}

impl AnswerView<'_> {
    pub fn title(&self) -> &'static str {
        match self {
            AnswerView::Loading => " Thinking ",
            AnswerView::Error(_) => " Error ",
            AnswerView::Answer(_) | AnswerView::Welcome | AnswerView::Blank => " Answer ",
        }
    }
}
