//! Data models for the question solver
//!
//! This module contains the core data structures:
//! - The editable question buffer and its wrapped layout
//! - Enums for answer display and key handling

pub mod enums;
pub mod question;

// Re-exports for convenient access
pub use enums::{Action, AnswerView};
pub use question::QuestionInput;
