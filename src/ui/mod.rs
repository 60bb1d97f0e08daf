//! UI module for question-solver
//!
//! This module contains the rendering functions for the TUI interface:
//! the header, the answer panel, the auto-growing question editor and the
//! key hint bar.

mod answer;
mod helpers;
mod input;
mod render;

pub use render::render;
