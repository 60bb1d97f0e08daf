//! Gemini generative language API access.
//!
//! - `prompt`: instructional template and fixed sampling values
//! - `types`: request/response wire types
//! - `client`: the HTTP client implementing [`crate::solver::Solver`]

mod client;
mod prompt;
mod types;

pub use client::GeminiClient;
