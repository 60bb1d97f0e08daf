//! Error type shared by the service client, configuration and startup code.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Prompt cannot be empty.")]
    EmptyPrompt,

    #[error("Gemini API Error: {0}")]
    Api(String),

    #[error("{message}")]
    Config { message: String },
}

pub type Result<T> = std::result::Result<T, SolverError>;
