//! CLI argument parsing.

use std::path::PathBuf;

use clap::Parser;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Arguments accepted by the `question-solver` binary
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "question-solver", version)]
#[command(about = "Ask a question in the terminal and get an answer from Gemini")]
pub struct CliArgs {
    /// Ask a single question, print the answer and exit without the TUI
    pub question: Option<String>,

    /// Model used to answer questions (overrides GEMINI_MODEL)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Base URL of the generative language API (overrides GEMINI_API_BASE)
    #[arg(long)]
    pub api_base: Option<String>,

    /// Write logs to this file instead of the user cache directory
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[arg(short, long, help = "Enable debug logging")]
    pub verbose: bool,
}

/// Parse CLI arguments from the process environment
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_starts_interactive() {
        let args = CliArgs::try_parse_from(["question-solver"]).unwrap();
        assert!(args.question.is_none());
        assert!(args.model.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_positional_question() {
        let args = CliArgs::try_parse_from(["question-solver", "What is 2+2?"]).unwrap();
        assert_eq!(args.question.as_deref(), Some("What is 2+2?"));
    }

    #[test]
    fn test_overrides() {
        let args = CliArgs::try_parse_from([
            "question-solver",
            "-m",
            "gemini-2.5-pro",
            "--api-base",
            "http://localhost:9000",
            "--log-file",
            "/tmp/solver.log",
            "-v",
        ])
        .unwrap();
        assert_eq!(args.model.as_deref(), Some("gemini-2.5-pro"));
        assert_eq!(args.api_base.as_deref(), Some("http://localhost:9000"));
        assert_eq!(args.log_file, Some(PathBuf::from("/tmp/solver.log")));
        assert!(args.verbose);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(CliArgs::try_parse_from(["question-solver", "--iterations", "5"]).is_err());
    }
}
