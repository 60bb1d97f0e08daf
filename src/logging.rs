//! Tracing setup.
//!
//! The interactive UI owns the terminal, so logs go to a file. One-shot
//! mode logs to stderr instead.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_DIR_NAME: &str = "question-solver";
const LOG_FILE_NAME: &str = "question-solver.log";

fn env_filter(verbose: bool) -> EnvFilter {
    let default = if verbose {
        "question_solver=debug,info"
    } else {
        "question_solver=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Default log location inside the user cache directory
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(LOG_DIR_NAME)
        .join(LOG_FILE_NAME)
}

/// Initialize logging to a file and return the path being written
pub fn init_file_logger(log_file: Option<PathBuf>, verbose: bool) -> io::Result<PathBuf> {
    let path = log_file.unwrap_or_else(default_log_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false)
                .compact(),
        )
        .try_init()
        .map_err(io::Error::other)?;

    Ok(path)
}

/// Initialize logging to stderr for non-interactive use
pub fn init_stderr_logger(verbose: bool) -> io::Result<()> {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()
        .map_err(io::Error::other)
}
