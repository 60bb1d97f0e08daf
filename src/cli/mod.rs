//! CLI argument parsing for the question solver.

mod args;

pub use args::{parse_args, CliArgs, VERSION};
