//! CLI module

mod commands;
mod progress;

pub use commands::{Cli, Commands, CorruptArgs, RecoverArgs};
pub use progress::ProgressReporter;
