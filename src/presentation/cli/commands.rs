//! CLI commands using clap

use crate::application::dto::{CorruptionConfig, RecoveryConfig};
use crate::domain::entities::{CorruptionMethod, LogKind};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Garble - header corruption and recovery tool
///
/// Damages file headers with a chosen method to simulate data loss, and
/// tries to rebuild damaged headers from known magic numbers.
#[derive(Parser)]
#[command(name = "garble")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Corrupt file headers and attempt to recover them", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// JSON settings file providing defaults
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print one JSON event per line instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Only print these log kinds (info, warning, error, debug, success)
    #[arg(long, global = true, value_delimiter = ',')]
    pub only: Option<Vec<LogKind>>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Corrupt files or whole directory trees
    Corrupt(CorruptArgs),

    /// Try to repair corrupted file headers
    Recover(RecoverArgs),

    /// List the known file signatures
    Signatures,
}

#[derive(Args, Debug, Clone)]
pub struct CorruptArgs {
    /// Files or directories to corrupt
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Corruption method (header-flip, random-bytes, zero-fill, reverse-bytes,
    /// bit-shift-left, overwrite-all)
    #[arg(short, long)]
    pub method: Option<CorruptionMethod>,

    /// Number of leading bytes to corrupt
    #[arg(long)]
    pub header_size: Option<usize>,

    /// Write output to the destination directory instead of next to the source
    #[arg(short, long)]
    pub keep_original: bool,

    /// Destination directory used with --keep-original
    #[arg(short = 'o', long)]
    pub dest: Option<PathBuf>,

    /// Seed for the randomized methods
    #[arg(long)]
    pub seed: Option<u64>,
}

impl CorruptArgs {
    /// Applies command-line overrides on top of `config`
    pub fn merge_into(&self, mut config: CorruptionConfig) -> CorruptionConfig {
        if let Some(method) = self.method {
            config.method = method;
        }
        if let Some(header_size) = self.header_size {
            config.header_size = header_size;
        }
        if self.keep_original {
            config.keep_original = true;
        }
        if let Some(dest) = &self.dest {
            config.destination_dir = Some(dest.clone());
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        config
    }
}

#[derive(Args, Debug, Clone)]
pub struct RecoverArgs {
    /// Files to recover
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Overwrite the source file with the repaired bytes
    #[arg(long)]
    pub replace: bool,

    /// Directory receiving repaired copies
    #[arg(short = 'o', long, conflicts_with = "replace")]
    pub dest: Option<PathBuf>,

    /// Number of leading bytes the unflip and patch rules consider
    #[arg(long)]
    pub header_size: Option<usize>,
}

impl RecoverArgs {
    /// Applies command-line overrides on top of `config`
    pub fn merge_into(&self, mut config: RecoveryConfig) -> RecoveryConfig {
        if self.replace {
            config.replace_original = true;
        }
        if let Some(dest) = &self.dest {
            config.destination_dir = Some(dest.clone());
        }
        if let Some(header_size) = self.header_size {
            config.header_size = header_size;
        }
        config
    }
}
