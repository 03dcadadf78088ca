use anyhow::{Context, Result};
use clap::Parser;
use crossbeam_channel::Receiver;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::Level;

use garble::application::{JobRunner, LogFilter};
use garble::domain::entities::{Event, LogKind};
use garble::domain::services::SignatureCatalog;
use garble::infrastructure::persistence::LocalFileStore;
use garble::presentation::cli::{Cli, Commands, ProgressReporter};
use garble::Settings;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.debug);

    let settings = match &cli.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };

    let mut filter = LogFilter::new(cli.only.clone().unwrap_or(settings.log_kinds.clone()));
    if cli.debug && cli.only.is_none() {
        filter.enable(LogKind::Debug);
    }

    let runner = Arc::new(JobRunner::new(Arc::new(LocalFileStore::new())));

    match cli.command {
        Commands::Corrupt(args) => {
            let config = args.merge_into(settings.corruption);
            config.validate().context("Invalid corruption options")?;

            let events = runner.corrupt_stream(args.paths, config);
            report(events, &filter, cli.json, "Corrupting...")
        }
        Commands::Recover(args) => {
            let config = args.merge_into(settings.recovery);
            config.validate().context("Invalid recovery options")?;

            let events = runner.recover_stream(args.paths, config);
            report(events, &filter, cli.json, "Recovering...")
        }
        Commands::Signatures => {
            print_signatures();
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_tracing(verbose: bool, debug: bool) {
    let level = if debug {
        Level::DEBUG
    } else if verbose {
        Level::INFO
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Drains the event stream, printing what the filter allows
fn report(
    events: Receiver<Event>,
    filter: &LogFilter,
    json: bool,
    label: &str,
) -> Result<ExitCode> {
    let mut progress = if json {
        ProgressReporter::hidden()
    } else {
        ProgressReporter::new(label)
    };

    for event in events {
        progress.record(&event);
        if !filter.allows(event.kind()) {
            continue;
        }
        if json {
            progress.println(serde_json::to_string(&event).context("Failed to encode event")?);
        } else {
            progress.println(format!("[{:<7}] {}", event.kind(), event.message()));
        }
    }

    progress.finish(&format!(
        "Done: {} files processed, {} failed",
        progress.processed(),
        progress.failed()
    ));

    if progress.failed() > 0 {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn print_signatures() {
    let catalog = SignatureCatalog::default();

    println!("{:<6} {:<16} {}", "EXT", "TYPE", "MAGIC");
    println!("{}", "-".repeat(45));
    for entry in catalog.entries() {
        let magic: Vec<String> = entry.magic.iter().map(|b| format!("{:02X}", b)).collect();
        println!(
            "{:<6} {:<16} {}",
            entry.extension,
            entry.file_type().name(),
            magic.join(" ")
        );
    }
}
