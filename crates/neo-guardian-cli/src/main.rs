use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use neo_guardian_cli::commands::{analytics, batch, scan};
use neo_guardian_cli::output::{print_footer, print_logo};
use neo_guardian_cli::{BatchArgs, GlobalOptions, ScanArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Near-Earth object hazard assessment console")]
struct Cli {
    #[command(flatten)]
    options: GlobalOptions,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Assess a single observation and show the threat report.
    Scan(ScanArgs),
    /// Assess every observation in a CSV file and print the session log.
    Batch(BatchArgs),
    /// Show the model's feature importance and metadata.
    Analytics,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let started = Instant::now();

    let decorate = !cli.options.no_logo && cli.options.format.allows_decorations();
    if decorate {
        print_logo();
    }

    match &cli.command {
        Command::Scan(args) => scan::handle_scan(&cli.options, args)?,
        Command::Batch(args) => batch::handle_batch(&cli.options, args)?,
        Command::Analytics => analytics::handle_analytics(&cli.options)?,
    }

    if decorate {
        print_footer(started.elapsed());
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
