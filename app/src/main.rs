#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Parser, Subcommand};
use envparse_config::{Config, OutputFormat};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod command;

use command::{
    CommandStrategy, DialectsStrategy, InfoStrategy, InitStrategy, ParseInput, ParseStrategy,
    VersionStrategy,
};

#[derive(Parser)]
#[command(name = "envparse")]
#[command(about = "Extract environment telemetry from network device CLI output", long_about = None)]
struct Cli {
    /// Log at debug level regardless of configuration
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse captured `show environment` output
    Parse {
        /// Files to parse (reads stdin when omitted)
        files: Vec<PathBuf>,

        /// Device dialect: IOS, IOSXE or NXOS
        #[arg(short, long)]
        dialect: Option<String>,

        /// Output format: json or table
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Print per-kind counts after the records
        #[arg(short, long)]
        summary: bool,
    },
    /// List supported dialects
    Dialects,
    /// Initialize configuration
    Init,
    /// Show effective configuration
    Info,
    /// Show version
    Version,
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let level = Config::load_or_default()
                .map_or_else(|_| "info".to_string(), |config| config.logging.level);
            EnvFilter::new(level)
        })
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Commands::Parse {
            files,
            dialect,
            format,
            summary,
        } => ParseStrategy.execute(ParseInput {
            files,
            dialect,
            format,
            summary,
        }),
        Commands::Dialects => DialectsStrategy.execute(()),
        Commands::Init => InitStrategy.execute(()),
        Commands::Info => InfoStrategy.execute(()),
        Commands::Version => VersionStrategy.execute(()),
    }
}
