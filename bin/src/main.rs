//! capest CLI - Capacity estimates for analytics clusters, storage accounts
//! and messaging clusters.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod display;

use commands::Context;
use display::Format;

#[derive(Parser)]
#[command(name = "capest")]
#[command(
    about = "Capacity estimates for analytics clusters, storage accounts and messaging clusters",
    long_about = None
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (only log errors)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    format: Format,

    /// First projected month (YYYY-MM). Defaults to the current month.
    #[arg(long, global = true)]
    start_month: Option<String>,

    /// Configuration file. Defaults to ./capest.toml, then the user config directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate analytics cluster performance
    Adx {
        /// Daily ingestion in TB/day
        #[arg(short, long)]
        ingest: Option<String>,

        /// Number of clusters
        #[arg(short, long)]
        clusters: Option<String>,

        /// Share query to seed the inputs (explicit arguments win)
        #[arg(long)]
        query: Option<String>,
    },

    /// Estimate storage accounts for a daily volume
    Storage {
        /// Daily ingestion volume in TB/day
        #[arg(short = 'd', long)]
        volume: Option<String>,

        /// Share query to seed the inputs (explicit arguments win)
        #[arg(long)]
        query: Option<String>,
    },

    /// Estimate messaging partitions and capacity units
    Messaging {
        #[command(subcommand)]
        action: MessagingAction,
    },

    /// Inspect the effective configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Messaging calculations.
#[derive(Subcommand)]
enum MessagingAction {
    /// Estimate the partitions needed for an ingress rate
    Partitions {
        #[command(flatten)]
        ingress: commands::messaging::IngressArgs,
    },

    /// Check a cluster configuration and project its capacity
    Capacity {
        #[command(flatten)]
        ingress: commands::messaging::IngressArgs,

        #[command(flatten)]
        cluster: commands::messaging::ClusterArgs,
    },
}

/// Configuration actions.
#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file that would be loaded
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // `config path` must work even when the configuration does not load.
    let config_path = cli.config.as_deref();
    let load = || Context::load(config_path, cli.start_month.as_deref(), cli.format);

    match command {
        Commands::Adx {
            ingest,
            clusters,
            query,
        } => commands::adx::adx(
            &load()?,
            ingest.as_deref(),
            clusters.as_deref(),
            query.as_deref(),
        ),
        Commands::Storage { volume, query } => {
            commands::storage::storage(&load()?, volume.as_deref(), query.as_deref())
        }
        Commands::Messaging { action } => match action {
            MessagingAction::Partitions { ingress } => {
                commands::messaging::partitions(&load()?, &ingress)
            }
            MessagingAction::Capacity { ingress, cluster } => {
                commands::messaging::capacity(&load()?, &ingress, &cluster)
            }
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&load()?),
            ConfigAction::Path => commands::config::show_path(config_path),
        },
    }
}

/// Logs to stderr. `RUST_LOG` overrides the verbosity flags.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
