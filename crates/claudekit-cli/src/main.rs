mod cmd;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "claudekit",
    about = "Install a Claude configuration bundle into ~/.claude, with timestamped backups",
    version,
    propagate_version = true
)]
struct Cli {
    /// Home directory holding .claude and its backups (default: $HOME)
    #[arg(long, global = true, env = "CLAUDEKIT_HOME")]
    home: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Install the bundle, backing up any existing configuration first
    Install {
        /// Bundle directory containing CLAUDE.md (default: current directory)
        #[arg(long, default_value = ".")]
        source: PathBuf,
    },

    /// Replace ~/.claude with the most recent backup
    Uninstall {
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List backup directories, oldest first
    Backups,

    /// Show what is currently installed
    Status,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let result = resolve_home(cli.home).and_then(|home| match cli.command {
        Commands::Install { source } => cmd::install::run(&home, &source, cli.json),
        Commands::Uninstall { yes } => cmd::uninstall::run(&home, yes, cli.json),
        Commands::Backups => cmd::backups::run(&home, cli.json),
        Commands::Status => cmd::status::run(&home, cli.json),
    });

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn resolve_home(explicit: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    match explicit {
        Some(p) => Ok(p),
        None => Ok(claudekit_core::paths::home_dir()?),
    }
}
