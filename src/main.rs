use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use repofetch::{render_outcome, CloneOperation, Config, GitCli, Workspace};

/// Clone a remote repository into the sandboxed workspace.
#[derive(Debug, Parser)]
#[command(name = "repofetch", version, about)]
struct Cli {
    /// URL of the repository to clone
    repo_url: String,

    /// Destination path, relative to the workspace root
    clone_path: String,

    /// Path to a TOML configuration file (defaults to REPOFETCH_* env vars)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    init_tracing();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::from_env()?,
    };
    debug!(workspace_root = %config.workspace.root.display(), "Loaded configuration");

    let operation = CloneOperation::new(
        config.github,
        Workspace::new(config.workspace.root),
        GitCli,
    );

    let outcome = operation
        .clone_repository(&cli.repo_url, &cli.clone_path)
        .await;
    println!("{}", render_outcome(&outcome));

    Ok(if outcome.is_err() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("repofetch=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
