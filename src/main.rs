use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use memkv::Store;
use memkv::config::Config;
use memkv::shell::Shell;
use tokio::io::BufReader;
use tracing::info;

/// In-memory path-keyed key/value store with a command shell
#[derive(Debug, Parser)]
#[command(name = "memkv", version)]
struct Args {
    /// TOML config file with log settings and seed data
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level, overrides the config file (RUST_LOG takes precedence)
    #[arg(long)]
    log_level: Option<String>,

    /// Print a prompt before each command
    #[arg(long)]
    prompt: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    let level = args.log_level.as_deref().unwrap_or(&config.log.level);

    // Initialize logging, on stderr so replies own stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting memkv {}", env!("CARGO_PKG_VERSION"));

    let store = Arc::new(Store::new());
    config.seed(&store);
    if let Some(path) = &args.config {
        info!("Loaded {} entries from {}", store.len(), path.display());
    }

    let mut shell = Shell::new(store);
    if args.prompt {
        shell = shell.with_prompt("memkv> ");
    }

    shell
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await?;

    Ok(())
}
