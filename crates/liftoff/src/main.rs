//! Liftoff - interactive release publisher

mod flow;
mod prompt;

use std::io;

use clap::Parser;
use console::style;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use liftoff_core::ReleaseConfig;
use liftoff_discord::DiscordAnnouncer;
use liftoff_github::GitHubReleases;

use flow::ReleaseFlow;
use prompt::TermPrompter;

/// Interactive GitHub release publisher with Discord announcements
#[derive(Debug, Parser)]
#[command(name = "liftoff")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Working directory
    #[arg(short = 'C', long)]
    directory: Option<std::path::PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Tokens may live in a local .env next to the project
    let _ = dotenvy::dotenv();
    let _guard = init_tracing();

    let cli = Cli::parse();
    if let Some(dir) = &cli.directory {
        std::env::set_current_dir(dir)?;
    }

    println!("{}", style("Liftoff - release publisher").bold());
    println!();

    let config = match ReleaseConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            println!("{} {}", style("✗").red().bold(), e);
            return Ok(());
        }
    };

    let host = GitHubReleases::new(&config)?;
    let announcer = DiscordAnnouncer::new(&config);
    let mut prompter = TermPrompter;
    let workdir = std::env::current_dir()?;

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(
        ReleaseFlow::new(&config, workdir, &mut prompter, &host, &announcer).run(),
    );

    match result {
        Err(e) if is_interrupted(&e) => {
            println!();
            println!("{}", style("Interrupted.").yellow());
            Ok(())
        }
        other => other,
    }
}

/// An operator Ctrl-C surfaces from the prompt as an interrupted read.
fn is_interrupted(error: &anyhow::Error) -> bool {
    error.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|e| e.kind() == io::ErrorKind::Interrupted)
    })
}

/// Set up tracing with two layers:
/// - Console: controlled by RUST_LOG (default: warn)
/// - File: always debug-level JSON to ~/.liftoff/logs/
fn init_tracing() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Some(log_dir) = log_directory() {
        let file_appender = tracing_appender::rolling::daily(&log_dir, "liftoff.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_filter(console_filter),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking)
                    .with_target(true)
                    .with_filter(EnvFilter::new("debug")),
            )
            .init();

        return Some(guard);
    }

    // Fallback: console only
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_filter(console_filter),
        )
        .init();

    None
}

/// Returns the log directory path, creating it if needed.
fn log_directory() -> Option<std::path::PathBuf> {
    let log_dir = dirs::home_dir()?.join(".liftoff").join("logs");
    std::fs::create_dir_all(&log_dir).ok()?;
    Some(log_dir)
}
