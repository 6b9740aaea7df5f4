use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use duolog_core::config;
use duolog_core::logger::{CliLogger, CliLoggerLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;

use commands::cli;
use error::{exit_code_for_error, CliError};

#[tokio::main]
async fn main() {
    let exit = match real_main().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            exit_code_for_error(&e)
        }
    };

    std::process::exit(exit);
}

async fn real_main() -> Result<i32, CliError> {
    let args = cli::Args::parse();
    let mut cfg = match args.config.as_deref() {
        Some(path) => config::load_from(path)?,
        None => config::load_default()?,
    };
    args.apply_to(&mut cfg.logging);

    let logger = Arc::new(CliLogger::from_config(&cfg.logging)?);
    init_tracing(logger.clone())?;
    tracing::debug!(split = logger.is_split(), "logger configured");

    dispatch(args.command, logger).await
}

async fn dispatch(cmd: cli::Commands, logger: Arc<CliLogger>) -> Result<i32, CliError> {
    match cmd {
        cli::Commands::Log(log_args) => commands::log::run(&log_args, &logger),
        cli::Commands::Run(run_args) => {
            commands::run::run(run_args, logger, &mut std::io::stdout()).await
        },
    }
}

/// Library diagnostics go through the same logger as user-facing output.
fn init_tracing(logger: Arc<CliLogger>) -> anyhow::Result<()> {
    let filter = match std::env::var("RUST_LOG") {
        Ok(v) if !v.trim().is_empty() => EnvFilter::from_default_env(),
        _ => EnvFilter::try_new("warn").context("invalid default log filter")?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(CliLoggerLayer::new(logger))
        .try_init()
        .context("install tracing subscriber")?;

    Ok(())
}
