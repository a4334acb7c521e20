use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::process::ExitCode;
use tax_updater::cli::{Cli, Commands, ConsoleOutput};
use tax_updater::config::Config;
use tax_updater::taxes::{MySqlRateStore, RateListCommand, RateUpdateCommand};
use tax_updater::ExitStatus;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("{}", format!("Error: {err:#}").white().on_red());
            ExitStatus::Failure.into()
        }
    }
}

async fn run(cli: Cli) -> Result<ExitStatus> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    // Initialize tracing
    let default_filter = if cli.verbose {
        "tax_updater=debug,sqlx=info".to_string()
    } else {
        format!("tax_updater={},sqlx=warn", config.app.log_level)
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Environment: {}", config.app.env);

    // Create database connection pool (connects on first use)
    let pool = config
        .database
        .create_pool()
        .context("Invalid database configuration")?;
    let store = MySqlRateStore::new(pool, config.database.rate_table());

    tracing::debug!("Using tax rate table {}", store.table());

    let mut output = ConsoleOutput::new();
    let status = match &cli.command {
        Commands::RateUpdate(args) => {
            RateUpdateCommand::new(&store)
                .execute(args, &mut output)
                .await?
        }
        Commands::RateList(args) => {
            RateListCommand::new(&store)
                .execute(args, &mut output)
                .await?
        }
    };

    Ok(status)
}
