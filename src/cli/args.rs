//! Command line argument definitions

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tax-updater")]
#[command(about = "Maintenance commands for commerce platform tax rates")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Updates the rate of existing tax rates.
    #[command(name = "tax:rate:update")]
    RateUpdate(RateUpdateArgs),

    /// Lists tax rates by country code and/or rate.
    #[command(name = "tax:rate:list")]
    RateList(RateListArgs),
}

/// Options of `tax:rate:update`
///
/// Numeric options are kept as raw text so the command can report bad or
/// missing values itself instead of failing in the parser.
#[derive(Args, Debug, Clone, Default)]
pub struct RateUpdateArgs {
    /// Tax rate ID
    #[arg(long)]
    pub id: Option<String>,

    /// Tax rate country code.
    #[arg(long)]
    pub country: Option<String>,

    /// Old tax rate.
    #[arg(long, allow_hyphen_values = true)]
    pub old_rate: Option<String>,

    /// New tax rate.
    #[arg(long, allow_hyphen_values = true)]
    pub new_rate: Option<String>,

    /// Dry run: do not save the tax rate.
    #[arg(long)]
    pub dry_run: bool,
}

/// Options of `tax:rate:list`
#[derive(Args, Debug, Clone, Default)]
pub struct RateListArgs {
    /// Tax rate country code.
    #[arg(long)]
    pub country: Option<String>,

    /// Tax rate.
    #[arg(long, allow_hyphen_values = true)]
    pub rate: Option<String>,

    /// Print matching rates as JSON
    #[arg(long)]
    pub json: bool,
}
