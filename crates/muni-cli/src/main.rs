//! # muni CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Muni Budget Stack CLI — local government contribution estimator.
///
/// Validates jurisdiction snapshots, estimates a resident's annual
/// contribution, checks what-if budget scenarios against fixed-cost
/// floors, and emits the authoring template and sample datasets.
#[derive(Parser, Debug)]
#[command(name = "muni", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Validate a jurisdiction snapshot file.
    Validate(muni_cli::validate::ValidateArgs),
    /// Estimate a resident's contribution from a snapshot.
    Contribution(muni_cli::contribution::ContributionArgs),
    /// Check a what-if budget scenario against fixed-cost floors.
    Scenario(muni_cli::scenario::ScenarioArgs),
    /// Print the authoring template snapshot as JSON.
    Template,
    /// Print a built-in sample snapshot as JSON.
    Sample(muni_cli::data::SampleArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let code = match cli.command {
        Commands::Validate(args) => muni_cli::validate::run_validate(&args)?,
        Commands::Contribution(args) => muni_cli::contribution::run_contribution(&args)?,
        Commands::Scenario(args) => muni_cli::scenario::run_scenario(&args)?,
        Commands::Template => muni_cli::data::run_template()?,
        Commands::Sample(args) => muni_cli::data::run_sample(&args)?,
    };

    std::process::exit(i32::from(code));
}
