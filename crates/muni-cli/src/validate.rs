//! # Validate Subcommand
//!
//! Structural validation of a jurisdiction snapshot file. Validation is
//! the gate between imported data and the computation core: a snapshot
//! that passes here satisfies the calculator's preconditions.

use std::path::PathBuf;

use clap::Args;

use crate::load_snapshot;

/// Arguments for the `muni validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Snapshot file to validate (JurisdictionData JSON).
    #[arg(value_name = "FILE")]
    pub path: PathBuf,
}

/// Execute the validate subcommand.
///
/// Returns exit code 0 when the snapshot is valid, 1 when validation
/// fails; operational errors (unreadable file, malformed JSON) propagate
/// as `anyhow::Error`.
pub fn run_validate(args: &ValidateArgs) -> anyhow::Result<u8> {
    let pack = load_snapshot(&args.path)?;

    match pack.validate() {
        Ok(()) => {
            println!(
                "OK: {} ({} categories, {} revenue sources)",
                pack.jurisdiction.name,
                pack.budget_categories.len(),
                pack.revenue_sources.len()
            );
            Ok(0)
        }
        Err(errors) => {
            eprintln!(
                "INVALID: {} — {} problem(s)",
                args.path.display(),
                errors.len()
            );
            for error in &errors {
                eprintln!("  - {error}");
            }
            Ok(1)
        }
    }
}
