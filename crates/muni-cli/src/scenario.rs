//! # Scenario Subcommand
//!
//! Checks a proposed set of budget changes against the snapshot's
//! fixed-cost floors and prints the validator's verdict, the service
//! implications, and the aggregate impact.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Args;

use muni_calc::{format_currency, validate_budget_changes, CategoryAdjustment};
use muni_core::CategoryId;

use crate::load_snapshot;

/// Arguments for the `muni scenario` subcommand.
#[derive(Args, Debug)]
pub struct ScenarioArgs {
    /// Snapshot file (JurisdictionData JSON).
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    /// Proposed change as `<categoryId>=<newAmount>`; repeatable.
    #[arg(long = "adjust", value_name = "ID=AMOUNT", required = true)]
    pub adjustments: Vec<String>,
}

/// Execute the scenario subcommand. Returns exit code 0 when the
/// scenario is valid, 1 when it violates a constraint.
pub fn run_scenario(args: &ScenarioArgs) -> anyhow::Result<u8> {
    let pack = load_snapshot(&args.path)?;

    let adjustments = args
        .adjustments
        .iter()
        .map(|spec| parse_adjustment(spec, &pack))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let impact = validate_budget_changes(&pack.budget_categories, &adjustments);

    if impact.valid {
        println!("VALID scenario for {}", pack.jurisdiction.name);
    } else {
        println!("INVALID scenario for {}", pack.jurisdiction.name);
        for error in &impact.errors {
            println!("  ✗ {error}");
        }
    }

    if !impact.service_implications.is_empty() {
        println!("\nService implications:");
        for implication in &impact.service_implications {
            println!(
                "  [{}] {}",
                implication.severity, implication.change_description
            );
        }
    }

    println!(
        "\nBudget change: {}  (annual tax impact: {})",
        format_currency(impact.budget_change, false),
        format_currency(impact.tax_impact, false)
    );

    Ok(u8::from(!impact.valid))
}

/// Parse one `<categoryId>=<newAmount>` spec, resolving the original
/// amount from the snapshot. Unknown ids are passed through with a zero
/// original so the validator reports them in its own error list.
fn parse_adjustment(
    spec: &str,
    pack: &muni_pack::JurisdictionData,
) -> anyhow::Result<CategoryAdjustment> {
    let Some((id, amount)) = spec.split_once('=') else {
        bail!("adjustment {spec:?} is not of the form <categoryId>=<newAmount>");
    };
    let category_id = CategoryId::new(id)
        .with_context(|| format!("adjustment {spec:?} has an empty category id"))?;
    let new_amount: f64 = amount
        .parse()
        .with_context(|| format!("adjustment {spec:?} has a non-numeric amount"))?;

    let original_amount = pack
        .budget_categories
        .iter()
        .find(|c| c.id == category_id)
        .map(|c| c.amount)
        .unwrap_or(0.0);

    let percent_change = if original_amount != 0.0 {
        ((new_amount - original_amount) / original_amount) * 100.0
    } else {
        0.0
    };

    Ok(CategoryAdjustment {
        category_id,
        original_amount,
        new_amount,
        percent_change,
    })
}
