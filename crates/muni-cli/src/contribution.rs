//! # Contribution Subcommand
//!
//! Computes and prints a resident contribution estimate from a snapshot
//! file, driving the same store → calculator path the application uses.
//! The profile starts from the snapshot's average resident (or a
//! neutral renter profile when none is shipped) and individual fields
//! are overridable by flags.

use std::path::PathBuf;

use clap::Args;

use muni_calc::{format_currency, format_percentage};
use muni_core::{HousingStatus, ResidentProfile};
use muni_store::BudgetStore;

use crate::load_snapshot;

/// Arguments for the `muni contribution` subcommand.
#[derive(Args, Debug)]
pub struct ContributionArgs {
    /// Snapshot file (JurisdictionData JSON).
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    /// Override: market value of the home (implies ownership).
    #[arg(long, value_name = "USD")]
    pub home_value: Option<f64>,

    /// Override: the household rents (clears any home value).
    #[arg(long, conflicts_with = "home_value")]
    pub rent: bool,

    /// Override: annual household income.
    #[arg(long, value_name = "USD")]
    pub income: Option<f64>,

    /// Override: whether someone in the household works locally.
    #[arg(long, value_name = "BOOL")]
    pub works_locally: Option<bool>,

    /// Override: household size (fractional averages allowed).
    #[arg(long, value_name = "N")]
    pub household_size: Option<f64>,

    /// Override: vehicles registered to the household.
    #[arg(long, value_name = "N")]
    pub vehicles: Option<u32>,
}

/// Execute the contribution subcommand. Returns exit code 0 on success,
/// 1 when the snapshot fails validation.
pub fn run_contribution(args: &ContributionArgs) -> anyhow::Result<u8> {
    let pack = load_snapshot(&args.path)?;
    if let Err(errors) = pack.validate() {
        eprintln!("snapshot failed validation; run `muni validate` for details");
        for error in &errors {
            eprintln!("  - {error}");
        }
        return Ok(1);
    }

    let profile = build_profile(args, &pack);

    let mut store = BudgetStore::new();
    store.load(pack);
    store.set_resident_profile(profile);

    let Some(card) = store.contribution_card() else {
        anyhow::bail!("contribution unavailable after a validated load");
    };
    let jurisdiction = &card.jurisdiction;
    let contribution = &card.contribution;

    println!(
        "{} ({}, {}) — FY {}",
        jurisdiction.name, jurisdiction.jurisdiction_type, jurisdiction.state,
        jurisdiction.fiscal_year
    );
    println!("Resident contribution estimate\n");

    let b = &contribution.breakdown;
    let rows = [
        ("Property tax", b.property_tax),
        ("Income tax", b.income_tax),
        ("Wage tax", b.wage_tax),
        ("Sales tax", b.sales_tax),
        ("Utility fees", b.utility_fees),
        ("Other fees", b.other_fees),
    ];
    for (label, amount) in rows {
        if amount > 0.0 {
            println!("  {label:<14} {:>12}", format_currency(amount, true));
        }
    }
    println!("  {:<14} {:>12}", "Total annual", format_currency(contribution.total_annual, true));
    println!("  {:<14} {:>12}", "Monthly", format_currency(contribution.total_monthly, true));
    println!(
        "  {:<14} {:>12}  (displayed as {})",
        "Daily",
        format_currency(contribution.total_daily, true),
        format_currency(card.rounded_daily, true)
    );

    println!("\nWhere it goes:");
    for allocation in &contribution.service_allocations {
        println!(
            "  {:<28} {:>12}/yr  {:>9}/day",
            allocation.category_name,
            format_currency(allocation.annual, true),
            format_currency(allocation.daily, true)
        );
    }

    println!();
    for line in &card.comparison_lines {
        println!("{line}");
    }
    println!(
        "({} of the {} budget)",
        format_percentage(contribution.percent_of_budget, 4),
        jurisdiction.config.comparison_phrase
    );

    Ok(0)
}

/// Start from the shipped average resident (or a neutral renter) and
/// apply the flag overrides.
fn build_profile(args: &ContributionArgs, pack: &muni_pack::JurisdictionData) -> ResidentProfile {
    let mut profile = pack.average_resident.clone().unwrap_or_else(|| {
        tracing::warn!("snapshot ships no average resident — starting from a neutral profile");
        ResidentProfile {
            id: None,
            jurisdiction_id: pack.jurisdiction.id.clone(),
            housing_status: HousingStatus::Rent,
            home_value: None,
            annual_rent: None,
            household_income: 0.0,
            works_locally: false,
            household_size: 1.0,
            monthly_water_usage: None,
            vehicles_registered: None,
        }
    });

    if args.rent {
        profile.housing_status = HousingStatus::Rent;
        profile.home_value = None;
    }
    if let Some(value) = args.home_value {
        profile.housing_status = HousingStatus::Own;
        profile.home_value = Some(value);
    }
    if let Some(income) = args.income {
        profile.household_income = income;
    }
    if let Some(works) = args.works_locally {
        profile.works_locally = works;
    }
    if let Some(size) = args.household_size {
        profile.household_size = size;
    }
    if let Some(vehicles) = args.vehicles {
        profile.vehicles_registered = Some(vehicles);
    }

    profile
}

#[cfg(test)]
mod tests {
    use super::*;
    use muni_pack::sample_township;

    fn args(path: &str) -> ContributionArgs {
        ContributionArgs {
            path: PathBuf::from(path),
            home_value: None,
            rent: false,
            income: None,
            works_locally: None,
            household_size: None,
            vehicles: None,
        }
    }

    #[test]
    fn profile_defaults_to_average_resident() {
        let pack = sample_township();
        let profile = build_profile(&args("unused.json"), &pack);
        assert_eq!(profile.household_income, 72_000.0);
        assert_eq!(profile.home_value, Some(185_000.0));
    }

    #[test]
    fn rent_flag_clears_home_value() {
        let pack = sample_township();
        let mut a = args("unused.json");
        a.rent = true;
        let profile = build_profile(&a, &pack);
        assert_eq!(profile.housing_status, HousingStatus::Rent);
        assert_eq!(profile.home_value, None);
    }

    #[test]
    fn home_value_flag_implies_ownership() {
        let pack = sample_township();
        let mut a = args("unused.json");
        a.home_value = Some(250_000.0);
        a.income = Some(90_000.0);
        let profile = build_profile(&a, &pack);
        assert_eq!(profile.housing_status, HousingStatus::Own);
        assert_eq!(profile.home_value, Some(250_000.0));
        assert_eq!(profile.household_income, 90_000.0);
    }

    #[test]
    fn missing_average_resident_yields_neutral_profile() {
        let mut pack = sample_township();
        pack.average_resident = None;
        let profile = build_profile(&args("unused.json"), &pack);
        assert_eq!(profile.housing_status, HousingStatus::Rent);
        assert_eq!(profile.household_income, 0.0);
        assert_eq!(profile.household_size, 1.0);
    }
}
