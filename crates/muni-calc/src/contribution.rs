//! # Resident Contribution Calculator
//!
//! Maps a household's attributes and a jurisdiction's revenue structure
//! into a dollar breakdown by revenue type, then spreads the total across
//! the jurisdiction's budget categories in proportion to their amounts.
//!
//! ## Formula Table
//!
//! Each revenue source feeds exactly one breakdown bucket; multiple
//! sources of the same type accumulate by addition (real-estate and
//! personal-property levies are both `property_tax` and must compose).
//! A missing rate falls back to a type-specific default so a dataset
//! with partial rate data still produces a usable estimate.
//!
//! | type | contribution | gate |
//! |---|---|---|
//! | property_tax / real estate | home value × assessment ratio × rate | owner with known home value |
//! | property_tax / personal property | vehicles × $25,000 × rate | registered vehicles on record |
//! | income_tax | household income × rate | — |
//! | wage_tax | household income × rate | works locally |
//! | sales_tax | (income × 30%) × rate | — |
//! | utility_fees | monthly fee × household multiplier × 12 | — |
//! | permits_fees, other | flat per-resident estimate | — |
//! | grants | 0 — not resident-funded | — |
//!
//! The 30% sales figure is a fixed spending-estimate ratio, and the
//! utility multiplier (0.7 + 0.15 per person) models usage scaling with
//! household size. These are illustrative approximations, not tax law.

use serde::{Deserialize, Serialize};

use muni_core::{
    BudgetCategory, Jurisdiction, PropertyClass, ResidentProfile, RevenueSource, RevenueType,
    ServiceIcon,
};

use crate::comparison::everyday_comparison;
use crate::format::{format_currency, format_percentage, group_thousands};

// Default rates applied when a source declares none.
const DEFAULT_ASSESSMENT_RATIO: f64 = 1.0;
const DEFAULT_PROPERTY_RATE: f64 = 0.01;
const DEFAULT_PERSONAL_PROPERTY_RATE: f64 = 0.04;
const DEFAULT_INCOME_RATE: f64 = 0.01;
const DEFAULT_WAGE_RATE: f64 = 0.01;
const DEFAULT_SALES_RATE: f64 = 0.01;
const DEFAULT_UTILITY_MONTHLY: f64 = 50.0;
const DEFAULT_PER_RESIDENT_FEE: f64 = 100.0;

/// Fraction of household income assumed spent on taxable purchases.
const SPENDING_ESTIMATE_RATIO: f64 = 0.30;

/// Assumed average vehicle value for personal-property assessment, USD.
const ASSUMED_VEHICLE_VALUE: f64 = 25_000.0;

/// A resident's annual contribution split by revenue type. All buckets
/// are non-negative dollars.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionBreakdown {
    /// Real-estate plus personal-property tax.
    pub property_tax: f64,
    /// Tax on all household income.
    pub income_tax: f64,
    /// Tax on locally earned income.
    pub wage_tax: f64,
    /// Estimated sales tax on household spending.
    pub sales_tax: f64,
    /// Annualized utility charges.
    pub utility_fees: f64,
    /// Permits, licenses, and miscellaneous fees.
    pub other_fees: f64,
}

impl ContributionBreakdown {
    /// Sum of all six buckets.
    pub fn total(&self) -> f64 {
        self.property_tax
            + self.income_tax
            + self.wage_tax
            + self.sales_tax
            + self.utility_fees
            + self.other_fees
    }
}

/// A resident's proportional share of one budget category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAllocation {
    /// Category identifier (kept as the raw slug for rendering layers).
    pub category_id: String,
    /// Category display name.
    pub category_name: String,
    /// Category icon tag.
    pub icon: ServiceIcon,
    /// Category display color.
    pub color: String,
    /// Annual share, USD.
    pub annual: f64,
    /// Monthly share (`annual / 12`).
    pub monthly: f64,
    /// Daily share (`annual / 365`).
    pub daily: f64,
    /// Category display description.
    pub description: String,
}

/// The full derived result for one resident profile. Recomputed from
/// scratch whenever any input changes; never persisted independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidentContribution {
    /// Total annual contribution, USD.
    pub total_annual: f64,
    /// `total_annual / 12`.
    pub total_monthly: f64,
    /// `total_annual / 365`.
    pub total_daily: f64,
    /// Per-revenue-type split.
    pub breakdown: ContributionBreakdown,
    /// The contribution as a percentage of the jurisdiction's total
    /// budget. Zero when the total budget is non-positive.
    pub percent_of_budget: f64,
    /// One entry per budget category, in category order.
    pub service_allocations: Vec<ServiceAllocation>,
}

/// Compute a resident's contribution to their jurisdiction.
///
/// Pure and deterministic: identical inputs yield bit-identical output.
/// Callers are expected to guard the preconditions (non-empty source and
/// category lists, positive total budget); when they don't, the result
/// degrades to zeroed figures with a warning instead of NaN or a panic.
pub fn calculate_contribution(
    resident: &ResidentProfile,
    jurisdiction: &Jurisdiction,
    revenue_sources: &[RevenueSource],
    budget_categories: &[BudgetCategory],
) -> ResidentContribution {
    let breakdown = contribution_breakdown(resident, revenue_sources);
    let total_annual = breakdown.total();

    let percent_of_budget = if jurisdiction.total_budget > 0.0 {
        (total_annual / jurisdiction.total_budget) * 100.0
    } else {
        tracing::warn!(
            jurisdiction = %jurisdiction.id,
            "non-positive total budget — reporting 0% of budget"
        );
        0.0
    };

    ResidentContribution {
        total_annual,
        total_monthly: total_annual / 12.0,
        total_daily: total_annual / 365.0,
        breakdown,
        percent_of_budget,
        service_allocations: allocate_to_services(total_annual, budget_categories),
    }
}

/// Evaluate every revenue source against the resident profile.
fn contribution_breakdown(
    resident: &ResidentProfile,
    revenue_sources: &[RevenueSource],
) -> ContributionBreakdown {
    let mut breakdown = ContributionBreakdown::default();

    for source in revenue_sources {
        match source.revenue_type {
            RevenueType::PropertyTax => {
                breakdown.property_tax += property_tax_contribution(resident, source);
            }
            RevenueType::IncomeTax => {
                breakdown.income_tax +=
                    resident.household_income * source.rate.unwrap_or(DEFAULT_INCOME_RATE);
            }
            RevenueType::WageTax => {
                if resident.works_locally {
                    breakdown.wage_tax +=
                        resident.household_income * source.rate.unwrap_or(DEFAULT_WAGE_RATE);
                }
            }
            RevenueType::SalesTax => {
                let estimated_spending = resident.household_income * SPENDING_ESTIMATE_RATIO;
                breakdown.sales_tax +=
                    estimated_spending * source.rate.unwrap_or(DEFAULT_SALES_RATE);
            }
            RevenueType::UtilityFees => {
                let monthly = source.rate.unwrap_or(DEFAULT_UTILITY_MONTHLY);
                let household_multiplier = 0.7 + resident.household_size * 0.15;
                breakdown.utility_fees += monthly * household_multiplier * 12.0;
            }
            RevenueType::PermitsFees | RevenueType::Other => {
                breakdown.other_fees += source.rate.unwrap_or(DEFAULT_PER_RESIDENT_FEE);
            }
            RevenueType::Grants => {
                // Intergovernmental money; residents contribute nothing.
            }
        }
    }

    breakdown
}

/// Property tax for one source, dispatched on the property class.
fn property_tax_contribution(resident: &ResidentProfile, source: &RevenueSource) -> f64 {
    match source.property_class() {
        PropertyClass::RealEstate => {
            if !resident.owns_valued_home() {
                return 0.0;
            }
            // owns_valued_home() guarantees the value is present.
            let home_value = resident.home_value.unwrap_or(0.0);
            let assessed = home_value * source.base.unwrap_or(DEFAULT_ASSESSMENT_RATIO);
            assessed * source.rate.unwrap_or(DEFAULT_PROPERTY_RATE)
        }
        PropertyClass::PersonalProperty => {
            let vehicles = resident.vehicles_registered.unwrap_or(0);
            if vehicles == 0 {
                return 0.0;
            }
            let assessed = f64::from(vehicles) * ASSUMED_VEHICLE_VALUE;
            assessed * source.rate.unwrap_or(DEFAULT_PERSONAL_PROPERTY_RATE)
        }
    }
}

/// Spread a total contribution across budget categories in proportion to
/// their amounts.
///
/// Invariant: the annual shares sum back to the total (within float
/// tolerance) whenever the category amounts have a positive sum. A
/// non-positive sum is a caller precondition violation; the shares
/// degrade to zero with a warning.
fn allocate_to_services(
    total_contribution: f64,
    budget_categories: &[BudgetCategory],
) -> Vec<ServiceAllocation> {
    let category_total: f64 = budget_categories.iter().map(|c| c.amount).sum();
    if category_total <= 0.0 && !budget_categories.is_empty() {
        tracing::warn!(
            categories = budget_categories.len(),
            "non-positive category total — allocating zero shares"
        );
    }

    budget_categories
        .iter()
        .map(|category| {
            let proportion = if category_total > 0.0 {
                category.amount / category_total
            } else {
                0.0
            };
            let annual = total_contribution * proportion;

            ServiceAllocation {
                category_id: category.id.as_str().to_string(),
                category_name: category.name.clone(),
                icon: category.icon,
                color: category.color.clone(),
                annual,
                monthly: annual / 12.0,
                daily: annual / 365.0,
                description: category.description.clone(),
            }
        })
        .collect()
}

/// Produce the three infographic sentences for a computed contribution:
/// the everyday-purchase comparison, the collective framing, and the
/// share-of-budget perspective (4 decimal places once the share drops
/// below 0.01%, else 2).
pub fn generate_comparison_text(
    contribution: &ResidentContribution,
    jurisdiction: &Jurisdiction,
) -> Vec<String> {
    let daily = contribution.total_daily;
    let mut comparisons = Vec::with_capacity(3);

    comparisons.push(format!(
        "Your daily contribution of {} is {}",
        format_currency(daily, true),
        everyday_comparison(daily)
    ));

    comparisons.push(format!(
        "You're one of {} residents making this work together",
        group_thousands(jurisdiction.population as i64)
    ));

    let decimals = if contribution.percent_of_budget < 0.01 { 4 } else { 2 };
    comparisons.push(format!(
        "Your share is {} of the total budget",
        format_percentage(contribution.percent_of_budget, decimals)
    ));

    comparisons
}

#[cfg(test)]
mod tests {
    use super::*;
    use muni_core::{
        BudgetEmphasis, CategoryId, HousingStatus, JurisdictionConfig, JurisdictionId,
        JurisdictionType, SourceId,
    };
    use proptest::prelude::*;

    fn jurisdiction() -> Jurisdiction {
        Jurisdiction {
            id: JurisdictionId::new("liberty-township").unwrap(),
            name: "Liberty Township".into(),
            jurisdiction_type: JurisdictionType::Township,
            state: "OH".into(),
            population: 3_200,
            median_home_value: 185_000.0,
            total_budget: 2_850_000.0,
            fiscal_year: "2024".into(),
            governance_structure: None,
            config: JurisdictionConfig {
                max_categories: 5,
                emphasis: BudgetEmphasis::SystemsOverDepartments,
                show_fixed_costs: true,
                comparison_phrase: "community system".into(),
                daily_rounding: 0.25,
            },
        }
    }

    fn owner_profile() -> ResidentProfile {
        ResidentProfile {
            id: None,
            jurisdiction_id: JurisdictionId::new("liberty-township").unwrap(),
            housing_status: HousingStatus::Own,
            home_value: Some(200_000.0),
            annual_rent: None,
            household_income: 65_000.0,
            works_locally: true,
            household_size: 2.0,
            monthly_water_usage: None,
            vehicles_registered: None,
        }
    }

    fn source(id: &str, revenue_type: RevenueType, rate: Option<f64>) -> RevenueSource {
        RevenueSource {
            id: SourceId::new(id).unwrap(),
            jurisdiction_id: JurisdictionId::new("liberty-township").unwrap(),
            revenue_type,
            name: id.to_string(),
            amount: 100_000.0,
            rate,
            base: None,
            description: None,
            payer: None,
            residential_share: None,
            property_class: None,
        }
    }

    fn category(id: &str, amount: f64) -> BudgetCategory {
        BudgetCategory {
            id: CategoryId::new(id).unwrap(),
            jurisdiction_id: JurisdictionId::new("liberty-township").unwrap(),
            name: id.to_string(),
            amount,
            fixed_percentage: 50.0,
            icon: ServiceIcon::Building,
            color: "#8b5cf6".into(),
            description: String::new(),
            constraints: None,
            subcategories: None,
        }
    }

    #[test]
    fn end_to_end_owner_scenario() {
        // Owner, $200k home, $65k income, works locally, household of 2.
        // property: 200000 × 1 × 0.01 = 2000; income: 65000 × 0.01 = 650.
        let mut property = source("property-tax", RevenueType::PropertyTax, Some(0.01));
        property.base = Some(1.0);
        let income = source("income-tax", RevenueType::IncomeTax, Some(0.01));

        let result = calculate_contribution(
            &owner_profile(),
            &jurisdiction(),
            &[property, income],
            &[category("a", 1_000_000.0), category("b", 500_000.0)],
        );

        assert_eq!(result.breakdown.property_tax, 2_000.0);
        assert_eq!(result.breakdown.income_tax, 650.0);
        assert_eq!(result.total_annual, 2_650.0);
        assert!((result.total_daily - 7.26).abs() < 0.01);
        assert!((result.total_monthly - 2_650.0 / 12.0).abs() < 1e-9);
    }

    #[test]
    fn renter_pays_no_property_tax() {
        let mut profile = owner_profile();
        profile.housing_status = HousingStatus::Rent;
        // Declared home value must not matter for a renter.
        profile.home_value = Some(500_000.0);

        let property = source("property-tax", RevenueType::PropertyTax, Some(0.02));
        let result = calculate_contribution(
            &profile,
            &jurisdiction(),
            &[property],
            &[category("a", 1.0)],
        );
        assert_eq!(result.breakdown.property_tax, 0.0);
    }

    #[test]
    fn owner_without_home_value_pays_no_property_tax() {
        let mut profile = owner_profile();
        profile.home_value = None;

        let property = source("property-tax", RevenueType::PropertyTax, Some(0.02));
        let result = calculate_contribution(
            &profile,
            &jurisdiction(),
            &[property],
            &[category("a", 1.0)],
        );
        assert_eq!(result.breakdown.property_tax, 0.0);
    }

    #[test]
    fn wage_tax_gated_on_local_work() {
        let mut profile = owner_profile();
        profile.works_locally = false;

        let wage = source("wage-tax", RevenueType::WageTax, Some(0.01));
        let result = calculate_contribution(
            &profile,
            &jurisdiction(),
            &[wage],
            &[category("a", 1.0)],
        );
        assert_eq!(result.breakdown.wage_tax, 0.0);

        profile.works_locally = true;
        let wage = source("wage-tax", RevenueType::WageTax, Some(0.01));
        let result = calculate_contribution(
            &profile,
            &jurisdiction(),
            &[wage],
            &[category("a", 1.0)],
        );
        assert_eq!(result.breakdown.wage_tax, 650.0);
    }

    #[test]
    fn assessment_ratio_discounts_property_tax() {
        // 200000 × 0.35 × 0.0089 = 623.
        let mut property = source("property-tax", RevenueType::PropertyTax, Some(0.0089));
        property.base = Some(0.35);
        let result = calculate_contribution(
            &owner_profile(),
            &jurisdiction(),
            &[property],
            &[category("a", 1.0)],
        );
        assert!((result.breakdown.property_tax - 623.0).abs() < 1e-9);
    }

    #[test]
    fn sales_tax_uses_spending_estimate() {
        // 65000 × 0.30 × 0.0125 = 243.75.
        let sales = source("sales-tax", RevenueType::SalesTax, Some(0.0125));
        let result = calculate_contribution(
            &owner_profile(),
            &jurisdiction(),
            &[sales],
            &[category("a", 1.0)],
        );
        assert!((result.breakdown.sales_tax - 243.75).abs() < 1e-9);
    }

    #[test]
    fn utility_fees_scale_with_household_size() {
        // rate 75: 75 × (0.7 + 2×0.15) × 12 = 900.
        let utility = source("utility-fees", RevenueType::UtilityFees, Some(75.0));
        let result = calculate_contribution(
            &owner_profile(),
            &jurisdiction(),
            &[utility],
            &[category("a", 1.0)],
        );
        assert!((result.breakdown.utility_fees - 900.0).abs() < 1e-9);

        // One-person household at the default $50: 50 × 0.85 × 12 = 510.
        let mut single = owner_profile();
        single.household_size = 1.0;
        let utility = source("utility-fees", RevenueType::UtilityFees, None);
        let result = calculate_contribution(
            &single,
            &jurisdiction(),
            &[utility],
            &[category("a", 1.0)],
        );
        assert!((result.breakdown.utility_fees - 510.0).abs() < 1e-9);
    }

    #[test]
    fn permits_and_other_accumulate() {
        let permits = source("fees-permits", RevenueType::PermitsFees, Some(62.5));
        let misc = source("misc", RevenueType::Other, None);
        let result = calculate_contribution(
            &owner_profile(),
            &jurisdiction(),
            &[permits, misc],
            &[category("a", 1.0)],
        );
        // 62.5 + default 100.
        assert!((result.breakdown.other_fees - 162.5).abs() < 1e-9);
    }

    #[test]
    fn grants_contribute_nothing() {
        let grants = source("state-funding", RevenueType::Grants, None);
        let result = calculate_contribution(
            &owner_profile(),
            &jurisdiction(),
            &[grants],
            &[category("a", 1.0)],
        );
        assert_eq!(result.total_annual, 0.0);
    }

    #[test]
    fn same_type_sources_accumulate() {
        // Real-estate and personal-property levies compose additively.
        let mut real_estate = source("real-estate-tax", RevenueType::PropertyTax, Some(0.01));
        real_estate.base = Some(1.0);
        let mut personal = source("personal-property-tax", RevenueType::PropertyTax, Some(0.04));
        personal.property_class = Some(PropertyClass::PersonalProperty);

        let mut profile = owner_profile();
        profile.vehicles_registered = Some(2);

        let result = calculate_contribution(
            &profile,
            &jurisdiction(),
            &[real_estate, personal],
            &[category("a", 1.0)],
        );
        // 2000 real estate + 2 × 25000 × 0.04 = 2000 personal.
        assert_eq!(result.breakdown.property_tax, 4_000.0);
    }

    #[test]
    fn personal_property_requires_vehicles() {
        let mut personal = source("personal-property-tax", RevenueType::PropertyTax, Some(0.04));
        personal.property_class = Some(PropertyClass::PersonalProperty);

        let result = calculate_contribution(
            &owner_profile(), // vehicles_registered: None
            &jurisdiction(),
            &[personal],
            &[category("a", 1.0)],
        );
        assert_eq!(result.breakdown.property_tax, 0.0);
    }

    #[test]
    fn personal_property_default_rate() {
        let mut personal = source("personal-property-tax", RevenueType::PropertyTax, None);
        personal.property_class = Some(PropertyClass::PersonalProperty);

        let mut profile = owner_profile();
        profile.vehicles_registered = Some(1);

        let result = calculate_contribution(
            &profile,
            &jurisdiction(),
            &[personal],
            &[category("a", 1.0)],
        );
        // 1 × 25000 × 0.04 default.
        assert_eq!(result.breakdown.property_tax, 1_000.0);
    }

    #[test]
    fn allocation_conserves_total() {
        let income = source("income-tax", RevenueType::IncomeTax, Some(0.015));
        let categories = [
            category("safety", 980_000.0),
            category("roads", 720_000.0),
            category("admin", 485_000.0),
            category("parks", 380_000.0),
            category("cemetery", 285_000.0),
        ];
        let result = calculate_contribution(
            &owner_profile(),
            &jurisdiction(),
            &[income],
            &categories,
        );
        let allocated: f64 = result.service_allocations.iter().map(|a| a.annual).sum();
        let relative = (allocated - result.total_annual).abs() / result.total_annual;
        assert!(relative < 1e-6, "relative drift {relative}");
    }

    #[test]
    fn allocation_preserves_category_order_and_metadata() {
        let income = source("income-tax", RevenueType::IncomeTax, None);
        let categories = [category("first", 100.0), category("second", 300.0)];
        let result = calculate_contribution(
            &owner_profile(),
            &jurisdiction(),
            &[income],
            &categories,
        );
        assert_eq!(result.service_allocations.len(), 2);
        assert_eq!(result.service_allocations[0].category_id, "first");
        assert_eq!(result.service_allocations[1].category_id, "second");
        // second carries 3x the share of first.
        assert!(
            (result.service_allocations[1].annual - 3.0 * result.service_allocations[0].annual)
                .abs()
                < 1e-9
        );
    }

    #[test]
    fn idempotent_recomputation() {
        let mut property = source("property-tax", RevenueType::PropertyTax, Some(0.0089));
        property.base = Some(0.35);
        let sources = [
            property,
            source("income-tax", RevenueType::IncomeTax, Some(0.01)),
            source("utility-fees", RevenueType::UtilityFees, Some(50.0)),
        ];
        let categories = [category("a", 980_000.0), category("b", 720_000.0)];

        let first = calculate_contribution(
            &owner_profile(),
            &jurisdiction(),
            &sources,
            &categories,
        );
        for _ in 0..5 {
            let again = calculate_contribution(
                &owner_profile(),
                &jurisdiction(),
                &sources,
                &categories,
            );
            assert_eq!(again, first);
        }
    }

    #[test]
    fn zero_total_budget_reports_zero_percent() {
        let mut j = jurisdiction();
        j.total_budget = 0.0;
        let income = source("income-tax", RevenueType::IncomeTax, None);
        let result =
            calculate_contribution(&owner_profile(), &j, &[income], &[category("a", 1.0)]);
        assert_eq!(result.percent_of_budget, 0.0);
        assert!(result.percent_of_budget.is_finite());
    }

    #[test]
    fn zero_category_total_degrades_to_zero_shares() {
        let income = source("income-tax", RevenueType::IncomeTax, None);
        let result = calculate_contribution(
            &owner_profile(),
            &jurisdiction(),
            &[income],
            &[category("a", 0.0), category("b", 0.0)],
        );
        for alloc in &result.service_allocations {
            assert_eq!(alloc.annual, 0.0);
            assert!(alloc.daily.is_finite());
        }
    }

    #[test]
    fn percent_of_budget_matches_ratio() {
        let income = source("income-tax", RevenueType::IncomeTax, Some(0.01));
        let result = calculate_contribution(
            &owner_profile(),
            &jurisdiction(),
            &[income],
            &[category("a", 1.0)],
        );
        // 650 / 2,850,000 × 100.
        assert!((result.percent_of_budget - 0.02280701754385965).abs() < 1e-12);
    }

    #[test]
    fn comparison_text_shape() {
        let income = source("income-tax", RevenueType::IncomeTax, Some(0.01));
        let result = calculate_contribution(
            &owner_profile(),
            &jurisdiction(),
            &[income],
            &[category("a", 1.0)],
        );
        let text = generate_comparison_text(&result, &jurisdiction());
        assert_eq!(text.len(), 3);
        assert!(text[0].starts_with("Your daily contribution of $"));
        assert!(text[1].contains("3,200 residents"));
        assert!(text[2].contains("% of the total budget"));
    }

    #[test]
    fn comparison_text_small_share_gets_more_decimals() {
        let mut j = jurisdiction();
        j.total_budget = 1_000_000_000.0;
        let income = source("income-tax", RevenueType::IncomeTax, Some(0.01));
        let result =
            calculate_contribution(&owner_profile(), &j, &[income], &[category("a", 1.0)]);
        assert!(result.percent_of_budget < 0.01);
        let text = generate_comparison_text(&result, &j);
        // 650 / 1e9 × 100 = 0.000065% → rendered with 4 decimals.
        assert!(text[2].contains("0.0001%"), "got: {}", text[2]);
    }

    proptest! {
        #[test]
        fn prop_allocation_conservation(
            amounts in proptest::collection::vec(1.0f64..5_000_000.0, 1..12),
            income in 0.0f64..500_000.0,
        ) {
            let mut profile = owner_profile();
            profile.household_income = income;
            let categories: Vec<BudgetCategory> = amounts
                .iter()
                .enumerate()
                .map(|(i, amt)| category(&format!("cat-{i}"), *amt))
                .collect();
            let income_src = source("income-tax", RevenueType::IncomeTax, Some(0.0125));

            let result = calculate_contribution(
                &profile,
                &jurisdiction(),
                &[income_src],
                &categories,
            );

            let allocated: f64 = result.service_allocations.iter().map(|a| a.annual).sum();
            if result.total_annual > 0.0 {
                let relative = (allocated - result.total_annual).abs() / result.total_annual;
                prop_assert!(relative < 1e-6);
            } else {
                prop_assert_eq!(allocated, 0.0);
            }
        }

        #[test]
        fn prop_breakdown_buckets_non_negative(
            income in 0.0f64..1_000_000.0,
            home in proptest::option::of(0.0f64..5_000_000.0),
            size in 0.5f64..12.0,
            works in proptest::bool::ANY,
        ) {
            let mut profile = owner_profile();
            profile.household_income = income;
            profile.home_value = home;
            profile.household_size = size;
            profile.works_locally = works;

            let mut property = source("property-tax", RevenueType::PropertyTax, Some(0.012));
            property.base = Some(0.35);
            let sources = [
                property,
                source("income-tax", RevenueType::IncomeTax, None),
                source("wage-tax", RevenueType::WageTax, None),
                source("sales-tax", RevenueType::SalesTax, None),
                source("utility-fees", RevenueType::UtilityFees, None),
                source("fees", RevenueType::PermitsFees, None),
            ];

            let result = calculate_contribution(
                &profile,
                &jurisdiction(),
                &sources,
                &[category("a", 100.0)],
            );
            let b = result.breakdown;
            for bucket in [
                b.property_tax,
                b.income_tax,
                b.wage_tax,
                b.sales_tax,
                b.utility_fees,
                b.other_fees,
            ] {
                prop_assert!(bucket >= 0.0);
                prop_assert!(bucket.is_finite());
            }
            prop_assert!((result.total_annual - b.total()).abs() < 1e-9);
        }
    }
}
