//! # Campaign 3: Boundary Inputs and Determinism
//!
//! Edge-case inputs (zero budgets, empty lists, degenerate profiles,
//! extreme amounts) must degrade to finite, zeroed figures — never NaN,
//! never a panic — and every computation must be bit-identical across
//! repeated invocations.

use muni_calc::{
    calculate_contribution, everyday_comparison, format_currency, round_daily,
    validate_budget_changes, CategoryAdjustment,
};
use muni_core::{CategoryId, HousingStatus, ResidentProfile};
use muni_pack::{sample_township, JurisdictionData};
use proptest::prelude::*;

fn township_resident() -> ResidentProfile {
    sample_township().average_resident.unwrap()
}

// =========================================================================
// Boundary inputs
// =========================================================================

#[test]
fn zero_total_budget_yields_finite_percent() {
    let mut pack = sample_township();
    pack.jurisdiction.total_budget = 0.0;

    let contribution = calculate_contribution(
        &township_resident(),
        &pack.jurisdiction,
        &pack.revenue_sources,
        &pack.budget_categories,
    );
    assert_eq!(contribution.percent_of_budget, 0.0);
    assert!(contribution.percent_of_budget.is_finite());
}

#[test]
fn empty_lists_degrade_to_zeroed_result() {
    // Callers guard these preconditions; the core must still not panic
    // or emit NaN when they slip through.
    let pack = sample_township();
    let contribution = calculate_contribution(
        &township_resident(),
        &pack.jurisdiction,
        &[],
        &[],
    );
    assert_eq!(contribution.total_annual, 0.0);
    assert!(contribution.service_allocations.is_empty());
    assert!(contribution.total_daily.is_finite());
}

#[test]
fn zero_income_zero_household() {
    let pack = sample_township();
    let mut resident = township_resident();
    resident.household_income = 0.0;
    resident.household_size = 0.0;
    resident.home_value = None;

    let contribution = calculate_contribution(
        &resident,
        &pack.jurisdiction,
        &pack.revenue_sources,
        &pack.budget_categories,
    );
    // Only the flat per-resident permit estimate survives.
    assert!((contribution.total_annual - 62.5).abs() < 1e-9);
    assert!(contribution.breakdown.utility_fees >= 0.0);
}

#[test]
fn extreme_amounts_stay_finite() {
    let pack = sample_township();
    let mut resident = township_resident();
    resident.household_income = 1e12;
    resident.home_value = Some(1e12);

    let contribution = calculate_contribution(
        &resident,
        &pack.jurisdiction,
        &pack.revenue_sources,
        &pack.budget_categories,
    );
    assert!(contribution.total_annual.is_finite());
    assert!(contribution.percent_of_budget.is_finite());
    for allocation in &contribution.service_allocations {
        assert!(allocation.daily.is_finite());
    }
}

#[test]
fn validator_handles_every_adjustment_missing() {
    let pack = sample_township();
    let adjustments: Vec<CategoryAdjustment> = (0..3)
        .map(|i| CategoryAdjustment {
            category_id: CategoryId::new(format!("ghost-{i}")).unwrap(),
            original_amount: 100.0,
            new_amount: 200.0,
            percent_change: 100.0,
        })
        .collect();

    let impact = validate_budget_changes(&pack.budget_categories, &adjustments);
    assert!(!impact.valid);
    assert_eq!(impact.errors.len(), 3);
    assert_eq!(impact.errors[0], "Category ghost-0 not found");
    // Nothing was found, so the budget itself is unchanged.
    assert_eq!(impact.budget_change, 0.0);
    assert_eq!(impact.tax_impact, 300.0);
    assert!(impact.service_implications.is_empty());
}

#[test]
fn comparison_handles_degenerate_amounts() {
    for amount in [0.0, -5.0, 0.0001, 1e9] {
        let phrase = everyday_comparison(amount);
        assert!(!phrase.is_empty());
    }
}

#[test]
fn currency_formatting_extremes() {
    assert_eq!(format_currency(0.004, true), "$0.00");
    assert_eq!(format_currency(-0.004, true), "-$0.00");
    assert_eq!(format_currency(999_999_999.99, true), "$999,999,999.99");
}

// =========================================================================
// Determinism
// =========================================================================

#[test]
fn contribution_is_bit_identical_across_runs() {
    let pack = sample_township();
    let resident = township_resident();

    let first = calculate_contribution(
        &resident,
        &pack.jurisdiction,
        &pack.revenue_sources,
        &pack.budget_categories,
    );
    for _ in 0..10 {
        let again = calculate_contribution(
            &resident,
            &pack.jurisdiction,
            &pack.revenue_sources,
            &pack.budget_categories,
        );
        assert_eq!(again, first);
    }
}

#[test]
fn validator_is_bit_identical_across_runs() {
    let pack = sample_township();
    let adjustments = [
        CategoryAdjustment {
            category_id: CategoryId::new("safety-services").unwrap(),
            original_amount: 980_000.0,
            new_amount: 850_000.0,
            percent_change: -13.26,
        },
        CategoryAdjustment {
            category_id: CategoryId::new("parks-recreation").unwrap(),
            original_amount: 380_000.0,
            new_amount: 500_000.0,
            percent_change: 31.58,
        },
    ];

    let first = validate_budget_changes(&pack.budget_categories, &adjustments);
    for _ in 0..10 {
        assert_eq!(
            validate_budget_changes(&pack.budget_categories, &adjustments),
            first
        );
    }
}

#[test]
fn export_is_deterministic() {
    let a = sample_township().to_json().unwrap();
    let b = sample_township().to_json().unwrap();
    assert_eq!(a, b);
}

#[test]
fn inputs_are_not_mutated() {
    let pack = sample_township();
    let pristine = pack.clone();
    let resident = township_resident();

    let _ = calculate_contribution(
        &resident,
        &pack.jurisdiction,
        &pack.revenue_sources,
        &pack.budget_categories,
    );
    let _ = validate_budget_changes(
        &pack.budget_categories,
        &[CategoryAdjustment {
            category_id: CategoryId::new("administration").unwrap(),
            original_amount: 485_000.0,
            new_amount: 100_000.0,
            percent_change: -79.4,
        }],
    );

    assert_eq!(pack, pristine);
}

// =========================================================================
// Properties
// =========================================================================

proptest! {
    #[test]
    fn prop_round_daily_lands_on_multiples(
        amount in 0.0f64..10_000.0,
        step in prop::sample::select(vec![0.01, 0.05, 0.1, 0.25, 1.0]),
    ) {
        let rounded = round_daily(amount, step);
        let multiples = rounded / step;
        prop_assert!((multiples - multiples.round()).abs() < 1e-6);
        prop_assert!((rounded - amount).abs() <= step / 2.0 + 1e-9);
    }

    #[test]
    fn prop_renters_never_pay_property_tax(
        income in 0.0f64..1_000_000.0,
        home in proptest::option::of(1.0f64..5_000_000.0),
    ) {
        let pack = sample_township();
        let mut resident = township_resident();
        resident.housing_status = HousingStatus::Rent;
        resident.household_income = income;
        resident.home_value = home;

        let contribution = calculate_contribution(
            &resident,
            &pack.jurisdiction,
            &pack.revenue_sources,
            &pack.budget_categories,
        );
        prop_assert_eq!(contribution.breakdown.property_tax, 0.0);
    }

    #[test]
    fn prop_non_workers_never_pay_wage_tax(income in 0.0f64..1_000_000.0) {
        let pack = sample_township();
        let mut resident = township_resident();
        resident.works_locally = false;
        resident.household_income = income;

        let contribution = calculate_contribution(
            &resident,
            &pack.jurisdiction,
            &pack.revenue_sources,
            &pack.budget_categories,
        );
        prop_assert_eq!(contribution.breakdown.wage_tax, 0.0);
    }

    #[test]
    fn prop_valid_iff_no_errors(
        new_amount in 0.0f64..2_000_000.0,
    ) {
        let pack = sample_township();
        let impact = validate_budget_changes(
            &pack.budget_categories,
            &[CategoryAdjustment {
                category_id: CategoryId::new("safety-services").unwrap(),
                original_amount: 980_000.0,
                new_amount,
                percent_change: ((new_amount - 980_000.0) / 980_000.0) * 100.0,
            }],
        );
        prop_assert_eq!(impact.valid, impact.errors.is_empty());
        // The floor is 735k: below it exactly one error, at or above none.
        if new_amount < 735_000.0 {
            prop_assert_eq!(impact.errors.len(), 1);
        } else {
            prop_assert!(impact.errors.is_empty());
        }
    }
}

// Validation must reject what the calculator cannot guard against.
#[test]
fn validation_gates_calculator_preconditions() {
    let mut pack = sample_township();
    pack.budget_categories.clear();
    assert!(pack.validate().is_err());

    let json = pack.to_json().unwrap();
    let reparsed = JurisdictionData::from_json(&json).unwrap();
    assert!(reparsed.validate().is_err());
}
