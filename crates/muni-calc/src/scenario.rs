//! # Budget Scenario Validator
//!
//! Evaluates a hypothetical set of per-category budget changes against
//! each category's fixed-cost floor and describes the service impact in
//! plain language. Constraint violations do not abort the evaluation:
//! the scenario is marked invalid, but the aggregate numbers are still
//! computed so callers can show "what would happen" alongside "why it's
//! not allowed".

use serde::{Deserialize, Serialize};

use muni_core::{BudgetCategory, CategoryId};

use crate::format::format_currency;

/// One proposed change to a budget category, recorded against the
/// category's original amount.
///
/// `original_amount` is carried in the record (not re-derived during
/// validation) — a scenario session captures originals when the
/// adjustment is made, so the record stays meaningful even if the
/// underlying dataset is later replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAdjustment {
    /// The category being adjusted.
    pub category_id: CategoryId,
    /// The category's amount when the scenario started, USD.
    pub original_amount: f64,
    /// The proposed amount, USD.
    pub new_amount: f64,
    /// Percent change relative to the original amount.
    pub percent_change: f64,
}

/// Qualitative weight of a service implication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Routine adjustment; residents are unlikely to notice.
    Low,
    /// Noticeable capacity change.
    Medium,
    /// Service-level change residents will feel.
    High,
}

impl Severity {
    /// Returns the snake_case string identifier for this severity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A human-readable description of what one adjustment does to a
/// service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceImplication {
    /// The affected category.
    pub category_id: CategoryId,
    /// Category display name.
    pub category_name: String,
    /// Plain-language description of the change.
    pub change_description: String,
    /// Qualitative weight.
    pub severity: Severity,
}

/// The validator's complete verdict on a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioImpact {
    /// True when no errors were recorded.
    pub valid: bool,
    /// Human-readable problems: unknown categories and fixed-floor
    /// violations.
    pub errors: Vec<String>,
    /// Net annual change summed across all adjustments, USD. Documented
    /// as the change distributed across residents, but currently carries
    /// the aggregate value — see DESIGN.md before reading this as
    /// per-resident.
    pub tax_impact: f64,
    /// Net change to the total budget (positive = increase), counting
    /// only adjustments whose category exists.
    pub budget_change: f64,
    /// One entry per non-zero adjustment, in adjustment order.
    pub service_implications: Vec<ServiceImplication>,
}

/// Validate a set of proposed category adjustments against the original
/// budget.
///
/// Pure: `original` is never mutated, and identical inputs produce
/// identical output. Unknown category ids are recorded as errors and
/// skipped; processing always continues through the full adjustment
/// list.
pub fn validate_budget_changes(
    original: &[BudgetCategory],
    adjustments: &[CategoryAdjustment],
) -> ScenarioImpact {
    let mut errors = Vec::new();
    let mut service_implications = Vec::new();

    let original_total: f64 = original.iter().map(|c| c.amount).sum();
    let mut new_total = original_total;

    for adjustment in adjustments {
        let Some(category) = original.iter().find(|c| c.id == adjustment.category_id) else {
            errors.push(format!("Category {} not found", adjustment.category_id));
            continue;
        };

        let fixed_amount = category.fixed_amount();
        let change = adjustment.new_amount - adjustment.original_amount;
        new_total += change;

        if adjustment.new_amount < fixed_amount {
            errors.push(format!(
                "{} cannot go below {} due to: {}",
                category.name,
                format_currency(fixed_amount, false),
                constraint_reasons(category)
            ));
        }

        if change != 0.0 {
            let percent_change = (change / category.amount) * 100.0;
            let name = category.name.to_lowercase();

            let (change_description, severity) = if percent_change < -20.0 {
                (
                    format!("Significant reduction in {name} services"),
                    Severity::High,
                )
            } else if percent_change < -10.0 {
                (
                    format!("Moderate reduction in {name} capacity"),
                    Severity::Medium,
                )
            } else if percent_change < 0.0 {
                (format!("Minor adjustments to {name}"), Severity::Low)
            } else if percent_change > 20.0 {
                (
                    format!("Major expansion of {name} services"),
                    Severity::Low,
                )
            } else {
                (format!("Enhanced {name} capacity"), Severity::Low)
            };

            service_implications.push(ServiceImplication {
                category_id: category.id.clone(),
                category_name: category.name.clone(),
                change_description,
                severity,
            });
        }
    }

    // Summed across ALL adjustments, including ones whose category was
    // not found — kept identical to budget_change in the normal case.
    let total_change: f64 = adjustments
        .iter()
        .map(|a| a.new_amount - a.original_amount)
        .sum();

    ScenarioImpact {
        valid: errors.is_empty(),
        errors,
        tax_impact: total_change,
        budget_change: new_total - original_total,
        service_implications,
    }
}

/// The comma-joined constraint reasons for a category, falling back to
/// "fixed obligations" when none are listed.
fn constraint_reasons(category: &BudgetCategory) -> String {
    match &category.constraints {
        Some(reasons) if !reasons.is_empty() => reasons.join(", "),
        _ => "fixed obligations".to_string(),
    }
}
