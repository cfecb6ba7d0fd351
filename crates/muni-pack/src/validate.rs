//! # Snapshot Validation
//!
//! Structural validation for imported `JurisdictionData` documents. The
//! computation core assumes its preconditions (non-empty lists, positive
//! totals) — this module is where importing callers establish them.
//!
//! Every check failure is a typed [`PackError`]; validation collects all
//! failures in one pass rather than stopping at the first, so an import
//! dialog can show the user the full repair list.

use thiserror::Error;

use crate::snapshot::JurisdictionData;

/// Relative mismatch between the declared total budget and the category
/// or revenue sums above which the advisory balance warning fires.
const BALANCE_WARN_TOLERANCE: f64 = 0.01;

/// A structural problem in an imported snapshot.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PackError {
    /// The jurisdiction display name is empty.
    #[error("jurisdiction name must be non-empty")]
    EmptyJurisdictionName,

    /// Population must be positive for per-capita figures to exist.
    #[error("jurisdiction population must be positive")]
    NonPositivePopulation,

    /// Total budget must be positive for percent-of-budget to exist.
    #[error("jurisdiction total budget must be positive (got {0})")]
    NonPositiveBudget(f64),

    /// The snapshot ships no budget categories.
    #[error("budget categories must be non-empty")]
    NoBudgetCategories,

    /// The snapshot ships no revenue sources.
    #[error("revenue sources must be non-empty")]
    NoRevenueSources,

    /// A category or source belongs to a different jurisdiction.
    #[error("{kind} {id} belongs to jurisdiction {found}, expected {expected}")]
    ForeignRecord {
        /// "category" or "source".
        kind: &'static str,
        /// The offending record id.
        id: String,
        /// The jurisdiction the record claims.
        found: String,
        /// The snapshot's jurisdiction.
        expected: String,
    },

    /// A category amount is negative.
    #[error("category {id}: amount must be non-negative (got {amount})")]
    NegativeCategoryAmount {
        /// The offending category id.
        id: String,
        /// The rejected amount.
        amount: f64,
    },

    /// A category's fixed percentage is outside 0–100.
    #[error("category {id}: fixedPercentage must be within 0..=100 (got {value})")]
    FixedPercentageOutOfRange {
        /// The offending category id.
        id: String,
        /// The rejected percentage.
        value: f64,
    },

    /// A source's residential share is outside 0–100.
    #[error("source {id}: residentialShare must be within 0..=100 (got {value})")]
    ResidentialShareOutOfRange {
        /// The offending source id.
        id: String,
        /// The rejected share.
        value: f64,
    },

    /// A source amount is negative.
    #[error("source {id}: amount must be non-negative (got {amount})")]
    NegativeSourceAmount {
        /// The offending source id.
        id: String,
        /// The rejected amount.
        amount: f64,
    },

    /// The daily rounding step must be positive.
    #[error("config dailyRounding must be positive (got {0})")]
    NonPositiveDailyRounding(f64),
}

impl JurisdictionData {
    /// Apply all structural checks, collecting every failure.
    ///
    /// A snapshot that passes satisfies the computation core's
    /// preconditions: non-empty positive-budget jurisdiction, non-empty
    /// category and source lists, in-range percentages.
    ///
    /// The advisory invariant — total budget ≈ Σ category amounts ≈
    /// Σ revenue amounts — is logged at warn level when it drifts more
    /// than 1%, but never fails validation: published municipal figures
    /// routinely carry known mismatches.
    ///
    /// # Errors
    ///
    /// Returns every [`PackError`] found, in document order.
    pub fn validate(&self) -> Result<(), Vec<PackError>> {
        let mut errors = Vec::new();
        let jurisdiction_id = self.jurisdiction.id.as_str();

        if self.jurisdiction.name.trim().is_empty() {
            errors.push(PackError::EmptyJurisdictionName);
        }
        if self.jurisdiction.population == 0 {
            errors.push(PackError::NonPositivePopulation);
        }
        if self.jurisdiction.total_budget <= 0.0 {
            errors.push(PackError::NonPositiveBudget(self.jurisdiction.total_budget));
        }
        if self.jurisdiction.config.daily_rounding <= 0.0 {
            errors.push(PackError::NonPositiveDailyRounding(
                self.jurisdiction.config.daily_rounding,
            ));
        }

        if self.budget_categories.is_empty() {
            errors.push(PackError::NoBudgetCategories);
        }
        if self.revenue_sources.is_empty() {
            errors.push(PackError::NoRevenueSources);
        }

        for category in &self.budget_categories {
            if category.jurisdiction_id.as_str() != jurisdiction_id {
                errors.push(PackError::ForeignRecord {
                    kind: "category",
                    id: category.id.as_str().to_string(),
                    found: category.jurisdiction_id.as_str().to_string(),
                    expected: jurisdiction_id.to_string(),
                });
            }
            if category.amount < 0.0 {
                errors.push(PackError::NegativeCategoryAmount {
                    id: category.id.as_str().to_string(),
                    amount: category.amount,
                });
            }
            if !(0.0..=100.0).contains(&category.fixed_percentage) {
                errors.push(PackError::FixedPercentageOutOfRange {
                    id: category.id.as_str().to_string(),
                    value: category.fixed_percentage,
                });
            }
        }

        for source in &self.revenue_sources {
            if source.jurisdiction_id.as_str() != jurisdiction_id {
                errors.push(PackError::ForeignRecord {
                    kind: "source",
                    id: source.id.as_str().to_string(),
                    found: source.jurisdiction_id.as_str().to_string(),
                    expected: jurisdiction_id.to_string(),
                });
            }
            if source.amount < 0.0 {
                errors.push(PackError::NegativeSourceAmount {
                    id: source.id.as_str().to_string(),
                    amount: source.amount,
                });
            }
            if let Some(share) = source.residential_share {
                if !(0.0..=100.0).contains(&share) {
                    errors.push(PackError::ResidentialShareOutOfRange {
                        id: source.id.as_str().to_string(),
                        value: share,
                    });
                }
            }
        }

        if errors.is_empty() {
            self.warn_on_balance_drift();
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Advisory check: the declared total budget should approximately
    /// match both the category sum and the revenue sum.
    fn warn_on_balance_drift(&self) {
        let total = self.jurisdiction.total_budget;
        let category_sum: f64 = self.budget_categories.iter().map(|c| c.amount).sum();
        let revenue_sum: f64 = self.revenue_sources.iter().map(|s| s.amount).sum();

        let category_drift = (category_sum - total).abs() / total;
        if category_drift > BALANCE_WARN_TOLERANCE {
            tracing::warn!(
                jurisdiction = %self.jurisdiction.id,
                total_budget = total,
                category_sum,
                "category amounts drift from declared total budget"
            );
        }

        let revenue_drift = (revenue_sum - total).abs() / total;
        if revenue_drift > BALANCE_WARN_TOLERANCE {
            tracing::warn!(
                jurisdiction = %self.jurisdiction.id,
                total_budget = total,
                revenue_sum,
                "revenue amounts drift from declared total budget"
            );
        }
    }
}
