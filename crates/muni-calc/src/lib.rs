//! # muni-calc — Contribution & Scenario Computation Core
//!
//! The computation layer of the Muni Budget Stack. Everything in this
//! crate is a pure function over `muni-core` records: no I/O, no shared
//! state, fresh output on every call. The UI/state layer calls in with
//! plain data and renders what comes back.
//!
//! ## Pipeline
//!
//! ```text
//! ResidentProfile + Jurisdiction + RevenueSource[] + BudgetCategory[]
//!   → calculate_contribution()   → ResidentContribution
//!
//! BudgetCategory[] + CategoryAdjustment[]
//!   → validate_budget_changes()  → ScenarioImpact
//! ```
//!
//! ## Determinism
//!
//! Given identical inputs, every function in this crate produces
//! bit-identical output. This is guaranteed by:
//! - No internal mutable state
//! - Input-order iteration (no hash maps in computation paths)
//! - No clock or randomness access
//!
//! Contribution results are recomputed from scratch on every trigger —
//! there is no incremental update path to drift out of sync.
//!
//! ## Error Posture
//!
//! Expected problems never throw: scenario violations travel as
//! human-readable strings in [`ScenarioImpact::errors`], and degenerate
//! numeric inputs (zero budgets, empty lists) degrade to zeroed results
//! with a `tracing::warn!` rather than propagating NaN or panicking.

pub mod attribution;
pub mod comparison;
pub mod contribution;
pub mod format;
pub mod scenario;

// Re-export primary types and entry points.
pub use attribution::{attribute_revenue, RevenueAttribution};
pub use comparison::{everyday_comparison, EverydayComparison, EVERYDAY_COMPARISONS};
pub use contribution::{
    calculate_contribution, generate_comparison_text, ContributionBreakdown,
    ResidentContribution, ServiceAllocation,
};
pub use format::{format_currency, format_percentage, round_daily};
pub use scenario::{
    validate_budget_changes, CategoryAdjustment, ScenarioImpact, ServiceImplication, Severity,
};
