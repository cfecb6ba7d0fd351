//! # muni-store — Session State Container
//!
//! The one mutable object in the stack. `BudgetStore` owns the current
//! jurisdiction snapshot, the resident profile being edited, the cached
//! contribution, and the active what-if scenario. Every setter is an
//! explicit state transition that triggers a pure recomputation — the
//! computation crates themselves never hold or mutate shared state.
//!
//! ## Recomputation Rule
//!
//! The cached contribution is `Some` only while all calculator
//! preconditions hold: a jurisdiction, a resident profile, and non-empty
//! revenue-source and budget-category lists. Any setter that breaks a
//! precondition clears the cache; any setter that completes them fills
//! it. There is no partial update — the contribution is rebuilt from
//! scratch on every transition.
//!
//! ## Scenario Sessions
//!
//! A scenario is an ephemeral working copy of the budget categories.
//! Slider edits mutate the copy and record a [`CategoryAdjustment`]
//! against the *original* amount, so the validator always compares
//! against the real budget. Resetting the scenario discards the copy;
//! the originals are never touched.
//!
//! ## Writer Discipline
//!
//! All setters take `&mut self` — single-writer by construction. In a
//! single-threaded event-loop host this is the natural calling pattern;
//! a multi-threaded host wraps the store in its own lock.

pub mod card;
pub mod scenario;

use muni_calc::{calculate_contribution, ResidentContribution};
use muni_core::{BudgetCategory, CategoryId, Jurisdiction, ResidentProfile, RevenueSource};
use muni_pack::JurisdictionData;

pub use card::ContributionCard;
pub use scenario::BudgetScenario;

/// The application-state container. See the module docs for the
/// transition rules.
#[derive(Debug, Clone, Default)]
pub struct BudgetStore {
    jurisdiction: Option<Jurisdiction>,
    budget_categories: Vec<BudgetCategory>,
    revenue_sources: Vec<RevenueSource>,
    resident_profile: Option<ResidentProfile>,
    contribution: Option<ResidentContribution>,
    current_scenario: Option<BudgetScenario>,
    scenario_categories: Vec<BudgetCategory>,
}

impl BudgetStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire jurisdiction snapshot as a set: jurisdiction,
    /// categories, sources, and (when shipped) the average-resident
    /// profile. Recomputes the contribution.
    pub fn load(&mut self, data: JurisdictionData) {
        self.jurisdiction = Some(data.jurisdiction);
        self.scenario_categories = data.budget_categories.clone();
        self.budget_categories = data.budget_categories;
        self.revenue_sources = data.revenue_sources;
        if let Some(resident) = data.average_resident {
            self.resident_profile = Some(resident);
        }
        self.current_scenario = None;
        self.recalculate();
    }

    /// Replace the jurisdiction record. Recomputes the contribution.
    pub fn set_jurisdiction(&mut self, jurisdiction: Jurisdiction) {
        self.jurisdiction = Some(jurisdiction);
        self.recalculate();
    }

    /// Replace the budget categories (and the scenario working copy).
    /// Recomputes the contribution.
    pub fn set_budget_categories(&mut self, categories: Vec<BudgetCategory>) {
        self.scenario_categories = categories.clone();
        self.budget_categories = categories;
        self.recalculate();
    }

    /// Replace the revenue sources. Recomputes the contribution.
    pub fn set_revenue_sources(&mut self, sources: Vec<RevenueSource>) {
        self.revenue_sources = sources;
        self.recalculate();
    }

    /// Replace the resident profile. Recomputes the contribution.
    pub fn set_resident_profile(&mut self, profile: ResidentProfile) {
        self.resident_profile = Some(profile);
        self.recalculate();
    }

    /// Rebuild the cached contribution from current inputs, or clear it
    /// when the calculator preconditions do not hold.
    fn recalculate(&mut self) {
        let (Some(jurisdiction), Some(profile)) = (&self.jurisdiction, &self.resident_profile)
        else {
            self.contribution = None;
            return;
        };
        if self.revenue_sources.is_empty() || self.budget_categories.is_empty() {
            self.contribution = None;
            return;
        }

        self.contribution = Some(calculate_contribution(
            profile,
            jurisdiction,
            &self.revenue_sources,
            &self.budget_categories,
        ));
    }

    /// Clear everything back to the empty state.
    pub fn reset_all(&mut self) {
        *self = Self::default();
    }

    // ─── Read access ────────────────────────────────────────────────

    /// The current jurisdiction, if one is loaded.
    pub fn jurisdiction(&self) -> Option<&Jurisdiction> {
        self.jurisdiction.as_ref()
    }

    /// The current budget categories (original amounts, not scenario
    /// working values).
    pub fn budget_categories(&self) -> &[BudgetCategory] {
        &self.budget_categories
    }

    /// The current revenue sources.
    pub fn revenue_sources(&self) -> &[RevenueSource] {
        &self.revenue_sources
    }

    /// The current resident profile, if one is set.
    pub fn resident_profile(&self) -> Option<&ResidentProfile> {
        self.resident_profile.as_ref()
    }

    /// The cached contribution. `None` until the preconditions hold.
    pub fn contribution(&self) -> Option<&ResidentContribution> {
        self.contribution.as_ref()
    }

    /// The active scenario session, if any.
    pub fn current_scenario(&self) -> Option<&BudgetScenario> {
        self.current_scenario.as_ref()
    }

    /// The scenario working copy of the categories (original copies when
    /// no scenario is active).
    pub fn scenario_categories(&self) -> &[BudgetCategory] {
        &self.scenario_categories
    }

    /// Export the current state as an exchangeable snapshot. `None`
    /// until a jurisdiction is loaded.
    pub fn export_pack(&self) -> Option<JurisdictionData> {
        Some(JurisdictionData {
            jurisdiction: self.jurisdiction.clone()?,
            budget_categories: self.budget_categories.clone(),
            revenue_sources: self.revenue_sources.clone(),
            average_resident: self.resident_profile.clone(),
        })
    }

    /// Build a shareable summary card from the current state. `None`
    /// until a contribution has been computed.
    pub fn contribution_card(&self) -> Option<ContributionCard> {
        ContributionCard::build(
            self.jurisdiction.as_ref()?,
            self.resident_profile.as_ref()?,
            self.contribution.as_ref()?,
        )
        .into()
    }

    // ─── Scenario session ───────────────────────────────────────────

    /// Begin a what-if session over a fresh working copy of the
    /// categories. Requires a loaded jurisdiction and resident profile;
    /// returns whether a session started.
    pub fn start_scenario(&mut self) -> bool {
        let Some(jurisdiction) = &self.jurisdiction else {
            tracing::debug!("scenario requested with no jurisdiction loaded");
            return false;
        };
        if self.resident_profile.is_none() {
            tracing::debug!("scenario requested with no resident profile");
            return false;
        }

        self.current_scenario = Some(BudgetScenario::new(jurisdiction.id.clone()));
        self.scenario_categories = self.budget_categories.clone();
        true
    }

    /// Propose a new amount for one category within the active session.
    ///
    /// Updates the working copy and upserts the recorded adjustment
    /// (original amount taken from the real budget, not the working
    /// copy). No-op when no session is active or the category is
    /// unknown.
    pub fn adjust_category(&mut self, category_id: &CategoryId, new_amount: f64) {
        if self.current_scenario.is_none() {
            tracing::debug!(category = %category_id, "adjustment outside a scenario session");
            return;
        }

        let Some(original) = self
            .budget_categories
            .iter()
            .find(|c| &c.id == category_id)
        else {
            tracing::debug!(category = %category_id, "adjustment for unknown category");
            return;
        };
        let original_amount = original.amount;

        for category in &mut self.scenario_categories {
            if &category.id == category_id {
                category.amount = new_amount;
            }
        }

        if let Some(scenario) = &mut self.current_scenario {
            scenario.record_adjustment(category_id.clone(), original_amount, new_amount);
        }
    }

    /// Validate the active session's adjustments against the original
    /// budget. `None` when no session is active.
    pub fn scenario_impact(&self) -> Option<muni_calc::ScenarioImpact> {
        let scenario = self.current_scenario.as_ref()?;
        Some(muni_calc::validate_budget_changes(
            &self.budget_categories,
            scenario.adjustments(),
        ))
    }

    /// Discard the active session and restore the working copy.
    pub fn reset_scenario(&mut self) {
        self.current_scenario = None;
        self.scenario_categories = self.budget_categories.clone();
    }
}
