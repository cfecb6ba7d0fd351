//! # Scenario Sessions
//!
//! A `BudgetScenario` is the UI-session-scoped record of one what-if
//! exploration: which categories were touched and by how much. The
//! session records adjustments against original amounts captured at
//! edit time, so a scenario stays comparable even while its working
//! copy mutates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use muni_calc::CategoryAdjustment;
use muni_core::{CategoryId, JurisdictionId};

/// One what-if session over a jurisdiction's budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetScenario {
    /// Session identifier.
    pub id: Uuid,
    /// The jurisdiction being explored.
    pub jurisdiction_id: JurisdictionId,
    /// Display name.
    pub name: String,
    /// Recorded adjustments, one per touched category.
    adjustments: Vec<CategoryAdjustment>,
    /// When the session began.
    pub created_at: DateTime<Utc>,
}

impl BudgetScenario {
    /// Start a new, empty session for a jurisdiction.
    pub fn new(jurisdiction_id: JurisdictionId) -> Self {
        Self {
            id: Uuid::new_v4(),
            jurisdiction_id,
            name: "New Scenario".into(),
            adjustments: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// The recorded adjustments, in first-touched order.
    pub fn adjustments(&self) -> &[CategoryAdjustment] {
        &self.adjustments
    }

    /// Record (or update) the adjustment for one category.
    ///
    /// `original_amount` must come from the real budget, not the
    /// scenario working copy — repeated edits to the same slider keep
    /// comparing against the true original.
    pub fn record_adjustment(
        &mut self,
        category_id: CategoryId,
        original_amount: f64,
        new_amount: f64,
    ) {
        let percent_change = if original_amount != 0.0 {
            ((new_amount - original_amount) / original_amount) * 100.0
        } else {
            0.0
        };

        let adjustment = CategoryAdjustment {
            category_id,
            original_amount,
            new_amount,
            percent_change,
        };

        if let Some(existing) = self
            .adjustments
            .iter_mut()
            .find(|a| a.category_id == adjustment.category_id)
        {
            *existing = adjustment;
        } else {
            self.adjustments.push(adjustment);
        }
    }
}
