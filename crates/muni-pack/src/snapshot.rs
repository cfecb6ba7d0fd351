//! # Jurisdiction Snapshots
//!
//! The `JurisdictionData` document: one jurisdiction plus everything the
//! calculator needs about it. Snapshots arrive from JSON import and leave
//! through JSON export; in between they are plain owned data.

use serde::{Deserialize, Serialize};

use muni_core::{BudgetCategory, Jurisdiction, MuniError, ResidentProfile, RevenueSource};

/// One jurisdiction's complete exchanged snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JurisdictionData {
    /// The jurisdiction record.
    pub jurisdiction: Jurisdiction,
    /// All budget categories, in display order.
    pub budget_categories: Vec<BudgetCategory>,
    /// All revenue sources, in display order.
    pub revenue_sources: Vec<RevenueSource>,
    /// Optional statistical average-resident profile shipped with the
    /// dataset, used to seed the calculator before the user edits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_resident: Option<ResidentProfile>,
}

impl JurisdictionData {
    /// Parse a snapshot from a JSON string.
    ///
    /// This is a parse only — call [`JurisdictionData::validate`] before
    /// handing the result to the computation core.
    ///
    /// # Errors
    ///
    /// Returns [`MuniError::Serialization`] when the document is not
    /// valid JSON or does not match the wire shape.
    pub fn from_json(json: &str) -> Result<Self, MuniError> {
        serde_json::from_str(json).map_err(|e| MuniError::Serialization(e.to_string()))
    }

    /// Render the snapshot as pretty-printed JSON, the format produced
    /// by the export feature and consumed by [`JurisdictionData::from_json`].
    ///
    /// # Errors
    ///
    /// Returns [`MuniError::Serialization`] on serializer failure
    /// (practically unreachable for these value types).
    pub fn to_json(&self) -> Result<String, MuniError> {
        serde_json::to_string_pretty(self).map_err(|e| MuniError::Serialization(e.to_string()))
    }
}
