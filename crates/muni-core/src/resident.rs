//! # Resident Profiles
//!
//! A resident profile captures the household attributes that drive the
//! contribution formulas: housing, income, local employment, household
//! size, and vehicle count. Profiles describe either a real household
//! (entered by the user) or a statistical average resident shipped with a
//! jurisdiction dataset — which is why `household_size` is a float
//! (an average like 2.4 is valid data, not an error).

use serde::{Deserialize, Serialize};

use crate::identity::JurisdictionId;

/// Whether the household owns or rents its home.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HousingStatus {
    /// Owner-occupied; property tax applies when a home value is known.
    Own,
    /// Renting; the household pays no direct property tax.
    Rent,
}

impl HousingStatus {
    /// Returns the snake_case string identifier for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Own => "own",
            Self::Rent => "rent",
        }
    }
}

impl std::fmt::Display for HousingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A household's attributes within a jurisdiction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidentProfile {
    /// Optional identifier for saved profiles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Jurisdiction this profile belongs to.
    pub jurisdiction_id: JurisdictionId,
    /// Own or rent.
    pub housing_status: HousingStatus,
    /// Market value of the home, USD. Required semantically when the
    /// household owns; meaningless when renting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_value: Option<f64>,
    /// Annual rent, USD. Informational; no current formula reads it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_rent: Option<f64>,
    /// Annual household income, USD. Non-negative.
    pub household_income: f64,
    /// Whether a member of the household works inside the jurisdiction
    /// (gates wage tax).
    pub works_locally: bool,
    /// Number of people in the household. Fractional averages allowed.
    pub household_size: f64,
    /// Monthly water usage in gallons. Part of the exchanged shape;
    /// unused by the current formulas.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_water_usage: Option<f64>,
    /// Vehicles registered to the household (gates personal-property
    /// tax).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicles_registered: Option<u32>,
}

impl ResidentProfile {
    /// True when the household owns its home and a value is on record —
    /// the gate for the real-estate property-tax formula.
    pub fn owns_valued_home(&self) -> bool {
        self.housing_status == HousingStatus::Own && self.home_value.is_some()
    }
}
