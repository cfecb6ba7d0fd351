//! # Jurisdiction Records
//!
//! A jurisdiction is a local governing body — township, city, county,
//! village, or borough — with its own budget, revenue structure, and
//! presentation preferences. One jurisdiction, its budget categories, and
//! its revenue sources form a single consistent snapshot: they are always
//! replaced as a set, never partially updated.
//!
//! ## Advisory Invariant
//!
//! `total_budget` should approximately equal both the sum of the
//! jurisdiction's budget-category amounts and the sum of its
//! revenue-source amounts. Real municipal data rarely balances to the
//! dollar, so the mismatch is tolerated at runtime — `muni-pack`
//! validation logs it as a warning rather than rejecting the snapshot.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;
use crate::identity::JurisdictionId;

/// The kind of local governing body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JurisdictionType {
    /// Unincorporated civil township, typically trustee-governed.
    Township,
    /// Incorporated city.
    City,
    /// County government.
    County,
    /// Incorporated village.
    Village,
    /// Borough (Pennsylvania/Alaska-style incorporation).
    Borough,
}

impl JurisdictionType {
    /// Returns the snake_case string identifier for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Township => "township",
            Self::City => "city",
            Self::County => "county",
            Self::Village => "village",
            Self::Borough => "borough",
        }
    }

    /// Returns all jurisdiction types in canonical order.
    pub fn all() -> &'static [JurisdictionType] {
        &[
            Self::Township,
            Self::City,
            Self::County,
            Self::Village,
            Self::Borough,
        ]
    }
}

impl std::fmt::Display for JurisdictionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JurisdictionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "township" => Ok(Self::Township),
            "city" => Ok(Self::City),
            "county" => Ok(Self::County),
            "village" => Ok(Self::Village),
            "borough" => Ok(Self::Borough),
            other => Err(ValidationError::UnknownTag {
                kind: "jurisdiction type",
                value: other.to_string(),
            }),
        }
    }
}

/// How a jurisdiction prefers its budget presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetEmphasis {
    /// Group spending by the community systems it sustains rather than
    /// by department org chart.
    SystemsOverDepartments,
    /// Even-handed service-area presentation.
    BalancedServices,
    /// Traditional department-by-department presentation.
    Departmental,
}

impl BudgetEmphasis {
    /// Returns the snake_case string identifier for this emphasis.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SystemsOverDepartments => "systems_over_departments",
            Self::BalancedServices => "balanced_services",
            Self::Departmental => "departmental",
        }
    }
}

impl std::fmt::Display for BudgetEmphasis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation configuration carried with each jurisdiction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JurisdictionConfig {
    /// Maximum number of budget categories the jurisdiction presents.
    pub max_categories: u32,
    /// Presentation emphasis.
    pub emphasis: BudgetEmphasis,
    /// Whether fixed-cost shares are surfaced in the UI.
    pub show_fixed_costs: bool,
    /// The phrase used when describing the jurisdiction collectively
    /// (e.g., "community system").
    pub comparison_phrase: String,
    /// Granularity for daily-amount display rounding, in dollars
    /// (e.g., 0.25 rounds to the nearest quarter). Must be positive.
    pub daily_rounding: f64,
}

/// A local government jurisdiction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Jurisdiction {
    /// Identifier slug, unique within a dataset.
    pub id: JurisdictionId,
    /// Display name (e.g., "Liberty Township").
    pub name: String,
    /// Kind of governing body.
    #[serde(rename = "type")]
    pub jurisdiction_type: JurisdictionType,
    /// Two-letter state code.
    pub state: String,
    /// Resident population. Positive.
    pub population: u64,
    /// Median market value of a home, USD.
    pub median_home_value: f64,
    /// Total annual budget, USD. Positive.
    pub total_budget: f64,
    /// Fiscal-year label (e.g., "2024").
    pub fiscal_year: String,
    /// Optional governance description (e.g., "Mayor-Council").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub governance_structure: Option<String>,
    /// Presentation configuration.
    pub config: JurisdictionConfig,
}

/// Population size class, used for benchmark grouping and display
/// granularity choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeClass {
    /// Under 5,000 residents.
    Small,
    /// 5,000 to 49,999 residents.
    Medium,
    /// 50,000 residents or more.
    Large,
}

impl SizeClass {
    /// Returns the snake_case string identifier for this size class.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl std::fmt::Display for SizeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Jurisdiction {
    /// Classify the jurisdiction by population.
    pub fn size_class(&self) -> SizeClass {
        if self.population < 5_000 {
            SizeClass::Small
        } else if self.population < 50_000 {
            SizeClass::Medium
        } else {
            SizeClass::Large
        }
    }
}
