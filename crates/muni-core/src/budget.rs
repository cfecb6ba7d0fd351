//! # Budget Categories
//!
//! A budget category is one spending line item — a department or service
//! area. Each category splits into a fixed (non-discretionary) portion
//! that cannot be reduced without violating a named constraint, and a
//! discretionary remainder. The split is the basis for scenario
//! validation in `muni-calc`.

use serde::{Deserialize, Serialize};

use crate::identity::{CategoryId, JurisdictionId};

/// Icon tag for a service category. Closed set — rendering layers match
/// exhaustively, so a dataset can never reference an icon the UI cannot
/// draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceIcon {
    /// Police protection.
    Shield,
    /// Fire services.
    Flame,
    /// Roads and infrastructure.
    Road,
    /// Parks.
    Trees,
    /// Administration.
    Building,
    /// Water utilities.
    Droplet,
    /// Library.
    Book,
    /// Health services.
    Heart,
    /// Public works.
    Truck,
    /// Electric utilities.
    Lightbulb,
    /// Education.
    GraduationCap,
    /// Courts and legal.
    Scale,
    /// Courts and legal (alias kept for dataset compatibility).
    Scales,
    /// Community services.
    Users,
    /// Housing.
    Home,
    /// Finance and debt service.
    Wallet,
    /// Capital projects and construction.
    Hammer,
    /// Grants and contributions.
    Gift,
}

impl ServiceIcon {
    /// Returns the kebab-case string identifier for this icon.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shield => "shield",
            Self::Flame => "flame",
            Self::Road => "road",
            Self::Trees => "trees",
            Self::Building => "building",
            Self::Droplet => "droplet",
            Self::Book => "book",
            Self::Heart => "heart",
            Self::Truck => "truck",
            Self::Lightbulb => "lightbulb",
            Self::GraduationCap => "graduation-cap",
            Self::Scale => "scale",
            Self::Scales => "scales",
            Self::Users => "users",
            Self::Home => "home",
            Self::Wallet => "wallet",
            Self::Hammer => "hammer",
            Self::Gift => "gift",
        }
    }

    /// Returns all icon tags in canonical order.
    pub fn all() -> &'static [ServiceIcon] {
        &[
            Self::Shield,
            Self::Flame,
            Self::Road,
            Self::Trees,
            Self::Building,
            Self::Droplet,
            Self::Book,
            Self::Heart,
            Self::Truck,
            Self::Lightbulb,
            Self::GraduationCap,
            Self::Scale,
            Self::Scales,
            Self::Users,
            Self::Home,
            Self::Wallet,
            Self::Hammer,
            Self::Gift,
        ]
    }
}

impl std::fmt::Display for ServiceIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An optional finer-grained line item inside a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSubcategory {
    /// Identifier slug.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Annual USD.
    pub amount: f64,
    /// Optional display description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One spending line item in a jurisdiction's budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetCategory {
    /// Identifier slug, unique within the jurisdiction snapshot.
    pub id: CategoryId,
    /// Owning jurisdiction.
    pub jurisdiction_id: JurisdictionId,
    /// Display name (e.g., "Safety Services").
    pub name: String,
    /// Annual USD spent.
    pub amount: f64,
    /// Percent (0–100) of `amount` that is fixed / non-discretionary.
    pub fixed_percentage: f64,
    /// Icon tag for rendering.
    pub icon: ServiceIcon,
    /// Display color (CSS hex).
    pub color: String,
    /// Display description.
    pub description: String,
    /// Reasons the fixed portion cannot shrink (union contracts, state
    /// mandates, debt covenants, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Vec<String>>,
    /// Optional finer-grained line items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategories: Option<Vec<BudgetSubcategory>>,
}

impl BudgetCategory {
    /// The non-discretionary floor: `amount × fixed_percentage / 100`.
    ///
    /// Always ≤ `amount` for an in-range `fixed_percentage`.
    pub fn fixed_amount(&self) -> f64 {
        self.amount * (self.fixed_percentage / 100.0)
    }

    /// The adjustable remainder: `amount − fixed_amount`.
    pub fn discretionary_amount(&self) -> f64 {
        self.amount * (1.0 - self.fixed_percentage / 100.0)
    }

    /// Annual spending per resident at the given population.
    ///
    /// Returns 0 for a zero population rather than dividing by zero.
    pub fn per_capita(&self, population: u64) -> f64 {
        if population == 0 {
            return 0.0;
        }
        self.amount / population as f64
    }
}
