//! # Revenue Sources
//!
//! A revenue source is one stream of income funding a jurisdiction's
//! budget — a tax, a fee schedule, or intergovernmental money. The
//! [`RevenueType`] tag determines which contribution formula applies to a
//! resident (see `muni-calc`); the optional `rate` field's meaning depends
//! on the type:
//!
//! | type | `rate` meaning |
//! |---|---|
//! | `property_tax` | dollars per $100 of assessed value, as a decimal fraction |
//! | `income_tax`, `wage_tax`, `sales_tax` | tax rate as a decimal fraction |
//! | `utility_fees` | monthly flat fee in dollars |
//! | `permits_fees`, `other` | per-resident annual estimate in dollars |
//!
//! ## Property Classes
//!
//! Jurisdictions that levy property tax on both real estate and personal
//! property (vehicles) declare two `property_tax` sources distinguished by
//! the explicit [`PropertyClass`] discriminant. Downstream code dispatches
//! on the enum — never on id or name substrings.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;
use crate::identity::{JurisdictionId, SourceId};

/// The kind of revenue stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevenueType {
    /// Ad-valorem tax on property value.
    PropertyTax,
    /// Tax on all household income.
    IncomeTax,
    /// Tax on income earned within the jurisdiction.
    WageTax,
    /// Tax on retail purchases.
    SalesTax,
    /// Water, sewer, trash, and similar utility charges.
    UtilityFees,
    /// Permits, licenses, and user fees.
    PermitsFees,
    /// State and federal shared revenue — not resident-funded.
    Grants,
    /// Fines, interest, and miscellaneous receipts.
    Other,
}

impl RevenueType {
    /// Returns the snake_case string identifier for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PropertyTax => "property_tax",
            Self::IncomeTax => "income_tax",
            Self::WageTax => "wage_tax",
            Self::SalesTax => "sales_tax",
            Self::UtilityFees => "utility_fees",
            Self::PermitsFees => "permits_fees",
            Self::Grants => "grants",
            Self::Other => "other",
        }
    }

    /// Returns all revenue types in canonical order.
    pub fn all() -> &'static [RevenueType] {
        &[
            Self::PropertyTax,
            Self::IncomeTax,
            Self::WageTax,
            Self::SalesTax,
            Self::UtilityFees,
            Self::PermitsFees,
            Self::Grants,
            Self::Other,
        ]
    }
}

impl std::fmt::Display for RevenueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RevenueType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "property_tax" => Ok(Self::PropertyTax),
            "income_tax" => Ok(Self::IncomeTax),
            "wage_tax" => Ok(Self::WageTax),
            "sales_tax" => Ok(Self::SalesTax),
            "utility_fees" => Ok(Self::UtilityFees),
            "permits_fees" => Ok(Self::PermitsFees),
            "grants" => Ok(Self::Grants),
            "other" => Ok(Self::Other),
            other => Err(ValidationError::UnknownTag {
                kind: "revenue type",
                value: other.to_string(),
            }),
        }
    }
}

/// Who primarily pays a revenue source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayerType {
    /// Paid by resident households.
    Residential,
    /// Paid by businesses.
    Commercial,
    /// Mixed residential and commercial incidence.
    Mixed,
    /// Paid by other governments (grants, shared revenue).
    Government,
    /// Paid by non-residents (lodging taxes, event fees).
    Visitors,
}

impl PayerType {
    /// Returns the snake_case string identifier for this payer class.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Residential => "residential",
            Self::Commercial => "commercial",
            Self::Mixed => "mixed",
            Self::Government => "government",
            Self::Visitors => "visitors",
        }
    }

    /// Returns all payer types in canonical order.
    pub fn all() -> &'static [PayerType] {
        &[
            Self::Residential,
            Self::Commercial,
            Self::Mixed,
            Self::Government,
            Self::Visitors,
        ]
    }
}

impl std::fmt::Display for PayerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which class of property a `property_tax` source assesses.
///
/// This is the explicit discriminant that lets real-estate and
/// personal-property levies coexist as separate sources of the same
/// revenue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyClass {
    /// Land and improvements, assessed on market value.
    RealEstate,
    /// Vehicles and other titled personal property.
    PersonalProperty,
}

impl PropertyClass {
    /// Returns the snake_case string identifier for this class.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RealEstate => "real_estate",
            Self::PersonalProperty => "personal_property",
        }
    }
}

impl std::fmt::Display for PropertyClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One revenue stream funding a jurisdiction's budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueSource {
    /// Identifier slug, unique within the jurisdiction snapshot.
    pub id: SourceId,
    /// Owning jurisdiction.
    pub jurisdiction_id: JurisdictionId,
    /// Revenue type tag; selects the contribution formula.
    #[serde(rename = "type")]
    pub revenue_type: RevenueType,
    /// Display name.
    pub name: String,
    /// Annual USD collected jurisdiction-wide.
    pub amount: f64,
    /// Type-dependent rate (see module docs). Missing rates fall back to
    /// type-specific defaults in the calculator so partial data stays
    /// usable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    /// Assessment ratio (0–1), property tax only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<f64>,
    /// Optional display description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Primary payer class.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer: Option<PayerType>,
    /// Percent (0–100) of this source's revenue attributable to
    /// residents. See [`RevenueSource::effective_residential_share`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residential_share: Option<f64>,
    /// Property class for `property_tax` sources; ignored for other
    /// types. Absent means real estate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_class: Option<PropertyClass>,
}

impl RevenueSource {
    /// The share (0–100) of this source's revenue paid by residents.
    ///
    /// Defaults to 100 when undeclared. Government-payer sources are
    /// always 0% residential regardless of any declared share — grants
    /// and shared revenue are never resident-funded.
    pub fn effective_residential_share(&self) -> f64 {
        if self.payer == Some(PayerType::Government) {
            return 0.0;
        }
        self.residential_share.unwrap_or(100.0)
    }

    /// The property class assessed by this source.
    ///
    /// Only meaningful for `property_tax` sources; an undeclared class
    /// means real estate.
    pub fn property_class(&self) -> PropertyClass {
        self.property_class.unwrap_or(PropertyClass::RealEstate)
    }
}
