//! # Revenue Attribution
//!
//! Splits a jurisdiction's total revenue by who actually pays it:
//! resident households, businesses, other governments, or visitors.
//! Answers the dashboard question "how much of this budget do residents
//! fund?" and positions an individual contribution against the
//! residential pool.

use serde::{Deserialize, Serialize};

use muni_core::{PayerType, RevenueSource};

/// Jurisdiction-wide revenue totals by payer class, USD annual.
///
/// `residential + commercial + government + visitors` can fall short of
/// `total` when a source's non-residential remainder has no payer
/// classification to land in — the unclassified remainder is reported
/// rather than guessed at.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueAttribution {
    /// All revenue, every source.
    pub total: f64,
    /// Paid by resident households (per effective residential shares).
    pub residential: f64,
    /// Paid by businesses (commercial payers and the non-residential
    /// remainder of mixed sources).
    pub commercial: f64,
    /// Grants and shared revenue from other governments.
    pub government: f64,
    /// Paid by non-residents (lodging, event, and visitor fees).
    pub visitors: f64,
    /// Non-residential revenue with no payer classification.
    pub unclassified: f64,
}

impl RevenueAttribution {
    /// Residential share of all revenue, percent. Zero when there is no
    /// revenue.
    pub fn residential_percent(&self) -> f64 {
        if self.total <= 0.0 {
            return 0.0;
        }
        (self.residential / self.total) * 100.0
    }

    /// One resident contribution as a percent of the residential pool.
    /// Zero when residents fund nothing.
    pub fn share_of_residential(&self, contribution: f64) -> f64 {
        if self.residential <= 0.0 {
            return 0.0;
        }
        (contribution / self.residential) * 100.0
    }
}

/// Attribute every revenue source to payer classes.
///
/// Each source's residential portion follows its effective residential
/// share (declared share defaulting to 100%, government forced to 0%).
/// The non-residential remainder lands on the declared payer class:
/// commercial and mixed remainders go to businesses, visitor remainders
/// to visitors, and government sources are attributed whole. Remainders
/// with no payer classification are counted as unclassified.
pub fn attribute_revenue(sources: &[RevenueSource]) -> RevenueAttribution {
    let mut attribution = RevenueAttribution::default();

    for source in sources {
        attribution.total += source.amount;

        let residential_amount = source.amount * (source.effective_residential_share() / 100.0);
        let non_residential = source.amount - residential_amount;
        attribution.residential += residential_amount;

        match source.payer {
            Some(PayerType::Government) => attribution.government += source.amount,
            Some(PayerType::Commercial) | Some(PayerType::Mixed) => {
                attribution.commercial += non_residential;
            }
            Some(PayerType::Visitors) => attribution.visitors += non_residential,
            Some(PayerType::Residential) | None => attribution.unclassified += non_residential,
        }
    }

    attribution
}
