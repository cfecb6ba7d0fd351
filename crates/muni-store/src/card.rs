//! # Shareable Summary Cards
//!
//! The data behind the exported infographic: one jurisdiction, one
//! resident, one computed contribution, stamped with a generation time.
//! Rendering (image/PDF) is a consumer concern; this module produces the
//! complete plain-data card, including the ready-made comparison
//! sentences.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use muni_calc::{
    generate_comparison_text, everyday_comparison, round_daily, ResidentContribution,
};
use muni_core::{Jurisdiction, ResidentProfile};

/// A self-contained, serializable contribution summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionCard {
    /// The jurisdiction the card describes.
    pub jurisdiction: Jurisdiction,
    /// The resident profile the contribution was computed for.
    pub profile: ResidentProfile,
    /// The computed contribution.
    pub contribution: ResidentContribution,
    /// Daily figure rounded to the jurisdiction's display granularity.
    pub rounded_daily: f64,
    /// The everyday-purchase phrase for the rounded daily figure.
    pub daily_comparison: String,
    /// The three infographic sentences.
    pub comparison_lines: Vec<String>,
    /// When the card was generated.
    pub generated_at: DateTime<Utc>,
}

impl ContributionCard {
    /// Assemble a card from already-computed state.
    pub fn build(
        jurisdiction: &Jurisdiction,
        profile: &ResidentProfile,
        contribution: &ResidentContribution,
    ) -> Self {
        let rounded_daily = round_daily(
            contribution.total_daily,
            jurisdiction.config.daily_rounding,
        );

        Self {
            jurisdiction: jurisdiction.clone(),
            profile: profile.clone(),
            contribution: contribution.clone(),
            rounded_daily,
            daily_comparison: everyday_comparison(rounded_daily),
            comparison_lines: generate_comparison_text(contribution, jurisdiction),
            generated_at: Utc::now(),
        }
    }
}
