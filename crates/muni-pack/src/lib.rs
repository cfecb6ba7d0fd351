//! # muni-pack — Jurisdiction Data Packs
//!
//! The data-exchange layer of the Muni Budget Stack. A *pack* is one
//! jurisdiction's complete snapshot — the jurisdiction record, its budget
//! categories, its revenue sources, and optionally an average-resident
//! profile — exchanged as a single JSON document and always replaced as
//! a set.
//!
//! ## Wire Format
//!
//! ```json
//! {
//!   "jurisdiction": { ... },
//!   "budgetCategories": [ ... ],
//!   "revenueSources": [ ... ],
//!   "averageResident": { ... }
//! }
//! ```
//!
//! Field names are camelCase and enum tags snake_case, matching the
//! `muni-core` record definitions exactly; there is no other wire format.
//!
//! ## Validation
//!
//! [`JurisdictionData::validate`] applies the structural checks an import
//! must pass before the computation core may assume its preconditions:
//! non-empty identity fields, positive population and budget, non-empty
//! category and source lists, in-range percentages. The advisory
//! budget-vs-revenue balance check only warns — real municipal data
//! rarely balances to the dollar.

pub mod samples;
pub mod snapshot;
pub mod template;
pub mod validate;

// Re-export primary types and constructors.
pub use samples::{sample_city, sample_township};
pub use snapshot::JurisdictionData;
pub use template::starter_template;
pub use validate::PackError;
