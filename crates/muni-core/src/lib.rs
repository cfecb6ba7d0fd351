//! # muni-core — Foundational Types for the Muni Budget Stack
//!
//! This crate is the bedrock of the Muni Budget Stack. It defines the
//! domain records every other crate operates on: jurisdictions, their
//! revenue sources and budget categories, and the resident profiles whose
//! contributions the stack estimates. Every other crate in the workspace
//! depends on `muni-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for identifiers.** [`JurisdictionId`],
//!    [`CategoryId`], [`SourceId`] — validated non-empty at construction.
//!    No bare strings for identifiers.
//!
//! 2. **Closed enums for every tag.** [`RevenueType`], [`PayerType`],
//!    [`JurisdictionType`], [`ServiceIcon`], [`HousingStatus`],
//!    [`PropertyClass`] — exhaustive `match` everywhere. Adding a variant
//!    forces every consumer to handle it at compile time; there are no
//!    open string keys anywhere in the stack.
//!
//! 3. **Data, not behavior.** Records carry their invariant helpers
//!    (fixed/discretionary split, residential-share defaulting) but no
//!    computation pipelines — those live in `muni-calc`.
//!
//! 4. **Wire-compatible serde.** All records serialize to the camelCase
//!    JSON field names of the exchanged `JurisdictionData` format, with
//!    snake_case enum tags.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `muni-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod budget;
pub mod error;
pub mod identity;
pub mod jurisdiction;
pub mod resident;
pub mod revenue;

// Re-export primary types for ergonomic imports.
pub use budget::{BudgetCategory, BudgetSubcategory, ServiceIcon};
pub use error::{MuniError, ValidationError};
pub use identity::{CategoryId, JurisdictionId, SourceId};
pub use jurisdiction::{
    BudgetEmphasis, Jurisdiction, JurisdictionConfig, JurisdictionType, SizeClass,
};
pub use resident::{HousingStatus, ResidentProfile};
pub use revenue::{PayerType, PropertyClass, RevenueSource, RevenueType};
