//! # muni-cli — Subcommand Handlers
//!
//! Handler modules for the `muni` binary, one per subcommand. Handlers
//! return a process exit code (0 success, 1 validation/scenario failure)
//! and reserve `anyhow::Error` for operational problems — unreadable
//! files, malformed JSON.

use std::path::Path;

use anyhow::Context;

use muni_pack::JurisdictionData;

pub mod contribution;
pub mod data;
pub mod scenario;
pub mod validate;

/// Read and parse a snapshot file. Parse only — handlers decide whether
/// and how to surface validation problems.
pub(crate) fn load_snapshot(path: &Path) -> anyhow::Result<JurisdictionData> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    JurisdictionData::from_json(&json)
        .with_context(|| format!("failed to parse {}", path.display()))
}
