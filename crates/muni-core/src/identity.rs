//! # Identifier Newtypes
//!
//! Newtypes for jurisdiction, budget-category, and revenue-source
//! identifiers. Identifiers are human-authored slugs (e.g.,
//! `"liberty-township"`, `"safety-services"`) carried through the
//! exchanged JSON format — the only invariant imposed is non-emptiness,
//! because naming conventions vary across jurisdiction datasets.
//!
//! ## Validation
//!
//! All three types are validated to be non-empty (after trimming) at
//! construction time, and the `Deserialize` impls route through the
//! validating constructors so malformed JSON cannot smuggle an empty
//! identifier into the system.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A jurisdiction identifier slug (e.g., `"liberty-township"`).
///
/// # Validation
///
/// Must be a non-empty string. No further format restrictions are imposed
/// because jurisdiction naming varies across datasets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct JurisdictionId(String);

impl JurisdictionId {
    /// Create a jurisdiction identifier, validating non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyIdentifier`] if the string is empty
    /// or whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyIdentifier {
                kind: "jurisdiction",
            });
        }
        Ok(Self(trimmed))
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for JurisdictionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for JurisdictionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A budget-category identifier slug (e.g., `"safety-services"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CategoryId(String);

impl CategoryId {
    /// Create a category identifier, validating non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyIdentifier`] if the string is empty
    /// or whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyIdentifier { kind: "category" });
        }
        Ok(Self(trimmed))
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for CategoryId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A revenue-source identifier slug (e.g., `"property-tax"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SourceId(String);

impl SourceId {
    /// Create a source identifier, validating non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyIdentifier`] if the string is empty
    /// or whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyIdentifier { kind: "source" });
        }
        Ok(Self(trimmed))
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for SourceId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for SourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jurisdiction_id_valid() {
        let jid = JurisdictionId::new("liberty-township").unwrap();
        assert_eq!(jid.as_str(), "liberty-township");
    }

    #[test]
    fn jurisdiction_id_rejects_empty() {
        assert!(JurisdictionId::new("").is_err());
        assert!(JurisdictionId::new("   ").is_err());
    }

    #[test]
    fn jurisdiction_id_trims() {
        let jid = JurisdictionId::new("  riverside-city ").unwrap();
        assert_eq!(jid.as_str(), "riverside-city");
    }

    #[test]
    fn category_id_rejects_empty() {
        assert!(CategoryId::new("").is_err());
        assert!(CategoryId::new(" \t ").is_err());
    }

    #[test]
    fn source_id_display() {
        let sid = SourceId::new("local-wage-tax").unwrap();
        assert_eq!(format!("{sid}"), "local-wage-tax");
    }

    #[test]
    fn jurisdiction_id_serde_roundtrip() {
        let jid = JurisdictionId::new("liberty-township").unwrap();
        let json = serde_json::to_string(&jid).unwrap();
        let deser: JurisdictionId = serde_json::from_str(&json).unwrap();
        assert_eq!(jid, deser);
    }

    #[test]
    fn jurisdiction_id_deserialize_rejects_empty() {
        let result: Result<JurisdictionId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }

    #[test]
    fn category_id_hash_works() {
        use std::collections::HashSet;
        let a = CategoryId::new("roads-infrastructure").unwrap();
        let b = CategoryId::new("parks-recreation").unwrap();
        let mut set = HashSet::new();
        set.insert(a.clone());
        set.insert(b);
        assert_eq!(set.len(), 2);
        assert!(set.contains(&a));
    }
}
