//! The closed set of prompt categories.
//!
//! Categories form a fixed enumerated set: unknown identifiers are rejected
//! when parameters are deserialized, they never create new catalog entries.
//! Adding a category means adding a variant here plus a content file - no
//! other code path changes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A prompt category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// React-specific prompts (components, hooks, state, performance).
    React,

    /// General frontend prompts (CSS, responsive layout, accessibility).
    Fe,

    /// Cross-cutting development prompts (reviews, commits, API design).
    Common,
}

impl Category {
    /// The identifier used on the wire and in composite prompt names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::React => "react",
            Self::Fe => "fe",
            Self::Common => "common",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "react" => Ok(Self::React),
            "fe" => Ok(Self::Fe),
            "common" => Ok(Self::Common),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// Error returned when parsing an identifier outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_identifiers() {
        for category in [Category::React, Category::Fe, Category::Common] {
            let parsed: Category = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_unknown_identifier_rejected() {
        let err = "backend".parse::<Category>().unwrap_err();
        assert_eq!(err, UnknownCategory("backend".to_string()));
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Category::React).unwrap();
        assert_eq!(json, "\"react\"");

        let parsed: Category = serde_json::from_str("\"common\"").unwrap();
        assert_eq!(parsed, Category::Common);

        assert!(serde_json::from_str::<Category>("\"backend\"").is_err());
    }
}
