//! Wire types for the package registry.

use serde::{Deserialize, Serialize};

/// The fields of a `latest` dist-tag document the scaffold cares about.
/// Registries that omit either field decode to empty strings, which callers
/// treat as a failed lookup.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct PackageInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
}

impl PackageInfo {
    /// True when the registry returned both fields needed to pin a version.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.version.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let info: PackageInfo = serde_json::from_str(
            r#"{
                "name": "joi",
                "version": "17.2.0",
                "description": "Object schema validation",
                "dist": { "tarball": "https://registry.npmjs.org/joi/-/joi-17.2.0.tgz" }
            }"#,
        )
        .unwrap();

        assert_eq!(info.name, "joi");
        assert_eq!(info.version, "17.2.0");
        assert!(info.is_complete());
    }

    #[test]
    fn test_deserialize_missing_fields_is_incomplete() {
        let info: PackageInfo = serde_json::from_str(r#"{"name": "joi"}"#).unwrap();
        assert_eq!(info.version, "");
        assert!(!info.is_complete());

        let info: PackageInfo = serde_json::from_str("{}").unwrap();
        assert!(!info.is_complete());
    }
}
