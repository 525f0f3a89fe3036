//! Plugin catalog entries offered during the interview.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A selectable hapi plugin: the npm package name plus a short description
/// shown next to it in the checklist.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PluginEntry {
    pub name: String,
    pub description: String,
}

impl PluginEntry {
    pub fn new(name: &str, description: &str) -> Self {
        PluginEntry {
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

/// The catalog used when no settings file exists yet.
pub(crate) fn default_catalog() -> Vec<PluginEntry> {
    vec![
        PluginEntry::new("joi", "Object schema validation"),
        PluginEntry::new("lout", "API documentation generator"),
        PluginEntry::new("hoek", "General purpose node utilities"),
    ]
}

/// Drops later entries that repeat an earlier name.
pub(crate) fn dedupe_by_name(entries: Vec<PluginEntry>) -> Vec<PluginEntry> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|entry| seen.insert(entry.name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_order() {
        let catalog = default_catalog();
        let names: Vec<&str> = catalog.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, vec!["joi", "lout", "hoek"]);
    }

    #[test]
    fn test_dedupe_keeps_first_occurrence() {
        let entries = vec![
            PluginEntry::new("joi", "Object schema validation"),
            PluginEntry::new("hoek", "General purpose node utilities"),
            PluginEntry::new("joi", "A different description"),
        ];

        let deduped = dedupe_by_name(entries);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].name, "joi");
        assert_eq!(deduped[0].description, "Object schema validation");
        assert_eq!(deduped[1].name, "hoek");
    }
}
