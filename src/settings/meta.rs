//! Identity defaults captured across scaffolding runs.

use serde::{Deserialize, Serialize};

/// Identity answers remembered between runs and offered back as interview
/// defaults. Unset fields are omitted from the stored document.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Meta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_url: Option<String>,
}

impl Meta {
    /// Merge `candidate` over `self` field by field. A candidate value wins
    /// only when it is non-empty after trimming, otherwise the prior value
    /// stays. Winning values are stored trimmed.
    pub fn merged_with(&self, candidate: &Meta) -> Meta {
        Meta {
            github_username: merge_field(&self.github_username, &candidate.github_username),
            author_name: merge_field(&self.author_name, &candidate.author_name),
            author_email: merge_field(&self.author_email, &candidate.author_email),
            author_url: merge_field(&self.author_url, &candidate.author_url),
        }
    }
}

fn merge_field(prior: &Option<String>, candidate: &Option<String>) -> Option<String> {
    match candidate.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => Some(value.to_string()),
        _ => prior.clone(),
    }
}
