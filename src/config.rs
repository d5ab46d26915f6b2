use serde::{Deserialize, Serialize};

/// What to do when records have different numbers of coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RaggedPolicy {
    /// Fail the load on the first record whose length differs from the first record's
    Reject,
    /// Return the rows as they are
    Allow,
}

impl Default for RaggedPolicy {
    fn default() -> Self {
        RaggedPolicy::Reject
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    pub ragged: RaggedPolicy,
}

impl LoaderConfig {
    pub fn allow_ragged() -> LoaderConfig {
        LoaderConfig {
            ragged: RaggedPolicy::Allow,
        }
    }
}
