//! Tag records

use serde::{Deserialize, Serialize};

/// Usage counts for a single tag
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TagInfo {
    /// Tag name (also used as its id)
    pub tag: String,
    /// Number of articles carrying the tag
    #[serde(default)]
    pub articles_count: u64,
    /// Number of authors who used the tag
    #[serde(default)]
    pub authors_count: u64,
}
