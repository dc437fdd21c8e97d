//! Article records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata and engagement counters of a single article
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ArticleInfo {
    /// Opaque article id
    pub id: String,
    /// Headline
    pub title: String,
    /// Optional sub-headline
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Total claps
    #[serde(default)]
    pub claps: u64,
    /// Number of responses (comments)
    #[serde(default)]
    pub responses_count: u64,
    /// Number of distinct readers who clapped
    #[serde(default)]
    pub voters: u64,
    /// Canonical URL
    #[serde(default)]
    pub url: String,
    /// Publication timestamp
    #[serde(default)]
    pub published_date: DateTime<Utc>,
    /// Author-assigned tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Platform-assigned topics
    #[serde(default)]
    pub topics: Vec<String>,
}
