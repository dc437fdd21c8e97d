//! Publication records

use serde::{Deserialize, Serialize};

/// Publication profile
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PublicationInfo {
    /// Opaque publication id
    pub id: String,
    /// Display name
    pub name: String,
    /// URL slug, e.g. `towards-data-science`
    #[serde(default)]
    pub slug: Option<String>,
    /// Short tagline
    #[serde(default)]
    pub tagline: Option<String>,
    /// Long description
    #[serde(default)]
    pub description: Option<String>,
    /// Publication tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Number of followers
    #[serde(default)]
    pub followers: u64,
    /// Instagram handle
    #[serde(default)]
    pub instagram_username: Option<String>,
    /// Facebook page name
    #[serde(default)]
    pub facebook_page_name: Option<String>,
    /// Twitter handle
    #[serde(default)]
    pub twitter_username: Option<String>,
    /// Home page URL
    #[serde(default)]
    pub url: Option<String>,
    /// User id of the creator
    #[serde(default)]
    pub creator_id: Option<String>,
    /// User ids of the editors
    #[serde(default)]
    pub editors: Option<Vec<String>>,
}

/// Whether a publication reference should be resolved as a slug
///
/// Ids are long opaque tokens without dashes; anything shorter than ten
/// characters or containing a dash is treated as a slug.
pub fn looks_like_slug(slug_or_id: &str) -> bool {
    slug_or_id.chars().count() < 10 || slug_or_id.contains('-')
}
