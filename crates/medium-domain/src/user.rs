//! User records

use serde::{Deserialize, Serialize};

/// Profile of a platform user as returned by the content platform
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserInfo {
    /// Opaque user id
    pub id: String,
    /// Handle without the leading `@`
    pub username: String,
    /// Display name
    pub fullname: String,
    /// Number of followers
    #[serde(default)]
    pub followers_count: u64,
    /// Profile biography
    #[serde(default)]
    pub bio: Option<String>,
    /// Avatar image URL
    #[serde(default)]
    pub image_url: Option<String>,
    /// Twitter handle without the leading `@`
    #[serde(default)]
    pub twitter_username: Option<String>,
}

impl UserInfo {
    /// Public profile URL for this user
    pub fn profile_url(&self) -> String {
        format!("https://medium.com/@{}", self.username)
    }
}
