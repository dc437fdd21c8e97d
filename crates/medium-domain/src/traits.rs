//! Trait definitions for external interactions
//!
//! The content platform client lives behind [`ContentPlatform`]. Retry,
//! authentication and transport concerns belong to the implementation.

use async_trait::async_trait;

use crate::{ArticleInfo, ContentFormat, PlatformError, PublicationInfo, TagInfo, UserInfo};

/// Read access to the content platform
///
/// All lookups are by opaque string identifiers; list operations return ids
/// that are resolved through the single-entity lookups.
#[async_trait]
pub trait ContentPlatform: Send + Sync {
    /// Look up a user by handle
    async fn user_by_username(&self, username: &str) -> Result<UserInfo, PlatformError>;

    /// Look up a user by id
    async fn user_by_id(&self, user_id: &str) -> Result<UserInfo, PlatformError>;

    /// Ids of the articles written by a user, newest first
    async fn user_article_ids(&self, user_id: &str) -> Result<Vec<String>, PlatformError>;

    /// Article metadata and engagement counters
    async fn article_info(&self, article_id: &str) -> Result<ArticleInfo, PlatformError>;

    /// Article body in the requested rendering
    async fn article_content(
        &self,
        article_id: &str,
        format: ContentFormat,
    ) -> Result<String, PlatformError>;

    /// Ids of articles matching a free-text query
    async fn search_articles(&self, query: &str) -> Result<Vec<String>, PlatformError>;

    /// Ids of tags matching a free-text query
    async fn search_tags(&self, query: &str) -> Result<Vec<String>, PlatformError>;

    /// Usage counts for a tag
    async fn tag_info(&self, tag_id: &str) -> Result<TagInfo, PlatformError>;

    /// Publication profile by id
    async fn publication_info(&self, publication_id: &str)
        -> Result<PublicationInfo, PlatformError>;

    /// Resolve a publication slug to its id
    async fn publication_id(&self, slug: &str) -> Result<String, PlatformError>;

    /// Ids of the articles in a publication
    async fn publication_article_ids(
        &self,
        publication_id: &str,
    ) -> Result<Vec<String>, PlatformError>;
}
