//! Typed tool invocations and the capability boundary

use async_trait::async_trait;
use serde::Serialize;

use crate::error::CapabilityError;
use crate::results::*;

/// A tool invocation with strongly typed arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolCall {
    /// Follower and article counts for a user
    BlogStatistics {
        /// Handle to look up
        username: String,
    },
    /// Metadata of one article
    ArticleDetails {
        /// Article id
        article_id: String,
    },
    /// Articles written by a user
    UserArticles {
        /// Handle to look up
        username: String,
        /// Maximum articles to fetch
        limit: Option<usize>,
    },
    /// Full-text article search
    SearchArticles {
        /// Search query
        query: String,
        /// Maximum articles to fetch
        limit: Option<usize>,
    },
    /// Tag search
    SearchTags {
        /// Search query
        query: String,
    },
    /// A user's articles ranked by claps
    TopArticlesByClaps {
        /// Handle to look up
        username: String,
        /// Number of articles to keep
        top_count: usize,
    },
    /// Aggregate engagement of a user's articles
    EngagementMetrics {
        /// Handle to look up
        username: String,
    },
    /// Publication profile
    PublicationInfo {
        /// Publication id
        publication_id: String,
    },
    /// Article body
    ArticleContent {
        /// Article id
        article_id: String,
        /// Requested rendering as given by the caller
        format: String,
    },
    /// User profile by id
    UserInfoById {
        /// User id
        user_id: String,
    },
    /// Articles of a publication
    PublicationArticles {
        /// Publication slug or id
        publication_slug_or_id: String,
        /// Maximum articles to fetch
        limit: Option<usize>,
    },
}

impl ToolCall {
    /// Name of the tool this call belongs to
    pub fn tool_name(&self) -> &'static str {
        match self {
            ToolCall::BlogStatistics { .. } => "get_blog_statistics",
            ToolCall::ArticleDetails { .. } => "get_article_details",
            ToolCall::UserArticles { .. } => "get_user_articles",
            ToolCall::SearchArticles { .. } => "search_articles",
            ToolCall::SearchTags { .. } => "search_tags",
            ToolCall::TopArticlesByClaps { .. } => "get_top_articles_by_claps",
            ToolCall::EngagementMetrics { .. } => "get_engagement_metrics",
            ToolCall::PublicationInfo { .. } => "get_publication_info",
            ToolCall::ArticleContent { .. } => "get_article_content",
            ToolCall::UserInfoById { .. } => "get_user_info_by_id",
            ToolCall::PublicationArticles { .. } => "get_publication_articles",
        }
    }
}

/// Result of a tool invocation
///
/// Serializes as the bare result record, without a variant tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ToolOutcome {
    /// Result of [`ToolCall::BlogStatistics`]
    BlogStatistics(BlogStatisticsResult),
    /// Result of [`ToolCall::ArticleDetails`]
    ArticleDetails(ArticleDetailsResult),
    /// Result of [`ToolCall::UserArticles`]
    UserArticles(UserArticlesResult),
    /// Result of [`ToolCall::SearchArticles`]
    SearchArticles(SearchArticlesResult),
    /// Result of [`ToolCall::SearchTags`]
    SearchTags(TagSearchResult),
    /// Result of [`ToolCall::TopArticlesByClaps`]
    TopArticles(TopArticlesResult),
    /// Result of [`ToolCall::EngagementMetrics`]
    EngagementMetrics(EngagementMetricsResult),
    /// Result of [`ToolCall::PublicationInfo`]
    PublicationInfo(PublicationInfoResult),
    /// Result of [`ToolCall::ArticleContent`]
    ArticleContent(ArticleContentResult),
    /// Result of [`ToolCall::UserInfoById`]
    UserInfo(UserInfoResult),
    /// Result of [`ToolCall::PublicationArticles`]
    PublicationArticles(PublicationArticlesResult),
}

impl ToolOutcome {
    /// Whether the underlying operation reported success
    pub fn is_success(&self) -> bool {
        match self {
            ToolOutcome::BlogStatistics(r) => r.success,
            ToolOutcome::ArticleDetails(r) => r.success,
            ToolOutcome::UserArticles(r) => r.success,
            ToolOutcome::SearchArticles(r) => r.success,
            ToolOutcome::SearchTags(r) => r.success,
            ToolOutcome::TopArticles(r) => r.success,
            ToolOutcome::EngagementMetrics(r) => r.success,
            ToolOutcome::PublicationInfo(r) => r.success,
            ToolOutcome::ArticleContent(r) => r.success,
            ToolOutcome::UserInfo(r) => r.success,
            ToolOutcome::PublicationArticles(r) => r.success,
        }
    }
}

/// The operations a tool server can delegate to
///
/// Implementations report domain failures inside the returned outcome; an
/// `Err` means the operation could not produce an outcome at all.
#[async_trait]
pub trait Capability: Send + Sync {
    /// Perform a tool invocation
    async fn invoke(&self, call: ToolCall) -> Result<ToolOutcome, CapabilityError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_names() {
        let call = ToolCall::TopArticlesByClaps {
            username: "jbloggs".to_string(),
            top_count: 10,
        };
        assert_eq!(call.tool_name(), "get_top_articles_by_claps");
    }

    #[test]
    fn test_outcome_serializes_untagged() {
        let outcome = ToolOutcome::SearchTags(TagSearchResult {
            success: true,
            query: "rust".to_string(),
            ..Default::default()
        });
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value, json!({"success": true, "query": "rust", "tags": []}));
        assert!(outcome.is_success());
    }
}
