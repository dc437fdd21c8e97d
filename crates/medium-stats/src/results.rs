//! Result records returned by the statistics operations
//!
//! Every record carries `success` and, on failure, `errorMessage`. Records are
//! serialized with camelCase keys; that JSON is what tool callers receive.

use chrono::{DateTime, Utc};
use medium_domain::{ArticleInfo, PublicationInfo, TagInfo, UserInfo};
use serde::Serialize;

macro_rules! failure_constructor {
    ($($record:ty),+ $(,)?) => {
        $(
            impl $record {
                /// Failed result carrying only the error message
                pub fn failed(message: impl Into<String>) -> Self {
                    Self {
                        success: false,
                        error_message: Some(message.into()),
                        ..Default::default()
                    }
                }
            }
        )+
    };
}

failure_constructor!(
    BlogStatisticsResult,
    ArticleDetailsResult,
    UserArticlesResult,
    SearchArticlesResult,
    TagSearchResult,
    TopArticlesResult,
    EngagementMetricsResult,
    PublicationInfoResult,
    ArticleContentResult,
    UserInfoResult,
    PublicationArticlesResult,
);

/// Follower and article counts for a user
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogStatisticsResult {
    /// Whether the lookup succeeded
    pub success: bool,
    /// Failure description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Username as requested
    pub username: String,
    /// Display name
    pub full_name: String,
    /// Platform user id
    pub user_id: String,
    /// Followers
    pub followers_count: u64,
    /// Number of articles written
    pub article_count: u64,
    /// Biography
    pub bio: Option<String>,
    /// Avatar URL
    pub image_url: Option<String>,
    /// Twitter handle
    pub twitter_username: Option<String>,
}

/// Metadata and engagement of one article
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDetailsResult {
    /// Whether the lookup succeeded
    pub success: bool,
    /// Failure description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Article id
    pub id: String,
    /// Headline
    pub title: String,
    /// Sub-headline
    pub subtitle: Option<String>,
    /// Claps
    pub claps: u64,
    /// Responses
    pub responses_count: u64,
    /// Voters
    pub voters: u64,
    /// Canonical URL
    pub url: String,
    /// Publication timestamp
    pub published_date: DateTime<Utc>,
    /// Tags
    pub tags: Vec<String>,
    /// Topics
    pub topics: Vec<String>,
}

impl From<ArticleInfo> for ArticleDetailsResult {
    fn from(article: ArticleInfo) -> Self {
        Self {
            success: true,
            error_message: None,
            id: article.id,
            title: article.title,
            subtitle: article.subtitle,
            claps: article.claps,
            responses_count: article.responses_count,
            voters: article.voters,
            url: article.url,
            published_date: article.published_date,
            tags: article.tags,
            topics: article.topics,
        }
    }
}

/// Articles written by a user
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserArticlesResult {
    /// Whether the lookup succeeded
    pub success: bool,
    /// Failure description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Username as requested
    pub username: String,
    /// Display name
    pub full_name: String,
    /// Articles written, before any limit
    pub total_article_count: u64,
    /// Articles fetched
    pub articles: Vec<ArticleDetailsResult>,
}

/// Articles matching a search query
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchArticlesResult {
    /// Whether the search succeeded
    pub success: bool,
    /// Failure description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Query as requested
    pub query: String,
    /// Hits, before any limit
    pub total_results_count: u64,
    /// Articles fetched
    pub articles: Vec<ArticleDetailsResult>,
}

/// Usage counts of one tag
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagInfoResult {
    /// Tag name
    pub tag: String,
    /// Articles carrying the tag
    pub articles_count: u64,
    /// Authors using the tag
    pub authors_count: u64,
}

impl From<TagInfo> for TagInfoResult {
    fn from(tag: TagInfo) -> Self {
        Self {
            tag: tag.tag,
            articles_count: tag.articles_count,
            authors_count: tag.authors_count,
        }
    }
}

/// Tags matching a search query
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagSearchResult {
    /// Whether the search succeeded
    pub success: bool,
    /// Failure description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Query as requested
    pub query: String,
    /// Matching tags
    pub tags: Vec<TagInfoResult>,
}

/// Best performing articles of a user
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopArticlesResult {
    /// Whether the ranking succeeded
    pub success: bool,
    /// Failure description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Username as requested
    pub username: String,
    /// Ranking criteria, e.g. "Claps"
    pub criteria: String,
    /// Ranked articles, best first
    pub articles: Vec<ArticleDetailsResult>,
}

/// Aggregate engagement over all articles of a user
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementMetricsResult {
    /// Whether the aggregation succeeded
    pub success: bool,
    /// Failure description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Username as requested
    pub username: String,
    /// Articles aggregated
    pub total_articles: u64,
    /// Sum of claps
    pub total_claps: u64,
    /// Sum of responses
    pub total_responses: u64,
    /// Sum of voters
    pub total_voters: u64,
    /// Claps per article, rounded down
    pub average_claps_per_article: u64,
    /// Responses per article, rounded down
    pub average_responses_per_article: u64,
    /// Voters per article, rounded down
    pub average_voters_per_article: u64,
}

/// Publication profile
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationInfoResult {
    /// Whether the lookup succeeded
    pub success: bool,
    /// Failure description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Publication id
    pub id: String,
    /// Display name
    pub name: String,
    /// Tagline
    pub tagline: Option<String>,
    /// Description
    pub description: Option<String>,
    /// Tags
    pub tags: Vec<String>,
    /// Followers
    pub followers: u64,
    /// Instagram handle
    pub instagram_username: Option<String>,
    /// Facebook page
    pub facebook_page_name: Option<String>,
    /// Twitter handle
    pub twitter_username: Option<String>,
    /// Home page
    pub url: Option<String>,
    /// Slug
    pub slug: Option<String>,
    /// Creator user id
    pub creator: Option<String>,
    /// Editor user ids
    pub editors: Option<Vec<String>>,
}

impl From<PublicationInfo> for PublicationInfoResult {
    fn from(publication: PublicationInfo) -> Self {
        Self {
            success: true,
            error_message: None,
            id: publication.id,
            name: publication.name,
            tagline: publication.tagline,
            description: publication.description,
            tags: publication.tags,
            followers: publication.followers,
            instagram_username: publication.instagram_username,
            facebook_page_name: publication.facebook_page_name,
            twitter_username: publication.twitter_username,
            url: publication.url,
            slug: publication.slug,
            creator: publication.creator_id,
            editors: publication.editors,
        }
    }
}

/// Full body of an article
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleContentResult {
    /// Whether the lookup succeeded
    pub success: bool,
    /// Failure description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Article id as requested
    pub article_id: String,
    /// Headline
    pub title: String,
    /// Sub-headline
    pub subtitle: Option<String>,
    /// Normalized format name
    pub format: String,
    /// Article body
    pub content: String,
    /// Canonical URL
    pub url: String,
    /// Publication timestamp
    pub published_date: DateTime<Utc>,
    /// Body length in characters
    pub content_length: u64,
}

/// User profile looked up by id
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoResult {
    /// Whether the lookup succeeded
    pub success: bool,
    /// Failure description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// User id
    pub user_id: String,
    /// Handle
    pub username: String,
    /// Display name
    pub full_name: String,
    /// Followers
    pub followers_count: u64,
    /// Biography
    pub bio: Option<String>,
    /// Avatar URL
    pub image_url: Option<String>,
    /// Twitter handle
    pub twitter_username: Option<String>,
    /// Public profile URL
    pub profile_url: Option<String>,
}

impl From<UserInfo> for UserInfoResult {
    fn from(user: UserInfo) -> Self {
        let profile_url = Some(user.profile_url());
        Self {
            success: true,
            error_message: None,
            user_id: user.id,
            username: user.username,
            full_name: user.fullname,
            followers_count: user.followers_count,
            bio: user.bio,
            image_url: user.image_url,
            twitter_username: user.twitter_username,
            profile_url,
        }
    }
}

/// Articles published in a publication
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationArticlesResult {
    /// Whether the lookup succeeded
    pub success: bool,
    /// Failure description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Resolved publication id
    pub publication_id: String,
    /// Publication name
    pub publication_name: String,
    /// Publication slug
    pub publication_slug: Option<String>,
    /// Articles in the publication, before any limit
    pub total_article_count: u64,
    /// Articles fetched
    pub articles: Vec<ArticleDetailsResult>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_failed_result_shape() {
        let result = BlogStatisticsResult::failed("User not found: ghost");
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["success"], json!(false));
        assert_eq!(value["errorMessage"], json!("User not found: ghost"));
        assert_eq!(value["username"], json!(""));
    }

    #[test]
    fn test_success_omits_error_message() {
        let result = BlogStatisticsResult {
            success: true,
            username: "jbloggs".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("errorMessage").is_none());
        assert_eq!(value["followersCount"], json!(0));
    }

    #[test]
    fn test_user_info_profile_url() {
        let user = UserInfo {
            id: "u1".to_string(),
            username: "jbloggs".to_string(),
            fullname: "Joe Bloggs".to_string(),
            ..Default::default()
        };
        let result = UserInfoResult::from(user);
        assert!(result.success);
        assert_eq!(
            result.profile_url.as_deref(),
            Some("https://medium.com/@jbloggs")
        );
    }
}
