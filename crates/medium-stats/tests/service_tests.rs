//! Integration tests for the statistics service
//!
//! These tests drive StatsService over an in-memory snapshot and over a
//! platform that fails every call.

use async_trait::async_trait;
use medium_domain::{
    ArticleInfo, ContentFormat, ContentPlatform, PlatformError, PublicationInfo, TagInfo, UserInfo,
};
use medium_stats::{Capability, SnapshotPlatform, StatsService, ToolCall, ToolOutcome};

const SNAPSHOT: &str = r##"{
    "users": [
        {
            "id": "u1",
            "username": "jbloggs",
            "fullname": "Joe Bloggs",
            "followers_count": 1500,
            "bio": "Identity nerd",
            "article_ids": ["a1", "a2", "a3", "missing"]
        },
        {"id": "u2", "username": "quiet", "fullname": "Quiet Writer"}
    ],
    "articles": [
        {
            "id": "a1",
            "title": "Verifiable credentials explained",
            "claps": 120,
            "responses_count": 4,
            "voters": 30,
            "url": "https://medium.com/p/a1",
            "published_date": "2024-03-01T10:00:00Z",
            "tags": ["identity", "entra"],
            "markdown": "# Verifiable credentials",
            "text": "Verifiable credentials"
        },
        {
            "id": "a2",
            "title": "Custom policies",
            "subtitle": "Azure AD B2C",
            "claps": 300,
            "responses_count": 10,
            "voters": 45,
            "tags": ["b2c"]
        },
        {
            "id": "a3",
            "title": "Passkeys everywhere",
            "claps": 15,
            "responses_count": 1,
            "voters": 6
        }
    ],
    "publications": [
        {
            "id": "98111c9905da",
            "name": "Identity Weekly",
            "slug": "identity-weekly",
            "followers": 900,
            "creator_id": "u1",
            "article_ids": ["a2", "a3"]
        }
    ],
    "tags": [
        {"tag": "Entra External ID", "articles_count": 12, "authors_count": 3},
        {"tag": "Entra ID", "articles_count": 40, "authors_count": 11}
    ]
}"##;

fn service() -> StatsService<SnapshotPlatform> {
    let snapshot = serde_json::from_str(SNAPSHOT).unwrap();
    StatsService::new(SnapshotPlatform::new(snapshot))
}

/// Platform whose every call fails
struct UnavailablePlatform;

fn unavailable() -> PlatformError {
    PlatformError::Unavailable("service offline".to_string())
}

#[async_trait]
impl ContentPlatform for UnavailablePlatform {
    async fn user_by_username(&self, _: &str) -> Result<UserInfo, PlatformError> {
        Err(unavailable())
    }
    async fn user_by_id(&self, _: &str) -> Result<UserInfo, PlatformError> {
        Err(unavailable())
    }
    async fn user_article_ids(&self, _: &str) -> Result<Vec<String>, PlatformError> {
        Err(unavailable())
    }
    async fn article_info(&self, _: &str) -> Result<ArticleInfo, PlatformError> {
        Err(unavailable())
    }
    async fn article_content(&self, _: &str, _: ContentFormat) -> Result<String, PlatformError> {
        Err(unavailable())
    }
    async fn search_articles(&self, _: &str) -> Result<Vec<String>, PlatformError> {
        Err(unavailable())
    }
    async fn search_tags(&self, _: &str) -> Result<Vec<String>, PlatformError> {
        Err(unavailable())
    }
    async fn tag_info(&self, _: &str) -> Result<TagInfo, PlatformError> {
        Err(unavailable())
    }
    async fn publication_info(&self, _: &str) -> Result<PublicationInfo, PlatformError> {
        Err(unavailable())
    }
    async fn publication_id(&self, _: &str) -> Result<String, PlatformError> {
        Err(unavailable())
    }
    async fn publication_article_ids(&self, _: &str) -> Result<Vec<String>, PlatformError> {
        Err(unavailable())
    }
}

#[tokio::test]
async fn test_blog_statistics() {
    let result = service().blog_statistics("jbloggs").await;
    assert!(result.success);
    assert_eq!(result.username, "jbloggs");
    assert_eq!(result.full_name, "Joe Bloggs");
    assert_eq!(result.user_id, "u1");
    assert_eq!(result.followers_count, 1500);
    assert_eq!(result.article_count, 4);
    assert_eq!(result.bio.as_deref(), Some("Identity nerd"));
}

#[tokio::test]
async fn test_blog_statistics_unknown_user() {
    let result = service().blog_statistics("ghost").await;
    assert!(!result.success);
    assert_eq!(result.error_message.as_deref(), Some("User not found: ghost"));
}

#[tokio::test]
async fn test_user_articles_skips_unfetchable_articles() {
    let result = service().user_articles("jbloggs", None).await;
    assert!(result.success);
    assert_eq!(result.total_article_count, 4);
    let ids: Vec<_> = result.articles.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["a1", "a2", "a3"]);
}

#[tokio::test]
async fn test_user_articles_limit() {
    let result = service().user_articles("jbloggs", Some(2)).await;
    assert!(result.success);
    assert_eq!(result.total_article_count, 4);
    assert_eq!(result.articles.len(), 2);

    let none = service().user_articles("jbloggs", Some(0)).await;
    assert!(none.success);
    assert!(none.articles.is_empty());
}

#[tokio::test]
async fn test_search_articles() {
    let result = service().search_articles("azure", None).await;
    assert!(result.success);
    assert_eq!(result.query, "azure");
    assert_eq!(result.total_results_count, 1);
    assert_eq!(result.articles[0].title, "Custom policies");
}

#[tokio::test]
async fn test_search_tags() {
    let result = service().search_tags("entra").await;
    assert!(result.success);
    assert_eq!(result.tags.len(), 2);
    assert_eq!(result.tags[1].tag, "Entra ID");
    assert_eq!(result.tags[1].articles_count, 40);
}

#[tokio::test]
async fn test_top_articles_by_claps() {
    let result = service().top_articles_by_claps("jbloggs", 2).await;
    assert!(result.success);
    assert_eq!(result.criteria, "Claps");
    let claps: Vec<_> = result.articles.iter().map(|a| a.claps).collect();
    assert_eq!(claps, vec![300, 120]);
}

#[tokio::test]
async fn test_top_articles_propagates_failure() {
    let result = service().top_articles_by_claps("ghost", 10).await;
    assert!(!result.success);
    assert_eq!(result.error_message.as_deref(), Some("User not found: ghost"));
}

#[tokio::test]
async fn test_engagement_metrics() {
    let result = service().engagement_metrics("jbloggs").await;
    assert!(result.success);
    assert_eq!(result.total_articles, 3);
    assert_eq!(result.total_claps, 435);
    assert_eq!(result.total_responses, 15);
    assert_eq!(result.total_voters, 81);
    assert_eq!(result.average_claps_per_article, 145);
    assert_eq!(result.average_responses_per_article, 5);
    assert_eq!(result.average_voters_per_article, 27);
}

#[tokio::test]
async fn test_engagement_metrics_without_articles() {
    let result = service().engagement_metrics("quiet").await;
    assert!(result.success);
    assert_eq!(result.total_articles, 0);
    assert_eq!(result.average_claps_per_article, 0);
}

#[tokio::test]
async fn test_article_content() {
    let result = service().article_content("a1", "MD").await;
    assert!(result.success);
    assert_eq!(result.format, "markdown");
    assert_eq!(result.content, "# Verifiable credentials");
    assert_eq!(result.content_length, 24);

    let text = service().article_content("a1", "text").await;
    assert_eq!(text.format, "text");
    assert_eq!(text.content, "Verifiable credentials");
}

#[tokio::test]
async fn test_article_content_unknown_format_falls_back_to_markdown() {
    let result = service().article_content("a1", "pdf").await;
    assert!(result.success);
    assert_eq!(result.format, "markdown");
}

#[tokio::test]
async fn test_article_content_missing_body() {
    let result = service().article_content("a2", "html").await;
    assert!(!result.success);
    assert!(result.error_message.unwrap().contains("a2"));
}

#[tokio::test]
async fn test_user_info_by_id() {
    let result = service().user_info_by_id("u1").await;
    assert!(result.success);
    assert_eq!(result.username, "jbloggs");
    assert_eq!(
        result.profile_url.as_deref(),
        Some("https://medium.com/@jbloggs")
    );
}

#[tokio::test]
async fn test_publication_info() {
    let result = service().publication_info("98111c9905da").await;
    assert!(result.success);
    assert_eq!(result.name, "Identity Weekly");
    assert_eq!(result.creator.as_deref(), Some("u1"));
}

#[tokio::test]
async fn test_publication_articles_by_slug_and_id() {
    let by_slug = service().publication_articles("identity-weekly", None).await;
    assert!(by_slug.success);
    assert_eq!(by_slug.publication_id, "98111c9905da");
    assert_eq!(by_slug.publication_slug.as_deref(), Some("identity-weekly"));
    assert_eq!(by_slug.total_article_count, 2);

    let by_id = service().publication_articles("98111c9905da", Some(1)).await;
    assert!(by_id.success);
    assert_eq!(by_id.publication_name, "Identity Weekly");
    assert_eq!(by_id.articles.len(), 1);
}

#[tokio::test]
async fn test_failures_are_reported_in_results() {
    let service = StatsService::new(UnavailablePlatform);

    let stats = service.blog_statistics("jbloggs").await;
    assert!(!stats.success);
    assert_eq!(
        stats.error_message.as_deref(),
        Some("Platform error: service offline")
    );

    assert!(!service.search_articles("rust", Some(3)).await.success);
    assert!(!service.search_tags("rust").await.success);
    assert!(!service.engagement_metrics("jbloggs").await.success);
    assert!(!service.publication_articles("identity-weekly", None).await.success);
}

#[tokio::test]
async fn test_capability_dispatch() {
    let outcome = service()
        .invoke(ToolCall::BlogStatistics {
            username: "jbloggs".to_string(),
        })
        .await
        .unwrap();

    assert!(outcome.is_success());
    assert!(matches!(outcome, ToolOutcome::BlogStatistics(_)));

    let value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(value["username"], "jbloggs");
    assert_eq!(value["followersCount"], 1500);
}

#[tokio::test]
async fn test_capability_dispatch_failure_is_still_ok() {
    let outcome = StatsService::new(UnavailablePlatform)
        .invoke(ToolCall::UserInfoById {
            user_id: "u1".to_string(),
        })
        .await
        .unwrap();

    assert!(!outcome.is_success());
}
