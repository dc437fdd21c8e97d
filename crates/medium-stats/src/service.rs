//! Statistics operations over a content platform

use async_trait::async_trait;
use medium_domain::publication::looks_like_slug;
use medium_domain::{ContentFormat, ContentPlatform, PlatformError};
use tracing::{debug, error, info, warn};

use crate::call::{Capability, ToolCall, ToolOutcome};
use crate::error::CapabilityError;
use crate::results::*;

/// Statistics service
///
/// Each operation reports platform failures inside its result record
/// (`success: false`) rather than returning an error.
pub struct StatsService<P> {
    platform: P,
}

impl<P: ContentPlatform> StatsService<P> {
    /// Create a service reading from the given platform
    pub fn new(platform: P) -> Self {
        Self { platform }
    }

    /// Follower and article counts for a user
    pub async fn blog_statistics(&self, username: &str) -> BlogStatisticsResult {
        info!("blog_statistics - username: {}", username);

        let result = async {
            let user = self.platform.user_by_username(username).await?;
            debug!(
                "User retrieved: id={}, name={}, followers={}",
                user.id, user.fullname, user.followers_count
            );
            let article_ids = self.platform.user_article_ids(&user.id).await?;
            debug!("Retrieved {} article ids", article_ids.len());

            Ok::<_, PlatformError>(BlogStatisticsResult {
                success: true,
                error_message: None,
                username: username.to_string(),
                full_name: user.fullname,
                user_id: user.id,
                followers_count: user.followers_count,
                article_count: article_ids.len() as u64,
                bio: user.bio,
                image_url: user.image_url,
                twitter_username: user.twitter_username,
            })
        }
        .await;

        result.unwrap_or_else(|e| {
            error!("blog_statistics failed for user {}: {}", username, e);
            BlogStatisticsResult::failed(e.to_string())
        })
    }

    /// Metadata and engagement of one article
    pub async fn article_details(&self, article_id: &str) -> ArticleDetailsResult {
        info!("article_details - article id: {}", article_id);

        match self.platform.article_info(article_id).await {
            Ok(article) => {
                debug!(
                    "Article retrieved: title='{}', claps={}, responses={}",
                    article.title, article.claps, article.responses_count
                );
                ArticleDetailsResult::from(article)
            }
            Err(e) => {
                error!("article_details failed for article {}: {}", article_id, e);
                ArticleDetailsResult::failed(e.to_string())
            }
        }
    }

    /// Articles written by a user, optionally limited to the first `limit`
    pub async fn user_articles(&self, username: &str, limit: Option<usize>) -> UserArticlesResult {
        info!("user_articles - username: {}, limit: {:?}", username, limit);

        let result = async {
            let user = self.platform.user_by_username(username).await?;
            let article_ids = self.platform.user_article_ids(&user.id).await?;
            let articles = self.fetch_articles(&article_ids, limit).await;

            info!(
                "user_articles fetched {}/{} articles",
                articles.len(),
                article_ids.len()
            );

            Ok::<_, PlatformError>(UserArticlesResult {
                success: true,
                error_message: None,
                username: username.to_string(),
                full_name: user.fullname,
                total_article_count: article_ids.len() as u64,
                articles,
            })
        }
        .await;

        result.unwrap_or_else(|e| {
            error!("user_articles failed for user {}: {}", username, e);
            UserArticlesResult::failed(e.to_string())
        })
    }

    /// Articles matching a free-text query
    pub async fn search_articles(&self, query: &str, limit: Option<usize>) -> SearchArticlesResult {
        info!("search_articles - query: '{}', limit: {:?}", query, limit);

        match self.platform.search_articles(query).await {
            Ok(article_ids) => {
                debug!("Found {} matching articles", article_ids.len());
                let articles = self.fetch_articles(&article_ids, limit).await;

                SearchArticlesResult {
                    success: true,
                    error_message: None,
                    query: query.to_string(),
                    total_results_count: article_ids.len() as u64,
                    articles,
                }
            }
            Err(e) => {
                error!("search_articles failed for query '{}': {}", query, e);
                SearchArticlesResult::failed(e.to_string())
            }
        }
    }

    /// Tags matching a free-text query, with usage counts
    pub async fn search_tags(&self, query: &str) -> TagSearchResult {
        info!("search_tags - query: '{}'", query);

        let result = async {
            let tag_ids = self.platform.search_tags(query).await?;
            let mut tags = Vec::with_capacity(tag_ids.len());
            for (index, tag_id) in tag_ids.iter().enumerate() {
                debug!("[{}/{}] Fetching tag: {}", index + 1, tag_ids.len(), tag_id);
                let tag = self.platform.tag_info(tag_id).await?;
                tags.push(TagInfoResult::from(tag));
            }

            Ok::<_, PlatformError>(TagSearchResult {
                success: true,
                error_message: None,
                query: query.to_string(),
                tags,
            })
        }
        .await;

        result.unwrap_or_else(|e| {
            error!("search_tags failed for query '{}': {}", query, e);
            TagSearchResult::failed(e.to_string())
        })
    }

    /// A user's articles ranked by claps, best first
    pub async fn top_articles_by_claps(&self, username: &str, top_count: usize) -> TopArticlesResult {
        info!(
            "top_articles_by_claps - username: {}, top count: {}",
            username, top_count
        );

        let user_articles = self.user_articles(username, None).await;
        if !user_articles.success {
            return TopArticlesResult::failed(user_articles.error_message.unwrap_or_default());
        }

        let mut articles = user_articles.articles;
        articles.sort_by(|a, b| b.claps.cmp(&a.claps));
        articles.truncate(top_count);

        for (rank, article) in articles.iter().enumerate() {
            debug!("{}. '{}' - {} claps", rank + 1, article.title, article.claps);
        }

        TopArticlesResult {
            success: true,
            error_message: None,
            username: username.to_string(),
            criteria: "Claps".to_string(),
            articles,
        }
    }

    /// Totals and per-article averages of claps, responses and voters
    pub async fn engagement_metrics(&self, username: &str) -> EngagementMetricsResult {
        info!("engagement_metrics - username: {}", username);

        let user_articles = self.user_articles(username, None).await;
        if !user_articles.success {
            return EngagementMetricsResult::failed(
                user_articles.error_message.unwrap_or_default(),
            );
        }

        let articles = &user_articles.articles;
        let total_articles = articles.len() as u64;
        if total_articles == 0 {
            warn!("No articles found for user {}", username);
            return EngagementMetricsResult {
                success: true,
                username: username.to_string(),
                ..Default::default()
            };
        }

        let total_claps: u64 = articles.iter().map(|a| a.claps).sum();
        let total_responses: u64 = articles.iter().map(|a| a.responses_count).sum();
        let total_voters: u64 = articles.iter().map(|a| a.voters).sum();

        EngagementMetricsResult {
            success: true,
            error_message: None,
            username: username.to_string(),
            total_articles,
            total_claps,
            total_responses,
            total_voters,
            average_claps_per_article: total_claps / total_articles,
            average_responses_per_article: total_responses / total_articles,
            average_voters_per_article: total_voters / total_articles,
        }
    }

    /// Publication profile
    pub async fn publication_info(&self, publication_id: &str) -> PublicationInfoResult {
        info!("publication_info - publication id: {}", publication_id);

        match self.platform.publication_info(publication_id).await {
            Ok(publication) => PublicationInfoResult::from(publication),
            Err(e) => {
                error!(
                    "publication_info failed for publication {}: {}",
                    publication_id, e
                );
                PublicationInfoResult::failed(e.to_string())
            }
        }
    }

    /// Full article body; unknown format names fall back to markdown
    pub async fn article_content(&self, article_id: &str, format: &str) -> ArticleContentResult {
        info!(
            "article_content - article id: {}, format: {}",
            article_id, format
        );

        let format = ContentFormat::parse(format).unwrap_or_else(|| {
            warn!("Invalid format '{}', defaulting to markdown", format);
            ContentFormat::Markdown
        });

        let result = async {
            let article = self.platform.article_info(article_id).await?;
            let content = self.platform.article_content(article_id, format).await?;
            debug!("Content retrieved: {} characters", content.chars().count());

            Ok::<_, PlatformError>(ArticleContentResult {
                success: true,
                error_message: None,
                article_id: article_id.to_string(),
                title: article.title,
                subtitle: article.subtitle,
                format: format.as_str().to_string(),
                content_length: content.chars().count() as u64,
                content,
                url: article.url,
                published_date: article.published_date,
            })
        }
        .await;

        result.unwrap_or_else(|e| {
            error!("article_content failed for article {}: {}", article_id, e);
            ArticleContentResult::failed(e.to_string())
        })
    }

    /// User profile by id
    pub async fn user_info_by_id(&self, user_id: &str) -> UserInfoResult {
        info!("user_info_by_id - user id: {}", user_id);

        match self.platform.user_by_id(user_id).await {
            Ok(user) => UserInfoResult::from(user),
            Err(e) => {
                error!("user_info_by_id failed for user {}: {}", user_id, e);
                UserInfoResult::failed(e.to_string())
            }
        }
    }

    /// Articles of a publication addressed by slug or id
    pub async fn publication_articles(
        &self,
        publication_slug_or_id: &str,
        limit: Option<usize>,
    ) -> PublicationArticlesResult {
        info!(
            "publication_articles - publication: {}, limit: {:?}",
            publication_slug_or_id, limit
        );

        let result = async {
            let publication_id = if looks_like_slug(publication_slug_or_id) {
                let id = self.platform.publication_id(publication_slug_or_id).await?;
                debug!("Resolved publication slug {} to {}", publication_slug_or_id, id);
                id
            } else {
                publication_slug_or_id.to_string()
            };

            let publication = self.platform.publication_info(&publication_id).await?;
            let article_ids = self
                .platform
                .publication_article_ids(&publication_id)
                .await?;
            let articles = self.fetch_articles(&article_ids, limit).await;

            Ok::<_, PlatformError>(PublicationArticlesResult {
                success: true,
                error_message: None,
                publication_id,
                publication_name: publication.name,
                publication_slug: publication.slug,
                total_article_count: article_ids.len() as u64,
                articles,
            })
        }
        .await;

        result.unwrap_or_else(|e| {
            error!(
                "publication_articles failed for publication {}: {}",
                publication_slug_or_id, e
            );
            PublicationArticlesResult::failed(e.to_string())
        })
    }

    /// Fetch details for the first `limit` ids, skipping articles that fail
    async fn fetch_articles(
        &self,
        article_ids: &[String],
        limit: Option<usize>,
    ) -> Vec<ArticleDetailsResult> {
        let wanted = limit.unwrap_or(article_ids.len()).min(article_ids.len());
        let mut articles = Vec::with_capacity(wanted);

        for (index, article_id) in article_ids.iter().take(wanted).enumerate() {
            debug!("[{}/{}] Fetching article: {}", index + 1, wanted, article_id);
            let details = self.article_details(article_id).await;
            if details.success {
                articles.push(details);
            } else {
                warn!(
                    "Failed to fetch article {}: {}",
                    article_id,
                    details.error_message.as_deref().unwrap_or("unknown error")
                );
            }
        }

        articles
    }
}

#[async_trait]
impl<P: ContentPlatform> Capability for StatsService<P> {
    async fn invoke(&self, call: ToolCall) -> Result<ToolOutcome, CapabilityError> {
        let outcome = match call {
            ToolCall::BlogStatistics { username } => {
                ToolOutcome::BlogStatistics(self.blog_statistics(&username).await)
            }
            ToolCall::ArticleDetails { article_id } => {
                ToolOutcome::ArticleDetails(self.article_details(&article_id).await)
            }
            ToolCall::UserArticles { username, limit } => {
                ToolOutcome::UserArticles(self.user_articles(&username, limit).await)
            }
            ToolCall::SearchArticles { query, limit } => {
                ToolOutcome::SearchArticles(self.search_articles(&query, limit).await)
            }
            ToolCall::SearchTags { query } => {
                ToolOutcome::SearchTags(self.search_tags(&query).await)
            }
            ToolCall::TopArticlesByClaps {
                username,
                top_count,
            } => ToolOutcome::TopArticles(self.top_articles_by_claps(&username, top_count).await),
            ToolCall::EngagementMetrics { username } => {
                ToolOutcome::EngagementMetrics(self.engagement_metrics(&username).await)
            }
            ToolCall::PublicationInfo { publication_id } => {
                ToolOutcome::PublicationInfo(self.publication_info(&publication_id).await)
            }
            ToolCall::ArticleContent { article_id, format } => {
                ToolOutcome::ArticleContent(self.article_content(&article_id, &format).await)
            }
            ToolCall::UserInfoById { user_id } => {
                ToolOutcome::UserInfo(self.user_info_by_id(&user_id).await)
            }
            ToolCall::PublicationArticles {
                publication_slug_or_id,
                limit,
            } => ToolOutcome::PublicationArticles(
                self.publication_articles(&publication_slug_or_id, limit)
                    .await,
            ),
        };

        Ok(outcome)
    }
}
