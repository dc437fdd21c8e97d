//! In-process content platform backed by a JSON snapshot
//!
//! A snapshot is a single JSON document holding users, articles,
//! publications and tags. Lookups are served from memory; searches are
//! case-insensitive substring matches and return hits in document order.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use medium_domain::{
    ArticleInfo, ContentFormat, ContentPlatform, PlatformError, PublicationInfo, TagInfo, UserInfo,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CapabilityError;

/// Snapshot document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Known users
    #[serde(default)]
    pub users: Vec<SnapshotUser>,
    /// Known articles
    #[serde(default)]
    pub articles: Vec<SnapshotArticle>,
    /// Known publications
    #[serde(default)]
    pub publications: Vec<SnapshotPublication>,
    /// Known tags
    #[serde(default)]
    pub tags: Vec<TagInfo>,
}

/// User entry with the ids of the articles they wrote
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotUser {
    /// Profile
    #[serde(flatten)]
    pub info: UserInfo,
    /// Authored articles, newest first
    #[serde(default)]
    pub article_ids: Vec<String>,
}

/// Article entry with its bodies
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotArticle {
    /// Metadata
    #[serde(flatten)]
    pub info: ArticleInfo,
    /// Markdown body
    #[serde(default)]
    pub markdown: Option<String>,
    /// HTML body
    #[serde(default)]
    pub html: Option<String>,
    /// Plain text body
    #[serde(default)]
    pub text: Option<String>,
}

/// Publication entry with the ids of its articles
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotPublication {
    /// Profile
    #[serde(flatten)]
    pub info: PublicationInfo,
    /// Articles in the publication
    #[serde(default)]
    pub article_ids: Vec<String>,
}

/// [`ContentPlatform`] serving a [`Snapshot`] from memory
#[derive(Debug, Default)]
pub struct SnapshotPlatform {
    users: Vec<SnapshotUser>,
    articles: Vec<SnapshotArticle>,
    publications: Vec<SnapshotPublication>,
    tags: Vec<TagInfo>,
    user_by_name: HashMap<String, usize>,
    user_by_id: HashMap<String, usize>,
    article_by_id: HashMap<String, usize>,
    publication_by_id: HashMap<String, usize>,
    publication_by_slug: HashMap<String, usize>,
    tag_by_name: HashMap<String, usize>,
}

impl SnapshotPlatform {
    /// Create a platform with no content; every lookup reports not found
    pub fn empty() -> Self {
        Self::default()
    }

    /// Index a snapshot document
    pub fn new(snapshot: Snapshot) -> Self {
        let Snapshot {
            users,
            articles,
            publications,
            tags,
        } = snapshot;

        let user_by_name = users
            .iter()
            .enumerate()
            .map(|(i, u)| (u.info.username.to_lowercase(), i))
            .collect();
        let user_by_id = users
            .iter()
            .enumerate()
            .map(|(i, u)| (u.info.id.clone(), i))
            .collect();
        let article_by_id = articles
            .iter()
            .enumerate()
            .map(|(i, a)| (a.info.id.clone(), i))
            .collect();
        let publication_by_id = publications
            .iter()
            .enumerate()
            .map(|(i, p)| (p.info.id.clone(), i))
            .collect();
        let publication_by_slug = publications
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.info.slug.as_ref().map(|s| (s.to_lowercase(), i)))
            .collect();
        let tag_by_name = tags
            .iter()
            .enumerate()
            .map(|(i, t)| (t.tag.to_lowercase(), i))
            .collect();

        Self {
            users,
            articles,
            publications,
            tags,
            user_by_name,
            user_by_id,
            article_by_id,
            publication_by_id,
            publication_by_slug,
            tag_by_name,
        }
    }

    /// Load and index a snapshot file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CapabilityError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CapabilityError::Snapshot(format!("{}: {}", path.display(), e)))?;
        let snapshot: Snapshot = serde_json::from_str(&contents)
            .map_err(|e| CapabilityError::Snapshot(format!("{}: {}", path.display(), e)))?;

        debug!(
            "Loaded snapshot {}: {} users, {} articles, {} publications, {} tags",
            path.display(),
            snapshot.users.len(),
            snapshot.articles.len(),
            snapshot.publications.len(),
            snapshot.tags.len()
        );

        Ok(Self::new(snapshot))
    }

    fn user(&self, index: Option<&usize>, key: &str) -> Result<&SnapshotUser, PlatformError> {
        index
            .map(|&i| &self.users[i])
            .ok_or_else(|| PlatformError::not_found("User", key))
    }

    fn article(&self, article_id: &str) -> Result<&SnapshotArticle, PlatformError> {
        self.article_by_id
            .get(article_id)
            .map(|&i| &self.articles[i])
            .ok_or_else(|| PlatformError::not_found("Article", article_id))
    }

    fn publication(&self, publication_id: &str) -> Result<&SnapshotPublication, PlatformError> {
        self.publication_by_id
            .get(publication_id)
            .map(|&i| &self.publications[i])
            .ok_or_else(|| PlatformError::not_found("Publication", publication_id))
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[async_trait]
impl ContentPlatform for SnapshotPlatform {
    async fn user_by_username(&self, username: &str) -> Result<UserInfo, PlatformError> {
        let key = username.trim_start_matches('@').to_lowercase();
        self.user(self.user_by_name.get(&key), username)
            .map(|u| u.info.clone())
    }

    async fn user_by_id(&self, user_id: &str) -> Result<UserInfo, PlatformError> {
        self.user(self.user_by_id.get(user_id), user_id)
            .map(|u| u.info.clone())
    }

    async fn user_article_ids(&self, user_id: &str) -> Result<Vec<String>, PlatformError> {
        self.user(self.user_by_id.get(user_id), user_id)
            .map(|u| u.article_ids.clone())
    }

    async fn article_info(&self, article_id: &str) -> Result<ArticleInfo, PlatformError> {
        self.article(article_id).map(|a| a.info.clone())
    }

    async fn article_content(
        &self,
        article_id: &str,
        format: ContentFormat,
    ) -> Result<String, PlatformError> {
        let article = self.article(article_id)?;
        let body = match format {
            ContentFormat::Markdown => &article.markdown,
            ContentFormat::Html => &article.html,
            ContentFormat::Text => &article.text,
        };
        body.clone().ok_or_else(|| {
            PlatformError::not_found("Article content", format!("{} ({})", article_id, format))
        })
    }

    async fn search_articles(&self, query: &str) -> Result<Vec<String>, PlatformError> {
        let needle = query.to_lowercase();
        Ok(self
            .articles
            .iter()
            .filter(|a| {
                contains_ci(&a.info.title, &needle)
                    || a.info.subtitle.as_deref().is_some_and(|s| contains_ci(s, &needle))
                    || a.info.tags.iter().any(|t| contains_ci(t, &needle))
            })
            .map(|a| a.info.id.clone())
            .collect())
    }

    async fn search_tags(&self, query: &str) -> Result<Vec<String>, PlatformError> {
        let needle = query.to_lowercase();
        Ok(self
            .tags
            .iter()
            .filter(|t| contains_ci(&t.tag, &needle))
            .map(|t| t.tag.clone())
            .collect())
    }

    async fn tag_info(&self, tag_id: &str) -> Result<TagInfo, PlatformError> {
        self.tag_by_name
            .get(&tag_id.to_lowercase())
            .map(|&i| self.tags[i].clone())
            .ok_or_else(|| PlatformError::not_found("Tag", tag_id))
    }

    async fn publication_info(
        &self,
        publication_id: &str,
    ) -> Result<PublicationInfo, PlatformError> {
        self.publication(publication_id).map(|p| p.info.clone())
    }

    async fn publication_id(&self, slug: &str) -> Result<String, PlatformError> {
        self.publication_by_slug
            .get(&slug.to_lowercase())
            .map(|&i| self.publications[i].info.id.clone())
            .ok_or_else(|| PlatformError::not_found("Publication", slug))
    }

    async fn publication_article_ids(
        &self,
        publication_id: &str,
    ) -> Result<Vec<String>, PlatformError> {
        self.publication(publication_id)
            .map(|p| p.article_ids.clone())
    }
}
