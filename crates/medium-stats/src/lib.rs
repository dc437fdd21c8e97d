//! Medium statistics capability
//!
//! The operations behind the MCP tools: blog statistics, article details,
//! searches, rankings and engagement aggregates computed over a
//! [`ContentPlatform`](medium_domain::ContentPlatform).
//!
//! # Example
//!
//! ```no_run
//! use medium_stats::{Capability, SnapshotPlatform, StatsService, ToolCall};
//!
//! # async fn demo() -> Result<(), medium_stats::CapabilityError> {
//! let platform = SnapshotPlatform::from_file("medium-snapshot.json")?;
//! let service = StatsService::new(platform);
//!
//! let outcome = service
//!     .invoke(ToolCall::BlogStatistics { username: "jbloggs".to_string() })
//!     .await?;
//! println!("{}", serde_json::to_string_pretty(&outcome)?);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod call;
mod error;
mod results;
mod service;
mod snapshot;

pub use call::{Capability, ToolCall, ToolOutcome};
pub use error::CapabilityError;
pub use results::{
    ArticleContentResult, ArticleDetailsResult, BlogStatisticsResult, EngagementMetricsResult,
    PublicationArticlesResult, PublicationInfoResult, SearchArticlesResult, TagInfoResult,
    TagSearchResult, TopArticlesResult, UserArticlesResult, UserInfoResult,
};
pub use service::StatsService;
pub use snapshot::{Snapshot, SnapshotArticle, SnapshotPlatform, SnapshotPublication, SnapshotUser};
