//! Medium Statistics MCP Server
//!
//! Model Context Protocol server exposing Medium blog statistics to AI
//! clients over line-delimited JSON-RPC on stdio.
//!
//! Provides 11 MCP tools, among them:
//! - `get_blog_statistics` - Followers and article count of a user
//! - `get_user_articles` - A user's articles with engagement counters
//! - `search_articles` / `search_tags` - Free-text search
//! - `get_engagement_metrics` - Totals and averages over a user's articles
//! - `get_article_content` - Full article body as markdown, HTML or text
//!
//! # Example
//!
//! ```no_run
//! use medium_mcp::{McpServer, ServerOptions};
//! use medium_stats::{SnapshotPlatform, StatsService};
//!
//! # async fn demo() -> Result<(), medium_mcp::McpError> {
//! let service = StatsService::new(SnapshotPlatform::empty());
//! let mut server = McpServer::new(service, ServerOptions::default());
//!
//! let stdin = tokio::io::BufReader::new(tokio::io::stdin());
//! server
//!     .run(stdin, tokio::io::stdout(), std::future::pending())
//!     .await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod arguments;
mod cli;
mod config;
pub mod console;
mod dispatcher;
mod error;
mod protocol;
mod registry;
mod server;

pub use arguments::Arguments;
pub use cli::Cli;
pub use config::{Config, ConsoleConfig, LoggingConfig, PlatformConfig, ServerConfig};
pub use dispatcher::{ToolDispatcher, DEFAULT_CONTENT_FORMAT, DEFAULT_TOP_COUNT};
pub use error::{ErrorCode, McpError};
pub use protocol::{
    ContentItem, ErrorObject, InitializeResult, InputSchema, JsonRpcMessage, JsonRpcResponse,
    PropertySchema, ServerCapabilities, ServerInfo, ToolCallResult, ToolSchema,
    RequestId, ToolsCapability, ToolsListResult, JSONRPC_VERSION,
};
pub use registry::{ParameterDefinition, ParameterType, ToolDefinition, ToolRegistry};
pub use server::{McpServer, ServerOptions, SessionState};
