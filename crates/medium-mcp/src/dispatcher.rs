//! Tool dispatcher: maps a tool name and raw arguments onto a capability call
//!
//! `execute` never fails. Unknown tools and failed operations come back as a
//! JSON text with an `error` key, which the server sends as a normal result.

use medium_stats::{Capability, ToolCall};
use serde_json::{json, Map, Value};
use tracing::{debug, error, info};

use crate::arguments::Arguments;
use crate::error::McpError;

/// Default `top_count` for `get_top_articles_by_claps`
pub const DEFAULT_TOP_COUNT: usize = 10;

/// Default `format` for `get_article_content`
pub const DEFAULT_CONTENT_FORMAT: &str = "markdown";

/// Routes tool calls to a [`Capability`]
pub struct ToolDispatcher<C> {
    capability: C,
}

impl<C: Capability> ToolDispatcher<C> {
    /// Create a dispatcher over the given capability
    pub fn new(capability: C) -> Self {
        Self { capability }
    }

    /// The wrapped capability
    pub fn capability(&self) -> &C {
        &self.capability
    }

    /// Execute a tool and return the text to embed as response content
    pub async fn execute(&self, tool_name: &str, arguments: &Map<String, Value>) -> String {
        info!("Executing tool: {}", tool_name);

        let call = match tool_call(tool_name, Arguments::new(arguments)) {
            Ok(Some(call)) => call,
            Ok(None) => {
                error!("Unknown tool: {}", tool_name);
                return json!({ "error": format!("Unknown tool: {}", tool_name) }).to_string();
            }
            Err(e) => return failure(tool_name, &e),
        };

        debug!("Typed call: {:?}", call);
        match self.invoke(call).await {
            Ok(text) => {
                info!("Tool {} completed", tool_name);
                debug!("Result: {}", text);
                text
            }
            Err(e) => failure(tool_name, &e),
        }
    }

    async fn invoke(&self, call: ToolCall) -> Result<String, McpError> {
        let outcome = self.capability.invoke(call).await?;
        Ok(serde_json::to_string_pretty(&outcome)?)
    }
}

fn failure(tool_name: &str, err: &McpError) -> String {
    error!("Tool {} failed: {}", tool_name, err);
    json!({ "error": err.to_string(), "toolName": tool_name }).to_string()
}

/// Build the typed call for a tool, or `None` when the name is not known
fn tool_call(tool_name: &str, args: Arguments<'_>) -> Result<Option<ToolCall>, McpError> {
    let call = match tool_name.to_ascii_lowercase().as_str() {
        "get_blog_statistics" => ToolCall::BlogStatistics {
            username: args.string("username")?,
        },
        "get_article_details" => ToolCall::ArticleDetails {
            article_id: args.string("article_id")?,
        },
        "get_user_articles" => ToolCall::UserArticles {
            username: args.string("username")?,
            limit: args.count("limit"),
        },
        "search_articles" => ToolCall::SearchArticles {
            query: args.string("query")?,
            limit: args.count("limit"),
        },
        "search_tags" => ToolCall::SearchTags {
            query: args.string("query")?,
        },
        "get_top_articles_by_claps" => ToolCall::TopArticlesByClaps {
            username: args.string("username")?,
            top_count: args.count("top_count").unwrap_or(DEFAULT_TOP_COUNT),
        },
        "get_engagement_metrics" => ToolCall::EngagementMetrics {
            username: args.string("username")?,
        },
        "get_publication_info" => ToolCall::PublicationInfo {
            publication_id: args.string("publication_id")?,
        },
        "get_article_content" => ToolCall::ArticleContent {
            article_id: args.string("article_id")?,
            format: args.string_or("format", DEFAULT_CONTENT_FORMAT),
        },
        "get_user_info_by_id" => ToolCall::UserInfoById {
            user_id: args.string("user_id")?,
        },
        "get_publication_articles" => ToolCall::PublicationArticles {
            publication_slug_or_id: args.string("publication_slug_or_id")?,
            limit: args.count("limit"),
        },
        _ => return Ok(None),
    };
    Ok(Some(call))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ToolRegistry;
    use async_trait::async_trait;
    use medium_stats::{
        BlogStatisticsResult, CapabilityError, ToolOutcome, UserArticlesResult,
    };
    use std::sync::Mutex;

    /// Records every call and answers with a canned outcome
    #[derive(Default)]
    struct RecordingCapability {
        calls: Mutex<Vec<ToolCall>>,
        fail: bool,
    }

    #[async_trait]
    impl Capability for RecordingCapability {
        async fn invoke(&self, call: ToolCall) -> Result<ToolOutcome, CapabilityError> {
            self.calls.lock().unwrap().push(call.clone());
            if self.fail {
                return Err(CapabilityError::Snapshot("backend offline".to_string()));
            }
            Ok(match call {
                ToolCall::BlogStatistics { username } => {
                    ToolOutcome::BlogStatistics(BlogStatisticsResult {
                        success: true,
                        username,
                        ..Default::default()
                    })
                }
                _ => ToolOutcome::UserArticles(UserArticlesResult::failed("not stubbed")),
            })
        }
    }

    fn args(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    fn parse(text: &str) -> Value {
        serde_json::from_str(text).unwrap()
    }

    #[tokio::test]
    async fn test_execute_success_is_pretty_json() {
        let dispatcher = ToolDispatcher::new(RecordingCapability::default());
        let text = dispatcher
            .execute("get_blog_statistics", &args(json!({"username": "jbloggs"})))
            .await;

        assert!(text.contains('\n'));
        let value = parse(&text);
        assert_eq!(value["success"], json!(true));
        assert_eq!(value["username"], json!("jbloggs"));
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let dispatcher = ToolDispatcher::new(RecordingCapability::default());
        let text = dispatcher.execute("drop_tables", &Map::new()).await;

        assert_eq!(parse(&text), json!({"error": "Unknown tool: drop_tables"}));
        assert!(dispatcher.capability().calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_parameter_is_operation_failure() {
        let dispatcher = ToolDispatcher::new(RecordingCapability::default());
        let text = dispatcher.execute("get_article_details", &Map::new()).await;

        assert_eq!(
            parse(&text),
            json!({
                "error": "Parameter 'article_id' is required",
                "toolName": "get_article_details"
            })
        );
    }

    #[tokio::test]
    async fn test_capability_error_is_operation_failure() {
        let dispatcher = ToolDispatcher::new(RecordingCapability {
            fail: true,
            ..Default::default()
        });
        let text = dispatcher
            .execute("search_tags", &args(json!({"query": "rust"})))
            .await;

        let value = parse(&text);
        assert_eq!(value["error"], json!("Snapshot error: backend offline"));
        assert_eq!(value["toolName"], json!("search_tags"));
    }

    #[tokio::test]
    async fn test_arguments_are_typed_and_defaulted() {
        let dispatcher = ToolDispatcher::new(RecordingCapability::default());
        dispatcher
            .execute(
                "GET_TOP_ARTICLES_BY_CLAPS",
                &args(json!({"username": "jbloggs"})),
            )
            .await;
        dispatcher
            .execute(
                "get_article_content",
                &args(json!({"article_id": "a1", "format": ""})),
            )
            .await;
        dispatcher
            .execute(
                "get_user_articles",
                &args(json!({"username": "jbloggs", "limit": "-2"})),
            )
            .await;

        let calls = dispatcher.capability().calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec![
                ToolCall::TopArticlesByClaps {
                    username: "jbloggs".to_string(),
                    top_count: DEFAULT_TOP_COUNT,
                },
                ToolCall::ArticleContent {
                    article_id: "a1".to_string(),
                    format: "markdown".to_string(),
                },
                ToolCall::UserArticles {
                    username: "jbloggs".to_string(),
                    limit: Some(0),
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_every_registered_tool_is_dispatchable() {
        let registry = ToolRegistry::new();
        for tool in registry.tools() {
            let mut arguments = Map::new();
            for param in tool.parameters.iter().filter(|p| p.required) {
                arguments.insert(param.name.to_string(), json!("x"));
            }
            let call = tool_call(tool.name, Arguments::new(&arguments)).unwrap();
            let call = call.unwrap_or_else(|| panic!("{} is not dispatchable", tool.name));
            assert_eq!(call.tool_name(), tool.name);
        }
    }
}
