//! Console mode: a fixed statistics report printed through the dispatcher

use std::io::Write;

use medium_stats::Capability;
use serde_json::{json, Map, Value};
use tracing::info;

use crate::config::ConsoleConfig;
use crate::dispatcher::ToolDispatcher;
use crate::error::McpError;

/// Articles listed per report section
pub const REPORT_LIMIT: u64 = 4;

struct ReportStep {
    title: String,
    tool: &'static str,
    arguments: Map<String, Value>,
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn steps(config: &ConsoleConfig) -> Vec<ReportStep> {
    vec![
        ReportStep {
            title: format!("Blog statistics for @{}", config.username),
            tool: "get_blog_statistics",
            arguments: object(json!({ "username": config.username })),
        },
        ReportStep {
            title: format!("Latest {} articles", REPORT_LIMIT),
            tool: "get_user_articles",
            arguments: object(json!({ "username": config.username, "limit": REPORT_LIMIT })),
        },
        ReportStep {
            title: format!("Articles matching '{}'", config.search_query),
            tool: "search_articles",
            arguments: object(json!({ "query": config.search_query, "limit": REPORT_LIMIT })),
        },
        ReportStep {
            title: format!("Tags matching '{}'", config.tag_query),
            tool: "search_tags",
            arguments: object(json!({ "query": config.tag_query })),
        },
    ]
}

/// Run the report and write each section to `out`
pub async fn run<C, W>(
    dispatcher: &ToolDispatcher<C>,
    config: &ConsoleConfig,
    out: &mut W,
) -> Result<(), McpError>
where
    C: Capability,
    W: Write,
{
    info!("Console report for {}", config.username);

    for step in steps(config) {
        let text = dispatcher.execute(step.tool, &step.arguments).await;
        writeln!(out, "=== {} ===", step.title)?;
        writeln!(out, "{}", text)?;
        writeln!(out)?;
    }

    out.flush()?;
    Ok(())
}
