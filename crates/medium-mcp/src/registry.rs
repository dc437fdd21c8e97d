//! Tool registry: the fixed catalog of tool definitions
//!
//! The catalog is built once and never mutated. `tools/list` answers are a
//! pure projection of it, so repeated calls serialize identically.

use tracing::debug;

use crate::protocol::{InputSchema, PropertySchema, ToolSchema, ToolsListResult};

/// JSON type of a tool parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterType {
    /// JSON string
    String,
    /// JSON integer
    Integer,
}

impl ParameterType {
    /// JSON Schema type name
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterType::String => "string",
            ParameterType::Integer => "integer",
        }
    }
}

/// One parameter of a tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDefinition {
    /// Argument key
    pub name: &'static str,
    /// JSON type
    pub param_type: ParameterType,
    /// Human-readable description
    pub description: &'static str,
    /// Whether the argument must be supplied
    pub required: bool,
}

/// A named, schema-described tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDefinition {
    /// Unique tool name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Parameters in declaration order
    pub parameters: Vec<ParameterDefinition>,
}

impl ToolDefinition {
    fn new(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            parameters: Vec::new(),
        }
    }

    fn required(self, name: &'static str, param_type: ParameterType, description: &'static str) -> Self {
        self.param(name, param_type, description, true)
    }

    fn optional(self, name: &'static str, param_type: ParameterType, description: &'static str) -> Self {
        self.param(name, param_type, description, false)
    }

    fn param(
        mut self,
        name: &'static str,
        param_type: ParameterType,
        description: &'static str,
        required: bool,
    ) -> Self {
        self.parameters.push(ParameterDefinition {
            name,
            param_type,
            description,
            required,
        });
        self
    }

    /// Project this definition into its `tools/list` shape
    pub fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.name.to_string(),
            description: self.description.to_string(),
            input_schema: InputSchema {
                schema_type: "object",
                properties: self
                    .parameters
                    .iter()
                    .map(|p| {
                        (
                            p.name.to_string(),
                            PropertySchema {
                                property_type: p.param_type.as_str(),
                                description: p.description.to_string(),
                            },
                        )
                    })
                    .collect(),
                required: self
                    .parameters
                    .iter()
                    .filter(|p| p.required)
                    .map(|p| p.name.to_string())
                    .collect(),
            },
        }
    }
}

/// Immutable catalog of the tools this server offers
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: Vec<ToolDefinition>,
}

impl ToolRegistry {
    /// Build the catalog
    pub fn new() -> Self {
        use ParameterType as P;

        let tools = vec![
            ToolDefinition::new(
                "get_blog_statistics",
                "Get comprehensive blog statistics for a Medium user including follower count, article count, bio, and social links",
            )
            .required("username", P::String, "Medium username (e.g., 'jbloggs')"),
            ToolDefinition::new(
                "get_article_details",
                "Get detailed information about a specific article including claps, responses, voters, tags, and publication date",
            )
            .required("article_id", P::String, "Medium article ID"),
            ToolDefinition::new(
                "get_user_articles",
                "Get all articles for a Medium user with optional limit",
            )
            .required("username", P::String, "Medium username")
            .optional("limit", P::Integer, "Maximum number of articles to return (optional)"),
            ToolDefinition::new("search_articles", "Search for Medium articles by query string")
                .required(
                    "query",
                    P::String,
                    "Search query (e.g., 'Verifiable credentials', 'Azure AD')",
                )
                .optional("limit", P::Integer, "Maximum number of results to return (optional)"),
            ToolDefinition::new(
                "search_tags",
                "Search for Medium tags and get information about article and author counts",
            )
            .required(
                "query",
                P::String,
                "Tag search query (e.g., 'Custom policies', 'Entra External ID')",
            ),
            ToolDefinition::new(
                "get_top_articles_by_claps",
                "Get the top performing articles for a user ranked by number of claps",
            )
            .required("username", P::String, "Medium username")
            .optional("top_count", P::Integer, "Number of top articles to return (default: 10)"),
            ToolDefinition::new(
                "get_engagement_metrics",
                "Get comprehensive engagement metrics for a user's articles including total and average claps, responses, and voters",
            )
            .required("username", P::String, "Medium username"),
            ToolDefinition::new(
                "get_publication_info",
                "Get publication information including name, tagline, description, followers, tags, and social media links",
            )
            .required("publication_id", P::String, "Medium publication ID"),
            ToolDefinition::new(
                "get_article_content",
                "Get full article content in markdown, HTML, or plain text format. Enables content analysis, archiving, and full-text processing.",
            )
            .required("article_id", P::String, "Medium article ID")
            .optional(
                "format",
                P::String,
                "Content format: 'markdown' (default), 'html', or 'text'",
            ),
            ToolDefinition::new(
                "get_user_info_by_id",
                "Get user information by user ID. Faster than username lookup when you already have the user ID.",
            )
            .required("user_id", P::String, "Medium user ID"),
            ToolDefinition::new(
                "get_publication_articles",
                "Get all articles published in a specific Medium publication. Accepts either publication slug (name) or publication ID.",
            )
            .required(
                "publication_slug_or_id",
                P::String,
                "Publication slug (e.g., 'towards-data-science') or publication ID",
            )
            .optional("limit", P::Integer, "Maximum number of articles to return (optional)"),
        ];

        debug!("Built {} tool definitions", tools.len());
        Self { tools }
    }

    /// All definitions in catalog order
    pub fn tools(&self) -> &[ToolDefinition] {
        &self.tools
    }

    /// Find a definition by name, ignoring ASCII case
    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.iter().find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// The `tools/list` capability schema
    pub fn capability_schema(&self) -> ToolsListResult {
        ToolsListResult {
            tools: self.tools.iter().map(ToolDefinition::schema).collect(),
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
