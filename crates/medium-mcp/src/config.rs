//! Configuration for the MCP server binary.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::McpError;
use crate::server::ServerOptions;

/// Server configuration, loaded from TOML. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Identity and startup behavior
    #[serde(default)]
    pub server: ServerConfig,

    /// Content source
    #[serde(default)]
    pub platform: PlatformConfig,

    /// Log filtering
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Console-mode report inputs
    #[serde(default)]
    pub console: ConsoleConfig,
}

/// `[server]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Name reported to clients
    #[serde(default = "default_name")]
    pub name: String,

    /// Version reported to clients
    #[serde(default = "default_version")]
    pub version: String,

    /// Protocol version reported by `initialize`
    #[serde(default = "default_protocol_version")]
    pub protocol_version: String,

    /// Emit the server identity before reading input
    #[serde(default = "default_true")]
    pub announce_on_startup: bool,
}

/// `[platform]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// JSON snapshot to serve; none means an empty platform
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_path: Option<PathBuf>,
}

/// `[logging]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive, e.g. "debug" or "medium_mcp=trace"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

/// `[console]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// User whose statistics are reported
    #[serde(default = "default_username")]
    pub username: String,

    /// Article search query
    #[serde(default = "default_search_query")]
    pub search_query: String,

    /// Tag search query
    #[serde(default = "default_tag_query")]
    pub tag_query: String,
}

impl Config {
    /// Default configuration file path (`~/.medium-mcp/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".medium-mcp").join("config.toml"))
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, McpError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            McpError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&contents)
            .map_err(|e| McpError::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Load the explicit file if given, else the default file if it exists,
    /// else built-in defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self, McpError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            version: default_version(),
            protocol_version: default_protocol_version(),
            announce_on_startup: true,
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            search_query: default_search_query(),
            tag_query: default_tag_query(),
        }
    }
}

impl From<ServerConfig> for ServerOptions {
    fn from(config: ServerConfig) -> Self {
        Self {
            name: config.name,
            version: config.version,
            protocol_version: config.protocol_version,
            announce_on_startup: config.announce_on_startup,
        }
    }
}

fn default_name() -> String {
    "medium-stats".to_string()
}

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_protocol_version() -> String {
    "2024-11-05".to_string()
}

fn default_true() -> bool {
    true
}

fn default_username() -> String {
    "jbloggs".to_string()
}

fn default_search_query() -> String {
    "Verifiable credentials".to_string()
}

fn default_tag_query() -> String {
    "Entra External ID".to_string()
}
