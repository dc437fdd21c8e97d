//! Command-line argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Medium statistics MCP server.
///
/// Without `--mcp` the binary prints a statistics report for one user and
/// exits.
#[derive(Debug, Parser)]
#[command(name = "medium-mcp")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Serve MCP over stdin/stdout
    #[arg(long, env = "MCP_MODE")]
    pub mcp: bool,

    /// Configuration file path
    #[arg(short, long, env = "MEDIUM_MCP_CONFIG")]
    pub config: Option<PathBuf>,

    /// JSON snapshot to serve, overriding the configured one
    #[arg(short, long, env = "MEDIUM_SNAPSHOT")]
    pub snapshot: Option<PathBuf>,

    /// User to report on in console mode
    #[arg(short, long)]
    pub username: Option<String>,
}
