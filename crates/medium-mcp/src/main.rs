//! Medium Statistics MCP Server - Main entry point

use anyhow::{Context, Result};
use clap::Parser;
use medium_mcp::{console, Cli, Config, McpServer, ToolDispatcher};
use medium_stats::{SnapshotPlatform, StatsService};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    // Log to stderr; stdout carries protocol traffic
    let default_level = config
        .logging
        .level
        .clone()
        .unwrap_or_else(|| if cli.mcp { "debug" } else { "info" }.to_string());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let platform = match cli.snapshot.as_ref().or(config.platform.snapshot_path.as_ref()) {
        Some(path) => SnapshotPlatform::from_file(path)
            .with_context(|| format!("Failed to load snapshot {}", path.display()))?,
        None => {
            warn!("No snapshot configured; every lookup will report not found");
            SnapshotPlatform::empty()
        }
    };
    let service = StatsService::new(platform);

    if cli.mcp {
        info!("Starting in MCP mode");
        let mut server = McpServer::new(service, config.server.into());
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        server
            .run(stdin, tokio::io::stdout(), shutdown_signal())
            .await
            .context("MCP server error")?;
    } else {
        let mut report = config.console;
        if let Some(username) = cli.username {
            report.username = username;
        }
        let dispatcher = ToolDispatcher::new(service);
        console::run(&dispatcher, &report, &mut std::io::stdout())
            .await
            .context("Console report failed")?;
    }

    Ok(())
}

/// Resolves on Ctrl+C
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Interrupt received, shutting down"),
        Err(e) => {
            warn!("Failed to listen for interrupt: {}", e);
            std::future::pending::<()>().await
        }
    }
}
