//! MCP server implementation

use std::future::Future;

use medium_stats::Capability;
use serde::Serialize;
use serde_json::{json, Map, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, info, warn};

use crate::dispatcher::ToolDispatcher;
use crate::error::McpError;
use crate::protocol::*;
use crate::registry::ToolRegistry;

/// Identity and startup behavior of the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerOptions {
    /// Name reported in `serverInfo`
    pub name: String,
    /// Version reported in `serverInfo`
    pub version: String,
    /// Protocol version reported by `initialize`
    pub protocol_version: String,
    /// Emit the server identity once before reading any input
    pub announce_on_startup: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            name: "medium-stats".to_string(),
            version: "1.0.0".to_string(),
            protocol_version: "2024-11-05".to_string(),
            announce_on_startup: true,
        }
    }
}

/// Connection lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No `notifications/initialized` seen yet
    Uninitialized,
    /// Client completed the handshake
    Ready,
    /// Input closed or shutdown requested; nothing more is read or written
    Terminal,
}

/// MCP Server
///
/// Handles Model Context Protocol messages over a line-delimited transport.
/// Messages are processed one at a time, so responses leave in the order
/// their requests arrived.
pub struct McpServer<C> {
    options: ServerOptions,
    registry: ToolRegistry,
    dispatcher: ToolDispatcher<C>,
    state: SessionState,
}

impl<C: Capability> McpServer<C> {
    /// Create a new MCP server over the given capability
    pub fn new(capability: C, options: ServerOptions) -> Self {
        Self {
            options,
            registry: ToolRegistry::new(),
            dispatcher: ToolDispatcher::new(capability),
            state: SessionState::Uninitialized,
        }
    }

    /// Current session state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Serve until the input closes or `shutdown` resolves
    ///
    /// Shutdown is only observed while waiting for input; a message already
    /// being handled runs to completion. Errors are returned only when the
    /// transport itself fails.
    pub async fn run<R, W, S>(&mut self, mut reader: R, mut writer: W, shutdown: S) -> Result<(), McpError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
        S: Future<Output = ()>,
    {
        info!("MCP server started");
        tokio::pin!(shutdown);

        if self.options.announce_on_startup {
            debug!("Sending server info");
            write_line(&mut writer, &self.initialize_result()).await?;
        }

        let mut line = Vec::new();
        loop {
            line.clear();
            let read = tokio::select! {
                biased;
                _ = &mut shutdown => {
                    info!("Shutdown requested");
                    break;
                }
                read = reader.read_until(b'\n', &mut line) => read?,
            };

            if read == 0 {
                info!("Input closed");
                break;
            }
            if line.iter().all(u8::is_ascii_whitespace) {
                continue;
            }

            debug!("Received: {}", String::from_utf8_lossy(&line).trim_end());
            if let Some(response) = self.handle_line(&line).await {
                write_line(&mut writer, &response).await?;
            }
        }

        self.state = SessionState::Terminal;
        info!("MCP server stopped");
        Ok(())
    }

    /// Handle one input line, returning the response owed for it, if any
    pub async fn handle_line(&mut self, line: &[u8]) -> Option<JsonRpcResponse> {
        let message = match JsonRpcMessage::parse(line) {
            Ok(message) => message,
            Err(e) => {
                if let McpError::Parse(source) = &e {
                    error!("Failed to parse request: {}", source);
                }
                return Some(JsonRpcResponse::from_error(None, &e));
            }
        };

        self.handle_message(message).await
    }

    /// Handle a parsed message, returning the response owed for it, if any
    pub async fn handle_message(&mut self, message: JsonRpcMessage) -> Option<JsonRpcResponse> {
        let method = message.method().to_string();
        debug!(
            "Processing {} (id: {})",
            method,
            message.id.as_deref().map_or("none", |id| id.get())
        );

        let outcome = self.route(&method, &message).await;

        let Some(id) = message.id else {
            match outcome {
                Err(McpError::MethodNotFound(_)) => {
                    warn!("Unknown notification ignored: {}", method);
                }
                Err(e) => warn!("Error handling notification {}: {}", method, e),
                Ok(_) => debug!("Notification {} handled", method),
            }
            return None;
        };

        match outcome {
            Ok(result) => Some(JsonRpcResponse::success(id, result)),
            Err(e) => {
                error!("Error handling {}: {}", method, e);
                Some(JsonRpcResponse::from_error(Some(id), &e))
            }
        }
    }

    async fn route(&mut self, method: &str, message: &JsonRpcMessage) -> Result<Value, McpError> {
        match method {
            "initialize" => Ok(serde_json::to_value(self.initialize_result())?),
            "notifications/initialized" => {
                info!("Client initialized");
                self.state = SessionState::Ready;
                Ok(json!({}))
            }
            "tools/list" => Ok(serde_json::to_value(self.registry.capability_schema())?),
            "tools/call" => self.handle_tool_call(message.params_object()?).await,
            "ping" => Ok(json!({})),
            other => Err(McpError::MethodNotFound(other.to_string())),
        }
    }

    /// Resolve and run a `tools/call`
    ///
    /// A missing or null `name` is rejected with `invalid_params` instead of
    /// being dispatched as an unknown tool with an empty name. Unknown tools
    /// and failed operations come back as content of a successful result.
    async fn handle_tool_call(&self, params: Map<String, Value>) -> Result<Value, McpError> {
        let tool_name = match params.get("name") {
            None | Some(Value::Null) => {
                return Err(McpError::InvalidParams("Missing 'name' parameter".to_string()))
            }
            Some(Value::String(name)) => name.clone(),
            Some(other) => other.to_string(),
        };

        let empty = Map::new();
        let arguments = match params.get("arguments") {
            None | Some(Value::Null) => &empty,
            Some(Value::Object(arguments)) => arguments,
            Some(_) => {
                return Err(McpError::InvalidArguments(
                    "'arguments' must be an object".to_string(),
                ))
            }
        };

        let text = self.dispatcher.execute(&tool_name, arguments).await;
        Ok(serde_json::to_value(ToolCallResult::text(text))?)
    }

    fn initialize_result(&self) -> InitializeResult {
        InitializeResult {
            protocol_version: self.options.protocol_version.clone(),
            server_info: ServerInfo {
                name: self.options.name.clone(),
                version: self.options.version.clone(),
            },
            capabilities: ServerCapabilities::default(),
        }
    }
}

/// Write one JSON line and flush
async fn write_line<W, T>(writer: &mut W, message: &T) -> Result<(), McpError>
where
    W: AsyncWrite + Unpin,
    T: Serialize,
{
    let text = serde_json::to_string(message)?;
    writer.write_all(text.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    debug!("Sent: {}", text);
    Ok(())
}
