pub mod jsonrpc;
pub mod tools;

use crate::extractor::ExtractOptions;
use crate::jenkins::client::JenkinsFetch;
use crate::lens_error::LensError;
use crate::mcp::jsonrpc::*;
use crate::mcp::tools::{call_tool, tool_definitions};
use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

pub const MCP_VERSION: &str = "2024-11-05";
pub const SERVER_NAME: &str = "jenkins-log-lens";

/// # Mcp Server
///
/// Answers tool calls one request at a time with the injected fetch capability.
pub struct McpServer<C: JenkinsFetch> {
    client: C,
    options: ExtractOptions,
    initialized: bool,
}

impl<C: JenkinsFetch> McpServer<C> {
    pub fn new(client: C, options: ExtractOptions) -> Self {
        Self {
            client,
            options,
            initialized: false,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub async fn handle(&mut self, request: JsonRpcRequest) -> Option<Value> {
        let method = request.method.as_str();
        let expects_response = request.expects_response();

        match method {
            "initialize" => {
                // echo the client's protocol version when it sends one.
                let protocol_version = request
                    .params
                    .as_ref()
                    .and_then(|v| v.get("protocolVersion"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(MCP_VERSION);

                Some(json_rpc_response(
                    request.id,
                    json!({
                        "protocolVersion": protocol_version,
                        "serverInfo": {
                            "name": SERVER_NAME,
                            "version": env!("CARGO_PKG_VERSION")
                        },
                        "capabilities": { "tools": {} }
                    }),
                ))
            }
            "notifications/initialized" | "initialized" => {
                self.initialized = true;
                None
            }
            _ if !expects_response => {
                debug!("Ignoring notification {}", method);
                None
            }
            "ping" => Some(json_rpc_response(request.id, json!({}))),
            "tools/list" => Some(json_rpc_response(
                request.id,
                json!({ "tools": tool_definitions() }),
            )),
            "tools/call" => {
                let params = request.params.unwrap_or(Value::Null);
                let Some(name) = params.get("name").and_then(|v| v.as_str()) else {
                    return Some(json_rpc_error(
                        request.id,
                        INVALID_PARAMS,
                        "tools/call requires a tool name",
                    ));
                };
                let args = params.get("arguments").cloned().unwrap_or_else(|| json!({}));

                info!("Calling tool {}", name);
                let output = call_tool(&self.client, &self.options, name, &args).await;
                if output.is_error {
                    warn!("{}", output.text);
                }

                Some(json_rpc_response(
                    request.id,
                    tool_text_result(&output.text, output.is_error),
                ))
            }
            _ => Some(json_rpc_error(
                request.id,
                METHOD_NOT_FOUND,
                &format!("Method not found: {}", method),
            )),
        }
    }

    /// Handle one raw line. Blank lines and notifications produce nothing.
    pub async fn handle_line(&mut self, line: &str) -> Option<Value> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        match serde_json::from_str::<JsonRpcRequest>(line) {
            Ok(request) => self.handle(request).await,
            Err(e) => Some(json_rpc_error(
                None,
                PARSE_ERROR,
                &format!("Parse error: {}", e),
            )),
        }
    }

    pub async fn serve<R, W>(&mut self, reader: R, mut writer: W) -> Result<(), LensError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            if let Some(response) = self.handle_line(&line).await {
                let mut out = serde_json::to_string(&response)?;
                out.push('\n');
                writer.write_all(out.as_bytes()).await?;
                writer.flush().await?;
            }
        }
        Ok(())
    }

    pub async fn run_stdio(&mut self) -> Result<(), LensError> {
        self.serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
            .await
    }
}
