//! MCP Server Handler Implementation
//!
//! This module implements the ServerHandler trait to handle MCP protocol messages
//! and route tool calls to the appropriate implementations.

use async_trait::async_trait;
use rust_mcp_sdk::schema::{
    schema_utils::CallToolError, CallToolRequestParams, CallToolResult, ListToolsResult,
    PaginatedRequestParams, RpcError,
};
use rust_mcp_sdk::{mcp_server::ServerHandler, McpServer};
use std::sync::Arc;

use crate::config::resolver::StrategyResolver;
use crate::tools::DisplayNameTools;

/// Handler for the display name MCP server
///
/// Holds the resolver used when a tool call names no strategy itself.
#[derive(Debug, Default)]
pub struct DisplayNameServerHandler {
    resolver: StrategyResolver,
}

impl DisplayNameServerHandler {
    pub fn new(resolver: StrategyResolver) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl ServerHandler for DisplayNameServerHandler {
    async fn handle_list_tools_request(
        &self,
        _request: Option<PaginatedRequestParams>,
        _runtime: Arc<dyn McpServer>,
    ) -> Result<ListToolsResult, RpcError> {
        Ok(ListToolsResult {
            tools: DisplayNameTools::tools(),
            meta: None,
            next_cursor: None,
        })
    }

    async fn handle_call_tool_request(
        &self,
        request: CallToolRequestParams,
        _runtime: Arc<dyn McpServer>,
    ) -> Result<CallToolResult, CallToolError> {
        log::info!("Calling tool: {}", request.name);

        // Convert request params into the DisplayNameTools enum
        let tool: DisplayNameTools = DisplayNameTools::try_from(request)?;

        // Match the tool variant and execute its corresponding logic
        match tool {
            DisplayNameTools::ClassDisplayNameTool(t) => t.call_tool(&self.resolver),
            DisplayNameTools::NestedClassDisplayNameTool(t) => t.call_tool(&self.resolver),
            DisplayNameTools::MethodDisplayNameTool(t) => t.call_tool(&self.resolver),
            DisplayNameTools::ListStylesTool(t) => t.call_tool(),
        }
    }
}
