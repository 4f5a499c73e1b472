//! MCP types re-export
//!
//! This module re-exports the MCP result types the tool executors in
//! `generate` build their output with.

pub use rust_mcp_sdk::schema::{CallToolResult, TextContent};

// Helper extension trait for CallToolResult
pub trait CallToolResultExt {
    fn success(text: String) -> Self;

    /// Text of the first content block, if it is a text block
    fn first_text(&self) -> Option<String>;
}

impl CallToolResultExt for CallToolResult {
    fn success(text: String) -> Self {
        CallToolResult::text_content(vec![TextContent::from(text)])
    }

    fn first_text(&self) -> Option<String> {
        let first = self.content.first()?;
        let value = serde_json::to_value(first).ok()?;
        value["text"].as_str().map(str::to_string)
    }
}
