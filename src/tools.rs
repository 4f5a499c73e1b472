//! MCP Tool definitions and implementations
//!
//! This module defines all the tools provided by the display-name-mcp server
//! using the rust-mcp-sdk macros and conventions.

use rust_mcp_sdk::macros::{mcp_tool, JsonSchema};
use rust_mcp_sdk::schema::{schema_utils::CallToolError, CallToolResult};
use rust_mcp_sdk::tool_box;

use crate::config::resolver::StrategyResolver;
use crate::generate::{class_name, list_styles, method_name, nested_class_name};

/// Generate the display name of a top-level test class
#[mcp_tool(
    name = "class_display_name",
    description = "Generate the display name of a top-level test class from its qualified name. Styles: 'default' (simple name), 'underscore' (underscores become spaces), 'camel_case' (split at camel-case and digit boundaries), 'sentences'. Without 'style' or 'generator' the server configuration decides. Returns JSON with 'display_name' and 'strategy'."
)]
#[derive(Debug, ::serde::Deserialize, ::serde::Serialize, JsonSchema)]
pub struct ClassDisplayNameTool {
    /// Dot-separated class name, e.g. "com.example.CalculatorTests"
    pub qualified_name: String,
    /// Built-in style id: "default", "underscore", "camel_case" or "sentences"
    #[serde(default)]
    pub style: Option<String>,
    /// Id of a registered custom generator (exclusive with style)
    #[serde(default)]
    pub generator: Option<String>,
}

/// Generate the display name of a test class nested inside another
#[mcp_tool(
    name = "nested_class_display_name",
    description = "Generate the display name of a test class nested inside other test classes. 'enclosing' lists the enclosing classes outermost first: a qualified name followed by simple names. The 'sentences' style appends '...' so nested groups read as the start of a sentence. Returns JSON with 'display_name' and 'strategy'."
)]
#[derive(Debug, ::serde::Deserialize, ::serde::Serialize, JsonSchema)]
pub struct NestedClassDisplayNameTool {
    /// Simple name of the nested class
    pub simple_name: String,
    /// Enclosing classes, outermost first (e.g. ["com.example.StackTests", "WhenNew"])
    pub enclosing: Vec<String>,
    /// Built-in style id: "default", "underscore", "camel_case" or "sentences"
    #[serde(default)]
    pub style: Option<String>,
    /// Id of a registered custom generator (exclusive with style)
    #[serde(default)]
    pub generator: Option<String>,
}

/// Generate the display name of a test method
#[mcp_tool(
    name = "method_display_name",
    description = "Generate the display name of a test method. 'declaring_class' is the class chain declaring the method, outermost first. The 'default' style renders 'name(Type1, Type2)'; 'sentences' prefixes the names of nested classes (excluding the outermost) and ends with a period. Returns JSON with 'display_name' and 'strategy'."
)]
#[derive(Debug, ::serde::Deserialize, ::serde::Serialize, JsonSchema)]
pub struct MethodDisplayNameTool {
    /// Name of the test method
    pub method_name: String,
    /// Declaring class chain, outermost first (e.g. ["com.example.StackTests", "WhenNew"])
    pub declaring_class: Vec<String>,
    /// Simple type names of the parameters in order (default: none)
    #[serde(default)]
    pub parameter_types: Option<Vec<String>>,
    /// Built-in style id: "default", "underscore", "camel_case" or "sentences"
    #[serde(default)]
    pub style: Option<String>,
    /// Id of a registered custom generator (exclusive with style)
    #[serde(default)]
    pub generator: Option<String>,
}

/// List the built-in naming styles with sample output
#[mcp_tool(
    name = "list_styles",
    description = "List the built-in display name styles with a description and sample class, nested class and method names rendered by each."
)]
#[derive(Debug, ::serde::Deserialize, ::serde::Serialize, JsonSchema)]
pub struct ListStylesTool {}

// Implement tool execution logic for each tool
impl ClassDisplayNameTool {
    pub fn call_tool(&self, resolver: &StrategyResolver) -> Result<CallToolResult, CallToolError> {
        let args = serde_json::json!({
            "qualified_name": self.qualified_name,
            "style": self.style,
            "generator": self.generator
        });

        class_name::execute(&args, resolver).map_err(CallToolError::new)
    }
}

impl NestedClassDisplayNameTool {
    pub fn call_tool(&self, resolver: &StrategyResolver) -> Result<CallToolResult, CallToolError> {
        let args = serde_json::json!({
            "simple_name": self.simple_name,
            "enclosing": self.enclosing,
            "style": self.style,
            "generator": self.generator
        });

        nested_class_name::execute(&args, resolver).map_err(CallToolError::new)
    }
}

impl MethodDisplayNameTool {
    pub fn call_tool(&self, resolver: &StrategyResolver) -> Result<CallToolResult, CallToolError> {
        let args = serde_json::json!({
            "method_name": self.method_name,
            "declaring_class": self.declaring_class,
            "parameter_types": self.parameter_types,
            "style": self.style,
            "generator": self.generator
        });

        method_name::execute(&args, resolver).map_err(CallToolError::new)
    }
}

impl ListStylesTool {
    pub fn call_tool(&self) -> Result<CallToolResult, CallToolError> {
        list_styles::execute().map_err(CallToolError::new)
    }
}

// Generate an enum with all tools
tool_box!(
    DisplayNameTools,
    [
        ClassDisplayNameTool,
        NestedClassDisplayNameTool,
        MethodDisplayNameTool,
        ListStylesTool
    ]
);
