#![allow(dead_code)]

use display_name_mcp::entity::{ClassInfo, MethodInfo};
use display_name_mcp::mcp_types::{CallToolResult, CallToolResultExt};

pub mod helpers;

/// `com.example.Outer` > `Inner`
pub fn outer_inner() -> ClassInfo {
    ClassInfo::nested(ClassInfo::top_level("com.example.Outer"), "Inner")
}

/// A parameterless method declared in a class built from `chain`
pub fn method_in(chain: &[&str], name: &str) -> MethodInfo {
    let class = ClassInfo::from_chain(chain).expect("chain must not be empty");
    MethodInfo::new(name, class)
}

/// Helper to extract text from CallToolResult
pub fn get_result_text(result: &CallToolResult) -> String {
    result.first_text().expect("No text content in result")
}

/// Parse the JSON text of a tool result
pub fn get_result_json(result: &CallToolResult) -> serde_json::Value {
    serde_json::from_str(&get_result_text(result)).expect("Tool output should be JSON")
}
