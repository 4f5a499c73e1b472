//! List Styles Tool
//!
//! Describes the built-in styles and shows what each does to the same
//! sample entities.

use serde::Serialize;
use std::io;

use crate::entity::{ClassInfo, MethodInfo};
use crate::mcp_types::{CallToolResult, CallToolResultExt};
use crate::naming::{DisplayNameGenerator, Style};

const SAMPLE_CLASS: &str = "com.example.StackTests";
const SAMPLE_NESTED_CLASS: &str = "when_new";
const SAMPLE_METHOD: &str = "isEmpty_afterCreation";

#[derive(Debug, Serialize)]
struct StyleInfo {
    id: &'static str,
    description: &'static str,
    samples: Samples,
}

#[derive(Debug, Serialize)]
struct Samples {
    class: String,
    nested_class: String,
    method: String,
}

/// Execute the list_styles tool
///
/// # Returns
/// Returns a `CallToolResult` with a JSON array of `{id, description,
/// samples}` objects, one per built-in style
pub fn execute() -> Result<CallToolResult, io::Error> {
    let class = ClassInfo::top_level(SAMPLE_CLASS);
    let nested = ClassInfo::nested(class, SAMPLE_NESTED_CLASS);
    let method = MethodInfo::new(SAMPLE_METHOD, nested.clone()).with_parameters(["int"]);

    let styles: Vec<StyleInfo> = Style::ALL
        .into_iter()
        .map(|style| StyleInfo {
            id: style.id(),
            description: style.description(),
            samples: Samples {
                class: style.name_for_class(nested.outermost()),
                nested_class: style.name_for_nested_class(&nested),
                method: style.name_for_method(&method),
            },
        })
        .collect();

    let output_json = serde_json::to_string(&styles).map_err(|e| {
        io::Error::new(
            io::ErrorKind::Other,
            format!("Failed to serialize output: {e}"),
        )
    })?;

    Ok(CallToolResult::success(output_json))
}
