//! Class Display Name Tool

use serde_json::Value;
use std::io;

use super::{naming_error, render, required_str, select_strategy};
use crate::config::resolver::StrategyResolver;
use crate::entity::ClassInfo;
use crate::mcp_types::CallToolResult;
use crate::naming::DisplayNames;

/// Execute the class_display_name tool
///
/// # Arguments
/// * `arguments` - JSON object with:
///   - `qualified_name`: String - Dot-separated class name
///   - `style`: Option<String> - Built-in style id
///   - `generator`: Option<String> - Registered custom generator id
/// * `resolver` - Consulted when neither `style` nor `generator` is given
///
/// # Returns
/// Returns a `CallToolResult` with JSON containing `display_name` and the
/// `strategy` that produced it
///
/// # Errors
/// Returns an error if arguments are missing or malformed, or the strategy
/// cannot be resolved
pub fn execute(arguments: &Value, resolver: &StrategyResolver) -> Result<CallToolResult, io::Error> {
    let qualified_name = required_str(arguments, "qualified_name")?;
    let class = ClassInfo::top_level(qualified_name);

    log::info!("Generating display name for class {qualified_name}");

    class.validate().map_err(naming_error)?;
    let strategy = select_strategy(arguments, resolver, |r| r.resolve_class(&class))?;
    let display_name = DisplayNames::new(strategy.clone())
        .class_name(&class)
        .map_err(naming_error)?;

    render(display_name, &strategy)
}
