//! Nested Class Display Name Tool

use serde_json::Value;
use std::io;

use super::{class_chain, naming_error, render, required_str, select_strategy};
use crate::config::resolver::StrategyResolver;
use crate::entity::ClassInfo;
use crate::mcp_types::CallToolResult;
use crate::naming::DisplayNames;

/// Execute the nested_class_display_name tool
///
/// # Arguments
/// * `arguments` - JSON object with:
///   - `simple_name`: String - Name of the nested class
///   - `enclosing`: Vec<String> - Enclosing classes, outermost first; the
///     first entry is a qualified name, the rest are simple names
///   - `style`: Option<String> - Built-in style id
///   - `generator`: Option<String> - Registered custom generator id
/// * `resolver` - Consulted when neither `style` nor `generator` is given
///
/// # Errors
/// Returns an error if arguments are missing or malformed (including an
/// empty `enclosing` chain), or the strategy cannot be resolved
pub fn execute(arguments: &Value, resolver: &StrategyResolver) -> Result<CallToolResult, io::Error> {
    let simple_name = required_str(arguments, "simple_name")?;
    let enclosing = class_chain(arguments, "enclosing")?;
    let class = ClassInfo::nested(enclosing, simple_name);

    log::info!(
        "Generating display name for nested class {}",
        class.qualified_name
    );

    class.validate().map_err(naming_error)?;
    let strategy = select_strategy(arguments, resolver, |r| r.resolve_class(&class))?;
    let display_name = DisplayNames::new(strategy.clone())
        .nested_class_name(&class)
        .map_err(naming_error)?;

    render(display_name, &strategy)
}
