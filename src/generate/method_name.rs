//! Method Display Name Tool

use serde_json::Value;
use std::io;

use super::{class_chain, naming_error, render, required_str, select_strategy, string_list};
use crate::config::resolver::StrategyResolver;
use crate::entity::MethodInfo;
use crate::mcp_types::CallToolResult;
use crate::naming::DisplayNames;

/// Execute the method_display_name tool
///
/// # Arguments
/// * `arguments` - JSON object with:
///   - `method_name`: String - Name of the test method
///   - `declaring_class`: Vec<String> - Class chain declaring the method,
///     outermost first
///   - `parameter_types`: Option<Vec<String>> - Simple parameter type names
///   - `style`: Option<String> - Built-in style id
///   - `generator`: Option<String> - Registered custom generator id
/// * `resolver` - Consulted when neither `style` nor `generator` is given
///
/// # Errors
/// Returns an error if arguments are missing or malformed, or the strategy
/// cannot be resolved
pub fn execute(arguments: &Value, resolver: &StrategyResolver) -> Result<CallToolResult, io::Error> {
    let method_name = required_str(arguments, "method_name")?;
    let declaring_class = class_chain(arguments, "declaring_class")?;
    let parameter_types = string_list(arguments, "parameter_types")?;

    let method = MethodInfo::new(method_name, declaring_class).with_parameters(parameter_types);

    log::info!(
        "Generating display name for method {}#{}",
        method.declaring_class.qualified_name,
        method.name
    );

    method.validate().map_err(naming_error)?;
    let strategy = select_strategy(arguments, resolver, |r| r.resolve_method(&method))?;
    let display_name = DisplayNames::new(strategy.clone())
        .method_name(&method)
        .map_err(naming_error)?;

    render(display_name, &strategy)
}
