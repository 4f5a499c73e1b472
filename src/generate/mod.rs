//! Display Name Tools
//!
//! Executors behind the MCP tools. Each takes the raw JSON arguments of a
//! tool call, builds entity metadata from them and returns the generated
//! name as compact JSON:
//! - `class_name`: display name of a top-level test class
//! - `nested_class_name`: display name of a nested test class
//! - `method_name`: display name of a test method
//! - `list_styles`: the built-in styles with sample output

pub mod class_name;
pub mod list_styles;
pub mod method_name;
pub mod nested_class_name;

use serde::Serialize;
use serde_json::Value;
use std::io;

use crate::config::resolver::StrategyResolver;
use crate::entity::ClassInfo;
use crate::mcp_types::{CallToolResult, CallToolResultExt};
use crate::naming::error::NamingError;
use crate::naming::{Strategy, Style};

#[derive(Debug, Serialize)]
struct GeneratedName<'a> {
    display_name: String,
    strategy: &'a str,
}

/// Pick the strategy for a tool call
///
/// An explicit `style` or `generator` argument wins; otherwise `resolve`
/// asks the configured resolver.
fn select_strategy(
    arguments: &Value,
    resolver: &StrategyResolver,
    resolve: impl FnOnce(&StrategyResolver) -> Result<Strategy, NamingError>,
) -> Result<Strategy, io::Error> {
    let style = optional_str(arguments, "style")?;
    let generator = optional_str(arguments, "generator")?;

    let strategy = match (style, generator) {
        (Some(_), Some(_)) => {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "Arguments 'style' and 'generator' are mutually exclusive",
            ))
        }
        (Some(style), None) => style.parse::<Style>().map(Strategy::Builtin),
        (None, Some(id)) => resolver.registry().instantiate(id),
        (None, None) => resolve(resolver),
    };

    strategy.map_err(naming_error)
}

fn required_str<'a>(arguments: &'a Value, key: &str) -> Result<&'a str, io::Error> {
    arguments[key].as_str().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Missing or invalid '{key}' argument"),
        )
    })
}

fn optional_str<'a>(arguments: &'a Value, key: &str) -> Result<Option<&'a str>, io::Error> {
    match &arguments[key] {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.as_str())),
        _ => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Invalid '{key}' argument (must be a string)"),
        )),
    }
}

/// Read an optional array of strings, treating an absent key as empty
fn string_list(arguments: &Value, key: &str) -> Result<Vec<String>, io::Error> {
    let invalid = || {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Invalid '{key}' argument (must be an array of strings)"),
        )
    };

    match &arguments[key] {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string).ok_or_else(invalid))
            .collect(),
        _ => Err(invalid()),
    }
}

/// Build a class from an outermost-first chain argument
fn class_chain(arguments: &Value, key: &str) -> Result<ClassInfo, io::Error> {
    let chain = string_list(arguments, key)?;
    ClassInfo::from_chain(&chain).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Argument '{key}' must name at least one class"),
        )
    })
}

fn naming_error(error: NamingError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, error.to_string())
}

fn render(display_name: String, strategy: &Strategy) -> Result<CallToolResult, io::Error> {
    let output = GeneratedName {
        display_name,
        strategy: strategy.id(),
    };

    let output_json = serde_json::to_string(&output).map_err(|e| {
        io::Error::new(
            io::ErrorKind::Other,
            format!("Failed to serialize output: {e}"),
        )
    })?;

    Ok(CallToolResult::success(output_json))
}
