//! Strategy Selection
//!
//! Declares which naming strategy applies to which test grouping and turns
//! those declarations into concrete [`Strategy`](crate::naming::Strategy)
//! values:
//! - `GenerationConfig`: the declarations, loadable from JSON
//! - `registry`: custom generators addressable by id
//! - `resolver`: nearest-declaration lookup along the enclosing chain

pub mod registry;
pub mod resolver;

use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::naming::Style;

/// Environment variable holding the path of the configuration file
pub const CONFIG_ENV_VAR: &str = "DISPLAY_NAME_CONFIG";

/// A strategy declaration for one grouping
///
/// Serialized as `{"style": "sentences"}` or `{"generator": "my::Generator"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Declaration {
    /// One of the built-in styles
    Style(Style),
    /// A custom generator registered under this id
    Generator(String),
}

impl From<Style> for Declaration {
    fn from(style: Style) -> Self {
        Declaration::Style(style)
    }
}

/// Strategy declarations for a test suite
///
/// # Example
/// ```
/// use display_name_mcp::config::{Declaration, GenerationConfig};
/// use display_name_mcp::naming::Style;
///
/// let config = GenerationConfig::from_json_str(r#"{
///     "default": {"style": "camel_case"},
///     "groupings": {"com.example.StackTests": {"style": "sentences"}}
/// }"#).unwrap();
///
/// assert_eq!(config.default, Some(Declaration::Style(Style::CamelCase)));
/// assert_eq!(config.groupings.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationConfig {
    /// Applies to every class without a closer declaration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Declaration>,
    /// Declarations keyed by qualified class name
    #[serde(default)]
    pub groupings: HashMap<String, Declaration>,
}

impl GenerationConfig {
    /// Declare a strategy for the grouping rooted at `qualified_name`
    pub fn declare(
        mut self,
        qualified_name: impl Into<String>,
        declaration: impl Into<Declaration>,
    ) -> Self {
        self.groupings
            .insert(qualified_name.into(), declaration.into());
        self
    }

    /// Set the suite-wide declaration
    pub fn with_default(mut self, declaration: impl Into<Declaration>) -> Self {
        self.default = Some(declaration.into());
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).wrap_err("Invalid display name configuration")
    }

    /// Load declarations from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading display name configuration from {}", path.display());

        let json = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read configuration file {}", path.display()))?;

        Self::from_json_str(&json).wrap_err_with(|| format!("In {}", path.display()))
    }

    /// Load from the file named by `DISPLAY_NAME_CONFIG`
    ///
    /// An unset variable yields an empty configuration, which resolves every
    /// class to DEFAULT.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_file(path),
            None => {
                log::debug!("{CONFIG_ENV_VAR} not set, using default naming");
                Ok(Self::default())
            }
        }
    }
}
