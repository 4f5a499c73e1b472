use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entity::{ClassInfo, MethodInfo};
use crate::naming::error::NamingError;
use crate::naming::rules::{
    replace_underscores_with_spaces, simple_name_of, split_camel_case_boundaries,
};
use crate::naming::DisplayNameGenerator;

/// Built-in naming styles
///
/// Each style composes the transformation rules in a fixed way; see
/// [`Style::name_for_class`] and friends for the exact mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    /// Simple class names and `method(ParamType, ...)` signatures
    #[default]
    Default,
    /// DEFAULT with underscores turned into spaces
    Underscore,
    /// DEFAULT with camel-case words split apart
    CamelCase,
    /// Nested classes and methods read as a sentence
    Sentences,
}

impl Style {
    pub const ALL: [Style; 4] = [
        Style::Default,
        Style::Underscore,
        Style::CamelCase,
        Style::Sentences,
    ];

    /// Identifier used in configuration and tool arguments
    pub fn id(&self) -> &'static str {
        match self {
            Style::Default => "default",
            Style::Underscore => "underscore",
            Style::CamelCase => "camel_case",
            Style::Sentences => "sentences",
        }
    }

    /// One-line description for listings
    pub fn description(&self) -> &'static str {
        match self {
            Style::Default => "Simple class names and method signatures with parameter types",
            Style::Underscore => "Default names with underscores replaced by spaces",
            Style::CamelCase => "Default names split at camel-case and digit boundaries",
            Style::Sentences => "Nested classes and methods joined into a sentence",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Style {
    type Err = NamingError;

    /// Parse a style id, ignoring case and accepting `-` for `_`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Style::ALL
            .into_iter()
            .find(|style| style.id() == normalized)
            .ok_or_else(|| {
                NamingError::configuration(
                    s,
                    format!(
                        "unknown style, expected one of: {}",
                        Style::ALL.map(|style| style.id()).join(", ")
                    ),
                )
            })
    }
}

impl DisplayNameGenerator for Style {
    fn name_for_class(&self, class: &ClassInfo) -> String {
        let base = simple_name_of(&class.qualified_name);
        match self {
            Style::Default | Style::Sentences => base.to_string(),
            Style::Underscore => replace_underscores_with_spaces(base),
            Style::CamelCase => split_camel_case_boundaries(base),
        }
    }

    fn name_for_nested_class(&self, class: &ClassInfo) -> String {
        let base = class.simple_name.as_str();
        match self {
            Style::Default => base.to_string(),
            Style::Underscore => replace_underscores_with_spaces(base),
            Style::CamelCase => split_camel_case_boundaries(base),
            Style::Sentences => format!("{}...", replace_underscores_with_spaces(base)),
        }
    }

    fn name_for_method(&self, method: &MethodInfo) -> String {
        match self {
            Style::Default => method_signature(method),
            Style::Underscore => replace_underscores_with_spaces(&method_signature(method)),
            Style::CamelCase => split_camel_case_boundaries(&method_signature(method)),
            Style::Sentences => replace_underscores_with_spaces(&method_sentence(method)),
        }
    }
}

/// `name(TypeA, TypeB)`, with `()` for parameterless methods
fn method_signature(method: &MethodInfo) -> String {
    format!("{}({})", method.name, method.parameter_types.join(", "))
}

/// Intermediate class names, outer to inner, followed by `name.`
///
/// The outermost class is left out; a method of a top-level class is just
/// `name.`.
fn method_sentence(method: &MethodInfo) -> String {
    let mut segments: Vec<&str> = method
        .declaring_class
        .enclosing_chain()
        .filter(|class| class.is_nested())
        .map(|class| class.simple_name.as_str())
        .collect();
    segments.reverse();

    let mut sentence = String::new();
    for segment in segments {
        sentence.push_str(segment);
        sentence.push(' ');
    }
    sentence.push_str(&method.name);
    sentence.push('.');
    sentence
}
