//! Display Name Generation
//!
//! This module turns entity metadata into human-readable labels:
//! - `rules`: the string transformations styles are built from
//! - `style`: the built-in styles (DEFAULT, UNDERSCORE, CAMEL_CASE, SENTENCES)
//! - `error`: the error taxonomy shared by generation and resolution
//!
//! Custom generators plug in through [`DisplayNameGenerator`]; callers that
//! want the input and output contract enforced go through [`DisplayNames`].

pub mod error;
pub mod rules;
pub mod style;


use std::fmt;
use std::sync::Arc;

use crate::entity::{ClassInfo, MethodInfo};
use error::NamingError;
pub use style::Style;

/// Produces display names for test classes, nested classes and methods
///
/// Implementations must be pure: the same metadata always yields the same
/// name, and nothing is remembered between calls.
pub trait DisplayNameGenerator: Send + Sync {
    fn name_for_class(&self, class: &ClassInfo) -> String;

    fn name_for_nested_class(&self, class: &ClassInfo) -> String;

    fn name_for_method(&self, method: &MethodInfo) -> String;
}

/// A resolved naming strategy: a built-in style or a caller-supplied generator
#[derive(Clone)]
pub enum Strategy {
    Builtin(Style),
    Custom {
        id: String,
        generator: Arc<dyn DisplayNameGenerator>,
    },
}

impl Strategy {
    /// Identifier reported alongside generated names
    pub fn id(&self) -> &str {
        match self {
            Strategy::Builtin(style) => style.id(),
            Strategy::Custom { id, .. } => id,
        }
    }

    fn generator(&self) -> &dyn DisplayNameGenerator {
        match self {
            Strategy::Builtin(style) => style as &dyn DisplayNameGenerator,
            Strategy::Custom { generator, .. } => generator.as_ref(),
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Builtin(Style::Default)
    }
}

impl From<Style> for Strategy {
    fn from(style: Style) -> Self {
        Strategy::Builtin(style)
    }
}

impl fmt::Debug for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Builtin(style) => f.debug_tuple("Builtin").field(style).finish(),
            Strategy::Custom { id, .. } => f.debug_struct("Custom").field("id", id).finish(),
        }
    }
}

impl PartialEq for Strategy {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Strategy::Builtin(a), Strategy::Builtin(b)) => a == b,
            (
                Strategy::Custom {
                    id: a_id,
                    generator: a,
                },
                Strategy::Custom {
                    id: b_id,
                    generator: b,
                },
            ) => a_id == b_id && Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Checked entry point for generating display names
///
/// Validates the metadata before the strategy runs and rejects empty
/// results afterwards.
///
/// # Examples
/// ```
/// use display_name_mcp::entity::{ClassInfo, MethodInfo};
/// use display_name_mcp::naming::{DisplayNames, Style};
///
/// let names = DisplayNames::new(Style::Sentences);
/// let inner = ClassInfo::nested(ClassInfo::top_level("com.example.Outer"), "Inner");
/// let method = MethodInfo::new("shouldWork", inner);
///
/// assert_eq!(names.method_name(&method).unwrap(), "Inner shouldWork.");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayNames {
    strategy: Strategy,
}

impl DisplayNames {
    pub fn new(strategy: impl Into<Strategy>) -> Self {
        Self {
            strategy: strategy.into(),
        }
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Display name of a test class
    pub fn class_name(&self, class: &ClassInfo) -> Result<String, NamingError> {
        class.validate().inspect_err(|e| log::warn!("Rejected class: {e}"))?;
        let name = self.strategy.generator().name_for_class(class);
        self.checked(name, "class", &class.qualified_name)
    }

    /// Display name of a class nested inside another test class
    pub fn nested_class_name(&self, class: &ClassInfo) -> Result<String, NamingError> {
        class
            .validate()
            .inspect_err(|e| log::warn!("Rejected nested class: {e}"))?;
        let name = self.strategy.generator().name_for_nested_class(class);
        self.checked(name, "nested class", &class.qualified_name)
    }

    /// Display name of a test method
    pub fn method_name(&self, method: &MethodInfo) -> Result<String, NamingError> {
        method
            .validate()
            .inspect_err(|e| log::warn!("Rejected method: {e}"))?;
        let name = self.strategy.generator().name_for_method(method);
        self.checked(name, "method", &method.name)
    }

    fn checked(
        &self,
        name: String,
        entity: &'static str,
        source: &str,
    ) -> Result<String, NamingError> {
        if name.is_empty() {
            log::warn!(
                "Strategy {} returned an empty name for {entity} {source}",
                self.strategy.id()
            );
            return Err(NamingError::EmptyName {
                strategy: self.strategy.id().to_string(),
                entity,
            });
        }

        log::trace!("[{}] {entity} {source} -> {name}", self.strategy.id());
        Ok(name)
    }
}
