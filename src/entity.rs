//! Entity Metadata
//!
//! Read-only views of the structural entities of a test suite. These are
//! populated by whatever discovers tests (a scanner, a build tool, an MCP
//! client) and handed to the naming strategies unchanged.

use serde::{Deserialize, Serialize};

use crate::naming::error::NamingError;
use crate::naming::rules::simple_name_of;

/// A test class, top level or nested
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassInfo {
    /// Dot-separated name, e.g. `com.example.CalculatorTests`
    pub qualified_name: String,
    /// Last segment of the qualified name
    pub simple_name: String,
    /// Class this one is declared in; `None` at top level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enclosing: Option<Box<ClassInfo>>,
}

impl ClassInfo {
    /// Create a top-level class from its qualified name
    ///
    /// # Examples
    /// ```
    /// use display_name_mcp::entity::ClassInfo;
    ///
    /// let class = ClassInfo::top_level("com.example.CalculatorTests");
    /// assert_eq!(class.simple_name, "CalculatorTests");
    /// assert!(!class.is_nested());
    /// ```
    pub fn top_level(qualified_name: impl Into<String>) -> Self {
        let qualified_name = qualified_name.into();
        let simple_name = simple_name_of(&qualified_name).to_string();
        Self {
            qualified_name,
            simple_name,
            enclosing: None,
        }
    }

    /// Create a class declared inside `enclosing`
    ///
    /// The qualified name is the enclosing qualified name extended by
    /// `.{simple_name}`.
    ///
    /// # Examples
    /// ```
    /// use display_name_mcp::entity::ClassInfo;
    ///
    /// let outer = ClassInfo::top_level("com.example.Outer");
    /// let inner = ClassInfo::nested(outer, "Inner");
    /// assert_eq!(inner.qualified_name, "com.example.Outer.Inner");
    /// assert!(inner.is_nested());
    /// ```
    pub fn nested(enclosing: ClassInfo, simple_name: impl Into<String>) -> Self {
        let simple_name = simple_name.into();
        Self {
            qualified_name: format!("{}.{}", enclosing.qualified_name, simple_name),
            simple_name,
            enclosing: Some(Box::new(enclosing)),
        }
    }

    /// Build a nesting chain from simple names, outermost first
    ///
    /// The first entry is treated as a qualified name, every following
    /// entry is nested inside the previous one. Returns `None` for an empty
    /// chain.
    pub fn from_chain<S: AsRef<str>>(chain: &[S]) -> Option<Self> {
        let (first, rest) = chain.split_first()?;
        let mut class = ClassInfo::top_level(first.as_ref());
        for simple_name in rest {
            class = ClassInfo::nested(class, simple_name.as_ref());
        }
        Some(class)
    }

    pub fn is_nested(&self) -> bool {
        self.enclosing.is_some()
    }

    /// The enclosing class, if any
    pub fn enclosing(&self) -> Option<&ClassInfo> {
        self.enclosing.as_deref()
    }

    /// Iterate over this class and its enclosing classes, innermost first
    pub fn enclosing_chain(&self) -> impl Iterator<Item = &ClassInfo> {
        std::iter::successors(Some(self), |class| class.enclosing())
    }

    /// The top-level class this one is (transitively) declared in
    pub fn outermost(&self) -> &ClassInfo {
        self.enclosing_chain().last().unwrap_or(self)
    }

    /// Check that every name along the enclosing chain is usable
    pub fn validate(&self) -> Result<(), NamingError> {
        for class in self.enclosing_chain() {
            if class.qualified_name.trim().is_empty() {
                return Err(NamingError::invalid_input(
                    "class",
                    "qualified name must not be empty",
                ));
            }
            if simple_name_of(&class.qualified_name).trim().is_empty() {
                return Err(NamingError::invalid_input(
                    "class",
                    format!(
                        "qualified name '{}' must not end in '.'",
                        class.qualified_name
                    ),
                ));
            }
            if class.simple_name.trim().is_empty() {
                return Err(NamingError::invalid_input(
                    "class",
                    format!("simple name of '{}' must not be empty", class.qualified_name),
                ));
            }
        }
        Ok(())
    }
}

/// A test method and the class declaring it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodInfo {
    pub name: String,
    pub declaring_class: ClassInfo,
    /// Simple type names of the parameters, in declaration order
    #[serde(default)]
    pub parameter_types: Vec<String>,
}

impl MethodInfo {
    pub fn new(name: impl Into<String>, declaring_class: ClassInfo) -> Self {
        Self {
            name: name.into(),
            declaring_class,
            parameter_types: Vec::new(),
        }
    }

    /// Replace the parameter list
    pub fn with_parameters<I, S>(mut self, parameter_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parameter_types = parameter_types.into_iter().map(Into::into).collect();
        self
    }

    pub fn validate(&self) -> Result<(), NamingError> {
        if self.name.trim().is_empty() {
            return Err(NamingError::invalid_input(
                "method",
                "method name must not be empty",
            ));
        }
        if let Some(position) = self
            .parameter_types
            .iter()
            .position(|ty| ty.trim().is_empty())
        {
            return Err(NamingError::invalid_input(
                "method",
                format!(
                    "parameter type #{} of '{}' must not be empty",
                    position + 1,
                    self.name
                ),
            ));
        }
        self.declaring_class.validate()
    }
}
