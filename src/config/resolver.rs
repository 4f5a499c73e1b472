use crate::config::registry::GeneratorRegistry;
use crate::config::{Declaration, GenerationConfig};
use crate::entity::{ClassInfo, MethodInfo};
use crate::naming::error::NamingError;
use crate::naming::{DisplayNames, Strategy};

/// Resolves the naming strategy that applies to a class or method
///
/// A class uses the nearest declaration found walking from the class itself
/// out through its enclosing classes. Without one, the configuration's
/// default applies, and without that, DEFAULT. Methods resolve through their
/// declaring class.
///
/// # Example
/// ```
/// use display_name_mcp::config::GenerationConfig;
/// use display_name_mcp::config::resolver::StrategyResolver;
/// use display_name_mcp::entity::ClassInfo;
/// use display_name_mcp::naming::{Strategy, Style};
///
/// let config = GenerationConfig::default().declare("a.Outer", Style::Sentences);
/// let resolver = StrategyResolver::new(config);
///
/// let inner = ClassInfo::nested(ClassInfo::top_level("a.Outer"), "Inner");
/// assert_eq!(resolver.resolve_class(&inner).unwrap(), Strategy::Builtin(Style::Sentences));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StrategyResolver {
    config: GenerationConfig,
    registry: GeneratorRegistry,
}

impl StrategyResolver {
    pub fn new(config: GenerationConfig) -> Self {
        Self {
            config,
            registry: GeneratorRegistry::new(),
        }
    }

    /// Use `registry` to look up custom generator declarations
    pub fn with_registry(mut self, registry: GeneratorRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn registry(&self) -> &GeneratorRegistry {
        &self.registry
    }

    /// Turn a single declaration into a strategy
    ///
    /// `None` stands for "nothing declared" and resolves to DEFAULT.
    pub fn resolve_declaration(
        &self,
        declaration: Option<&Declaration>,
    ) -> Result<Strategy, NamingError> {
        match declaration {
            None => Ok(Strategy::default()),
            Some(Declaration::Style(style)) => Ok(Strategy::Builtin(*style)),
            Some(Declaration::Generator(id)) => self.registry.instantiate(id),
        }
    }

    /// Strategy for `class`, honoring declarations on enclosing classes
    pub fn resolve_class(&self, class: &ClassInfo) -> Result<Strategy, NamingError> {
        let declared = class.enclosing_chain().find_map(|candidate| {
            self.config
                .groupings
                .get(&candidate.qualified_name)
                .map(|declaration| (candidate, declaration))
        });

        let declaration = match declared {
            Some((grouping, declaration)) => {
                log::debug!(
                    "{} uses {declaration:?} declared on {}",
                    class.qualified_name,
                    grouping.qualified_name
                );
                Some(declaration)
            }
            None => self.config.default.as_ref(),
        };

        self.resolve_declaration(declaration)
    }

    /// Strategy for `method`, resolved through its declaring class
    pub fn resolve_method(&self, method: &MethodInfo) -> Result<Strategy, NamingError> {
        self.resolve_class(&method.declaring_class)
    }

    /// Check that every declared strategy can be instantiated
    ///
    /// Covers the configuration default and every grouping, so a broken
    /// custom generator reference is reported before any name is requested.
    ///
    /// # Errors
    /// Returns the first `NamingError::Configuration` encountered.
    pub fn validate_declarations(&self) -> Result<(), NamingError> {
        let mut groupings: Vec<_> = self.config.groupings.iter().collect();
        groupings.sort_unstable_by(|a, b| a.0.cmp(b.0));

        if let Some(declaration) = &self.config.default {
            self.resolve_declaration(Some(declaration))
                .inspect_err(|e| log::warn!("Invalid default declaration: {e}"))?;
        }
        for (grouping, declaration) in groupings {
            self.resolve_declaration(Some(declaration))
                .inspect_err(|e| log::warn!("Invalid declaration on {grouping}: {e}"))?;
        }

        log::debug!(
            "Validated {} grouping declaration(s)",
            self.config.groupings.len()
        );
        Ok(())
    }

    /// Resolve and generate the display name of a top-level class
    pub fn class_name(&self, class: &ClassInfo) -> Result<String, NamingError> {
        class.validate()?;
        DisplayNames::new(self.resolve_class(class)?).class_name(class)
    }

    /// Resolve and generate the display name of a nested class
    pub fn nested_class_name(&self, class: &ClassInfo) -> Result<String, NamingError> {
        class.validate()?;
        DisplayNames::new(self.resolve_class(class)?).nested_class_name(class)
    }

    /// Resolve and generate the display name of a method
    pub fn method_name(&self, method: &MethodInfo) -> Result<String, NamingError> {
        method.validate()?;
        DisplayNames::new(self.resolve_method(method)?).method_name(method)
    }
}
