use eyre::Result;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::naming::error::NamingError;
use crate::naming::{DisplayNameGenerator, Strategy};

type Factory = Arc<dyn Fn() -> Result<Arc<dyn DisplayNameGenerator>> + Send + Sync>;

/// Registry of custom display name generators
///
/// Custom generators are addressed by an id shaped like a Rust path
/// (`reports::ShoutingNames`). A generator is either registered ready-made
/// or as a factory that builds it on resolution; a factory that fails makes
/// the id non-instantiable.
///
/// # Example
/// ```
/// use display_name_mcp::config::registry::GeneratorRegistry;
/// use display_name_mcp::naming::Style;
///
/// let mut registry = GeneratorRegistry::new();
/// registry.register("reports::Sentences", Style::Sentences).unwrap();
///
/// assert!(registry.has_generator("reports::Sentences"));
/// assert!(registry.instantiate("reports::Missing").is_err());
/// ```
#[derive(Clone, Default)]
pub struct GeneratorRegistry {
    /// Map of generator id to factory
    factories: HashMap<String, Factory>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        log::debug!("Creating new generator registry");
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a ready-made generator under `id`
    ///
    /// Every resolution of `id` shares the same instance. An existing
    /// registration under the same id is replaced.
    ///
    /// # Errors
    /// Returns `NamingError::Configuration` if `id` is not a valid id.
    pub fn register<G>(&mut self, id: &str, generator: G) -> Result<(), NamingError>
    where
        G: DisplayNameGenerator + 'static,
    {
        let shared: Arc<dyn DisplayNameGenerator> = Arc::new(generator);
        self.register_factory(id, move || Ok(Arc::clone(&shared)))
    }

    /// Register a factory building the generator for `id` on resolution
    ///
    /// # Errors
    /// Returns `NamingError::Configuration` if `id` is not a valid id.
    pub fn register_factory<F>(&mut self, id: &str, factory: F) -> Result<(), NamingError>
    where
        F: Fn() -> Result<Arc<dyn DisplayNameGenerator>> + Send + Sync + 'static,
    {
        validate_generator_id(id)?;
        log::info!("Registering display name generator: {id}");
        self.factories.insert(id.to_string(), Arc::new(factory));
        Ok(())
    }

    /// Build the strategy registered under `id`
    ///
    /// # Errors
    /// Returns `NamingError::Configuration` if `id` is malformed, not
    /// registered, or its factory fails.
    pub fn instantiate(&self, id: &str) -> Result<Strategy, NamingError> {
        validate_generator_id(id)?;

        let factory = self.factories.get(id).ok_or_else(|| {
            log::warn!("Display name generator not found: {id}");
            NamingError::configuration(id, "no generator registered under this id")
        })?;

        let generator = factory().map_err(|e| {
            log::warn!("Display name generator {id} failed to instantiate: {e}");
            NamingError::configuration(id, format!("failed to instantiate: {e}"))
        })?;

        Ok(Strategy::Custom {
            id: id.to_string(),
            generator,
        })
    }

    pub fn has_generator(&self, id: &str) -> bool {
        self.factories.contains_key(id)
    }

    /// Registered ids, sorted
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn count(&self) -> usize {
        self.factories.len()
    }
}

impl fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorRegistry")
            .field("ids", &self.ids())
            .finish()
    }
}

/// Check that `id` is one or more identifiers joined by `::`
fn validate_generator_id(id: &str) -> Result<(), NamingError> {
    let valid_pattern = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(::[A-Za-z_][A-Za-z0-9_]*)*$")
        .map_err(|e| NamingError::configuration(id, format!("regex error: {e}")))?;

    if !valid_pattern.is_match(id) {
        return Err(NamingError::configuration(
            id,
            "generator ids are identifiers separated by '::'",
        ));
    }

    Ok(())
}
