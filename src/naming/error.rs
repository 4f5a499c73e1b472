use thiserror::Error;

/// Failures of a single naming request
///
/// None of these are fatal to the host; each is scoped to the request that
/// produced it and no partial name is ever returned alongside one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamingError {
    /// The entity metadata handed in is malformed
    #[error("invalid {entity}: {reason}")]
    InvalidInput { entity: &'static str, reason: String },

    /// A strategy reference could not be resolved or instantiated
    #[error("cannot resolve naming strategy '{reference}': {reason}")]
    Configuration { reference: String, reason: String },

    /// A generator returned an empty display name
    #[error("strategy '{strategy}' produced an empty display name for {entity}")]
    EmptyName {
        strategy: String,
        entity: &'static str,
    },
}

impl NamingError {
    pub fn invalid_input(entity: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            entity,
            reason: reason.into(),
        }
    }

    pub fn configuration(reference: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Configuration {
            reference: reference.into(),
            reason: reason.into(),
        }
    }
}
