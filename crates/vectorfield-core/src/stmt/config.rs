use crate::schema::app::Model;

use std::fmt;

/// Text-search configuration used when no other is given.
pub const DEFAULT_CONFIG: &str = "pg_catalog.english";

/// Names the text-search configuration (parser and dictionaries) passed to
/// `to_tsvector`.
///
/// A configuration is either a fixed name or a function deriving the name
/// from the owning model. Resolvers run when the expression is bound.
#[derive(Clone)]
pub enum TextSearchConfig {
    Name(String),
    Resolver(fn(&Model) -> String),
}

impl TextSearchConfig {
    pub fn name(name: impl Into<String>) -> TextSearchConfig {
        TextSearchConfig::Name(name.into())
    }

    /// Returns the configuration name to use for terms owned by `model`.
    pub fn resolve(&self, model: &Model) -> String {
        match self {
            TextSearchConfig::Name(name) => name.clone(),
            TextSearchConfig::Resolver(resolver) => resolver(model),
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            TextSearchConfig::Name(name) => Some(name),
            TextSearchConfig::Resolver(_) => None,
        }
    }
}

impl Default for TextSearchConfig {
    fn default() -> Self {
        TextSearchConfig::Name(DEFAULT_CONFIG.to_string())
    }
}

impl From<&str> for TextSearchConfig {
    fn from(value: &str) -> Self {
        TextSearchConfig::Name(value.to_string())
    }
}

impl From<String> for TextSearchConfig {
    fn from(value: String) -> Self {
        TextSearchConfig::Name(value)
    }
}

impl From<fn(&Model) -> String> for TextSearchConfig {
    fn from(value: fn(&Model) -> String) -> Self {
        TextSearchConfig::Resolver(value)
    }
}

impl fmt::Debug for TextSearchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextSearchConfig::Name(name) => write!(f, "{name:?}"),
            TextSearchConfig::Resolver(_) => f.write_str("<resolver>"),
        }
    }
}
