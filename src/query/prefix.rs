//! Prefix query implementation.

use serde::{Deserialize, Serialize};

/// A query that matches documents containing terms starting with a prefix.
///
/// The prefix is taken literally; it is not a wildcard pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrefixQuery {
    /// The field to search in.
    field: String,
    /// The required term prefix.
    prefix: String,
    /// The boost factor for this query.
    boost: f32,
}

impl PrefixQuery {
    /// Create a new prefix query.
    pub fn new<F, P>(field: F, prefix: P) -> Self
    where
        F: Into<String>,
        P: Into<String>,
    {
        PrefixQuery {
            field: field.into(),
            prefix: prefix.into(),
            boost: 1.0,
        }
    }

    /// Set the boost factor for this query.
    pub fn with_boost(mut self, boost: f32) -> Self {
        self.boost = boost;
        self
    }

    /// Get the field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Get the prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Get the boost factor.
    pub fn boost(&self) -> f32 {
        self.boost
    }

    /// Check if a term starts with the prefix.
    pub fn matches(&self, term: &str) -> bool {
        term.starts_with(&self.prefix)
    }

    /// Get a human-readable description of this query.
    pub fn description(&self) -> String {
        if self.boost == 1.0 {
            format!("{}:{}*", self.field, self.prefix)
        } else {
            format!("{}:{}*^{}", self.field, self.prefix, self.boost)
        }
    }
}
