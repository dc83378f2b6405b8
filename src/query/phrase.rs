//! Phrase query implementation for exact phrase matching.

use serde::{Deserialize, Serialize};

use crate::serializer::terms::escape;

/// A query that matches documents containing an exact phrase.
///
/// A phrase query finds documents where the specified terms appear
/// in the exact order with no other terms between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhraseQuery {
    /// The field to search in.
    field: String,
    /// The terms that make up the phrase, in order.
    terms: Vec<String>,
    /// The boost factor for this query.
    boost: f32,
}

impl PhraseQuery {
    /// Create a new phrase query.
    pub fn new<S: Into<String>>(field: S, terms: Vec<String>) -> Self {
        PhraseQuery {
            field: field.into(),
            terms,
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

    /// Get the phrase terms.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Get the boost factor.
    pub fn boost(&self) -> f32 {
        self.boost
    }

    /// Get a human-readable description of this query.
    ///
    /// Each term is escaped, including embedded quotes.
    pub fn description(&self) -> String {
        let terms = self
            .terms
            .iter()
            .map(|term| escape(term))
            .collect::<Vec<_>>()
            .join(" ");
        let mut description = format!("{}:\"{}\"", self.field, terms);
        if self.boost != 1.0 {
            description.push_str(&format!("^{}", self.boost));
        }
        description
    }
}
