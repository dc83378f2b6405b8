//! Term query implementation for exact term matching.

use serde::{Deserialize, Serialize};

use crate::serializer::terms::escape;

/// A query that matches documents containing a specific term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermQuery {
    /// The field to search in.
    field: String,
    /// The term to search for.
    term: String,
    /// The boost factor for this query.
    boost: f32,
}

impl TermQuery {
    /// Create a new term query.
    ///
    /// Like Lucene, TermQuery performs exact matching and does NOT analyze the term.
    /// The term should already be in the normalized form (e.g., lowercased).
    pub fn new<F, T>(field: F, term: T) -> Self
    where
        F: Into<String>,
        T: Into<String>,
    {
        TermQuery {
            field: field.into(),
            term: term.into(),
            boost: 1.0,
        }
    }

    /// Get the field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Get the term.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Get the boost factor.
    pub fn boost(&self) -> f32 {
        self.boost
    }

    /// Set the boost factor.
    pub fn with_boost(mut self, boost: f32) -> Self {
        self.boost = boost;
        self
    }

    /// Get a human-readable description of this query.
    ///
    /// Query-parser special characters in the term are escaped.
    pub fn description(&self) -> String {
        let term = escape(&self.term);
        if self.boost == 1.0 {
            format!("{}:{}", self.field, term)
        } else {
            format!("{}:{}^{}", self.field, term, self.boost)
        }
    }
}
