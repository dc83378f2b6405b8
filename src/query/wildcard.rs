//! Wildcard query implementation for pattern matching.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SarissaError};

/// A query that matches documents containing terms that match a wildcard pattern.
///
/// Supports the following wildcards:
/// - `*` matches zero or more characters
/// - `?` matches exactly one character
/// - `\` escapes the next character, so `\*` and `\?` match literal `*` and `?`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WildcardQuery {
    /// The field to search in.
    field: String,
    /// The wildcard pattern.
    pattern: String,
    /// The boost factor for this query.
    boost: f32,
}

impl WildcardQuery {
    /// Create a new wildcard query.
    pub fn new<F, P>(field: F, pattern: P) -> Self
    where
        F: Into<String>,
        P: Into<String>,
    {
        WildcardQuery {
            field: field.into(),
            pattern: pattern.into(),
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

    /// Get the wildcard pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Get the boost factor.
    pub fn boost(&self) -> f32 {
        self.boost
    }

    /// Compile the wildcard pattern into an anchored regex.
    pub fn to_regex(&self) -> Result<Regex> {
        let mut regex_pattern = String::with_capacity(self.pattern.len() + 2);
        regex_pattern.push('^');

        let mut chars = self.pattern.chars();
        while let Some(c) = chars.next() {
            match c {
                '\\' => match chars.next() {
                    Some(escaped) => regex_pattern.push_str(&regex::escape(&escaped.to_string())),
                    // trailing backslash matches itself
                    None => regex_pattern.push_str("\\\\"),
                },
                '*' => regex_pattern.push_str(".*"),
                '?' => regex_pattern.push('.'),
                c => regex_pattern.push_str(&regex::escape(&c.to_string())),
            }
        }

        regex_pattern.push('$');

        Regex::new(&regex_pattern)
            .map_err(|e| SarissaError::query(format!("Invalid wildcard pattern: {e}")))
    }

    /// Check if a term matches the wildcard pattern.
    pub fn matches(&self, term: &str) -> Result<bool> {
        Ok(self.to_regex()?.is_match(term))
    }

    /// Get a human-readable description of this query.
    pub fn description(&self) -> String {
        if self.boost == 1.0 {
            format!("{}:{}", self.field, self.pattern)
        } else {
            format!("{}:{}^{}", self.field, self.pattern, self.boost)
        }
    }
}
