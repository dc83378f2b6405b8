//! Range query implementation for querying within term ranges.

use serde::{Deserialize, Serialize};

/// Bound type for range queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bound<T> {
    /// Inclusive bound.
    Included(T),
    /// Exclusive bound.
    Excluded(T),
    /// Unbounded (no limit).
    Unbounded,
}

impl<T> Bound<T> {
    /// Get the bound value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Bound::Included(value) | Bound::Excluded(value) => Some(value),
            Bound::Unbounded => None,
        }
    }

    /// Whether the bound value itself is part of the range.
    pub fn is_inclusive(&self) -> bool {
        matches!(self, Bound::Included(_))
    }
}

/// A query that matches documents with terms within a lexicographic range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeQuery {
    /// The field to search in.
    field: String,
    /// Lower bound of the range.
    lower_bound: Bound<String>,
    /// Upper bound of the range.
    upper_bound: Bound<String>,
    /// The boost factor for this query.
    boost: f32,
}

impl RangeQuery {
    /// Create a new range query with both bounds inclusive.
    pub fn new<S: Into<String>>(field: S, lower: Option<String>, upper: Option<String>) -> Self {
        let lower_bound = match lower {
            Some(val) => Bound::Included(val),
            None => Bound::Unbounded,
        };
        let upper_bound = match upper {
            Some(val) => Bound::Included(val),
            None => Bound::Unbounded,
        };

        Self::with_bounds(field, lower_bound, upper_bound)
    }

    /// Create a range query with custom bound types.
    pub fn with_bounds<S: Into<String>>(
        field: S,
        lower_bound: Bound<String>,
        upper_bound: Bound<String>,
    ) -> Self {
        RangeQuery {
            field: field.into(),
            lower_bound,
            upper_bound,
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

    /// Get the lower bound.
    pub fn lower_bound(&self) -> &Bound<String> {
        &self.lower_bound
    }

    /// Get the upper bound.
    pub fn upper_bound(&self) -> &Bound<String> {
        &self.upper_bound
    }

    /// Whether the lower bound is inclusive.
    pub fn includes_lower(&self) -> bool {
        self.lower_bound.is_inclusive()
    }

    /// Whether the upper bound is inclusive.
    pub fn includes_upper(&self) -> bool {
        self.upper_bound.is_inclusive()
    }

    /// Get the boost factor.
    pub fn boost(&self) -> f32 {
        self.boost
    }

    /// Get a human-readable description of this query.
    pub fn description(&self) -> String {
        let open = if self.includes_lower() { '[' } else { '{' };
        let close = if self.includes_upper() { ']' } else { '}' };
        let lower = self.lower_bound.value().map_or("*", String::as_str);
        let upper = self.upper_bound.value().map_or("*", String::as_str);

        let mut description = format!("{}:{open}{lower} TO {upper}{close}", self.field);
        if self.boost != 1.0 {
            description.push_str(&format!("^{}", self.boost));
        }
        description
    }
}
