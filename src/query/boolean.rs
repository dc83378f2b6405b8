//! Boolean query implementation for combining multiple queries.

use serde::{Deserialize, Serialize};

use crate::query::query::Query;

/// Occurrence requirements for boolean clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occur {
    /// The clause must match (equivalent to AND).
    Must,
    /// The clause should match (equivalent to OR).
    Should,
    /// The clause must not match (equivalent to NOT).
    MustNot,
}

impl Occur {
    /// Query-syntax prefix for this occurrence.
    pub fn prefix(self) -> &'static str {
        match self {
            Occur::Must => "+",
            Occur::Should => "",
            Occur::MustNot => "-",
        }
    }
}

/// A clause in a boolean query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BooleanClause {
    /// The query for this clause.
    pub query: Query,
    /// The occurrence requirement.
    pub occur: Occur,
}

impl BooleanClause {
    /// Create a new boolean clause.
    pub fn new<Q: Into<Query>>(query: Q, occur: Occur) -> Self {
        BooleanClause {
            query: query.into(),
            occur,
        }
    }

    /// Create a MUST clause.
    pub fn must<Q: Into<Query>>(query: Q) -> Self {
        BooleanClause::new(query, Occur::Must)
    }

    /// Create a SHOULD clause.
    pub fn should<Q: Into<Query>>(query: Q) -> Self {
        BooleanClause::new(query, Occur::Should)
    }

    /// Create a MUST_NOT clause.
    pub fn must_not<Q: Into<Query>>(query: Q) -> Self {
        BooleanClause::new(query, Occur::MustNot)
    }

    fn description(&self) -> String {
        match &self.query {
            // no clause syntax for an empty boolean; `()` keeps the clause visible
            Query::Boolean(bq) if bq.is_empty() => format!("{}()", self.occur.prefix()),
            Query::Boolean(_) => format!("{}({})", self.occur.prefix(), self.query),
            query => format!("{}{}", self.occur.prefix(), query),
        }
    }
}

/// A boolean query that combines multiple queries with boolean logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BooleanQuery {
    /// The clauses in this boolean query.
    clauses: Vec<BooleanClause>,
    /// The boost factor for this query.
    boost: f32,
}

impl BooleanQuery {
    /// Create a new empty boolean query.
    pub fn new() -> Self {
        BooleanQuery {
            clauses: Vec::new(),
            boost: 1.0,
        }
    }

    /// Add a clause to this boolean query.
    pub fn add_clause(&mut self, clause: BooleanClause) {
        self.clauses.push(clause);
    }

    /// Add a query with the given occurrence.
    pub fn add<Q: Into<Query>>(&mut self, query: Q, occur: Occur) {
        self.add_clause(BooleanClause::new(query, occur));
    }

    /// Add a MUST clause.
    pub fn add_must<Q: Into<Query>>(&mut self, query: Q) {
        self.add_clause(BooleanClause::must(query));
    }

    /// Add a SHOULD clause.
    pub fn add_should<Q: Into<Query>>(&mut self, query: Q) {
        self.add_clause(BooleanClause::should(query));
    }

    /// Add a MUST_NOT clause.
    pub fn add_must_not<Q: Into<Query>>(&mut self, query: Q) {
        self.add_clause(BooleanClause::must_not(query));
    }

    /// Set the boost factor.
    pub fn with_boost(mut self, boost: f32) -> Self {
        self.boost = boost;
        self
    }

    /// Get the clauses.
    pub fn clauses(&self) -> &[BooleanClause] {
        &self.clauses
    }

    /// Get the boost factor.
    pub fn boost(&self) -> f32 {
        self.boost
    }

    /// Check if this query is empty.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Get clauses by occurrence type.
    pub fn clauses_by_occur(&self, occur: Occur) -> Vec<&BooleanClause> {
        self.clauses.iter().filter(|c| c.occur == occur).collect()
    }

    /// Get a human-readable description of this query.
    ///
    /// An empty boolean query renders as an empty string at the top level
    /// and as `()` when nested in another boolean query.
    pub fn description(&self) -> String {
        let body = self
            .clauses
            .iter()
            .map(BooleanClause::description)
            .collect::<Vec<_>>()
            .join(" ");

        if self.boost == 1.0 {
            body
        } else {
            format!("({body})^{}", self.boost)
        }
    }
}

impl Default for BooleanQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<BooleanClause> for BooleanQuery {
    fn from_iter<I: IntoIterator<Item = BooleanClause>>(iter: I) -> Self {
        let mut query = BooleanQuery::new();
        for clause in iter {
            query.add_clause(clause);
        }
        query
    }
}
