//! The native query sum type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::query::boolean::BooleanQuery;
use crate::query::phrase::PhraseQuery;
use crate::query::prefix::PrefixQuery;
use crate::query::range::RangeQuery;
use crate::query::term::TermQuery;
use crate::query::wildcard::WildcardQuery;

/// A search query in the engine's native representation.
///
/// `Display` renders classic Lucene query syntax with term and phrase text
/// escaped, so the engine's query parser reads it back as the same query.
/// Empty boolean queries are the exception: they have no query syntax and
/// render as an empty string (`()` when nested).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Query {
    Term(TermQuery),
    Phrase(PhraseQuery),
    Wildcard(WildcardQuery),
    Prefix(PrefixQuery),
    Range(RangeQuery),
    Boolean(BooleanQuery),
}

impl Query {
    /// Get the field name this query searches in, if applicable.
    /// Returns None for queries that don't target a specific field (e.g., BooleanQuery).
    pub fn field(&self) -> Option<&str> {
        match self {
            Query::Term(q) => Some(q.field()),
            Query::Phrase(q) => Some(q.field()),
            Query::Wildcard(q) => Some(q.field()),
            Query::Prefix(q) => Some(q.field()),
            Query::Range(q) => Some(q.field()),
            Query::Boolean(_) => None,
        }
    }

    /// Get the boost factor for this query.
    pub fn boost(&self) -> f32 {
        match self {
            Query::Term(q) => q.boost(),
            Query::Phrase(q) => q.boost(),
            Query::Wildcard(q) => q.boost(),
            Query::Prefix(q) => q.boost(),
            Query::Range(q) => q.boost(),
            Query::Boolean(q) => q.boost(),
        }
    }

    /// Get a human-readable description of this query.
    pub fn description(&self) -> String {
        match self {
            Query::Term(q) => q.description(),
            Query::Phrase(q) => q.description(),
            Query::Wildcard(q) => q.description(),
            Query::Prefix(q) => q.description(),
            Query::Range(q) => q.description(),
            Query::Boolean(q) => q.description(),
        }
    }

    /// Get this query as a [`TermQuery`], if it is one.
    pub fn as_term(&self) -> Option<&TermQuery> {
        match self {
            Query::Term(q) => Some(q),
            _ => None,
        }
    }

    /// Get this query as a [`PhraseQuery`], if it is one.
    pub fn as_phrase(&self) -> Option<&PhraseQuery> {
        match self {
            Query::Phrase(q) => Some(q),
            _ => None,
        }
    }

    /// Get this query as a [`WildcardQuery`], if it is one.
    pub fn as_wildcard(&self) -> Option<&WildcardQuery> {
        match self {
            Query::Wildcard(q) => Some(q),
            _ => None,
        }
    }

    /// Get this query as a [`PrefixQuery`], if it is one.
    pub fn as_prefix(&self) -> Option<&PrefixQuery> {
        match self {
            Query::Prefix(q) => Some(q),
            _ => None,
        }
    }

    /// Get this query as a [`RangeQuery`], if it is one.
    pub fn as_range(&self) -> Option<&RangeQuery> {
        match self {
            Query::Range(q) => Some(q),
            _ => None,
        }
    }

    /// Get this query as a [`BooleanQuery`], if it is one.
    pub fn as_boolean(&self) -> Option<&BooleanQuery> {
        match self {
            Query::Boolean(q) => Some(q),
            _ => None,
        }
    }

    /// Serialize this query to JSON for handing to a remote engine.
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize a query from JSON.
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

impl From<TermQuery> for Query {
    fn from(query: TermQuery) -> Self {
        Query::Term(query)
    }
}

impl From<PhraseQuery> for Query {
    fn from(query: PhraseQuery) -> Self {
        Query::Phrase(query)
    }
}

impl From<WildcardQuery> for Query {
    fn from(query: WildcardQuery) -> Self {
        Query::Wildcard(query)
    }
}

impl From<PrefixQuery> for Query {
    fn from(query: PrefixQuery) -> Self {
        Query::Prefix(query)
    }
}

impl From<RangeQuery> for Query {
    fn from(query: RangeQuery) -> Self {
        Query::Range(query)
    }
}

impl From<BooleanQuery> for Query {
    fn from(query: BooleanQuery) -> Self {
        Query::Boolean(query)
    }
}
