//! Operator tags carried by [`Operation`](crate::expr::Operation) nodes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The semantic of an operation node.
///
/// The set is closed: translation matches on it exhaustively, so adding a
/// variant forces a decision in the serializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// Disjunction of two predicates.
    Or,
    /// Conjunction of two predicates.
    And,
    /// Negation of one predicate.
    Not,
    /// Pattern match.
    Like,
    /// Equality on object values.
    Equals,
    /// Equality on primitive values.
    EqualsPrimitive,
    /// Case-insensitive equality.
    EqualsIgnoreCase,
    /// Inequality on object values.
    NotEquals,
    /// Inequality on primitive values.
    NotEqualsPrimitive,
    StartsWith,
    StartsWithIgnoreCase,
    EndsWith,
    EndsWithIgnoreCase,
    Contains,
    ContainsIgnoreCase,
    /// Inclusive range: `arg0` between `arg1` and `arg2`.
    Between,
    /// Membership in a collection constant.
    In,
    /// Case-folding wrapper around a field.
    Lower,
    /// Case-folding wrapper around a field.
    Upper,
    LessThan,
    LessOrEqual,
    GreaterThan,
    GreaterOrEqual,
    IsNull,
    IsNotNull,
    /// Regular expression match.
    Matches,
}

impl Operator {
    /// Every operator, in declaration order.
    pub const ALL: &'static [Operator] = &[
        Operator::Or,
        Operator::And,
        Operator::Not,
        Operator::Like,
        Operator::Equals,
        Operator::EqualsPrimitive,
        Operator::EqualsIgnoreCase,
        Operator::NotEquals,
        Operator::NotEqualsPrimitive,
        Operator::StartsWith,
        Operator::StartsWithIgnoreCase,
        Operator::EndsWith,
        Operator::EndsWithIgnoreCase,
        Operator::Contains,
        Operator::ContainsIgnoreCase,
        Operator::Between,
        Operator::In,
        Operator::Lower,
        Operator::Upper,
        Operator::LessThan,
        Operator::LessOrEqual,
        Operator::GreaterThan,
        Operator::GreaterOrEqual,
        Operator::IsNull,
        Operator::IsNotNull,
        Operator::Matches,
    ];

    /// Number of arguments an operation with this operator carries.
    pub fn arity(self) -> usize {
        match self {
            Operator::Not
            | Operator::Lower
            | Operator::Upper
            | Operator::IsNull
            | Operator::IsNotNull => 1,
            Operator::Between => 3,
            Operator::Or
            | Operator::And
            | Operator::Like
            | Operator::Equals
            | Operator::EqualsPrimitive
            | Operator::EqualsIgnoreCase
            | Operator::NotEquals
            | Operator::NotEqualsPrimitive
            | Operator::StartsWith
            | Operator::StartsWithIgnoreCase
            | Operator::EndsWith
            | Operator::EndsWithIgnoreCase
            | Operator::Contains
            | Operator::ContainsIgnoreCase
            | Operator::In
            | Operator::LessThan
            | Operator::LessOrEqual
            | Operator::GreaterThan
            | Operator::GreaterOrEqual
            | Operator::Matches => 2,
        }
    }

    /// Whether this operator folds the case of the field it wraps.
    pub fn is_case_folding(self) -> bool {
        matches!(self, Operator::Lower | Operator::Upper)
    }

    /// Short lowercase name used in descriptions and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Operator::Or => "or",
            Operator::And => "and",
            Operator::Not => "not",
            Operator::Like => "like",
            Operator::Equals => "eq",
            Operator::EqualsPrimitive => "eq_primitive",
            Operator::EqualsIgnoreCase => "eq_ignore_case",
            Operator::NotEquals => "ne",
            Operator::NotEqualsPrimitive => "ne_primitive",
            Operator::StartsWith => "starts_with",
            Operator::StartsWithIgnoreCase => "starts_with_ic",
            Operator::EndsWith => "ends_with",
            Operator::EndsWithIgnoreCase => "ends_with_ic",
            Operator::Contains => "contains",
            Operator::ContainsIgnoreCase => "contains_ic",
            Operator::Between => "between",
            Operator::In => "in",
            Operator::Lower => "lower",
            Operator::Upper => "upper",
            Operator::LessThan => "lt",
            Operator::LessOrEqual => "loe",
            Operator::GreaterThan => "gt",
            Operator::GreaterOrEqual => "goe",
            Operator::IsNull => "is_null",
            Operator::IsNotNull => "is_not_null",
            Operator::Matches => "matches",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
