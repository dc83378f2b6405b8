//! Expression tree nodes and a fluent builder over them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::expr::constant::ConstantValue;
use crate::expr::operator::Operator;
use crate::expr::order::OrderSpecifier;

/// A reference to a named document field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Path {
    name: String,
}

impl Path {
    /// Create a new path.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Path { name: name.into() }
    }

    /// Get the qualified field name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// An operator applied to an ordered list of arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    operator: Operator,
    args: Vec<Expression>,
}

impl Operation {
    /// Create a new operation.
    pub fn new(operator: Operator, args: Vec<Expression>) -> Self {
        Operation { operator, args }
    }

    /// Get the operator tag.
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Get all arguments.
    pub fn args(&self) -> &[Expression] {
        &self.args
    }

    /// Get the argument at `index`, if present.
    pub fn arg(&self, index: usize) -> Option<&Expression> {
        self.args.get(index)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.operator)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str(")")
    }
}

/// A node of a caller-built query predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expression {
    Path(Path),
    Constant(ConstantValue),
    Operation(Operation),
}

impl Expression {
    /// Create a path node.
    pub fn path<S: Into<String>>(name: S) -> Self {
        Expression::Path(Path::new(name))
    }

    /// Create a constant node.
    pub fn constant<V: Into<ConstantValue>>(value: V) -> Self {
        Expression::Constant(value.into())
    }

    /// Create an operation node.
    pub fn operation(operator: Operator, args: Vec<Expression>) -> Self {
        Expression::Operation(Operation::new(operator, args))
    }

    /// Short name of the node kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Expression::Path(_) => "Path",
            Expression::Constant(_) => "Constant",
            Expression::Operation(_) => "Operation",
        }
    }

    fn binary<V: Into<ConstantValue>>(self, operator: Operator, value: V) -> Self {
        Expression::operation(operator, vec![self, Expression::constant(value)])
    }

    /// Conjunction of this predicate and `other`.
    pub fn and(self, other: Expression) -> Self {
        Expression::operation(Operator::And, vec![self, other])
    }

    /// Disjunction of this predicate and `other`.
    pub fn or(self, other: Expression) -> Self {
        Expression::operation(Operator::Or, vec![self, other])
    }

    /// Negation of this predicate.
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Expression::operation(Operator::Not, vec![self])
    }

    /// Lower-cased value of this expression.
    pub fn lower(self) -> Self {
        Expression::operation(Operator::Lower, vec![self])
    }

    /// Upper-cased value of this expression.
    pub fn upper(self) -> Self {
        Expression::operation(Operator::Upper, vec![self])
    }

    /// SQL-style pattern match, with `%` and `_` wildcards.
    pub fn like<V: Into<ConstantValue>>(self, pattern: V) -> Self {
        self.binary(Operator::Like, pattern)
    }

    /// Equality with a value.
    pub fn eq<V: Into<ConstantValue>>(self, value: V) -> Self {
        self.binary(Operator::Equals, value)
    }

    /// Case-insensitive equality with a value.
    pub fn eq_ignore_case<V: Into<ConstantValue>>(self, value: V) -> Self {
        self.binary(Operator::EqualsIgnoreCase, value)
    }

    /// Inequality with a value.
    pub fn ne<V: Into<ConstantValue>>(self, value: V) -> Self {
        self.binary(Operator::NotEquals, value)
    }

    /// Prefix match.
    pub fn starts_with<V: Into<ConstantValue>>(self, value: V) -> Self {
        self.binary(Operator::StartsWith, value)
    }

    /// Case-insensitive prefix match.
    pub fn starts_with_ignore_case<V: Into<ConstantValue>>(self, value: V) -> Self {
        self.binary(Operator::StartsWithIgnoreCase, value)
    }

    /// Suffix match.
    pub fn ends_with<V: Into<ConstantValue>>(self, value: V) -> Self {
        self.binary(Operator::EndsWith, value)
    }

    /// Case-insensitive suffix match.
    pub fn ends_with_ignore_case<V: Into<ConstantValue>>(self, value: V) -> Self {
        self.binary(Operator::EndsWithIgnoreCase, value)
    }

    /// Substring match.
    pub fn contains<V: Into<ConstantValue>>(self, value: V) -> Self {
        self.binary(Operator::Contains, value)
    }

    /// Case-insensitive substring match.
    pub fn contains_ignore_case<V: Into<ConstantValue>>(self, value: V) -> Self {
        self.binary(Operator::ContainsIgnoreCase, value)
    }

    /// Inclusive range between `lower` and `upper`.
    pub fn between<L, U>(self, lower: L, upper: U) -> Self
    where
        L: Into<ConstantValue>,
        U: Into<ConstantValue>,
    {
        Expression::operation(
            Operator::Between,
            vec![self, Expression::constant(lower), Expression::constant(upper)],
        )
    }

    /// Membership in a list of values.
    pub fn in_values<I, V>(self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ConstantValue>,
    {
        self.binary(Operator::In, ConstantValue::collection(values))
    }

    /// Ascending order on this expression.
    pub fn asc(self) -> OrderSpecifier {
        OrderSpecifier::new(self, true)
    }

    /// Descending order on this expression.
    pub fn desc(self) -> OrderSpecifier {
        OrderSpecifier::new(self, false)
    }
}

impl From<Path> for Expression {
    fn from(path: Path) -> Self {
        Expression::Path(path)
    }
}

impl From<Operation> for Expression {
    fn from(operation: Operation) -> Self {
        Expression::Operation(operation)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Path(path) => write!(f, "{path}"),
            Expression::Constant(value) => write!(f, "{value}"),
            Expression::Operation(operation) => write!(f, "{operation}"),
        }
    }
}
