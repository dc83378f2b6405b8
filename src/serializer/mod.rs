//! Translation of expression trees into native queries and sorts.
//!
//! [`QuerySerializer`] walks an [`Expression`] recursively and produces one
//! native [`Query`] node per operation, combining children according to the
//! operator. String predicates split their literal on whitespace and build
//! term, phrase, prefix or wildcard queries from the pieces.
//!
//! # Examples
//!
//! ```
//! use sarissa_dsl::expr::Expression;
//! use sarissa_dsl::serializer::QuerySerializer;
//!
//! let expr = Expression::path("title")
//!     .eq("Rust")
//!     .and(Expression::path("body").starts_with("async"));
//!
//! let query = QuerySerializer::LOWERCASE.to_query(&expr).unwrap();
//! assert_eq!(query.to_string(), "+title:rust +body:async*");
//! ```

pub mod config;
pub mod terms;

pub use self::config::SerializerConfig;

use log::{debug, trace};

use crate::error::{Result, SarissaError};
use crate::expr::{ConstantValue, Expression, Operation, Operator, OrderSpecifier, Path};
use crate::query::{
    BooleanClause, BooleanQuery, Occur, PhraseQuery, PrefixQuery, Query, RangeQuery, TermQuery,
    WildcardQuery,
};
use crate::sort::{Sort, SortField};

/// Serializes expression trees into native queries.
///
/// The serializer holds only its immutable configuration, so one instance can
/// be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuerySerializer {
    config: SerializerConfig,
}

impl QuerySerializer {
    /// Serializer that embeds terms unchanged.
    pub const DEFAULT: QuerySerializer = QuerySerializer::new(SerializerConfig::new());

    /// Serializer that lowercases every term.
    pub const LOWERCASE: QuerySerializer =
        QuerySerializer::new(SerializerConfig::new().with_lower_case_normalization(true));

    /// Create a serializer with the given configuration.
    pub const fn new(config: SerializerConfig) -> Self {
        QuerySerializer { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &SerializerConfig {
        &self.config
    }

    /// Translate an expression into a native query.
    ///
    /// The root must be an operation. Fails with
    /// [`SarissaError::InvalidArgument`] on structurally invalid input and with
    /// [`SarissaError::UnsupportedOperation`] on operators without a
    /// translation.
    pub fn to_query(&self, expr: &Expression) -> Result<Query> {
        debug!("serializing expression {expr}");
        self.query(expr)
    }

    /// Translate order specifiers into a native sort, preserving their order.
    pub fn to_sort(&self, order_specifiers: &[OrderSpecifier]) -> Result<Sort> {
        debug!("serializing {} order specifiers", order_specifiers.len());
        let fields = order_specifiers
            .iter()
            .map(|order| match order.target() {
                Expression::Path(path) => {
                    Ok(SortField::new(self.path_field(path), !order.is_ascending()))
                }
                other => Err(SarissaError::invalid_argument(format!(
                    "sort target was not of type Path: {other}"
                ))),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Sort::new(fields))
    }

    /// Resolve an expression to the field name it refers to.
    ///
    /// Paths resolve to their name; `lower`/`upper` wrappers resolve to the
    /// field they wrap.
    pub fn field_name(&self, expr: &Expression) -> Result<String> {
        match expr {
            Expression::Path(path) => Ok(self.path_field(path)),
            Expression::Operation(operation) if operation.operator().is_case_folding() => {
                let inner = operation.arg(0).ok_or_else(|| {
                    SarissaError::invalid_argument(format!("{operation} has no argument"))
                })?;
                self.field_name(inner)
            }
            other => Err(SarissaError::invalid_argument(format!(
                "Unable to transform {other} to field"
            ))),
        }
    }

    /// Field name for a path.
    pub fn path_field(&self, path: &Path) -> String {
        path.name().to_string()
    }

    fn query(&self, expr: &Expression) -> Result<Query> {
        match expr {
            Expression::Operation(operation) => self.operation(operation),
            other => Err(SarissaError::invalid_argument(format!(
                "expected an Operation node, got {} `{other}`",
                other.kind()
            ))),
        }
    }

    fn operation(&self, operation: &Operation) -> Result<Query> {
        trace!("translating {}", operation.operator());
        match operation.operator() {
            Operator::Or => self.two_sided(operation, Occur::Should),
            Operator::And => self.two_sided(operation, Occur::Must),
            Operator::Not => {
                check_arity(operation)?;
                let mut bq = BooleanQuery::new();
                bq.add_must_not(self.query(arg(operation, 0)?)?);
                Ok(bq.into())
            }
            Operator::Like => self.like(operation),
            Operator::Equals | Operator::EqualsPrimitive | Operator::EqualsIgnoreCase => {
                self.eq(operation)
            }
            Operator::NotEquals | Operator::NotEqualsPrimitive => {
                let mut bq = BooleanQuery::new();
                bq.add_must_not(self.eq(operation)?);
                Ok(bq.into())
            }
            Operator::StartsWith | Operator::StartsWithIgnoreCase => self.starts_with(operation),
            Operator::EndsWith | Operator::EndsWithIgnoreCase => self.ends_with(operation),
            Operator::Contains | Operator::ContainsIgnoreCase => self.contains(operation),
            Operator::Between => self.between(operation),
            Operator::In => self.in_values(operation),
            Operator::Lower
            | Operator::Upper
            | Operator::LessThan
            | Operator::LessOrEqual
            | Operator::GreaterThan
            | Operator::GreaterOrEqual
            | Operator::IsNull
            | Operator::IsNotNull
            | Operator::Matches => Err(SarissaError::unsupported_operation(format!(
                "Illegal operation {operation}"
            ))),
        }
    }

    fn two_sided(&self, operation: &Operation, occur: Occur) -> Result<Query> {
        check_arity(operation)?;
        let lhs = self.query(arg(operation, 0)?)?;
        let rhs = self.query(arg(operation, 1)?)?;
        let mut bq = BooleanQuery::new();
        bq.add(lhs, occur);
        bq.add(rhs, occur);
        Ok(bq.into())
    }

    fn like(&self, operation: &Operation) -> Result<Query> {
        verify_arguments(operation)?;
        let field = self.field_name(arg(operation, 0)?)?;
        let terms = create_terms(arg(operation, 1)?)?;
        if terms.len() > 1 {
            let bq = terms
                .iter()
                .map(|term| {
                    WildcardQuery::new(field.as_str(), format!("*{}*", self.normalize(term)))
                })
                .map(BooleanClause::must)
                .collect::<BooleanQuery>();
            return Ok(bq.into());
        }
        Ok(WildcardQuery::new(field, format!("*{}*", self.normalize(&terms[0]))).into())
    }

    fn eq(&self, operation: &Operation) -> Result<Query> {
        verify_arguments(operation)?;
        let field = self.field_name(arg(operation, 0)?)?;
        let terms = create_terms(arg(operation, 1)?)?;
        Ok(self.eq_terms(field, &terms))
    }

    /// Single term becomes a term query, several become a phrase.
    fn eq_terms(&self, field: String, terms: &[String]) -> Query {
        if terms.len() > 1 {
            let terms = terms.iter().map(|term| self.normalize(term)).collect();
            return PhraseQuery::new(field, terms).into();
        }
        TermQuery::new(field, self.normalize(&terms[0])).into()
    }

    fn starts_with(&self, operation: &Operation) -> Result<Query> {
        verify_arguments(operation)?;
        let field = self.field_name(arg(operation, 0)?)?;
        let terms = create_escaped_terms(arg(operation, 1)?)?;
        if terms.len() > 1 {
            let mut bq = BooleanQuery::new();
            for (i, term) in terms.iter().enumerate() {
                let pattern = if i == 0 {
                    format!("{term}*")
                } else {
                    format!("*{term}*")
                };
                bq.add_must(WildcardQuery::new(field.as_str(), self.normalize(&pattern)));
            }
            return Ok(bq.into());
        }
        Ok(PrefixQuery::new(field, self.normalize(&terms[0])).into())
    }

    fn ends_with(&self, operation: &Operation) -> Result<Query> {
        verify_arguments(operation)?;
        let field = self.field_name(arg(operation, 0)?)?;
        let terms = create_escaped_terms(arg(operation, 1)?)?;
        if terms.len() > 1 {
            let last = terms.len() - 1;
            let mut bq = BooleanQuery::new();
            for (i, term) in terms.iter().enumerate() {
                let pattern = if i == last {
                    format!("*{term}")
                } else {
                    format!("*{term}*")
                };
                bq.add_must(WildcardQuery::new(field.as_str(), self.normalize(&pattern)));
            }
            return Ok(bq.into());
        }
        Ok(WildcardQuery::new(field, format!("*{}", self.normalize(&terms[0]))).into())
    }

    fn contains(&self, operation: &Operation) -> Result<Query> {
        verify_arguments(operation)?;
        let field = self.field_name(arg(operation, 0)?)?;
        let terms = create_escaped_terms(arg(operation, 1)?)?;
        if terms.len() > 1 {
            let mut bq = BooleanQuery::new();
            for term in &terms {
                bq.add_must(WildcardQuery::new(
                    field.as_str(),
                    format!("*{}*", self.normalize(term)),
                ));
            }
            return Ok(bq.into());
        }
        Ok(WildcardQuery::new(field, format!("*{}*", self.normalize(&terms[0]))).into())
    }

    /// Only the first term of each bound is used; phrase bounds are not supported.
    fn between(&self, operation: &Operation) -> Result<Query> {
        verify_arguments(operation)?;
        let field = self.field_name(arg(operation, 0)?)?;
        let lower = create_terms(arg(operation, 1)?)?;
        let upper = create_terms(arg(operation, 2)?)?;
        Ok(RangeQuery::new(
            field,
            Some(self.normalize(&lower[0])),
            Some(self.normalize(&upper[0])),
        )
        .into())
    }

    fn in_values(&self, operation: &Operation) -> Result<Query> {
        check_arity(operation)?;
        let field = self.field_name(arg(operation, 0)?)?;
        let values = match arg(operation, 1)? {
            Expression::Constant(ConstantValue::Collection(values)) => values,
            other => {
                return Err(SarissaError::invalid_argument(format!(
                    "in() expects a collection constant, got {} `{other}`",
                    other.kind()
                )));
            }
        };

        let mut bq = BooleanQuery::new();
        for value in values {
            let terms = non_empty_terms(terms::split_terms(&value.to_string()), value)?;
            bq.add_should(self.eq_terms(field.clone(), &terms));
        }
        Ok(bq.into())
    }

    fn normalize(&self, term: &str) -> String {
        if self.config.lower_case_normalization {
            terms::lowercase(term)
        } else {
            term.to_string()
        }
    }
}

fn arg(operation: &Operation, index: usize) -> Result<&Expression> {
    operation.arg(index).ok_or_else(|| {
        SarissaError::invalid_argument(format!("{operation} is missing argument {index}"))
    })
}

fn check_arity(operation: &Operation) -> Result<()> {
    let expected = operation.operator().arity();
    if operation.args().len() != expected {
        return Err(SarissaError::invalid_argument(format!(
            "{} expects {expected} arguments, got {}",
            operation.operator(),
            operation.args().len()
        )));
    }
    Ok(())
}

/// Every argument after the first must be a constant.
fn verify_arguments(operation: &Operation) -> Result<()> {
    check_arity(operation)?;
    for (i, argument) in operation.args().iter().enumerate().skip(1) {
        if !matches!(argument, Expression::Constant(_)) {
            return Err(SarissaError::invalid_argument(format!(
                "argument {i} of {} was not of type Constant: {argument}",
                operation.operator()
            )));
        }
    }
    Ok(())
}

fn literal(expr: &Expression) -> Result<&ConstantValue> {
    match expr {
        Expression::Constant(value) => Ok(value),
        other => Err(SarissaError::invalid_argument(format!(
            "expected a Constant, got {} `{other}`",
            other.kind()
        ))),
    }
}

fn non_empty_terms(terms: Vec<String>, source: &ConstantValue) -> Result<Vec<String>> {
    if terms.is_empty() {
        return Err(SarissaError::invalid_argument(format!(
            "literal `{source}` contains no terms"
        )));
    }
    Ok(terms)
}

fn create_terms(expr: &Expression) -> Result<Vec<String>> {
    let value = literal(expr)?;
    non_empty_terms(terms::split_terms(&value.to_string()), value)
}

fn create_escaped_terms(expr: &Expression) -> Result<Vec<String>> {
    let value = literal(expr)?;
    non_empty_terms(terms::split_escaped_terms(&value.to_string()), value)
}
