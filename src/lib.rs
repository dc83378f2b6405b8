//! # sarissa-dsl
//!
//! Translates abstract query-expression trees into sarissa's native query
//! and sort representations, so client code can build queries without
//! knowing the engine's query syntax.
//!
//! ## Features
//!
//! - Typed expression model with a fluent builder
//! - Exhaustive operator-to-query translation (term, phrase, prefix,
//!   wildcard, range and boolean queries)
//! - Optional lowercase normalization of terms
//! - Sort specification translation
//! - Serde support for expressions, queries and sorts

pub mod error;
pub mod expr;
pub mod query;
pub mod serializer;
pub mod sort;

pub mod prelude {
    pub use crate::error::{Result, SarissaError};
    pub use crate::expr::{ConstantValue, Expression, Operator, OrderSpecifier, Path};
    pub use crate::query::{BooleanClause, BooleanQuery, Occur, Query};
    pub use crate::serializer::{QuerySerializer, SerializerConfig};
    pub use crate::sort::{Sort, SortField};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
