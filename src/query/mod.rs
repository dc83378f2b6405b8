//! Native query representation handed to the search engine.

pub mod boolean;
pub mod phrase;
pub mod prefix;
#[allow(clippy::module_inception)]
pub mod query;
pub mod range;
pub mod term;
pub mod wildcard;

pub use self::boolean::{BooleanClause, BooleanQuery, Occur};
pub use self::phrase::PhraseQuery;
pub use self::prefix::PrefixQuery;
pub use self::query::Query;
pub use self::range::{Bound, RangeQuery};
pub use self::term::TermQuery;
pub use self::wildcard::WildcardQuery;
