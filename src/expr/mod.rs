//! Expression tree model consumed by the query serializer.

pub mod constant;
pub mod expression;
pub mod operator;
pub mod order;

pub use self::constant::ConstantValue;
pub use self::expression::{Expression, Operation, Path};
pub use self::operator::Operator;
pub use self::order::OrderSpecifier;
