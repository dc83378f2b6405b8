//! Ordering specifications.

use serde::{Deserialize, Serialize};

use crate::expr::expression::Expression;

/// An ordering target plus direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSpecifier {
    target: Expression,
    ascending: bool,
}

impl OrderSpecifier {
    /// Create a new order specifier.
    pub fn new(target: Expression, ascending: bool) -> Self {
        OrderSpecifier { target, ascending }
    }

    /// Get the ordering target.
    pub fn target(&self) -> &Expression {
        &self.target
    }

    /// Whether the order is ascending.
    pub fn is_ascending(&self) -> bool {
        self.ascending
    }
}
