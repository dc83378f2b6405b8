//! Native sort specification handed to the search engine.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// How the values of a sort field are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortComparator {
    /// Locale-invariant string collation: case-insensitive first, and on a
    /// case-only tie lowercase sorts before uppercase. Accents are not
    /// folded, so `é` sorts after every ASCII letter.
    #[default]
    InvariantString,
}

impl SortComparator {
    /// Compare two field values in ascending order.
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            SortComparator::InvariantString => a
                .chars()
                .flat_map(char::to_lowercase)
                .cmp(b.chars().flat_map(char::to_lowercase))
                .then_with(|| case_key(a).cmp(case_key(b))),
        }
    }
}

fn case_key(s: &str) -> impl Iterator<Item = (bool, char)> + '_ {
    s.chars().map(|c| (c.is_uppercase(), c))
}

/// One key of a sort specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortField {
    /// The field to sort by.
    field: String,
    /// How values are compared.
    comparator: SortComparator,
    /// Whether the natural order is reversed.
    reverse: bool,
}

impl SortField {
    /// Create a sort field using the invariant string comparator.
    pub fn new<S: Into<String>>(field: S, reverse: bool) -> Self {
        SortField {
            field: field.into(),
            comparator: SortComparator::InvariantString,
            reverse,
        }
    }

    /// Get the field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Get the comparator.
    pub fn comparator(&self) -> SortComparator {
        self.comparator
    }

    /// Whether the natural order is reversed.
    pub fn is_reverse(&self) -> bool {
        self.reverse
    }

    /// Compare two values of this field, honouring `reverse`.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let ordering = self.comparator.compare(a, b);
        if self.reverse {
            ordering.reverse()
        } else {
            ordering
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reverse {
            f.write_str("!")?;
        }
        f.write_str(&self.field)
    }
}

/// An ordered list of sort keys; the first field is the primary key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Sort {
    fields: Vec<SortField>,
}

impl Sort {
    /// Create a sort from its keys.
    pub fn new(fields: Vec<SortField>) -> Self {
        Sort { fields }
    }

    /// Get the sort keys in priority order.
    pub fn fields(&self) -> &[SortField] {
        &self.fields
    }

    /// Check if there are no sort keys.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{field}")?;
        }
        Ok(())
    }
}
