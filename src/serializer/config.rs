//! Configuration for query serialization.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration for [`QuerySerializer`](crate::serializer::QuerySerializer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializerConfig {
    /// Lowercase every literal term before it is embedded in a query.
    /// Field names are never folded.
    pub lower_case_normalization: bool,
}

impl SerializerConfig {
    /// Configuration with case folding disabled.
    pub const fn new() -> Self {
        SerializerConfig {
            lower_case_normalization: false,
        }
    }

    /// Enable or disable lowercase normalization of terms.
    pub const fn with_lower_case_normalization(mut self, enabled: bool) -> Self {
        self.lower_case_normalization = enabled;
        self
    }

    /// Load a configuration from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
