//! Domain error model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// A closed vocabulary of menu tokens (drink names, salad names, hamburger
/// sizes and stuffings).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vocabulary {
    Drink,
    Salad,
    Size,
    Stuffing,
}

impl core::fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            Vocabulary::Drink => "drink",
            Vocabulary::Salad => "salad",
            Vocabulary::Size => "size",
            Vocabulary::Stuffing => "stuffing",
        };
        f.write_str(label)
    }
}

/// Domain-level error.
///
/// Every variant is a hard stop for the offending call; the object it was
/// called on (if any) is left exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A token is not part of its enumerated vocabulary.
    #[error("unknown {vocabulary}: {name:?}")]
    InvalidVariantName { vocabulary: Vocabulary, name: String },

    /// A value failed validation (e.g. a non-positive salad weight).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A mutation was attempted on an order that is already paid.
    #[error("order already paid")]
    OrderClosed,

    /// A position index does not address an existing item.
    #[error("index {index} out of range for order of {len} item(s)")]
    IndexOutOfRange { index: usize, len: usize },

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn unknown(vocabulary: Vocabulary, name: impl Into<String>) -> Self {
        Self::InvalidVariantName {
            vocabulary,
            name: name.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_variant_names_its_vocabulary() {
        let err = DomainError::unknown(Vocabulary::Stuffing, "bacon");
        assert_eq!(err.to_string(), "unknown stuffing: \"bacon\"");

        let err = DomainError::unknown(Vocabulary::Drink, "Tea");
        assert_eq!(err.to_string(), "unknown drink: \"Tea\"");
    }

    #[test]
    fn index_out_of_range_reports_bounds() {
        let err = DomainError::index_out_of_range(3, 2);
        assert_eq!(err.to_string(), "index 3 out of range for order of 2 item(s)");
    }

    #[test]
    fn vocabulary_serializes_lowercase() {
        let json = serde_json::to_string(&Vocabulary::Size).unwrap();
        assert_eq!(json, "\"size\"");
    }
}
