//! Validation rules attached to member values.

use super::value::Literal;
use serde::Deserialize;

/// A machine-checkable constraint attached to a property.
///
/// The set is closed; ids the model does not know load as [`Rule::Unknown`]
/// instead of failing, so newer IR documents still render.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "id")]
pub enum Rule {
    /// Array may hold at most `max` items.
    ArrayMaxItems {
        /// Upper bound.
        max: Literal<f64>,
    },
    /// Array must hold at least `min` items.
    ArrayMinItems {
        /// Lower bound.
        min: Literal<f64>,
    },
    /// Array items must be unique.
    ArrayUniqueItems,
    /// Number must be greater than `value`.
    #[serde(rename = "NumberGT")]
    NumberGt {
        /// Exclusive bound.
        value: Literal<f64>,
    },
    /// Number must be greater than or equal to `value`.
    #[serde(rename = "NumberGTE")]
    NumberGte {
        /// Inclusive bound.
        value: Literal<f64>,
    },
    /// Number must be less than `value`.
    #[serde(rename = "NumberLT")]
    NumberLt {
        /// Exclusive bound.
        value: Literal<f64>,
    },
    /// Number must be less than or equal to `value`.
    #[serde(rename = "NumberLTE")]
    NumberLte {
        /// Inclusive bound.
        value: Literal<f64>,
    },
    /// String length upper bound.
    StringMaxLength {
        /// Maximum length.
        length: Literal<f64>,
    },
    /// String length lower bound.
    StringMinLength {
        /// Minimum length.
        length: Literal<f64>,
    },
    /// String must match a regular expression.
    StringPattern {
        /// The pattern source.
        pattern: Literal<String>,
    },
    /// String must be a valid instance of a named format.
    StringFormat {
        /// Format name, e.g. `date-time`.
        format: Literal<String>,
    },
    /// Legacy requiredness marker.
    Required,
    /// Any rule id this model does not know.
    #[serde(other)]
    Unknown,
}

impl Rule {
    /// `ArrayMaxItems` helper.
    pub fn max_items(max: f64) -> Self {
        Rule::ArrayMaxItems {
            max: Literal::new(max),
        }
    }

    /// `ArrayMinItems` helper.
    pub fn min_items(min: f64) -> Self {
        Rule::ArrayMinItems {
            min: Literal::new(min),
        }
    }

    /// `StringPattern` helper.
    pub fn pattern(pattern: &str) -> Self {
        Rule::StringPattern {
            pattern: pattern.into(),
        }
    }
}
