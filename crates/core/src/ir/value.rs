//! Member values, literals and constants.

use super::rule::Rule;
use serde::{Deserialize, Deserializer};

/// A wrapped scalar as it appears in the IR (`{"value": ...}`).
///
/// The external parser attaches source locations to every literal; those
/// extra keys are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Literal<T> {
    /// The literal value.
    pub value: T,
}

impl<T> Literal<T> {
    /// Wraps a value.
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

impl From<&str> for Literal<String> {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}

/// A constant pinning a primitive value to one literal.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind")]
pub enum PrimitiveConstant {
    /// A string constant.
    StringLiteral {
        /// The string value.
        value: String,
    },
    /// A numeric constant.
    NumberLiteral {
        /// The numeric value.
        value: f64,
    },
    /// A boolean constant.
    BooleanLiteral {
        /// The boolean value.
        value: bool,
    },
    /// The `null` constant.
    NullLiteral,
}

impl PrimitiveConstant {
    /// Creates a string constant.
    pub fn string(value: impl Into<String>) -> Self {
        Self::StringLiteral {
            value: value.into(),
        }
    }

    /// Renders the constant as inline code; strings keep their quotes.
    pub fn to_code(&self) -> String {
        match self {
            PrimitiveConstant::StringLiteral { value } => format!("`\"{}\"`", value),
            PrimitiveConstant::NumberLiteral { value } => format!("`{}`", format_number(*value)),
            PrimitiveConstant::BooleanLiteral { value } => format!("`{}`", value),
            PrimitiveConstant::NullLiteral => "`null`".to_string(),
        }
    }
}

/// Formats a number the way the IR author wrote it (`3`, not `3.0`).
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}

/// A property or union member type reference.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind")]
pub enum MemberValue {
    /// A reference to a primitive type such as `string` or `integer`.
    PrimitiveValue(PrimitiveValue),
    /// A reference to another Type, Union or Enum by name.
    ComplexValue(ComplexValue),
}

/// Primitive member payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimitiveValue {
    /// Primitive type name.
    pub type_name: Literal<String>,
    /// Optional constant fixing the value to one literal.
    #[serde(default)]
    pub constant: Option<PrimitiveConstant>,
    /// Whether the value is an array.
    #[serde(default, deserialize_with = "flag")]
    pub is_array: bool,
    /// Whether the value may be omitted.
    #[serde(default, deserialize_with = "flag")]
    pub is_optional: bool,
    /// Validation rules, in declaration order.
    #[serde(default)]
    pub rules: Vec<Rule>,
}

/// Complex member payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexValue {
    /// Name of the referenced Type, Union or Enum.
    pub type_name: Literal<String>,
    /// Whether the value is an array.
    #[serde(default, deserialize_with = "flag")]
    pub is_array: bool,
    /// Whether the value may be omitted.
    #[serde(default, deserialize_with = "flag")]
    pub is_optional: bool,
    /// Validation rules, in declaration order.
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl MemberValue {
    /// A required scalar primitive reference.
    pub fn primitive(type_name: &str) -> Self {
        MemberValue::PrimitiveValue(PrimitiveValue {
            type_name: type_name.into(),
            constant: None,
            is_array: false,
            is_optional: false,
            rules: Vec::new(),
        })
    }

    /// A required scalar complex reference.
    pub fn complex(type_name: &str) -> Self {
        MemberValue::ComplexValue(ComplexValue {
            type_name: type_name.into(),
            is_array: false,
            is_optional: false,
            rules: Vec::new(),
        })
    }

    /// Marks the value as an array.
    pub fn array(mut self) -> Self {
        match &mut self {
            MemberValue::PrimitiveValue(v) => v.is_array = true,
            MemberValue::ComplexValue(v) => v.is_array = true,
        }
        self
    }

    /// Marks the value as optional.
    pub fn optional(mut self) -> Self {
        match &mut self {
            MemberValue::PrimitiveValue(v) => v.is_optional = true,
            MemberValue::ComplexValue(v) => v.is_optional = true,
        }
        self
    }

    /// Appends a rule.
    pub fn with_rule(mut self, rule: Rule) -> Self {
        match &mut self {
            MemberValue::PrimitiveValue(v) => v.rules.push(rule),
            MemberValue::ComplexValue(v) => v.rules.push(rule),
        }
        self
    }

    /// Pins a primitive value to a constant. Complex values are unchanged.
    pub fn with_constant(mut self, constant: PrimitiveConstant) -> Self {
        if let MemberValue::PrimitiveValue(v) = &mut self {
            v.constant = Some(constant);
        }
        self
    }

    /// Referenced type name.
    pub fn type_name(&self) -> &str {
        match self {
            MemberValue::PrimitiveValue(v) => &v.type_name.value,
            MemberValue::ComplexValue(v) => &v.type_name.value,
        }
    }

    /// Whether this references another named entity.
    pub fn is_complex(&self) -> bool {
        matches!(self, MemberValue::ComplexValue(_))
    }

    /// Whether the value is an array.
    pub fn is_array(&self) -> bool {
        match self {
            MemberValue::PrimitiveValue(v) => v.is_array,
            MemberValue::ComplexValue(v) => v.is_array,
        }
    }

    /// Attached rules.
    pub fn rules(&self) -> &[Rule] {
        match self {
            MemberValue::PrimitiveValue(v) => &v.rules,
            MemberValue::ComplexValue(v) => &v.rules,
        }
    }

    /// Constant for primitive values pinned to one literal.
    pub fn constant(&self) -> Option<&PrimitiveConstant> {
        match self {
            MemberValue::PrimitiveValue(v) => v.constant.as_ref(),
            MemberValue::ComplexValue(_) => None,
        }
    }

    /// Required unless optional. A legacy `Required` rule always wins.
    pub fn is_required(&self) -> bool {
        let optional = match self {
            MemberValue::PrimitiveValue(v) => v.is_optional,
            MemberValue::ComplexValue(v) => v.is_optional,
        };
        !optional || self.rules().iter().any(|r| matches!(r, Rule::Required))
    }
}

/// Accepts `true`, `{"value": true}` or `null`.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bare(bool),
        Wrapped(Literal<bool>),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bare(value)) => value,
        Some(Flag::Wrapped(literal)) => literal.value,
        None => false,
    })
}

/// Accepts a paragraph list, a single paragraph, or `null`.
pub(crate) fn paragraphs<'de, D>(deserializer: D) -> Result<Vec<Literal<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        Many(Vec<Literal<String>>),
        One(Literal<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::Many(list)) => list,
        Some(OneOrMany::One(single)) => vec![single],
        None => Vec::new(),
    })
}
