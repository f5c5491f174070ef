//! In-memory model of the Service IR.
//!
//! The model mirrors the JSON the external parser emits. Everything is
//! read-only once loaded; the builder helpers exist for callers that
//! assemble a graph in code.

mod category;
mod rule;
mod value;

pub use category::TypeCategory;
pub use rule::Rule;
pub use value::{
    ComplexValue, Literal, MemberValue, PrimitiveConstant, PrimitiveValue, format_number,
};

use crate::DocError;
use serde::Deserialize;

/// Root of the IR: every type, enum and union the service defines.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    /// Service title.
    #[serde(default)]
    pub title: Option<Literal<String>>,
    /// Record types.
    #[serde(default)]
    pub types: Vec<Type>,
    /// Enumerations.
    #[serde(default)]
    pub enums: Vec<Enum>,
    /// Unions.
    #[serde(default)]
    pub unions: Vec<Union>,
}

impl Service {
    /// Loads a service from its JSON form.
    pub fn from_json(input: &str) -> Result<Self, DocError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Converts an already-parsed JSON tree into a service.
    pub fn from_value(value: serde_json::Value) -> Result<Self, DocError> {
        serde_json::from_value(value).map_err(|e| DocError::invalid_value(e.to_string()))
    }

    /// Creates a service from record types.
    pub fn new(types: Vec<Type>) -> Self {
        Self {
            types,
            ..Self::default()
        }
    }

    /// Adds an enum.
    pub fn with_enum(mut self, e: Enum) -> Self {
        self.enums.push(e);
        self
    }

    /// Adds a union.
    pub fn with_union(mut self, u: Union) -> Self {
        self.unions.push(u);
        self
    }
}

/// A named record with ordered properties.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Type {
    /// Unique name within the service.
    pub name: Literal<String>,
    /// Description paragraphs.
    #[serde(default, deserialize_with = "value::paragraphs")]
    pub description: Vec<Literal<String>>,
    /// Properties in declaration order.
    #[serde(default)]
    pub properties: Vec<Property>,
    /// Explicit category; derived from the name when absent.
    #[serde(default)]
    pub category: Option<TypeCategory>,
}

impl Type {
    /// Creates an empty type.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.into(),
            description: Vec::new(),
            properties: Vec::new(),
            category: None,
        }
    }

    /// Adds a property.
    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Sets the description paragraphs.
    pub fn with_description(mut self, paragraphs: &[&str]) -> Self {
        self.description = paragraphs.iter().map(|p| (*p).into()).collect();
        self
    }

    /// Sets an explicit category.
    pub fn with_category(mut self, category: TypeCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// The type's name.
    pub fn name(&self) -> &str {
        &self.name.value
    }

    /// Explicit category, or the one the naming convention implies.
    pub fn category(&self) -> TypeCategory {
        self.category
            .unwrap_or_else(|| TypeCategory::from_name(self.name()))
    }
}

/// A named field of a [`Type`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Field name.
    pub name: Literal<String>,
    /// Description paragraphs.
    #[serde(default, deserialize_with = "value::paragraphs")]
    pub description: Vec<Literal<String>>,
    /// Type reference, cardinality, requiredness and rules.
    pub value: MemberValue,
}

impl Property {
    /// Creates a property.
    pub fn new(name: &str, value: MemberValue) -> Self {
        Self {
            name: name.into(),
            description: Vec::new(),
            value,
        }
    }

    /// Sets the description paragraphs.
    pub fn with_description(mut self, paragraphs: &[&str]) -> Self {
        self.description = paragraphs.iter().map(|p| (*p).into()).collect();
        self
    }

    /// The property's name.
    pub fn name(&self) -> &str {
        &self.name.value
    }
}

/// A named set of alternatives.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Union {
    /// Union name.
    pub name: Literal<String>,
    /// Member references.
    #[serde(default)]
    pub members: Vec<MemberValue>,
}

impl Union {
    /// Creates a union.
    pub fn new(name: &str, members: Vec<MemberValue>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }

    /// The union's name.
    pub fn name(&self) -> &str {
        &self.name.value
    }
}

/// A named, ordered set of string constants.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Enum {
    /// Enum name.
    pub name: Literal<String>,
    /// Members in declaration order.
    #[serde(default)]
    pub members: Vec<EnumMember>,
}

/// One enum member.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnumMember {
    /// Member value.
    pub content: Literal<String>,
}

impl Enum {
    /// Creates an enum.
    pub fn new(name: &str, values: &[&str]) -> Self {
        Self {
            name: name.into(),
            members: values
                .iter()
                .map(|v| EnumMember {
                    content: (*v).into(),
                })
                .collect(),
        }
    }

    /// The enum's name.
    pub fn name(&self) -> &str {
        &self.name.value
    }

    /// Member values in dictionary order: case-insensitive, with the
    /// lowercase spelling first when two values differ only in case.
    pub fn sorted_values(&self) -> Vec<&str> {
        let mut values: Vec<&str> = self
            .members
            .iter()
            .map(|m| m.content.value.as_str())
            .collect();
        values.sort_by(|a, b| {
            a.to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| b.cmp(a))
        });
        values
    }
}
