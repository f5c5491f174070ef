//! Structural categories of IR types.

use serde::Deserialize;

/// What role a type plays in the IR.
///
/// Types may carry the tag explicitly. When they don't, the category is
/// derived from the type's name by [`TypeCategory::from_name`] (core graph)
/// or [`TypeCategory::from_contract_name`] (plugin contract graphs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum TypeCategory {
    /// A plain data type.
    StructuralType,
    /// A rule attached to a single field.
    FieldRule,
    /// A rule attached to a whole object.
    ObjectRule,
    /// A type modeling one fixed constant.
    Literal,
    /// Request/response shape of a parser plugin.
    ParserContract,
    /// Request/response shape of a rule (validator) plugin.
    RuleContract,
    /// Request/response shape of a generator plugin.
    GeneratorContract,
    /// Any other type reachable from a plugin contract.
    UtilityContract,
}

impl TypeCategory {
    /// Derives a core category from naming conventions.
    pub fn from_name(name: &str) -> Self {
        if name.ends_with("Rule") {
            if name.starts_with("Object") {
                TypeCategory::ObjectRule
            } else {
                TypeCategory::FieldRule
            }
        } else if name.ends_with("Literal") {
            TypeCategory::Literal
        } else {
            TypeCategory::StructuralType
        }
    }

    /// Derives a plugin contract category from naming conventions.
    pub fn from_contract_name(name: &str) -> Self {
        const PARSER: &[&str] = &["Parse"];
        const RULE: &[&str] = &["Rule", "Validat", "Violation"];
        const GENERATOR: &[&str] = &["Generat"];

        let has_prefix = |prefixes: &[&str]| prefixes.iter().any(|p| name.starts_with(p));
        if has_prefix(PARSER) {
            TypeCategory::ParserContract
        } else if has_prefix(RULE) {
            TypeCategory::RuleContract
        } else if has_prefix(GENERATOR) {
            TypeCategory::GeneratorContract
        } else {
            TypeCategory::UtilityContract
        }
    }

    /// Whether this is one of the plugin contract categories.
    pub fn is_contract(self) -> bool {
        matches!(
            self,
            TypeCategory::ParserContract
                | TypeCategory::RuleContract
                | TypeCategory::GeneratorContract
                | TypeCategory::UtilityContract
        )
    }
}
