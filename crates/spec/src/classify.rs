//! Partitioning visited types into documentation buckets.

use crate::traverse::{TypeSet, reachable};
use irdoc_core::{SERVICE_TYPE, ServiceIndex, Type, TypeCategory};
use std::collections::HashSet;

/// Buckets of the core section, in document order.
pub const CORE_CATEGORIES: [TypeCategory; 4] = [
    TypeCategory::StructuralType,
    TypeCategory::FieldRule,
    TypeCategory::ObjectRule,
    TypeCategory::Literal,
];

/// Buckets of the plugin contract section, in document order.
pub const CONTRACT_CATEGORIES: [TypeCategory; 4] = [
    TypeCategory::ParserContract,
    TypeCategory::RuleContract,
    TypeCategory::GeneratorContract,
    TypeCategory::UtilityContract,
];

/// Types of one category, in traversal order.
#[derive(Debug, Clone)]
pub struct Bucket<'a> {
    category: TypeCategory,
    types: Vec<&'a Type>,
}

impl<'a> Bucket<'a> {
    /// The bucket's category.
    pub fn category(&self) -> TypeCategory {
        self.category
    }

    /// Member types.
    pub fn types(&self) -> &[&'a Type] {
        &self.types
    }
}

/// A fixed, ordered list of disjoint buckets.
#[derive(Debug, Clone)]
pub struct Buckets<'a> {
    buckets: Vec<Bucket<'a>>,
    names: HashSet<&'a str>,
}

impl<'a> Buckets<'a> {
    fn with_categories(categories: &[TypeCategory]) -> Self {
        Self {
            buckets: categories
                .iter()
                .map(|&category| Bucket {
                    category,
                    types: Vec::new(),
                })
                .collect(),
            names: HashSet::new(),
        }
    }

    /// Empty core buckets.
    pub fn core() -> Self {
        Self::with_categories(&CORE_CATEGORIES)
    }

    /// Empty plugin contract buckets.
    pub fn contracts() -> Self {
        Self::with_categories(&CONTRACT_CATEGORIES)
    }

    /// Adds a type unless a type of that name is already bucketed.
    fn insert(&mut self, category: TypeCategory, t: &'a Type) -> bool {
        let Some(bucket) = self.buckets.iter_mut().find(|b| b.category == category) else {
            return false;
        };
        if !self.names.insert(t.name()) {
            return false;
        }
        bucket.types.push(t);
        true
    }

    /// Members of one category; empty for categories this list doesn't hold.
    pub fn get(&self, category: TypeCategory) -> &[&'a Type] {
        self.buckets
            .iter()
            .find(|b| b.category == category)
            .map(|b| b.types.as_slice())
            .unwrap_or_default()
    }

    /// Buckets in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, Bucket<'a>> {
        self.buckets.iter()
    }

    /// Whether any bucket holds a type of this name.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Total number of bucketed types.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no type is bucketed.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Splits the types reachable from the root into the four core buckets.
///
/// Contract tags have no core bucket; such types count as structural.
pub fn classify<'a>(visited: &TypeSet<'a>) -> Buckets<'a> {
    let mut buckets = Buckets::core();
    for t in visited.iter() {
        let category = match t.category() {
            c if c.is_contract() => TypeCategory::StructuralType,
            c => c,
        };
        buckets.insert(category, t);
    }
    buckets
}

/// Buckets the types reachable from each plugin entry point.
///
/// Entry points are walked in the given order with the root `Service` type
/// as a boundary. Types already in `core`, or placed by an earlier entry
/// point, are skipped, so each type lands in exactly one bucket.
pub fn classify_plugins<'a, S: AsRef<str>>(
    index: &ServiceIndex<'a>,
    core: &Buckets<'a>,
    entry_points: &[S],
) -> Buckets<'a> {
    let mut buckets = Buckets::contracts();

    for entry_point in entry_points {
        let entry_point = entry_point.as_ref();
        let Some(entry) = index.get_type(entry_point) else {
            log::debug!("Plugin entry point `{}` is not defined; skipping", entry_point);
            continue;
        };

        for t in reachable(index, entry, Some(SERVICE_TYPE)).iter() {
            if core.contains(t.name()) {
                continue;
            }
            let category = match t.category {
                Some(c) if c.is_contract() => c,
                _ => TypeCategory::from_contract_name(t.name()),
            };
            buckets.insert(category, t);
        }
    }

    buckets
}
