//! Breadth-first walk over the type graph.

use irdoc_core::{MemberValue, Resolved, ServiceIndex, Type, normalize_name};
use std::collections::{HashSet, VecDeque};

/// Distinct types in the order a traversal first reached them.
#[derive(Debug, Clone, Default)]
pub struct TypeSet<'a> {
    types: Vec<&'a Type>,
    names: HashSet<&'a str>,
}

impl<'a> TypeSet<'a> {
    /// Types in visit order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Type> + '_ {
        self.types.iter().copied()
    }

    /// Whether a type with this name was visited.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Type names in visit order.
    pub fn names(&self) -> Vec<&'a str> {
        self.types.iter().map(|t| t.name()).collect()
    }

    /// Number of visited types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether nothing was visited.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Collects every type reachable from `root` through complex-valued properties.
///
/// Properties pointing at a Type are followed directly; properties pointing
/// at a Union follow each member that names a Type. Primitive properties,
/// enums and unresolvable names end the branch. Each type is enqueued once,
/// so cyclic graphs terminate.
///
/// A type whose normalized name matches `stop` is neither collected nor
/// expanded, wherever it appears, including as `root`.
pub fn reachable<'a>(index: &ServiceIndex<'a>, root: &'a Type, stop: Option<&str>) -> TypeSet<'a> {
    let stop = stop.map(normalize_name);
    let is_stop = |t: &Type| {
        stop.as_deref()
            .is_some_and(|stop| normalize_name(t.name()) == stop)
    };

    let mut set = TypeSet::default();
    let mut queue = VecDeque::new();

    if !is_stop(root) {
        set.names.insert(root.name());
        queue.push_back(root);
    }

    while let Some(current) = queue.pop_front() {
        set.types.push(current);

        for property in &current.properties {
            for next in referenced_types(index, &property.value) {
                if is_stop(next) || !set.names.insert(next.name()) {
                    continue;
                }
                queue.push_back(next);
            }
        }
    }

    log::debug!(
        "Traversal from `{}` reached {} type(s)",
        root.name(),
        set.len()
    );
    set
}

fn referenced_types<'a>(index: &ServiceIndex<'a>, value: &MemberValue) -> Vec<&'a Type> {
    if !value.is_complex() {
        return Vec::new();
    }

    match index.resolve(value.type_name()) {
        Resolved::Type(t) => vec![t],
        Resolved::Union(u) => u
            .members
            .iter()
            .filter(|member| member.is_complex())
            .filter_map(|member| index.get_type(member.type_name()))
            .collect(),
        Resolved::Enum(_) | Resolved::Unresolved => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use irdoc_core::{Enum, Property, Service, Union};

    fn complex(name: &str, target: &str) -> Property {
        Property::new(name, MemberValue::complex(target))
    }

    fn walk(service: &Service, root: &str, stop: Option<&str>) -> Vec<String> {
        let index = ServiceIndex::new(service);
        let root = index.get_type(root).unwrap();
        reachable(&index, root, stop)
            .names()
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn breadth_first_order() {
        let service = Service::new(vec![
            Type::new("Service")
                .with_property(complex("a", "A"))
                .with_property(complex("b", "B")),
            Type::new("A").with_property(complex("c", "C")),
            Type::new("B"),
            Type::new("C"),
        ]);

        assert_eq!(walk(&service, "Service", None), ["Service", "A", "B", "C"]);
    }

    #[test]
    fn cycles_terminate_and_visit_once() {
        let service = Service::new(vec![
            Type::new("Service").with_property(complex("a", "A")),
            Type::new("A")
                .with_property(complex("b", "B"))
                .with_property(complex("self", "A")),
            Type::new("B")
                .with_property(complex("a", "A"))
                .with_property(complex("root", "Service")),
        ]);

        assert_eq!(walk(&service, "Service", None), ["Service", "A", "B"]);
        assert_eq!(walk(&service, "B", None), ["B", "A", "Service"]);
    }

    #[test]
    fn unions_expand_to_member_types() {
        let service = Service::new(vec![
            Type::new("Service").with_property(complex("value", "Value")),
            Type::new("StringLiteral"),
            Type::new("NumberLiteral"),
        ])
        .with_union(Union::new(
            "Value",
            vec![
                MemberValue::complex("StringLiteral"),
                MemberValue::primitive("string"),
                MemberValue::complex("NumberLiteral"),
                MemberValue::complex("Missing"),
            ],
        ));

        assert_eq!(
            walk(&service, "Service", None),
            ["Service", "StringLiteral", "NumberLiteral"]
        );
    }

    #[test]
    fn primitives_enums_and_unknown_names_end_branches() {
        let service = Service::new(vec![Type::new("Service")
            .with_property(Property::new("title", MemberValue::primitive("string")))
            .with_property(complex("kind", "Kind"))
            .with_property(complex("ghost", "Ghost"))])
        .with_enum(Enum::new("Kind", &["a", "b"]));

        assert_eq!(walk(&service, "Service", None), ["Service"]);
    }

    #[test]
    fn stop_type_is_excluded_under_normalization() {
        let service = Service::new(vec![
            Type::new("ParseOutput")
                .with_property(complex("service", "Service"))
                .with_property(complex("errors", "ErrorResponse")),
            Type::new("Service").with_property(complex("t", "Hidden")),
            Type::new("Hidden"),
            Type::new("ErrorResponse"),
        ]);

        assert_eq!(
            walk(&service, "ParseOutput", Some("service")),
            ["ParseOutput", "ErrorResponse"]
        );
        assert_eq!(
            walk(&service, "ParseOutput", Some("error-response")),
            ["ParseOutput", "Service", "Hidden"]
        );
        assert!(walk(&service, "Service", Some("SERVICE")).is_empty());
    }
}
