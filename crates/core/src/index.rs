//! Name index over a [`Service`].

use crate::DocError;
use crate::ir::{Enum, Service, Type, Union};
use std::collections::HashMap;

/// Name of the root type every service must define.
pub const SERVICE_TYPE: &str = "Service";

/// What a name resolves to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved<'a> {
    /// A record type.
    Type(&'a Type),
    /// A union.
    Union(&'a Union),
    /// An enum.
    Enum(&'a Enum),
    /// Nothing by that name.
    Unresolved,
}

/// Pre-built lookup from entity name to entity.
///
/// Types shadow unions, and unions shadow enums, when names collide.
#[derive(Debug)]
pub struct ServiceIndex<'a> {
    types: HashMap<&'a str, &'a Type>,
    unions: HashMap<&'a str, &'a Union>,
    enums: HashMap<&'a str, &'a Enum>,
}

impl<'a> ServiceIndex<'a> {
    /// Indexes every named entity. The first definition of a name wins.
    pub fn new(service: &'a Service) -> Self {
        let mut types = HashMap::with_capacity(service.types.len());
        for t in &service.types {
            types.entry(t.name()).or_insert(t);
        }
        let mut unions = HashMap::with_capacity(service.unions.len());
        for u in &service.unions {
            unions.entry(u.name()).or_insert(u);
        }
        let mut enums = HashMap::with_capacity(service.enums.len());
        for e in &service.enums {
            enums.entry(e.name()).or_insert(e);
        }
        Self {
            types,
            unions,
            enums,
        }
    }

    /// Resolves a name.
    pub fn resolve(&self, name: &str) -> Resolved<'a> {
        if let Some(t) = self.types.get(name) {
            Resolved::Type(t)
        } else if let Some(u) = self.unions.get(name) {
            Resolved::Union(u)
        } else if let Some(e) = self.enums.get(name) {
            Resolved::Enum(e)
        } else {
            Resolved::Unresolved
        }
    }

    /// Looks up a record type.
    pub fn get_type(&self, name: &str) -> Option<&'a Type> {
        self.types.get(name).copied()
    }

    /// The root `Service` type.
    pub fn root(&self) -> Result<&'a Type, DocError> {
        self.get_type(SERVICE_TYPE)
            .ok_or(DocError::MissingServiceType)
    }
}
