#![deny(missing_docs)]
//! irdoc core: the Service IR model, its name index, and the markdown adapter.

/// Core error types.
pub mod error;
/// Name-to-entity index over a service.
pub mod index;
/// The Service IR data model.
pub mod ir;
/// Markdown adapter for descriptions.
pub mod markdown;
/// Display names, name normalization and heading slugs.
pub mod slug;

pub use error::{DocError, SourceLocation};
pub use index::{Resolved, SERVICE_TYPE, ServiceIndex};
pub use ir::{
    Enum, EnumMember, Literal, MemberValue, PrimitiveConstant, Property, Rule, Service, Type,
    TypeCategory, Union,
};
pub use crate::markdown::{InlineMarkdown, ParseOptions, parse_mdast};
pub use slug::{display_name, heading_slug, normalize_name};
