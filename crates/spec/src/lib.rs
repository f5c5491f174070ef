#![deny(missing_docs)]
//! Reference page engine: traversal, classification, field tables and document assembly.

/// Partitioning visited types into documentation buckets.
pub mod classify;
/// Document assembly.
pub mod generator;
/// Generator configuration.
pub mod options;
/// Section numbering, headings and anchors.
pub mod outline;
/// Validation rules rendered as prose.
pub mod rules;
/// Field tables and descriptions.
pub mod table;
/// Document prelude and version substitution.
pub mod template;
/// Breadth-first walk over the type graph.
pub mod traverse;

pub use classify::{Bucket, Buckets, classify, classify_plugins};
pub use generator::{GeneratedFile, Generator};
pub use options::{DEFAULT_PLUGIN_ENTRY_POINTS, GeneratorOptions, Variant};
pub use outline::{Outline, bucket_title};
pub use rules::{rule_sentence, rules_block};
pub use table::{FieldTable, TABLE_HEADER, constant_docs};
pub use template::{Template, UNKNOWN_VERSION, VERSION_TOKEN, resolve_version};
pub use traverse::{TypeSet, reachable};

/// Renders `service` with default options and the bundled template.
pub fn generate(service: &irdoc_core::Service) -> Result<GeneratedFile, irdoc_core::DocError> {
    Generator::new(GeneratorOptions::default())?.generate(service)
}
