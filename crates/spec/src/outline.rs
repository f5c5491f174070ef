//! Section numbering, headings and anchors.

use crate::classify::Buckets;
use irdoc_core::{TypeCategory, display_name, heading_slug};
use std::collections::HashMap;

/// Where a type sits in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Position {
    section: u32,
    bucket: usize,
    index: usize,
}

/// Heading allocator over the classified buckets.
///
/// Core buckets are numbered under `section`, plugin contract buckets under
/// `section + 1`. A type's number is its 1-based position in its bucket.
#[derive(Debug)]
pub struct Outline<'a> {
    section: u32,
    core: Buckets<'a>,
    plugins: Buckets<'a>,
    positions: HashMap<&'a str, Position>,
}

impl<'a> Outline<'a> {
    /// Numbers every bucketed type.
    pub fn new(section: u32, core: Buckets<'a>, plugins: Buckets<'a>) -> Self {
        let mut positions = HashMap::with_capacity(core.len() + plugins.len());
        for (section, buckets) in [(section, &core), (section + 1, &plugins)] {
            for (b, bucket) in buckets.iter().enumerate() {
                for (i, t) in bucket.types().iter().enumerate() {
                    positions.entry(t.name()).or_insert(Position {
                        section,
                        bucket: b + 1,
                        index: i + 1,
                    });
                }
            }
        }

        Self {
            section,
            core,
            plugins,
            positions,
        }
    }

    /// Section number of the core buckets.
    pub fn section(&self) -> u32 {
        self.section
    }

    /// Section number of the plugin contract buckets.
    pub fn plugin_section(&self) -> u32 {
        self.section + 1
    }

    /// Core buckets.
    pub fn core(&self) -> &Buckets<'a> {
        &self.core
    }

    /// Plugin contract buckets.
    pub fn plugins(&self) -> &Buckets<'a> {
        &self.plugins
    }

    /// `<section>.<bucket>.<index> <DisplayName>`, or `None` for unbucketed types.
    pub fn heading(&self, name: &str) -> Option<String> {
        self.positions.get(name).map(|p| {
            format!(
                "{}.{}.{} {}",
                p.section,
                p.bucket,
                p.index,
                display_name(name)
            )
        })
    }

    /// Anchor slug derived from [`Outline::heading`].
    pub fn slug(&self, name: &str) -> Option<String> {
        self.heading(name).map(|heading| heading_slug(&heading))
    }
}

/// Title of a bucket's section heading.
pub fn bucket_title(category: TypeCategory) -> &'static str {
    match category {
        TypeCategory::StructuralType => "Structure",
        TypeCategory::FieldRule => "Rules",
        TypeCategory::ObjectRule => "Object Rules",
        TypeCategory::Literal => "Literals",
        TypeCategory::ParserContract => "Parsers",
        TypeCategory::RuleContract => "Rules",
        TypeCategory::GeneratorContract => "Generators",
        TypeCategory::UtilityContract => "Utilities",
    }
}
