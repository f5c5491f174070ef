//! NAPI-exposed data structures.

use irdoc_spec::{GeneratorOptions, Variant};
use napi_derive::napi;
use std::path::PathBuf;

/// Which reference document to produce.
#[napi(string_enum)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputVariant {
    /// Core IR types only (`ir.md`).
    Standard,
    /// Core IR types plus plugin contracts (`ir.mdx`).
    Extended,
}

impl From<OutputVariant> for Variant {
    fn from(value: OutputVariant) -> Self {
        match value {
            OutputVariant::Standard => Variant::Standard,
            OutputVariant::Extended => Variant::Extended,
        }
    }
}

/// Options passed to the generator constructor.
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    /// Output variant. Defaults to `standard`.
    pub variant: Option<OutputVariant>,
    /// Template file used instead of the bundled one.
    pub template_path: Option<String>,
    /// `package.json`-style file providing `{{version}}`.
    pub metadata_path: Option<String>,
    /// Number of the core section. Defaults to 3.
    pub section: Option<u32>,
    /// Appends `{#slug}` to type headings. Defaults to false.
    pub heading_anchors: Option<bool>,
    /// Plugin contract entry points, in priority order.
    pub plugin_entry_points: Option<Vec<String>>,
}

impl From<GeneratorConfig> for GeneratorOptions {
    fn from(config: GeneratorConfig) -> Self {
        let defaults = GeneratorOptions::default();
        GeneratorOptions {
            variant: config.variant.map(Variant::from).unwrap_or(defaults.variant),
            template_path: config.template_path.map(PathBuf::from),
            metadata_path: config.metadata_path.map(PathBuf::from),
            section: config.section.unwrap_or(defaults.section),
            heading_anchors: config.heading_anchors.unwrap_or(defaults.heading_anchors),
            plugin_entry_points: config
                .plugin_entry_points
                .unwrap_or(defaults.plugin_entry_points),
        }
    }
}

/// A generated documentation file.
#[napi(object)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the documentation root.
    pub path: String,
    /// Document text.
    pub contents: String,
}

impl From<irdoc_spec::GeneratedFile> for GeneratedFile {
    fn from(file: irdoc_spec::GeneratedFile) -> Self {
        Self {
            path: file.path,
            contents: file.contents,
        }
    }
}
