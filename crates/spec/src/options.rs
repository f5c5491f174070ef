//! Generator configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which document the generator produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Variant {
    /// Core buckets only, written as `ir.md`.
    #[default]
    Standard,
    /// Core buckets plus plugin contracts, written as `ir.mdx`.
    Extended,
}

impl Variant {
    /// Relative path of the generated file.
    pub fn file_name(self) -> &'static str {
        match self {
            Variant::Standard => "ir.md",
            Variant::Extended => "ir.mdx",
        }
    }

    /// Whether the output is MDX.
    pub fn is_mdx(self) -> bool {
        matches!(self, Variant::Extended)
    }
}

/// Plugin contract types the extended variant starts from, in priority order.
pub const DEFAULT_PLUGIN_ENTRY_POINTS: &[&str] = &[
    "ParseInput",
    "ParseOutput",
    "ValidateInput",
    "ValidateOutput",
    "GenerateInput",
    "GenerateOutput",
    "ErrorResponse",
];

/// Options for [`crate::Generator`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorOptions {
    /// Output variant.
    #[serde(default)]
    pub variant: Variant,
    /// Template file; the bundled template is used when absent.
    #[serde(default)]
    pub template_path: Option<PathBuf>,
    /// JSON file whose `version` replaces `{{version}}` in the template.
    #[serde(default)]
    pub metadata_path: Option<PathBuf>,
    /// Number of the section that holds the core buckets.
    #[serde(default = "default_section")]
    pub section: u32,
    /// Whether type headings carry an explicit `{#slug}` anchor.
    #[serde(default)]
    pub heading_anchors: bool,
    /// Entry point type names for plugin contract classification.
    #[serde(default = "default_plugin_entry_points")]
    pub plugin_entry_points: Vec<String>,
}

fn default_section() -> u32 {
    3
}

fn default_plugin_entry_points() -> Vec<String> {
    DEFAULT_PLUGIN_ENTRY_POINTS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            template_path: None,
            metadata_path: None,
            section: default_section(),
            heading_anchors: false,
            plugin_entry_points: default_plugin_entry_points(),
        }
    }
}

impl GeneratorOptions {
    /// Default options for the extended variant.
    pub fn extended() -> Self {
        Self {
            variant: Variant::Extended,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        let options: GeneratorOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options.variant, Variant::Standard);
        assert_eq!(options.section, 3);
        assert!(!options.heading_anchors);
        assert_eq!(options.plugin_entry_points.len(), DEFAULT_PLUGIN_ENTRY_POINTS.len());
    }

    #[test]
    fn camel_case_keys() {
        let options: GeneratorOptions = serde_json::from_str(
            r#"{"variant":"extended","metadataPath":"package.json","headingAnchors":true,"pluginEntryPoints":["ParseInput"]}"#,
        )
        .unwrap();
        assert_eq!(options.variant.file_name(), "ir.mdx");
        assert!(options.variant.is_mdx());
        assert_eq!(options.metadata_path, Some(PathBuf::from("package.json")));
        assert!(options.heading_anchors);
        assert_eq!(options.plugin_entry_points, vec!["ParseInput".to_string()]);
    }
}
