//! Document assembly.

use crate::classify::{Buckets, classify, classify_plugins};
use crate::options::GeneratorOptions;
use crate::outline::{Outline, bucket_title};
use crate::table::FieldTable;
use crate::template::{Template, resolve_version};
use crate::traverse::reachable;
use irdoc_core::{DocError, InlineMarkdown, Service, ServiceIndex, Type};
use serde::Serialize;

/// One output file, relative to the documentation root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    /// Relative path.
    pub path: String,
    /// Full document text.
    pub contents: String,
}

/// Reusable reference document generator.
///
/// The template is read and its version resolved once, in [`Generator::new`];
/// every later [`Generator::generate`] call is pure.
#[derive(Debug, Clone)]
pub struct Generator {
    options: GeneratorOptions,
    prelude: String,
    markdown: InlineMarkdown,
}

impl Generator {
    /// Loads the configured template and resolves its version.
    pub fn new(options: GeneratorOptions) -> Result<Self, DocError> {
        let template = match &options.template_path {
            Some(path) => Template::load(path)?,
            None => Template::bundled(),
        };
        Ok(Self::with_template(options, &template))
    }

    /// Uses `template` instead of the configured one.
    pub fn with_template(options: GeneratorOptions, template: &Template) -> Self {
        let prelude = if template.needs_version() {
            template.render(&resolve_version(options.metadata_path.as_deref()))
        } else {
            template.source().to_string()
        };

        Self {
            options,
            prelude,
            markdown: InlineMarkdown::new(),
        }
    }

    /// Active options.
    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Renders the reference document for `service`.
    pub fn generate(&self, service: &Service) -> Result<GeneratedFile, DocError> {
        let index = ServiceIndex::new(service);
        let root = index.root()?;

        let core = classify(&reachable(&index, root, None));
        let plugins = if self.options.variant.is_mdx() {
            classify_plugins(&index, &core, &self.options.plugin_entry_points)
        } else {
            Buckets::contracts()
        };
        log::debug!(
            "Documenting {} core and {} plugin contract type(s)",
            core.len(),
            plugins.len()
        );

        let outline = Outline::new(self.options.section, core, plugins);
        let table = FieldTable::new(&index, &outline, &self.markdown, self.options.variant.is_mdx());

        let mut lines: Vec<String> = vec![self.prelude.clone(), String::new()];
        self.push_section(&mut lines, &outline, &table, outline.core(), outline.section());

        if self.options.variant.is_mdx() {
            lines.push(format!("## {} Plugin Contracts", outline.plugin_section()));
            self.push_section(
                &mut lines,
                &outline,
                &table,
                outline.plugins(),
                outline.plugin_section(),
            );
        }

        Ok(GeneratedFile {
            path: self.options.variant.file_name().to_string(),
            contents: lines.join("\n"),
        })
    }

    /// [`Generator::generate`] as the list of files a generator plugin returns.
    pub fn generate_files(&self, service: &Service) -> Result<Vec<GeneratedFile>, DocError> {
        Ok(vec![self.generate(service)?])
    }

    fn push_section(
        &self,
        lines: &mut Vec<String>,
        outline: &Outline<'_>,
        table: &FieldTable<'_, '_>,
        buckets: &Buckets<'_>,
        section: u32,
    ) {
        for (i, bucket) in buckets.iter().enumerate() {
            lines.push(format!(
                "### {}.{} {}",
                section,
                i + 1,
                bucket_title(bucket.category())
            ));
            for t in bucket.types() {
                self.push_type(lines, outline, table, t);
            }
        }
    }

    fn push_type(
        &self,
        lines: &mut Vec<String>,
        outline: &Outline<'_>,
        table: &FieldTable<'_, '_>,
        t: &Type,
    ) {
        let heading = outline
            .heading(t.name())
            .unwrap_or_else(|| t.name().to_string());
        match outline.slug(t.name()) {
            Some(slug) if self.options.heading_anchors => {
                lines.push(format!("#### {} {{#{}}}", heading, slug));
            }
            _ => lines.push(format!("#### {}", heading)),
        }
        lines.push(table.type_description(&t.description));
        lines.push("##### Fields Specification".to_string());
        lines.extend(table.rows(t));
    }
}
