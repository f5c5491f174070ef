//! Field tables and descriptions for one type.

use crate::outline::Outline;
use crate::rules::rules_block;
use irdoc_core::{
    InlineMarkdown, Literal, MemberValue, Property, Resolved, ServiceIndex, Type, display_name,
};
use std::borrow::Cow;

/// Header rows of every field table.
pub const TABLE_HEADER: [&str; 2] = [
    "| Field Name | Type | Description |",
    "| -------- | ---- | ----------- |",
];

/// Separator between alternatives in a type cell.
const ALTERNATIVE_SEPARATOR: &str = " \\| ";

/// Marker for required fields.
const REQUIRED_MARKER: &str = "***REQUIRED.***";

/// Renders descriptions and field tables against a resolved outline.
pub struct FieldTable<'o, 'a> {
    index: &'o ServiceIndex<'a>,
    outline: &'o Outline<'a>,
    markdown: &'o InlineMarkdown,
    mdx: bool,
}

impl<'o, 'a> FieldTable<'o, 'a> {
    /// Creates a table renderer. `mdx` escapes braces in rendered descriptions.
    pub fn new(
        index: &'o ServiceIndex<'a>,
        outline: &'o Outline<'a>,
        markdown: &'o InlineMarkdown,
        mdx: bool,
    ) -> Self {
        Self {
            index,
            outline,
            markdown,
            mdx,
        }
    }

    /// Type description: one `<p>` per paragraph, joined by newlines.
    pub fn type_description(&self, description: &[Literal<String>]) -> String {
        description
            .iter()
            .map(|p| format!("<p>{}</p>", self.render_paragraph(&p.value)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Property description: paragraphs concatenated without wrappers.
    pub fn property_description(&self, description: &[Literal<String>]) -> String {
        description
            .iter()
            .map(|p| self.render_paragraph(&p.value))
            .collect()
    }

    fn render_paragraph(&self, text: &str) -> String {
        let html = self.markdown.render(text).replace('\n', "");
        let html = html.trim();
        if self.mdx {
            escape_jsx_braces(html)
        } else {
            html.to_string()
        }
    }

    /// Header plus one row per property.
    pub fn rows(&self, t: &Type) -> Vec<String> {
        let mut rows: Vec<String> = TABLE_HEADER.iter().map(|s| s.to_string()).collect();
        rows.extend(t.properties.iter().map(|p| self.row(p)));
        rows
    }

    /// `| name | type | required constant description rules |`
    pub fn row(&self, property: &Property) -> String {
        let required = if property.value.is_required() {
            REQUIRED_MARKER
        } else {
            ""
        };
        let notes = format!(
            "{}{} {}{}",
            required,
            constant_docs(&property.value),
            self.property_description(&property.description),
            rules_block(property.value.rules())
        );

        format!(
            "| {} | {} | {} |",
            escape_cell(property.name()),
            self.property_type(&property.value),
            escape_cell(&notes)
        )
    }

    /// Type cell; arrays are bracketed.
    pub fn property_type(&self, value: &MemberValue) -> String {
        let base = match value {
            MemberValue::PrimitiveValue(primitive) => match &primitive.constant {
                Some(constant) => escape_cell(&constant.to_code()).into_owned(),
                None => escape_cell(&primitive.type_name.value).into_owned(),
            },
            MemberValue::ComplexValue(complex) => self.type_link(&complex.type_name.value),
        };

        if value.is_array() {
            format!("[{}]", base)
        } else {
            base
        }
    }

    /// Link text for a complex reference.
    ///
    /// Types link to their heading, unions list their member links, enums
    /// list their sorted values. Anything else is the bare name.
    pub fn type_link(&self, name: &str) -> String {
        match self.index.resolve(name) {
            Resolved::Type(t) => self.link(t.name()),
            Resolved::Union(u) => u
                .members
                .iter()
                .map(|member| self.union_member(member))
                .collect::<Vec<_>>()
                .join(ALTERNATIVE_SEPARATOR),
            Resolved::Enum(e) => e
                .sorted_values()
                .into_iter()
                .map(|value| escape_cell(&format!("`\"{}\"`", value)).into_owned())
                .collect::<Vec<_>>()
                .join(ALTERNATIVE_SEPARATOR),
            Resolved::Unresolved => {
                log::debug!("Unresolved type reference `{}`", name);
                escape_cell(name).into_owned()
            }
        }
    }

    fn union_member(&self, member: &MemberValue) -> String {
        match member {
            MemberValue::PrimitiveValue(_) => self.property_type(member),
            MemberValue::ComplexValue(complex) => match self.index.resolve(&complex.type_name.value) {
                Resolved::Type(t) => self.link(t.name()),
                // A union of unions or enums would nest alternatives; name it instead.
                _ => escape_cell(&complex.type_name.value).into_owned(),
            },
        }
    }

    fn link(&self, name: &str) -> String {
        match self.outline.slug(name) {
            Some(slug) => format!("[{}](#{})", display_name(name), slug),
            None => display_name(name),
        }
    }
}

/// ` Always <constant>.` for pinned primitives, otherwise empty.
pub fn constant_docs(value: &MemberValue) -> String {
    match value.constant() {
        Some(constant) => format!(" Always {}.", constant.to_code()),
        None => String::new(),
    }
}

/// Escapes `|` so user text cannot split a table row.
///
/// A backslash run directly before a pipe is doubled so the pipe stays escaped.
fn escape_cell(s: &str) -> Cow<'_, str> {
    if !s.contains('|') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 8);
    let mut backslashes = 0;
    for c in s.chars() {
        match c {
            '\\' => backslashes += 1,
            '|' => {
                out.extend(std::iter::repeat_n('\\', backslashes * 2));
                out.push_str("\\|");
                backslashes = 0;
            }
            _ => {
                out.extend(std::iter::repeat_n('\\', backslashes));
                out.push(c);
                backslashes = 0;
            }
        }
    }
    out.extend(std::iter::repeat_n('\\', backslashes));
    Cow::Owned(out)
}

/// Escapes braces so MDX does not read them as expressions.
fn escape_jsx_braces(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{Buckets, classify};
    use crate::traverse::reachable;
    use irdoc_core::{
        Enum, ParseOptions, PrimitiveConstant, Rule, Service, Union, parse_mdast,
    };
    use markdown::mdast::Node;

    fn service() -> Service {
        Service::new(vec![
            Type::new("Service")
                .with_description(&["The *root* type.", "Second paragraph."])
                .with_property(
                    Property::new("types", MemberValue::complex("Type").array())
                        .with_description(&["All types."]),
                )
                .with_property(Property::new(
                    "value",
                    MemberValue::complex("Value").optional(),
                ))
                .with_property(Property::new("kind", MemberValue::complex("Kind"))),
            Type::new("Type"),
            Type::new("StringLiteral"),
            Type::new("NumberLiteral"),
        ])
        .with_union(Union::new(
            "Value",
            vec![
                MemberValue::complex("StringLiteral"),
                MemberValue::complex("NumberLiteral"),
                MemberValue::primitive("null"),
            ],
        ))
        .with_enum(Enum::new("Kind", &["b", "a", "c"]))
    }

    fn with_table<R>(service: &Service, mdx: bool, f: impl FnOnce(&FieldTable<'_, '_>) -> R) -> R {
        let index = ServiceIndex::new(service);
        let core = classify(&reachable(&index, index.root().unwrap(), None));
        let outline = Outline::new(3, core, Buckets::contracts());
        let markdown = InlineMarkdown::new();
        let table = FieldTable::new(&index, &outline, &markdown, mdx);
        f(&table)
    }

    #[test]
    fn type_references_link_to_headings() {
        let service = service();
        with_table(&service, false, |table| {
            assert_eq!(table.type_link("Type"), "[Type](#312-type)");
            assert_eq!(
                table.property_type(&MemberValue::complex("Type").array()),
                "[[Type](#312-type)]"
            );
        });
    }

    #[test]
    fn unions_list_member_links() {
        let service = service();
        with_table(&service, false, |table| {
            assert_eq!(
                table.type_link("Value"),
                "[StringLiteral](#341-string-literal) \\| [NumberLiteral](#342-number-literal) \\| null"
            );
        });
    }

    #[test]
    fn enums_are_sorted() {
        let service = service();
        with_table(&service, false, |table| {
            assert_eq!(
                table.type_link("Kind"),
                "`\"a\"` \\| `\"b\"` \\| `\"c\"`"
            );
        });
    }

    #[test]
    fn unresolved_names_render_bare() {
        let service = service();
        with_table(&service, false, |table| {
            assert_eq!(table.type_link("Ghost"), "Ghost");
        });
    }

    #[test]
    fn constant_annotation() {
        let value = MemberValue::primitive("string").with_constant(PrimitiveConstant::string("foo"));
        assert_eq!(constant_docs(&value), " Always `\"foo\"`.");
        assert_eq!(constant_docs(&MemberValue::primitive("string")), "");

        let service = service();
        with_table(&service, false, |table| {
            let row = table.row(&Property::new("kind", value));
            assert_eq!(
                row,
                "| kind | `\"foo\"` | ***REQUIRED.*** Always `\"foo\"`.  |"
            );
        });
    }

    #[test]
    fn rows_keep_their_shape() {
        let service = service();
        with_table(&service, false, |table| {
            let rows = table.rows(&service.types[0]);
            assert_eq!(rows.len(), 5);
            assert_eq!(rows[0], TABLE_HEADER[0]);
            assert_eq!(rows[1], TABLE_HEADER[1]);
            assert_eq!(
                rows[2],
                "| types | [[Type](#312-type)] | ***REQUIRED.*** All types. |"
            );
            assert!(rows[3].starts_with("| value | [StringLiteral]"));
            assert!(rows[3].ends_with(" \\| null |   |"), "{}", rows[3]);
            for row in &rows {
                assert!(row.starts_with("| ") && row.ends_with(" |"));
            }
        });
    }

    #[test]
    fn rules_and_pipes_in_rows() {
        let service = service();
        with_table(&service, false, |table| {
            let property = Property::new(
                "code",
                MemberValue::primitive("string")
                    .optional()
                    .with_rule(Rule::pattern("^(a|b)$")),
            );
            insta::assert_snapshot!(
                table.row(&property),
                @r"| code | string |  <br/>Rules:<br/><ul><li>MUST match the pattern `^(a\|b)$`.</li></ul> |"
            );
        });
    }

    #[test]
    fn escaped_pipes_keep_three_cells() {
        assert_eq!(escape_cell("^a\\|b$"), "^a\\\\\\|b$");
        assert_eq!(escape_cell("a\\b|c\\"), "a\\b\\|c\\");

        let service = service();
        with_table(&service, false, |table| {
            let property = Property::new(
                "code",
                MemberValue::primitive("string").with_rule(Rule::pattern("^a\\|b$")),
            );
            let document = [TABLE_HEADER[0], TABLE_HEADER[1], &table.row(&property)].join("\n");
            let tree = parse_mdast(&document, &ParseOptions::description()).unwrap();

            let Some(Node::Table(grid)) = tree.children().and_then(|c| c.first()) else {
                panic!("expected a table: {tree:?}");
            };
            let Node::TableRow(row) = &grid.children[1] else {
                panic!("expected a body row: {grid:?}");
            };
            assert_eq!(row.children.len(), 3);
        });
    }

    #[test]
    fn descriptions() {
        let service = service();
        with_table(&service, false, |table| {
            assert_eq!(
                table.type_description(&service.types[0].description),
                "<p>The <em>root</em> type.</p>\n<p>Second paragraph.</p>"
            );
            assert_eq!(table.type_description(&[]), "");
            let paragraphs: Vec<Literal<String>> = vec!["One. ".into(), "Two.".into()];
            assert_eq!(table.property_description(&paragraphs), "One.Two.");
        });
    }

    #[test]
    fn description_rendering_is_idempotent() {
        let service = service();
        with_table(&service, false, |table| {
            let description = &service.types[0].description;
            assert_eq!(
                table.type_description(description),
                table.type_description(description)
            );
        });
    }

    #[test]
    fn mdx_escapes_braces() {
        let service = service();
        let description: Vec<Literal<String>> = vec!["Use `{ a: 1 }`.".into()];
        with_table(&service, true, |table| {
            assert_eq!(
                table.property_description(&description),
                "Use <code>&#123; a: 1 &#125;</code>."
            );
        });
        with_table(&service, false, |table| {
            assert_eq!(
                table.property_description(&description),
                "Use <code>{ a: 1 }</code>."
            );
        });
    }
}
