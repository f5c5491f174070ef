//! Markdown adapter for descriptions embedded in tables and block tags.
//!
//! Descriptions are parsed with markdown-rs and rendered from the MDAST.
//! Top-level paragraphs render as their inline content only: every caller
//! re-embeds the output in a table cell or an existing `<p>`, where a
//! second paragraph tag would be invalid markup.

use crate::{DocError, SourceLocation};
use html_escape::{encode_double_quoted_attribute, encode_text};
use markdown::mdast::{self, Node};
use markdown::message::{Message, Place};
use std::collections::HashMap;

/// Parser options for building markdown-rs parse options.
#[derive(Clone, Copy, Debug)]
pub struct ParseOptions {
    /// Enable GitHub Flavored Markdown constructs.
    pub gfm: bool,
    /// Enable indented code blocks.
    pub code_indented: bool,
    /// Allow raw HTML nodes in the AST.
    pub raw_html: bool,
}

impl ParseOptions {
    /// Defaults for IR descriptions: GFM with raw HTML passed through.
    pub const fn description() -> Self {
        Self {
            gfm: true,
            code_indented: true,
            raw_html: true,
        }
    }

    /// Convert to markdown-rs `ParseOptions`.
    pub fn to_markdown(self) -> markdown::ParseOptions {
        let mut constructs = markdown::Constructs {
            code_indented: self.code_indented,
            html_flow: self.raw_html,
            html_text: self.raw_html,
            ..Default::default()
        };

        if self.gfm {
            constructs.gfm_autolink_literal = true;
            constructs.gfm_strikethrough = true;
            constructs.gfm_table = true;
            constructs.gfm_task_list_item = true;
        }

        markdown::ParseOptions {
            constructs,
            ..markdown::ParseOptions::default()
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::description()
    }
}

/// Parse markdown into an MDAST tree.
pub fn parse_mdast(input: &str, options: &ParseOptions) -> Result<Node, DocError> {
    markdown::to_mdast(input, &options.to_markdown()).map_err(|err| DocError::Markdown {
        message: err.to_string(),
        location: message_location(&err),
    })
}

fn message_location(message: &Message) -> SourceLocation {
    match &message.place {
        Some(place) => match place.as_ref() {
            Place::Point(point) => SourceLocation::new(point.line, point.column),
            Place::Position(position) => {
                SourceLocation::new(position.start.line, position.start.column)
            }
        },
        None => SourceLocation::new(1, 1),
    }
}

/// Renders description markdown to HTML without top-level `<p>` wrappers.
#[derive(Clone, Copy, Debug, Default)]
pub struct InlineMarkdown {
    options: ParseOptions,
}

impl InlineMarkdown {
    /// Creates a renderer with description defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders `input`. Block-level nodes are separated by `\n`.
    ///
    /// Reference-style links and images resolve against the definitions in
    /// the same input. Text markdown-rs cannot parse is returned HTML-escaped.
    pub fn render(&self, input: &str) -> String {
        match parse_mdast(input, &self.options) {
            Ok(node) => {
                let renderer = Renderer::new(&node);
                match &node {
                    Node::Root(root) => renderer.blocks(&root.children, Scope::Top),
                    other => renderer.block(other, Scope::Top),
                }
            }
            Err(err) => {
                log::warn!("Falling back to escaped text for description: {}", err);
                encode_text(input).into_owned()
            }
        }
    }
}

/// Where a block sits, which decides whether paragraphs keep their tag.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Scope {
    Top,
    Nested,
    TightItem,
}

/// HTML writer over one parsed tree.
struct Renderer<'a> {
    definitions: HashMap<String, &'a mdast::Definition>,
}

impl<'a> Renderer<'a> {
    fn new(tree: &'a Node) -> Self {
        let mut definitions = HashMap::new();
        collect_definitions(tree, &mut definitions);
        Self { definitions }
    }

    fn definition(&self, identifier: &str) -> Option<&'a mdast::Definition> {
        self.definitions.get(&normalize_identifier(identifier)).copied()
    }

    fn blocks(&self, nodes: &[Node], scope: Scope) -> String {
        nodes
            .iter()
            .map(|node| self.block(node, scope))
            .filter(|html| !html.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn block(&self, node: &Node, scope: Scope) -> String {
        match node {
            Node::Paragraph(para) => {
                let inner = self.inlines(&para.children);
                match scope {
                    Scope::Top | Scope::TightItem => inner,
                    Scope::Nested => format!("<p>{}</p>", inner),
                }
            }
            Node::Heading(heading) => format!(
                "<h{depth}>{}</h{depth}>",
                self.inlines(&heading.children),
                depth = heading.depth
            ),
            Node::ThematicBreak(_) => "<hr />".to_string(),
            Node::Blockquote(quote) => format!(
                "<blockquote>\n{}\n</blockquote>",
                self.blocks(&quote.children, Scope::Nested)
            ),
            Node::List(list) => self.list(list),
            Node::Code(code) => render_code(code),
            Node::Html(html) => html.value.clone(),
            Node::Table(table) => self.table(table),
            // Consumed by reference links.
            Node::Definition(_) => String::new(),
            Node::FootnoteDefinition(_) => {
                log::debug!("Skipping unsupported markdown block: {:?}", node);
                String::new()
            }
            inline => self.inlines(std::slice::from_ref(inline)),
        }
    }

    fn list(&self, list: &mdast::List) -> String {
        let open = match (list.ordered, list.start) {
            (true, Some(start)) if start != 1 => format!("<ol start=\"{}\">", start),
            (true, _) => "<ol>".to_string(),
            (false, _) => "<ul>".to_string(),
        };
        let close = if list.ordered { "</ol>" } else { "</ul>" };

        let mut items = Vec::with_capacity(list.children.len());
        for child in &list.children {
            if let Node::ListItem(item) = child {
                items.push(self.list_item(item, list.spread));
            }
        }
        format!("{}\n{}\n{}", open, items.join("\n"), close)
    }

    fn list_item(&self, item: &mdast::ListItem, list_spread: bool) -> String {
        let scope = if list_spread || item.spread {
            Scope::Nested
        } else {
            Scope::TightItem
        };
        let checkbox = match item.checked {
            Some(true) => "<input type=\"checkbox\" checked disabled /> ",
            Some(false) => "<input type=\"checkbox\" disabled /> ",
            None => "",
        };
        format!("<li>{}{}</li>", checkbox, self.blocks(&item.children, scope))
    }

    fn table(&self, table: &mdast::Table) -> String {
        let mut html = String::from("<table>");
        for (i, row) in table.children.iter().enumerate() {
            let Node::TableRow(row) = row else { continue };
            let tag = if i == 0 { "th" } else { "td" };
            html.push_str("<tr>");
            for cell in &row.children {
                if let Node::TableCell(cell) = cell {
                    html.push_str(&format!(
                        "<{tag}>{}</{tag}>",
                        self.inlines(&cell.children),
                        tag = tag
                    ));
                }
            }
            html.push_str("</tr>");
        }
        html.push_str("</table>");
        html
    }

    fn inlines(&self, nodes: &[Node]) -> String {
        let mut out = String::new();
        for node in nodes {
            self.inline(node, &mut out);
        }
        out
    }

    fn inline(&self, node: &Node, out: &mut String) {
        match node {
            Node::Text(text) => out.push_str(&encode_text(&text.value)),
            Node::Strong(strong) => self.wrap(out, "strong", &strong.children),
            Node::Emphasis(emphasis) => self.wrap(out, "em", &emphasis.children),
            Node::Delete(delete) => self.wrap(out, "del", &delete.children),
            Node::InlineCode(code) => {
                out.push_str("<code>");
                out.push_str(&encode_text(&code.value));
                out.push_str("</code>");
            }
            Node::Break(_) => out.push_str("<br />"),
            Node::Html(html) => out.push_str(&html.value),
            Node::Link(link) => {
                self.anchor(out, &link.url, link.title.as_deref(), &link.children)
            }
            Node::Image(image) => push_image(out, &image.url, &image.alt, image.title.as_deref()),
            Node::LinkReference(reference) => match self.definition(&reference.identifier) {
                Some(def) => self.anchor(out, &def.url, def.title.as_deref(), &reference.children),
                None => out.push_str(&self.inlines(&reference.children)),
            },
            Node::ImageReference(reference) => match self.definition(&reference.identifier) {
                Some(def) => push_image(out, &def.url, &reference.alt, def.title.as_deref()),
                None => out.push_str(&encode_text(&reference.alt)),
            },
            _ => log::debug!("Skipping unsupported markdown node: {:?}", node),
        }
    }

    fn anchor(&self, out: &mut String, url: &str, title: Option<&str>, children: &[Node]) {
        out.push_str("<a href=\"");
        out.push_str(&encode_double_quoted_attribute(url));
        out.push('"');
        push_title(out, title);
        out.push('>');
        out.push_str(&self.inlines(children));
        out.push_str("</a>");
    }

    fn wrap(&self, out: &mut String, tag: &str, children: &[Node]) {
        out.push('<');
        out.push_str(tag);
        out.push('>');
        out.push_str(&self.inlines(children));
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
}

/// First definition wins, as in CommonMark.
fn collect_definitions<'a>(node: &'a Node, out: &mut HashMap<String, &'a mdast::Definition>) {
    if let Node::Definition(def) = node {
        out.entry(normalize_identifier(&def.identifier)).or_insert(def);
    }
    if let Some(children) = node.children() {
        for child in children {
            collect_definitions(child, out);
        }
    }
}

fn normalize_identifier(identifier: &str) -> String {
    identifier
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn render_code(code: &mdast::Code) -> String {
    let open = match code.lang.as_deref() {
        Some(lang) => format!(
            "<pre><code class=\"language-{}\">",
            encode_double_quoted_attribute(lang)
        ),
        None => "<pre><code>".to_string(),
    };
    format!("{}{}</code></pre>", open, encode_text(&code.value))
}

fn push_image(out: &mut String, url: &str, alt: &str, title: Option<&str>) {
    out.push_str("<img src=\"");
    out.push_str(&encode_double_quoted_attribute(url));
    out.push_str("\" alt=\"");
    out.push_str(&encode_double_quoted_attribute(alt));
    out.push('"');
    push_title(out, title);
    out.push_str(" />");
}

fn push_title(out: &mut String, title: Option<&str>) {
    if let Some(title) = title {
        out.push_str(" title=\"");
        out.push_str(&encode_double_quoted_attribute(title));
        out.push('"');
    }
}
