//! Indented-HTML pretty-printer for the Embiggen compiler.
//!
//! Rendering values human-readable output over pedantic HTML correctness:
//! block tags always put children on their own indented lines, while other
//! tags collapse a single child onto the opening-tag line, so short
//! content like `<span>text</span>` stays compact.
//!
//! Rendering is a pure function of tree and options; the tree is never
//! mutated.

use embiggen_dom::{Content, ElementData, NodeId, NodeKind, Tree, tags};
use serde::Serialize;

/// Options controlling the rendered text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderOptions {
    /// String prepended once per indentation level. Default `"\t"`.
    pub indent_unit: String,
    /// Line terminator used throughout. Default `"\n"`.
    pub newline: String,
    /// Append `<!-- /#id -->` after `div` elements that carry an `id`.
    /// Default `false`.
    pub close_tag_guides: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent_unit: "\t".to_string(),
            newline: "\n".to_string(),
            close_tag_guides: false,
        }
    }
}

/// Render the whole tree: each top-level element's rendering concatenated,
/// each newline-terminated.
#[must_use]
pub fn render(tree: &Tree, options: &RenderOptions) -> String {
    let mut out = String::new();
    for &child in tree.top_level() {
        out.push_str(&render_node(
            tree,
            child,
            "",
            &options.indent_unit,
            &options.newline,
            options.close_tag_guides,
        ));
        out.push_str(&options.newline);
    }
    out
}

/// Render one node at the given indent.
///
/// The indent, indent unit, and newline are threaded as plain strings so
/// the inline path can recurse with all three empty, collapsing nested
/// single-child elements onto one line.
fn render_node(
    tree: &Tree,
    id: NodeId,
    indent: &str,
    indent_unit: &str,
    newline: &str,
    guides: bool,
) -> String {
    let Some(node) = tree.get(id) else {
        return String::new();
    };
    match &node.kind {
        NodeKind::Text(data) => format!("{indent}{data}{newline}"),
        NodeKind::Element { data, content } => {
            render_element(tree, data, content, indent, indent_unit, newline, guides)
        }
    }
}

fn render_element(
    tree: &Tree,
    data: &ElementData,
    content: &Content,
    indent: &str,
    indent_unit: &str,
    newline: &str,
    guides: bool,
) -> String {
    let mut value = format!("{indent}<{}", data.tag_name);

    // Attribute order is alphabetical regardless of insertion order.
    // TODO: escape attribute values and text content.
    let mut names: Vec<&String> = data.attrs.keys().collect();
    names.sort();
    for name in names {
        value.push_str(&format!(" {name}=\"{}\"", data.attrs[name]));
    }

    // Explicitly childless (void tags, empty braces): self-closing, and
    // the only case that skips the open/close tag pair.
    if let Content::Children(children) = content
        && children.is_empty()
    {
        value.push_str("/>");
        return value;
    }

    value.push('>');

    if content.child_count() == 1 && !tags::is_block(&data.tag_name) {
        // Inline: the single child goes on the opening-tag line, rendered
        // with empty indent and newline.
        match content {
            Content::Empty => {}
            Content::Text(text) => value.push_str(text),
            Content::Children(children) => {
                value.push_str(&render_node(tree, children[0], "", "", "", guides));
            }
        }
    } else {
        value.push_str(newline);
        let child_indent = format!("{indent}{indent_unit}");
        match content {
            // The placeholder renders as a single blank indented line,
            // holding the element open for hand-written content.
            Content::Empty => {
                value.push_str(&child_indent);
                value.push_str(newline);
            }
            Content::Text(text) => {
                value.push_str(&child_indent);
                value.push_str(text);
                value.push_str(newline);
            }
            Content::Children(children) => {
                for &child in children {
                    value.push_str(&render_node(
                        tree,
                        child,
                        &child_indent,
                        indent_unit,
                        newline,
                        guides,
                    ));
                    if !value.ends_with(newline) {
                        value.push_str(newline);
                    }
                }
            }
        }
        value.push_str(indent);
    }

    value.push_str(&format!("</{}>", data.tag_name));

    if guides && data.tag_name == "div"
        && let Some(id) = data.id()
    {
        value.push_str(&format!("<!-- /#{id} -->"));
    }

    value
}
