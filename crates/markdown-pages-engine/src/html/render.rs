use std::fmt;

use super::node::{Attributes, HtmlNode};

/// Serializes a node and all of its descendants to an HTML string.
///
/// Attributes are written in insertion order. Values are not escaped.
pub fn render(node: &HtmlNode) -> String {
    let mut out = String::new();
    render_into(node, &mut out);
    out
}

fn render_into(node: &HtmlNode, out: &mut String) {
    match node {
        HtmlNode::Leaf {
            tag: None, value, ..
        } => out.push_str(value),
        HtmlNode::Leaf {
            tag: Some(tag),
            value,
            attributes,
        } => {
            open_tag(tag, attributes, out);
            out.push_str(value);
            close_tag(tag, out);
        }
        HtmlNode::Parent {
            tag,
            children,
            attributes,
        } => {
            open_tag(tag, attributes, out);
            for child in children {
                render_into(child, out);
            }
            close_tag(tag, out);
        }
    }
}

fn open_tag(tag: &str, attributes: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    out.push_str(&attributes_to_html(attributes));
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Renders attributes as ` name="value" name2="value2"`, or `""` when empty.
pub fn attributes_to_html(attributes: &Attributes) -> String {
    attributes
        .iter()
        .map(|(name, value)| format!(" {name}=\"{value}\""))
        .collect()
}

impl fmt::Display for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
