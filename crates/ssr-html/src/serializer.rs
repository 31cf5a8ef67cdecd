//! HTML Serialization (innerHTML/outerHTML)
//!
//! Serializes arena nodes back to HTML strings following the HTML fragment
//! serialization rules: void elements have no end tag and raw text elements
//! are written unescaped.

use ssr_dom::{DomTree, NodeData, NodeId};

/// HTML serializer
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlSerializer;

/// Void elements (no end tag)
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "bgsound", "br", "col", "embed", "frame", "hr", "img", "input",
    "keygen", "link", "meta", "param", "source", "track", "wbr",
];

/// Raw text elements (no escaping for content)
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "script", "style", "xmp", "iframe", "noembed", "noframes", "noscript", "plaintext",
];

impl HtmlSerializer {
    pub fn new() -> Self {
        Self
    }

    /// Serialize innerHTML of a node (children only)
    pub fn serialize_inner(&self, tree: &DomTree, node_id: NodeId) -> String {
        let mut output = String::new();
        let mut stack = Vec::new();
        push_children(tree, node_id, false, &mut stack);
        self.run(tree, stack, &mut output);
        output
    }

    /// Serialize outerHTML of a node (including the node itself)
    pub fn serialize_outer(&self, tree: &DomTree, node_id: NodeId) -> String {
        let mut output = String::new();
        self.run(tree, vec![Frame::Enter { id: node_id, raw: false }], &mut output);
        output
    }

    /// Drain the frame stack; nesting depth never grows the call stack
    fn run<'t>(&self, tree: &'t DomTree, mut stack: Vec<Frame<'t>>, output: &mut String) {
        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Enter { id, raw } => self.enter(tree, id, raw, &mut stack, output),
                Frame::Close(tag) => {
                    output.push_str("</");
                    output.push_str(tag);
                    output.push('>');
                }
            }
        }
    }

    /// Write the start of a node and schedule its children and end tag
    fn enter<'t>(
        &self,
        tree: &'t DomTree,
        node_id: NodeId,
        raw: bool,
        stack: &mut Vec<Frame<'t>>,
        output: &mut String,
    ) {
        let Some(node) = tree.get(node_id) else {
            return;
        };

        match &node.data {
            NodeData::Document => {
                push_children(tree, node_id, false, stack);
            }
            NodeData::Element(elem) => {
                let tag = elem.name.as_str();

                // Start tag
                output.push('<');
                output.push_str(tag);

                // Attributes
                for attr in &elem.attrs {
                    output.push(' ');
                    output.push_str(&attr.name);
                    if !attr.value.is_empty() {
                        output.push_str("=\"");
                        escape_attribute(&attr.value, output);
                        output.push('"');
                    }
                }
                output.push('>');

                if VOID_ELEMENTS.contains(&tag) {
                    return;
                }

                stack.push(Frame::Close(tag));
                push_children(tree, node_id, RAW_TEXT_ELEMENTS.contains(&tag), stack);
            }
            NodeData::Text(text) if raw => {
                output.push_str(&text.content);
            }
            NodeData::Text(text) => {
                escape_text(&text.content, output);
            }
            NodeData::Comment(text) => {
                output.push_str("<!--");
                output.push_str(text);
                output.push_str("-->");
            }
            NodeData::Doctype { name, .. } => {
                output.push_str("<!DOCTYPE ");
                output.push_str(name);
                output.push('>');
            }
        }
    }
}

/// Pending serialization work
enum Frame<'t> {
    /// Write a node; `raw` when its parent is a raw text element
    Enter { id: NodeId, raw: bool },
    /// Write an end tag
    Close(&'t str),
}

/// Schedule the children of `parent` so the first child is written next
fn push_children<'t>(tree: &'t DomTree, parent: NodeId, raw: bool, stack: &mut Vec<Frame<'t>>) {
    let start = stack.len();
    stack.extend(tree.children(parent).map(|(id, _)| Frame::Enter { id, raw }));
    stack[start..].reverse();
}

/// Escape text content for HTML
fn escape_text(text: &str, output: &mut String) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '\u{a0}' => output.push_str("&nbsp;"),
            _ => output.push(c),
        }
    }
}

/// Escape attribute value
fn escape_attribute(text: &str, output: &mut String) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '"' => output.push_str("&quot;"),
            '\u{a0}' => output.push_str("&nbsp;"),
            _ => output.push(c),
        }
    }
}
