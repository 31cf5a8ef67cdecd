//! HTML5 Parser implementation
//!
//! Uses html5ever's RcDom and converts it into the arena tree. Template
//! fragments are converted into the same arena as the host document so
//! their nodes can be moved in without copying.

use std::rc::Rc;

use html5ever::tendril::TendrilSink;
use html5ever::{QualName, local_name, ns, parse_document, parse_fragment};
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};
use ssr_dom::{Attribute, Document, DomTree, ElementData, NodeId};

use crate::ParseError;

/// HTML5 parser
pub struct HtmlParser;

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self
    }

    /// Parse a complete HTML document
    pub fn parse(&self, html: &str) -> Result<Document, ParseError> {
        tracing::debug!("Parsing HTML document ({} bytes)", html.len());

        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())?;

        let mut document = Document::empty();
        let root = document.tree.root();
        convert_children(&dom.document, &mut document.tree, root);

        // Find html, head, body elements
        document.finalize();

        tracing::debug!("Parsed {} nodes", document.tree().len());
        Ok(document)
    }

    /// Parse markup as body content into `tree`.
    ///
    /// Returns a detached `body` container whose children are the parsed
    /// top-level nodes in source order, including comments and
    /// whitespace-only text. `<style>`, `<link>` and `<script>` stay at the
    /// top level as they would inside a `<body>`.
    pub fn parse_fragment_into(&self, tree: &mut DomTree, html: &str) -> Result<NodeId, ParseError> {
        let context = QualName::new(None, ns!(html), local_name!("body"));
        let dom = parse_fragment(RcDom::default(), Default::default(), context, Vec::new(), true)
            .from_utf8()
            .read_from(&mut html.as_bytes())?;
        let container = tree.create_element("body");

        // The fragment parser puts everything under a single <html> root
        let roots = dom.document.children.borrow();
        for root in roots.iter() {
            convert_children(root, tree, container);
        }

        tracing::trace!(
            "Parsed fragment into {} top-level nodes",
            tree.children(container).count()
        );
        Ok(container)
    }
}

/// Convert the children of `handle` under `parent`.
///
/// Iterative pre-order walk: siblings are converted in order and nesting
/// depth is bounded by the heap, not the call stack.
fn convert_children(handle: &Handle, tree: &mut DomTree, parent: NodeId) {
    let mut stack: Vec<(Handle, NodeId)> = Vec::new();
    push_children(&mut stack, handle, parent);

    while let Some((handle, parent)) = stack.pop() {
        let Some(id) = convert_node(&handle, tree) else {
            continue;
        };
        tree.append_child(parent, id);

        push_children(&mut stack, &handle, id);
        // <template> keeps its parsed content aside; serialize it inline
        if let RcNodeData::Element { template_contents, .. } = &handle.data {
            if let Some(contents) = template_contents.borrow().as_ref() {
                push_children(&mut stack, contents, id);
            }
        }
    }
}

/// Push children reversed so the first child is popped next
fn push_children(stack: &mut Vec<(Handle, NodeId)>, handle: &Handle, parent: NodeId) {
    stack.extend(
        handle
            .children
            .borrow()
            .iter()
            .rev()
            .map(|child| (Rc::clone(child), parent)),
    );
}

/// Create the arena counterpart of one RcDom node, without its children
fn convert_node(handle: &Handle, tree: &mut DomTree) -> Option<NodeId> {
    let id = match &handle.data {
        RcNodeData::Doctype {
            name,
            public_id,
            system_id,
        } => tree.create_doctype(name, public_id, system_id),
        // Whitespace-only text is kept: it counts as slot content
        RcNodeData::Text { contents } => tree.create_text(&contents.borrow()),
        RcNodeData::Comment { contents } => tree.create_comment(contents),
        RcNodeData::Element { name, attrs, .. } => {
            let mut elem = ElementData::new(&*name.local);
            for attr in attrs.borrow().iter() {
                let attr_name = match &attr.name.prefix {
                    Some(prefix) => format!("{}:{}", prefix, attr.name.local),
                    None => attr.name.local.to_string(),
                };
                elem.attrs.push(Attribute {
                    name: attr_name,
                    value: attr.value.to_string(),
                });
            }
            tree.create_element_with(elem)
        }
        // Not produced by the HTML tokenizer
        RcNodeData::Document | RcNodeData::ProcessingInstruction { .. } => return None,
    };
    Some(id)
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new()
    }
}
