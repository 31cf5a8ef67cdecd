//! Template expansion
//!
//! Renders one custom element's template and parses the result into a
//! fragment living in the document's own arena.

use ssr_dom::{DomTree, Node, NodeId};
use ssr_html::HtmlParser;

use crate::{Attributes, RenderError, Template};

/// A rendered and parsed template, valid for one expansion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedTemplate {
    /// Detached `body` container holding the template's nodes
    pub fragment: NodeId,
    /// Top-level `<script>` elements removed from the fragment
    pub scripts: Vec<NodeId>,
    /// Top-level `<style>` elements removed from the fragment
    pub styles: Vec<NodeId>,
    /// Top-level `<link>` elements removed from the fragment
    pub links: Vec<NodeId>,
}

/// Render `template` with the attributes of `element` and parse the result.
///
/// Only direct children of the fragment are hoisted; resources nested
/// deeper inside the template markup stay where they are. The element
/// itself is left untouched.
pub fn expand(
    tree: &mut DomTree,
    element: NodeId,
    template: &dyn Template,
) -> Result<ExpandedTemplate, RenderError> {
    let Some(elem) = tree.get(element).and_then(Node::as_element) else {
        return Err(RenderError::NotAnElement(element));
    };

    let attrs: Attributes = elem
        .attrs
        .iter()
        .map(|a| (a.name.clone(), a.value.clone()))
        .collect();

    let markup = template
        .render(&attrs)
        .map_err(|source| RenderError::Template {
            tag: elem.name.clone(),
            source,
        })?;

    let fragment = HtmlParser::new().parse_fragment_into(tree, &markup)?;
    let mut expanded = ExpandedTemplate {
        fragment,
        scripts: Vec::new(),
        styles: Vec::new(),
        links: Vec::new(),
    };

    for child in tree.child_ids(fragment) {
        let bucket = match tree.tag_name(child) {
            Some("script") => &mut expanded.scripts,
            Some("style") => &mut expanded.styles,
            Some("link") => &mut expanded.links,
            _ => continue,
        };
        tree.detach(child);
        bucket.push(child);
    }

    tracing::trace!(
        "Expanded template: {} scripts, {} styles, {} links hoisted",
        expanded.scripts.len(),
        expanded.styles.len(),
        expanded.links.len()
    );
    Ok(expanded)
}
