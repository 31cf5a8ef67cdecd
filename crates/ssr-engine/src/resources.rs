//! Resource hoisting
//!
//! Scripts, styles and links pulled out of expanded templates are
//! deduplicated and placed once in the document:
//! - scripts: keyed by inline text, else `src`; appended to `<body>`
//! - styles: distinct inline bodies merged into a single `<style>` in `<head>`,
//!   `@import` rules first
//! - links: keyed by their sorted attributes; appended to `<head>`
//!
//! Insertion-ordered maps keep the output stable: each survivor sits at the
//! position its key was first seen and is the last element seen for it.

use indexmap::{IndexMap, IndexSet};
use ssr_dom::{DomTree, Node, NodeId};

use crate::ExpandedTemplate;

/// Resources accumulated over one render, in encounter order
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Resources {
    pub scripts: Vec<NodeId>,
    pub styles: Vec<NodeId>,
    pub links: Vec<NodeId>,
}

impl Resources {
    /// Take over the resources hoisted from one expansion
    pub fn collect(&mut self, expanded: &ExpandedTemplate) {
        self.scripts.extend_from_slice(&expanded.scripts);
        self.styles.extend_from_slice(&expanded.styles);
        self.links.extend_from_slice(&expanded.links);
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty() && self.styles.is_empty() && self.links.is_empty()
    }

    /// Deduplicate and attach everything to `head` and `body`
    pub fn merge_into(self, tree: &mut DomTree, head: NodeId, body: NodeId) {
        if self.is_empty() {
            return;
        }

        let scripts = unique_scripts(tree, &self.scripts);
        tracing::trace!("Hoisting {} of {} scripts", scripts.len(), self.scripts.len());
        for script in scripts {
            tree.append_child(body, script);
        }

        let merged = merged_styles(tree, &self.styles);
        if !merged.is_empty() {
            let style = tree.create_element("style");
            let text = tree.create_text(&merged);
            tree.append_child(style, text);
            tree.append_child(head, style);
        }

        let links = unique_links(tree, &self.links);
        tracing::trace!("Hoisting {} of {} links", links.len(), self.links.len());
        for link in links {
            tree.append_child(head, link);
        }
    }
}

/// Scripts with neither inline text nor `src` are dropped
fn unique_scripts(tree: &DomTree, scripts: &[NodeId]) -> Vec<NodeId> {
    let mut unique: IndexMap<String, NodeId> = IndexMap::new();
    for &script in scripts {
        let content = tree.text_content(script);
        let key = if !content.is_empty() {
            content
        } else {
            match tree.attr(script, "src") {
                Some(src) if !src.is_empty() => src.to_string(),
                _ => continue,
            }
        };
        unique.insert(key, script);
    }
    unique.into_values().collect()
}

fn merged_styles(tree: &DomTree, styles: &[NodeId]) -> String {
    let unique: IndexSet<String> = styles.iter().map(|&style| tree.text_content(style)).collect();

    let mut bodies: Vec<String> = unique.into_iter().collect();
    // Stable: only moves @import rules ahead of everything else
    bodies.sort_by_key(|body| !body.trim().starts_with("@import"));
    bodies.join("\n")
}

fn unique_links(tree: &DomTree, links: &[NodeId]) -> Vec<NodeId> {
    let mut unique: IndexMap<String, NodeId> = IndexMap::new();
    for &link in links {
        let Some(elem) = tree.get(link).and_then(Node::as_element) else {
            continue;
        };
        let mut attrs: Vec<_> = elem.attrs.iter().collect();
        attrs.sort_by(|a, b| a.name.cmp(&b.name));
        let key = attrs
            .iter()
            .map(|a| format!("{}={}", a.name, a.value))
            .collect::<Vec<_>>()
            .join(";");
        unique.insert(key, link);
    }
    unique.into_values().collect()
}
