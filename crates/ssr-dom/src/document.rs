//! Document - High-level document API

use crate::{DomTree, NodeId};

/// HTML Document
#[derive(Debug, Clone)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <head> element
    head_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
}

impl Document {
    /// Create a new document with the `html`/`head`/`body` skeleton
    pub fn new() -> Self {
        let mut document = Self::empty();
        document.finalize();
        document
    }

    /// Create an empty document (no structure)
    pub fn empty() -> Self {
        Self {
            tree: DomTree::new(),
            html_element: NodeId::NONE,
            head_element: NodeId::NONE,
            body_element: NodeId::NONE,
        }
    }

    /// Locate `html`, `head` and `body` after the tree has been populated,
    /// creating whichever is missing.
    pub fn finalize(&mut self) {
        let root = self.tree.root();
        self.html_element = match self.find_child(root, "html") {
            Some(id) => id,
            None => {
                let html = self.tree.create_element("html");
                self.tree.append_child(root, html);
                html
            }
        };

        self.head_element = match self.find_child(self.html_element, "head") {
            Some(id) => id,
            None => {
                let head = self.tree.create_element("head");
                match self.tree.get(self.html_element).map(|n| n.first_child) {
                    Some(first) if first.is_valid() => self.tree.insert_before(first, head),
                    _ => self.tree.append_child(self.html_element, head),
                }
                head
            }
        };

        self.body_element = match self.find_child(self.html_element, "body") {
            Some(id) => id,
            None => {
                let body = self.tree.create_element("body");
                self.tree.append_child(self.html_element, body);
                body
            }
        };

        tracing::trace!(
            "Document finalized: html={:?} head={:?} body={:?}",
            self.html_element,
            self.head_element,
            self.body_element
        );
    }

    fn find_child(&self, parent: NodeId, tag: &str) -> Option<NodeId> {
        self.tree
            .children(parent)
            .find(|(_, node)| node.as_element().is_some_and(|e| e.name == tag))
            .map(|(id, _)| id)
    }

    /// Get <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <head> element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
