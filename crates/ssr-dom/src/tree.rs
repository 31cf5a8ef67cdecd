//! DOM Tree (arena-based allocation)
//!
//! Nodes are never freed while the tree lives; `detach` only unlinks them.
//! This keeps every `NodeId` handed out stable across arbitrary moves.

use crate::{ElementData, Node, NodeData, NodeId, TextData};

/// Arena-based DOM tree
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a new tree holding only the document node
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a tree with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(Node::new(NodeData::Document));
        Self { nodes }
    }

    /// The document node
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes in the arena, detached ones included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(data));
        id
    }

    /// Create a detached element
    pub fn create_element(&mut self, name: &str) -> NodeId {
        self.push(NodeData::Element(ElementData::new(name)))
    }

    /// Create a detached element from prepared element data
    pub fn create_element_with(&mut self, data: ElementData) -> NodeId {
        self.push(NodeData::Element(data))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push(NodeData::Text(TextData {
            content: content.to_string(),
        }))
    }

    /// Create a detached comment
    pub fn create_comment(&mut self, content: &str) -> NodeId {
        self.push(NodeData::Comment(content.to_string()))
    }

    /// Create a detached doctype
    pub fn create_doctype(&mut self, name: &str, public_id: &str, system_id: &str) -> NodeId {
        self.push(NodeData::Doctype {
            name: name.to_string(),
            public_id: public_id.to_string(),
            system_id: system_id.to_string(),
        })
    }

    /// Unlink a node from its parent and siblings. The subtree below it
    /// stays intact.
    pub fn detach(&mut self, id: NodeId) {
        let Some(node) = self.get(id) else {
            return;
        };
        let (parent, prev, next) = (node.parent, node.prev_sibling, node.next_sibling);

        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = next;
        } else if parent.is_valid() {
            self.nodes[parent.index()].first_child = next;
        }

        if next.is_valid() {
            self.nodes[next.index()].prev_sibling = prev;
        } else if parent.is_valid() {
            self.nodes[parent.index()].last_child = prev;
        }

        let node = &mut self.nodes[id.index()];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
    }

    /// Append `child` as the last child of `parent`, moving it if it is
    /// already linked elsewhere
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        debug_assert!(parent != child, "cannot append a node to itself");
        self.detach(child);

        let last = self.nodes[parent.index()].last_child;
        {
            let node = &mut self.nodes[child.index()];
            node.parent = parent;
            node.prev_sibling = last;
        }
        if last.is_valid() {
            self.nodes[last.index()].next_sibling = child;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        self.nodes[parent.index()].last_child = child;
    }

    /// Insert `new_child` directly before `reference`. No-op when
    /// `reference` has no parent.
    pub fn insert_before(&mut self, reference: NodeId, new_child: NodeId) {
        let parent = self.nodes[reference.index()].parent;
        if reference == new_child || !parent.is_valid() {
            return;
        }
        self.detach(new_child);

        let prev = self.nodes[reference.index()].prev_sibling;
        {
            let node = &mut self.nodes[new_child.index()];
            node.parent = parent;
            node.prev_sibling = prev;
            node.next_sibling = reference;
        }
        self.nodes[reference.index()].prev_sibling = new_child;
        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = new_child;
        } else {
            self.nodes[parent.index()].first_child = new_child;
        }
    }

    /// Insert `new_child` directly after `reference`. No-op when
    /// `reference` has no parent.
    pub fn insert_after(&mut self, reference: NodeId, new_child: NodeId) {
        let parent = self.nodes[reference.index()].parent;
        if reference == new_child || !parent.is_valid() {
            return;
        }
        let next = self.nodes[reference.index()].next_sibling;
        if next.is_valid() {
            self.insert_before(next, new_child);
        } else {
            self.append_child(parent, new_child);
        }
    }

    /// Put `new` where `old` is and detach `old`
    pub fn replace(&mut self, old: NodeId, new: NodeId) {
        if old == new || !self.nodes[old.index()].parent.is_valid() {
            return;
        }
        self.insert_before(old, new);
        self.detach(old);
    }

    /// Detach every child of `parent`
    pub fn clear_children(&mut self, parent: NodeId) {
        for child in self.child_ids(parent) {
            self.detach(child);
        }
    }

    /// Iterate over the children of a node
    pub fn children(&self, parent: NodeId) -> Children<'_> {
        let next = self
            .get(parent)
            .map(|n| n.first_child)
            .unwrap_or(NodeId::NONE);
        Children { tree: self, next }
    }

    /// Snapshot of a node's child ids, safe to hold across mutation
    pub fn child_ids(&self, parent: NodeId) -> Vec<NodeId> {
        self.children(parent).map(|(id, _)| id).collect()
    }

    /// All descendants of `start` in document (pre-order) order, excluding
    /// `start` itself
    pub fn descendants(&self, start: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.child_ids(start).into_iter().rev().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            let before = stack.len();
            stack.extend(self.children(id).map(|(child, _)| child));
            stack[before..].reverse();
        }
        out
    }

    /// Whether `ancestor` is `node` or one of its ancestors
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = node;
        while current.is_valid() {
            if current == ancestor {
                return true;
            }
            current = match self.get(current) {
                Some(n) => n.parent,
                None => return false,
            };
        }
        false
    }

    /// Tag name of an element, `None` for other node kinds
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.get(id)?.as_element().map(|e| e.name.as_str())
    }

    /// Attribute value of an element
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.get(id)?.as_element()?.get_attr(name)
    }

    /// Whether an element carries an attribute
    pub fn has_attr(&self, id: NodeId, name: &str) -> bool {
        self.get(id)
            .and_then(Node::as_element)
            .is_some_and(|e| e.has_attr(name))
    }

    /// Set an attribute on an element; no-op for other node kinds
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(elem) = self.get_mut(id).and_then(Node::as_element_mut) {
            elem.set_attr(name, value);
        }
    }

    /// Concatenated text of the direct text children (the inline body of a
    /// `<script>` or `<style>`)
    pub fn text_content(&self, id: NodeId) -> String {
        self.children(id)
            .filter_map(|(_, child)| child.as_text())
            .collect()
    }

    /// Rough heap footprint of the arena
    pub fn memory_usage(&self) -> usize {
        self.nodes.capacity() * std::mem::size_of::<Node>()
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the children of a node
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.next.is_valid() {
            return None;
        }
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(tree: &DomTree, parent: NodeId) -> Vec<String> {
        tree.children(parent)
            .map(|(id, node)| match node.as_text() {
                Some(text) => text.to_string(),
                None => tree.tag_name(id).unwrap_or("?").to_string(),
            })
            .collect()
    }

    #[test]
    fn test_append_moves_node() {
        let mut tree = DomTree::new();
        let a = tree.create_element("a");
        let b = tree.create_element("b");
        let x = tree.create_element("x");
        tree.append_child(tree.root(), a);
        tree.append_child(tree.root(), b);
        tree.append_child(a, x);

        tree.append_child(b, x);

        assert!(tree.children(a).next().is_none());
        assert_eq!(names(&tree, b), vec!["x"]);
        assert_eq!(tree.get(x).unwrap().parent, b);
    }

    #[test]
    fn test_insert_before_and_after() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        let p = tree.create_element("p");
        tree.append_child(div, p);

        let first = tree.create_text("first");
        let last = tree.create_text("last");
        tree.insert_before(p, first);
        tree.insert_after(p, last);

        assert_eq!(names(&tree, div), vec!["first", "p", "last"]);
        assert_eq!(tree.get(div).unwrap().first_child, first);
        assert_eq!(tree.get(div).unwrap().last_child, last);
    }

    #[test]
    fn test_replace() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        let a = tree.create_element("a");
        let b = tree.create_element("b");
        let c = tree.create_element("c");
        tree.append_child(div, a);
        tree.append_child(div, b);

        tree.replace(a, c);

        assert_eq!(names(&tree, div), vec!["c", "b"]);
        assert!(!tree.get(a).unwrap().parent.is_valid());
    }

    #[test]
    fn test_descendants_pre_order() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        let p = tree.create_element("p");
        let span = tree.create_element("span");
        let em = tree.create_element("em");
        tree.append_child(div, p);
        tree.append_child(p, span);
        tree.append_child(div, em);

        assert_eq!(tree.descendants(div), vec![p, span, em]);
        assert!(tree.contains(div, span));
        assert!(!tree.contains(p, em));
    }

    #[test]
    fn test_text_content_direct_children_only() {
        let mut tree = DomTree::new();
        let script = tree.create_element("script");
        let a = tree.create_text("let a = 1;");
        let b = tree.create_text(" let b = 2;");
        tree.append_child(script, a);
        tree.append_child(script, b);

        assert_eq!(tree.text_content(script), "let a = 1; let b = 2;");
    }
}
