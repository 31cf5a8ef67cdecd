//! Slot resolution
//!
//! Matches the `<slot>` placeholders of an expanded template against the
//! light content of the element being expanded, then makes the resolved
//! fragment the element's only content.
//!
//! Resolution happens in three passes over the slots collected up front:
//! 1. named slots are replaced by the insert targeting them
//! 2. unnamed slots receive the element's remaining children, or keep their
//!    default content when there are none
//! 3. named slots left unfilled become inserts themselves, so an enclosing
//!    custom element can pick up their default content

use std::collections::HashSet;

use ssr_dom::{DomTree, Node, NodeId};

use crate::ExpandedTemplate;

/// Fill the slots of `expanded` from the children of `element` and replace
/// the children of `element` with the resolved fragment.
pub fn fill_slots(tree: &mut DomTree, element: NodeId, expanded: &ExpandedTemplate) {
    let fragment = expanded.fragment;

    let slots: Vec<NodeId> = tree
        .descendants(fragment)
        .into_iter()
        .filter(|&id| tree.tag_name(id) == Some("slot"))
        .collect();
    let inserts: Vec<NodeId> = tree
        .children(element)
        .filter(|(_, node)| node.as_element().is_some_and(|e| e.has_attr("slot")))
        .map(|(id, _)| id)
        .collect();

    let mut used_slots = HashSet::new();
    let mut used_inserts = HashSet::new();
    let mut unnamed_slots = Vec::new();

    for &slot in &slots {
        let Some(name) = tree.attr(slot, "name").map(str::to_string) else {
            unnamed_slots.push(slot);
            continue;
        };
        if !tree.contains(fragment, slot) {
            continue;
        }

        // Every matching insert takes the slot's position in turn; the last
        // one stays
        let mut occupant = slot;
        for &insert in &inserts {
            if tree.attr(insert, "slot") != Some(name.as_str()) {
                continue;
            }
            if occupant != slot {
                tracing::warn!("Insert for slot \"{}\" displaced by a later insert", name);
            }
            tracing::trace!("Filling slot \"{}\" with {:?}", name, insert);
            tree.replace(occupant, insert);
            occupant = insert;
            used_slots.insert(slot);
            used_inserts.insert(insert);
        }
    }

    for slot in unnamed_slots {
        if !tree.contains(fragment, slot) {
            continue;
        }
        // Whitespace-only text counts as content here
        let leftovers: Vec<NodeId> = tree
            .child_ids(element)
            .into_iter()
            .filter(|id| !used_inserts.contains(id))
            .collect();
        let content = if leftovers.is_empty() {
            tree.child_ids(slot)
        } else {
            leftovers
        };
        splice(tree, slot, &content);
    }

    for slot in slots {
        if used_slots.contains(&slot) || !tree.contains(fragment, slot) {
            continue;
        }
        let Some(name) = tree.attr(slot, "name").map(str::to_string) else {
            continue;
        };
        promote_default_content(tree, slot, &name);
    }

    tree.clear_children(element);
    for child in tree.child_ids(fragment) {
        tree.append_child(element, child);
    }
}

/// Turn an unfilled named slot into an insert carrying `slot=<name>`.
///
/// A lone element child is tagged directly; anything else is wrapped in the
/// element named by the slot's `as` attribute (`span` by default).
fn promote_default_content(tree: &mut DomTree, slot: NodeId, name: &str) {
    let children = tree.child_ids(slot);
    let elements: Vec<NodeId> = children
        .iter()
        .copied()
        .filter(|&id| tree.get(id).is_some_and(Node::is_element))
        .collect();

    if let [only] = elements[..] {
        tree.set_attr(only, "slot", name);
        splice(tree, slot, &children);
        return;
    }

    let wrapper_tag = match tree.attr(slot, "as") {
        Some(tag) if !tag.is_empty() => tag.to_string(),
        _ => "span".to_string(),
    };
    let wrapper = tree.create_element(&wrapper_tag);
    tree.set_attr(wrapper, "slot", name);
    for child in children {
        tree.append_child(wrapper, child);
    }
    splice(tree, slot, &[wrapper]);
}

/// Put `nodes` where `slot` is, in order, and drop the slot
fn splice(tree: &mut DomTree, slot: NodeId, nodes: &[NodeId]) {
    let mut preceding = slot;
    for &node in nodes {
        tree.insert_after(preceding, node);
        preceding = node;
    }
    tree.detach(slot);
}
