//! Editing operations on the aura tree
//!
//! Ids are positional: 1..N within each sibling list, bundle list and
//! condition list. Every structural edit reindexes the list it touched, and
//! [`reindex`] can be run over a whole tree at any time.

use auralyte_types::{Attribute, AttributeBundle, Condition, Node, Vec2};

/// Reindexed copy of a node list
pub fn reindex(nodes: &[Node]) -> Vec<Node> {
    let mut nodes = nodes.to_vec();
    reindex_in_place(&mut nodes);
    nodes
}

/// Assign dense 1-based ids throughout a node list and all its descendants
pub fn reindex_in_place(nodes: &mut [Node]) {
    for (i, node) in nodes.iter_mut().enumerate() {
        node.id = i as u32 + 1;
        reindex_conditions(&mut node.conditions);
        for (j, bundle) in node.bundles.iter_mut().enumerate() {
            bundle.id = j as u32 + 1;
            reindex_conditions(&mut bundle.conditions);
        }
        reindex_in_place(&mut node.children);
    }
}

fn reindex_conditions(conditions: &mut [Condition]) {
    for (i, condition) in conditions.iter_mut().enumerate() {
        condition.id = i as u32 + 1;
    }
}

/// Deep copy for pasting; only the copied root is renamed
pub fn duplicate(node: &Node) -> Node {
    let mut copy = node.clone();
    copy.name.push_str(" clone");
    copy
}

/// Swap a node with its previous sibling
pub fn move_up(nodes: &mut [Node], index: usize) -> bool {
    if index == 0 || index >= nodes.len() {
        return false;
    }
    nodes.swap(index - 1, index);
    reindex_in_place(nodes);
    true
}

/// Swap a node with its next sibling
pub fn move_down(nodes: &mut [Node], index: usize) -> bool {
    if index + 1 >= nodes.len() {
        return false;
    }
    nodes.swap(index, index + 1);
    reindex_in_place(nodes);
    true
}

/// Append an empty indicator, returning its index
pub fn insert_new(nodes: &mut Vec<Node>, name: impl Into<String>) -> usize {
    nodes.push(Node::indicator(name, Vec2::ZERO, Vec::new()));
    reindex_in_place(nodes);
    nodes.len() - 1
}

/// Append a copied node, returning its index
pub fn paste(nodes: &mut Vec<Node>, node: Node) -> usize {
    nodes.push(node);
    reindex_in_place(nodes);
    nodes.len() - 1
}

pub fn remove(nodes: &mut Vec<Node>, index: usize) -> Option<Node> {
    if index >= nodes.len() {
        return None;
    }
    let removed = nodes.remove(index);
    reindex_in_place(nodes);
    Some(removed)
}

/// Follow a path of child indices from a top-level list
pub fn node_at<'a>(nodes: &'a [Node], path: &[usize]) -> Option<&'a Node> {
    let (first, rest) = path.split_first()?;
    let mut node = nodes.get(*first)?;
    for &index in rest {
        node = node.children.get(index)?;
    }
    Some(node)
}

pub fn node_at_mut<'a>(nodes: &'a mut [Node], path: &[usize]) -> Option<&'a mut Node> {
    let (first, rest) = path.split_first()?;
    let mut node = nodes.get_mut(*first)?;
    for &index in rest {
        node = node.children.get_mut(index)?;
    }
    Some(node)
}

/// Append a bundle holding one unset attribute, returning its index
pub fn add_bundle(node: &mut Node) -> usize {
    node.bundles.push(AttributeBundle::new(vec![Attribute::Unset]));
    for (j, bundle) in node.bundles.iter_mut().enumerate() {
        bundle.id = j as u32 + 1;
    }
    node.bundles.len() - 1
}
