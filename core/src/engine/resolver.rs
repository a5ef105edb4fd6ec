//! Node tree walk
//!
//! Depth-first, in declaration order. The order of the returned specs is the
//! paint order, so a later sibling draws over an earlier one.

use serde::Serialize;

use auralyte_types::{Node, NodeKind, Vec2};

use crate::snapshot::StateSnapshot;

use super::EvalContext;
use super::conditions::all_pass;
use super::properties::{ResolvedAttributes, resolve_bundles};

/// One indicator to draw this frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSpec {
    pub node_id: u32,
    pub name: String,
    /// Absolute position
    pub position: Vec2,
    pub attributes: ResolvedAttributes,
}

/// Resolve a list of sibling nodes that share one parent position
pub fn resolve_nodes<S: StateSnapshot + ?Sized>(
    nodes: &[Node],
    origin: Vec2,
    ctx: &mut EvalContext<'_, S>,
) -> Vec<RenderSpec> {
    let mut out = Vec::new();
    for node in nodes {
        resolve_node(node, origin, ctx, &mut out);
    }
    out
}

/// Resolve one node and its subtree, appending to `out`
pub fn resolve_node<S: StateSnapshot + ?Sized>(
    node: &Node,
    inherited: Vec2,
    ctx: &mut EvalContext<'_, S>,
    out: &mut Vec<RenderSpec>,
) {
    if !all_pass(&node.conditions, ctx) {
        tracing::trace!(node = node.id, name = %node.name, "Node gate failed");
        return;
    }

    let position = inherited + node.offset;
    match node.kind {
        NodeKind::Indicator => {
            let attributes = resolve_bundles(&node.bundles, ctx);
            out.push(RenderSpec {
                node_id: node.id,
                name: node.name.clone(),
                position,
                attributes,
            });
        }
        NodeKind::Group => {
            for child in &node.children {
                resolve_node(child, position, ctx, out);
            }
        }
    }
}
