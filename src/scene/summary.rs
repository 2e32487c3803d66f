use super::node::{Rect, SceneNode};
use serde::Serialize;
use std::collections::BTreeMap;

/// What the host reports back after a successful conversion
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Total number of nodes across all roots
    pub created: usize,
    pub root_id: String,
    pub root_name: String,
    /// Bounds of the first root, when it has a fixed size
    pub bounds: Option<Rect>,
    /// Node count per host node type
    pub node_types: BTreeMap<String, usize>,
}

impl Summary {
    /// Summarize a conversion result
    ///
    /// Returns `None` for an empty root list.
    pub fn from_roots(roots: &[SceneNode]) -> Option<Self> {
        let first = roots.first()?;

        let mut node_types = BTreeMap::new();
        for root in roots {
            tally(root, &mut node_types);
        }

        Some(Self {
            created: roots.iter().map(SceneNode::count).sum(),
            root_id: first.id.clone(),
            root_name: first.name.clone(),
            bounds: first.bounds(),
            node_types,
        })
    }
}

fn tally(node: &SceneNode, node_types: &mut BTreeMap<String, usize>) {
    *node_types.entry(node.kind_name().to_string()).or_insert(0) += 1;
    for child in node.children() {
        tally(child, node_types);
    }
}

/// Indented one-line-per-node outline of a tree, e.g. `FRAME "Card" 300x150`
pub fn layer_structure(roots: &[SceneNode]) -> Vec<String> {
    let mut lines = Vec::new();
    for root in roots {
        outline(root, 0, &mut lines);
    }
    lines
}

fn outline(node: &SceneNode, depth: usize, lines: &mut Vec<String>) {
    lines.push(format!(
        "{}{} {:?} {}x{}",
        "  ".repeat(depth),
        node.kind_name(),
        node.name,
        node.width,
        node.height
    ));
    for child in node.children() {
        outline(child, depth + 1, lines);
    }
}
