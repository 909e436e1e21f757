mod trace_tests;

use crate::{GameNode, NodeId};

/// Balanced tree with path-encoded ids, leaves filled from `values` in pre-order.
pub(super) fn balanced(depth: u32, branching: usize, values: &[f64]) -> GameNode {
    fn build(
        id: NodeId,
        level: u32,
        depth: u32,
        branching: usize,
        values: &mut impl Iterator<Item = f64>,
    ) -> GameNode {
        if level == depth {
            return GameNode::leaf(id, values.next().unwrap_or(0.0));
        }
        let children = (0..branching)
            .map(|i| build(id.child(i), level + 1, depth, branching, values))
            .collect();
        GameNode::interior(id, children)
    }

    build(
        NodeId::root(),
        0,
        depth,
        branching,
        &mut values.iter().copied(),
    )
}
