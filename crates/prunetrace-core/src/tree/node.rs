use std::collections::HashSet;

use crate::tree::{error::TreeError, ids::NodeId};

#[derive(Debug, Clone, PartialEq)]
/// One position in the game tree.
/// Leaves carry a value and no children, interior nodes carry children and no value.
/// Children are owned by their parent, so the tree is always a strict out-tree.
pub struct GameNode {
    id: NodeId,
    value: Option<f64>,
    children: Vec<GameNode>,
}

impl GameNode {
    /// Create a terminal node with a fixed game value.
    pub fn leaf(id: impl Into<NodeId>, value: f64) -> Self {
        GameNode {
            id: id.into(),
            value: Some(value),
            children: Vec::new(),
        }
    }

    /// Create an interior node over its ordered children.
    pub fn interior(id: impl Into<NodeId>, children: Vec<GameNode>) -> Self {
        GameNode {
            id: id.into(),
            value: None,
            children,
        }
    }

    /// Create a node from raw parts without checking the leaf/value invariant.
    /// Call `validate` on the finished tree before searching it.
    pub fn from_parts(id: impl Into<NodeId>, value: Option<f64>, children: Vec<GameNode>) -> Self {
        GameNode {
            id: id.into(),
            value,
            children,
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    /// The stored game value; `Some` only on leaves of a well-formed tree.
    pub fn value(&self) -> Option<f64> {
        self.value
    }

    /// Children in exploration order.
    pub fn children(&self) -> &[GameNode] {
        &self.children
    }

    /// A node is a leaf iff it has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Iterate all nodes of this subtree in pre-order, left to right.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        self.walk().count()
    }

    /// Number of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        self.walk().filter(|node| node.is_leaf()).count()
    }

    /// Length of the longest root-to-leaf path, counted in edges.
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.height() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Leaf values in pre-order. Leaves without a value are skipped.
    pub fn leaf_values(&self) -> Vec<f64> {
        self.walk()
            .filter(|node| node.is_leaf())
            .filter_map(|node| node.value)
            .collect()
    }

    /// Find a node by id anywhere in this subtree.
    pub fn find(&self, id: &str) -> Option<&GameNode> {
        self.walk().find(|node| node.id.as_str() == id)
    }

    /// Check the structural contract the search engine relies on.
    pub fn validate(&self) -> Result<(), TreeError> {
        let mut seen = HashSet::new();
        for node in self.walk() {
            node.check_shape()?;
            if !seen.insert(&node.id) {
                return Err(TreeError::DuplicateNodeId {
                    node_id: node.id.clone(),
                });
            }
        }
        Ok(())
    }

    /// Check the leaf/value invariant on this node only and return the leaf value, if any.
    pub(crate) fn check_shape(&self) -> Result<Option<f64>, TreeError> {
        match (self.is_leaf(), self.value) {
            (true, Some(value)) if value.is_nan() => Err(TreeError::NanLeaf {
                node_id: self.id.clone(),
            }),
            (true, Some(value)) => Ok(Some(value)),
            (true, None) => Err(TreeError::MissingLeafValue {
                node_id: self.id.clone(),
            }),
            (false, Some(_)) => Err(TreeError::UnexpectedValue {
                node_id: self.id.clone(),
            }),
            (false, None) => Ok(None),
        }
    }
}

/// Pre-order iterator over a subtree.
pub struct Walk<'a> {
    stack: Vec<&'a GameNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a GameNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // reversed so the leftmost child is popped first
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
