use std::collections::HashMap;

use prunetrace_core::GameNode;

use crate::{GenError, MAX_DEPTH};

#[derive(Debug, Clone)]
struct PendingNode {
    id: String,
    value: Option<f64>,
    depth: u32,
    children: Vec<usize>,
}

#[derive(Debug, Clone, Default)]
/// Struct to build explicit, possibly unbalanced trees node by node.
/// Children keep the order they were added in; nodes deeper than `MAX_DEPTH` are rejected.
pub struct TreeBuilder {
    nodes: Vec<PendingNode>,
    index: HashMap<String, usize>,
}

impl TreeBuilder {
    /// Create a builder whose root has the given id.
    pub fn new(root: impl Into<String>) -> Result<Self, GenError> {
        let mut builder = Self::default();
        builder.insert(root.into(), None, 0)?;
        Ok(builder)
    }

    /// Add an interior node under `parent`.
    pub fn add_interior(
        &mut self,
        parent: impl AsRef<str>,
        id: impl Into<String>,
    ) -> Result<&mut Self, GenError> {
        self.attach(parent.as_ref(), id.into(), None)
    }

    /// Add a leaf with a fixed value under `parent`.
    pub fn add_leaf(
        &mut self,
        parent: impl AsRef<str>,
        id: impl Into<String>,
        value: f64,
    ) -> Result<&mut Self, GenError> {
        self.attach(parent.as_ref(), id.into(), Some(value))
    }

    /// Assemble and validate the tree.
    pub fn build(self) -> Result<GameNode, GenError> {
        if self.nodes.is_empty() {
            return Err(GenError::MissingRoot);
        }
        let root = self.assemble(0);
        root.validate()?;
        Ok(root)
    }

    fn attach(
        &mut self,
        parent: &str,
        id: String,
        value: Option<f64>,
    ) -> Result<&mut Self, GenError> {
        let parent_idx = *self
            .index
            .get(parent)
            .ok_or_else(|| GenError::UnknownParent {
                parent: parent.to_string(),
            })?;
        if self.nodes[parent_idx].value.is_some() {
            return Err(GenError::ParentIsLeaf {
                parent: parent.to_string(),
            });
        }

        let depth = self.nodes[parent_idx].depth + 1;
        if depth > MAX_DEPTH {
            return Err(GenError::TooDeep {
                depth,
                max: MAX_DEPTH,
            });
        }

        let child_idx = self.insert(id, value, depth)?;
        self.nodes[parent_idx].children.push(child_idx);
        Ok(self)
    }

    fn insert(&mut self, id: String, value: Option<f64>, depth: u32) -> Result<usize, GenError> {
        if id.trim().is_empty() {
            return Err(GenError::EmptyNodeId);
        }
        if self.index.contains_key(&id) {
            return Err(GenError::DuplicateNodeId { id });
        }

        let idx = self.nodes.len();
        self.index.insert(id.clone(), idx);
        self.nodes.push(PendingNode {
            id,
            value,
            depth,
            children: Vec::new(),
        });
        Ok(idx)
    }

    fn assemble(&self, idx: usize) -> GameNode {
        let node = &self.nodes[idx];
        let children = node
            .children
            .iter()
            .map(|child| self.assemble(*child))
            .collect();
        GameNode::from_parts(node.id.as_str(), node.value, children)
    }
}
