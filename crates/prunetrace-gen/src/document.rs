use serde::{Deserialize, Serialize};

use prunetrace_core::GameNode;

use crate::{GenError, MAX_DEPTH};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Serializable tree schema used for YAML IO of explicit trees.
pub struct TreeDocument {
    /// Schema version for future compatibility checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    pub root: NodeSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One node declaration; leaves declare a `value`, interior nodes declare `children`.
pub struct NodeSpec {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSpec>,
}

impl NodeSpec {
    fn to_node(&self, depth: u32) -> Result<GameNode, GenError> {
        if self.id.trim().is_empty() {
            return Err(GenError::EmptyNodeId);
        }
        if depth > MAX_DEPTH {
            return Err(GenError::TooDeep {
                depth,
                max: MAX_DEPTH,
            });
        }
        let children = self
            .children
            .iter()
            .map(|child| child.to_node(depth + 1))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(GameNode::from_parts(self.id.as_str(), self.value, children))
    }

    fn from_node(node: &GameNode) -> Self {
        NodeSpec {
            id: node.id().to_string(),
            value: node.value(),
            children: node.children().iter().map(NodeSpec::from_node).collect(),
        }
    }
}

impl TreeDocument {
    /// Describe an existing tree.
    pub fn from_tree(root: &GameNode) -> Self {
        TreeDocument {
            version: Some(1),
            root: NodeSpec::from_node(root),
        }
    }

    /// Parse a document from YAML text without validating it.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, GenError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn to_yaml_string(&self) -> Result<String, GenError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check ids and the leaf/value contract.
    pub fn validate(&self) -> Result<(), GenError> {
        self.to_tree().map(|_| ())
    }

    /// Build and validate the tree this document describes.
    /// Nodes deeper than `MAX_DEPTH` are rejected.
    pub fn to_tree(&self) -> Result<GameNode, GenError> {
        let root = self.root.to_node(0)?;
        root.validate()?;
        Ok(root)
    }
}
