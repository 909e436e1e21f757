use std::fmt;

use serde::{Deserialize, Serialize};

/// Id of the root node of every generated tree.
pub const ROOT_ID: &str = "Root";

/// A path-encoded, human-readable node identifier (`Root`, `Root_0`, `Root_0_1`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// The id given to the root of a generated tree.
    pub fn root() -> Self {
        NodeId(ROOT_ID.to_string())
    }

    /// Derive the id of the `index`-th child of this node.
    pub fn child(&self, index: usize) -> Self {
        NodeId(format!("{}_{}", self.0, index))
    }

    /// Borrow the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        NodeId(value.to_string())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        NodeId(value)
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for NodeId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NodeId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
