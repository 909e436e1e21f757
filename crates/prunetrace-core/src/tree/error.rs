use std::fmt;

use crate::tree::ids::NodeId;

/// Error type for tree validation, search and trace consumption.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeError {
    /// A node without children carries no value.
    MissingLeafValue { node_id: NodeId },
    /// A node with children carries a value.
    UnexpectedValue { node_id: NodeId },
    /// A leaf value is NaN and cannot be ordered.
    NanLeaf { node_id: NodeId },
    /// Two nodes in the same tree share an id.
    DuplicateNodeId { node_id: NodeId },
    /// Initial bounds contain NaN.
    InvalidBounds { alpha: f64, beta: f64 },
    /// A search was started on a log that already holds events.
    LogNotEmpty { len: usize },
    /// An event was appended after the run's `finish` event.
    LogSealed,
    /// A consumer asked to replay a log without a `finish` event.
    UnfinishedLog,
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::MissingLeafValue { node_id } => {
                write!(f, "leaf node {node_id} has no value")
            }
            TreeError::UnexpectedValue { node_id } => {
                write!(f, "interior node {node_id} must not carry a value")
            }
            TreeError::NanLeaf { node_id } => {
                write!(f, "leaf node {node_id} has a NaN value")
            }
            TreeError::DuplicateNodeId { node_id } => {
                write!(f, "duplicate node id {node_id}")
            }
            TreeError::InvalidBounds { alpha, beta } => {
                write!(f, "invalid search bounds alpha={alpha} beta={beta}")
            }
            TreeError::LogNotEmpty { len } => {
                write!(f, "search requires an empty trace log, found {len} events")
            }
            TreeError::LogSealed => write!(f, "trace log is sealed by its finish event"),
            TreeError::UnfinishedLog => write!(f, "trace log has no finish event"),
        }
    }
}

impl std::error::Error for TreeError {}
