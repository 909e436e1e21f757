use serde::Serialize;

use crate::tree::{
    alphabeta::SearchOutcome,
    ids::NodeId,
    node::GameNode,
    stats::SearchStats,
    trace::TraceEvent,
};

/// Bumped whenever the exported layout changes.
pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

/// Serializable export of a tree and a finished search over it,
/// everything a viewer needs to render and scrub the run.
#[derive(Debug, Clone, Serialize)]
pub struct TraceSnapshot {
    pub schema_version: u32,
    pub root_id: NodeId,
    #[serde(with = "crate::tree::score")]
    pub value: f64,
    pub node_count: usize,
    pub tree: NodeSnapshot,
    pub stats: SearchStats,
    pub events: Vec<TraceEvent>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NodeSnapshot {
    pub id: NodeId,
    #[serde(
        with = "crate::tree::score::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<f64>,
    pub maximizing: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSnapshot>,
}

impl NodeSnapshot {
    fn capture(node: &GameNode, maximizing: bool) -> Self {
        NodeSnapshot {
            id: node.id().clone(),
            value: node.value(),
            maximizing,
            children: node
                .children()
                .iter()
                .map(|child| NodeSnapshot::capture(child, !maximizing))
                .collect(),
        }
    }
}

impl TraceSnapshot {
    pub fn capture(root: &GameNode, outcome: &SearchOutcome) -> Self {
        TraceSnapshot {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            root_id: root.id().clone(),
            value: outcome.value,
            node_count: root.node_count(),
            tree: NodeSnapshot::capture(root, true),
            stats: SearchStats::from_log(&outcome.log),
            events: outcome.log.events().to_vec(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
