use std::collections::BTreeSet;
use std::slice::Iter;

use serde::{Deserialize, Serialize};

use crate::tree::{error::TreeError, ids::NodeId};

/// What happened at one step of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A node was entered.
    Visit,
    /// A leaf value was read.
    Leaf,
    /// The running best value of a node strictly improved.
    UpdateValue,
    /// Alpha strictly rose at a maximizing node.
    UpdateAlpha,
    /// Beta strictly fell at a minimizing node.
    UpdateBeta,
    /// Remaining children were skipped because `beta <= alpha`.
    Prune,
    /// The search returned to the caller.
    Finish,
}

impl EventKind {
    /// Whether this is a bound update (alpha at max nodes, beta at min nodes).
    pub fn is_bound_update(self) -> bool {
        matches!(self, EventKind::UpdateAlpha | EventKind::UpdateBeta)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Visit => "visit",
            EventKind::Leaf => "leaf",
            EventKind::UpdateValue => "update_value",
            EventKind::UpdateAlpha => "update_alpha",
            EventKind::UpdateBeta => "update_beta",
            EventKind::Prune => "prune",
            EventKind::Finish => "finish",
        }
    }
}

/// One immutable record describing a single moment of the search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEvent {
    pub kind: EventKind,
    pub node_id: NodeId,
    /// Running best value at the node, or the leaf value on `leaf` events.
    #[serde(
        default,
        with = "crate::tree::score::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<f64>,
    #[serde(with = "crate::tree::score")]
    pub alpha: f64,
    #[serde(with = "crate::tree::score")]
    pub beta: f64,
    pub maximizing: bool,
    /// Children skipped by this cutoff; only set on `prune` events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pruned_children: Option<Vec<NodeId>>,
    pub description: String,
}

/// Append-only, totally ordered record of one search run.
/// Sealed once the run's `finish` event has been appended.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraceLog {
    events: Vec<TraceEvent>,
}

impl TraceLog {
    /// Create an empty log for a fresh run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event; only the engine writes to a log.
    pub(crate) fn push(&mut self, event: TraceEvent) -> Result<(), TreeError> {
        if self.is_finished() {
            return Err(TreeError::LogSealed);
        }
        self.events.push(event);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TraceEvent> {
        self.events.get(index)
    }

    pub fn last(&self) -> Option<&TraceEvent> {
        self.events.last()
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn iter(&self) -> Iter<'_, TraceEvent> {
        self.events.iter()
    }

    /// Whether the run's `finish` event has been appended.
    pub fn is_finished(&self) -> bool {
        self.events
            .last()
            .is_some_and(|event| event.kind == EventKind::Finish)
    }

    pub fn into_events(self) -> Vec<TraceEvent> {
        self.events
    }

    /// Children pruned by any cutoff at or before `step`.
    pub fn pruned_through(&self, step: usize) -> BTreeSet<&NodeId> {
        self.events
            .iter()
            .take(step.saturating_add(1))
            .filter_map(|event| event.pruned_children.as_ref())
            .flatten()
            .collect()
    }

    /// Count events of one kind.
    pub fn count(&self, kind: EventKind) -> usize {
        self.events.iter().filter(|event| event.kind == kind).count()
    }
}

impl<'a> IntoIterator for &'a TraceLog {
    type Item = &'a TraceEvent;
    type IntoIter = Iter<'a, TraceEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
