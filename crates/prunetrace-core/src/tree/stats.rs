use serde::Serialize;

use crate::tree::trace::{EventKind, TraceLog};

/// Counters summarizing one search run, derived from its trace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    pub events: usize,
    pub nodes_visited: usize,
    pub leaves_evaluated: usize,
    pub value_updates: usize,
    pub bound_updates: usize,
    pub prunes: usize,
    /// Children skipped across all cutoffs (each heads a whole skipped subtree).
    pub pruned_children: usize,
}

impl SearchStats {
    pub fn from_log(log: &TraceLog) -> Self {
        let mut stats = SearchStats {
            events: log.len(),
            ..SearchStats::default()
        };

        for event in log {
            match event.kind {
                EventKind::Visit => stats.nodes_visited += 1,
                EventKind::Leaf => stats.leaves_evaluated += 1,
                EventKind::UpdateValue => stats.value_updates += 1,
                EventKind::UpdateAlpha | EventKind::UpdateBeta => stats.bound_updates += 1,
                EventKind::Prune => {
                    stats.prunes += 1;
                    stats.pruned_children += event.pruned_children.as_ref().map_or(0, Vec::len);
                }
                EventKind::Finish => {}
            }
        }

        stats
    }
}
