use std::collections::BTreeSet;

use crate::tree::{
    error::TreeError,
    ids::NodeId,
    trace::{EventKind, TraceEvent, TraceLog},
};

/// Read-only cursor over a finished trace, one event per step.
///
/// Pruning is accumulated here rather than in the trace: once a child is
/// skipped it stays marked for every later step.
#[derive(Debug, Clone)]
pub struct Replay<'a> {
    log: &'a TraceLog,
    step: usize,
}

impl<'a> Replay<'a> {
    /// Start at step 0 of a finished log.
    pub fn new(log: &'a TraceLog) -> Result<Self, TreeError> {
        if !log.is_finished() {
            return Err(TreeError::UnfinishedLog);
        }
        Ok(Replay { log, step: 0 })
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn total_steps(&self) -> usize {
        self.log.len()
    }

    pub fn current(&self) -> &'a TraceEvent {
        // a finished log is never empty and `step` stays in range
        &self.log.events()[self.step]
    }

    /// Advance one step; stays on the last step. Returns whether the cursor moved.
    pub fn next(&mut self) -> bool {
        if self.step + 1 < self.log.len() {
            self.step += 1;
            true
        } else {
            false
        }
    }

    /// Go back one step; stays on step 0. Returns whether the cursor moved.
    pub fn prev(&mut self) -> bool {
        if self.step > 0 {
            self.step -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to `step`, clamped to the last event.
    pub fn seek(&mut self, step: usize) -> usize {
        self.step = step.min(self.log.len() - 1);
        self.step
    }

    /// Whether the cursor sits on the `finish` event.
    pub fn is_finish(&self) -> bool {
        self.current().kind == EventKind::Finish
    }

    /// Children pruned by any cutoff up to and including the current step.
    pub fn pruned(&self) -> BTreeSet<&'a NodeId> {
        self.pruned_through(self.step)
    }

    /// Children pruned by any cutoff up to and including `step`.
    pub fn pruned_through(&self, step: usize) -> BTreeSet<&'a NodeId> {
        self.log.pruned_through(step)
    }
}
