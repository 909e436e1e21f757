use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::tree::{
    error::TreeError,
    ids::NodeId,
    node::GameNode,
    score::format_score,
    trace::{EventKind, TraceEvent, TraceLog},
};

/// Which player acts at a node. The root is always `Max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Max,
    Min,
}

impl Side {
    pub fn is_maximizing(self) -> bool {
        self == Side::Max
    }

    /// The side that moves at the children of a node.
    pub fn opponent(self) -> Side {
        match self {
            Side::Max => Side::Min,
            Side::Min => Side::Max,
        }
    }

    /// Starting value of the running best before any child is evaluated.
    fn worst(self) -> f64 {
        match self {
            Side::Max => f64::NEG_INFINITY,
            Side::Min => f64::INFINITY,
        }
    }

    /// Strict comparison in this side's direction; ties never improve.
    fn improves(self, candidate: f64, current: f64) -> bool {
        match self {
            Side::Max => candidate > current,
            Side::Min => candidate < current,
        }
    }

    fn bound_event(self) -> EventKind {
        match self {
            Side::Max => EventKind::UpdateAlpha,
            Side::Min => EventKind::UpdateBeta,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Side::Max => "MAX",
            Side::Min => "MIN",
        }
    }
}

/// Result of a complete run: the root's game value and the finished trace.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub value: f64,
    pub log: TraceLog,
}

/// Search `root` with fully open bounds and return its value together with the trace.
pub fn search(root: &GameNode) -> Result<SearchOutcome, TreeError> {
    let mut log = TraceLog::new();
    let value = search_into(root, f64::NEG_INFINITY, f64::INFINITY, &mut log)?;
    Ok(SearchOutcome { value, log })
}

/// Search `root` as the maximizer, appending every step to `log`.
///
/// `log` must be empty. The whole tree is validated before the first event, so a
/// malformed tree leaves `log` untouched. The final `finish` event carries the
/// returned value and the `alpha`/`beta` passed in here, not the bounds reached
/// during the search.
pub fn search_into(
    root: &GameNode,
    alpha: f64,
    beta: f64,
    log: &mut TraceLog,
) -> Result<f64, TreeError> {
    if alpha.is_nan() || beta.is_nan() {
        return Err(TreeError::InvalidBounds { alpha, beta });
    }
    if !log.is_empty() {
        return Err(TreeError::LogNotEmpty { len: log.len() });
    }
    root.validate()?;

    debug!(root = %root.id(), alpha, beta, "alpha-beta search started");

    let mut searcher = Searcher { log: &mut *log };
    let value = searcher.node(root, Side::Max, alpha, beta)?;
    searcher.emit(Step {
        kind: EventKind::Finish,
        node_id: root.id(),
        side: Side::Max,
        value: Some(value),
        alpha,
        beta,
        pruned_children: None,
        description: format!(
            "search finished, the root chose value {}",
            format_score(value)
        ),
    })?;

    debug!(
        value,
        events = log.len(),
        "alpha-beta search finished"
    );
    Ok(value)
}

/// Plain minimax over the whole tree, without pruning or tracing.
pub fn minimax_value(root: &GameNode) -> Result<f64, TreeError> {
    minimax(root, Side::Max)
}

fn minimax(node: &GameNode, side: Side) -> Result<f64, TreeError> {
    if let Some(value) = node.check_shape()? {
        return Ok(value);
    }
    let mut best = side.worst();
    for child in node.children() {
        let value = minimax(child, side.opponent())?;
        if side.improves(value, best) {
            best = value;
        }
    }
    Ok(best)
}

struct Step<'n> {
    kind: EventKind,
    node_id: &'n NodeId,
    side: Side,
    value: Option<f64>,
    alpha: f64,
    beta: f64,
    pruned_children: Option<Vec<NodeId>>,
    description: String,
}

struct Searcher<'a> {
    log: &'a mut TraceLog,
}

impl Searcher<'_> {
    fn emit(&mut self, step: Step<'_>) -> Result<(), TreeError> {
        self.log.push(TraceEvent {
            kind: step.kind,
            node_id: step.node_id.clone(),
            value: step.value,
            alpha: step.alpha,
            beta: step.beta,
            maximizing: step.side.is_maximizing(),
            pruned_children: step.pruned_children,
            description: step.description,
        })
    }

    /// Max and min levels share this body; `side` picks the comparison direction
    /// and which bound is tightened.
    fn node(
        &mut self,
        node: &GameNode,
        side: Side,
        mut alpha: f64,
        mut beta: f64,
    ) -> Result<f64, TreeError> {
        let id = node.id();
        self.emit(Step {
            kind: EventKind::Visit,
            node_id: id,
            side,
            value: None,
            alpha,
            beta,
            pruned_children: None,
            description: format!("[{}] arrived at node {id}", side.label()),
        })?;

        if let Some(value) = node.check_shape()? {
            self.emit(Step {
                kind: EventKind::Leaf,
                node_id: id,
                side,
                value: Some(value),
                alpha,
                beta,
                pruned_children: None,
                description: format!("leaf {id} has value {}", format_score(value)),
            })?;
            return Ok(value);
        }

        let mut best = side.worst();
        let children = node.children();

        for (i, child) in children.iter().enumerate() {
            let child_value = self.node(child, side.opponent(), alpha, beta)?;

            if side.improves(child_value, best) {
                let previous = best;
                best = child_value;
                let relation = match side {
                    Side::Max => "greater",
                    Side::Min => "less",
                };
                self.emit(Step {
                    kind: EventKind::UpdateValue,
                    node_id: id,
                    side,
                    value: Some(best),
                    alpha,
                    beta,
                    pruned_children: None,
                    description: format!(
                        "child value {} is {relation} than the running value {}, value updated",
                        format_score(child_value),
                        format_score(previous)
                    ),
                })?;
            }

            let (previous, tightened) = match side {
                Side::Max => {
                    let previous = alpha;
                    alpha = alpha.max(best);
                    (previous, alpha)
                }
                Side::Min => {
                    let previous = beta;
                    beta = beta.min(best);
                    (previous, beta)
                }
            };

            if side.improves(tightened, previous) {
                let description = match side {
                    Side::Max => format!(
                        "value exceeds alpha, alpha raised {} -> {}",
                        format_score(previous),
                        format_score(tightened)
                    ),
                    Side::Min => format!(
                        "value is below beta, beta lowered {} -> {}",
                        format_score(previous),
                        format_score(tightened)
                    ),
                };
                self.emit(Step {
                    kind: side.bound_event(),
                    node_id: id,
                    side,
                    value: Some(best),
                    alpha,
                    beta,
                    pruned_children: None,
                    description,
                })?;
            }

            if beta <= alpha {
                let skipped: Vec<NodeId> = children[i + 1..]
                    .iter()
                    .map(|sibling| sibling.id().clone())
                    .collect();
                trace!(node = %id, alpha, beta, skipped = skipped.len(), "cutoff");

                let cutoff = match side {
                    Side::Max => "beta cutoff",
                    Side::Min => "alpha cutoff",
                };
                self.emit(Step {
                    kind: EventKind::Prune,
                    node_id: id,
                    side,
                    value: Some(best),
                    alpha,
                    beta,
                    description: format!(
                        "{cutoff} (beta {} <= alpha {}), skipping {} remaining children",
                        format_score(beta),
                        format_score(alpha),
                        skipped.len()
                    ),
                    pruned_children: Some(skipped),
                })?;
                break;
            }
        }

        Ok(best)
    }
}
