mod tree;

pub use tree::alphabeta::{SearchOutcome, Side, minimax_value, search, search_into};
pub use tree::error::TreeError;
pub use tree::ids::{NodeId, ROOT_ID};
pub use tree::node::{GameNode, Walk};
pub use tree::replay::Replay;
pub use tree::score::{format_score, parse_score};
pub use tree::snapshot::{NodeSnapshot, SNAPSHOT_SCHEMA_VERSION, TraceSnapshot};
pub use tree::stats::SearchStats;
pub use tree::trace::{EventKind, TraceEvent, TraceLog};
