use prunetrace_core::TreeError;
use thiserror::Error;

#[derive(Debug, Error)]
/// Error type for tree generation, YAML loading, documents and builder operations.
pub enum GenError {
    #[error("failed to read YAML file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("branching factor must be greater than 0")]
    InvalidBranchingFactor,

    #[error("depth {depth} exceeds the maximum of {max}")]
    TooDeep { depth: u32, max: u32 },

    #[error("a tree of depth {depth} and branching factor {branching_factor} exceeds {max} leaves")]
    TooManyLeaves {
        depth: u32,
        branching_factor: u32,
        max: usize,
    },

    #[error("invalid value range: min {min} is greater than max {max}")]
    InvalidValueRange { min: i64, max: i64 },

    #[error("node id must not be empty")]
    EmptyNodeId,

    #[error("builder has no root node")]
    MissingRoot,

    #[error("builder referenced unknown parent '{parent}'")]
    UnknownParent { parent: String },

    #[error("builder node '{parent}' is a leaf and cannot take children")]
    ParentIsLeaf { parent: String },

    #[error("duplicate node id '{id}'")]
    DuplicateNodeId { id: String },

    #[error("invalid tree: {0}")]
    Tree(#[from] TreeError),
}
