mod builder;
mod config;
mod document;
mod error;
mod generator;
mod io;

pub use builder::TreeBuilder;
pub use config::{GeneratorConfig, MAX_DEPTH, MAX_LEAVES};
pub use document::{NodeSpec, TreeDocument};
pub use error::GenError;
pub use generator::{TreeGenerator, generate};
pub use io::{load_tree, load_tree_str, load_yaml, save_yaml};
