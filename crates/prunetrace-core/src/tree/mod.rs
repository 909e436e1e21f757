pub mod alphabeta;
pub mod error;
pub mod ids;
pub mod node;
pub mod replay;
pub mod score;
pub mod snapshot;
pub mod stats;
pub mod trace;

#[cfg(test)]
mod tests;
