use prunetrace_core::{GameNode, NodeId};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use crate::{GenError, GeneratorConfig};

/// Build a balanced tree of `depth` levels with `branching_factor` children per node.
///
/// Leaves take `values` in pre-order. Without `values`, leaf values are drawn
/// from `1..=99` with a generator seeded from `seed`, so the same seed always
/// yields the same tree.
pub fn generate(
    depth: u32,
    branching_factor: u32,
    values: Option<&[f64]>,
    seed: Option<u64>,
) -> Result<GameNode, GenError> {
    let generator = TreeGenerator::new(GeneratorConfig {
        depth,
        branching_factor,
        seed,
        ..GeneratorConfig::default()
    })?;

    match values {
        Some(values) => generator.generate_with_values(values),
        None => generator.generate(),
    }
}

#[derive(Debug, Clone)]
/// Deterministic builder of balanced game trees from a validated config.
pub struct TreeGenerator {
    config: GeneratorConfig,
}

impl TreeGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, GenError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Draw the leaf values that `generate` would use.
    pub fn draw_values(&self) -> Result<Vec<f64>, GenError> {
        let leaves = self.config.leaf_count()?;
        let seed = self.config.seed.unwrap_or_else(rand::random);
        debug!(seed, leaves, "drawing leaf values");

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let values = (0..leaves)
            .map(|_| rng.gen_range(self.config.min_value..=self.config.max_value) as f64)
            .collect();
        Ok(values)
    }

    /// Build a tree with randomly drawn leaf values.
    pub fn generate(&self) -> Result<GameNode, GenError> {
        let values = self.draw_values()?;
        self.generate_with_values(&values)
    }

    /// Build a tree whose leaves take `values` in pre-order.
    /// Leaves past the end of `values` get `0.0`; extra values are ignored.
    pub fn generate_with_values(&self, values: &[f64]) -> Result<GameNode, GenError> {
        let leaves = self.config.leaf_count()?;
        if values.len() < leaves {
            warn!(
                provided = values.len(),
                leaves,
                "fewer values than leaves, remaining leaves default to 0"
            );
        }

        let mut values = values.iter().copied();
        let root = self.build(NodeId::root(), 0, &mut values);
        Ok(root)
    }

    fn build(&self, id: NodeId, level: u32, values: &mut impl Iterator<Item = f64>) -> GameNode {
        if level == self.config.depth {
            return GameNode::leaf(id, values.next().unwrap_or(0.0));
        }

        let children = (0..self.config.branching_factor as usize)
            .map(|i| self.build(id.child(i), level + 1, values))
            .collect();
        GameNode::interior(id, children)
    }
}
