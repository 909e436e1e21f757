use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::GenError;

const DEFAULT_GENERATOR_CONFIG_YAML: &str = include_str!("../config/generator.default.yaml");

/// Deepest tree the generator will build.
pub const MAX_DEPTH: u32 = 32;

/// Largest number of leaves the generator will build.
pub const MAX_LEAVES: usize = 1_000_000;

/// Shape and value source for a generated tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub depth: u32,
    pub branching_factor: u32,
    /// `None` draws a fresh seed on every call.
    pub seed: Option<u64>,
    /// Inclusive range random leaf values are drawn from.
    pub min_value: i64,
    pub max_value: i64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            depth: 3,
            branching_factor: 2,
            seed: Some(42),
            min_value: 1,
            max_value: 99,
        }
    }
}

impl GeneratorConfig {
    /// Parse a generator config from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, GenError> {
        let config: GeneratorConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a generator config from a YAML file path.
    pub fn from_yaml_path(path: impl AsRef<Path>) -> Result<Self, GenError> {
        let yaml = fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Return the default YAML config included with this crate.
    pub fn default_yaml() -> &'static str {
        DEFAULT_GENERATOR_CONFIG_YAML
    }

    /// Parse the default YAML config included with this crate.
    pub fn from_default_yaml() -> Result<Self, GenError> {
        Self::from_yaml_str(Self::default_yaml())
    }

    /// Number of leaves this shape produces.
    pub fn leaf_count(&self) -> Result<usize, GenError> {
        leaf_count(self.depth, self.branching_factor)
    }

    pub fn validate(&self) -> Result<(), GenError> {
        if self.min_value > self.max_value {
            return Err(GenError::InvalidValueRange {
                min: self.min_value,
                max: self.max_value,
            });
        }
        self.leaf_count()?;
        Ok(())
    }
}

/// `branching_factor ^ depth`, bounded by `MAX_DEPTH` and `MAX_LEAVES`.
pub(crate) fn leaf_count(depth: u32, branching_factor: u32) -> Result<usize, GenError> {
    if branching_factor == 0 {
        return Err(GenError::InvalidBranchingFactor);
    }
    if depth > MAX_DEPTH {
        return Err(GenError::TooDeep {
            depth,
            max: MAX_DEPTH,
        });
    }

    (branching_factor as usize)
        .checked_pow(depth)
        .filter(|leaves| *leaves <= MAX_LEAVES)
        .ok_or(GenError::TooManyLeaves {
            depth,
            branching_factor,
            max: MAX_LEAVES,
        })
}
