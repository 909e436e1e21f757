use std::{fs, path::Path};

use prunetrace_core::GameNode;

use crate::{GenError, TreeDocument};

/// Load a tree document from YAML on disk.
pub fn load_yaml(path: impl AsRef<Path>) -> Result<TreeDocument, GenError> {
    let yaml = fs::read_to_string(path)?;
    TreeDocument::from_yaml_str(&yaml)
}

/// Load and validate a tree from a YAML file.
pub fn load_tree(path: impl AsRef<Path>) -> Result<GameNode, GenError> {
    load_yaml(path)?.to_tree()
}

/// Parse and validate a tree from YAML text.
pub fn load_tree_str(yaml: &str) -> Result<GameNode, GenError> {
    TreeDocument::from_yaml_str(yaml)?.to_tree()
}

/// Serialize and write a tree document to YAML.
pub fn save_yaml(path: impl AsRef<Path>, document: &TreeDocument) -> Result<(), GenError> {
    let yaml = document.to_yaml_string()?;
    fs::write(path, yaml)?;
    Ok(())
}
