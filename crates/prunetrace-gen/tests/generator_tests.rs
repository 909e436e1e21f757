use prunetrace_core::GameNode;
use prunetrace_gen::{
    GenError, GeneratorConfig, MAX_DEPTH, MAX_LEAVES, NodeSpec, TreeBuilder, TreeDocument,
    TreeGenerator, generate, load_tree_str,
};

fn ids(root: &GameNode) -> Vec<String> {
    root.walk().map(|node| node.id().to_string()).collect()
}

#[test]
fn explicit_values_fill_leaves_in_pre_order() {
    let root = generate(2, 2, Some(&[3.0, 5.0, 2.0, 9.0]), None).expect("generate");

    assert_eq!(
        ids(&root),
        vec!["Root", "Root_0", "Root_0_0", "Root_0_1", "Root_1", "Root_1_0", "Root_1_1"]
    );
    assert_eq!(root.leaf_values(), vec![3.0, 5.0, 2.0, 9.0]);
    root.validate().expect("generated tree is well formed");
}

#[test]
fn depth_zero_is_a_single_leaf() {
    let root = generate(0, 3, Some(&[11.0]), None).expect("generate");
    assert!(root.is_leaf());
    assert_eq!(root.id().as_str(), "Root");
    assert_eq!(root.value(), Some(11.0));
}

#[test]
fn short_value_sequences_default_to_zero() {
    let root = generate(1, 3, Some(&[8.0]), None).expect("underflow is tolerated");
    assert_eq!(root.leaf_values(), vec![8.0, 0.0, 0.0]);

    let root = generate(1, 2, Some(&[1.0, 2.0, 3.0]), None).expect("extra values are ignored");
    assert_eq!(root.leaf_values(), vec![1.0, 2.0]);
}

#[test]
fn same_seed_gives_same_tree() {
    let a = generate(3, 2, None, Some(42)).expect("generate");
    let b = generate(3, 2, None, Some(42)).expect("generate");
    let c = generate(3, 2, None, Some(7)).expect("generate");

    assert_eq!(a, b);
    assert_ne!(a.leaf_values(), c.leaf_values());
    assert_eq!(a.leaf_count(), 8);
    assert!(
        a.leaf_values()
            .iter()
            .all(|value| (1.0..=99.0).contains(value) && value.fract() == 0.0)
    );
}

#[test]
fn unseeded_generation_still_has_the_requested_shape() {
    let root = generate(2, 3, None, None).expect("generate");
    assert_eq!(root.leaf_count(), 9);
    assert_eq!(root.height(), 2);
}

#[test]
fn invalid_shapes_are_rejected() {
    assert!(matches!(
        generate(2, 0, None, Some(1)),
        Err(GenError::InvalidBranchingFactor)
    ));
    assert!(matches!(
        generate(40, 2, None, Some(1)),
        Err(GenError::TooDeep { depth: 40, .. })
    ));
    assert!(matches!(
        generate(20, 10, None, Some(1)),
        Err(GenError::TooManyLeaves { max, .. }) if max == MAX_LEAVES
    ));
}

#[test]
fn generator_uses_configured_value_range() {
    let generator = TreeGenerator::new(GeneratorConfig {
        depth: 2,
        branching_factor: 3,
        seed: Some(5),
        min_value: -3,
        max_value: -3,
    })
    .expect("valid config");

    let root = generator.generate().expect("generate");
    assert_eq!(root.leaf_values(), vec![-3.0; 9]);
    assert_eq!(generator.draw_values().expect("draw"), vec![-3.0; 9]);
}

#[test]
fn default_yaml_config_parses() {
    let config = GeneratorConfig::from_default_yaml().expect("default yaml should parse");
    assert_eq!(config, GeneratorConfig::default());
}

#[test]
fn yaml_config_fills_missing_fields_and_validates() {
    let config = GeneratorConfig::from_yaml_str("depth: 4\nseed: null\n").expect("valid yaml");
    assert_eq!(config.depth, 4);
    assert_eq!(config.branching_factor, 2);
    assert_eq!(config.seed, None);

    let err = GeneratorConfig::from_yaml_str("min_value: 10\nmax_value: 1\n")
        .expect_err("inverted range should fail");
    assert!(matches!(err, GenError::InvalidValueRange { min: 10, max: 1 }));
}

#[test]
fn tree_document_round_trips_through_yaml() {
    let yaml = r#"
version: 1
root:
  id: Root
  children:
    - id: L
      children:
        - id: L_0
          value: 4
        - id: L_1
          value: .inf
    - id: R
      value: -2
"#;

    let root = load_tree_str(yaml).expect("valid document");
    assert_eq!(root.leaf_values(), vec![4.0, f64::INFINITY, -2.0]);

    let document = TreeDocument::from_tree(&root);
    let text = document.to_yaml_string().expect("serialize");
    let restored = load_tree_str(&text).expect("reparse");
    assert_eq!(restored, root);
}

#[test]
fn tree_document_rejects_malformed_nodes() {
    let valued_interior = r#"
root:
  id: Root
  value: 3
  children:
    - id: A
      value: 1
"#;
    let err = load_tree_str(valued_interior).expect_err("interior with value");
    assert!(matches!(err, GenError::Tree(_)));

    let empty_id = r#"
root:
  id: ""
  value: 1
"#;
    let err = load_tree_str(empty_id).expect_err("empty id");
    assert!(matches!(err, GenError::EmptyNodeId));
}

#[test]
fn builder_assembles_unbalanced_trees_in_insertion_order() {
    let mut builder = TreeBuilder::new("Root").expect("root");
    builder
        .add_interior("Root", "A")
        .expect("interior")
        .add_leaf("A", "A_0", 1.0)
        .expect("leaf")
        .add_leaf("A", "A_1", 2.0)
        .expect("leaf");
    builder.add_leaf("Root", "B", 5.0).expect("leaf");

    let root = builder.build().expect("build");
    assert_eq!(ids(&root), vec!["Root", "A", "A_0", "A_1", "B"]);
    assert_eq!(root.height(), 2);
}

#[test]
fn builder_rejects_bad_references() {
    let mut builder = TreeBuilder::new("Root").expect("root");
    builder.add_leaf("Root", "A", 1.0).expect("leaf");

    assert!(matches!(
        builder.add_leaf("missing", "B", 1.0),
        Err(GenError::UnknownParent { .. })
    ));
    assert!(matches!(
        builder.add_leaf("A", "B", 1.0),
        Err(GenError::ParentIsLeaf { .. })
    ));
    assert!(matches!(
        builder.add_leaf("Root", "A", 1.0),
        Err(GenError::DuplicateNodeId { .. })
    ));

    let mut dangling = TreeBuilder::new("Root").expect("root");
    dangling.add_interior("Root", "A").expect("interior");
    assert!(matches!(dangling.build(), Err(GenError::Tree(_))));
}

fn chain_document(depth: u32) -> TreeDocument {
    let mut node = NodeSpec {
        id: format!("N{depth}"),
        value: Some(1.0),
        children: Vec::new(),
    };
    for level in (0..depth).rev() {
        node = NodeSpec {
            id: format!("N{level}"),
            value: None,
            children: vec![node],
        };
    }
    TreeDocument {
        version: Some(1),
        root: node,
    }
}

#[test]
fn tree_document_depth_is_capped() {
    let deepest = chain_document(MAX_DEPTH).to_tree().expect("depth at the cap");
    assert_eq!(deepest.height(), MAX_DEPTH as usize);

    let err = chain_document(MAX_DEPTH + 1)
        .to_tree()
        .expect_err("one level too deep");
    assert!(matches!(err, GenError::TooDeep { depth, max } if depth == MAX_DEPTH + 1 && max == MAX_DEPTH));
}

#[test]
fn builder_depth_is_capped() {
    let mut builder = TreeBuilder::new("N0").expect("root");
    for level in 1..MAX_DEPTH {
        builder
            .add_interior(format!("N{}", level - 1), format!("N{level}"))
            .expect("interior");
    }
    let parent = format!("N{}", MAX_DEPTH - 1);

    let mut too_deep = builder.clone();
    too_deep
        .add_interior(parent.as_str(), "at_cap")
        .expect("interior at the cap");
    assert!(matches!(
        too_deep.add_leaf("at_cap", "below_cap", 1.0),
        Err(GenError::TooDeep { .. })
    ));

    builder.add_leaf(parent, "deepest", 1.0).expect("leaf at the cap");
    let root = builder.build().expect("build");
    assert_eq!(root.height(), MAX_DEPTH as usize);
}
