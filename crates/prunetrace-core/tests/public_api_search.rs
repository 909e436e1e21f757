use prunetrace_core::{
    EventKind, GameNode, Replay, SearchStats, Side, TraceLog, minimax_value, search, search_into,
};

fn demo_tree() -> GameNode {
    GameNode::interior(
        "Root",
        vec![
            GameNode::interior(
                "Root_0",
                vec![GameNode::leaf("Root_0_0", 3.0), GameNode::leaf("Root_0_1", 5.0)],
            ),
            GameNode::interior(
                "Root_1",
                vec![GameNode::leaf("Root_1_0", 2.0), GameNode::leaf("Root_1_1", 9.0)],
            ),
        ],
    )
}

#[test]
fn public_search_returns_value_and_finished_log() {
    let root = demo_tree();
    let outcome = search(&root).expect("search should succeed");

    assert_eq!(outcome.value, 3.0);
    assert_eq!(outcome.value, minimax_value(&root).expect("minimax"));
    assert!(outcome.log.is_finished());
    assert_eq!(outcome.log.get(0).map(|event| event.kind), Some(EventKind::Visit));
}

#[test]
fn public_search_into_matches_search() {
    let root = demo_tree();
    let mut log = TraceLog::new();
    let value = search_into(&root, f64::NEG_INFINITY, f64::INFINITY, &mut log)
        .expect("search should succeed");

    let outcome = search(&root).expect("search should succeed");
    assert_eq!(value, outcome.value);
    assert_eq!(log, outcome.log);
}

#[test]
fn public_events_alternate_sides_by_depth() {
    let root = demo_tree();
    let outcome = search(&root).expect("search should succeed");

    for event in outcome.log.iter().filter(|event| event.kind == EventKind::Visit) {
        let depth = event.node_id.as_str().matches('_').count();
        let side = if depth % 2 == 0 { Side::Max } else { Side::Min };
        assert_eq!(event.maximizing, side.is_maximizing(), "{}", event.node_id);
    }
    assert_eq!(Side::Max.opponent(), Side::Min);
}

#[test]
fn public_replay_and_stats_agree() {
    let root = demo_tree();
    let outcome = search(&root).expect("search should succeed");
    let stats = SearchStats::from_log(&outcome.log);

    assert_eq!(stats.events, outcome.log.len());
    assert_eq!(stats.nodes_visited, 6);
    assert_eq!(stats.leaves_evaluated, 3);
    assert_eq!(stats.value_updates, 3);
    assert_eq!(stats.bound_updates, 3);
    assert_eq!(stats.prunes, 1);

    let mut replay = Replay::new(&outcome.log).expect("finished log");
    let mut steps = 1;
    while replay.next() {
        steps += 1;
    }
    assert_eq!(steps, outcome.log.len());
    assert!(replay.is_finish());
    assert_eq!(replay.pruned().len(), stats.pruned_children);
}
