use super::balanced;
use crate::{EventKind, TraceEvent, TraceLog, TreeError, format_score, parse_score, search};

fn event(kind: EventKind) -> TraceEvent {
    TraceEvent {
        kind,
        node_id: "Root".into(),
        value: None,
        alpha: f64::NEG_INFINITY,
        beta: f64::INFINITY,
        maximizing: true,
        pruned_children: None,
        description: String::new(),
    }
}

#[test]
fn log_is_sealed_after_finish() {
    let mut log = TraceLog::new();
    log.push(event(EventKind::Visit)).expect("open log accepts events");
    assert!(!log.is_finished());

    log.push(event(EventKind::Finish)).expect("finish is accepted");
    assert!(log.is_finished());

    assert_eq!(log.push(event(EventKind::Visit)), Err(TreeError::LogSealed));
    assert_eq!(log.len(), 2);
}

#[test]
fn bound_updates_are_grouped() {
    assert!(EventKind::UpdateAlpha.is_bound_update());
    assert!(EventKind::UpdateBeta.is_bound_update());
    assert!(!EventKind::UpdateValue.is_bound_update());
    assert_eq!(EventKind::UpdateValue.as_str(), "update_value");
}

#[test]
fn infinities_round_trip_through_json() {
    let root = balanced(2, 2, &[3.0, 5.0, 2.0, 9.0]);
    let outcome = search(&root).expect("search should succeed");

    let json = serde_json::to_string(&outcome.log).expect("log serializes");
    assert!(json.contains(r#""alpha":"-inf""#));
    assert!(json.contains(r#""beta":"inf""#));
    assert!(json.contains(r#""kind":"update_beta""#));
    assert!(json.contains(r#""pruned_children":["Root_1_1"]"#));

    let restored: TraceLog = serde_json::from_str(&json).expect("log deserializes");
    assert_eq!(restored, outcome.log);
}

#[test]
fn visit_events_omit_value() {
    let value = serde_json::to_value(event(EventKind::Visit)).expect("event serializes");
    assert!(value.get("value").is_none());
    assert!(value.get("pruned_children").is_none());
    assert_eq!(value["maximizing"], serde_json::Value::Bool(true));
}

#[test]
fn score_text_forms() {
    assert_eq!(format_score(f64::NEG_INFINITY), "-inf");
    assert_eq!(format_score(f64::INFINITY), "inf");
    assert_eq!(format_score(5.0), "5");
    assert_eq!(format_score(2.5), "2.5");
    assert_eq!(parse_score("+inf"), Some(f64::INFINITY));
    assert_eq!(parse_score("-inf"), Some(f64::NEG_INFINITY));
    assert_eq!(parse_score("12"), Some(12.0));
    assert_eq!(parse_score("abc"), None);
}

#[test]
fn pruned_ids_accumulate_by_step() {
    let outcome = search(&balanced(2, 2, &[3.0, 5.0, 2.0, 9.0])).expect("search");
    let log = &outcome.log;
    let prune_step = log
        .iter()
        .position(|event| event.kind == EventKind::Prune)
        .expect("one cutoff");

    assert!(log.pruned_through(prune_step - 1).is_empty());
    let pruned: Vec<&str> = log
        .pruned_through(prune_step)
        .into_iter()
        .map(|id| id.as_str())
        .collect();
    assert_eq!(pruned, vec!["Root_1_1"]);
    assert_eq!(log.pruned_through(usize::MAX).len(), 1);
}
