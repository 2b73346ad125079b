use crate::ast::operation::Value;
use crate::explorer::CachedNode;
use crate::explorer::UndoCache;
use crate::test_utils::path;

fn input_value(name: &str) -> CachedNode {
    CachedNode::InputValue((name.to_string(), Value::Boolean(true)))
}

#[test]
fn removal_overwrites_the_slot() {
    let mut cache = UndoCache::new();
    cache.record_removal(path("query/user/arg:id"), input_value("first"));
    cache.record_removal(path("query/user/arg:id"), input_value("second"));

    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get(&path("query/user/arg:id")), Some(&input_value("second")));
}

#[test]
fn removal_evicts_descendant_slots_only() {
    let mut cache = UndoCache::new();
    cache.record_removal(path("query/viewer/friends/name"), input_value("a"));
    cache.record_removal(path("query/viewer/avatar/arg:size"), input_value("b"));
    cache.record_removal(path("query/viewer2"), input_value("c"));
    cache.record_removal(path("mutation/viewer/name"), input_value("d"));

    cache.record_removal(path("query/viewer"), input_value("e"));

    assert_eq!(cache.get(&path("query/viewer/friends/name")), None);
    assert_eq!(cache.get(&path("query/viewer/avatar/arg:size")), None);
    assert!(cache.get(&path("query/viewer2")).is_some());
    assert!(cache.get(&path("mutation/viewer/name")).is_some());
    assert!(cache.get(&path("query/viewer")).is_some());
    assert_eq!(cache.len(), 3);
}

#[test]
fn clear_empties_every_slot() {
    let mut cache = UndoCache::new();
    cache.record_removal(path("query/ping"), input_value("a"));
    assert!(!cache.is_empty());
    cache.clear();
    assert!(cache.is_empty());
}
