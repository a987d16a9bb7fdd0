//! Map-sourced leaves, key-value adapters, and terminal evaluators.

use std::collections::HashMap;
use std::sync::Arc;

use riffle_core::kv::KeyValue;
use riffle_seq::{Error, Sequence};

fn sample_map() -> HashMap<&'static str, i32> {
    HashMap::from([("a", 1), ("b", 2), ("c", 3)])
}

#[test]
fn map_leaves_round_trip_through_to_map() {
    let source = sample_map();
    let seq = Sequence::from_map(&source);
    assert_eq!(seq.count(), 3);
    assert_eq!(seq.to_map(), source);

    let shared = Sequence::from_map_shared(Arc::new(source.clone()));
    assert_eq!(shared.to_map(), source);
}

#[test]
fn shared_map_leaf_pins_key_order_across_traversals() {
    let shared = Sequence::from_map_shared(Arc::new(sample_map()));
    assert_eq!(shared.keys().to_vec(), shared.keys().to_vec());
}

#[test]
fn snapshot_map_leaf_is_isolated_from_the_caller() {
    let mut source = sample_map();
    let seq = Sequence::from_map(&source);
    source.insert("d", 4);
    source.insert("a", 99);
    let snap = seq.to_map();
    assert_eq!(snap.len(), 3);
    assert_eq!(snap["a"], 1);
}

#[test]
fn keys_and_values_project_pairs() {
    let pairs = vec![KeyValue::new("x", 10), KeyValue::new("y", 20)];
    let seq = Sequence::from_vec(pairs);
    assert_eq!(seq.keys().to_vec(), vec!["x", "y"]);
    assert_eq!(seq.values().to_vec(), vec![10, 20]);
    assert_eq!(seq.keys().hint(), seq.hint());
}

#[test]
fn kv_pipelines_compose_like_any_other() {
    let seq = Sequence::from_map_shared(Arc::new(sample_map()));
    let big: HashMap<&str, i32> = seq
        .filter(|kv| kv.value >= 2)
        .map(|kv| KeyValue::new(kv.key, kv.value * 10))
        .to_map();
    assert_eq!(big, HashMap::from([("b", 20), ("c", 30)]));
}

#[test]
fn first_last_and_count_follow_traversal_order() {
    let seq = Sequence::from_vec(vec![7, 8, 9]);
    assert_eq!(seq.first(), Some(7));
    assert_eq!(seq.last(), Some(9));
    assert_eq!(seq.count(), 3);

    let empty = Sequence::<i32>::empty();
    assert_eq!(empty.first(), None);
    assert_eq!(empty.last(), None);
    assert_eq!(empty.count(), 0);
    assert!(!empty.any());
}

#[test]
fn predicates_short_circuit() {
    let seq = Sequence::from_vec(vec![1, 2, 3, 4]);
    assert!(seq.any_match(|x| *x == 3));
    assert!(!seq.any_match(|x| *x > 10));
    assert!(seq.all(|x| *x > 0));
    assert!(!seq.all(|x| *x % 2 == 0));
    assert!(Sequence::<i32>::empty().all(|_| false));
}

#[test]
fn fold_and_for_each_visit_everything_in_order() {
    let seq = Sequence::from_vec(vec![1, 2, 3, 4, 5]);
    assert_eq!(seq.fold(0, |acc, x| acc + x), 15);
    assert_eq!(seq.fold(1, |acc, x| acc * x), 120);

    let mut visited = Vec::new();
    seq.for_each(|x| visited.push(x));
    assert_eq!(visited, vec![1, 2, 3, 4, 5]);
}

#[test]
fn min_max_by_comparator_and_by_natural_order() {
    let seq = Sequence::from_vec(vec![5, 2, 8, 1, 9]);
    assert_eq!(seq.min(), Some(1));
    assert_eq!(seq.max(), Some(9));
    assert_eq!(seq.min_by(|a, b| b.cmp(a)), Some(9));
    assert_eq!(seq.max_by(|a, b| b.cmp(a)), Some(1));
    assert_eq!(Sequence::<i32>::empty().min(), None);
}

#[test]
fn sum_handles_empty_and_nonempty() {
    assert_eq!(Sequence::from_vec(vec![1, 2, 3, 4, 5]).sum(), 15);
    assert_eq!(Sequence::<i64>::empty().sum(), 0);
    assert_eq!(Sequence::from_vec(vec![1.5f64, 2.5]).sum(), 4.0);
}

#[test]
fn chunk_splits_with_a_short_tail() {
    let chunks = Sequence::range(1, 7).chunk(3).unwrap();
    assert_eq!(chunks, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]);

    let exact = Sequence::range(1, 6).chunk(3).unwrap();
    assert_eq!(exact.len(), 2);

    let empty = Sequence::<i64>::empty().chunk(3).unwrap();
    assert!(empty.is_empty());
}

#[test]
fn chunk_rejects_non_positive_sizes() {
    let seq = Sequence::from_vec(vec![1, 2, 3]);
    assert!(matches!(seq.chunk(0), Err(Error::InvalidArgument(_))));
    assert!(matches!(seq.chunk(-2), Err(Error::InvalidArgument(_))));
}

#[test]
fn to_map_by_keeps_the_last_value_per_key() {
    let seq = Sequence::from_vec(vec!["ant", "bee", "ape", "cow"]);
    let by_letter = seq.to_map_by(|w| w.as_bytes()[0], |w| w.to_string());
    assert_eq!(by_letter.len(), 3);
    assert_eq!(by_letter[&b'a'], "ape");
    assert_eq!(by_letter[&b'b'], "bee");
}

#[test]
fn to_vec_preallocates_but_never_lies() {
    // An upper-bound hint must not inflate the materialized result.
    let seq = Sequence::from_vec(vec![1, 2]).filter(|_| true).take(100);
    let materialized = seq.to_vec();
    assert_eq!(materialized, vec![1, 2]);
}
