// Host-side tests for the expiring entity pool.

#![allow(dead_code)]
mod ephemeral {
    include!("../src/core/ephemeral.rs");
}

use ephemeral::*;

#[test]
fn ids_are_unique_and_increasing() {
    let mut pool: EphemeralPool<u8> = EphemeralPool::new(100.0);
    let a = pool.spawn(0.0, 1);
    let b = pool.spawn(0.0, 2);
    let batch = pool.spawn_all(5.0, [3, 4, 5]);
    assert!(a < b);
    assert_eq!(batch.as_slice(), &[2, 3, 4]);
    assert_eq!(pool.len(), 5);
}

#[test]
fn prune_removes_only_due_entries() {
    let mut pool = EphemeralPool::new(100.0);
    let early = pool.spawn(0.0, "early");
    let late = pool.spawn(50.0, "late");
    assert!(pool.prune(99.9).is_empty());
    assert_eq!(pool.prune(100.0).as_slice(), &[early]);
    assert!(pool.contains(late));
    assert_eq!(pool.get(late).map(|e| e.item), Some("late"));
    assert_eq!(pool.prune(150.0).as_slice(), &[late]);
    assert!(pool.is_empty());
}

#[test]
fn prune_does_not_assume_spawn_order() {
    let mut pool = EphemeralPool::new(10.0);
    // clocks are not guaranteed monotonic across event sources
    let later = pool.spawn(100.0, 'b');
    let earlier = pool.spawn(20.0, 'a');
    assert_eq!(pool.prune(30.0).as_slice(), &[earlier]);
    assert!(pool.contains(later));
}

#[test]
fn pruning_twice_is_harmless() {
    let mut pool = EphemeralPool::new(1.0);
    pool.spawn(0.0, ());
    assert_eq!(pool.prune(5.0).len(), 1);
    assert!(pool.prune(5.0).is_empty());
    assert!(pool.prune(1e12).is_empty());
}

#[test]
fn clear_returns_everything() {
    let mut pool = EphemeralPool::new(1_000.0);
    pool.spawn_all(0.0, 0..4);
    let ids = pool.clear();
    assert_eq!(ids, vec![0, 1, 2, 3]);
    assert!(pool.is_empty());
    assert_eq!(pool.lifetime_ms(), 1_000.0);
}
