//! Ownership lifecycle: every element is dropped exactly once, copies clone
//! exactly the live elements, and moves never touch the elements.

use dynarr::DynArray;
use dynarr_test_utils::{clone_count, live_count, reset_counters, tracked, Tracked};

#[test]
fn drop_releases_every_slot() {
    reset_counters();
    {
        let mut array: DynArray<Tracked> = DynArray::with_len(5).unwrap();
        array.insert_many_back(tracked(20)).unwrap();
        array.erase(array.begin());
        array.pop_back();
        array.shrink_to_fit().unwrap();
        assert!(live_count() > 0);
    }
    assert_eq!(live_count(), 0);
}

#[test]
fn clear_keeps_stale_values_until_release() {
    reset_counters();
    let mut array = DynArray::from_values(tracked(4)).unwrap();
    array.clear();
    assert_eq!(live_count(), 4);
    array.shrink_to_fit().unwrap();
    assert_eq!(live_count(), 0);
    assert_eq!(array.capacity(), 0);
}

#[test]
fn copy_clones_only_live_elements() {
    reset_counters();
    let mut source = DynArray::from_values(tracked(6)).unwrap();
    source.reserve(32).unwrap();
    let copy = source.try_clone().unwrap();
    assert_eq!(clone_count(), 6);
    assert_eq!(copy.capacity(), 32);
    assert_eq!(copy, source);
}

#[test]
fn reallocation_moves_without_cloning() {
    reset_counters();
    let mut array = DynArray::new();
    for value in tracked(100) {
        array.push_back(value).unwrap();
    }
    array.insert_many(array.begin() + 50, tracked(30)).unwrap();
    array.reserve(1_000).unwrap();
    assert_eq!(clone_count(), 0);
    assert_eq!(array.size(), 130);
}

#[test]
fn move_never_touches_elements() {
    reset_counters();
    let mut source = DynArray::from_values(tracked(10)).unwrap();
    let live = live_count();
    let mut dest = DynArray::new();
    dest.move_from(&mut source);
    let taken = dest.take();
    assert_eq!(live_count(), live);
    assert_eq!(clone_count(), 0);
    assert_eq!(taken.size(), 10);
    assert!(dest.empty() && source.empty());
}

#[test]
fn move_assignment_drops_previous_destination() {
    reset_counters();
    let mut dest = DynArray::from_values(tracked(8)).unwrap();
    let mut source = DynArray::from_values(tracked(2)).unwrap();
    dest.move_from(&mut source);
    // Only the source's buffer (capacity 2) is still alive.
    assert_eq!(live_count(), 2);
    drop(dest);
    assert_eq!(live_count(), 0);
}

#[test]
fn into_iter_drops_stale_slots() {
    reset_counters();
    let mut array = DynArray::from_values(tracked(5)).unwrap();
    array.pop_back();
    let values: Vec<Tracked> = array.into_iter().collect();
    assert_eq!(values.len(), 4);
    assert_eq!(live_count(), 4);
    assert_eq!(values[3], 3i64);
}
