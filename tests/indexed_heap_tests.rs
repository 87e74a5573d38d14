use detour_sssp::data_structures::IndexedMinHeap;
use detour_sssp::Error;
use rand::prelude::*;
use rand::rngs::StdRng;
use std::collections::HashMap;

#[test]
fn test_extract_in_key_order() {
    let mut heap = IndexedMinHeap::new(5);
    for (node, key) in [(0, 7), (1, 3), (2, 9), (3, 1), (4, 5)] {
        heap.insert(key, node).unwrap();
        assert!(heap.is_consistent());
    }

    let keys: Vec<u32> = std::iter::from_fn(|| heap.extract_min()).map(|(k, _)| k).collect();
    assert_eq!(keys, vec![1, 3, 5, 7, 9]);
    assert!(heap.is_empty());
    assert_eq!(heap.extract_min(), None);
}

#[test]
fn test_update_decreases_and_increases() {
    let mut heap = IndexedMinHeap::new(4);
    heap.insert(10, 0).unwrap();
    heap.insert(20, 1).unwrap();
    heap.insert(30, 2).unwrap();
    heap.insert(40, 3).unwrap();

    heap.update(5, 3).unwrap();
    assert_eq!(heap.peek(), Some((5, 3)));
    heap.update(50, 3).unwrap();
    assert_eq!(heap.peek(), Some((10, 0)));
    assert_eq!(heap.key_of(3), Some(50));
    assert!(heap.is_consistent());

    assert_eq!(heap.extract_min(), Some((10, 0)));
    assert!(!heap.contains(0));
    assert_eq!(heap.key_of(0), None);
}

#[test]
fn test_capacity_and_membership_errors() {
    let mut heap = IndexedMinHeap::new(2);
    heap.insert(1, 0).unwrap();
    assert!(matches!(heap.insert(2, 0), Err(Error::InvalidVertex(0))));
    assert!(matches!(heap.insert(2, 5), Err(Error::InvalidVertex(5))));
    heap.insert(2, 1).unwrap();
    assert!(matches!(heap.insert(3, 1), Err(Error::HeapCapacity(2))));

    heap.extract_min();
    assert!(matches!(heap.update(0, 0), Err(Error::HeapEntryMissing(0))));
    // A node can come back once it has been extracted
    heap.insert(0, 0).unwrap();
    assert_eq!(heap.len(), 2);
}

#[test]
fn test_random_operations_keep_heap_order() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let n = rng.gen_range(1..40);
        let mut heap = IndexedMinHeap::new(n);
        let mut model: HashMap<usize, u32> = HashMap::new();

        for _ in 0..200 {
            let node = rng.gen_range(0..n);
            let key = rng.gen_range(0..100u32);
            match rng.gen_range(0..3) {
                0 if !model.contains_key(&node) => {
                    heap.insert(key, node).unwrap();
                    model.insert(node, key);
                }
                1 if model.contains_key(&node) => {
                    heap.update(key, node).unwrap();
                    model.insert(node, key);
                }
                _ => {
                    let expected = model.values().min().copied();
                    let popped = heap.extract_min();
                    assert_eq!(popped.map(|(k, _)| k), expected);
                    if let Some((k, node)) = popped {
                        assert_eq!(model.remove(&node), Some(k));
                    }
                }
            }
            assert!(heap.is_consistent());
            assert_eq!(heap.len(), model.len());
        }
    }
}
