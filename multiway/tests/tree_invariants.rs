//! Scenario and property tests for the multiway tree.

use multiway::OrderedMultiwayTree;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[test]
fn month_demo_scenario() {
    let mut tree = OrderedMultiwayTree::new(4).unwrap();
    let months = [
        (6, "June"),
        (7, "July"),
        (8, "August"),
        (9, "September"),
        (10, "October"),
        (11, "November"),
        (12, "December"),
        (1, "January"),
        (2, "February"),
        (3, "March"),
        (4, "April"),
        (5, "May"),
    ];

    // The fourth and the ninth insertion split all the way out of the root.
    let growth_points = [9, 2];
    for (key, name) in months {
        let grew = tree.put(key, name);
        assert_eq!(grew, growth_points.contains(&key), "key {}", key);
    }

    assert_eq!(tree.search(&2), Some(&"February"));
    assert_eq!(tree.search(&13), None);
    assert_eq!(tree.size(), 12);
    assert_eq!(tree.height(), 2);
    assert_eq!(tree.leaf_count(), 5);
    tree.check_invariants_detailed().unwrap();

    for (key, name) in months {
        assert_eq!(tree.search(&key), Some(&name));
    }
}

#[test]
fn shuffled_inserts_round_trip() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut keys: Vec<i64> = (0..500).collect();
    keys.shuffle(&mut rng);

    let mut tree = OrderedMultiwayTree::new(4).unwrap();
    let mut last_height = 0;
    for &key in &keys {
        tree.put(key, key * 3);
        assert!(tree.height() >= last_height, "height regressed");
        assert!(tree.height() - last_height <= 1, "height jumped");
        last_height = tree.height();
    }

    assert_eq!(tree.size(), keys.len());
    tree.check_invariants_detailed().unwrap();

    let leaf_keys: Vec<i64> = tree.leaf_keys().into_iter().copied().collect();
    assert_eq!(leaf_keys, (0..500).collect::<Vec<_>>());

    for &key in &keys {
        assert_eq!(tree.search(&key), Some(&(key * 3)));
    }
    assert_eq!(tree.search(&500), None);
    assert_eq!(tree.search(&-1), None);
}

#[test]
fn overwrites_do_not_disturb_structure() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut keys: Vec<i32> = (0..200).collect();
    keys.shuffle(&mut rng);

    let mut tree = OrderedMultiwayTree::new(8).unwrap();
    for &key in &keys {
        tree.put(key, "original");
    }
    let size = tree.size();
    let height = tree.height();
    let leaves = tree.leaf_count();

    for key in (0..200).step_by(3) {
        assert!(!tree.put(key, "rewritten"));
    }

    assert_eq!(tree.size(), size);
    assert_eq!(tree.height(), height);
    assert_eq!(tree.leaf_count(), leaves);
    tree.check_invariants_detailed().unwrap();

    for key in 0..200 {
        let expected = if key % 3 == 0 { "rewritten" } else { "original" };
        assert_eq!(tree.search(&key), Some(&expected));
    }
}

#[test]
fn cleared_tree_grows_again_from_scratch() {
    let mut tree = OrderedMultiwayTree::new(4).unwrap();
    for key in 0..100 {
        tree.put(key, key);
    }
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);

    for key in (0..100).rev() {
        tree.put(key, key);
    }
    assert_eq!(tree.size(), 100);
    tree.check_invariants_detailed().unwrap();
}

#[test]
fn fanout_stays_bounded_after_every_put() {
    let mut tree = OrderedMultiwayTree::new(4).unwrap();
    for key in 0..300 {
        tree.put(key, ());
        // The audit rejects any node holding more than order - 1 entries.
        tree.check_invariants_detailed().unwrap();
    }
}
