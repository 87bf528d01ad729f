//! The same growth scenarios replayed across several orders.

use multiway::OrderedMultiwayTree;
use paste::paste;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

macro_rules! order_scenarios {
    ($($order:literal),+ $(,)?) => {
        paste! {
            $(
                #[test]
                fn [<first_split_at_order_ $order>]() {
                    let mut tree = OrderedMultiwayTree::new($order).unwrap();
                    for key in 0..($order as i32 - 1) {
                        assert!(!tree.put(key, key));
                        assert_eq!(tree.height(), 0);
                    }
                    // Entry number M fills the root leaf and splits it in two.
                    assert!(tree.put($order as i32 - 1, $order as i32 - 1));
                    assert_eq!(tree.height(), 1);
                    assert_eq!(tree.leaf_count(), 2);
                    assert!(tree.check_invariants());
                }

                #[test]
                fn [<shuffled_round_trip_at_order_ $order>]() {
                    let mut rng = StdRng::seed_from_u64($order as u64);
                    let mut keys: Vec<i64> = (0..300).collect();
                    keys.shuffle(&mut rng);

                    let mut tree = OrderedMultiwayTree::new($order).unwrap();
                    for &key in &keys {
                        tree.put(key, key * 7);
                    }

                    assert_eq!(tree.size(), keys.len());
                    tree.check_invariants_detailed().unwrap();
                    for &key in &keys {
                        assert_eq!(tree.search(&key), Some(&(key * 7)));
                    }
                }
            )+
        }
    };
}

order_scenarios!(4, 8, 16);
