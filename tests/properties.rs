use ordered_trees::avl_tree::AvlSet;
use ordered_trees::bst::BstSet;
use ordered_trees::{BinaryTree, Error};
use proptest::collection::vec;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Insert(u16),
    Remove(u16),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        2 => (0u16..512).prop_map(Op::Insert),
        1 => (0u16..512).prop_map(Op::Remove),
    ]
}

fn height_bound(len: usize) -> f64 {
    1.44 * ((len + 2) as f64).log2()
}

proptest! {
    // Checked after each call, not only once the sequence is done.
    #[test]
    fn prop_avl_invariants_hold_after_every_operation(ops in vec(op(), 0..256)) {
        let mut set = AvlSet::new();
        for op in ops {
            match op {
                Op::Insert(value) => {
                    set.insert(value);
                },
                Op::Remove(value) => {
                    set.remove(&value);
                },
            }
            prop_assert!(set.is_balanced());
            prop_assert!(set.is_sorted());
            prop_assert!((set.height() as f64) <= height_bound(set.len()));
        }
    }

    #[test]
    fn prop_in_order_is_sorted_input(values in vec(any::<u32>(), 0..512)) {
        let set: AvlSet<u32> = values.iter().cloned().collect();

        let mut expected = values;
        expected.sort_unstable();
        expected.dedup();

        prop_assert_eq!(set.len(), expected.len());
        prop_assert_eq!(set.in_order().into_iter().collect::<Vec<u32>>(), expected);
    }

    #[test]
    fn prop_insert_twice_is_noop(values in vec(any::<u32>(), 1..256)) {
        let mut set: AvlSet<u32> = values.iter().cloned().collect();
        let before = set.in_order();

        for value in &values {
            prop_assert!(!set.insert(*value));
        }

        prop_assert_eq!(set.in_order(), before);
    }

    #[test]
    fn prop_membership(
        inserted in vec(0u32..1000, 0..256),
        removed in vec(0u32..1000, 0..128),
    ) {
        let mut set: AvlSet<u32> = inserted.iter().cloned().collect();
        for value in &removed {
            set.remove(value);
        }

        for value in 0..1000 {
            let expected = inserted.contains(&value) && !removed.contains(&value);
            prop_assert_eq!(set.contains(&value), expected);
        }
    }

    #[test]
    fn prop_path_to_is_root_to_node_descent(values in vec(0u32..1000, 1..256), probe in 0u32..1000) {
        let set: AvlSet<u32> = values.iter().cloned().collect();

        match set.path_to(&probe) {
            Ok(path) => {
                let path = path.into_iter().collect::<Vec<u32>>();
                prop_assert!(values.contains(&probe));
                prop_assert_eq!(path.first(), set.iter_pre_order().next());
                prop_assert_eq!(path.last(), Some(&probe));
                prop_assert!(path.len() <= set.height());
                for pair in path.windows(2) {
                    prop_assert_eq!(probe < pair[0], pair[1] < pair[0]);
                }
            },
            Err(error) => {
                prop_assert_eq!(error, Error::NotFound);
                prop_assert!(!values.contains(&probe));
            },
        }
    }

    #[test]
    fn prop_avl_never_taller_than_bst(values in vec(any::<u16>(), 0..256)) {
        let avl: AvlSet<u16> = values.iter().cloned().collect();
        let bst: BstSet<u16> = values.iter().cloned().collect();

        prop_assert_eq!(avl.in_order(), bst.in_order());
        prop_assert!(avl.height() <= bst.height());
        prop_assert!(bst.is_sorted());
    }
}
