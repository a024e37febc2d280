use ordered_trees::avl_tree::AvlSet;
use ordered_trees::bst::BstSet;
use ordered_trees::BinaryTree;
use rand::Rng;

const NUM_OF_OPERATIONS: usize = 5_000;
const MAX_VALUE: u32 = 500;

fn height_bound(len: usize) -> f64 {
    1.44 * ((len + 2) as f64).log2()
}

#[test]
fn int_test_balanced_after_every_operation() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = AvlSet::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let value = rng.gen_range(0, MAX_VALUE);

        if rng.gen_range(0, 3) > 0 {
            set.insert(value);
        } else {
            set.remove(&value);
        }

        assert!(set.is_balanced());
        assert!(set.is_sorted());
        assert!((set.height() as f64) <= height_bound(set.len()));
    }
}

#[test]
fn int_test_sorted_insertion() {
    let mut avl = AvlSet::new();
    let mut bst = BstSet::new();

    for value in 0..1023 {
        avl.insert(value);
        bst.insert(value);
        assert!(avl.is_balanced());
    }

    assert_eq!(avl.height(), 10);
    assert_eq!(bst.height(), 1023);
    assert!(!bst.is_balanced());
    assert_eq!(avl.in_order(), bst.in_order());
}

#[test]
fn int_test_descending_removal() {
    let mut set: AvlSet<u32> = (0..4096).collect();

    for value in (0..4096).rev() {
        assert_eq!(set.remove(&value), Some(value));
        assert!((set.height() as f64) <= height_bound(set.len()));
        if value % 64 == 0 {
            assert!(set.is_balanced());
        }
    }

    assert!(set.is_empty());
    assert_eq!(set.height(), 0);
}

#[test]
fn int_test_large_sorted_insertion_height() {
    let set: AvlSet<u32> = (0..100_000).collect();
    assert_eq!(set.len(), 100_000);
    assert!((set.height() as f64) <= height_bound(set.len()));
    assert!(set.is_balanced());
}
