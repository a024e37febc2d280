use log::{info, warn};
use ordered_trees::avl_tree::AvlSet;
use ordered_trees::bst::BstSet;
use ordered_trees::BinaryTree;
use std::env;

const DEFAULT_NUM_OF_VALUES: u32 = 1023;

// The unbalanced tree recurses once per level and sorted input makes every value a level.
const MAX_BST_VALUES: u32 = 10_000;

fn report<B>(name: &str, tree: &B)
where
    B: BinaryTree<u32>,
{
    println!(
        "{}: len = {}, height = {}, sorted = {}, balanced = {}",
        name,
        tree.len(),
        tree.height(),
        tree.is_sorted(),
        tree.is_balanced(),
    );
}

fn main() {
    env_logger::init();

    let num_of_values = match env::args().nth(1) {
        Some(arg) => match arg.parse() {
            Ok(num_of_values) => num_of_values,
            Err(error) => {
                warn!("ignoring invalid value count {:?}: {}", arg, error);
                DEFAULT_NUM_OF_VALUES
            },
        },
        None => DEFAULT_NUM_OF_VALUES,
    };
    info!("inserting {} values in ascending order", num_of_values);

    let mut avl = AvlSet::new();
    for value in 0..num_of_values {
        avl.insert(value);
    }
    report("avl", &avl);

    if num_of_values > MAX_BST_VALUES {
        warn!("skipping bst: more than {} values", MAX_BST_VALUES);
        return;
    }

    let mut bst = BstSet::new();
    for value in 0..num_of_values {
        bst.insert(value);
    }
    report("bst", &bst);
}
