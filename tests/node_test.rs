//! Tests for composite node operations

use std::rc::Rc;

use rstest::{fixture, rstest};

use rstree::node::{Node, NodeOps, NodeRef};
use rstree::util::testing;
use rstree::TreeError;

/// Root branch with two child branches of two leaves each.
#[fixture]
fn tree() -> NodeRef {
    testing::init_test_setup();

    let root = Node::branch();
    for _ in 0..2 {
        let branch = Node::branch();
        branch.add(&Node::leaf()).unwrap();
        branch.add(&Node::leaf()).unwrap();
        root.add(&branch).unwrap();
    }
    root
}

/// Chain of `length` nested branches with a leaf at the bottom.
fn nested_chain(length: usize) -> NodeRef {
    let root = Node::branch();
    let mut current = Rc::clone(&root);
    for _ in 1..length {
        let next = Node::branch();
        current.add(&next).unwrap();
        current = next;
    }
    current.add(&Node::leaf()).unwrap();
    root
}

// ============================================================
// Leaf contract
// ============================================================

#[test]
fn given_leaf_when_operate_then_returns_fixed_label() {
    let leaf = Node::leaf();

    assert_eq!(leaf.operate().unwrap(), "Leaf");
    assert!(!leaf.is_composite());
}

#[test]
fn given_leaf_when_add_then_fails_unsupported() {
    let leaf = Node::leaf();
    let other = Node::leaf();

    let result = leaf.add(&other);

    assert!(matches!(
        result,
        Err(TreeError::UnsupportedOperation("add"))
    ));
    // The rejected child must not have been claimed
    assert!(other.parent().is_none());
}

#[test]
fn given_leaf_when_remove_then_fails_unsupported() {
    let leaf = Node::leaf();
    let other = Node::leaf();

    assert!(matches!(
        leaf.remove(&other),
        Err(TreeError::UnsupportedOperation("remove"))
    ));
}

// ============================================================
// Branch aggregation
// ============================================================

#[test]
fn given_empty_branch_when_operate_then_returns_empty_parens() {
    let branch = Node::branch();

    assert_eq!(branch.operate().unwrap(), "Branch: ()");
}

#[rstest]
#[case(0, "Branch: ()")]
#[case(1, "Branch: (Leaf)")]
#[case(2, "Branch: (Leaf+Leaf)")]
#[case(4, "Branch: (Leaf+Leaf+Leaf+Leaf)")]
fn given_branch_with_n_leaves_when_operate_then_joins_with_separator(
    #[case] leaves: usize,
    #[case] expected: &str,
) {
    let branch = Node::branch();
    for _ in 0..leaves {
        branch.add(&Node::leaf()).unwrap();
    }

    assert_eq!(branch.operate().unwrap(), expected);
}

#[test]
fn given_mixed_children_when_operate_then_aggregates_in_insertion_order() {
    let branch = Node::branch();
    branch.add(&Node::leaf()).unwrap();
    branch.add(&Node::branch()).unwrap();

    assert_eq!(branch.operate().unwrap(), "Branch: (Leaf+Branch: ())");
}

#[rstest]
fn given_tree_when_operate_twice_then_results_identical(tree: NodeRef) {
    let first = tree.operate().unwrap();
    let second = tree.operate().unwrap();

    assert_eq!(first, second);
}

#[test]
fn given_two_branches_with_reversed_insertion_then_outputs_differ() {
    let ab = Node::branch();
    ab.add(&Node::leaf()).unwrap();
    ab.add(&Node::branch()).unwrap();

    let ba = Node::branch();
    ba.add(&Node::branch()).unwrap();
    ba.add(&Node::leaf()).unwrap();

    assert_ne!(ab.operate().unwrap(), ba.operate().unwrap());
}

#[rstest]
fn given_sample_tree_when_operate_then_full_aggregate(tree: NodeRef) {
    assert_eq!(
        tree.operate().unwrap(),
        "Branch: (Branch: (Leaf+Leaf)+Branch: (Leaf+Leaf))"
    );
}

// ============================================================
// Remove semantics
// ============================================================

#[rstest]
fn given_absent_child_when_remove_then_noop(tree: NodeRef) {
    let stranger = Node::leaf();
    let before = tree.operate().unwrap();

    tree.remove(&stranger).unwrap();

    assert_eq!(tree.operate().unwrap(), before);
}

#[test]
fn given_attached_child_when_remove_then_detached_and_reusable() {
    let first = Node::branch();
    let second = Node::branch();
    let leaf = Node::leaf();
    first.add(&leaf).unwrap();

    first.remove(&leaf).unwrap();

    assert!(leaf.parent().is_none());
    assert_eq!(first.operate().unwrap(), "Branch: ()");

    // A detached node can be grafted elsewhere
    second.add(&leaf).unwrap();
    assert_eq!(second.operate().unwrap(), "Branch: (Leaf)");
}

#[test]
fn given_duplicate_identity_when_remove_then_only_first_match_removed() {
    // Identity-based removal: only the handle that was added matches
    let branch = Node::branch();
    let kept = Node::leaf();
    let dropped = Node::leaf();
    branch.add(&kept).unwrap();
    branch.add(&dropped).unwrap();

    branch.remove(&dropped).unwrap();

    assert_eq!(branch.operate().unwrap(), "Branch: (Leaf)");
    assert!(branch
        .borrow()
        .children()
        .iter()
        .all(|c| Rc::ptr_eq(c, &kept)));
}

// ============================================================
// Ownership and cycle protection
// ============================================================

#[test]
fn given_child_with_parent_when_add_elsewhere_then_fails_already_attached() {
    let first = Node::branch();
    let second = Node::branch();
    let leaf = Node::leaf();
    first.add(&leaf).unwrap();

    let result = second.add(&leaf);

    assert!(matches!(result, Err(TreeError::AlreadyAttached)));
    assert!(Rc::ptr_eq(&leaf.parent().unwrap(), &first));
}

#[test]
fn given_branch_when_add_self_then_fails_cycle_detected() {
    let branch = Node::branch();

    assert!(matches!(
        branch.add(&branch),
        Err(TreeError::CycleDetected(_))
    ));
}

#[test]
fn given_descendant_when_add_ancestor_then_fails_cycle_detected() {
    let root = Node::branch();
    let middle = Node::branch();
    let bottom = Node::branch();
    root.add(&middle).unwrap();
    middle.add(&bottom).unwrap();

    let result = bottom.add(&root);

    assert!(matches!(result, Err(TreeError::CycleDetected(_))));
    assert!(root.parent().is_none());
}

#[test]
fn given_deep_chain_when_operate_with_small_limit_then_fails_cycle_detected() {
    let root = nested_chain(5);

    assert!(matches!(
        root.operate_with_limit(3),
        Err(TreeError::CycleDetected(_))
    ));
    assert!(root.operate_with_limit(6).is_ok());
    assert!(root.operate().is_ok());
}

// ============================================================
// Metrics
// ============================================================

#[rstest]
fn given_sample_tree_then_metrics_match_shape(tree: NodeRef) {
    assert_eq!(tree.depth(), 3);
    assert_eq!(tree.node_count(), 7);
    assert_eq!(tree.leaf_count(), 4);
}

#[test]
fn given_standalone_nodes_then_unit_metrics() {
    assert_eq!(Node::leaf().depth(), 1);
    assert_eq!(Node::branch().depth(), 1);
    assert_eq!(Node::leaf().node_count(), 1);
    assert_eq!(Node::branch().leaf_count(), 0);
}
