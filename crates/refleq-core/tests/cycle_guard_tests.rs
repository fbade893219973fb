//! Cyclic and shared structures: the walk must terminate and still find
//! real differences inside cycles.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use refleq_core::{reflect_composite, ReflectionComparator};

struct Node {
    label: String,
    next: RefCell<Option<Rc<Node>>>,
}
reflect_composite!(Node { label, next });

/// Builds a singly-linked ring out of the given labels.
fn ring(labels: &[&str]) -> Rc<Node> {
    let first = Rc::new(Node {
        label: labels[0].to_string(),
        next: RefCell::new(None),
    });
    let mut prev = Rc::clone(&first);
    for label in &labels[1..] {
        let node = Rc::new(Node {
            label: (*label).to_string(),
            next: RefCell::new(None),
        });
        *prev.next.borrow_mut() = Some(Rc::clone(&node));
        prev = node;
    }
    *prev.next.borrow_mut() = Some(Rc::clone(&first));
    first
}

#[test]
fn test_isomorphic_rings_are_equal() {
    let left = ring(&["a", "b", "c"]);
    let right = ring(&["a", "b", "c"]);
    assert!(ReflectionComparator::new().is_equal(&left, &right));
}

#[test]
fn test_same_ring_is_equal_to_itself() {
    let only = ring(&["a", "b"]);
    assert!(ReflectionComparator::new().is_equal(&only, &Rc::clone(&only)));
}

#[test]
fn test_divergent_ring_label_is_found() {
    let left = ring(&["a", "b"]);
    let right = ring(&["a", "c"]);
    let diff = ReflectionComparator::new().compare(&left, &right).unwrap();
    let leaves = diff.leaves();
    assert_eq!(leaves.len(), 1);
    assert_eq!(leaves[0].path_string(), "next.label");
    assert_eq!(leaves[0].expected_value(), "\"b\"");
    assert_eq!(leaves[0].actual_value(), "\"c\"");
}

struct TreeNode {
    name: String,
    children: RefCell<Vec<Rc<TreeNode>>>,
    parent: RefCell<Weak<TreeNode>>,
}
reflect_composite!(TreeNode {
    name,
    children,
    parent
});

fn parented_pair(root_name: &str, child_name: &str) -> Rc<TreeNode> {
    let root = Rc::new(TreeNode {
        name: root_name.to_string(),
        children: RefCell::new(Vec::new()),
        parent: RefCell::new(Weak::new()),
    });
    let child = Rc::new(TreeNode {
        name: child_name.to_string(),
        children: RefCell::new(Vec::new()),
        parent: RefCell::new(Rc::downgrade(&root)),
    });
    root.children.borrow_mut().push(child);
    root
}

#[test]
fn test_parent_back_edges_terminate() {
    let left = parented_pair("root", "leaf");
    let right = parented_pair("root", "leaf");
    assert!(ReflectionComparator::new().is_equal(&left, &right));
}

#[test]
fn test_difference_behind_a_back_edge() {
    let left = parented_pair("root", "leaf");
    let right = parented_pair("root", "sprout");
    let diff = ReflectionComparator::new().compare(&left, &right).unwrap();
    let leaves = diff.leaves();
    assert!(!leaves.is_empty());
    assert!(leaves
        .iter()
        .any(|leaf| leaf.path_string() == "children[0].name"));
}

#[test]
fn test_shared_subtree_compares_once() {
    let shared = Rc::new(Node {
        label: "shared".to_string(),
        next: RefCell::new(None),
    });
    let left = vec![Rc::clone(&shared), Rc::clone(&shared)];
    let right = vec![Rc::clone(&shared), Rc::clone(&shared)];
    assert!(ReflectionComparator::new().is_equal(&left, &right));
}

#[test]
fn test_dangling_weak_matches_nothing_concrete() {
    let orphan = TreeNode {
        name: "orphan".to_string(),
        children: RefCell::new(Vec::new()),
        parent: RefCell::new(Weak::new()),
    };
    let root = parented_pair("orphan", "kid");
    let diff = ReflectionComparator::new().compare(&orphan, &root).unwrap();
    assert!(!diff.leaves().is_empty());
}
