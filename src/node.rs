//! Composite tree nodes.
//!
//! A tree is built from two node kinds: leaves, which are terminal, and
//! branches, which own an ordered sequence of children. Callers handle both
//! uniformly through [`NodeOps`]; structural mutation is only supported on
//! branches, so callers check [`NodeOps::is_composite`] before attempting it.
//!
//! Handles are `Rc<RefCell<_>>` based and single-threaded. Sharing a tree
//! across threads requires external synchronization.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use itertools::Itertools;
use tracing::instrument;

use crate::errors::{TreeError, TreeResult};
use crate::walk::depth_first;

/// Shared handle to a tree node.
pub type NodeRef = Rc<RefCell<Node>>;
/// Non-owning handle, used for parent back-pointers.
pub type WeakNodeRef = Weak<RefCell<Node>>;

/// Contribution of a leaf node.
pub const LEAF_LABEL: &str = "Leaf";
/// Opening delimiter of a branch aggregation.
pub const BRANCH_OPEN: &str = "Branch: (";
/// Separator between child contributions.
pub const CHILD_SEPARATOR: &str = "+";
/// Closing delimiter of a branch aggregation.
pub const BRANCH_CLOSE: &str = ")";

/// Default recursion cap for `operate` and friends.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Tree element. Construct via [`Node::leaf`] or [`Node::branch`], operate on
/// it through [`NodeOps`] on the returned [`NodeRef`].
#[derive(Debug)]
pub struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<WeakNodeRef>,
}

/// Closed set of node variants.
#[derive(Debug)]
pub enum NodeKind {
    Leaf,
    Branch { children: Vec<NodeRef> },
}

impl Node {
    /// Creates a standalone leaf node.
    pub fn leaf() -> NodeRef {
        Rc::new(RefCell::new(Node {
            kind: NodeKind::Leaf,
            parent: None,
        }))
    }

    /// Creates a standalone branch node with no children.
    pub fn branch() -> NodeRef {
        Rc::new(RefCell::new(Node {
            kind: NodeKind::Branch {
                children: Vec::new(),
            },
            parent: None,
        }))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf)
    }

    /// Child handles in insertion order. Empty for leaves.
    pub fn children(&self) -> Vec<NodeRef> {
        match &self.kind {
            NodeKind::Leaf => Vec::new(),
            NodeKind::Branch { children } => children.clone(),
        }
    }
}

/// Uniform capability surface of leaves and branches.
///
/// Implemented on [`NodeRef`] rather than [`Node`] because `add` and `remove`
/// need the reference-counted handle itself for identity checks and parent
/// back-pointers (same workaround as implementing display conversion on the
/// handle alias, E0116).
pub trait NodeOps {
    /// Textual contribution of this node: `"Leaf"` for a leaf, the joined
    /// child contributions wrapped in `"Branch: (...)"` for a branch.
    ///
    /// Pure with respect to tree state; two calls without an intervening
    /// `add`/`remove` return the same string.
    fn operate(&self) -> TreeResult<String>;

    /// Same aggregation with an explicit recursion cap. Exceeding the cap
    /// fails with [`TreeError::CycleDetected`], the safety net against a
    /// violated acyclicity invariant.
    fn operate_with_limit(&self, limit: usize) -> TreeResult<String>;

    /// Whether this node supports `add`/`remove`.
    fn is_composite(&self) -> bool;

    /// Appends `child` to the end of the child sequence.
    ///
    /// Fails with [`TreeError::UnsupportedOperation`] on a leaf,
    /// [`TreeError::CycleDetected`] if `child` is this node or one of its
    /// ancestors, and [`TreeError::AlreadyAttached`] if `child` already has a
    /// parent. Each node has exactly one owner; `remove` it first to graft it
    /// elsewhere.
    fn add(&self, child: &NodeRef) -> TreeResult<()>;

    /// Removes the first child identical to `child` (pointer identity, not
    /// structural equality) and clears its parent pointer. Removing an absent
    /// child is a no-op. Fails with [`TreeError::UnsupportedOperation`] on a
    /// leaf.
    fn remove(&self, child: &NodeRef) -> TreeResult<()>;

    /// Upgraded parent handle, if this node is attached to a branch.
    fn parent(&self) -> Option<NodeRef>;

    /// Height of the subtree rooted here, 1 for a standalone node.
    fn depth(&self) -> usize;

    /// Total number of nodes in the subtree rooted here.
    fn node_count(&self) -> usize;

    /// Number of leaves in the subtree rooted here.
    fn leaf_count(&self) -> usize;
}

impl NodeOps for NodeRef {
    #[instrument(level = "trace", skip(self))]
    fn operate(&self) -> TreeResult<String> {
        aggregate(self, 1, DEFAULT_MAX_DEPTH)
    }

    #[instrument(level = "trace", skip(self))]
    fn operate_with_limit(&self, limit: usize) -> TreeResult<String> {
        aggregate(self, 1, limit)
    }

    fn is_composite(&self) -> bool {
        !self.borrow().is_leaf()
    }

    #[instrument(level = "debug", skip(self, child))]
    fn add(&self, child: &NodeRef) -> TreeResult<()> {
        if !self.is_composite() {
            return Err(TreeError::UnsupportedOperation("add"));
        }
        if Rc::ptr_eq(self, child) || has_ancestor(self, child) {
            return Err(TreeError::CycleDetected(
                "node would become its own ancestor".to_string(),
            ));
        }
        if child.parent().is_some() {
            return Err(TreeError::AlreadyAttached);
        }

        child.borrow_mut().parent = Some(Rc::downgrade(self));
        if let NodeKind::Branch { children } = &mut self.borrow_mut().kind {
            children.push(Rc::clone(child));
        }
        Ok(())
    }

    #[instrument(level = "debug", skip(self, child))]
    fn remove(&self, child: &NodeRef) -> TreeResult<()> {
        let detached = {
            let mut node = self.borrow_mut();
            match &mut node.kind {
                NodeKind::Leaf => return Err(TreeError::UnsupportedOperation("remove")),
                NodeKind::Branch { children } => children
                    .iter()
                    .position(|c| Rc::ptr_eq(c, child))
                    .map(|pos| children.remove(pos)),
            }
        };

        if let Some(detached) = detached {
            detached.borrow_mut().parent = None;
        }
        Ok(())
    }

    fn parent(&self) -> Option<NodeRef> {
        self.borrow().parent.as_ref().and_then(Weak::upgrade)
    }

    #[instrument(level = "trace", skip(self))]
    fn depth(&self) -> usize {
        let node = self.borrow();
        match &node.kind {
            NodeKind::Leaf => 1,
            NodeKind::Branch { children } => {
                1 + children.iter().map(|child| child.depth()).max().unwrap_or(0)
            }
        }
    }

    #[instrument(level = "trace", skip(self))]
    fn node_count(&self) -> usize {
        depth_first(self).count()
    }

    #[instrument(level = "trace", skip(self))]
    fn leaf_count(&self) -> usize {
        depth_first(self)
            .filter(|node| node.borrow().is_leaf())
            .count()
    }
}

fn aggregate(node: &NodeRef, depth: usize, limit: usize) -> TreeResult<String> {
    if depth > limit {
        return Err(TreeError::CycleDetected(format!(
            "aggregation exceeded depth limit {}",
            limit
        )));
    }

    let node = node.borrow();
    match &node.kind {
        NodeKind::Leaf => Ok(LEAF_LABEL.to_string()),
        NodeKind::Branch { children } => {
            let parts: Vec<String> = children
                .iter()
                .map(|child| aggregate(child, depth + 1, limit))
                .collect::<TreeResult<_>>()?;
            Ok(format!(
                "{}{}{}",
                BRANCH_OPEN,
                parts.iter().join(CHILD_SEPARATOR),
                BRANCH_CLOSE
            ))
        }
    }
}

/// Walks up from `node` and reports whether `candidate` is one of its
/// ancestors.
fn has_ancestor(node: &NodeRef, candidate: &NodeRef) -> bool {
    let mut current = node.parent();
    while let Some(ancestor) = current {
        if Rc::ptr_eq(&ancestor, candidate) {
            return true;
        }
        current = ancestor.parent();
    }
    false
}
