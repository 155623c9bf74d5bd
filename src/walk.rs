//! Iterative traversals over composite trees.
//!
//! The recursive operations in `node` mirror the call stack; these iterators
//! make the stack (or queue) explicit, so deep trees do not grow the call
//! stack and traversal order is under caller control.

use std::collections::VecDeque;
use std::rc::Rc;

use tracing::instrument;

use crate::node::NodeRef;

/// Preorder depth-first iterator backed by an explicit stack.
pub struct DepthFirstIter {
    stack: Vec<NodeRef>,
}

/// Level-order iterator backed by a queue.
pub struct BreadthFirstIter {
    queue: VecDeque<NodeRef>,
}

/// Starts a depth-first (preorder) walk at `root`.
#[instrument(level = "trace", skip(root))]
pub fn depth_first(root: &NodeRef) -> DepthFirstIter {
    DepthFirstIter {
        stack: vec![Rc::clone(root)],
    }
}

/// Starts a breadth-first (level-order) walk at `root`.
#[instrument(level = "trace", skip(root))]
pub fn breadth_first(root: &NodeRef) -> BreadthFirstIter {
    let mut queue = VecDeque::new();
    queue.push_back(Rc::clone(root));
    BreadthFirstIter { queue }
}

impl Iterator for DepthFirstIter {
    type Item = NodeRef;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        for child in current.borrow().children().into_iter().rev() {
            self.stack.push(child);
        }
        Some(current)
    }
}

impl Iterator for BreadthFirstIter {
    type Item = NodeRef;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.queue.pop_front()?;
        for child in current.borrow().children() {
            self.queue.push_back(child);
        }
        Some(current)
    }
}
