//! Generic caller working uniformly with leaves and branches.

use tracing::instrument;

use crate::errors::TreeResult;
use crate::node::{Node, NodeOps, NodeRef, DEFAULT_MAX_DEPTH};

/// Caller that only sees the [`NodeOps`] surface, never the node kind.
///
/// `describe` works with any node; `extend` checks `is_composite` before
/// mutating, which is the contract every caller of `add`/`remove` follows.
#[derive(Debug)]
pub struct Client {
    max_depth: usize,
}

impl Default for Client {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Client {
    pub fn new() -> Self {
        Self::default()
    }

    /// Client with a custom recursion cap, see `Settings::max_depth`.
    pub fn with_limit(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Reports the contribution of `node`, whatever its kind.
    #[instrument(level = "debug", skip_all)]
    pub fn describe(&self, node: &NodeRef) -> TreeResult<String> {
        node.operate_with_limit(self.max_depth)
    }

    /// Grafts `addition` onto `target` if `target` can hold children, then
    /// reports the result. A non-composite target is reported unchanged.
    #[instrument(level = "debug", skip_all)]
    pub fn extend(&self, target: &NodeRef, addition: &NodeRef) -> TreeResult<String> {
        if target.is_composite() {
            target.add(addition)?;
        }
        target.operate_with_limit(self.max_depth)
    }
}

/// Demonstration tree: a root branch holding two branches with two leaves
/// each.
pub fn sample_tree() -> NodeRef {
    let tree = Node::branch();

    for _ in 0..2 {
        let branch = Node::branch();
        branch.add(&Node::leaf()).expect("branch accepts leaves");
        branch.add(&Node::leaf()).expect("branch accepts leaves");
        tree.add(&branch).expect("root accepts branches");
    }

    tree
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_tree_shape() {
        let tree = sample_tree();
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.node_count(), 7);
        assert_eq!(tree.leaf_count(), 4);
    }
}
