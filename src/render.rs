//! Tree display via termtree.

use termtree::Tree;
use tracing::instrument;

use crate::node::{NodeRef, LEAF_LABEL};

/// Conversion of node handles into displayable [`termtree::Tree`]s.
pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for NodeRef {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        let node = self.borrow();
        let label = if node.is_leaf() { LEAF_LABEL } else { "Branch" };

        // Recursively construct the children
        let leaves: Vec<_> = node
            .children()
            .iter()
            .map(|child| child.to_tree_string())
            .collect();

        Tree::new(label.to_string()).with_leaves(leaves)
    }
}
