//! Composite trees with uniform leaf/branch handling.
//!
//! A tree is assembled from two node kinds behind one capability surface:
//! leaves contribute a fixed label, branches aggregate their children
//! recursively. Callers check [`NodeOps::is_composite`] before structural
//! mutation and otherwise treat every node alike:
//!
//! ```
//! use rstree::{Client, Node, NodeOps};
//!
//! let branch = Node::branch();
//! branch.add(&Node::leaf()).unwrap();
//! branch.add(&Node::leaf()).unwrap();
//!
//! assert_eq!(branch.operate().unwrap(), "Branch: (Leaf+Leaf)");
//!
//! let client = Client::new();
//! assert_eq!(client.describe(&Node::leaf()).unwrap(), "Leaf");
//! ```
//!
//! Trees are acyclic and single-parent by construction: `add` rejects a node
//! that already has a parent and any attachment that would make a node its
//! own ancestor.

pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod exitcode;
pub mod node;
pub mod render;
pub mod util;
pub mod walk;

pub use client::{sample_tree, Client};
pub use errors::{TreeError, TreeResult};
pub use node::{Node, NodeKind, NodeOps, NodeRef, WeakNodeRef, DEFAULT_MAX_DEPTH};
