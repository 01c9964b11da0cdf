//! Hierarchy queries over flat collections and name-keyed trees.
//!
//! Two independent facilities:
//!
//! - [`Hierarchy`]: parents, children, ancestors and descendants of an item in
//!   a flat slice, where a predicate `is_parent_of(child, parent)` defines the
//!   relationship.
//! - Trees built from delimited paths: [`TreeBuilder`] creates a
//!   [`SimpleTree`], [`SimpleTree::join`] attaches values to it as a
//!   [`ProjectedTree`], and two projected trees are joined by node name into a
//!   [`PairedTree`] that can be flattened into preorder.
//!
//! ```
//! use rshier::{HierarchyExt, TreeBuilder};
//!
//! let tree = TreeBuilder::new().build(["A", "B.C"]);
//! let values = tree.join([("A", 1), ("B.C", 2)]);
//! let prices = tree.join([("B.C", 2.5)]);
//! let paired = values.inner_join(&prices);
//! assert_eq!(paired.flatten().len(), 2);
//!
//! let ids = [(1, None), (2, Some(1)), (3, Some(2))];
//! let ancestors = ids
//!     .hierarchy(|c: &(i32, Option<i32>), p: &(i32, Option<i32>)| c.1 == Some(p.0))
//!     .ancestors_ascending(&ids[2])
//!     .unwrap();
//! assert_eq!(ancestors.len(), 2);
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod util;

pub use config::Settings;
pub use domain::{
    Hierarchy, HierarchyExt, PairedTree, PairedTreeNode, Preorder, ProjectedTree,
    ProjectedTreeNode, SimpleTree, SimpleTreeNode, TreeBuilder, TreeNode, TreeNodeConvert,
};
pub use errors::{HierarchyError, HierarchyResult};
