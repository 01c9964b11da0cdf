//! Domain layer: hierarchy queries and tree operations
//!
//! This layer is independent of external concerns (no I/O, no config loading).

pub mod builder;
pub mod display;
pub mod hierarchy;
pub(crate) mod merge;
pub mod node;
pub mod paired_tree;
pub mod projected_tree;
pub mod simple_tree;

pub use builder::TreeBuilder;
pub use display::TreeNodeConvert;
pub use hierarchy::{Hierarchy, HierarchyExt};
pub use node::{PairedTreeNode, Preorder, ProjectedTreeNode, SimpleTreeNode, TreeNode};
pub use paired_tree::PairedTree;
pub use projected_tree::ProjectedTree;
pub use simple_tree::SimpleTree;
