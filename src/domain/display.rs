//! Text rendering of trees with `termtree`.

use std::fmt;

use termtree::Tree;

use crate::domain::node::{PairedTreeNode, ProjectedTreeNode, SimpleTreeNode, TreeNode};
use crate::domain::paired_tree::PairedTree;
use crate::domain::projected_tree::ProjectedTree;
use crate::domain::simple_tree::SimpleTree;

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

/// Line shown for a single node.
trait NodeLabel {
    fn label(&self) -> String;
}

impl NodeLabel for SimpleTreeNode {
    fn label(&self) -> String {
        self.name.clone()
    }
}

impl<V: fmt::Debug> NodeLabel for ProjectedTreeNode<V> {
    fn label(&self) -> String {
        match &self.item {
            Some(item) => format!("{} = {:?}", self.name, item),
            None => self.name.clone(),
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> NodeLabel for PairedTreeNode<L, R> {
    fn label(&self) -> String {
        format!("{} [{:?} | {:?}]", self.name, self.left, self.right)
    }
}

fn render<N: TreeNode + NodeLabel>(node: &N) -> Tree<String> {
    let leaves: Vec<_> = node.children().iter().map(render).collect();
    Tree::new(node.label()).with_leaves(leaves)
}

impl TreeNodeConvert for SimpleTreeNode {
    fn to_tree_string(&self) -> Tree<String> {
        render(self)
    }
}

impl<V: fmt::Debug> TreeNodeConvert for ProjectedTreeNode<V> {
    fn to_tree_string(&self) -> Tree<String> {
        render(self)
    }
}

impl<L: fmt::Debug, R: fmt::Debug> TreeNodeConvert for PairedTreeNode<L, R> {
    fn to_tree_string(&self) -> Tree<String> {
        render(self)
    }
}

fn write_forest<N: TreeNodeConvert>(f: &mut fmt::Formatter<'_>, roots: &[N]) -> fmt::Result {
    for root in roots {
        write!(f, "{}", root.to_tree_string())?;
    }
    Ok(())
}

impl fmt::Display for SimpleTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_forest(f, self.nodes())
    }
}

impl<V: fmt::Debug> fmt::Display for ProjectedTree<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_forest(f, self.nodes())
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Display for PairedTree<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_forest(f, self.nodes())
    }
}
