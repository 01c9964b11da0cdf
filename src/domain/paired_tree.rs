//! Forest of nodes pairing a left and a right value by name.

use tracing::{debug, instrument};

use crate::domain::node::{PairedTreeNode, Preorder};

/// Result of joining two projected trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairedTree<L, R> {
    nodes: Vec<PairedTreeNode<L, R>>,
}

impl<L, R> Default for PairedTree<L, R> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<L, R> PairedTree<L, R> {
    pub fn new(nodes: Vec<PairedTreeNode<L, R>>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[PairedTreeNode<L, R>] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<PairedTreeNode<L, R>> {
        self.nodes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PairedTreeNode<L, R>> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn preorder(&self) -> Preorder<'_, PairedTreeNode<L, R>> {
        Preorder::new(&self.nodes)
    }

    /// Every node of the tree, each before its children, siblings in order.
    #[instrument(level = "debug", skip_all)]
    pub fn flatten(&self) -> Vec<&PairedTreeNode<L, R>> {
        let flat: Vec<_> = self.preorder().collect();
        debug!(nodes = flat.len(), "Flattened paired tree");
        flat
    }

    /// Owned variant of [`PairedTree::flatten`]: a tree whose top level is the
    /// preorder sequence. Each entry still holds its own subtree.
    pub fn into_flattened(self) -> PairedTree<L, R>
    where
        L: Clone,
        R: Clone,
    {
        PairedTree::new(self.flatten().into_iter().cloned().collect())
    }
}

impl<L, R> AsRef<[PairedTreeNode<L, R>]> for PairedTree<L, R> {
    fn as_ref(&self) -> &[PairedTreeNode<L, R>] {
        &self.nodes
    }
}

impl<L, R> From<Vec<PairedTreeNode<L, R>>> for PairedTree<L, R> {
    fn from(nodes: Vec<PairedTreeNode<L, R>>) -> Self {
        Self::new(nodes)
    }
}

impl<L, R> IntoIterator for PairedTree<L, R> {
    type Item = PairedTreeNode<L, R>;
    type IntoIter = std::vec::IntoIter<PairedTreeNode<L, R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a, L, R> IntoIterator for &'a PairedTree<L, R> {
    type Item = &'a PairedTreeNode<L, R>;
    type IntoIter = std::slice::Iter<'a, PairedTreeNode<L, R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
