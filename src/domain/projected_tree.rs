//! Payload-carrying forest and the structural joins between two of them.

use tracing::{debug, instrument};

use crate::domain::merge::unfold_forest;
use crate::domain::node::{PairedTreeNode, Preorder, ProjectedTreeNode};
use crate::domain::paired_tree::PairedTree;

/// Ordered top-level nodes of a tree whose nodes carry an optional `V`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedTree<V> {
    nodes: Vec<ProjectedTreeNode<V>>,
}

impl<V> Default for ProjectedTree<V> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<V> ProjectedTree<V> {
    pub fn new(nodes: Vec<ProjectedTreeNode<V>>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[ProjectedTreeNode<V>] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<ProjectedTreeNode<V>> {
        self.nodes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProjectedTreeNode<V>> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn preorder(&self) -> Preorder<'_, ProjectedTreeNode<V>> {
        Preorder::new(&self.nodes)
    }

    /// Pair up nodes with equal names present on both sides.
    ///
    /// Matching is scoped to the matched parents: children are only compared
    /// with the children of the node their parent was paired with, so equal
    /// names in unrelated branches never pair. Nodes without a partner are
    /// dropped together with their subtrees.
    #[instrument(level = "debug", skip_all)]
    pub fn inner_join<R, T>(&self, other: &T) -> PairedTree<V, R>
    where
        T: AsRef<[ProjectedTreeNode<R>]> + ?Sized,
        V: Clone,
        R: Clone,
    {
        let nodes = unfold_forest(
            (self.nodes.as_slice(), other.as_ref()),
            |(left, right)| {
                let mut entries = Vec::new();
                for l in left {
                    for r in right.iter().filter(|r| r.name == l.name) {
                        entries.push((
                            (l.name.clone(), l.item.clone(), r.item.clone()),
                            (l.children.as_slice(), r.children.as_slice()),
                        ));
                    }
                }
                entries
            },
            assemble_paired,
        );
        debug!(roots = nodes.len(), "Inner join complete");
        PairedTree::new(nodes)
    }

    /// Keep every node of this tree, pairing it with the equally named node
    /// on the other side when there is one.
    ///
    /// Without a partner `right` is `None` and the node's children are joined
    /// against an empty level, so they keep `right == None` as well.
    #[instrument(level = "debug", skip_all)]
    pub fn left_join<R, T>(&self, other: &T) -> PairedTree<V, R>
    where
        T: AsRef<[ProjectedTreeNode<R>]> + ?Sized,
        V: Clone,
        R: Clone,
    {
        let nodes = unfold_forest(
            (self.nodes.as_slice(), other.as_ref()),
            |(left, right)| {
                let mut entries = Vec::new();
                for l in left {
                    let mut matched = false;
                    for r in right.iter().filter(|r| r.name == l.name) {
                        matched = true;
                        entries.push((
                            (l.name.clone(), l.item.clone(), r.item.clone()),
                            (l.children.as_slice(), r.children.as_slice()),
                        ));
                    }
                    if !matched {
                        let no_partner: &[ProjectedTreeNode<R>] = &[];
                        entries.push((
                            (l.name.clone(), l.item.clone(), None),
                            (l.children.as_slice(), no_partner),
                        ));
                    }
                }
                entries
            },
            assemble_paired,
        );
        debug!(roots = nodes.len(), "Left join complete");
        PairedTree::new(nodes)
    }
}

fn assemble_paired<L, R>(
    (name, left, right): (String, Option<L>, Option<R>),
    children: Vec<PairedTreeNode<L, R>>,
) -> PairedTreeNode<L, R> {
    PairedTreeNode {
        name,
        left,
        right,
        children,
    }
}

impl<V> AsRef<[ProjectedTreeNode<V>]> for ProjectedTree<V> {
    fn as_ref(&self) -> &[ProjectedTreeNode<V>] {
        &self.nodes
    }
}

impl<V> From<Vec<ProjectedTreeNode<V>>> for ProjectedTree<V> {
    fn from(nodes: Vec<ProjectedTreeNode<V>>) -> Self {
        Self::new(nodes)
    }
}

impl<V> FromIterator<ProjectedTreeNode<V>> for ProjectedTree<V> {
    fn from_iter<T: IntoIterator<Item = ProjectedTreeNode<V>>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<V> IntoIterator for ProjectedTree<V> {
    type Item = ProjectedTreeNode<V>;
    type IntoIter = std::vec::IntoIter<ProjectedTreeNode<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a ProjectedTree<V> {
    type Item = &'a ProjectedTreeNode<V>;
    type IntoIter = std::slice::Iter<'a, ProjectedTreeNode<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
