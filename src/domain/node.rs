//! Node shapes shared by the tree operations.
//!
//! Nodes are passive data: the builder and the joins create them, nothing
//! mutates them afterwards. Each node owns its children exclusively.
//!
//! Dropping, cloning and comparing walk the tree with a work stack, so a
//! chain of any depth is released without growing the call stack. `Debug`
//! output and [`crate::domain::display`] still recurse.

use std::collections::VecDeque;
use std::slice;

use crate::domain::merge::unfold_forest;

/// Common read access to every node shape.
pub trait TreeNode: Sized {
    fn name(&self) -> &str;

    fn children(&self) -> &[Self];

    fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }

    /// Number of levels in the subtree rooted here (a leaf has depth 1).
    fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut queue = VecDeque::new();
        queue.push_back((self, 1)); // (node, depth)

        while let Some((node, depth)) = queue.pop_front() {
            max_depth = max_depth.max(depth);
            for child in node.children() {
                queue.push_back((child, depth + 1));
            }
        }

        max_depth
    }
}

/// Node of a tree keyed by name only.
#[derive(Debug, Eq, Default)]
pub struct SimpleTreeNode {
    pub name: String,
    pub children: Vec<SimpleTreeNode>,
}

impl SimpleTreeNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<SimpleTreeNode>) -> Self {
        self.children = children;
        self
    }
}

/// Node carrying an optional payload; `item` is `None` when no path ended here.
#[derive(Debug, Eq)]
pub struct ProjectedTreeNode<V> {
    pub name: String,
    pub item: Option<V>,
    pub children: Vec<ProjectedTreeNode<V>>,
}

impl<V> ProjectedTreeNode<V> {
    pub fn new(name: impl Into<String>, item: Option<V>) -> Self {
        Self {
            name: name.into(),
            item,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<ProjectedTreeNode<V>>) -> Self {
        self.children = children;
        self
    }
}

/// Node produced by joining two projected trees on node names.
#[derive(Debug, Eq)]
pub struct PairedTreeNode<L, R> {
    pub name: String,
    pub left: Option<L>,
    /// `None` also when a left join found no right-hand node of this name.
    pub right: Option<R>,
    pub children: Vec<PairedTreeNode<L, R>>,
}

impl<L, R> PairedTreeNode<L, R> {
    pub fn new(name: impl Into<String>, left: Option<L>, right: Option<R>) -> Self {
        Self {
            name: name.into(),
            left,
            right,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<PairedTreeNode<L, R>>) -> Self {
        self.children = children;
        self
    }
}

impl TreeNode for SimpleTreeNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}

impl<V> TreeNode for ProjectedTreeNode<V> {
    fn name(&self) -> &str {
        &self.name
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}

impl<L, R> TreeNode for PairedTreeNode<L, R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}

/// Moves every descendant onto a local stack so each node is freed with an
/// empty child list.
fn release_children<N>(children: &mut Vec<N>, take: impl Fn(&mut N) -> Vec<N>) {
    let mut stack = std::mem::take(children);
    while let Some(mut node) = stack.pop() {
        stack.extend(take(&mut node));
    }
}

impl Drop for SimpleTreeNode {
    fn drop(&mut self) {
        release_children(&mut self.children, |n| std::mem::take(&mut n.children));
    }
}

impl<V> Drop for ProjectedTreeNode<V> {
    fn drop(&mut self) {
        release_children(&mut self.children, |n| std::mem::take(&mut n.children));
    }
}

impl<L, R> Drop for PairedTreeNode<L, R> {
    fn drop(&mut self) {
        release_children(&mut self.children, |n| std::mem::take(&mut n.children));
    }
}

/// Copies a forest level by level; `shallow` copies one node without children.
fn clone_forest<'a, N, F, A>(roots: &'a [N], mut shallow: F, attach: A) -> Vec<N>
where
    N: TreeNode + 'a,
    F: FnMut(&N) -> N,
    A: FnMut(N, Vec<N>) -> N,
{
    unfold_forest(
        roots,
        |level: &'a [N]| {
            level
                .iter()
                .map(|node| (shallow(node), node.children()))
                .collect::<Vec<_>>()
        },
        attach,
    )
}

/// Structural equality of two forests; `same` compares one pair of nodes
/// without looking at their children.
fn forests_eq<N: TreeNode>(left: &[N], right: &[N], same: impl Fn(&N, &N) -> bool) -> bool {
    let mut stack = vec![(left, right)];
    while let Some((l, r)) = stack.pop() {
        if l.len() != r.len() {
            return false;
        }
        for (a, b) in l.iter().zip(r) {
            if !same(a, b) {
                return false;
            }
            stack.push((a.children(), b.children()));
        }
    }
    true
}

impl Clone for SimpleTreeNode {
    fn clone(&self) -> Self {
        let shallow = |node: &Self| Self::new(node.name.clone());
        shallow(self).with_children(clone_forest(&self.children, shallow, Self::with_children))
    }
}

impl<V: Clone> Clone for ProjectedTreeNode<V> {
    fn clone(&self) -> Self {
        let shallow = |node: &Self| Self::new(node.name.clone(), node.item.clone());
        shallow(self).with_children(clone_forest(&self.children, shallow, Self::with_children))
    }
}

impl<L: Clone, R: Clone> Clone for PairedTreeNode<L, R> {
    fn clone(&self) -> Self {
        let shallow =
            |node: &Self| Self::new(node.name.clone(), node.left.clone(), node.right.clone());
        shallow(self).with_children(clone_forest(&self.children, shallow, Self::with_children))
    }
}

impl PartialEq for SimpleTreeNode {
    fn eq(&self, other: &Self) -> bool {
        forests_eq(slice::from_ref(self), slice::from_ref(other), |a, b| {
            a.name == b.name
        })
    }
}

impl<V: PartialEq> PartialEq for ProjectedTreeNode<V> {
    fn eq(&self, other: &Self) -> bool {
        forests_eq(slice::from_ref(self), slice::from_ref(other), |a, b| {
            a.name == b.name && a.item == b.item
        })
    }
}

impl<L: PartialEq, R: PartialEq> PartialEq for PairedTreeNode<L, R> {
    fn eq(&self, other: &Self) -> bool {
        forests_eq(slice::from_ref(self), slice::from_ref(other), |a, b| {
            a.name == b.name && a.left == b.left && a.right == b.right
        })
    }
}

/// Depth-first preorder over a forest: every node before its children,
/// siblings left to right.
#[derive(Debug)]
pub struct Preorder<'a, N> {
    stack: Vec<&'a N>,
}

impl<'a, N: TreeNode> Preorder<'a, N> {
    pub fn new(roots: &'a [N]) -> Self {
        Self {
            stack: roots.iter().rev().collect(),
        }
    }
}

impl<'a, N: TreeNode> Iterator for Preorder<'a, N> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> SimpleTreeNode {
        SimpleTreeNode::new("A").with_children(vec![
            SimpleTreeNode::new("B").with_children(vec![SimpleTreeNode::new("C")]),
            SimpleTreeNode::new("D"),
        ])
    }

    #[test]
    fn given_nested_node_when_computing_depth_then_counts_levels() {
        assert_eq!(chain().depth(), 3);
        assert_eq!(SimpleTreeNode::new("leaf").depth(), 1);
    }

    #[test]
    fn given_forest_when_iterating_preorder_then_parents_precede_children() {
        let forest = vec![chain(), SimpleTreeNode::new("E")];
        let names: Vec<&str> = Preorder::new(&forest).map(|n| n.name()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D", "E"]);
    }

    fn deep_chain(depth: usize) -> SimpleTreeNode {
        (1..depth).fold(SimpleTreeNode::new("leaf"), |child, _| {
            SimpleTreeNode::new("n").with_children(vec![child])
        })
    }

    #[test]
    fn given_deep_chain_when_cloning_comparing_and_dropping_then_stack_holds() {
        let chain = deep_chain(200_000);

        let copy = chain.clone();
        assert_eq!(copy, chain);
        assert_eq!(Preorder::new(slice::from_ref(&copy)).count(), 200_000);

        drop(copy);
        drop(chain);
    }

    #[test]
    fn given_trees_differing_deep_down_when_comparing_then_not_equal() {
        let left = chain();
        let mut right = chain();
        right.children[0].children[0].name = "X".to_string();

        assert_ne!(left, right);
        assert_ne!(left, SimpleTreeNode::new("A"));
    }

    #[test]
    fn given_projected_node_when_cloning_then_keeps_items() {
        let node = ProjectedTreeNode::new("A", Some(1))
            .with_children(vec![ProjectedTreeNode::new("B", None)
                .with_children(vec![ProjectedTreeNode::new("C", Some(3))])]);

        let copy = node.clone();

        assert_eq!(copy, node);
        assert_eq!(copy.children[0].children[0].item, Some(3));
        assert_ne!(copy, ProjectedTreeNode::new("A", Some(2)).with_children(copy.children.clone()));
    }

    #[test]
    fn given_empty_forest_when_iterating_preorder_then_yields_nothing() {
        let forest: Vec<SimpleTreeNode> = Vec::new();
        assert_eq!(Preorder::new(&forest).count(), 0);
    }
}
