//! Name-only forest and its projection onto path-addressed values.

use tracing::{debug, instrument, trace};

use crate::domain::merge::{merge_by_name, unfold_forest};
use crate::domain::node::{Preorder, ProjectedTreeNode, SimpleTreeNode};
use crate::domain::projected_tree::ProjectedTree;
use crate::util::path::{join_path, split_path, DEFAULT_DELIMITER};

/// Ordered top-level nodes of a name-only tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SimpleTree {
    nodes: Vec<SimpleTreeNode>,
}

impl SimpleTree {
    pub fn new(nodes: Vec<SimpleTreeNode>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[SimpleTreeNode] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<SimpleTreeNode> {
        self.nodes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SimpleTreeNode> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn preorder(&self) -> Preorder<'_, SimpleTreeNode> {
        Preorder::new(&self.nodes)
    }

    /// Attach values to the nodes addressed by `.`-delimited paths.
    ///
    /// See [`SimpleTree::join_with`].
    pub fn join<I, S, V>(&self, paths_with_values: I) -> ProjectedTree<V>
    where
        I: IntoIterator<Item = (S, V)>,
        S: AsRef<str>,
        V: Clone,
    {
        self.join_with(paths_with_values, DEFAULT_DELIMITER)
    }

    /// Attach values to the nodes addressed by delimited paths.
    ///
    /// A path is matched component by component from the top level down. The
    /// node matching the last component carries the value; nodes passed on the
    /// way carry `None`. Paths that leave the tree contribute nothing. Only
    /// nodes touched by at least one path appear in the result, merged by name
    /// with the first present value kept.
    #[instrument(level = "debug", skip_all, fields(delimiter = %delimiter))]
    pub fn join_with<I, S, V>(&self, paths_with_values: I, delimiter: char) -> ProjectedTree<V>
    where
        I: IntoIterator<Item = (S, V)>,
        S: AsRef<str>,
        V: Clone,
    {
        let mut projected: Vec<ProjectedTreeNode<V>> = Vec::new();

        for (path, value) in paths_with_values {
            let components = split_path(path.as_ref(), delimiter);
            let mapped = self.project_path(&components, &value);
            trace!(path = path.as_ref(), matched = !mapped.is_empty(), "Projected path");
            projected.extend(mapped);
        }

        debug!(fragments = projected.len(), "Merging projected fragments");
        ProjectedTree::new(merge_by_name(projected))
    }

    /// Map one path onto the tree, yielding the matched branch (if any).
    fn project_path<V: Clone>(&self, components: &[&str], value: &V) -> Vec<ProjectedTreeNode<V>> {
        unfold_forest(
            (self.nodes.as_slice(), components),
            |(nodes, components): (&[SimpleTreeNode], &[&str])| {
                let Some((first, rest)) = components.split_first() else {
                    return Vec::new();
                };
                nodes
                    .iter()
                    .filter(|node| node.name == *first)
                    .map(|node| {
                        if rest.is_empty() {
                            let no_children: &[SimpleTreeNode] = &[];
                            ((node.name.clone(), Some(value.clone())), (no_children, rest))
                        } else {
                            ((node.name.clone(), None), (node.children.as_slice(), rest))
                        }
                    })
                    .collect()
            },
            |(name, item), children| ProjectedTreeNode {
                name,
                item,
                children,
            },
        )
    }

    /// Delimited path of every leaf, in preorder.
    pub fn leaf_paths(&self) -> Vec<String> {
        self.leaf_paths_with(DEFAULT_DELIMITER)
    }

    pub fn leaf_paths_with(&self, delimiter: char) -> Vec<String> {
        let mut leaves = Vec::new();
        let mut stack: Vec<(&SimpleTreeNode, Vec<&str>)> = self
            .nodes
            .iter()
            .rev()
            .map(|node| (node, vec![node.name.as_str()]))
            .collect();

        while let Some((node, path)) = stack.pop() {
            if node.children.is_empty() {
                leaves.push(join_path(&path, delimiter));
            } else {
                for child in node.children.iter().rev() {
                    let mut child_path = path.clone();
                    child_path.push(child.name.as_str());
                    stack.push((child, child_path));
                }
            }
        }

        leaves
    }
}

impl From<Vec<SimpleTreeNode>> for SimpleTree {
    fn from(nodes: Vec<SimpleTreeNode>) -> Self {
        Self::new(nodes)
    }
}

impl FromIterator<SimpleTreeNode> for SimpleTree {
    fn from_iter<T: IntoIterator<Item = SimpleTreeNode>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for SimpleTree {
    type Item = SimpleTreeNode;
    type IntoIter = std::vec::IntoIter<SimpleTreeNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a> IntoIterator for &'a SimpleTree {
    type Item = &'a SimpleTreeNode;
    type IntoIter = std::slice::Iter<'a, SimpleTreeNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> SimpleTree {
        SimpleTree::new(vec![
            SimpleTreeNode::new("A"),
            SimpleTreeNode::new("B").with_children(vec![SimpleTreeNode::new("C")]),
        ])
    }

    #[test]
    fn given_path_leaving_tree_when_projecting_then_returns_nothing() {
        let mapped = tree().project_path(&["X", "Y"], &1);
        assert!(mapped.is_empty());
    }

    #[test]
    fn given_partial_match_when_projecting_then_keeps_matched_prefix() {
        let mapped = tree().project_path(&["B", "Z"], &1);
        assert_eq!(mapped, vec![ProjectedTreeNode::new("B", None)]);
    }

    #[test]
    fn given_tree_when_listing_leaf_paths_then_joins_names() {
        assert_eq!(tree().leaf_paths(), vec!["A".to_string(), "B.C".to_string()]);
        assert_eq!(tree().leaf_paths_with('/'), vec!["A".to_string(), "B/C".to_string()]);
    }
}
