//! Tree builder for turning delimited paths into a name-only tree.

use tracing::{debug, instrument, trace};

use crate::config::Settings;
use crate::domain::merge::merge_by_name;
use crate::domain::node::SimpleTreeNode;
use crate::domain::simple_tree::SimpleTree;
use crate::util::path::{split_path, DEFAULT_DELIMITER};

/// Constructs a [`SimpleTree`] from paths such as `"C.D.E"`.
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    delimiter: char,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }

    pub fn with_delimiter(delimiter: char) -> Self {
        Self { delimiter }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_delimiter(settings.delimiter)
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Build one tree from all paths, sharing common prefixes.
    ///
    /// Top-level nodes and siblings keep the order in which their names first
    /// appear. Paths without any component are ignored.
    #[instrument(level = "debug", skip_all, fields(delimiter = %self.delimiter))]
    pub fn build<I, S>(&self, paths: I) -> SimpleTree
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let chains: Vec<SimpleTreeNode> = paths
            .into_iter()
            .filter_map(|path| self.chain(path.as_ref()))
            .collect();
        debug!(chains = chains.len(), "Merging path chains");

        let roots = merge_by_name(chains);
        debug!(roots = roots.len(), "Tree built");
        SimpleTree::new(roots)
    }

    /// Fold a single path right to left into a one-branch chain.
    fn chain(&self, path: &str) -> Option<SimpleTreeNode> {
        let components = split_path(path, self.delimiter);
        if components.is_empty() {
            trace!(path, "Skipping empty path");
            return None;
        }

        components.into_iter().rev().fold(None, |child, component| {
            let node = SimpleTreeNode::new(component);
            Some(match child {
                Some(child) => node.with_children(vec![child]),
                None => node,
            })
        })
    }
}
