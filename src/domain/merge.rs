//! Iterative construction of nested node forests.
//!
//! Every tree operation in this crate produces a forest level by level: a
//! level is split into entries, each entry carries the data for one output
//! node plus the input for that node's child level. [`unfold_forest`] drives
//! this with an explicit stack so input depth never grows the call stack.

use std::collections::HashMap;
use std::mem;

use crate::domain::node::{ProjectedTreeNode, SimpleTreeNode};

struct Frame<H, L, N> {
    pending: std::vec::IntoIter<(H, L)>,
    /// Header of the entry whose child level is being built one frame up.
    current: Option<H>,
    built: Vec<N>,
}

/// Builds a forest from `root`.
///
/// `split` turns a level into ordered `(header, child_level)` entries and
/// `assemble` creates a node from its header and its finished children.
pub(crate) fn unfold_forest<L, H, N, S, A>(root: L, mut split: S, mut assemble: A) -> Vec<N>
where
    S: FnMut(L) -> Vec<(H, L)>,
    A: FnMut(H, Vec<N>) -> N,
{
    let mut stack = vec![Frame {
        pending: split(root).into_iter(),
        current: None,
        built: Vec::new(),
    }];

    while let Some(top) = stack.last_mut() {
        if let Some((header, child_level)) = top.pending.next() {
            top.current = Some(header);
            let pending = split(child_level).into_iter();
            stack.push(Frame {
                pending,
                current: None,
                built: Vec::new(),
            });
            continue;
        }

        let Some(finished) = stack.pop() else { break };
        match stack.last_mut() {
            None => return finished.built,
            Some(parent) => {
                if let Some(header) = parent.current.take() {
                    parent.built.push(assemble(header, finished.built));
                }
            }
        }
    }

    Vec::new()
}

/// A node that can be taken apart and rebuilt by the group-by-name merge.
pub(crate) trait Mergeable: Sized {
    type Payload;

    fn into_parts(self) -> (String, Option<Self::Payload>, Vec<Self>);

    fn from_parts(name: String, payload: Option<Self::Payload>, children: Vec<Self>) -> Self;
}

impl Mergeable for SimpleTreeNode {
    type Payload = ();

    fn into_parts(mut self) -> (String, Option<()>, Vec<Self>) {
        (mem::take(&mut self.name), None, mem::take(&mut self.children))
    }

    fn from_parts(name: String, _payload: Option<()>, children: Vec<Self>) -> Self {
        Self { name, children }
    }
}

impl<V> Mergeable for ProjectedTreeNode<V> {
    type Payload = V;

    fn into_parts(mut self) -> (String, Option<V>, Vec<Self>) {
        (mem::take(&mut self.name), self.item.take(), mem::take(&mut self.children))
    }

    fn from_parts(name: String, payload: Option<V>, children: Vec<Self>) -> Self {
        Self {
            name,
            item: payload,
            children,
        }
    }
}

/// Groups sibling nodes by name in order of first occurrence.
///
/// A group keeps the first payload that is present among its members; the
/// children of all members are concatenated in member order.
fn group_by_name<N: Mergeable>(nodes: Vec<N>) -> Vec<((String, Option<N::Payload>), Vec<N>)> {
    let mut groups: Vec<((String, Option<N::Payload>), Vec<N>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for node in nodes {
        let (name, payload, children) = node.into_parts();
        match index.get(&name) {
            Some(&i) => {
                let ((_, kept), grouped) = &mut groups[i];
                if kept.is_none() {
                    *kept = payload;
                }
                grouped.extend(children);
            }
            None => {
                index.insert(name.clone(), groups.len());
                groups.push(((name, payload), children));
            }
        }
    }

    groups
}

/// Merges sibling nodes sharing a name, recursively, so that every level of
/// the result has unique names.
pub(crate) fn merge_by_name<N: Mergeable>(nodes: Vec<N>) -> Vec<N> {
    unfold_forest(nodes, group_by_name, |(name, payload), children| {
        N::from_parts(name, payload, children)
    })
}
