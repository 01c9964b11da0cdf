//! Hierarchy queries over flat collections.
//!
//! The relationship between items is decided by a caller-supplied predicate
//! `is_parent_of(child, parent)`, e.g. `|c, p| c.parent_id == Some(p.id)`.
//! Results borrow from the source slice and keep its order.

use std::collections::HashSet;
use std::fmt;

use itertools::Itertools;
use tracing::{debug, instrument, trace};

use crate::config::Settings;
use crate::errors::{HierarchyError, HierarchyResult};

/// A flat collection bound to the predicate that relates its items.
pub struct Hierarchy<'a, T, F> {
    source: &'a [T],
    is_parent_of: F,
    max_depth: Option<usize>,
}

impl<T, F> fmt::Debug for Hierarchy<'_, T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hierarchy")
            .field("items", &self.source.len())
            .field("max_depth", &self.max_depth)
            .finish_non_exhaustive()
    }
}

impl<'a, T, F> Hierarchy<'a, T, F>
where
    F: Fn(&T, &T) -> bool,
{
    pub fn new(source: &'a [T], is_parent_of: F) -> Self {
        Self {
            source,
            is_parent_of,
            max_depth: None,
        }
    }

    /// Fail walks that would go more than `max_depth` levels away from the target.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn with_settings(mut self, settings: &Settings) -> Self {
        self.max_depth = settings.max_depth;
        self
    }

    pub fn source(&self) -> &'a [T] {
        self.source
    }

    /// The single parent of `target`, or `None` when it has no parent.
    ///
    /// # Errors
    /// [`HierarchyError::AmbiguousParent`] when a second parent is found.
    pub fn parent_single_or_default(&self, target: &T) -> HierarchyResult<Option<&'a T>> {
        let source = self.source;
        Ok(self.parent_index(target)?.map(|index| &source[index]))
    }

    /// Position of the single parent of `target` in the source slice.
    fn parent_index(&self, target: &T) -> HierarchyResult<Option<usize>> {
        self.source
            .iter()
            .positions(|candidate| (self.is_parent_of)(target, candidate))
            .at_most_one()
            .map_err(|_| HierarchyError::AmbiguousParent)
    }

    /// All direct children of `target`.
    pub fn children(&self, target: &T) -> Vec<&'a T> {
        self.source
            .iter()
            .filter(|&candidate| (self.is_parent_of)(candidate, target))
            .collect()
    }

    /// All direct parents of `target`; more than one is not an error here.
    pub fn parents(&self, target: &T) -> Vec<&'a T> {
        self.source
            .iter()
            .filter(|&candidate| (self.is_parent_of)(target, candidate))
            .collect()
    }

    /// Ancestors of `target`, nearest first.
    ///
    /// Stops at the first item without a parent. If the chain loops back onto
    /// an ancestor already collected, the walk ends there without repeating it.
    ///
    /// # Errors
    /// [`HierarchyError::AmbiguousParent`] when any item on the chain has more
    /// than one parent; [`HierarchyError::DepthLimitExceeded`] when the chain is
    /// longer than the configured limit.
    #[instrument(level = "debug", skip_all, fields(items = self.source.len()))]
    pub fn ancestors_ascending(&self, target: &T) -> HierarchyResult<Vec<&'a T>> {
        let source = self.source;
        let mut ancestors: Vec<&'a T> = Vec::new();
        // keyed by position: zero-sized items all share one address
        let mut seen: HashSet<usize> = HashSet::new();
        let mut current = self.parent_index(target)?;

        while let Some(index) = current {
            if !seen.insert(index) {
                trace!(depth = ancestors.len(), "Ancestor chain loops, stopping");
                break;
            }
            let parent = &source[index];
            ancestors.push(parent);
            self.check_depth(ancestors.len())?;
            current = self.parent_index(parent)?;
        }

        debug!(ancestors = ancestors.len(), "Ancestors collected");
        Ok(ancestors)
    }

    /// [`Hierarchy::ancestors_ascending`] with `target` as first entry.
    pub fn ancestors_ascending_including_self(
        &self,
        target: &'a T,
    ) -> HierarchyResult<Vec<&'a T>> {
        let mut ancestors = self.ancestors_ascending(target)?;
        ancestors.insert(0, target);
        Ok(ancestors)
    }

    /// All descendants of `target`.
    ///
    /// Each level is complete before the next deeper one starts; no other
    /// order is promised. An item reachable over several parents is listed
    /// once per parent.
    pub fn descendants_all(&self, target: &T) -> HierarchyResult<Vec<&'a T>> {
        let mut found = Vec::new();
        self.walk_levels(target, |item, _| found.push(item))?;
        Ok(found)
    }

    /// All descendants of `target` paired with their distance from it
    /// (direct children are at depth 1), ordered by ascending depth.
    pub fn descendants_ascending_with_depth(
        &self,
        target: &T,
    ) -> HierarchyResult<Vec<(&'a T, usize)>> {
        let mut found = Vec::new();
        // Level order already yields non-decreasing depths.
        self.walk_levels(target, |item, depth| found.push((item, depth)))?;
        Ok(found)
    }

    pub fn descendants_ascending_with_depth_including_self(
        &self,
        target: &'a T,
    ) -> HierarchyResult<Vec<(&'a T, usize)>> {
        let mut found = vec![(target, 0)];
        found.extend(self.descendants_ascending_with_depth(target)?);
        Ok(found)
    }

    pub fn descendants_ascending(&self, target: &T) -> HierarchyResult<Vec<&'a T>> {
        Ok(self
            .descendants_ascending_with_depth(target)?
            .into_iter()
            .map(|(item, _)| item)
            .collect())
    }

    pub fn descendants_ascending_including_self(
        &self,
        target: &'a T,
    ) -> HierarchyResult<Vec<&'a T>> {
        let mut found = vec![target];
        found.extend(self.descendants_ascending(target)?);
        Ok(found)
    }

    /// Breadth-first expansion from `target`, one whole level at a time.
    #[instrument(level = "debug", skip_all, fields(items = self.source.len()))]
    fn walk_levels<V>(&self, target: &T, mut visit: V) -> HierarchyResult<()>
    where
        V: FnMut(&'a T, usize),
    {
        let mut frontier = self.children(target);
        let mut depth = 1;
        let mut total = 0;

        while !frontier.is_empty() {
            self.check_depth(depth)?;
            trace!(depth, width = frontier.len(), "Expanding level");
            total += frontier.len();
            for &item in &frontier {
                visit(item, depth);
            }
            frontier = frontier.iter().flat_map(|&item| self.children(item)).collect();
            depth += 1;
        }

        debug!(descendants = total, levels = depth - 1, "Descendants collected");
        Ok(())
    }

    fn check_depth(&self, depth: usize) -> HierarchyResult<()> {
        match self.max_depth {
            Some(limit) if depth > limit => Err(HierarchyError::DepthLimitExceeded { limit }),
            _ => Ok(()),
        }
    }
}

/// Entry point for hierarchy queries directly on a slice.
pub trait HierarchyExt<T> {
    fn hierarchy<F>(&self, is_parent_of: F) -> Hierarchy<'_, T, F>
    where
        F: Fn(&T, &T) -> bool;
}

impl<T> HierarchyExt<T> for [T] {
    fn hierarchy<F>(&self, is_parent_of: F) -> Hierarchy<'_, T, F>
    where
        F: Fn(&T, &T) -> bool,
    {
        Hierarchy::new(self, is_parent_of)
    }
}
