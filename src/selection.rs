//! Selection state over scene items.
//!
//! Holds item ids, never references, so removing an item from the scene can
//! never leave a dangling alias - callers purge the id here when they remove
//! it there. A single selection (`primary`) enables handle-based transforms;
//! a multi-selection enables only group translation.

use std::collections::HashSet;

#[derive(Clone, Debug, Default)]
pub struct SelectionManager {
    primary: Option<u64>,
    selected: HashSet<u64>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// The single selection, when exactly one item is selected.
    pub fn primary(&self) -> Option<u64> {
        self.primary
    }

    /// Ids of all selected items. `primary`, when set, is always a member.
    pub fn ids(&self) -> impl Iterator<Item = &u64> {
        self.selected.iter()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.selected.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn clear(&mut self) {
        self.primary = None;
        self.selected.clear();
    }

    /// Replace the selection with a single item.
    pub fn select_single(&mut self, id: u64) {
        self.selected.clear();
        self.selected.insert(id);
        self.primary = Some(id);
    }

    /// Replace the selection with a set of items; an exactly-one result
    /// also becomes the single selection.
    pub fn set_multi(&mut self, ids: impl IntoIterator<Item = u64>) {
        self.selected = ids.into_iter().collect();
        self.primary = if self.selected.len() == 1 {
            self.selected.iter().next().copied()
        } else {
            None
        };
    }

    /// Toggle membership of one item, keeping `primary` consistent.
    pub fn toggle(&mut self, id: u64) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
        self.primary = if self.selected.len() == 1 {
            self.selected.iter().next().copied()
        } else {
            None
        };
    }

    /// Purge an id after the item was removed from the scene.
    pub fn remove(&mut self, id: u64) {
        self.selected.remove(&id);
        if self.primary == Some(id) {
            self.primary = None;
        }
    }
}
