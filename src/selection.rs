//! Cross-page row selection.
//!
//! The table only ever sees the rows of the visible page, but the selection
//! has to outlive page changes. The authoritative set lives here and is fed
//! to the table as a controlled value; the table reports a complete new set
//! back whenever the user toggles something, and bulk operations reconcile
//! only the visible window.

use std::collections::HashSet;

use tracing::debug;

use crate::api::Artwork;

/// The set of selected rows, keyed by `id`, in selection order.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    rows: Vec<Artwork>,
    ids: HashSet<u64>,
}

impl SelectionSet {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of selected rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Check if the row with the given id is selected.
    pub fn contains(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    /// Selected rows in the order they were added.
    pub fn rows(&self) -> &[Artwork] {
        &self.rows
    }

    /// Iterate over the selected rows.
    pub fn iter(&self) -> impl Iterator<Item = &Artwork> {
        self.rows.iter()
    }

    /// Number of rows of `visible` that are selected.
    pub fn count_in(&self, visible: &[Artwork]) -> usize {
        visible.iter().filter(|row| self.contains(row.id)).count()
    }

    /// Replace the whole selection with `rows`.
    ///
    /// Later duplicates of an id are dropped, so the set never holds two
    /// entries for the same row.
    pub fn replace(&mut self, rows: impl IntoIterator<Item = Artwork>) {
        self.rows.clear();
        self.ids.clear();
        for row in rows {
            self.insert(row);
        }
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.ids.clear();
    }

    /// The full selection with `row` toggled.
    pub fn toggled(&self, row: &Artwork) -> Vec<Artwork> {
        if self.contains(row.id) {
            self.rows.iter().filter(|r| r.id != row.id).cloned().collect()
        } else {
            let mut next = self.rows.clone();
            next.push(row.clone());
            next
        }
    }

    /// The full selection with every visible row toggled as a group.
    ///
    /// If any visible row is unselected, all visible rows become selected;
    /// otherwise all of them are deselected.
    pub fn toggled_all(&self, visible: &[Artwork]) -> Vec<Artwork> {
        let all_selected = !visible.is_empty() && visible.iter().all(|r| self.contains(r.id));
        if all_selected {
            let page_ids: HashSet<u64> = visible.iter().map(|r| r.id).collect();
            self.rows
                .iter()
                .filter(|r| !page_ids.contains(&r.id))
                .cloned()
                .collect()
        } else {
            let mut next = self.rows.clone();
            next.extend(visible.iter().filter(|r| !self.contains(r.id)).cloned());
            next
        }
    }

    /// Select exactly the first `requested` rows of the visible page.
    ///
    /// Any prior selection state for rows on the visible page is discarded;
    /// selections on other pages are kept. `requested` is clamped to
    /// `[1, visible.len()]`. Returns the number of rows selected.
    pub fn apply_first_n(&mut self, visible: &[Artwork], requested: usize) -> usize {
        let count = clamp_bulk_count(requested, visible.len());
        if count == 0 {
            return 0;
        }

        let page_ids: HashSet<u64> = visible.iter().map(|r| r.id).collect();
        self.rows.retain(|r| !page_ids.contains(&r.id));
        self.ids.retain(|id| !page_ids.contains(id));

        for row in &visible[..count] {
            self.insert(row.clone());
        }

        debug!(
            requested,
            selected = count,
            total = self.rows.len(),
            "Applied bulk selection"
        );
        count
    }

    fn insert(&mut self, row: Artwork) {
        if self.ids.insert(row.id) {
            self.rows.push(row);
        }
    }
}

/// Clamp a bulk-select request to `[1, visible]`.
///
/// Returns 0 only when there are no visible rows.
pub fn clamp_bulk_count(requested: usize, visible: usize) -> usize {
    if visible == 0 {
        0
    } else {
        requested.clamp(1, visible)
    }
}
