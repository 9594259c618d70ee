// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sparse per-dot selection scale.

use hashbrown::HashMap;

/// Sparse mapping from dot index to a selection scale in `(0, 1]`.
///
/// Absent indices read as `0.0`. Storing `0.0` removes the entry, so the table
/// never holds more than the handful of dots that are currently (partially)
/// selected.
#[derive(Clone, Debug, Default)]
pub struct ScaleTable {
    scales: HashMap<usize, f64>,
}

impl ScaleTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the scale of dot `index`, or `0.0` when unset.
    #[must_use]
    pub fn get(&self, index: usize) -> f64 {
        self.scales.get(&index).copied().unwrap_or(0.0)
    }

    /// Sets the scale of dot `index`; a zero scale removes the entry.
    pub fn set(&mut self, index: usize, scale: f64) {
        if scale == 0.0 {
            self.scales.remove(&index);
        } else {
            self.scales.insert(index, scale);
        }
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.scales.clear();
    }

    /// Resets the table to exactly one fully selected dot.
    pub fn settle(&mut self, index: usize) {
        self.scales.clear();
        self.scales.insert(index, 1.0);
    }

    /// Number of dots with a non-zero scale.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scales.len()
    }

    /// Returns `true` if no dot has a non-zero scale.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }

    /// Iterates over `(index, scale)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.scales.iter().map(|(&i, &s)| (i, s))
    }
}

#[cfg(test)]
mod tests {
    use super::ScaleTable;

    #[test]
    fn absent_entries_read_as_zero() {
        let table = ScaleTable::new();
        assert_eq!(table.get(0), 0.0);
        assert_eq!(table.get(usize::MAX), 0.0);
        assert!(table.is_empty());
    }

    #[test]
    fn zero_scale_removes_entry() {
        let mut table = ScaleTable::new();
        table.set(3, 0.4);
        assert_eq!(table.len(), 1);
        table.set(3, 0.0);
        assert!(table.is_empty());
        assert_eq!(table.get(3), 0.0);
    }

    #[test]
    fn settle_leaves_a_single_selected_dot() {
        let mut table = ScaleTable::new();
        table.set(1, 0.25);
        table.set(2, 0.75);
        table.settle(5);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(5), 1.0);
        assert_eq!(table.get(2), 0.0);
    }
}
