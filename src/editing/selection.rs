// Copyright 2025 the Kage Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Immutable selection set for tracking which glyph lines are selected.
//!
//! `Selection` wraps an `Arc<Vec<usize>>` so it can be cheaply cloned along
//! with every state snapshot. Mutations produce a new list. Entries are
//! unique and keep the order they were added in, which gives a stable
//! display order for the selection panel.

use std::sync::Arc;

/// A set of selected line indices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    inner: Arc<Vec<usize>>,
}

impl Selection {
    /// Create a new empty selection
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Vec::new()),
        }
    }

    /// Check if the selection is empty
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Get the number of selected lines
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if a line is selected
    pub fn contains(&self, index: usize) -> bool {
        self.inner.contains(&index)
    }

    /// Iterate over selected lines in insertion order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.inner.iter().copied()
    }

    /// Add a line to the selection
    pub fn insert(&mut self, index: usize) {
        if self.contains(index) {
            return;
        }
        Arc::make_mut(&mut self.inner).push(index);
    }

    /// Remove a line from the selection
    pub fn remove(&mut self, index: usize) {
        if !self.contains(index) {
            return;
        }
        Arc::make_mut(&mut self.inner).retain(|&i| i != index);
    }

    /// Union `indices` into the selection.
    ///
    /// Existing entries keep their position; new ones are appended in the
    /// order given, skipping duplicates.
    pub fn extend(&mut self, indices: impl IntoIterator<Item = usize>) {
        for index in indices {
            self.insert(index);
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<usize> for Selection {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut selection = Self::new();
        selection.extend(iter);
        selection
    }
}
