// Copyright 2025 the Kage Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Undo/redo history of glyph snapshots.
//!
//! Snapshots are whole glyphs behind an `Arc`, so pushing one is a pointer
//! copy. Only `commit` records history; it skips edits that left the glyph
//! structurally unchanged, and evicts the oldest snapshot once the undo
//! stack is over its limit.

use super::session::AppState;
use crate::model::Glyph;
use crate::settings;
use std::collections::VecDeque;
use std::sync::Arc;

/// Bounded undo stack plus redo stack
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    /// Most recent snapshot last
    undo: VecDeque<Arc<Glyph>>,
    /// Most recently undone snapshot last
    redo: Vec<Arc<Glyph>>,
    /// Maximum length of `undo` enforced by `commit`
    limit: usize,
}

impl History {
    /// Create an empty history with the default capacity
    pub fn new() -> Self {
        Self::with_limit(settings::undo::MAX_UNDO)
    }

    /// Create an empty history keeping at most `limit` undo snapshots
    pub fn with_limit(limit: usize) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            limit,
        }
    }

    /// Capacity enforced on the undo stack by `commit`
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Whether there is a snapshot to undo to
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Whether there is a snapshot to redo to
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Number of undo snapshots
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    /// Number of redo snapshots
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// Undo snapshots, oldest first
    pub fn undo_snapshots(&self) -> impl Iterator<Item = &Glyph> {
        self.undo.iter().map(|g| g.as_ref())
    }

    /// Redo snapshots, oldest first
    pub fn redo_snapshots(&self) -> impl Iterator<Item = &Glyph> {
        self.redo.iter().map(|g| g.as_ref())
    }

    /// Push a pre-edit snapshot, evicting the oldest entries past the limit
    /// and dropping everything that could have been redone.
    fn record(&mut self, previous: Arc<Glyph>) {
        self.undo.push_back(previous);
        while self.undo.len() > self.limit {
            self.undo.pop_front();
        }
        self.redo.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

/// Commit the transition `old -> new` to history.
///
/// If the glyph did not change, `new` is returned as is. Otherwise the old
/// glyph is pushed onto `old`'s undo stack and the redo stack is cleared.
pub fn commit(old: &AppState, new: AppState) -> AppState {
    if old.glyph == new.glyph {
        tracing::debug!("Edit left the glyph unchanged, not recording undo");
        return new;
    }

    let mut history = old.history.clone();
    history.record(old.glyph.clone());
    tracing::debug!("Recorded undo snapshot (undo depth {})", history.undo_len());
    AppState { history, ..new }
}

impl AppState {
    /// Restore the most recent undo snapshot
    pub fn undo(self) -> Self {
        let mut history = self.history;
        let Some(previous) = history.undo.pop_back() else {
            tracing::debug!("Undo: nothing to undo");
            return AppState { history, ..self };
        };
        history.redo.push(self.glyph);
        tracing::debug!("Undo: restored previous glyph");

        AppState {
            glyph: previous,
            selection: Default::default(),
            history,
            ..self
        }
    }

    /// Re-apply the most recently undone snapshot.
    ///
    /// The undo stack is not capped on this path.
    pub fn redo(self) -> Self {
        let mut history = self.history;
        let Some(next) = history.redo.pop() else {
            tracing::debug!("Redo: nothing to redo");
            return AppState { history, ..self };
        };
        history.undo.push_back(self.glyph);
        tracing::debug!("Redo: restored next glyph");

        AppState {
            glyph: next,
            selection: Default::default(),
            history,
            ..self
        }
    }
}
