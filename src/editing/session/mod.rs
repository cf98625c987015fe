// Copyright 2025 the Kage Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Editor state - the snapshot threaded through every interaction

mod area_selection;
mod drag;

pub use area_selection::area_select;
pub use drag::{DragRect, DragSession};

use super::selection::Selection;
use super::undo::History;
use super::viewport::ViewTransform;
use crate::model::{BuhinMap, Glyph};
use std::sync::Arc;

/// Application state for glyph editing
///
/// Every pointer, transform and undo event consumes a state and returns the
/// next one. Glyph snapshots and the part map sit behind `Arc`s, so cloning
/// a state copies pointers rather than outlines.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Device to model mapping; `None` until the view is mounted, and
    /// every pointer event is ignored while it is missing
    pub transform: Option<ViewTransform>,

    /// The glyph being edited
    pub glyph: Arc<Glyph>,

    /// Parts referenced by component lines
    pub buhin: Arc<BuhinMap>,

    /// Selected line indices
    pub selection: Selection,

    /// The drag in progress, if any
    pub drag: DragSession,

    /// Undo/redo snapshots
    pub history: History,
}

impl AppState {
    /// Create a state editing `glyph`, with no view mounted yet
    pub fn new(glyph: Glyph) -> Self {
        Self {
            transform: None,
            glyph: Arc::new(glyph),
            buhin: Arc::new(BuhinMap::new()),
            selection: Selection::new(),
            drag: DragSession::Idle,
            history: History::new(),
        }
    }

    /// Use `buhin` to resolve component lines
    pub fn with_buhin(self, buhin: BuhinMap) -> Self {
        Self {
            buhin: Arc::new(buhin),
            ..self
        }
    }

    /// Replace the history with an empty one of capacity `limit`
    pub fn with_undo_limit(self, limit: usize) -> Self {
        Self {
            history: History::with_limit(limit),
            ..self
        }
    }

    /// Whether a view transform has been installed
    pub fn is_mounted(&self) -> bool {
        self.transform.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GlyphLine;

    #[test]
    fn new_state_is_unmounted_and_idle() {
        let state = AppState::new(Glyph::new(vec![GlyphLine::rect(0.0, 0.0, 1.0, 1.0)]));

        assert!(!state.is_mounted());
        assert_eq!(state.drag, DragSession::Idle);
        assert!(state.selection.is_empty());
        assert_eq!(state.history.limit(), 30);
    }

    #[test]
    fn with_undo_limit_sets_capacity() {
        let state = AppState::new(Glyph::default()).with_undo_limit(4);
        assert_eq!(state.history.limit(), 4);
    }
}
