// Copyright 2025 the Kage Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Editor actions and the reducer that applies them

use super::mouse::PointerEvent;
use super::session::AppState;
use super::transform::ResizeHandle;
use super::viewport::ViewTransform;

/// Every event the interaction core reacts to
#[derive(Debug, Clone)]
pub enum Action {
    StartAreaSelect(PointerEvent),
    StartSelectionDrag(PointerEvent),
    StartPointDrag(PointerEvent, usize),
    StartResize(PointerEvent, ResizeHandle),
    PointerMove(PointerEvent),
    PointerUp(PointerEvent),
    UpdateTransform(ViewTransform),
    Undo,
    Redo,
}

impl AppState {
    /// Apply one action, producing the next state
    pub fn reduce(self, action: Action) -> Self {
        match action {
            Action::StartAreaSelect(ev) => self.start_area_select(ev),
            Action::StartSelectionDrag(ev) => self.start_selection_drag(ev),
            Action::StartPointDrag(ev, point) => self.start_point_drag(ev, point),
            Action::StartResize(ev, handle) => self.start_resize(ev, handle),
            Action::PointerMove(ev) => self.pointer_move(ev),
            Action::PointerUp(ev) => self.pointer_up(ev),
            Action::UpdateTransform(transform) => self.update_transform(transform),
            Action::Undo => self.undo(),
            Action::Redo => self.redo(),
        }
    }
}
