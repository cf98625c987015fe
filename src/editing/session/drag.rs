// Copyright 2025 the Kage Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Drag state machine for AppState
//!
//! A drag starts on pointer down with one of four intents (area select,
//! move selection, move point, resize), follows the pointer while it moves,
//! and is resolved on pointer up. Only one drag exists at a time: starting
//! a new one replaces whatever was open.

use super::AppState;
use super::area_selection::area_select;
use crate::editing::mouse::PointerEvent;
use crate::editing::selection::Selection;
use crate::editing::transform::{
    EditError, ResizeHandle, move_selected_lines, move_selected_point, resize_selected,
};
use crate::editing::undo;
use crate::editing::viewport::ViewTransform;
use crate::model::Glyph;
use kurbo::{Point, Rect, Vec2};
use std::sync::Arc;

/// Anchor and current pointer position of a drag, in model space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRect {
    pub anchor: Point,
    pub current: Point,
}

impl DragRect {
    /// A drag that has not moved yet
    pub fn new(start: Point) -> Self {
        Self {
            anchor: start,
            current: start,
        }
    }

    /// Distance travelled since the drag started
    pub fn delta(&self) -> Vec2 {
        self.current - self.anchor
    }

    /// Normalized rectangle spanned by the anchor and current point
    pub fn rect(&self) -> Rect {
        Rect::from_points(self.anchor, self.current)
    }
}

/// The drag in progress
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragSession {
    /// No drag
    #[default]
    Idle,
    /// Marquee selection
    AreaSelect(DragRect),
    /// Moving every selected line
    SelectionMove(DragRect),
    /// Moving one point of the selected line
    PointMove { point: usize, rect: DragRect },
    /// Dragging a handle of the selection bounding box
    Resize { handle: ResizeHandle, rect: DragRect },
}

impl DragSession {
    /// Whether no drag is open
    pub fn is_idle(&self) -> bool {
        matches!(self, DragSession::Idle)
    }

    /// Anchor and current point, if a drag is open
    pub fn rect(&self) -> Option<DragRect> {
        match self {
            DragSession::Idle => None,
            DragSession::AreaSelect(rect)
            | DragSession::SelectionMove(rect)
            | DragSession::PointMove { rect, .. }
            | DragSession::Resize { rect, .. } => Some(*rect),
        }
    }

    fn rect_mut(&mut self) -> Option<&mut DragRect> {
        match self {
            DragSession::Idle => None,
            DragSession::AreaSelect(rect)
            | DragSession::SelectionMove(rect)
            | DragSession::PointMove { rect, .. }
            | DragSession::Resize { rect, .. } => Some(rect),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            DragSession::Idle => "idle",
            DragSession::AreaSelect(_) => "area-select",
            DragSession::SelectionMove(_) => "selection-move",
            DragSession::PointMove { .. } => "point-move",
            DragSession::Resize { .. } => "resize",
        }
    }
}

impl AppState {
    // ============================================================================
    // DRAG START
    // ============================================================================

    /// Begin a marquee selection
    pub fn start_area_select(self, event: PointerEvent) -> Self {
        self.start_drag(event, DragSession::AreaSelect)
    }

    /// Begin moving the selected lines
    pub fn start_selection_drag(self, event: PointerEvent) -> Self {
        self.start_drag(event, DragSession::SelectionMove)
    }

    /// Begin moving point `point` of the selected line
    pub fn start_point_drag(self, event: PointerEvent, point: usize) -> Self {
        self.start_drag(event, |rect| DragSession::PointMove { point, rect })
    }

    /// Begin resizing the selection from `handle`
    pub fn start_resize(self, event: PointerEvent, handle: ResizeHandle) -> Self {
        self.start_drag(event, |rect| DragSession::Resize { handle, rect })
    }

    fn start_drag(self, event: PointerEvent, make: impl FnOnce(DragRect) -> DragSession) -> Self {
        let Some(start) = self.model_position(event) else {
            return self;
        };
        let drag = make(DragRect::new(start));
        if !self.drag.is_idle() {
            tracing::debug!(
                "Starting {} drag replaces open {} drag",
                drag.name(),
                self.drag.name()
            );
        }
        tracing::debug!("Drag start: {} at ({}, {})", drag.name(), start.x, start.y);
        Self { drag, ..self }
    }

    // ============================================================================
    // DRAG UPDATE / FINISH
    // ============================================================================

    /// Follow the pointer with the open drag
    pub fn pointer_move(self, event: PointerEvent) -> Self {
        let Some(pos) = self.model_position(event) else {
            return self;
        };
        let mut drag = self.drag;
        let Some(rect) = drag.rect_mut() else {
            return self;
        };
        rect.current = pos;
        Self { drag, ..self }
    }

    /// Finish the open drag at the pointer position
    ///
    /// Area selection unions the lines under the marquee into the selection.
    /// The other drags edit the glyph and commit it to history. The drag is
    /// closed either way, even when the edit is rejected.
    pub fn pointer_up(self, event: PointerEvent) -> Self {
        let Some(pos) = self.model_position(event) else {
            return self;
        };
        let mut drag = self.drag;
        let Some(rect) = drag.rect_mut() else {
            return self;
        };
        rect.current = pos;
        let delta = rect.delta();
        tracing::debug!("Drag end: {} delta ({}, {})", drag.name(), delta.x, delta.y);

        match drag {
            DragSession::Idle => self,
            DragSession::AreaSelect(rect) => {
                let hits = area_select(&self.glyph, self.buhin.as_ref(), rect.anchor, rect.current);
                tracing::debug!("Area select hit lines {:?}", hits);
                let mut selection = self.selection.clone();
                selection.extend(hits);
                Self {
                    selection,
                    drag: DragSession::Idle,
                    ..self
                }
            }
            DragSession::SelectionMove(rect) => self.commit_edit(|glyph, selection| {
                move_selected_lines(glyph, selection, rect.delta())
            }),
            DragSession::PointMove { point, rect } => self.commit_edit(|glyph, selection| {
                move_selected_point(glyph, selection, point, rect.delta())
            }),
            DragSession::Resize { handle, rect } => self.commit_edit(|glyph, selection| {
                resize_selected(glyph, selection, handle, rect.delta())
            }),
        }
    }

    /// Install the device to model mapping for the current view
    pub fn update_transform(self, transform: ViewTransform) -> Self {
        Self {
            transform: Some(transform),
            ..self
        }
    }

    // ============================================================================
    // PREVIEW
    // ============================================================================

    /// The marquee rectangle, while an area selection is open
    pub fn area_select_rect(&self) -> Option<Rect> {
        match self.drag {
            DragSession::AreaSelect(rect) => Some(rect.rect()),
            _ => None,
        }
    }

    /// The glyph as it would be if the pointer were released now
    pub fn dragged_glyph(&self) -> Arc<Glyph> {
        let preview = match self.drag {
            DragSession::Idle | DragSession::AreaSelect(_) => return self.glyph.clone(),
            DragSession::SelectionMove(rect) => {
                move_selected_lines(&self.glyph, &self.selection, rect.delta())
            }
            DragSession::PointMove { point, rect } => {
                move_selected_point(&self.glyph, &self.selection, point, rect.delta())
            }
            DragSession::Resize { handle, rect } => {
                resize_selected(&self.glyph, &self.selection, handle, rect.delta())
            }
        };
        preview.map_or_else(|_| self.glyph.clone(), Arc::new)
    }

    // ===== PRIVATE HELPERS =====

    fn model_position(&self, event: PointerEvent) -> Option<Point> {
        let transform = self.transform.as_ref()?;
        Some(transform.screen_to_model(event.position()))
    }

    /// Apply a glyph edit, close the drag and record the change for undo
    fn commit_edit<F>(self, edit: F) -> Self
    where
        F: FnOnce(&Glyph, &Selection) -> Result<Glyph, EditError>,
    {
        match edit(self.glyph.as_ref(), &self.selection) {
            Ok(glyph) => {
                let next = Self {
                    glyph: Arc::new(glyph),
                    drag: DragSession::Idle,
                    ..self.clone()
                };
                undo::commit(&self, next)
            }
            Err(err) => {
                tracing::warn!("Drag edit rejected: {}", err);
                Self {
                    drag: DragSession::Idle,
                    ..self
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GlyphLine;
    use kurbo::Affine;

    fn two_groups() -> Glyph {
        Glyph::new(vec![
            GlyphLine::rect(0.0, 0.0, 10.0, 10.0),
            GlyphLine::rect(50.0, 50.0, 150.0, 150.0),
        ])
    }

    /// View at 2x zoom with the model origin at device (100, 100)
    fn mounted(glyph: Glyph) -> AppState {
        let model_to_screen = Affine::translate(Vec2::new(100.0, 100.0)) * Affine::scale(2.0);
        AppState::new(glyph).update_transform(ViewTransform::from_affine(model_to_screen.inverse()))
    }

    /// Device event at model position (x, y) for the `mounted` view
    fn at(x: f64, y: f64) -> PointerEvent {
        PointerEvent::new(100.0 + 2.0 * x, 100.0 + 2.0 * y)
    }

    fn assert_unchanged(before: &AppState, after: &AppState) {
        assert_eq!(before.glyph, after.glyph);
        assert_eq!(before.selection, after.selection);
        assert_eq!(before.drag, after.drag);
        assert_eq!(before.history, after.history);
    }

    #[test]
    fn events_are_ignored_without_transform() {
        let mut state = AppState::new(two_groups());
        state.selection = Selection::from_iter([0]);
        let ev = PointerEvent::new(5.0, 5.0);

        assert_unchanged(&state, &state.clone().start_area_select(ev));
        assert_unchanged(&state, &state.clone().start_selection_drag(ev));
        assert_unchanged(&state, &state.clone().start_point_drag(ev, 0));
        assert_unchanged(&state, &state.clone().start_resize(ev, ResizeHandle::Top));
        assert_unchanged(&state, &state.clone().pointer_move(ev));
        assert_unchanged(&state, &state.clone().pointer_up(ev));
    }

    #[test]
    fn pointer_events_ignored_when_unmounted_even_mid_drag() {
        let mut state = AppState::new(two_groups());
        state.drag = DragSession::SelectionMove(DragRect::new(Point::ZERO));
        let next = state.clone().pointer_up(PointerEvent::new(50.0, 50.0));
        assert_unchanged(&state, &next);
    }

    #[test]
    fn start_sets_anchor_equal_to_current() {
        let state = mounted(two_groups()).start_selection_drag(at(3.0, 4.0));
        let rect = state.drag.rect().unwrap();
        assert_eq!(rect.anchor, Point::new(3.0, 4.0));
        assert_eq!(rect.current, Point::new(3.0, 4.0));
    }

    #[test]
    fn move_updates_current_only() {
        let state = mounted(two_groups())
            .start_point_drag(at(1.0, 1.0), 2)
            .pointer_move(at(6.0, 8.0));

        assert_eq!(
            state.drag,
            DragSession::PointMove {
                point: 2,
                rect: DragRect {
                    anchor: Point::new(1.0, 1.0),
                    current: Point::new(6.0, 8.0),
                },
            }
        );
    }

    #[test]
    fn move_without_drag_is_noop() {
        let state = mounted(two_groups());
        let next = state.clone().pointer_move(at(6.0, 8.0));
        assert_unchanged(&state, &next);
    }

    #[test]
    fn up_without_drag_is_noop() {
        let state = mounted(two_groups());
        let next = state.clone().pointer_up(at(6.0, 8.0));
        assert_unchanged(&state, &next);
    }

    #[test]
    fn last_start_wins() {
        let state = mounted(two_groups())
            .start_point_drag(at(1.0, 1.0), 0)
            .start_area_select(at(2.0, 2.0))
            .pointer_move(at(5.0, 5.0));

        assert_eq!(
            state.drag,
            DragSession::AreaSelect(DragRect {
                anchor: Point::new(2.0, 2.0),
                current: Point::new(5.0, 5.0),
            })
        );
    }

    #[test]
    fn area_select_unions_into_selection() {
        let mut state = mounted(two_groups());
        state.selection = Selection::from_iter([1]);
        let state = state
            .start_area_select(at(-5.0, -5.0))
            .pointer_move(at(100.0, 100.0))
            .pointer_up(at(200.0, 200.0));

        assert_eq!(state.selection.iter().collect::<Vec<_>>(), vec![1, 0]);
        assert!(state.drag.is_idle());
        assert!(!state.history.can_undo());
    }

    #[test]
    fn area_select_uses_pointer_up_position() {
        let state = mounted(two_groups())
            .start_area_select(at(2.0, 2.0))
            .pointer_up(at(4.0, 4.0));
        assert_eq!(state.selection.iter().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn selection_drag_moves_and_commits() {
        let mut state = mounted(two_groups());
        state.selection = Selection::from_iter([0]);
        let original = state.glyph.clone();
        let state = state
            .start_selection_drag(at(5.0, 5.0))
            .pointer_move(at(8.0, 9.0))
            .pointer_up(at(8.0, 9.0));

        assert_eq!(state.glyph.lines[0].points()[0], Point::new(3.0, 4.0));
        assert_eq!(state.glyph.lines[1], original.lines[1]);
        assert_eq!(state.history.undo_len(), 1);
        assert_eq!(state.history.undo_snapshots().next(), Some(original.as_ref()));
        assert!(state.drag.is_idle());
    }

    #[test]
    fn zero_motion_drags_do_not_record_undo() {
        let mut state = mounted(two_groups());
        state.selection = Selection::from_iter([0]);

        let moved = state
            .clone()
            .start_selection_drag(at(5.0, 5.0))
            .pointer_up(at(5.0, 5.0));
        assert!(!moved.history.can_undo());
        assert!(moved.drag.is_idle());

        let point = state
            .clone()
            .start_point_drag(at(5.0, 5.0), 1)
            .pointer_up(at(5.0, 5.0));
        assert!(!point.history.can_undo());

        let resized = state
            .start_resize(at(5.0, 5.0), ResizeHandle::BottomRight)
            .pointer_up(at(5.0, 5.0));
        assert!(!resized.history.can_undo());
        assert!(resized.drag.is_idle());
    }

    #[test]
    fn point_drag_moves_one_point() {
        let mut state = mounted(two_groups());
        state.selection = Selection::from_iter([1]);
        let state = state
            .start_point_drag(at(150.0, 150.0), 2)
            .pointer_up(at(160.0, 140.0));

        assert_eq!(state.glyph.lines[1].points()[2], Point::new(160.0, 140.0));
        assert_eq!(state.history.undo_len(), 1);
    }

    #[test]
    fn resize_commits_scaled_glyph() {
        let mut state = mounted(two_groups());
        state.selection = Selection::from_iter([0]);
        let state = state
            .start_resize(at(10.0, 10.0), ResizeHandle::BottomRight)
            .pointer_up(at(20.0, 30.0));

        assert_eq!(state.glyph.lines[0].points()[2], Point::new(20.0, 30.0));
        assert_eq!(state.history.undo_len(), 1);
    }

    #[test]
    fn rejected_edit_closes_drag_without_history() {
        let mut state = mounted(two_groups());
        state.selection = Selection::from_iter([0, 1]);
        let original = state.glyph.clone();
        let state = state
            .start_point_drag(at(0.0, 0.0), 0)
            .pointer_up(at(5.0, 5.0));

        assert_eq!(state.glyph, original);
        assert!(state.drag.is_idle());
        assert!(!state.history.can_undo());
    }

    #[test]
    fn commit_after_undo_clears_redo() {
        let mut state = mounted(two_groups());
        state.selection = Selection::from_iter([0]);
        let state = state
            .start_selection_drag(at(0.0, 0.0))
            .pointer_up(at(1.0, 0.0))
            .undo();
        assert!(state.history.can_redo());

        let mut state = state;
        state.selection = Selection::from_iter([1]);
        let state = state
            .start_selection_drag(at(0.0, 0.0))
            .pointer_up(at(0.0, 1.0));
        assert!(!state.history.can_redo());
    }

    #[test]
    fn transform_update_applies_to_open_drag() {
        let state = mounted(two_groups())
            .start_area_select(at(0.0, 0.0))
            .update_transform(ViewTransform::from_fn(|pt| pt))
            .pointer_move(PointerEvent::new(7.0, 7.0));

        assert_eq!(state.area_select_rect(), Some(Rect::new(0.0, 0.0, 7.0, 7.0)));
    }

    #[test]
    fn area_select_rect_is_normalized() {
        let state = mounted(two_groups())
            .start_area_select(at(10.0, 10.0))
            .pointer_move(at(2.0, 4.0));
        assert_eq!(state.area_select_rect(), Some(Rect::new(2.0, 4.0, 10.0, 10.0)));
        assert_eq!(mounted(two_groups()).area_select_rect(), None);
    }

    #[test]
    fn dragged_glyph_previews_open_drag() {
        let mut state = mounted(two_groups());
        state.selection = Selection::from_iter([0]);
        let state = state
            .start_selection_drag(at(0.0, 0.0))
            .pointer_move(at(2.0, 0.0));

        let preview = state.dragged_glyph();
        assert_eq!(preview.lines[0].points()[0], Point::new(2.0, 0.0));
        // Nothing is committed until pointer up
        assert_eq!(state.glyph.lines[0].points()[0], Point::new(0.0, 0.0));
        assert!(!state.history.can_undo());
    }

    #[test]
    fn dragged_glyph_falls_back_on_rejected_edit() {
        let state = mounted(two_groups())
            .start_resize(at(0.0, 0.0), ResizeHandle::Left)
            .pointer_move(at(2.0, 0.0));
        assert_eq!(state.dragged_glyph(), state.glyph);
    }
}
