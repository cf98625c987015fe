// Copyright 2025 the Kage Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Glyph mutation primitives applied when a drag completes.
//!
//! Each primitive takes the current glyph and returns an edited copy, or an
//! `EditError` when the selection does not fit the edit. Callers never
//! commit a failed edit.

use crate::editing::Selection;
use crate::model::{Glyph, GlyphLine};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an edit could not be applied
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    #[error("line {index} is out of range (glyph has {len} lines)")]
    LineOutOfRange { index: usize, len: usize },

    #[error("point {index} is out of range (line has {len} points)")]
    PointOutOfRange { index: usize, len: usize },

    #[error("point drag needs exactly one selected line, found {0}")]
    NotSingleSelection(usize),

    #[error("nothing is selected")]
    EmptySelection,
}

/// Which handle of the selection bounding box is being dragged.
///
/// Model space is y-down, so `Top` is the edge with the smallest y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeHandle {
    TopLeft,
    Top,
    TopRight,
    Left,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl ResizeHandle {
    /// Move the edges this handle controls by `delta`
    fn apply(self, rect: Rect, delta: Vec2) -> Rect {
        use ResizeHandle::*;
        let mut out = rect;
        if matches!(self, TopLeft | Left | BottomLeft) {
            out.x0 += delta.x;
        }
        if matches!(self, TopRight | Right | BottomRight) {
            out.x1 += delta.x;
        }
        if matches!(self, TopLeft | Top | TopRight) {
            out.y0 += delta.y;
        }
        if matches!(self, BottomLeft | Bottom | BottomRight) {
            out.y1 += delta.y;
        }
        out
    }
}

fn line_mut(glyph: &mut Glyph, index: usize) -> Result<&mut GlyphLine, EditError> {
    let len = glyph.lines.len();
    glyph
        .lines
        .get_mut(index)
        .ok_or(EditError::LineOutOfRange { index, len })
}

/// Translate every point of every selected line by `delta`
pub fn move_selected_lines(
    glyph: &Glyph,
    selection: &Selection,
    delta: Vec2,
) -> Result<Glyph, EditError> {
    let mut edited = glyph.clone();
    for index in selection.iter() {
        for pt in line_mut(&mut edited, index)?.points_mut() {
            *pt += delta;
        }
    }
    Ok(edited)
}

/// Move a single point of the one selected line by `delta`
pub fn move_selected_point(
    glyph: &Glyph,
    selection: &Selection,
    point_index: usize,
    delta: Vec2,
) -> Result<Glyph, EditError> {
    if selection.len() != 1 {
        return Err(EditError::NotSingleSelection(selection.len()));
    }
    let Some(line_index) = selection.iter().next() else {
        return Err(EditError::EmptySelection);
    };

    let mut edited = glyph.clone();
    let points = line_mut(&mut edited, line_index)?.points_mut();
    let len = points.len();
    let pt = points
        .get_mut(point_index)
        .ok_or(EditError::PointOutOfRange {
            index: point_index,
            len,
        })?;
    *pt += delta;
    Ok(edited)
}

/// Bounding box of all selected lines
pub fn selection_bounds(glyph: &Glyph, selection: &Selection) -> Result<Option<Rect>, EditError> {
    let mut bounds: Option<Rect> = None;
    for index in selection.iter() {
        let len = glyph.lines.len();
        let line = glyph
            .lines
            .get(index)
            .ok_or(EditError::LineOutOfRange { index, len })?;
        if let Some(rect) = line.bounds() {
            bounds = Some(bounds.map_or(rect, |b| b.union(rect)));
        }
    }
    Ok(bounds)
}

/// Resize the selected lines by dragging one handle of their bounding box
pub fn resize_selected(
    glyph: &Glyph,
    selection: &Selection,
    handle: ResizeHandle,
    delta: Vec2,
) -> Result<Glyph, EditError> {
    if selection.is_empty() {
        return Err(EditError::EmptySelection);
    }
    let Some(old) = selection_bounds(glyph, selection)? else {
        return Ok(glyph.clone());
    };
    let new = handle.apply(old, delta);

    let mut edited = glyph.clone();
    for index in selection.iter() {
        for pt in line_mut(&mut edited, index)?.points_mut() {
            *pt = remap(*pt, old, new);
        }
    }
    Ok(edited)
}

/// Map a point from one box onto another, leaving degenerate axes alone
fn remap(pt: Point, old: Rect, new: Rect) -> Point {
    let x = if old.width() == 0.0 {
        pt.x
    } else {
        new.x0 + (pt.x - old.x0) * new.width() / old.width()
    };
    let y = if old.height() == 0.0 {
        pt.y
    } else {
        new.y0 + (pt.y - old.y0) * new.height() / old.height()
    };
    Point::new(x, y)
}
