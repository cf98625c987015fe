// Copyright 2025 the Kage Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Vector glyph model.
//!
//! A `Glyph` is an ordered list of outline lines. Selection, undo snapshots
//! and area selection all address lines by their index in that list, so the
//! order is significant and never reshuffled by edits.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A glyph: an ordered sequence of outline lines.
///
/// Equality is structural over every line and point, which is what the undo
/// history uses to skip no-op edits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Glyph {
    pub lines: Vec<GlyphLine>,
}

/// One line of a glyph outline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GlyphLine {
    /// A closed contour in model space
    Outline { points: Vec<Point> },
    /// A reference to another glyph (a buhin), drawn into `frame`.
    ///
    /// `frame` holds two opposite corners; the part's design square is
    /// scaled to fit between them.
    Component { part: String, frame: [Point; 2] },
}

impl Glyph {
    /// Create a glyph from its lines
    pub fn new(lines: Vec<GlyphLine>) -> Self {
        Self { lines }
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the glyph has no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl GlyphLine {
    /// Build a closed rectangular outline from two corners
    pub fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        GlyphLine::Outline {
            points: vec![
                Point::new(x0, y0),
                Point::new(x1, y0),
                Point::new(x1, y1),
                Point::new(x0, y1),
            ],
        }
    }

    /// The editable points of this line.
    ///
    /// For components these are the two frame corners.
    pub fn points(&self) -> &[Point] {
        match self {
            GlyphLine::Outline { points } => points.as_slice(),
            GlyphLine::Component { frame, .. } => frame.as_slice(),
        }
    }

    /// Mutable access to the editable points
    pub fn points_mut(&mut self) -> &mut [Point] {
        match self {
            GlyphLine::Outline { points } => points.as_mut_slice(),
            GlyphLine::Component { frame, .. } => frame.as_mut_slice(),
        }
    }

    /// Bounding box of the editable points, `None` for an empty outline
    pub fn bounds(&self) -> Option<Rect> {
        let mut points = self.points().iter();
        let first = points.next()?;
        Some(points.fold(Rect::from_points(*first, *first), |rect, pt| {
            rect.union_pt(*pt)
        }))
    }
}

// ============================================================================
// PART LOOKUP
// ============================================================================

/// Resolves component references to the glyphs they point at.
///
/// This keeps polygon separation independent of where parts are stored.
pub trait PartResolver {
    /// Look up a part glyph by name
    fn part(&self, name: &str) -> Option<&Glyph>;
}

/// Named part glyphs available to component lines
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuhinMap {
    parts: HashMap<String, Glyph>,
}

impl BuhinMap {
    /// Create an empty part map
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a named part
    pub fn insert(&mut self, name: impl Into<String>, glyph: Glyph) {
        self.parts.insert(name.into(), glyph);
    }

    /// Number of parts
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether the map holds no parts
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl PartResolver for BuhinMap {
    fn part(&self, name: &str) -> Option<&Glyph> {
        self.parts.get(name)
    }
}
