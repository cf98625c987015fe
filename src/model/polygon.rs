// Copyright 2025 the Kage Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Flattening a glyph into per-line polygon groups.
//!
//! Area selection works on plain polygons, so every outline line is turned
//! into the closed polygons it draws. Component lines pull in the polygons of
//! the referenced part, scaled from the part's design square into the
//! component frame. Nested components are resolved recursively.

use super::glyph::{Glyph, GlyphLine, PartResolver};
use crate::settings;
use kurbo::{Affine, Point, Rect, Vec2};

/// A simple polygon, stored open (the first point is not repeated)
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub points: Vec<Point>,
}

/// All polygons drawn by one glyph line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolygonGroup {
    pub polygons: Vec<Polygon>,
}

impl Polygon {
    /// The vertex list with the first point appended as the last one
    pub fn closed(&self) -> Vec<Point> {
        let mut points = self.points.clone();
        if let Some(first) = self.points.first() {
            points.push(*first);
        }
        points
    }
}

/// Separate a glyph into one polygon group per line, in line order.
///
/// The returned vector always has `glyph.len()` entries so group indices
/// line up with line indices. Lines that cannot be resolved produce an
/// empty group.
pub fn separate_into_polygons(glyph: &Glyph, parts: &dyn PartResolver) -> Vec<PolygonGroup> {
    glyph
        .lines
        .iter()
        .map(|line| {
            let mut group = PolygonGroup::default();
            collect_line_polygons(line, parts, Affine::IDENTITY, 0, &mut group.polygons);
            group
        })
        .collect()
}

fn collect_line_polygons(
    line: &GlyphLine,
    parts: &dyn PartResolver,
    transform: Affine,
    depth: usize,
    out: &mut Vec<Polygon>,
) {
    match line {
        GlyphLine::Outline { points } => {
            if points.is_empty() {
                return;
            }
            out.push(Polygon {
                points: points.iter().map(|pt| transform * *pt).collect(),
            });
        }
        GlyphLine::Component { part, frame } => {
            if depth >= settings::components::MAX_DEPTH {
                tracing::warn!(
                    "Component '{}' nested deeper than {} levels, skipping",
                    part,
                    settings::components::MAX_DEPTH
                );
                return;
            }
            let Some(part_glyph) = parts.part(part) else {
                tracing::warn!("Unknown part '{}' referenced by component", part);
                return;
            };

            let frame_transform = transform * part_to_frame(frame);
            for inner in &part_glyph.lines {
                collect_line_polygons(inner, parts, frame_transform, depth + 1, out);
            }
        }
    }
}

/// Map the part design square onto a component frame
fn part_to_frame(frame: &[Point; 2]) -> Affine {
    let rect = Rect::from_points(frame[0], frame[1]);
    let size = settings::components::DESIGN_SIZE;
    Affine::translate(Vec2::new(rect.x0, rect.y0))
        * Affine::scale_non_uniform(rect.width() / size, rect.height() / size)
}
