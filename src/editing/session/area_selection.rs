// Copyright 2025 the Kage Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Resolving a marquee rectangle to the glyph lines it selects

use crate::geometry::{polygon_in_polygon, polygon_intersects_polygon};
use crate::model::{Glyph, PartResolver, separate_into_polygons};
use kurbo::Point;

/// Find the lines touched by the rectangle with opposite corners `p1` and
/// `p2` (in any order).
///
/// A line is selected when any of its polygons contains the rectangle, lies
/// inside the rectangle, or has a boundary crossing the rectangle's. Indices
/// are returned in ascending order.
pub fn area_select(glyph: &Glyph, parts: &dyn PartResolver, p1: Point, p2: Point) -> Vec<usize> {
    let area = [
        Point::new(p1.x, p1.y),
        Point::new(p1.x, p2.y),
        Point::new(p2.x, p2.y),
        Point::new(p2.x, p1.y),
        Point::new(p1.x, p1.y),
    ];

    separate_into_polygons(glyph, parts)
        .iter()
        .enumerate()
        .filter(|(_, group)| {
            group.polygons.iter().any(|polygon| {
                let closed = polygon.closed();
                polygon_in_polygon(&area, &closed)
                    || polygon_in_polygon(&closed, &area)
                    || polygon_intersects_polygon(&area, &closed)
            })
        })
        .map(|(index, _)| index)
        .collect()
}
