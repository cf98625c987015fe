// Copyright 2025 the Kage Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Polygon containment and intersection tests.
//!
//! Polygons here are closed vertex lists: the first point is repeated as the
//! last one, so consecutive pairs are exactly the polygon's edges. Tests are
//! inclusive: touching edges intersect and boundary points are inside.

use kurbo::{Point, Vec2};

/// Sign of the turn `a -> b -> c` (positive for counter-clockwise)
fn orientation(a: Point, b: Point, c: Point) -> f64 {
    Vec2::cross(b - a, c - a)
}

/// Whether `p`, known to be collinear with `a` and `b`, lies between them
fn within_segment_bounds(a: Point, b: Point, p: Point) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

fn point_on_segment(p: Point, a: Point, b: Point) -> bool {
    orientation(a, b, p) == 0.0 && within_segment_bounds(a, b, p)
}

/// Whether the closed segments `a0-a1` and `b0-b1` share at least one point
pub fn segments_intersect(a0: Point, a1: Point, b0: Point, b1: Point) -> bool {
    let d1 = orientation(b0, b1, a0);
    let d2 = orientation(b0, b1, a1);
    let d3 = orientation(a0, a1, b0);
    let d4 = orientation(a0, a1, b1);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1 == 0.0 && within_segment_bounds(b0, b1, a0))
        || (d2 == 0.0 && within_segment_bounds(b0, b1, a1))
        || (d3 == 0.0 && within_segment_bounds(a0, a1, b0))
        || (d4 == 0.0 && within_segment_bounds(a0, a1, b1))
}

/// Even-odd point in polygon test; boundary points count as inside
pub fn point_in_polygon(point: Point, polygon: &[Point]) -> bool {
    if polygon.windows(2).any(|edge| point_on_segment(point, edge[0], edge[1])) {
        return true;
    }

    let mut inside = false;
    for edge in polygon.windows(2) {
        let (a, b) = (edge[0], edge[1]);
        if (a.y > point.y) != (b.y > point.y) {
            let x_cross = a.x + (point.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if point.x < x_cross {
                inside = !inside;
            }
        }
    }
    inside
}

/// Whether every vertex of `inner` lies inside `outer`
pub fn polygon_in_polygon(inner: &[Point], outer: &[Point]) -> bool {
    !inner.is_empty() && inner.iter().all(|pt| point_in_polygon(*pt, outer))
}

/// Whether any edge of `a` touches or crosses any edge of `b`
pub fn polygon_intersects_polygon(a: &[Point], b: &[Point]) -> bool {
    a.windows(2).any(|ea| b.windows(2).any(|eb| segments_intersect(ea[0], ea[1], eb[0], eb[1])))
}
