// Copyright 2025 the Kage Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Glyph data model

pub mod glyph;
pub mod polygon;

pub use glyph::{BuhinMap, Glyph, GlyphLine, PartResolver};
pub use polygon::{Polygon, PolygonGroup, separate_into_polygons};
