// Copyright 2025 the Kage Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Device to model coordinate mapping.
//!
//! Pointer events only carry device (screen) coordinates. The view installs
//! a `ViewTransform` whenever its pan, zoom or viewport size changes, and
//! every drag computation goes through it.

use kurbo::{Affine, Point};
use std::fmt;
use std::sync::Arc;

/// Maps device coordinates to model coordinates
#[derive(Clone)]
pub struct ViewTransform {
    screen_to_model: Arc<dyn Fn(Point) -> Point + Send + Sync>,
}

impl ViewTransform {
    /// Wrap an arbitrary mapping function
    pub fn from_fn(f: impl Fn(Point) -> Point + Send + Sync + 'static) -> Self {
        Self {
            screen_to_model: Arc::new(f),
        }
    }

    /// Use an affine screen-to-model matrix (usually the inverse of the
    /// view's model-to-screen transform)
    pub fn from_affine(screen_to_model: Affine) -> Self {
        Self::from_fn(move |pt| screen_to_model * pt)
    }

    /// Map a device position into model space
    pub fn screen_to_model(&self, screen_pos: Point) -> Point {
        (self.screen_to_model)(screen_pos)
    }
}

impl fmt::Debug for ViewTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewTransform").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Vec2;

    #[test]
    fn affine_inverse_round_trips_view() {
        let model_to_screen = Affine::translate(Vec2::new(100.0, 50.0)) * Affine::scale(2.0);
        let transform = ViewTransform::from_affine(model_to_screen.inverse());

        assert_eq!(
            transform.screen_to_model(Point::new(120.0, 70.0)),
            Point::new(10.0, 10.0)
        );
    }

    #[test]
    fn closures_are_shared_between_clones() {
        let transform = ViewTransform::from_fn(|pt| Point::new(pt.x / 4.0, pt.y / 4.0));
        let clone = transform.clone();
        assert_eq!(clone.screen_to_model(Point::new(8.0, 4.0)), Point::new(2.0, 1.0));
    }
}
