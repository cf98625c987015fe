// Copyright 2025 the Kage Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer event payload

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A pointer event in device coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub client_x: f64,
    pub client_y: f64,
}

impl PointerEvent {
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }

    /// Device position of the pointer
    pub fn position(&self) -> Point {
        Point::new(self.client_x, self.client_y)
    }
}
