// Copyright 2025 the Kage Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing model and interaction

pub mod action;
pub mod mouse;
pub mod selection;
pub mod session;
pub mod transform;
pub mod undo;
pub mod viewport;

pub use action::Action;
pub use mouse::PointerEvent;
pub use selection::Selection;
pub use session::{AppState, DragRect, DragSession, area_select};
pub use transform::{EditError, ResizeHandle};
pub use undo::{History, commit};
pub use viewport::ViewTransform;
