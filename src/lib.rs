// Copyright 2025 the Kage Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Kage Editor: the interaction core of a KAGE glyph editor.
//!
//! Pointer events come in as device coordinates, get mapped into model
//! space through the installed `ViewTransform`, and drive one drag at a
//! time: marquee selection, moving the selection, moving a point, or
//! resizing. Completed edits are committed to a bounded undo history.

pub mod editing;
pub mod geometry;
pub mod model;
pub mod replay;
pub mod settings;

pub use editing::{Action, AppState, PointerEvent, ResizeHandle, Selection, ViewTransform};
pub use model::{BuhinMap, Glyph, GlyphLine};

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` is honored; `filter` is added on top of it (for example
/// `kage_editor=debug`). Calling this twice keeps the first subscriber.
pub fn init_tracing(filter: &str) {
    let mut env_filter = EnvFilter::from_default_env();
    match filter.parse::<tracing_subscriber::filter::Directive>() {
        Ok(directive) => env_filter = env_filter.add_directive(directive),
        Err(err) => eprintln!("Ignoring invalid log filter '{}': {}", filter, err),
    }

    if tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init()
        .is_err()
    {
        tracing::debug!("Tracing subscriber already installed");
    }
}
