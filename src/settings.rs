// Copyright 2025 the Kage Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Editor settings and configuration constants.
//!
//! Compile-time defaults live at the top of this file. `EditorConfig` lets
//! the replay binary override the few values that make sense to tune per
//! run, read from an optional TOML file.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

// ============================================================================
// UNDO SETTINGS
// ============================================================================
/// Maximum number of glyph snapshots kept on the undo stack
const MAX_UNDO: usize = 30;

// ============================================================================
// COMPONENT (BUHIN) SETTINGS
// ============================================================================
/// Side of the KAGE design square parts are drawn in
const DESIGN_SIZE: f64 = 200.0;

/// Deepest component nesting resolved before giving up (cycle guard)
const MAX_COMPONENT_DEPTH: usize = 8;

// ============================================================================
// LOGGING SETTINGS
// ============================================================================
/// Filter directive used when no config overrides it
const DEFAULT_LOG_FILTER: &str = "kage_editor=info";

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Undo history settings
pub mod undo {
    /// Maximum number of entries on the undo stack
    pub const MAX_UNDO: usize = super::MAX_UNDO;
}

/// Component (buhin) resolution settings
pub mod components {
    /// Side of the square design space a part is authored in
    pub const DESIGN_SIZE: f64 = super::DESIGN_SIZE;

    /// Maximum nesting depth for component references
    pub const MAX_DEPTH: usize = super::MAX_COMPONENT_DEPTH;
}

/// Logging settings
pub mod logging {
    /// Default `tracing` filter directive
    pub const DEFAULT_FILTER: &str = super::DEFAULT_LOG_FILTER;
}

/// Runtime configuration, loaded from TOML.
///
/// Every key is optional:
///
/// ```toml
/// undo_limit = 50
/// log_filter = "kage_editor=debug"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Capacity of the undo stack
    pub undo_limit: usize,
    /// `tracing` filter directive added on top of `RUST_LOG`
    pub log_filter: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            undo_limit: undo::MAX_UNDO,
            log_filter: logging::DEFAULT_FILTER.to_string(),
        }
    }
}

impl EditorConfig {
    /// Parse a config from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse editor config")
    }

    /// Load a config file from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml(&text)
    }
}
