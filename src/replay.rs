// Copyright 2025 the Kage Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Scripted interaction replay.
//!
//! A script is a JSON document holding a starting glyph, the parts its
//! components reference, an initial selection and a list of steps. Steps
//! mirror `Action`, except the view transform is given as six affine
//! coefficients since closures cannot be serialized.

use crate::editing::{Action, AppState, PointerEvent, ResizeHandle, ViewTransform};
use crate::model::{BuhinMap, Glyph};
use crate::settings::EditorConfig;
use anyhow::{Context, Result};
use kurbo::Affine;
use serde::{Deserialize, Serialize};

/// A recorded editing session
#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    pub glyph: Glyph,
    #[serde(default)]
    pub buhin: BuhinMap,
    #[serde(default)]
    pub selection: Vec<usize>,
    pub steps: Vec<Step>,
}

/// One serialized action
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    StartAreaSelect { event: PointerEvent },
    StartSelectionDrag { event: PointerEvent },
    StartPointDrag { event: PointerEvent, point: usize },
    StartResize { event: PointerEvent, handle: ResizeHandle },
    PointerMove { event: PointerEvent },
    PointerUp { event: PointerEvent },
    /// Screen to model matrix, in `kurbo::Affine` coefficient order
    UpdateTransform { screen_to_model: [f64; 6] },
    Undo,
    Redo,
}

impl From<Step> for Action {
    fn from(step: Step) -> Self {
        match step {
            Step::StartAreaSelect { event } => Action::StartAreaSelect(event),
            Step::StartSelectionDrag { event } => Action::StartSelectionDrag(event),
            Step::StartPointDrag { event, point } => Action::StartPointDrag(event, point),
            Step::StartResize { event, handle } => Action::StartResize(event, handle),
            Step::PointerMove { event } => Action::PointerMove(event),
            Step::PointerUp { event } => Action::PointerUp(event),
            Step::UpdateTransform { screen_to_model } => {
                Action::UpdateTransform(ViewTransform::from_affine(Affine::new(screen_to_model)))
            }
            Step::Undo => Action::Undo,
            Step::Redo => Action::Redo,
        }
    }
}

/// What the replay binary prints once the script has run
#[derive(Debug, Serialize)]
pub struct Summary<'a> {
    pub glyph: &'a Glyph,
    pub selection: Vec<usize>,
    pub undo_depth: usize,
    pub redo_depth: usize,
}

impl<'a> Summary<'a> {
    pub fn of(state: &'a AppState) -> Self {
        Self {
            glyph: state.glyph.as_ref(),
            selection: state.selection.iter().collect(),
            undo_depth: state.history.undo_len(),
            redo_depth: state.history.redo_len(),
        }
    }
}

impl Script {
    /// Parse a script from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Failed to parse replay script")
    }

    /// Run every step from the script's starting state
    pub fn run(self, config: &EditorConfig) -> AppState {
        let mut state = AppState::new(self.glyph)
            .with_buhin(self.buhin)
            .with_undo_limit(config.undo_limit);
        state.selection = self.selection.into_iter().collect();

        let total = self.steps.len();
        for (i, step) in self.steps.into_iter().enumerate() {
            tracing::debug!("Replaying step {}/{}: {:?}", i + 1, total, step);
            state = state.reduce(step.into());
        }
        tracing::info!(
            "Replayed {} steps (undo depth {}, redo depth {})",
            total,
            state.history.undo_len(),
            state.history.redo_len()
        );
        state
    }
}
