// Copyright 2025 the Kage Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! kage-replay: run a scripted editing session and print the result

use anyhow::{Context, Result};
use kage_editor::replay::{Script, Summary};
use kage_editor::settings::EditorConfig;
use std::path::PathBuf;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        anyhow::bail!("Usage: kage-replay <script.json> [config.toml]");
    }

    let config = match args.get(2) {
        Some(path) => EditorConfig::load(path)?,
        None => EditorConfig::default(),
    };
    kage_editor::init_tracing(&config.log_filter);

    let script_path = PathBuf::from(&args[1]);
    tracing::info!("Loading script from: {}", script_path.display());
    let text = std::fs::read_to_string(&script_path)
        .with_context(|| format!("Failed to read script: {}", script_path.display()))?;

    let state = Script::from_json(&text)?.run(&config);
    let output = serde_json::to_string_pretty(&Summary::of(&state))
        .context("Failed to serialize replay summary")?;
    println!("{output}");
    Ok(())
}
