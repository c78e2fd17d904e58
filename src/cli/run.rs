//! Run command implementation: the whole pipeline in one invocation.
//!
//! index the layout export, persist the snapshot, then extract templates
//! and the manifest from the in-memory index.

use std::path::Path;

use anyhow::Result;

use super::common::write_json;
use super::extract::write_extraction;
use super::index::{build_index, resolve};
use crate::config::WidexConfig;
use crate::log;

/// Execute run command
pub fn run_pipeline(
    input: Option<&Path>,
    output: Option<&Path>,
    config: &WidexConfig,
) -> Result<()> {
    let input_path = resolve(input, config.input_path());
    let index = build_index(&input_path)?;

    let snapshot_path = config.index_path();
    write_json(&snapshot_path, &index)?;
    log!("index"; "wrote {}", snapshot_path.display());

    let templates_dir = resolve(output, config.templates_dir());
    write_extraction(&index, &templates_dir, config)
}
