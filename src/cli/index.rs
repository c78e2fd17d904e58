//! Index command implementation.
//!
//! Reads the layout export, walks it once, and writes the WidgetIndex
//! snapshot (`{tag: {count, instances}}`) consumed by the extract command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use super::common::{read_json, write_json};
use crate::config::WidexConfig;
use crate::indexer::{self, WidgetIndex};
use crate::utils::plural_count;
use crate::{debug, log};

/// Execute index command
pub fn run_index(
    input: Option<&Path>,
    output: Option<&Path>,
    config: &WidexConfig,
) -> Result<()> {
    let input_path = resolve(input, config.input_path());
    let output_path = resolve(output, config.index_path());

    let index = build_index(&input_path)?;
    write_json(&output_path, &index)?;
    log!("index"; "wrote {}", output_path.display());
    Ok(())
}

/// Read a layout export and index it, logging a summary.
pub(crate) fn build_index(input_path: &Path) -> Result<WidgetIndex> {
    let document = read_json(input_path)?;
    let (index, stats) = indexer::index_document(&document);

    debug!(
        "index"; "visited {} (max depth {})",
        plural_count(stats.nodes_visited, "node"), stats.max_depth
    );
    log!(
        "index"; "found {} across {}",
        plural_count(index.instance_count(), "widget"),
        plural_count(index.tag_count(), "type")
    );
    Ok(index)
}

/// CLI paths win over config defaults; relative CLI paths are taken as
/// given (cwd-relative), config defaults are root-relative.
pub(crate) fn resolve(cli_path: Option<&Path>, default: PathBuf) -> PathBuf {
    cli_path.map_or(default, Path::to_path_buf)
}
