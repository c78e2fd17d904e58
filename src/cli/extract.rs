//! Extract command implementation.
//!
//! Reads a WidgetIndex snapshot and writes one template file per widget
//! type plus a `manifest.json` mapping each tag to its instance count and
//! template file name.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::common::{read_json, write_json};
use super::index::resolve;
use crate::config::WidexConfig;
use crate::extractor::extract_templates;
use crate::indexer::WidgetIndex;
use crate::log;
use crate::utils::plural_count;

/// Name of the per-run summary written next to the templates.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Execute extract command
pub fn run_extract(
    index_path: Option<&Path>,
    output: Option<&Path>,
    config: &WidexConfig,
) -> Result<()> {
    let snapshot_path = resolve(index_path, config.index_path());
    let snapshot = read_json(&snapshot_path)?;
    let mut index: WidgetIndex = serde_json::from_value(snapshot)
        .with_context(|| format!("invalid index snapshot {}", snapshot_path.display()))?;
    // Snapshots are hand-editable; trust instances, not stored counts
    index.rebuild_counts();

    let templates_dir = resolve(output, config.templates_dir());
    write_extraction(&index, &templates_dir, config)
}

/// Extract templates from an in-memory index and write all artifacts.
pub(crate) fn write_extraction(
    index: &WidgetIndex,
    templates_dir: &Path,
    config: &WidexConfig,
) -> Result<()> {
    let schema = config.field_schema();
    let extraction = extract_templates(index, &schema);

    fs::create_dir_all(templates_dir)
        .with_context(|| format!("failed to create {}", templates_dir.display()))?;

    for (tag, template) in &extraction.templates {
        let file = templates_dir.join(&extraction.manifest[tag.as_str()].template_file);
        write_json(&file, template)?;
    }
    write_json(&templates_dir.join(MANIFEST_FILE), &extraction.manifest)?;

    log!(
        "extract"; "wrote {} to {}",
        plural_count(extraction.templates.len(), "template"),
        templates_dir.display()
    );
    Ok(())
}
