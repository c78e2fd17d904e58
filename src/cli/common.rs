//! Shared file I/O helpers for the CLI commands.
//!
//! Only document deserialization failures and unwritable artifacts
//! propagate; everything downstream of a parsed document is infallible.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

/// Read and deserialize a JSON document.
pub fn read_json(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}

/// Serialize a value as pretty-printed JSON and write it.
///
/// Artifacts are pretty-printed: templates are meant to be hand-edited.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut formatted = serde_json::to_string_pretty(value)?;
    formatted.push('\n');
    fs::write(path, formatted).with_context(|| format!("failed to write {}", path.display()))
}
