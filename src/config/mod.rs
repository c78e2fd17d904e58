//! Tool configuration for `widex.toml`.
//!
//! # Sections
//!
//! | Section    | Purpose                                            |
//! |------------|----------------------------------------------------|
//! | `[paths]`  | Default input/output file names                    |
//! | `[schema]` | Per-tag overrides of the built-in field schema     |
//!
//! The config file is optional: when no `widex.toml` is found (searching
//! upward from cwd), every default applies and the project root is the
//! current directory.

mod error;

pub use error::ConfigError;

use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::cli::Cli;
use crate::schema::FieldSchema;
use crate::{debug, log};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing widex.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidexConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Default input/output paths
    #[serde(default)]
    pub paths: PathsConfig,

    /// Per-tag field schema overrides, merged over the built-in table
    #[serde(default)]
    pub schema: IndexMap<String, Vec<String>>,
}

impl Default for WidexConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            paths: PathsConfig::default(),
            schema: IndexMap::new(),
        }
    }
}

/// Default file name conventions for the pipeline artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Layout export read by `index` and `run`
    pub input: PathBuf,
    /// WidgetIndex snapshot written by `index`, read by `extract`
    pub index: PathBuf,
    /// Directory for template files and the manifest
    pub templates: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("elementor_data.json"),
            index: PathBuf::from("widget_index.json"),
            templates: PathBuf::from("templates"),
        }
    }
}

impl WidexConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file; the project root is
    /// the config file's parent directory, or cwd when no file exists.
    pub fn load(cli: &Cli) -> Result<Self> {
        match find_config_file(&cli.config) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                config.config_path = path;
                debug!("config"; "using {}", config.config_path.display());
                Ok(config)
            }
            None => {
                let mut config = Self::default();
                config.root = std::env::current_dir().unwrap_or_default();
                Ok(config)
            }
        }
    }

    /// Parse configuration from TOML string
    #[allow(dead_code)] // Used by tests
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Join a path with the project root.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Default layout-export path, resolved against the root.
    pub fn input_path(&self) -> PathBuf {
        self.root_join(&self.paths.input)
    }

    /// Default index-snapshot path, resolved against the root.
    pub fn index_path(&self) -> PathBuf {
        self.root_join(&self.paths.index)
    }

    /// Default templates directory, resolved against the root.
    pub fn templates_dir(&self) -> PathBuf {
        self.root_join(&self.paths.templates)
    }

    /// The effective field schema: built-in table plus `[schema]` overrides.
    pub fn field_schema(&self) -> FieldSchema {
        let mut schema = FieldSchema::builtin();
        schema.merge_overrides(self.schema.clone());
        schema
    }
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding
/// `config_name`. Returns the absolute path to the config file if found
fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;

    // First check if config_name is an absolute path or exists in cwd
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    // Walk up from cwd looking for config file
    let mut current = cwd.as_path();
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================
