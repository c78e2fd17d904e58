//! Per-type field schema: which settings fields carry content.
//!
//! The schema declares, per widget type tag, the settings fields that hold
//! real content (and are therefore placeholder-eligible when extracting
//! templates). Everything not listed is treated as structural or cosmetic
//! and copied through untouched.
//!
//! The built-in table covers the widget types seen in the migration source
//! site; `[schema]` entries in `widex.toml` replace built-in entries per
//! tag (never a field-level merge).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Built-in content-field table, in fixed insertion order.
const BUILTIN: &[(&str, &[&str])] = &[
    ("heading", &["title", "subtitle"]),
    ("text-editor", &["editor"]),
    ("image", &["image"]),
    ("icon-box", &["title", "text", "selected_icon"]),
    ("button", &["btn_text"]),
    ("shortcode", &["shortcode"]),
    ("slides", &["slider_list"]),
    ("testimonial-carousel", &["testimonial_list"]),
    ("social-icons", &["social_icon_list"]),
    ("call-to-action", &["title", "subtitle", "btn_text", "image"]),
];

/// Mapping from widget type tag to its content-bearing settings fields.
///
/// Immutable after startup: built once from the built-in table plus config
/// overrides, then only read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSchema {
    entries: IndexMap<String, Vec<String>>,
}

impl FieldSchema {
    /// The built-in Elementor schema.
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|(tag, fields)| {
                let fields = fields.iter().map(ToString::to_string).collect();
                ((*tag).to_string(), fields)
            })
            .collect();
        Self { entries }
    }

    /// Content fields for a tag, or `None` when the tag has no entry
    /// (its template is then an identity copy).
    pub fn fields(&self, tag: &str) -> Option<&[String]> {
        self.entries.get(tag).map(Vec::as_slice)
    }

    /// Replace entries per tag with config overrides.
    pub fn merge_overrides(&mut self, overrides: IndexMap<String, Vec<String>>) {
        for (tag, fields) in overrides {
            self.entries.insert(tag, fields);
        }
    }

    #[allow(dead_code)] // Used by tests
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)] // Used by tests
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let schema = FieldSchema::builtin();
        assert_eq!(
            schema.fields("heading"),
            Some(&["title".to_string(), "subtitle".to_string()][..])
        );
        assert_eq!(schema.fields("custom-unlisted-widget"), None);
    }

    #[test]
    fn test_merge_replaces_whole_entry() {
        let mut schema = FieldSchema::builtin();
        let mut overrides = IndexMap::new();
        overrides.insert("heading".to_string(), vec!["title".to_string()]);
        overrides.insert("pricing-table".to_string(), vec!["title".to_string()]);
        schema.merge_overrides(overrides);

        // Replaced, not merged: subtitle is gone
        assert_eq!(schema.fields("heading"), Some(&["title".to_string()][..]));
        // New tags are appended
        assert_eq!(
            schema.fields("pricing-table"),
            Some(&["title".to_string()][..])
        );
        assert_eq!(schema.len(), BUILTIN.len() + 1);
    }
}
