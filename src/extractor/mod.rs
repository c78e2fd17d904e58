//! Template extractor: turns one representative widget per tag into a
//! reusable template.
//!
//! For every tag in the index, the first instance found is deep-copied and
//! its content-bearing settings (per the [`FieldSchema`]) are replaced with
//! `{{placeholder}}` values. Tags without a schema entry come out as
//! identity copies. Extraction never fails: unrecognized field shapes are
//! copied through untouched.

mod sub;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::HashSet;

use crate::indexer::WidgetIndex;
use crate::layout::SETTINGS_KEY;
use crate::schema::FieldSchema;

/// Manifest entry for one extracted template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub instance_count: usize,
    pub template_file: String,
}

/// Everything one extraction run produces.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Sanitized template per tag, in index order.
    pub templates: IndexMap<String, Value>,
    /// Per-tag instance count and template file name.
    pub manifest: IndexMap<String, ManifestEntry>,
}

/// Extract one template per tag present in the index.
pub fn extract_templates(index: &WidgetIndex, schema: &FieldSchema) -> Extraction {
    let mut out = Extraction::default();
    let mut used_names = HashSet::new();

    for (tag, bucket) in index.iter() {
        let Some(representative) = bucket.instances.first() else {
            continue;
        };

        let mut template = representative.clone();
        if let Some(fields) = schema.fields(tag) {
            apply_schema(&mut template, fields);
        }

        out.manifest.insert(
            tag.clone(),
            ManifestEntry {
                instance_count: bucket.instances.len(),
                template_file: unique_file_name(tag, &mut used_names),
            },
        );
        out.templates.insert(tag.clone(), template);
    }

    out
}

/// Derive the on-disk file name for a tag's template.
pub fn template_file_name(tag: &str) -> String {
    let safe: String = tag
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect();
    format!("{safe}.json")
}

/// Reserve a file name for a tag, disambiguating when two distinct tags
/// sanitize to the same name (e.g. `a/b` and `a-b`).
fn unique_file_name(tag: &str, used: &mut HashSet<String>) -> String {
    let base = template_file_name(tag);
    if used.insert(base.clone()) {
        return base;
    }
    let stem = base.trim_end_matches(".json").to_string();
    let mut n = 2;
    loop {
        let candidate = format!("{stem}-{n}.json");
        if used.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

/// Substitute every in-schema field present in the template's settings.
///
/// A representative without a `settings` object stays an identity copy.
fn apply_schema(template: &mut Value, fields: &[String]) {
    let Some(Value::Object(settings)) = template.get_mut(SETTINGS_KEY) else {
        return;
    };
    for field in fields {
        if let Some(slot) = settings.get_mut(field.as_str()) {
            let current = slot.take();
            *slot = substitute(field, current);
        }
    }
}

/// Placeholder string `{{name}}`.
fn placeholder(name: &str) -> Value {
    Value::String(format!("{{{{{name}}}}}"))
}

/// Substitution dispatch: field name first, then value shape.
fn substitute(field: &str, value: Value) -> Value {
    match field {
        "title" => placeholder("title"),
        "subtitle" => placeholder("subtitle"),
        "text" | "editor" => placeholder("content"),
        "btn_text" => placeholder("button_text"),
        "shortcode" => placeholder("shortcode"),
        _ => substitute_by_shape(field, value),
    }
}

/// Shape dispatch for fields without a name rule.
fn substitute_by_shape(field: &str, value: Value) -> Value {
    match value {
        // Image reference: keep url/id slots, drop size variants and the rest
        Value::Object(obj) if obj.contains_key("url") => json!({
            "url": "{{image_url}}",
            "id": "{{image_id}}",
        }),
        // Icon reference: keep the original library tag when present
        Value::Object(obj) if obj.contains_key("value") => {
            let library = obj
                .get("library")
                .and_then(Value::as_str)
                .unwrap_or("fa-solid");
            json!({ "value": "{{icon_value}}", "library": library })
        }
        Value::Array(items) => match sub::SubKind::for_field(field) {
            Some(kind) => Value::Array(vec![kind.template(items.first())]),
            // Repeatable section without a known element shape: pass through
            None => Value::Array(items),
        },
        // Unrecognized object shape: pass through
        Value::Object(obj) => Value::Object(obj),
        _ => placeholder(field),
    }
}
