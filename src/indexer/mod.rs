//! Widget indexer: groups every widget node in a layout document by tag.
//!
//! One depth-first pass over the whole document. For each object node:
//! tag the node first, then walk `elements` children in order, then every
//! other nested mapping or list in the object's own key order. Bucket
//! order is first-seen tag order; per-bucket order is discovery order, so
//! two runs over the same document produce identical snapshots.
//!
//! The input is assumed to be a proper tree. Cycles are out of scope.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::layout::{self, CHILDREN_KEY, NodeShape};

/// One per-tag group in the index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Bucket {
    /// Total instances found; always equals `instances.len()`.
    pub count: usize,
    /// Matched nodes, in traversal-discovery order.
    pub instances: Vec<Value>,
}

/// Widget instances grouped by type tag, in first-seen tag order.
///
/// Built fresh per run; persisted only as its JSON snapshot
/// (`{tag: {count, instances}}`), which the extract command reads back.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetIndex {
    buckets: IndexMap<String, Bucket>,
}

impl WidgetIndex {
    #[allow(dead_code)] // Used by tests
    pub fn get(&self, tag: &str) -> Option<&Bucket> {
        self.buckets.get(tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Bucket)> {
        self.buckets.iter()
    }

    /// Number of distinct tags.
    pub fn tag_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total instances across all tags.
    pub fn instance_count(&self) -> usize {
        self.buckets.values().map(|b| b.instances.len()).sum()
    }

    #[allow(dead_code)] // Used by tests
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Recompute stored counts from bucket contents.
    ///
    /// Snapshots are hand-editable JSON; after deserializing one, the
    /// stored `count` may disagree with `instances.len()`.
    pub fn rebuild_counts(&mut self) {
        for bucket in self.buckets.values_mut() {
            bucket.count = bucket.instances.len();
        }
    }

    fn push(&mut self, tag: &str, node: Value) {
        let bucket = self.buckets.entry(tag.to_string()).or_default();
        bucket.instances.push(node);
        bucket.count = bucket.instances.len();
    }
}

/// Traversal diagnostics. Never affects index contents.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexStats {
    /// Deepest nesting level reached (document root is 0).
    pub max_depth: usize,
    /// Objects visited, widgets and containers alike.
    pub nodes_visited: usize,
}

/// Walk a layout document and group its widget nodes by type tag.
pub fn index_document(document: &Value) -> (WidgetIndex, IndexStats) {
    let mut walker = Walker::default();
    walker.visit(document, 0);
    (walker.index, walker.stats)
}

/// Owned accumulator for one indexing pass; never escapes
/// [`index_document`].
#[derive(Default)]
struct Walker {
    index: WidgetIndex,
    stats: IndexStats,
}

impl Walker {
    fn visit(&mut self, value: &Value, depth: usize) {
        self.stats.max_depth = self.stats.max_depth.max(depth);

        match layout::classify(value) {
            NodeShape::Widget { tag, node } => {
                self.stats.nodes_visited += 1;
                self.index.push(tag, Value::Object(node.clone()));
                self.visit_object(node, depth);
            }
            NodeShape::Container(node) => {
                self.stats.nodes_visited += 1;
                self.visit_object(node, depth);
            }
            NodeShape::List(items) => {
                for item in items {
                    self.visit(item, depth + 1);
                }
            }
            NodeShape::Scalar => {}
        }
    }

    /// Children first, then every other nested mapping or list in the
    /// object's key order.
    fn visit_object(&mut self, node: &Map<String, Value>, depth: usize) {
        let children_walked = matches!(node.get(CHILDREN_KEY), Some(Value::Array(_)));
        if children_walked
            && let Some(Value::Array(children)) = node.get(CHILDREN_KEY)
        {
            for child in children {
                self.visit(child, depth + 1);
            }
        }

        for (key, value) in node {
            // Skip the children list already walked above; a malformed
            // non-list `elements` value still goes through the generic arm.
            if key == CHILDREN_KEY && children_walked {
                continue;
            }
            if value.is_object() || value.is_array() {
                self.visit(value, depth + 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_document() -> Value {
        json!([
            {
                "id": "a1", "elType": "section",
                "elements": [
                    {
                        "id": "a2", "elType": "column",
                        "elements": [
                            { "id": "a3", "elType": "widget", "widgetType": "heading",
                              "settings": { "title": "Hello" } },
                            { "id": "a4", "elType": "widget", "widgetType": "text-editor",
                              "settings": { "editor": "<p>Body</p>" } }
                        ]
                    }
                ]
            },
            {
                "id": "b1", "elType": "section",
                "elements": [
                    { "id": "b2", "elType": "widget", "widgetType": "heading",
                      "settings": { "title": "Second" } }
                ]
            }
        ])
    }

    #[test]
    fn test_groups_by_tag_in_first_seen_order() {
        let (index, _) = index_document(&sample_document());
        let tags: Vec<&String> = index.iter().map(|(tag, _)| tag).collect();
        assert_eq!(tags, ["heading", "text-editor"]);
        assert_eq!(index.get("heading").unwrap().count, 2);
        assert_eq!(index.get("text-editor").unwrap().count, 1);
        assert_eq!(index.instance_count(), 3);
    }

    #[test]
    fn test_bucket_preserves_discovery_order() {
        let (index, _) = index_document(&sample_document());
        let headings = &index.get("heading").unwrap().instances;
        assert_eq!(headings[0]["id"], "a3");
        assert_eq!(headings[1]["id"], "b2");
    }

    #[test]
    fn test_deterministic_snapshot() {
        let document = sample_document();
        let (first, _) = index_document(&document);
        let (second, _) = index_document(&document);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_nested_non_children_key_is_traversed() {
        // Widgets reachable only through an arbitrary key must still be
        // found; traversal does not rely on `elements` alone.
        let document = json!({
            "id": "root",
            "footer_blocks": [
                { "widgetType": "heading", "settings": { "title": "Footer" } }
            ]
        });
        let (index, _) = index_document(&document);
        assert_eq!(index.get("heading").unwrap().count, 1);
    }

    #[test]
    fn test_children_walked_before_other_keys() {
        let document = json!({
            "aside": { "widgetType": "button", "settings": {} },
            "elements": [
                { "widgetType": "heading", "settings": {} }
            ]
        });
        let (index, _) = index_document(&document);
        let tags: Vec<&String> = index.iter().map(|(tag, _)| tag).collect();
        assert_eq!(tags, ["heading", "button"]);
    }

    #[test]
    fn test_widget_node_children_also_indexed() {
        // A widget that itself nests widgets contributes both
        let document = json!({
            "widgetType": "slides",
            "settings": {},
            "elements": [
                { "widgetType": "heading", "settings": {} }
            ]
        });
        let (index, _) = index_document(&document);
        assert_eq!(index.tag_count(), 2);
        let tags: Vec<&String> = index.iter().map(|(tag, _)| tag).collect();
        assert_eq!(tags, ["slides", "heading"]);
    }

    #[test]
    fn test_stats_track_depth_and_visits() {
        let (_, stats) = index_document(&sample_document());
        assert_eq!(stats.max_depth, 4); // sections > columns > widgets > settings
        assert_eq!(stats.nodes_visited, 9); // 6 layout nodes + 3 settings objects
    }

    #[test]
    fn test_scalar_document_yields_empty_index() {
        let (index, stats) = index_document(&json!("just a string"));
        assert!(index.is_empty());
        assert_eq!(stats.nodes_visited, 0);
    }

    #[test]
    fn test_snapshot_shape_and_roundtrip() {
        let (index, _) = index_document(&sample_document());
        let snapshot = serde_json::to_value(&index).unwrap();
        assert_eq!(snapshot["heading"]["count"], 2);
        assert!(snapshot["heading"]["instances"].is_array());

        let mut restored: WidgetIndex = serde_json::from_value(snapshot).unwrap();
        restored.rebuild_counts();
        assert_eq!(restored.get("heading").unwrap().count, 2);
    }
}
