//! Layout tree shapes.
//!
//! An Elementor export is one JSON document: a tree of nested objects and
//! arrays. Widget nodes carry a `widgetType` tag and a `settings` object;
//! container nodes (sections, columns) hold their ordered children under
//! `elements`. Any other key may still hold nested nodes and must be
//! traversed.
//!
//! The tree is kept as `serde_json::Value` (with `preserve_order`), so
//! object iteration order is the document's key order.

use serde_json::{Map, Value};

/// Key carrying the widget type tag on widget nodes.
pub const TYPE_TAG_KEY: &str = "widgetType";

/// Key holding a widget node's content-bearing fields.
pub const SETTINGS_KEY: &str = "settings";

/// Key holding a container node's ordered children.
pub const CHILDREN_KEY: &str = "elements";

/// Closed set of shapes a layout value can take.
///
/// Traversal dispatches on this enum instead of probing keys at every call
/// site, so the walk stays total: every JSON value falls into exactly one
/// arm.
#[derive(Debug)]
pub enum NodeShape<'a> {
    /// Object carrying a `widgetType` tag.
    Widget {
        tag: &'a str,
        node: &'a Map<String, Value>,
    },
    /// Object without a tag: section, column, or any nested mapping.
    Container(&'a Map<String, Value>),
    /// Ordered sequence of values.
    List(&'a [Value]),
    /// String, number, bool, or null; terminates traversal.
    Scalar,
}

/// Classify a layout value into its [`NodeShape`].
pub fn classify(value: &Value) -> NodeShape<'_> {
    match value {
        Value::Object(map) => match map.get(TYPE_TAG_KEY).and_then(Value::as_str) {
            Some(tag) => NodeShape::Widget { tag, node: map },
            None => NodeShape::Container(map),
        },
        Value::Array(items) => NodeShape::List(items),
        _ => NodeShape::Scalar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_widget() {
        let value = json!({ "widgetType": "heading", "settings": {} });
        assert!(matches!(
            classify(&value),
            NodeShape::Widget { tag: "heading", .. }
        ));
    }

    #[test]
    fn test_classify_container() {
        let value = json!({ "elType": "section", "elements": [] });
        assert!(matches!(classify(&value), NodeShape::Container(_)));
    }

    #[test]
    fn test_classify_non_string_tag_is_container() {
        // A numeric widgetType is not a valid tag
        let value = json!({ "widgetType": 7 });
        assert!(matches!(classify(&value), NodeShape::Container(_)));
    }

    #[test]
    fn test_classify_list_and_scalars() {
        assert!(matches!(classify(&json!([1, 2])), NodeShape::List(_)));
        assert!(matches!(classify(&json!("text")), NodeShape::Scalar));
        assert!(matches!(classify(&json!(42)), NodeShape::Scalar));
        assert!(matches!(classify(&Value::Null), NodeShape::Scalar));
    }
}
