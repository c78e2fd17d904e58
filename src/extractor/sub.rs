//! Specialized sub-templates for known repeatable sections.
//!
//! Slides, testimonials, and social links repeat an element of known shape,
//! so their templates keep a single sanitized element instead of the whole
//! list. Fields are only replaced when present; absent fields are never
//! inserted, keeping the element's structure intact.

use serde_json::{Map, Value, json};

/// The repeatable-section field names with a known element shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubKind {
    Slide,
    Testimonial,
    SocialLink,
}

impl SubKind {
    pub fn for_field(field: &str) -> Option<Self> {
        match field {
            "slider_list" => Some(Self::Slide),
            "testimonial_list" => Some(Self::Testimonial),
            "social_icon_list" => Some(Self::SocialLink),
            _ => None,
        }
    }

    /// Build the lone template element from the section's first entry.
    ///
    /// An empty section produces an empty object so the template still
    /// marks where entries belong; a non-object entry is copied through.
    pub fn template(self, first: Option<&Value>) -> Value {
        match first {
            None => Value::Object(Map::new()),
            Some(Value::Object(entry)) => {
                let mut copy = entry.clone();
                match self {
                    Self::Slide => slide(&mut copy),
                    Self::Testimonial => testimonial(&mut copy),
                    Self::SocialLink => social_link(&mut copy),
                }
                Value::Object(copy)
            }
            Some(other) => other.clone(),
        }
    }
}

/// Replace a scalar field with `{{name}}` when present.
fn set_placeholder(entry: &mut Map<String, Value>, field: &str, name: &str) {
    if let Some(slot) = entry.get_mut(field) {
        *slot = Value::String(format!("{{{{{name}}}}}"));
    }
}

/// Replace a sub-object wholesale when present.
fn set_object(entry: &mut Map<String, Value>, field: &str, replacement: Value) {
    if let Some(slot) = entry.get_mut(field) {
        *slot = replacement;
    }
}

fn slide(entry: &mut Map<String, Value>) {
    set_placeholder(entry, "title", "slide_title");
    set_placeholder(entry, "subtitle", "slide_subtitle");
    set_placeholder(entry, "text", "slide_text");
    set_placeholder(entry, "btn_text", "button_text");
    // Target/is-external sub-fields are deliberately dropped
    set_object(entry, "link", json!({ "url": "{{button_link}}" }));
    set_object(
        entry,
        "image",
        json!({ "url": "{{slide_image_url}}", "id": "{{slide_image_id}}" }),
    );
}

fn testimonial(entry: &mut Map<String, Value>) {
    set_placeholder(entry, "title", "testimonial_name");
    set_placeholder(entry, "position", "testimonial_position");
    set_placeholder(entry, "text", "testimonial_text");
    set_object(
        entry,
        "image",
        json!({ "url": "{{testimonial_image_url}}", "id": "{{testimonial_image_id}}" }),
    );
}

fn social_link(entry: &mut Map<String, Value>) {
    set_object(
        entry,
        "social_icon",
        json!({ "value": "{{social_icon}}", "library": "fa-brands" }),
    );
    set_object(entry, "link", json!({ "url": "{{social_link}}" }));
}
