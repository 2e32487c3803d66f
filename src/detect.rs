use crate::types::{Format, SchemaHint};
use serde_json::Value as JsonValue;

/// Node types a native export uses for canvas children
const NATIVE_CHILD_TYPES: &[&str] = &["FRAME", "RECTANGLE", "TEXT", "IMAGE", "GROUP", "COMPONENT"];

/// Node types accepted as a native root when no CANVAS wraps them
const NATIVE_ROOT_TYPES: &[&str] = &["FRAME", "RECTANGLE", "TEXT", "IMAGE"];

/// Detect the schema of an input document
///
/// The documents carry no version field, so the schema is inferred from
/// their structure, in priority order:
/// 1. A `frames` array means a native multi-frame export.
/// 2. A `CANVAS` with children is judged by its **first** child only: a native
///    node type with an `absoluteBoundingBox` means native, any other type or a
///    `styles` bag means markup.
/// 3. Any other value is native only if it is a `FRAME`, `RECTANGLE`, `TEXT`
///    or `IMAGE` with an `absoluteBoundingBox`.
///
/// Everything else is treated as markup.
///
/// # Examples
/// ```
/// use json2fig::detect::detect_format;
/// use json2fig::Format;
/// use serde_json::json;
///
/// let native = json!({"type": "FRAME", "absoluteBoundingBox": {"x": 0, "y": 0, "width": 10, "height": 10}});
/// assert_eq!(detect_format(&native), Format::Native);
///
/// let markup = json!({"type": "div", "styles": {"display": "flex"}});
/// assert_eq!(detect_format(&markup), Format::Markup);
/// ```
pub fn detect_format(json: &JsonValue) -> Format {
    if json.get("frames").is_some_and(JsonValue::is_array) {
        return Format::Native;
    }

    if node_type(json) == Some("CANVAS") {
        if let Some(first) = json
            .get("children")
            .and_then(|v| v.as_array())
            .and_then(|children| children.first())
        {
            let child_type = node_type(first).unwrap_or("").to_ascii_uppercase();
            let is_native_type = NATIVE_CHILD_TYPES.contains(&child_type.as_str());

            if is_native_type && first.get("absoluteBoundingBox").is_some() {
                return Format::Native;
            }
            if !is_native_type || first.get("styles").is_some() {
                return Format::Markup;
            }
        }
    }

    match node_type(json) {
        Some(t) if NATIVE_ROOT_TYPES.contains(&t) && json.get("absoluteBoundingBox").is_some() => {
            Format::Native
        }
        _ => Format::Markup,
    }
}

/// Resolve a caller hint to a concrete format, sniffing only for [`SchemaHint::Auto`]
pub fn resolve_format(json: &JsonValue, hint: SchemaHint) -> Format {
    match hint {
        SchemaHint::Auto => detect_format(json),
        SchemaHint::Native => Format::Native,
        SchemaHint::Markup => Format::Markup,
    }
}

/// Check whether a node looks like markup rather than a native node
///
/// True when its type, compared case-insensitively, is outside the native
/// vocabulary (`CANVAS` included). Nodes without a type count as markup.
pub fn is_markup_node(node: &JsonValue) -> bool {
    if !node.is_object() {
        return false;
    }
    let node_type = node_type(node).unwrap_or("").to_ascii_uppercase();
    node_type != "CANVAS" && !NATIVE_CHILD_TYPES.contains(&node_type.as_str())
}

fn node_type(node: &JsonValue) -> Option<&str> {
    node.get("type").and_then(|v| v.as_str())
}
