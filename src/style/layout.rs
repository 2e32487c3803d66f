use super::bag::StyleBag;
use super::dimension::{parse_dimension, try_parse_dimension};
use crate::scene::{AutoLayout, AxisAlign, LayoutMode};
use serde_json::Value as JsonValue;

/// Translate flexbox properties of a markup node into an auto-layout configuration
///
/// Only `display: flex` and `display: inline-flex` produce a layout. The axis
/// is vertical for `flex-direction: column` and horizontal otherwise. `gap`
/// (or `grid-gap`) becomes the item spacing when positive. `justify-content`
/// and `align-items` map onto the primary and counter axis alignment, values
/// without a counterpart keep the default. `padding` is applied to all four
/// sides and only a single number is understood.
///
/// # Examples
/// ```
/// use json2fig::scene::LayoutMode;
/// use json2fig::style::{translate_layout, StyleBag};
/// use serde_json::json;
///
/// let node = json!({"styles": {"display": "flex", "flexDirection": "column", "gap": "8px"}});
/// let layout = translate_layout(&StyleBag::of(&node)).unwrap();
/// assert_eq!(layout.layout_mode, LayoutMode::Vertical);
/// assert_eq!(layout.item_spacing, 8.0);
/// ```
pub fn translate_layout(styles: &StyleBag<'_>) -> Option<AutoLayout> {
    match styles.get_str("display").map(str::trim) {
        Some("flex") | Some("inline-flex") => {}
        _ => return None,
    }

    let layout_mode = if styles.get_str("flex-direction").map(str::trim) == Some("column") {
        LayoutMode::Vertical
    } else {
        LayoutMode::Horizontal
    };
    let mut layout = AutoLayout::new(layout_mode);

    let gap = parse_dimension(styles.first_of(&["gap", "grid-gap"]), 0.0);
    if gap > 0.0 {
        layout.item_spacing = gap;
    }

    match styles.get_str("justify-content").map(str::trim) {
        Some("center") => layout.primary_axis_align_items = AxisAlign::Center,
        Some("flex-end") | Some("end") => layout.primary_axis_align_items = AxisAlign::Max,
        Some("space-between") => layout.primary_axis_align_items = AxisAlign::SpaceBetween,
        _ => {}
    }

    match styles.get_str("align-items").map(str::trim) {
        Some("center") => layout.counter_axis_align_items = AxisAlign::Center,
        Some("flex-end") | Some("end") => layout.counter_axis_align_items = AxisAlign::Max,
        _ => {}
    }

    let padding = parse_dimension(styles.get("padding"), 0.0);
    if padding > 0.0 {
        layout.set_uniform_padding(padding);
    }

    Some(layout)
}

/// Read the auto-layout fields of a native frame export
///
/// Frames with `layoutMode` `HORIZONTAL` or `VERTICAL` carry `itemSpacing`,
/// per-side `padding*` and `primaryAxisAlignItems` / `counterAxisAlignItems`
/// in the host's own vocabulary.
pub fn native_layout(node: &JsonValue) -> Option<AutoLayout> {
    let layout_mode = match node.get("layoutMode").and_then(|v| v.as_str()) {
        Some("HORIZONTAL") => LayoutMode::Horizontal,
        Some("VERTICAL") => LayoutMode::Vertical,
        _ => return None,
    };
    let mut layout = AutoLayout::new(layout_mode);

    let number = |key: &str| try_parse_dimension(node.get(key)).filter(|v| *v > 0.0);

    if let Some(spacing) = number("itemSpacing") {
        layout.item_spacing = spacing;
    }
    if let Some(padding) = number("paddingTop") {
        layout.padding_top = padding;
    }
    if let Some(padding) = number("paddingRight") {
        layout.padding_right = padding;
    }
    if let Some(padding) = number("paddingBottom") {
        layout.padding_bottom = padding;
    }
    if let Some(padding) = number("paddingLeft") {
        layout.padding_left = padding;
    }

    let align = |key: &str| {
        node.get(key)
            .and_then(|v| v.as_str())
            .and_then(AxisAlign::from_name)
    };
    if let Some(primary) = align("primaryAxisAlignItems") {
        layout.primary_axis_align_items = primary;
    }
    if let Some(counter) = align("counterAxisAlignItems") {
        layout.counter_axis_align_items = counter;
    }

    Some(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn layout_of(styles: JsonValue) -> Option<AutoLayout> {
        let node = json!({ "styles": styles });
        translate_layout(&StyleBag::of(&node))
    }

    #[test]
    fn test_non_flex_has_no_layout() {
        assert!(layout_of(json!({"display": "block"})).is_none());
        assert!(layout_of(json!({"display": "grid", "gap": "8px"})).is_none());
        assert!(layout_of(json!({})).is_none());
    }

    #[test]
    fn test_flex_column_with_gap() {
        let layout =
            layout_of(json!({"display": "flex", "flexDirection": "column", "gap": "8px"})).unwrap();
        assert_eq!(layout.layout_mode, LayoutMode::Vertical);
        assert_eq!(layout.item_spacing, 8.0);
    }

    #[test]
    fn test_inline_flex_defaults_to_horizontal() {
        let layout = layout_of(json!({"display": "inline-flex", "flex-direction": "row-reverse"}))
            .unwrap();
        assert_eq!(layout.layout_mode, LayoutMode::Horizontal);
        assert_eq!(layout.item_spacing, 0.0);
        assert_eq!(layout.primary_axis_align_items, AxisAlign::Min);
    }

    #[test]
    fn test_grid_gap_fallback() {
        let layout = layout_of(json!({"display": "flex", "gridGap": "12px"})).unwrap();
        assert_eq!(layout.item_spacing, 12.0);
    }

    #[test]
    fn test_alignment_mapping() {
        let layout = layout_of(json!({
            "display": "flex",
            "justifyContent": "space-between",
            "alignItems": "center"
        }))
        .unwrap();
        assert_eq!(layout.primary_axis_align_items, AxisAlign::SpaceBetween);
        assert_eq!(layout.counter_axis_align_items, AxisAlign::Center);

        let end = layout_of(json!({
            "display": "flex",
            "justifyContent": "flex-end",
            "alignItems": "end"
        }))
        .unwrap();
        assert_eq!(end.primary_axis_align_items, AxisAlign::Max);
        assert_eq!(end.counter_axis_align_items, AxisAlign::Max);

        let unknown = layout_of(json!({
            "display": "flex",
            "justifyContent": "space-around",
            "alignItems": "stretch"
        }))
        .unwrap();
        assert_eq!(unknown.primary_axis_align_items, AxisAlign::Min);
        assert_eq!(unknown.counter_axis_align_items, AxisAlign::Min);
    }

    #[test]
    fn test_uniform_padding() {
        let layout = layout_of(json!({"display": "flex", "padding": "16px"})).unwrap();
        assert_eq!(layout.padding_top, 16.0);
        assert_eq!(layout.padding_right, 16.0);
        assert_eq!(layout.padding_bottom, 16.0);
        assert_eq!(layout.padding_left, 16.0);
    }

    #[test]
    fn test_multi_value_padding_collapses() {
        let layout = layout_of(json!({"display": "flex", "padding": "10px 20px"})).unwrap();
        assert_eq!(layout.padding_top, 0.0);
        assert_eq!(layout.padding_left, 0.0);
    }

    #[test]
    fn test_native_layout() {
        let node = json!({
            "type": "FRAME",
            "layoutMode": "VERTICAL",
            "itemSpacing": 12,
            "paddingTop": 8,
            "paddingLeft": 24,
            "primaryAxisAlignItems": "SPACE_BETWEEN",
            "counterAxisAlignItems": "CENTER"
        });
        let layout = native_layout(&node).unwrap();

        assert_eq!(layout.layout_mode, LayoutMode::Vertical);
        assert_eq!(layout.item_spacing, 12.0);
        assert_eq!(layout.padding_top, 8.0);
        assert_eq!(layout.padding_left, 24.0);
        assert_eq!(layout.padding_right, 0.0);
        assert_eq!(layout.primary_axis_align_items, AxisAlign::SpaceBetween);
        assert_eq!(layout.counter_axis_align_items, AxisAlign::Center);
    }

    #[test]
    fn test_native_layout_none() {
        assert!(native_layout(&json!({"layoutMode": "NONE"})).is_none());
        assert!(native_layout(&json!({"type": "FRAME"})).is_none());
    }
}
