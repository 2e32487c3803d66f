use super::{push_child, text_layer_name, Converter};
use crate::error::Result;
use crate::fonts::FontName;
use crate::scene::node::TextAlignHorizontal;
use crate::scene::{Color, Paint, SceneNode, TextAutoResize};
use crate::style::dimension::{try_parse_dimension, DEFAULT_BOX_SIZE, DEFAULT_TEXT_WIDTH};
use crate::style::typography::REGULAR_STYLE;
use crate::style::{
    apply_container_styles, load_font_with_fallback, parse_color_str, parse_dimension,
    sanitize_font_family, weight_to_style, StyleBag,
};
use crate::types::TextWithChildren;
use serde_json::Value as JsonValue;

const IMAGE_FILL: Color = Color::rgb(0.9, 0.9, 0.9);
const IMAGE_STROKE: Color = Color::rgb(0.6, 0.6, 0.6);
const IMAGE_STROKE_WEIGHT: f64 = 2.0;

/// Font size of styled markup text without a `font-size`
const MARKUP_FONT_SIZE: f64 = 16.0;

/// Widths outside `(0, MAX_FIXED_TEXT_WIDTH)` keep the text auto-sized
const MAX_FIXED_TEXT_WIDTH: f64 = 10_000.0;

/// Height given to fixed-width text before it grows to fit its lines
const FIXED_TEXT_HEIGHT: f64 = 100.0;

/// Check the CSS properties that hide an element
///
/// `display: none`, `visibility: hidden` and a zero `opacity` (string or
/// number) hide the node together with its subtree.
pub(crate) fn is_visible(styles: &StyleBag<'_>) -> bool {
    if styles.get_str("display") == Some("none") {
        return false;
    }
    if styles.get_str("visibility") == Some("hidden") {
        return false;
    }
    match styles.get("opacity") {
        Some(JsonValue::String(s)) => s.trim() != "0",
        Some(JsonValue::Number(n)) => n.as_f64() != Some(0.0),
        _ => true,
    }
}

/// Layer name of a markup container: `type#id.class1.class2`
fn element_name(node: &JsonValue) -> String {
    let mut name = node
        .get("type")
        .and_then(|v| v.as_str())
        .filter(|t| !t.is_empty())
        .unwrap_or("div")
        .to_string();

    if let Some(id) = node.get("id").and_then(|v| v.as_str()).filter(|id| !id.is_empty()) {
        name.push('#');
        name.push_str(id);
    }

    let classes = match node.get("classes").or_else(|| node.get("className")) {
        Some(JsonValue::String(classes)) => classes.split_whitespace().collect::<Vec<_>>(),
        Some(JsonValue::Array(classes)) => classes.iter().filter_map(|c| c.as_str()).collect(),
        _ => Vec::new(),
    };
    for class in classes {
        name.push('.');
        name.push_str(class);
    }

    name
}

impl Converter<'_> {
    /// Convert a markup node and its subtree, `None` when it is hidden
    ///
    /// A node with non-empty text and no children becomes text, an `img`
    /// becomes a placeholder shape, everything else becomes a container.
    /// Hidden children are skipped without affecting their siblings.
    pub(crate) fn convert_markup(&mut self, node: &JsonValue) -> Result<Option<SceneNode>> {
        let styles = StyleBag::of(node);
        if !is_visible(&styles) {
            log::debug!("Skipping hidden {}", element_name(node));
            return Ok(None);
        }

        let text = node
            .get("text")
            .and_then(|v| v.as_str())
            .map(str::trim)
            .filter(|t| !t.is_empty());
        let children = node
            .get("children")
            .and_then(|v| v.as_array())
            .map(Vec::as_slice)
            .unwrap_or_default();
        let is_img = node
            .get("type")
            .and_then(|v| v.as_str())
            .is_some_and(|t| t.eq_ignore_ascii_case("img"));

        let mut scene = match text {
            Some(text) if children.is_empty() => self.markup_text(node, &styles, text),
            _ if is_img => self.markup_image(node, &styles),
            _ => {
                let mut frame = self.factory.create_frame();
                frame.name = element_name(node);
                apply_container_styles(&mut frame, &styles, self.options);
                frame
            }
        };

        self.apply_position(&mut scene, node);

        log::debug!(
            "Markup {} -> {} {}",
            element_name(node),
            scene.kind_name(),
            scene.id
        );

        if !scene.is_container() {
            self.reject_leaf_children(&scene, children)?;
            return Ok(Some(scene));
        }

        if let (Some(text), TextWithChildren::Prepend) = (text, self.options.text_with_children) {
            if !children.is_empty() {
                let mut label = self.markup_text(node, &styles, text);
                label.x = scene.x;
                label.y = scene.y;
                push_child(&mut scene, label);
            }
        }

        for child in children {
            if let Some(child_node) = self.convert_markup(child)? {
                push_child(&mut scene, child_node);
            }
        }

        Ok(Some(scene))
    }

    /// Place a node at `position.absolute`, resizing everything but text
    fn apply_position(&self, scene: &mut SceneNode, node: &JsonValue) {
        let Some(absolute) = node
            .get("position")
            .and_then(|p| p.get("absolute"))
            .filter(|v| v.is_object())
        else {
            return;
        };

        scene.x = parse_dimension(absolute.get("x"), 0.0);
        scene.y = parse_dimension(absolute.get("y"), 0.0);

        if scene.is_text() {
            return;
        }
        let width = parse_dimension(absolute.get("width"), DEFAULT_BOX_SIZE);
        let height = parse_dimension(absolute.get("height"), DEFAULT_BOX_SIZE);
        if width > 0.0 && height > 0.0 {
            scene.resize(width, height);
        }
    }

    fn markup_image(&mut self, node: &JsonValue, styles: &StyleBag<'_>) -> SceneNode {
        let mut image = self.factory.create_rectangle();

        image.name = match node.get("alt").and_then(|v| v.as_str()).filter(|a| !a.is_empty()) {
            Some(alt) => format!("img ({})", alt),
            None => "img".to_string(),
        };
        image.fills = vec![Paint::solid(IMAGE_FILL)];
        image.strokes = vec![Paint::solid(IMAGE_STROKE)];
        image.stroke_weight = Some(IMAGE_STROKE_WEIGHT);

        let radius = parse_dimension(styles.get("border-radius"), 0.0);
        if radius > 0.0 {
            image.set_corner_radius(radius);
        }

        image
    }

    /// Text node for a markup element, its font is loaded before the characters are set
    ///
    /// Text sizes itself to its content unless `position.absolute.width` gives
    /// it a usable fixed width.
    fn markup_text(&mut self, node: &JsonValue, styles: &StyleBag<'_>, text: &str) -> SceneNode {
        let family = match styles.get_str("font-family") {
            Some(family) => sanitize_font_family(Some(family)),
            None => self.options.fallback_family(),
        };
        let font_style = weight_to_style(styles.get("font-weight")).unwrap_or(REGULAR_STYLE);
        let loaded = load_font_with_fallback(&mut *self.fonts, FontName::new(family, font_style));

        let mut scene = self.factory.create_text();
        scene.name = text_layer_name(text);

        if styles.is_present() && self.options.preserve_colors {
            if let Some(color) = styles.get_str("color") {
                scene.fills = vec![Paint::solid(parse_color_str(color))];
            }
        }

        let preserve_text_styles = styles.is_present() && self.options.preserve_text_styles;
        if let Some(props) = scene.text_mut() {
            props.font_name = loaded;
            props.characters = text.to_string();

            if preserve_text_styles {
                props.font_size = parse_dimension(styles.get("font-size"), MARKUP_FONT_SIZE);

                match styles.get_str("text-align") {
                    Some("center") => props.text_align_horizontal = TextAlignHorizontal::Center,
                    Some("right") => props.text_align_horizontal = TextAlignHorizontal::Right,
                    Some("justify") => props.text_align_horizontal = TextAlignHorizontal::Justified,
                    _ => {}
                }

                if let Some(line_height) = try_parse_dimension(styles.get("line-height")) {
                    props.line_height = Some(line_height);
                }
                if let Some(spacing) = try_parse_dimension(styles.get("letter-spacing")) {
                    props.letter_spacing = Some(spacing);
                }
            }
        }

        let width = node
            .get("position")
            .and_then(|p| p.get("absolute"))
            .and_then(|a| a.get("width"))
            .filter(|w| !w.is_null())
            .map(|w| parse_dimension(Some(w), DEFAULT_TEXT_WIDTH));
        if let Some(width) = width.filter(|w| *w > 0.0 && *w < MAX_FIXED_TEXT_WIDTH) {
            scene.resize(width, FIXED_TEXT_HEIGHT);
            if let Some(props) = scene.text_mut() {
                props.text_auto_resize = TextAutoResize::Height;
            }
        }

        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;
    use crate::fonts::FontBook;
    use crate::scene::LayoutMode;
    use crate::types::{ConversionOptions, LeafChildren};
    use serde_json::json;

    fn convert_with(
        json: JsonValue,
        options: &ConversionOptions,
        fonts: &mut FontBook,
    ) -> Result<Option<SceneNode>> {
        let mut converter = Converter::new(options, fonts);
        converter.convert_markup(&json)
    }

    fn convert(json: JsonValue) -> SceneNode {
        let mut fonts = FontBook::permissive();
        convert_with(json, &ConversionOptions::default(), &mut fonts)
            .unwrap()
            .unwrap()
    }

    #[test]
    fn test_visibility() {
        assert!(is_visible(&StyleBag::of(&json!({"styles": {"display": "block"}}))));
        assert!(is_visible(&StyleBag::of(&json!({}))));
        assert!(is_visible(&StyleBag::of(&json!({"styles": {"opacity": "0.5"}}))));
        assert!(!is_visible(&StyleBag::of(&json!({"styles": {"display": "none"}}))));
        assert!(!is_visible(&StyleBag::of(&json!({"styles": {"visibility": "hidden"}}))));
        assert!(!is_visible(&StyleBag::of(&json!({"styles": {"opacity": "0"}}))));
        assert!(!is_visible(&StyleBag::of(&json!({"styles": {"opacity": 0}}))));
    }

    #[test]
    fn test_element_name() {
        assert_eq!(element_name(&json!({})), "div");
        assert_eq!(
            element_name(&json!({"type": "section", "id": "hero", "classes": ["dark", "wide"]})),
            "section#hero.dark.wide"
        );
        assert_eq!(
            element_name(&json!({"type": "ul", "className": "menu open"})),
            "ul.menu.open"
        );
    }

    #[test]
    fn test_container_named_from_classes() {
        let frame = convert(json!({"type": "section", "id": "hero", "classes": ["dark", "wide"]}));
        assert_eq!(frame.name, "section#hero.dark.wide");
    }

    #[test]
    fn test_flex_container() {
        let frame = convert(json!({
            "type": "div",
            "className": "row",
            "styles": {
                "display": "flex",
                "flexDirection": "row",
                "gap": "8px",
                "padding": "16px",
                "backgroundColor": "#ffffff",
                "borderRadius": "12px"
            },
            "position": {"absolute": {"x": 10, "y": 20, "width": 400, "height": 80}}
        }));

        assert_eq!(frame.name, "div.row");
        assert_eq!((frame.x, frame.y, frame.width, frame.height), (10.0, 20.0, 400.0, 80.0));
        assert_eq!(frame.fills, vec![Paint::solid(Color::WHITE)]);
        assert_eq!(frame.corner_radius(), Some(12.0));

        let layout = frame.auto_layout().unwrap();
        assert_eq!(layout.layout_mode, LayoutMode::Horizontal);
        assert_eq!(layout.item_spacing, 8.0);
        assert_eq!(layout.padding_left, 16.0);
    }

    #[test]
    fn test_transparent_container() {
        let frame = convert(json!({"type": "div", "styles": {"backgroundColor": "rgba(0, 0, 0, 0)"}}));
        assert!(frame.fills.is_empty());

        let unstyled = convert(json!({"type": "div"}));
        assert!(unstyled.fills.is_empty());
    }

    #[test]
    fn test_zero_size_keeps_default() {
        let frame = convert(json!({
            "type": "div",
            "position": {"absolute": {"x": 5, "y": 5, "width": 0, "height": 40}}
        }));
        assert_eq!((frame.x, frame.y), (5.0, 5.0));
        assert_eq!((frame.width, frame.height), (100.0, 100.0));
    }

    #[test]
    fn test_text_node() {
        let mut fonts = FontBook::permissive();
        let text = convert_with(
            json!({
                "type": "h1",
                "text": "  Welcome  ",
                "styles": {
                    "fontFamily": "'Roboto', sans-serif",
                    "fontWeight": "600",
                    "fontSize": "32px",
                    "color": "rgb(255, 0, 0)",
                    "textAlign": "center",
                    "lineHeight": "40px",
                    "letterSpacing": "normal"
                },
                "position": {"absolute": {"x": 0, "y": 0, "width": 300, "height": 40}}
            }),
            &ConversionOptions::default(),
            &mut fonts,
        )
        .unwrap()
        .unwrap();

        let props = text.text().unwrap();
        assert_eq!(text.name, "Welcome");
        assert_eq!(props.characters, "Welcome");
        assert_eq!(props.font_name, FontName::new("Roboto", "SemiBold"));
        assert_eq!(props.font_size, 32.0);
        assert_eq!(props.text_align_horizontal, TextAlignHorizontal::Center);
        assert_eq!(props.line_height, Some(40.0));
        assert_eq!(props.letter_spacing, None);
        assert_eq!(props.text_auto_resize, TextAutoResize::Height);
        assert_eq!((text.width, text.height), (300.0, 100.0));
        assert_eq!(text.fills, vec![Paint::solid(Color::rgb(1.0, 0.0, 0.0))]);
        assert_eq!(fonts.requested(), &[FontName::new("Roboto", "SemiBold")]);
    }

    #[test]
    fn test_text_without_width_auto_sizes() {
        let text = convert(json!({
            "type": "span",
            "text": "auto",
            "position": {"absolute": {"x": 7, "y": 9}}
        }));
        let props = text.text().unwrap();
        assert_eq!(props.text_auto_resize, TextAutoResize::WidthAndHeight);
        assert_eq!((text.x, text.y), (7.0, 9.0));
        assert!(text.bounds().is_none());
        // No styles at all keeps the host defaults
        assert_eq!(props.font_size, 12.0);
    }

    #[test]
    fn test_default_font_family_option() {
        let options = ConversionOptions {
            default_font_family: Some("Roboto".to_string()),
            ..ConversionOptions::default()
        };
        let mut fonts = FontBook::permissive();
        let text = convert_with(json!({"type": "p", "text": "hi"}), &options, &mut fonts)
            .unwrap()
            .unwrap();
        assert_eq!(text.text().unwrap().font_name.family, "Roboto");
    }

    #[test]
    fn test_whitespace_text_is_container() {
        let frame = convert(json!({"type": "p", "text": "   "}));
        assert!(frame.is_container());
        assert_eq!(frame.name, "p");
    }

    #[test]
    fn test_image_placeholder() {
        let image = convert(json!({
            "type": "img",
            "alt": "Logo",
            "styles": {"borderRadius": "50%"},
            "position": {"absolute": {"x": 0, "y": 0, "width": 48, "height": 48}}
        }));
        assert_eq!(image.kind_name(), "RECTANGLE");
        assert_eq!(image.name, "img (Logo)");
        assert_eq!(image.fills, vec![Paint::solid(IMAGE_FILL)]);
        assert_eq!(image.strokes, vec![Paint::solid(IMAGE_STROKE)]);
        assert_eq!(image.stroke_weight, Some(2.0));
        assert_eq!(image.corner_radius(), Some(50.0));
        assert_eq!(image.width, 48.0);
    }

    #[test]
    fn test_hidden_children_skipped() {
        let frame = convert(json!({
            "type": "ul",
            "children": [
                {"type": "li", "text": "one"},
                {"type": "li", "text": "two", "styles": {"display": "none"}},
                {"type": "li", "text": "three"}
            ]
        }));
        let names: Vec<&str> = frame.children().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["one", "three"]);
    }

    #[test]
    fn test_hidden_root() {
        let mut fonts = FontBook::permissive();
        let hidden = convert_with(
            json!({"type": "div", "styles": {"opacity": 0}, "children": [{"type": "p", "text": "x"}]}),
            &ConversionOptions::default(),
            &mut fonts,
        )
        .unwrap();
        assert!(hidden.is_none());
        assert!(fonts.requested().is_empty());
    }

    #[test]
    fn test_text_with_children_policies() {
        let json = json!({
            "type": "button",
            "text": "Buy",
            "children": [{"type": "span", "text": "now"}]
        });

        let ignored = convert(json.clone());
        assert!(ignored.is_container());
        assert_eq!(ignored.children().len(), 1);
        assert_eq!(ignored.children()[0].name, "now");

        let options = ConversionOptions {
            text_with_children: TextWithChildren::Prepend,
            ..ConversionOptions::default()
        };
        let mut fonts = FontBook::permissive();
        let prepended = convert_with(json, &options, &mut fonts).unwrap().unwrap();
        let names: Vec<&str> = prepended.children().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Buy", "now"]);
        assert_eq!(prepended.children()[0].text().unwrap().characters, "Buy");
    }

    #[test]
    fn test_image_children_policy() {
        let json = json!({"type": "img", "children": [{"type": "span", "text": "caption"}]});

        let dropped = convert(json.clone());
        assert_eq!(dropped.count(), 1);

        let options = ConversionOptions {
            leaf_children: LeafChildren::Reject,
            ..ConversionOptions::default()
        };
        let mut fonts = FontBook::permissive();
        match convert_with(json, &options, &mut fonts) {
            Err(ConvertError::ChildUnderLeaf { parent_kind, child, .. }) => {
                assert_eq!(parent_kind, "RECTANGLE");
                assert_eq!(child, "span");
            }
            _ => panic!("Expected ChildUnderLeaf error"),
        }
    }

    #[test]
    fn test_preorder_ids() {
        let frame = convert(json!({
            "type": "div",
            "children": [
                {"type": "div", "children": [{"type": "p", "text": "deep"}]},
                {"type": "p", "text": "shallow"}
            ]
        }));
        assert_eq!(frame.id, "1:1");
        assert_eq!(frame.children()[0].id, "1:2");
        assert_eq!(frame.children()[0].children()[0].id, "1:3");
        assert_eq!(frame.children()[1].id, "1:4");
    }
}
