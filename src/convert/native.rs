use super::{push_child, text_layer_name, Converter};
use crate::error::Result;
use crate::fonts::FontName;
use crate::scene::node::{TextAlignHorizontal, TextAlignVertical};
use crate::scene::{Color, NodeKind, Paint, SceneNode};
use crate::style::dimension::try_parse_dimension;
use crate::style::typography::REGULAR_STYLE;
use crate::style::{
    load_font_with_fallback, native_layout, parse_color, sanitize_font_family, solid_paints,
    weight_to_style,
};
use serde_json::Value as JsonValue;

/// Fill of an exported `IMAGE` node, no image data is fetched
const IMAGE_NODE_FILL: Color = Color::rgb(0.85, 0.85, 0.85);

/// Font size used when a native text node has none
const NATIVE_FONT_SIZE: f64 = 16.0;

impl Converter<'_> {
    /// Convert a native node and its subtree
    ///
    /// `FRAME`, `RECTANGLE`, `TEXT` and `IMAGE` have dedicated mappings, any
    /// other type (`GROUP`, `COMPONENT`, ...) becomes a container. The
    /// `absoluteBoundingBox` sets position and size on every variant, children
    /// are only converted under containers.
    pub(crate) fn convert_native(&mut self, node: &JsonValue) -> Result<SceneNode> {
        let node_type = node.get("type").and_then(|v| v.as_str()).unwrap_or("");

        let mut scene = match node_type {
            "RECTANGLE" => self.native_rectangle(node),
            "TEXT" => self.native_text(node),
            "IMAGE" => self.native_image(),
            "FRAME" => self.native_frame(node),
            other => {
                log::debug!("Converting native {:?} as a frame", other);
                self.native_frame(node)
            }
        };

        if let Some(name) = node.get("name").and_then(|v| v.as_str()) {
            scene.name = name.to_string();
        }

        if let Some(bbox) = node.get("absoluteBoundingBox").filter(|v| v.is_object()) {
            scene.x = try_parse_dimension(bbox.get("x")).unwrap_or(0.0);
            scene.y = try_parse_dimension(bbox.get("y")).unwrap_or(0.0);
            let width = try_parse_dimension(bbox.get("width")).unwrap_or(scene.width);
            let height = try_parse_dimension(bbox.get("height")).unwrap_or(scene.height);
            scene.resize(width, height);
        }

        log::debug!(
            "Native {} {:?} -> {} {}",
            node_type,
            scene.name,
            scene.kind_name(),
            scene.id
        );

        if let Some(children) = node.get("children").and_then(|v| v.as_array()) {
            if scene.is_container() {
                for child in children {
                    let child_node = self.convert_native(child)?;
                    push_child(&mut scene, child_node);
                }
            } else {
                self.reject_leaf_children(&scene, children)?;
            }
        }

        Ok(scene)
    }

    fn native_frame(&mut self, node: &JsonValue) -> SceneNode {
        let mut frame = self.factory.create_frame();

        frame.fills = if self.options.preserve_colors {
            match solid_paints(node.get("fills")) {
                Some(fills) => fills,
                None => node
                    .get("backgroundColor")
                    .filter(|v| !v.is_null())
                    .map(|color| vec![Paint::solid(parse_color(color))])
                    .unwrap_or_default(),
            }
        } else {
            Vec::new()
        };

        self.apply_native_strokes(&mut frame, node);

        if let Some(radius) = try_parse_dimension(node.get("cornerRadius")) {
            frame.set_corner_radius(radius);
        }

        if self.options.use_auto_layout {
            if let Some(layout) = native_layout(node) {
                if let NodeKind::Container(container) = &mut frame.kind {
                    container.auto_layout = Some(layout);
                }
            }
        }

        frame
    }

    fn native_rectangle(&mut self, node: &JsonValue) -> SceneNode {
        let mut rectangle = self.factory.create_rectangle();

        if let Some(radius) = try_parse_dimension(node.get("cornerRadius")) {
            rectangle.set_corner_radius(radius);
        }

        if self.options.preserve_colors {
            if let Some(fills) = solid_paints(node.get("fills")).filter(|f| !f.is_empty()) {
                rectangle.fills = fills;
            }
        }
        self.apply_native_strokes(&mut rectangle, node);

        rectangle
    }

    fn native_image(&mut self) -> SceneNode {
        let mut image = self.factory.create_rectangle();
        image.name = "Image".to_string();
        image.fills = vec![Paint::solid(IMAGE_NODE_FILL)];
        image
    }

    /// Text node, its font is loaded before the characters are set
    fn native_text(&mut self, node: &JsonValue) -> SceneNode {
        let style = node.get("style").filter(|v| v.is_object());
        let style_field = |key: &str| style.and_then(|s| s.get(key)).filter(|v| !v.is_null());
        let font_name = node.get("fontName").filter(|v| v.is_object());

        let characters = ["characters", "text"]
            .iter()
            .filter_map(|key| node.get(*key).and_then(|v| v.as_str()))
            .find(|s| !s.is_empty())
            .unwrap_or(" ");

        let family = font_name
            .and_then(|f| f.get("family"))
            .or_else(|| style_field("fontFamily"))
            .and_then(|v| v.as_str())
            .map(|family| sanitize_font_family(Some(family)))
            .unwrap_or_else(|| self.options.fallback_family());

        let font_style = weight_to_style(style_field("fontWeight"))
            .map(str::to_string)
            .or_else(|| {
                font_name
                    .and_then(|f| f.get("style"))
                    .and_then(|v| v.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| REGULAR_STYLE.to_string());

        let loaded = load_font_with_fallback(&mut *self.fonts, FontName::new(family, font_style));

        let mut text = self.factory.create_text();
        text.name = text_layer_name(characters);

        if self.options.preserve_colors {
            let own_fill = |fills: Option<&JsonValue>| {
                solid_paints(fills).and_then(|paints| paints.into_iter().next())
            };
            if let Some(fill) = own_fill(node.get("fills")).or_else(|| own_fill(style_field("fills")))
            {
                text.fills = vec![fill];
            }
        }

        let preserve_text_styles = self.options.preserve_text_styles;
        if let Some(props) = text.text_mut() {
            props.font_name = loaded;
            props.characters = characters.to_string();

            if preserve_text_styles {
                props.font_size = try_parse_dimension(style_field("fontSize"))
                    .filter(|size| *size > 0.0)
                    .unwrap_or(NATIVE_FONT_SIZE);

                if let Some(line_height) = try_parse_dimension(style_field("lineHeightPx")) {
                    props.line_height = Some(line_height);
                }
                if let Some(spacing) = try_parse_dimension(style_field("letterSpacing")) {
                    props.letter_spacing = Some(spacing);
                }
                if let Some(align) = style_field("textAlignHorizontal")
                    .and_then(|v| v.as_str())
                    .and_then(TextAlignHorizontal::from_name)
                {
                    props.text_align_horizontal = align;
                }
                if let Some(align) = style_field("textAlignVertical")
                    .and_then(|v| v.as_str())
                    .and_then(TextAlignVertical::from_name)
                {
                    props.text_align_vertical = align;
                }
            }
        }

        text
    }

    fn apply_native_strokes(&self, node: &mut SceneNode, json: &JsonValue) {
        if !self.options.preserve_colors {
            return;
        }
        if let Some(strokes) = solid_paints(json.get("strokes")).filter(|s| !s.is_empty()) {
            node.strokes = strokes;
            node.stroke_weight = Some(try_parse_dimension(json.get("strokeWeight")).unwrap_or(1.0));
        }
    }
}
