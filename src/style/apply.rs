use super::bag::StyleBag;
use super::color::{is_transparent, parse_color, parse_color_str, try_parse_color_str};
use super::dimension::{parse_dimension, parse_dimension_str};
use super::layout::translate_layout;
use crate::scene::node::NodeKind;
use crate::scene::paint::{BlendMode, Vector};
use crate::scene::{Color, Effect, Paint, SceneNode};
use crate::types::ConversionOptions;
use regex::Regex;
use serde_json::Value as JsonValue;
use std::sync::LazyLock;

/// `offsetX offsetY blur [spread] color`, lengths in px
static BOX_SHADOW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(-?\d+(?:\.\d+)?px)\s+(-?\d+(?:\.\d+)?px)\s+(-?\d+(?:\.\d+)?px)(?:\s+(-?\d+(?:\.\d+)?px))?\s+(.+)",
    )
    .expect("box-shadow pattern is valid")
});

/// Alpha given to every imported drop shadow
pub const SHADOW_ALPHA: f64 = 0.25;

/// Solid stand-in for image paints, no image data is fetched
pub const IMAGE_PAINT_PLACEHOLDER: Color = Color::rgb(0.8, 0.8, 0.8);

/// Convert a native `fills` / `strokes` array into solid paints
///
/// `SOLID` paints with a color are kept along with their opacity, `IMAGE`
/// paints become a light gray placeholder, everything else (gradients, hidden
/// paints) is skipped. Returns `None` when the value is not an array.
pub fn solid_paints(paints: Option<&JsonValue>) -> Option<Vec<Paint>> {
    let paints = paints?.as_array()?;

    let converted = paints
        .iter()
        .filter(|paint| paint.get("visible").and_then(|v| v.as_bool()) != Some(false))
        .filter_map(|paint| match paint.get("type").and_then(|v| v.as_str()) {
            Some("SOLID") => {
                let color = paint.get("color").filter(|c| !c.is_null())?;
                Some(Paint::Solid {
                    color: parse_color(color),
                    opacity: paint.get("opacity").and_then(|v| v.as_f64()),
                })
            }
            Some("IMAGE") => Some(Paint::solid(IMAGE_PAINT_PLACEHOLDER)),
            _ => None,
        })
        .collect();

    Some(converted)
}

/// Apply every markup style a container understands
///
/// Background, borders, corner radius, drop shadow and auto-layout, in that
/// order.
pub fn apply_container_styles(
    node: &mut SceneNode,
    styles: &StyleBag<'_>,
    options: &ConversionOptions,
) {
    apply_background(node, styles, options);
    if !styles.is_present() {
        return;
    }
    apply_border_styles(node, styles, options);
    apply_shadow_styles(node, styles);
    apply_auto_layout(node, styles, options);
}

/// Fill a container with its `background-color`, or clear its fills
pub fn apply_background(node: &mut SceneNode, styles: &StyleBag<'_>, options: &ConversionOptions) {
    let background = styles.get_str("background-color");

    if options.preserve_colors && !is_transparent(background) {
        if let Some(background) = background {
            node.fills = vec![Paint::solid(parse_color_str(background))];
            return;
        }
    }

    node.fills = Vec::new();
}

/// Turn `border-*` properties into a stroke and `border-radius` into a corner radius
///
/// The width comes from `border-width`, else the first length in the `border`
/// shorthand. The color comes from `border-color`, else the color token in the
/// shorthand.
pub fn apply_border_styles(
    node: &mut SceneNode,
    styles: &StyleBag<'_>,
    options: &ConversionOptions,
) {
    let shorthand = styles.get_str("border").map(BorderShorthand::parse);

    let width = styles
        .get("border-width")
        .map(|v| parse_dimension(Some(v), 0.0))
        .or_else(|| shorthand.as_ref().and_then(|b| b.width))
        .unwrap_or(0.0);

    let color = styles
        .get_str("border-color")
        .map(parse_color_str)
        .or_else(|| shorthand.as_ref().and_then(|b| b.color));

    if width > 0.0 && options.preserve_colors {
        if let Some(color) = color {
            node.strokes = vec![Paint::solid(color)];
            node.stroke_weight = Some(width);
        }
    }

    let radius = parse_dimension(styles.get("border-radius"), 0.0);
    if radius > 0.0 {
        node.set_corner_radius(radius);
    }
}

/// Append a drop shadow parsed from `box-shadow`
///
/// Only the first shadow of a list is used, its alpha is replaced by
/// [`SHADOW_ALPHA`] and its spread is dropped. Values that do not match the
/// `offsetX offsetY blur [spread] color` pattern are ignored.
pub fn apply_shadow_styles(node: &mut SceneNode, styles: &StyleBag<'_>) {
    let Some(shadow) = styles.get_str("box-shadow") else {
        return;
    };

    let Some(captures) = BOX_SHADOW.captures(shadow) else {
        log::debug!("Ignoring unrecognized box-shadow {:?}", shadow);
        return;
    };

    let length = |index: usize| {
        captures
            .get(index)
            .and_then(|m| parse_dimension_str(m.as_str()))
            .unwrap_or(0.0)
    };
    let color = captures.get(5).map(|m| m.as_str()).unwrap_or("");

    node.effects.push(Effect::DropShadow {
        color: parse_color_str(color).with_alpha(SHADOW_ALPHA),
        offset: Vector {
            x: length(1),
            y: length(2),
        },
        radius: length(3),
        spread: 0.0,
        visible: true,
        blend_mode: BlendMode::Normal,
    });
}

/// Give a container an auto-layout configuration from its flex properties
pub fn apply_auto_layout(node: &mut SceneNode, styles: &StyleBag<'_>, options: &ConversionOptions) {
    if !options.use_auto_layout {
        return;
    }
    if let NodeKind::Container(container) = &mut node.kind {
        if let Some(layout) = translate_layout(styles) {
            container.auto_layout = Some(layout);
        }
    }
}

/// Width and color pulled out of a `border` shorthand such as `1px solid #ccc`
#[derive(Debug, Clone, PartialEq)]
struct BorderShorthand {
    width: Option<f64>,
    color: Option<Color>,
}

impl BorderShorthand {
    fn parse(border: &str) -> Self {
        let width = border.split_whitespace().find_map(parse_dimension_str);

        // rgb() colors contain spaces, so they are located by substring
        let color = match border.find("rgb") {
            Some(start) => try_parse_color_str(&border[start..]),
            None => border.split_whitespace().find_map(try_parse_color_str),
        };

        Self { width, color }
    }
}
