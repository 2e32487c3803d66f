use crate::scene::Color;
use regex::Regex;
use serde_json::Value as JsonValue;
use std::sync::LazyLock;

/// `rgb(r, g, b)`, `rgba(r, g, b, a)` and the space-separated `rgb(r g b / a)` form
static RGB_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba?\(\s*(\d+(?:\.\d+)?)[\s,]+(\d+(?:\.\d+)?)[\s,]+(\d+(?:\.\d+)?)(?:\s*[,/]\s*(\d*\.?\d+)(%?))?",
    )
    .expect("rgb() pattern is valid")
});

/// Fixed table of recognized color names
const NAMED_COLORS: &[(&str, Color)] = &[
    ("white", Color::rgb(1.0, 1.0, 1.0)),
    ("black", Color::rgb(0.0, 0.0, 0.0)),
    ("red", Color::rgb(1.0, 0.0, 0.0)),
    ("green", Color::rgb(0.0, 1.0, 0.0)),
    ("blue", Color::rgb(0.0, 0.0, 1.0)),
    ("yellow", Color::rgb(1.0, 1.0, 0.0)),
    ("cyan", Color::rgb(0.0, 1.0, 1.0)),
    ("magenta", Color::rgb(1.0, 0.0, 1.0)),
    ("gray", Color::rgb(0.5, 0.5, 0.5)),
    ("transparent", Color::rgb(0.0, 0.0, 0.0)),
];

/// Resolve any color representation found in the input to a normalized color
///
/// Accepts an already normalized `{r, g, b[, a]}` object or any string
/// [`parse_color_str`] understands. Everything else resolves to opaque black,
/// styling is best-effort and never fails.
///
/// # Examples
/// ```
/// use json2fig::style::parse_color;
/// use serde_json::json;
///
/// let color = parse_color(&json!("#ff0000"));
/// assert_eq!((color.r, color.g, color.b), (1.0, 0.0, 0.0));
///
/// let passthrough = parse_color(&json!({"r": 0.2, "g": 0.4, "b": 0.6}));
/// assert_eq!(passthrough.g, 0.4);
/// ```
pub fn parse_color(value: &JsonValue) -> Color {
    match value {
        JsonValue::String(s) => parse_color_str(s),
        JsonValue::Object(_) => color_from_object(value).unwrap_or(Color::BLACK),
        _ => Color::BLACK,
    }
}

/// Resolve a CSS-like color string, falling back to opaque black
pub fn parse_color_str(color: &str) -> Color {
    try_parse_color_str(color).unwrap_or(Color::BLACK)
}

/// Resolve a CSS-like color string
///
/// Recognizes `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb()`/`rgba()` with channels
/// in 0-255 and the fixed named-color table. Returns `None` for anything else.
pub fn try_parse_color_str(color: &str) -> Option<Color> {
    let color = color.trim().to_ascii_lowercase();

    if let Some((_, named)) = NAMED_COLORS.iter().find(|(name, _)| *name == color) {
        return Some(*named);
    }

    if color.starts_with("rgb") {
        return parse_rgb_function(&color);
    }

    parse_hex(&color)
}

/// Check whether a background color paints nothing
///
/// Missing colors, `transparent` and any `rgba()` with a zero alpha count as
/// transparent.
pub fn is_transparent(color: Option<&str>) -> bool {
    let Some(color) = color else {
        return true;
    };

    let color = color.trim().to_ascii_lowercase();
    if color.is_empty() || color == "transparent" {
        return true;
    }

    if color.starts_with("rgba") {
        if let Some(parsed) = parse_rgb_function(&color) {
            return parsed.alpha() == 0.0;
        }
    }

    false
}

/// Read a `{r, g, b[, a]}` object as-is
fn color_from_object(value: &JsonValue) -> Option<Color> {
    let r = value.get("r")?.as_f64()?;
    let g = value.get("g")?.as_f64()?;
    let b = value.get("b")?.as_f64()?;
    let a = value.get("a").and_then(|v| v.as_f64());
    Some(Color { r, g, b, a })
}

fn parse_rgb_function(color: &str) -> Option<Color> {
    let captures = RGB_FUNCTION.captures(color)?;

    let channel = |index: usize| -> Option<f64> {
        let value: f64 = captures.get(index)?.as_str().parse().ok()?;
        Some(value / 255.0)
    };

    let r = channel(1)?;
    let g = channel(2)?;
    let b = channel(3)?;

    let a = match captures.get(4) {
        Some(alpha) => {
            let alpha: f64 = alpha.as_str().parse().ok()?;
            let is_percent = captures.get(5).is_some_and(|m| !m.as_str().is_empty());
            Some(if is_percent { alpha / 100.0 } else { alpha })
        }
        None => None,
    };

    Some(Color { r, g, b, a })
}

/// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (the `#` is optional)
fn parse_hex(color: &str) -> Option<Color> {
    let hex = color.strip_prefix('#').unwrap_or(color);
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let byte = |s: &str| u8::from_str_radix(s, 16).ok().map(|v| f64::from(v) / 255.0);

    match hex.len() {
        3 => {
            let expanded: String = hex.chars().flat_map(|c| [c, c]).collect();
            parse_hex(&expanded)
        }
        6 => Some(Color::rgb(
            byte(&hex[0..2])?,
            byte(&hex[2..4])?,
            byte(&hex[4..6])?,
        )),
        8 => Some(Color::rgba(
            byte(&hex[0..2])?,
            byte(&hex[2..4])?,
            byte(&hex[4..6])?,
            byte(&hex[6..8])?,
        )),
        _ => None,
    }
}
