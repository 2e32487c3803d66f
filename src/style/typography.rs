use crate::fonts::{FontLoader, FontName};
use crate::types::BASE_FONT_FAMILY;
use serde_json::Value as JsonValue;

/// Style used when no weight is given and for the fallback font
pub const REGULAR_STYLE: &str = "Regular";

/// Extract a usable family name from a CSS `font-family` list
///
/// Keeps the first comma-separated entry, strips quotes and whitespace, and
/// falls back to the base family when nothing is left.
///
/// # Examples
/// ```
/// use json2fig::style::sanitize_font_family;
///
/// assert_eq!(sanitize_font_family(Some("\"Helvetica Neue\", Arial, sans-serif")), "Helvetica Neue");
/// assert_eq!(sanitize_font_family(Some("  ")), "Inter");
/// assert_eq!(sanitize_font_family(None), "Inter");
/// ```
pub fn sanitize_font_family(family: Option<&str>) -> String {
    let first = family
        .and_then(|f| f.split(',').next())
        .unwrap_or("")
        .replace(['"', '\''], "");
    let first = first.trim();

    if first.is_empty() {
        BASE_FONT_FAMILY.to_string()
    } else {
        first.to_string()
    }
}

/// Map a font weight to a named style
///
/// One table is shared by both input schemas: 700+ Bold, 600+ SemiBold,
/// 500+ Medium, 300+ Light, anything lower Regular. Numbers, numeric strings
/// (leading digits, like `"600"`) and the CSS keywords `normal`, `bold`,
/// `bolder`, `lighter` are understood. Returns `None` when the weight is
/// missing or unreadable.
pub fn weight_to_style(weight: Option<&JsonValue>) -> Option<&'static str> {
    let numeric = match weight? {
        JsonValue::Number(n) => n.as_f64()?,
        JsonValue::String(s) => {
            let s = s.trim().to_ascii_lowercase();
            match s.as_str() {
                "bold" | "bolder" => return Some("Bold"),
                "lighter" => return Some("Light"),
                "normal" => return Some(REGULAR_STYLE),
                _ => {}
            }
            let digits: String = s.chars().take_while(|c| c.is_ascii_digit()).collect();
            digits.parse::<f64>().ok()?
        }
        _ => return None,
    };

    Some(style_for_numeric_weight(numeric))
}

fn style_for_numeric_weight(weight: f64) -> &'static str {
    if weight >= 700.0 {
        "Bold"
    } else if weight >= 600.0 {
        "SemiBold"
    } else if weight >= 500.0 {
        "Medium"
    } else if weight >= 300.0 {
        "Light"
    } else {
        REGULAR_STYLE
    }
}

/// Load a font, falling back to the base family in Regular style
///
/// The fallback is assumed to always be present in the host, so this never
/// fails: callers get back the font that was actually applied.
pub fn load_font_with_fallback(fonts: &mut dyn FontLoader, font: FontName) -> FontName {
    match fonts.load_font(&font) {
        Ok(()) => font,
        Err(err) => {
            let fallback = FontName::new(BASE_FONT_FAMILY, REGULAR_STYLE);
            log::warn!("{}, falling back to {}", err, fallback);
            if let Err(err) = fonts.load_font(&fallback) {
                log::error!("Fallback font failed to load: {}", err);
            }
            fallback
        }
    }
}
