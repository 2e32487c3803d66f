use serde_json::Value as JsonValue;

/// Fallback size for generic boxes
pub const DEFAULT_BOX_SIZE: f64 = 100.0;

/// Fallback width of fixed-width text
pub const DEFAULT_TEXT_WIDTH: f64 = 200.0;

/// Fallback size for whole-document roots
pub const DEFAULT_DOCUMENT_WIDTH: f64 = 1440.0;
pub const DEFAULT_DOCUMENT_HEIGHT: f64 = 900.0;

/// Parse a size or position value into a plain number
///
/// Numbers pass through. Strings lose their trailing unit (`px`, `rem`, `%`,
/// ...) and the remaining numeral is parsed. Missing values, other JSON types
/// and unparsable strings resolve to `default`.
///
/// # Examples
/// ```
/// use json2fig::style::parse_dimension;
/// use serde_json::json;
///
/// assert_eq!(parse_dimension(Some(&json!("24px")), 100.0), 24.0);
/// assert_eq!(parse_dimension(Some(&json!(12.5)), 100.0), 12.5);
/// assert_eq!(parse_dimension(Some(&json!("auto")), 100.0), 100.0);
/// assert_eq!(parse_dimension(None, 0.0), 0.0);
/// ```
pub fn parse_dimension(value: Option<&JsonValue>, default: f64) -> f64 {
    try_parse_dimension(value).unwrap_or(default)
}

/// Like [`parse_dimension`] but reports failure instead of substituting a default
pub fn try_parse_dimension(value: Option<&JsonValue>) -> Option<f64> {
    match value? {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => parse_dimension_str(s),
        _ => None,
    }
}

/// Parse a unit-suffixed numeral such as `"16px"`, `"-4"` or `"1.5rem"`
///
/// Multi-value strings (`"10px 20px"`) do not parse.
pub fn parse_dimension_str(value: &str) -> Option<f64> {
    let numeral = value
        .trim()
        .trim_end_matches(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+'));

    numeral
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
}
