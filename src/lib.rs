//! # json2fig
//!
//! A library for converting design-tool node exports and extracted web page
//! JSON into a design scene graph.
//!
//! Two input schemas are understood and told apart by their structure:
//! native exports (`absoluteBoundingBox`, `fills`, `characters`) and DOM
//! extractions (`styles`, `position.absolute`, `text`).
//!
//! ## Example
//!
//! ```
//! use json2fig::{convert, ConversionOptions, FontBook};
//! use serde_json::json;
//!
//! let json = json!({
//!     "type": "div",
//!     "styles": {"display": "flex", "flexDirection": "column", "gap": "8px"},
//!     "children": [{"type": "p", "text": "Hello"}]
//! });
//!
//! let mut fonts = FontBook::permissive();
//! let conversion = convert(&json, &ConversionOptions::default(), &mut fonts).unwrap();
//!
//! let root = &conversion.roots[0];
//! assert_eq!(root.children()[0].text().unwrap().characters, "Hello");
//! println!("{}", json2fig::scene::layer_structure(&conversion.roots).join("\n"));
//! ```

pub mod convert;
pub mod detect;
pub mod error;
pub mod fonts;
pub mod host;
pub mod input;
pub mod scene;
pub mod style;
pub mod types;

// Re-export commonly used items
pub use convert::{convert, convert_with_hint, Conversion};
pub use error::{ConvertError, Result};
pub use fonts::{FontBook, FontLoader, FontName};
pub use scene::{SceneNode, Summary};
pub use types::{ConversionOptions, Format, LeafChildren, SchemaHint, TextWithChildren};

/// Convert raw document bytes (plain, gzip or Zstandard JSON)
///
/// # Examples
/// ```
/// use json2fig::{convert_bytes, ConversionOptions, FontBook, SchemaHint};
///
/// let bytes = br#"{"type": "section", "text": "Hi"}"#;
/// let conversion = convert_bytes(
///     bytes,
///     SchemaHint::Auto,
///     &ConversionOptions::default(),
///     &mut FontBook::permissive(),
/// )
/// .unwrap();
/// assert_eq!(conversion.summary.created, 1);
/// ```
pub fn convert_bytes(
    bytes: &[u8],
    hint: SchemaHint,
    options: &ConversionOptions,
    fonts: &mut dyn FontLoader,
) -> Result<Conversion> {
    let json = input::load_document(bytes)?;
    convert_with_hint(&json, hint, options, fonts)
}
