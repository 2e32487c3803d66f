/// Style resolution for imported nodes
///
/// The resolvers turn loosely typed input values into scene values and never
/// fail; unreadable input degrades to a documented default:
///
/// - `color`: hex, `rgb()`/`rgba()`, named and pre-normalized colors
/// - `dimension`: numbers and unit-suffixed lengths
/// - `typography`: font family cleanup, weight to style, font loading with fallback
/// - `layout`: flexbox and native layout fields to auto-layout
/// - `bag`: lookup over a markup node's `styles` object
/// - `apply`: composes the above onto scene nodes (fills, strokes, radius, shadows)
pub mod apply;
pub mod bag;
pub mod color;
pub mod dimension;
pub mod layout;
pub mod typography;

// Re-export commonly used functions
pub use apply::{apply_container_styles, solid_paints};
pub use bag::StyleBag;
pub use color::{is_transparent, parse_color, parse_color_str};
pub use dimension::{parse_dimension, parse_dimension_str};
pub use layout::{native_layout, translate_layout};
pub use typography::{load_font_with_fallback, sanitize_font_family, weight_to_style};
