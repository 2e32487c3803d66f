use serde::{Deserialize, Serialize};

/// Fixed font family used whenever a requested family is missing or fails to load
pub const BASE_FONT_FAMILY: &str = "Inter";

/// Input schema, either sniffed from the document or supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Shaped like a design tool's own node export (`absoluteBoundingBox`, `fills`, ...)
    Native,
    /// Shaped like an extracted DOM (`styles` bag, `position.absolute`)
    Markup,
}

/// How the caller wants the input schema resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaHint {
    /// Sniff the structure of the document
    #[default]
    Auto,
    Native,
    Markup,
}

/// What happens to a child whose parent cannot hold children (text, shapes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeafChildren {
    /// Silently skip the child and its subtree
    #[default]
    Drop,
    /// Fail the conversion with [`crate::ConvertError::ChildUnderLeaf`]
    Reject,
}

/// What happens to the text of a markup node that also has children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextWithChildren {
    /// The node becomes a container and its own text is not rendered
    #[default]
    Ignore,
    /// The text is inserted as the container's first child
    Prepend,
}

/// Options shared by every node of one conversion
///
/// Deserializes from the flat camelCase record the host panel sends. Unknown
/// keys are ignored and missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConversionOptions {
    /// Apply colors (fills, strokes, text color) taken from the input
    pub preserve_colors: bool,
    /// Apply font size, line height, letter spacing and alignment
    pub preserve_text_styles: bool,
    /// Translate flex / layoutMode properties into auto-layout
    pub use_auto_layout: bool,
    /// Accepted for compatibility, currently has no effect
    pub flatten_divs: bool,
    /// Accepted for compatibility, currently has no effect
    pub extract_components: bool,
    /// Family used when a text node does not name one
    pub default_font_family: Option<String>,
    /// Wrap a top-level `frames` array in one root sized to their union bounds
    pub wrap_frames: bool,
    pub leaf_children: LeafChildren,
    pub text_with_children: TextWithChildren,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            preserve_colors: true,
            preserve_text_styles: true,
            use_auto_layout: true,
            flatten_divs: false,
            extract_components: false,
            default_font_family: None,
            wrap_frames: true,
            leaf_children: LeafChildren::Drop,
            text_with_children: TextWithChildren::Ignore,
        }
    }
}

impl ConversionOptions {
    /// Family to use when a node has none, sanitized like any other family
    pub fn fallback_family(&self) -> String {
        crate::style::typography::sanitize_font_family(self.default_font_family.as_deref())
    }
}
