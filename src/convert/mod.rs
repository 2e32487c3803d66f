//! Conversion of input documents into scene graphs
//!
//! [`convert`] is the entry point: it validates the input, picks the schema
//! (see [`crate::detect`]), unwraps document-level containers and hands every
//! node to the matching recursive converter:
//!
//! - `native`: design-tool exports (`absoluteBoundingBox`, `fills`, `characters`)
//! - `markup`: DOM extractions (`styles`, `position.absolute`, `text`)
//!
//! Traversal is depth-first and pre-order: a node is created and styled
//! before its children are converted and appended. Text nodes load their
//! font before their characters are set, so the host sees font requests in
//! document order.

mod markup;
mod native;

use crate::detect::{is_markup_node, resolve_format};
use crate::error::{ConvertError, Result};
use crate::fonts::FontLoader;
use crate::scene::{NodeFactory, Rect, SceneNode, Summary};
use crate::style::dimension::{DEFAULT_DOCUMENT_HEIGHT, DEFAULT_DOCUMENT_WIDTH};
use crate::types::{ConversionOptions, Format, LeafChildren, SchemaHint};
use serde::Serialize;
use serde_json::Value as JsonValue;

/// Name given to synthesized document roots
pub const IMPORTED_ROOT_NAME: &str = "Imported Design";

/// Longest name derived from a text node's content
const TEXT_NAME_MAX_CHARS: usize = 40;

/// Result of one conversion call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    /// Schema the document was converted as
    pub format: Format,
    pub summary: Summary,
    /// Top-level nodes, in document order, never empty
    pub roots: Vec<SceneNode>,
}

/// Convert a parsed JSON document into scene nodes
///
/// The schema is sniffed from the document structure. Fails with
/// [`ConvertError::MissingInput`] for `null`, [`ConvertError::UnsupportedFormat`]
/// when the document is neither schema, and [`ConvertError::NoNodesProduced`]
/// when every node was filtered out.
///
/// # Examples
/// ```
/// use json2fig::{convert, ConversionOptions, FontBook};
/// use serde_json::json;
///
/// let json = json!({
///     "type": "FRAME",
///     "name": "Card",
///     "absoluteBoundingBox": {"x": 10, "y": 20, "width": 300, "height": 150}
/// });
///
/// let mut fonts = FontBook::permissive();
/// let conversion = convert(&json, &ConversionOptions::default(), &mut fonts).unwrap();
///
/// assert_eq!(conversion.roots.len(), 1);
/// assert_eq!(conversion.roots[0].width, 300.0);
/// assert_eq!(conversion.summary.created, 1);
/// ```
pub fn convert(
    json: &JsonValue,
    options: &ConversionOptions,
    fonts: &mut dyn FontLoader,
) -> Result<Conversion> {
    convert_with_hint(json, SchemaHint::Auto, options, fonts)
}

/// Convert a parsed JSON document, with the schema optionally given by the caller
pub fn convert_with_hint(
    json: &JsonValue,
    hint: SchemaHint,
    options: &ConversionOptions,
    fonts: &mut dyn FontLoader,
) -> Result<Conversion> {
    if json.is_null() {
        return Err(ConvertError::MissingInput);
    }
    if !json.is_object() {
        return Err(ConvertError::UnsupportedFormat(
            "expected a JSON object at the document root".to_string(),
        ));
    }

    let format = resolve_format(json, hint);
    log::info!("Converting document as {:?} ({:?} hint)", format, hint);

    let mut converter = Converter::new(options, fonts);
    let roots = match format {
        Format::Native => converter.native_document(json)?,
        Format::Markup => converter.markup_document(json)?,
    };

    let summary = Summary::from_roots(&roots).ok_or(ConvertError::NoNodesProduced)?;
    log::info!(
        "Created {} node(s) under {} root(s)",
        summary.created,
        roots.len()
    );

    Ok(Conversion {
        format,
        summary,
        roots,
    })
}

/// State shared by one traversal
pub(crate) struct Converter<'a> {
    options: &'a ConversionOptions,
    fonts: &'a mut dyn FontLoader,
    factory: NodeFactory,
}

impl<'a> Converter<'a> {
    pub(crate) fn new(options: &'a ConversionOptions, fonts: &'a mut dyn FontLoader) -> Self {
        Self {
            options,
            fonts,
            factory: NodeFactory::new(),
        }
    }

    /// Unwrap a native document into its roots
    fn native_document(&mut self, json: &JsonValue) -> Result<Vec<SceneNode>> {
        if node_type(json) == Some("CANVAS") {
            if let Some(children) = json.get("children").and_then(|v| v.as_array()) {
                let mut root = self.document_root(json);
                root.resize(DEFAULT_DOCUMENT_WIDTH, DEFAULT_DOCUMENT_HEIGHT);
                for child in children {
                    let child_node = self.convert_native(child)?;
                    push_child(&mut root, child_node);
                }
                return Ok(vec![root]);
            }
        }

        if let Some(frames) = json.get("frames").and_then(|v| v.as_array()) {
            return self.native_frames(json, frames);
        }

        Ok(vec![self.convert_native(json)?])
    }

    /// Convert a top-level `frames` array, wrapped in one root unless disabled
    fn native_frames(&mut self, json: &JsonValue, frames: &[JsonValue]) -> Result<Vec<SceneNode>> {
        if !self.options.wrap_frames {
            return frames.iter().map(|frame| self.convert_native(frame)).collect();
        }

        let mut root = self.document_root(json);
        let mut converted = Vec::with_capacity(frames.len());
        for frame in frames {
            converted.push(self.convert_native(frame)?);
        }

        let union = converted
            .iter()
            .filter_map(SceneNode::bounds)
            .reduce(|acc, bounds| acc.union(&bounds));

        match union {
            Some(Rect {
                x,
                y,
                width,
                height,
            }) => {
                root.x = x;
                root.y = y;
                root.resize(width, height);
                for mut frame in converted {
                    frame.x -= x;
                    frame.y -= y;
                    push_child(&mut root, frame);
                }
            }
            None => {
                log::debug!("No frame has usable bounds, using the default document size");
                root.resize(DEFAULT_DOCUMENT_WIDTH, DEFAULT_DOCUMENT_HEIGHT);
                for frame in converted {
                    push_child(&mut root, frame);
                }
            }
        }

        Ok(vec![root])
    }

    /// Unwrap a markup document into its roots
    ///
    /// Canvas children become separate roots, there is no synthesized wrapper.
    fn markup_document(&mut self, json: &JsonValue) -> Result<Vec<SceneNode>> {
        if node_type(json) == Some("CANVAS") {
            if let Some(children) = json.get("children").and_then(|v| v.as_array()) {
                let mut roots = Vec::new();
                for child in children {
                    if let Some(node) = self.convert_markup(child)? {
                        roots.push(node);
                    }
                }
                return Ok(roots);
            }
        }

        if is_markup_node(json) {
            return Ok(self.convert_markup(json)?.into_iter().collect());
        }

        Err(ConvertError::UnsupportedFormat(format!(
            "node type {:?} is neither a design export nor extracted markup",
            node_type(json).unwrap_or("")
        )))
    }

    /// Transparent frame at the origin named after the document
    fn document_root(&mut self, json: &JsonValue) -> SceneNode {
        let mut root = self.factory.create_frame();
        root.name = json
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or(IMPORTED_ROOT_NAME)
            .to_string();
        root.fills = Vec::new();
        root
    }

    /// Apply the leaf-children policy to children a leaf node cannot hold
    fn reject_leaf_children(&self, parent: &SceneNode, children: &[JsonValue]) -> Result<()> {
        let Some(first) = children.first() else {
            return Ok(());
        };

        match self.options.leaf_children {
            LeafChildren::Drop => {
                log::debug!(
                    "Dropping {} child node(s) of {} {:?}",
                    children.len(),
                    parent.kind_name(),
                    parent.name
                );
                Ok(())
            }
            LeafChildren::Reject => Err(ConvertError::ChildUnderLeaf {
                parent: parent.name.clone(),
                parent_kind: parent.kind_name(),
                child: first
                    .get("name")
                    .or_else(|| first.get("type"))
                    .and_then(|v| v.as_str())
                    .unwrap_or("")
                    .to_string(),
            }),
        }
    }
}

/// Append to a container, callers only pass containers
fn push_child(parent: &mut SceneNode, child: SceneNode) {
    if let Some(children) = parent.children_mut() {
        children.push(child);
    }
}

fn node_type(node: &JsonValue) -> Option<&str> {
    node.get("type").and_then(|v| v.as_str())
}

/// Layer name derived from text content, like the host names new text layers
fn text_layer_name(characters: &str) -> String {
    let trimmed = characters.trim();
    if trimmed.is_empty() {
        return "Text".to_string();
    }
    trimmed.chars().take(TEXT_NAME_MAX_CHARS).collect()
}
