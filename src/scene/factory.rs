use super::node::{
    ContainerProps, NodeKind, SceneNode, ShapeProps, TextAlignHorizontal, TextAlignVertical,
    TextAutoResize, TextProps,
};
use super::paint::{Color, Paint};
use crate::fonts::FontName;
use crate::types::BASE_FONT_FAMILY;

/// Default edge length of freshly created frames and rectangles
pub const DEFAULT_NODE_SIZE: f64 = 100.0;

/// Default font size of freshly created text nodes
pub const DEFAULT_FONT_SIZE: f64 = 12.0;

/// Creates scene nodes with host-like defaults and unique ids
///
/// Ids are handed out in creation order and formatted `"1:<n>"`, so a
/// pre-order traversal produces increasing ids from the root down.
#[derive(Debug, Default)]
pub struct NodeFactory {
    created: u32,
}

impl NodeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes created so far
    pub fn created(&self) -> u32 {
        self.created
    }

    fn next_id(&mut self) -> String {
        self.created += 1;
        format!("1:{}", self.created)
    }

    fn create(&mut self, name: &str, fills: Vec<Paint>, kind: NodeKind) -> SceneNode {
        SceneNode {
            id: self.next_id(),
            name: name.to_string(),
            x: 0.0,
            y: 0.0,
            width: DEFAULT_NODE_SIZE,
            height: DEFAULT_NODE_SIZE,
            fills,
            strokes: Vec::new(),
            stroke_weight: None,
            effects: Vec::new(),
            kind,
        }
    }

    /// White 100x100 frame that can hold children
    pub fn create_frame(&mut self) -> SceneNode {
        self.create(
            "Frame",
            vec![Paint::solid(Color::WHITE)],
            NodeKind::Container(ContainerProps::default()),
        )
    }

    /// Light gray 100x100 rectangle
    pub fn create_rectangle(&mut self) -> SceneNode {
        self.create(
            "Rectangle",
            vec![Paint::solid(Color::rgb(0.85, 0.85, 0.85))],
            NodeKind::Shape(ShapeProps::default()),
        )
    }

    /// Empty black text in the base font, sized by its content
    pub fn create_text(&mut self) -> SceneNode {
        let mut node = self.create(
            "Text",
            vec![Paint::solid(Color::BLACK)],
            NodeKind::Text(TextProps {
                characters: String::new(),
                font_name: FontName::new(BASE_FONT_FAMILY, "Regular"),
                font_size: DEFAULT_FONT_SIZE,
                text_align_horizontal: TextAlignHorizontal::Left,
                text_align_vertical: TextAlignVertical::Top,
                text_auto_resize: TextAutoResize::WidthAndHeight,
                line_height: None,
                letter_spacing: None,
            }),
        );
        node.width = 0.0;
        node.height = 0.0;
        node
    }
}
