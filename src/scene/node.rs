use super::paint::{Effect, Paint};
use crate::fonts::FontName;
use serde::Serialize;

/// Axis-aligned rectangle in absolute coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Smallest rectangle containing both
    pub fn union(&self, other: &Rect) -> Rect {
        let min_x = self.x.min(other.x);
        let min_y = self.y.min(other.y);
        let max_x = (self.x + self.width).max(other.x + other.width);
        let max_y = (self.y + self.height).max(other.y + other.height);
        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }
}

/// One node of the output scene graph
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneNode {
    pub id: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fills: Vec<Paint>,
    pub strokes: Vec<Paint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_weight: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<Effect>,
    #[serde(flatten)]
    pub kind: NodeKind,
}

/// Variant-specific part of a node
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum NodeKind {
    #[serde(rename = "FRAME")]
    Container(ContainerProps),
    #[serde(rename = "RECTANGLE")]
    Shape(ShapeProps),
    #[serde(rename = "TEXT")]
    Text(TextProps),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_layout: Option<AutoLayout>,
    pub children: Vec<SceneNode>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextProps {
    pub characters: String,
    pub font_name: FontName,
    pub font_size: f64,
    pub text_align_horizontal: TextAlignHorizontal,
    pub text_align_vertical: TextAlignVertical,
    pub text_auto_resize: TextAutoResize,
    /// Line height in pixels, `None` for the font's natural line height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    /// Letter spacing in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlignHorizontal {
    #[default]
    Left,
    Center,
    Right,
    Justified,
}

impl TextAlignHorizontal {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "LEFT" => Some(Self::Left),
            "CENTER" => Some(Self::Center),
            "RIGHT" => Some(Self::Right),
            "JUSTIFIED" => Some(Self::Justified),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlignVertical {
    #[default]
    Top,
    Center,
    Bottom,
}

impl TextAlignVertical {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "TOP" => Some(Self::Top),
            "CENTER" => Some(Self::Center),
            "BOTTOM" => Some(Self::Bottom),
            _ => None,
        }
    }
}

/// How a text node derives its size from its content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAutoResize {
    /// Fixed width and height
    None,
    /// Fixed width, height follows content
    Height,
    /// Both dimensions follow content
    #[default]
    WidthAndHeight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AxisAlign {
    #[default]
    Min,
    Center,
    Max,
    SpaceBetween,
}

impl AxisAlign {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "MIN" => Some(Self::Min),
            "CENTER" => Some(Self::Center),
            "MAX" => Some(Self::Max),
            "SPACE_BETWEEN" => Some(Self::SpaceBetween),
            _ => None,
        }
    }
}

/// Axis-based automatic child arrangement
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoLayout {
    pub layout_mode: LayoutMode,
    pub item_spacing: f64,
    pub primary_axis_align_items: AxisAlign,
    pub counter_axis_align_items: AxisAlign,
    pub padding_top: f64,
    pub padding_right: f64,
    pub padding_bottom: f64,
    pub padding_left: f64,
}

impl AutoLayout {
    pub fn new(layout_mode: LayoutMode) -> Self {
        Self {
            layout_mode,
            item_spacing: 0.0,
            primary_axis_align_items: AxisAlign::Min,
            counter_axis_align_items: AxisAlign::Min,
            padding_top: 0.0,
            padding_right: 0.0,
            padding_bottom: 0.0,
            padding_left: 0.0,
        }
    }

    pub fn set_uniform_padding(&mut self, padding: f64) {
        self.padding_top = padding;
        self.padding_right = padding;
        self.padding_bottom = padding;
        self.padding_left = padding;
    }
}

impl SceneNode {
    /// Host vocabulary name of the node variant
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            NodeKind::Container(_) => "FRAME",
            NodeKind::Shape(_) => "RECTANGLE",
            NodeKind::Text(_) => "TEXT",
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self.kind, NodeKind::Container(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind, NodeKind::Text(_))
    }

    /// Resize the node
    ///
    /// A text node that was sizing itself to its content gets a fixed box.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        if let NodeKind::Text(text) = &mut self.kind {
            if text.text_auto_resize == TextAutoResize::WidthAndHeight {
                text.text_auto_resize = TextAutoResize::None;
            }
        }
    }

    /// Absolute bounds, `None` when the size is derived from text content
    pub fn bounds(&self) -> Option<Rect> {
        match &self.kind {
            NodeKind::Text(text) if text.text_auto_resize == TextAutoResize::WidthAndHeight => {
                None
            }
            _ => Some(Rect::new(self.x, self.y, self.width, self.height)),
        }
    }

    pub fn children(&self) -> &[SceneNode] {
        match &self.kind {
            NodeKind::Container(container) => &container.children,
            _ => &[],
        }
    }

    /// Mutable child list, `None` for leaf variants
    pub fn children_mut(&mut self) -> Option<&mut Vec<SceneNode>> {
        match &mut self.kind {
            NodeKind::Container(container) => Some(&mut container.children),
            _ => None,
        }
    }

    pub fn set_corner_radius(&mut self, radius: f64) {
        match &mut self.kind {
            NodeKind::Container(container) => container.corner_radius = Some(radius),
            NodeKind::Shape(shape) => shape.corner_radius = Some(radius),
            NodeKind::Text(_) => {}
        }
    }

    pub fn corner_radius(&self) -> Option<f64> {
        match &self.kind {
            NodeKind::Container(container) => container.corner_radius,
            NodeKind::Shape(shape) => shape.corner_radius,
            NodeKind::Text(_) => None,
        }
    }

    pub fn auto_layout(&self) -> Option<&AutoLayout> {
        match &self.kind {
            NodeKind::Container(container) => container.auto_layout.as_ref(),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<&TextProps> {
        match &self.kind {
            NodeKind::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn text_mut(&mut self) -> Option<&mut TextProps> {
        match &mut self.kind {
            NodeKind::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Number of nodes in this subtree, including this one
    pub fn count(&self) -> usize {
        1 + self.children().iter().map(SceneNode::count).sum::<usize>()
    }
}
