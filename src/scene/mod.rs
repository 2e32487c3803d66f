//! Output scene graph
//!
//! - `node`: the polymorphic [`SceneNode`] tree and its layout/text enums
//! - `paint`: colors, paints and effects
//! - `factory`: node constructors with host defaults and id assignment
//! - `summary`: node counts and bounds reported back to the host
pub mod factory;
pub mod node;
pub mod paint;
pub mod summary;

// Re-export commonly used items
pub use factory::NodeFactory;
pub use node::{
    AutoLayout, AxisAlign, LayoutMode, NodeKind, Rect, SceneNode, TextAlignHorizontal,
    TextAlignVertical, TextAutoResize,
};
pub use paint::{Color, Effect, Paint};
pub use summary::{layer_structure, Summary};
