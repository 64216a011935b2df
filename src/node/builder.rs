//! Builders for node trees.
//!
//! ```
//! use flint_tui::node::{box_node, text};
//! use flint_tui::types::{BorderStyle, FlexDirection};
//!
//! let ui = box_node()
//!     .direction(FlexDirection::Row)
//!     .border(BorderStyle::Rounded)
//!     .padding(1)
//!     .child(text("Hello"))
//!     .build();
//! assert_eq!(ui.children().len(), 1);
//! ```

use super::props::{keys, PropValue, Props};
use super::{Component, Node, NodeType};
use crate::types::{
    AlignItems, BorderStyle, Color, Dimension, FlexDirection, JustifyContent, Overflow, Position,
    TextAlign, TextWrap,
};

/// Accumulates type, props and children for one node.
#[derive(Debug, Clone)]
#[must_use = "call .build() to produce a Node"]
pub struct NodeBuilder {
    kind: NodeType,
    props: Props,
    children: Vec<Node>,
}

/// Flex container.
pub fn box_node() -> NodeBuilder {
    NodeBuilder::new(NodeType::Box)
}

/// Text leaf.
pub fn text(content: impl Into<String>) -> NodeBuilder {
    NodeBuilder::new(NodeType::Text).prop(keys::CONTENT, content.into())
}

/// Vertical stack without a box of its own.
pub fn fragment(children: impl IntoIterator<Item = Node>) -> NodeBuilder {
    NodeBuilder::new(NodeType::Fragment).children(children)
}

/// Node of an externally defined type.
pub fn custom(name: impl Into<String>) -> NodeBuilder {
    NodeBuilder::new(NodeType::Custom(name.into()))
}

/// Invocation of a function component.
pub fn component(component: &Component) -> NodeBuilder {
    NodeBuilder::new(NodeType::Component(component.clone()))
}

impl NodeBuilder {
    pub fn new(kind: NodeType) -> Self {
        Self {
            kind,
            props: Props::new(),
            children: Vec::new(),
        }
    }

    /// Set an arbitrary prop.
    pub fn prop(mut self, key: &str, value: impl Into<PropValue>) -> Self {
        self.props.insert(key, value);
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> Node {
        Node::new(self.kind, self.props, self.children)
    }

    // -------------------------------------------------------------------------
    // Dimensions
    // -------------------------------------------------------------------------

    pub fn width(self, width: impl Into<Dimension>) -> Self {
        self.prop(keys::WIDTH, width.into())
    }

    pub fn height(self, height: impl Into<Dimension>) -> Self {
        self.prop(keys::HEIGHT, height.into())
    }

    pub fn min_width(self, width: impl Into<Dimension>) -> Self {
        self.prop(keys::MIN_WIDTH, width.into())
    }

    pub fn min_height(self, height: impl Into<Dimension>) -> Self {
        self.prop(keys::MIN_HEIGHT, height.into())
    }

    pub fn max_width(self, width: impl Into<Dimension>) -> Self {
        self.prop(keys::MAX_WIDTH, width.into())
    }

    pub fn max_height(self, height: impl Into<Dimension>) -> Self {
        self.prop(keys::MAX_HEIGHT, height.into())
    }

    // -------------------------------------------------------------------------
    // Spacing
    // -------------------------------------------------------------------------

    /// Padding on all four sides.
    pub fn padding(self, cells: u16) -> Self {
        self.prop(keys::PADDING, cells)
    }

    pub fn padding_top(self, cells: u16) -> Self {
        self.prop(keys::PADDING_TOP, cells)
    }

    pub fn padding_right(self, cells: u16) -> Self {
        self.prop(keys::PADDING_RIGHT, cells)
    }

    pub fn padding_bottom(self, cells: u16) -> Self {
        self.prop(keys::PADDING_BOTTOM, cells)
    }

    pub fn padding_left(self, cells: u16) -> Self {
        self.prop(keys::PADDING_LEFT, cells)
    }

    pub fn gap(self, cells: u16) -> Self {
        self.prop(keys::GAP, cells)
    }

    // -------------------------------------------------------------------------
    // Flex
    // -------------------------------------------------------------------------

    pub fn direction(self, direction: FlexDirection) -> Self {
        self.prop(keys::DIRECTION, direction)
    }

    pub fn justify(self, justify: JustifyContent) -> Self {
        self.prop(keys::JUSTIFY, justify)
    }

    pub fn align(self, align: AlignItems) -> Self {
        self.prop(keys::ALIGN, align)
    }

    pub fn grow(self, factor: u16) -> Self {
        self.prop(keys::GROW, factor)
    }

    // -------------------------------------------------------------------------
    // Visual
    // -------------------------------------------------------------------------

    pub fn border(self, style: BorderStyle) -> Self {
        self.prop(keys::BORDER, style)
    }

    pub fn border_color(self, color: impl Into<Color>) -> Self {
        self.prop(keys::BORDER_COLOR, color.into())
    }

    pub fn fg(self, color: impl Into<Color>) -> Self {
        self.prop(keys::FG, color.into())
    }

    pub fn bg(self, color: impl Into<Color>) -> Self {
        self.prop(keys::BG, color.into())
    }

    pub fn bold(self) -> Self {
        self.prop(keys::BOLD, true)
    }

    pub fn dim(self) -> Self {
        self.prop(keys::DIM, true)
    }

    pub fn italic(self) -> Self {
        self.prop(keys::ITALIC, true)
    }

    pub fn underline(self) -> Self {
        self.prop(keys::UNDERLINE, true)
    }

    pub fn inverse(self) -> Self {
        self.prop(keys::INVERSE, true)
    }

    pub fn strikethrough(self) -> Self {
        self.prop(keys::STRIKETHROUGH, true)
    }

    // -------------------------------------------------------------------------
    // Text
    // -------------------------------------------------------------------------

    pub fn wrap(self, wrap: TextWrap) -> Self {
        self.prop(keys::WRAP, wrap)
    }

    pub fn text_align(self, align: TextAlign) -> Self {
        self.prop(keys::TEXT_ALIGN, align)
    }

    // -------------------------------------------------------------------------
    // Overflow & positioning
    // -------------------------------------------------------------------------

    pub fn overflow(self, overflow: Overflow) -> Self {
        self.prop(keys::OVERFLOW, overflow)
    }

    /// Take the node out of flow and place it at `(left, top)` inside its
    /// parent's box.
    pub fn absolute(self, left: u16, top: u16) -> Self {
        self.prop(keys::POSITION, Position::Absolute)
            .prop(keys::LEFT, left)
            .prop(keys::TOP, top)
    }

    pub fn z_index(self, z: i32) -> Self {
        self.prop(keys::Z_INDEX, z)
    }
}
