//! Layout output types.

use crate::node::Node;
use crate::types::ClipRect;

/// One positioned node.
///
/// Coordinates are absolute cells from the top-left of the layout rectangle.
/// The inner rectangle excludes border and padding.
#[derive(Debug, Clone)]
pub struct LayoutBox {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
    pub inner_x: u16,
    pub inner_y: u16,
    pub inner_width: u16,
    pub inner_height: u16,
    pub node: Node,
    /// Children in paint order: ascending z-index, document order on ties.
    pub children: Vec<LayoutBox>,
    pub z_index: i32,
    /// Clip inherited from `overflow: hidden | scroll` ancestors.
    pub clip: Option<ClipRect>,
    /// Shaped text lines; empty for non-text nodes.
    pub lines: Vec<String>,
}

impl LayoutBox {
    /// Outer rectangle.
    pub fn rect(&self) -> ClipRect {
        ClipRect::new(self.x, self.y, self.width, self.height)
    }

    /// Inner content rectangle.
    pub fn inner_rect(&self) -> ClipRect {
        ClipRect::new(self.inner_x, self.inner_y, self.inner_width, self.inner_height)
    }

    /// Depth-first iterator over this box and all descendants, in paint order.
    pub fn iter(&self) -> impl Iterator<Item = &LayoutBox> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let next = stack.pop()?;
            stack.extend(next.children.iter().rev());
            Some(next)
        })
    }
}
