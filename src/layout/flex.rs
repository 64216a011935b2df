//! Flexbox layout engine.
//!
//! # Algorithm
//!
//! 1. **Measure** (bottom-up): natural outer size of a node given the space
//!    available to it. Text measures its lines; containers sum children along
//!    the main axis and take the max across, then add padding and border.
//! 2. **Layout** (top-down): each container receives a concrete rectangle,
//!    grows flexible children into free space, distributes the remainder per
//!    `justify` and places children on the cross axis per `align`.
//! 3. **Absolute** children skip the flow and sit at `(left, top)` inside
//!    their parent's own box. Every child list is finally sorted by z-index.
//!
//! All arithmetic saturates; no input makes layout panic.

use crate::node::{keys, Node, NodeType, Props};
use crate::types::{
    AlignItems, BorderStyle, ClipRect, Dimension, FlexDirection, JustifyContent, Overflow,
    Position, TextWrap,
};

use super::text_measure::{measure_text, truncate_text, wrap_text};
use super::types::LayoutBox;

// =============================================================================
// DIMENSION RESOLUTION
// =============================================================================

/// Apply min/max constraints. Min wins when they conflict.
fn clamp_dimension(value: u16, min: Dimension, max: Dimension, parent_size: u16) -> u16 {
    let mut result = value;
    if let Some(max) = max.resolve(parent_size) {
        result = result.min(max);
    }
    if let Some(min) = min.resolve(parent_size) {
        result = result.max(min);
    }
    result
}

fn clamp_width(props: &Props, value: u16, parent_width: u16) -> u16 {
    clamp_dimension(
        value,
        props.get_dimension(keys::MIN_WIDTH),
        props.get_dimension(keys::MAX_WIDTH),
        parent_width,
    )
}

fn clamp_height(props: &Props, value: u16, parent_height: u16) -> u16 {
    clamp_dimension(
        value,
        props.get_dimension(keys::MIN_HEIGHT),
        props.get_dimension(keys::MAX_HEIGHT),
        parent_height,
    )
}

// =============================================================================
// BOX MODEL
// =============================================================================

/// Padding plus border, per side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Insets {
    top: u16,
    right: u16,
    bottom: u16,
    left: u16,
}

impl Insets {
    fn of(node: &Node) -> Self {
        if matches!(node.kind(), NodeType::Text | NodeType::Fragment) {
            return Self::default();
        }
        let props = node.props();
        let base = props.get_u16(keys::PADDING).unwrap_or(0);
        let border = props
            .get_as::<BorderStyle>(keys::BORDER)
            .unwrap_or_default()
            .width();
        let side = |key: &str| props.get_u16(key).unwrap_or(base).saturating_add(border);
        Self {
            top: side(keys::PADDING_TOP),
            right: side(keys::PADDING_RIGHT),
            bottom: side(keys::PADDING_BOTTOM),
            left: side(keys::PADDING_LEFT),
        }
    }

    fn horizontal(&self) -> u16 {
        self.left.saturating_add(self.right)
    }

    fn vertical(&self) -> u16 {
        self.top.saturating_add(self.bottom)
    }
}

fn is_absolute(node: &Node) -> bool {
    node.props().get_as::<Position>(keys::POSITION) == Some(Position::Absolute)
}

fn z_index(node: &Node) -> i32 {
    node.props()
        .get_i64(keys::Z_INDEX)
        .map(|z| z.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
        .unwrap_or(0)
}

fn text_wrap(node: &Node) -> TextWrap {
    node.props().get_as(keys::WRAP).unwrap_or_default()
}

// =============================================================================
// MEASURE
// =============================================================================

/// Natural outer size of `node` given the space available to it.
pub fn measure(node: &Node, avail_w: u16, avail_h: u16) -> (u16, u16) {
    let props = node.props();
    let explicit_w = props.get_dimension(keys::WIDTH).resolve(avail_w);
    let explicit_h = props.get_dimension(keys::HEIGHT).resolve(avail_h);

    let (natural_w, natural_h) = match node.kind() {
        NodeType::Text => {
            let content = node.content().unwrap_or("");
            let bound = explicit_w.unwrap_or(avail_w);
            match text_wrap(node) {
                TextWrap::Wrap => measure_text(content, Some(bound)),
                TextWrap::Truncate => {
                    let (w, h) = measure_text(content, None);
                    (w.min(bound), h)
                }
                TextWrap::NoWrap => measure_text(content, None),
            }
        }
        NodeType::Fragment => {
            let mut width = 0u16;
            let mut height = 0u16;
            for child in node.children().iter().filter(|c| !is_absolute(c)) {
                let (w, h) = measure(child, avail_w, avail_h.saturating_sub(height));
                width = width.max(w);
                height = height.saturating_add(h);
            }
            (width, height)
        }
        NodeType::Box | NodeType::Custom(_) | NodeType::Component(_) => {
            let insets = Insets::of(node);
            let inner_w = explicit_w.unwrap_or(avail_w).saturating_sub(insets.horizontal());
            let inner_h = explicit_h.unwrap_or(avail_h).saturating_sub(insets.vertical());
            let is_row = props
                .get_as::<FlexDirection>(keys::DIRECTION)
                .unwrap_or_default()
                .is_row();
            let gap = props.get_u16(keys::GAP).unwrap_or(0);

            let mut sum_main = 0u16;
            let mut max_cross = 0u16;
            let mut count = 0u16;
            for child in node.children().iter().filter(|c| !is_absolute(c)) {
                let (w, h) = measure(child, inner_w, inner_h);
                let (main, cross) = if is_row { (w, h) } else { (h, w) };
                sum_main = sum_main.saturating_add(main);
                max_cross = max_cross.max(cross);
                count = count.saturating_add(1);
            }
            sum_main = sum_main.saturating_add(gap.saturating_mul(count.saturating_sub(1)));

            let (content_w, content_h) = if is_row {
                (sum_main, max_cross)
            } else {
                (max_cross, sum_main)
            };
            (
                content_w.saturating_add(insets.horizontal()),
                content_h.saturating_add(insets.vertical()),
            )
        }
    };

    let width = explicit_w.unwrap_or(natural_w);
    let height = explicit_h.unwrap_or(natural_h);
    (
        clamp_width(props, width, avail_w),
        clamp_height(props, height, avail_h),
    )
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Lay out a tree inside a `width` x `height` rectangle at the origin.
///
/// The root fills the rectangle unless it sets its own size. Components
/// should be expanded first; any left in the tree lay out as containers.
pub fn compute_layout(root: &Node, width: u16, height: u16) -> LayoutBox {
    let props = root.props();
    let w = props.get_dimension(keys::WIDTH).resolve(width).unwrap_or(width);
    let h = props.get_dimension(keys::HEIGHT).resolve(height).unwrap_or(height);
    let w = clamp_width(props, w, width);
    let h = clamp_height(props, h, height);

    let layout = layout_node(root, 0, 0, w, h, None);
    tracing::trace!(width, height, root_hash = %root.hash_hex(), "layout computed");
    layout
}

/// Position `node` in the given rectangle and lay out its subtree.
fn layout_node(
    node: &Node,
    x: u16,
    y: u16,
    width: u16,
    height: u16,
    clip: Option<ClipRect>,
) -> LayoutBox {
    let insets = Insets::of(node);
    let mut layout = LayoutBox {
        x,
        y,
        width,
        height,
        inner_x: x.saturating_add(insets.left),
        inner_y: y.saturating_add(insets.top),
        inner_width: width.saturating_sub(insets.horizontal()),
        inner_height: height.saturating_sub(insets.vertical()),
        node: node.clone(),
        children: Vec::new(),
        z_index: z_index(node),
        clip,
        lines: Vec::new(),
    };

    match node.kind() {
        NodeType::Text => layout.lines = shape_text(node, width),
        NodeType::Fragment => layout.children = layout_fragment(node, &layout),
        NodeType::Box | NodeType::Custom(_) | NodeType::Component(_) => {
            layout.children = layout_children(node, &layout)
        }
    }
    layout
}

/// Text lines as they will be painted in a box `width` cells wide.
fn shape_text(node: &Node, width: u16) -> Vec<String> {
    let content = node.content().unwrap_or("");
    match text_wrap(node) {
        TextWrap::Wrap => wrap_text(content, width),
        TextWrap::Truncate => content.split('\n').map(|l| truncate_text(l, width)).collect(),
        TextWrap::NoWrap => content.split('\n').map(str::to_owned).collect(),
    }
}

/// Clip passed to the children of `layout`.
fn child_clip(node: &Node, layout: &LayoutBox) -> Option<ClipRect> {
    let overflow = node.props().get_as::<Overflow>(keys::OVERFLOW).unwrap_or_default();
    if !overflow.clips() {
        return layout.clip;
    }
    let inner = layout.inner_rect();
    Some(match layout.clip {
        Some(inherited) => inherited.intersect(&inner),
        None => inner,
    })
}

fn layout_absolute(node: &Node, parent: &LayoutBox, clip: Option<ClipRect>) -> LayoutBox {
    let props = node.props();
    let left = props.get_u16(keys::LEFT).unwrap_or(0);
    let top = props.get_u16(keys::TOP).unwrap_or(0);
    let (w, h) = measure(node, parent.width, parent.height);
    layout_node(
        node,
        parent.x.saturating_add(left),
        parent.y.saturating_add(top),
        w,
        h,
        clip,
    )
}

/// Restore document order, then stable-sort by z-index.
fn into_paint_order(mut placed: Vec<(usize, LayoutBox)>) -> Vec<LayoutBox> {
    placed.sort_by_key(|(index, _)| *index);
    let mut boxes: Vec<LayoutBox> = placed.into_iter().map(|(_, b)| b).collect();
    boxes.sort_by_key(|b| b.z_index);
    boxes
}

fn layout_fragment(node: &Node, layout: &LayoutBox) -> Vec<LayoutBox> {
    let clip = child_clip(node, layout);
    let mut placed = Vec::with_capacity(node.children().len());
    let mut cursor_y = layout.inner_y;

    for (index, child) in node.children().iter().enumerate() {
        if is_absolute(child) {
            placed.push((index, layout_absolute(child, layout, clip)));
            continue;
        }
        let used = cursor_y.saturating_sub(layout.inner_y);
        let (w, h) = measure(child, layout.inner_width, layout.inner_height.saturating_sub(used));
        placed.push((index, layout_node(child, layout.inner_x, cursor_y, w, h, clip)));
        cursor_y = cursor_y.saturating_add(h);
    }

    into_paint_order(placed)
}

/// A flow child while its container is being laid out.
struct FlexItem<'a> {
    index: usize,
    node: &'a Node,
    main: u16,
    cross: u16,
    explicit_cross: bool,
    grow: u16,
}

fn layout_children(node: &Node, layout: &LayoutBox) -> Vec<LayoutBox> {
    let props = node.props();
    let is_row = props
        .get_as::<FlexDirection>(keys::DIRECTION)
        .unwrap_or_default()
        .is_row();
    let justify = props.get_as::<JustifyContent>(keys::JUSTIFY).unwrap_or_default();
    let align = props.get_as::<AlignItems>(keys::ALIGN).unwrap_or_default();
    let gap = props.get_u16(keys::GAP).unwrap_or(0);
    let clip = child_clip(node, layout);

    let (main_size, cross_size) = if is_row {
        (layout.inner_width, layout.inner_height)
    } else {
        (layout.inner_height, layout.inner_width)
    };

    // =========================================================================
    // Step 1: Measure flow items
    // =========================================================================

    let mut placed = Vec::with_capacity(node.children().len());
    let mut items: Vec<FlexItem<'_>> = Vec::new();

    for (index, child) in node.children().iter().enumerate() {
        if is_absolute(child) {
            placed.push((index, layout_absolute(child, layout, clip)));
            continue;
        }
        let (w, h) = measure(child, layout.inner_width, layout.inner_height);
        let cross_key = if is_row { keys::HEIGHT } else { keys::WIDTH };
        items.push(FlexItem {
            index,
            node: child,
            main: if is_row { w } else { h },
            cross: if is_row { h } else { w },
            explicit_cross: child.props().get_dimension(cross_key) != Dimension::Auto,
            grow: child.props().get_u16(keys::GROW).unwrap_or(0),
        });
    }

    let count = items.len().min(u16::MAX as usize) as u16;
    let gaps = gap.saturating_mul(count.saturating_sub(1));
    let used = |items: &[FlexItem<'_>]| {
        items
            .iter()
            .fold(gaps, |acc, item| acc.saturating_add(item.main))
    };

    // =========================================================================
    // Step 2: Grow into free space
    // =========================================================================

    let free = main_size.saturating_sub(used(&items)) as u32;
    let total_grow: u32 = items.iter().map(|i| i.grow as u32).sum();
    if free > 0 && total_grow > 0 {
        let last_grower = items.iter().rposition(|i| i.grow > 0);
        let mut distributed = 0u32;
        for (position, item) in items.iter_mut().enumerate() {
            if item.grow == 0 {
                continue;
            }
            let share = if Some(position) == last_grower {
                free - distributed
            } else {
                free * item.grow as u32 / total_grow
            };
            distributed += share;
            let grown = item.main.saturating_add(share.min(u16::MAX as u32) as u16);
            let child_props = item.node.props();
            item.main = if is_row {
                clamp_width(child_props, grown, main_size)
            } else {
                clamp_height(child_props, grown, main_size)
            };
        }
    }

    // =========================================================================
    // Step 3: Justify
    // =========================================================================

    let remaining = main_size.saturating_sub(used(&items));
    let (mut offset, extra) = match justify {
        JustifyContent::Start => (0, 0),
        JustifyContent::Center => (remaining / 2, 0),
        JustifyContent::End => (remaining, 0),
        JustifyContent::SpaceBetween if count > 1 => (0, remaining / (count - 1)),
        JustifyContent::SpaceBetween => (0, 0),
        JustifyContent::SpaceAround if count > 0 => {
            let around = remaining / count;
            (around / 2, around)
        }
        JustifyContent::SpaceAround => (0, 0),
    };

    // =========================================================================
    // Step 4: Align and position
    // =========================================================================

    for item in &items {
        let child_props = item.node.props();
        let cross = if align == AlignItems::Stretch && !item.explicit_cross {
            if is_row {
                clamp_height(child_props, cross_size, cross_size)
            } else {
                clamp_width(child_props, cross_size, cross_size)
            }
        } else {
            item.cross
        };
        let cross_offset = match align {
            AlignItems::Start | AlignItems::Stretch => 0,
            AlignItems::Center => cross_size.saturating_sub(cross) / 2,
            AlignItems::End => cross_size.saturating_sub(cross),
        };

        let (x, y, w, h) = if is_row {
            (
                layout.inner_x.saturating_add(offset),
                layout.inner_y.saturating_add(cross_offset),
                item.main,
                cross,
            )
        } else {
            (
                layout.inner_x.saturating_add(cross_offset),
                layout.inner_y.saturating_add(offset),
                cross,
                item.main,
            )
        };
        placed.push((item.index, layout_node(item.node, x, y, w, h, clip)));

        offset = offset
            .saturating_add(item.main)
            .saturating_add(gap)
            .saturating_add(extra);
    }

    into_paint_order(placed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{box_node, custom, fragment, text};
    use crate::types::TextWrap;

    fn xs(layout: &LayoutBox) -> Vec<u16> {
        layout.children.iter().map(|c| c.x).collect()
    }

    // =========================================================================
    // Measure
    // =========================================================================

    #[test]
    fn test_measure_text() {
        assert_eq!(measure(&text("hello\nhi").build(), 80, 24), (5, 2));
        let wrapped = text("Hello world test").wrap(TextWrap::Wrap).build();
        assert_eq!(measure(&wrapped, 15, 24), (11, 2));
    }

    #[test]
    fn test_measure_container_adds_gap_padding_border() {
        let node = box_node()
            .direction(FlexDirection::Row)
            .gap(1)
            .padding(1)
            .border(BorderStyle::Single)
            .child(text("abc"))
            .child(text("de"))
            .build();
        // 3 + 1 + 2 inside, plus 2 padding and 2 border per axis.
        assert_eq!(measure(&node, 80, 24), (10, 5));
    }

    #[test]
    fn test_measure_min_max() {
        let node = box_node().min_width(5u16).max_height(1u16).height(4u16).build();
        assert_eq!(measure(&node, 80, 24), (5, 1));
    }

    // =========================================================================
    // Flow layout
    // =========================================================================

    #[test]
    fn test_root_fills_rectangle() {
        let layout = compute_layout(&box_node().build(), 30, 7);
        assert_eq!((layout.width, layout.height), (30, 7));

        let sized = compute_layout(&box_node().width(10u16).height(3u16).build(), 30, 7);
        assert_eq!((sized.width, sized.height), (10, 3));
    }

    #[test]
    fn test_row_additivity() {
        let node = box_node()
            .direction(FlexDirection::Row)
            .gap(2)
            .child(box_node().width(3u16))
            .child(box_node().width(5u16))
            .child(box_node().width(7u16))
            .build();
        let layout = compute_layout(&node, 40, 5);
        assert_eq!(xs(&layout), vec![0, 5, 12]);
    }

    #[test]
    fn test_column_stacks_and_stretches() {
        let node = box_node().child(text("a")).child(text("bb")).build();
        let layout = compute_layout(&node, 20, 10);
        let ys: Vec<u16> = layout.children.iter().map(|c| c.y).collect();
        assert_eq!(ys, vec![0, 1]);
        assert!(layout.children.iter().all(|c| c.width == 20));
    }

    #[test]
    fn test_inner_rect_excludes_border_and_padding() {
        let node = box_node()
            .width(10u16)
            .height(6u16)
            .padding(1)
            .border(BorderStyle::Single)
            .build();
        let layout = compute_layout(&node, 80, 24);
        assert_eq!(
            (layout.inner_x, layout.inner_y, layout.inner_width, layout.inner_height),
            (2, 2, 6, 2)
        );
    }

    #[test]
    fn test_per_side_padding_overrides_base() {
        let node = box_node().padding(2).padding_left(0).build();
        let layout = compute_layout(&node, 10, 10);
        assert_eq!((layout.inner_x, layout.inner_y), (0, 2));
        assert_eq!(layout.inner_width, 8);
    }

    fn row_of(justify: JustifyContent, widths: &[u16]) -> Vec<u16> {
        let node = box_node()
            .direction(FlexDirection::Row)
            .justify(justify)
            .children(widths.iter().map(|w| box_node().width(*w)))
            .build();
        xs(&compute_layout(&node, 10, 1))
    }

    #[test]
    fn test_justify() {
        assert_eq!(row_of(JustifyContent::Start, &[4]), vec![0]);
        assert_eq!(row_of(JustifyContent::Center, &[4]), vec![3]);
        assert_eq!(row_of(JustifyContent::End, &[4]), vec![6]);
        assert_eq!(row_of(JustifyContent::SpaceBetween, &[2, 2, 2]), vec![0, 4, 8]);
        assert_eq!(row_of(JustifyContent::SpaceBetween, &[2]), vec![0]);
        assert_eq!(row_of(JustifyContent::SpaceAround, &[2, 2]), vec![1, 6]);
    }

    #[test]
    fn test_align_cross_axis() {
        let build = |align| {
            box_node()
                .width(10u16)
                .align(align)
                .child(box_node().height(1u16).child(text("abcd")))
                .build()
        };
        let center = compute_layout(&build(AlignItems::Center), 80, 24);
        assert_eq!((center.children[0].x, center.children[0].width), (3, 4));

        let end = compute_layout(&build(AlignItems::End), 80, 24);
        assert_eq!(end.children[0].x, 6);

        let stretch = compute_layout(&build(AlignItems::Stretch), 80, 24);
        assert_eq!((stretch.children[0].x, stretch.children[0].width), (0, 10));
    }

    #[test]
    fn test_stretch_keeps_explicit_cross_size() {
        let node = box_node().child(box_node().width(4u16)).build();
        let layout = compute_layout(&node, 20, 5);
        assert_eq!(layout.children[0].width, 4);
    }

    #[test]
    fn test_grow_distributes_free_space() {
        let node = box_node()
            .direction(FlexDirection::Row)
            .child(box_node().width(2u16).grow(1))
            .child(box_node().width(2u16).grow(2))
            .child(box_node().width(2u16))
            .build();
        let layout = compute_layout(&node, 12, 1);
        let widths: Vec<u16> = layout.children.iter().map(|c| c.width).collect();
        assert_eq!(widths, vec![4, 6, 2]);
        assert_eq!(xs(&layout), vec![0, 4, 10]);
    }

    #[test]
    fn test_grow_respects_max() {
        let node = box_node()
            .direction(FlexDirection::Row)
            .child(box_node().grow(1).max_width(3u16))
            .build();
        let layout = compute_layout(&node, 12, 1);
        assert_eq!(layout.children[0].width, 3);
    }

    #[test]
    fn test_percent_width() {
        let node = box_node()
            .direction(FlexDirection::Row)
            .child(box_node().width(Dimension::Percent(50.0)))
            .build();
        let layout = compute_layout(&node, 20, 4);
        assert_eq!(layout.children[0].width, 10);
    }

    #[test]
    fn test_wrapped_text_height_follows_width() {
        let node = box_node()
            .width(15u16)
            .child(text("Hello world test").wrap(TextWrap::Wrap))
            .build();
        let layout = compute_layout(&node, 80, 24);
        let label = &layout.children[0];
        assert_eq!(label.height, 2);
        assert_eq!(label.lines, vec!["Hello world", "test"]);
    }

    #[test]
    fn test_truncated_text_lines() {
        let node = box_node()
            .width(6u16)
            .child(text("hello world").wrap(TextWrap::Truncate))
            .build();
        let layout = compute_layout(&node, 80, 24);
        assert_eq!(layout.children[0].lines, vec!["hello…"]);
    }

    // =========================================================================
    // Absolute, z-order, overflow
    // =========================================================================

    #[test]
    fn test_absolute_relative_to_parent_box() {
        let node = box_node()
            .border(BorderStyle::Single)
            .child(box_node().width(3u16))
            .child(box_node().width(2u16).height(1u16).absolute(4, 2))
            .build();
        let layout = compute_layout(&node, 20, 10);
        let overlay = &layout.children[1];
        assert_eq!((overlay.x, overlay.y, overlay.width, overlay.height), (4, 2, 2, 1));
        // Absolute children stay out of flow.
        assert_eq!(layout.children[0].y, 1);
    }

    #[test]
    fn test_children_sorted_by_z_index() {
        let node = box_node()
            .child(box_node().absolute(0, 0).z_index(5).child(text("top")))
            .child(text("a"))
            .child(text("b").z_index(-1))
            .build();
        let layout = compute_layout(&node, 20, 10);
        let order: Vec<&str> = layout
            .children
            .iter()
            .map(|c| {
                let nested = c.children.first().and_then(|t| t.node.content());
                c.node.content().or(nested).unwrap_or("")
            })
            .collect();
        assert_eq!(order, vec!["b", "a", "top"]);
    }

    #[test]
    fn test_nested_overflow_clips_intersect() {
        let node = box_node()
            .width(10u16)
            .height(5u16)
            .border(BorderStyle::Single)
            .overflow(Overflow::Hidden)
            .child(
                box_node()
                    .width(20u16)
                    .height(2u16)
                    .overflow(Overflow::Hidden)
                    .child(text("x")),
            )
            .build();
        let layout = compute_layout(&node, 80, 24);
        assert_eq!(layout.clip, None);
        let inner = &layout.children[0];
        assert_eq!(inner.clip, Some(ClipRect::new(1, 1, 8, 3)));
        assert_eq!(inner.children[0].clip, Some(ClipRect::new(1, 1, 8, 2)));
    }

    #[test]
    fn test_visible_overflow_passes_clip_through() {
        let node = box_node()
            .overflow(Overflow::Scroll)
            .child(box_node().child(text("deep")))
            .build();
        let layout = compute_layout(&node, 6, 3);
        let leaf = &layout.children[0].children[0];
        assert_eq!(leaf.clip, Some(ClipRect::new(0, 0, 6, 3)));
    }

    // =========================================================================
    // Fragments, custom types, degenerate space
    // =========================================================================

    #[test]
    fn test_fragment_stacks_vertically() {
        let node = fragment([
            text("one").build(),
            box_node().height(2u16).build(),
            text("three").build(),
        ])
        .build();
        let layout = compute_layout(&node, 20, 10);
        let ys: Vec<u16> = layout.children.iter().map(|c| c.y).collect();
        assert_eq!(ys, vec![0, 1, 3]);
        assert_eq!(layout.children[0].width, 3);
    }

    #[test]
    fn test_custom_lays_out_as_column() {
        let node = custom("select").child(text("a")).child(text("b")).build();
        let layout = compute_layout(&node, 10, 5);
        let ys: Vec<u16> = layout.children.iter().map(|c| c.y).collect();
        assert_eq!(ys, vec![0, 1]);
    }

    #[test]
    fn test_zero_space_does_not_panic() {
        let node = box_node()
            .padding(3)
            .border(BorderStyle::Double)
            .justify(JustifyContent::SpaceAround)
            .child(text("content").wrap(TextWrap::Wrap))
            .build();
        let layout = compute_layout(&node, 0, 0);
        assert_eq!((layout.width, layout.height), (0, 0));
        assert_eq!(layout.inner_width, 0);
    }

    #[test]
    fn test_iter_visits_in_paint_order() {
        let node = box_node()
            .child(box_node().child(text("a")))
            .child(text("b"))
            .build();
        let layout = compute_layout(&node, 10, 5);
        let contents: Vec<&str> = layout.iter().filter_map(|b| b.node.content()).collect();
        assert_eq!(contents, vec!["a", "b"]);
    }
}
