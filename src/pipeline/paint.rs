//! Paint pass: LayoutBox tree to LogicalBuffer.
//!
//! Boxes are painted parent first, children in paint order, so later
//! siblings and higher z-indices overwrite earlier ones. Each box paints:
//!
//! 1. Background fill over its outer rectangle
//! 2. Border glyphs, colored by `border_color` or the inherited foreground
//! 3. Text lines, aligned inside the box
//!
//! Foreground and attributes are inherited from ancestors; backgrounds show
//! through via merge writes.

use crate::layout::{align_offset, string_width, LayoutBox};
use crate::node::{keys, NodeType, Props};
use crate::renderer::LogicalBuffer;
use crate::types::{Attr, BorderStyle, Cell, Color, Style, TextAlign};

/// Style state handed down the tree.
#[derive(Debug, Clone, Copy, Default)]
struct Inherited {
    fg: Option<Color>,
    attrs: Attr,
}

/// Paint a laid-out tree into `buffer`.
pub fn paint(layout: &LayoutBox, buffer: &mut LogicalBuffer) {
    paint_box(layout, buffer, Inherited::default());
}

fn attrs_of(props: &Props) -> Attr {
    [
        (keys::BOLD, Attr::BOLD),
        (keys::DIM, Attr::DIM),
        (keys::ITALIC, Attr::ITALIC),
        (keys::UNDERLINE, Attr::UNDERLINE),
        (keys::INVERSE, Attr::INVERSE),
        (keys::STRIKETHROUGH, Attr::STRIKETHROUGH),
    ]
    .into_iter()
    .filter(|(key, _)| props.get_bool(key) == Some(true))
    .fold(Attr::NONE, |acc, (_, flag)| acc | flag)
}

fn paint_box(layout: &LayoutBox, buffer: &mut LogicalBuffer, inherited: Inherited) {
    let props = layout.node.props();
    let own = Inherited {
        fg: props.get_color(keys::FG).or(inherited.fg),
        attrs: inherited.attrs | attrs_of(props),
    };

    if let Some(bg) = props.get_color(keys::BG) {
        buffer.fill_rect(layout.rect(), Style::new().bg(bg), layout.clip);
    }

    let border = props.get_as::<BorderStyle>(keys::BORDER).unwrap_or_default();
    if border != BorderStyle::None {
        let color = props.get_color(keys::BORDER_COLOR).or(own.fg);
        let style = Style {
            fg: color,
            bg: None,
            attrs: Attr::NONE,
        };
        paint_border(layout, buffer, border, style);
    }

    if matches!(layout.node.kind(), NodeType::Text) {
        paint_text(layout, buffer, own);
    }

    for child in &layout.children {
        paint_box(child, buffer, own);
    }
}

fn paint_border(layout: &LayoutBox, buffer: &mut LogicalBuffer, border: BorderStyle, style: Style) {
    if layout.width < 2 || layout.height < 2 {
        return;
    }
    let (h, v, tl, tr, br, bl) = border.chars();
    let clip = layout.clip;
    let left = layout.x;
    let top = layout.y;
    let right = layout.x.saturating_add(layout.width - 1);
    let bottom = layout.y.saturating_add(layout.height - 1);

    let mut put = |x: u16, y: u16, ch: char| {
        if clip.is_none_or(|c| c.contains(x, y)) {
            buffer.merge(x, y, Cell::new(ch, style));
        }
    };

    for x in left.saturating_add(1)..right {
        put(x, top, h);
        put(x, bottom, h);
    }
    for y in top.saturating_add(1)..bottom {
        put(left, y, v);
        put(right, y, v);
    }
    put(left, top, tl);
    put(right, top, tr);
    put(right, bottom, br);
    put(left, bottom, bl);
}

fn paint_text(layout: &LayoutBox, buffer: &mut LogicalBuffer, inherited: Inherited) {
    let props = layout.node.props();
    let align = props.get_as::<TextAlign>(keys::TEXT_ALIGN).unwrap_or_default();
    let style = Style {
        fg: inherited.fg,
        bg: None,
        attrs: inherited.attrs,
    };
    let clip = layout.clip;

    for (row, line) in layout.lines.iter().enumerate().take(layout.height as usize) {
        let offset = align_offset(string_width(line), layout.width, align);
        let y = layout.y.saturating_add(row as u16);
        buffer.draw_text(layout.x.saturating_add(offset), y, line, style, clip);
    }
}
