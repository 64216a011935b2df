//! Node properties.
//!
//! Props are an ordered `String -> PropValue` map. Ordering is what makes the
//! serialized form (and therefore the node hash) independent of the order in
//! which props were set.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::{
    AlignItems, BorderStyle, Color, Dimension, FlexDirection, JustifyContent, Overflow, Position,
    TextAlign, TextWrap,
};

/// Well-known prop keys read by layout and paint.
pub mod keys {
    pub const CONTENT: &str = "content";

    pub const WIDTH: &str = "width";
    pub const HEIGHT: &str = "height";
    pub const MIN_WIDTH: &str = "min_width";
    pub const MIN_HEIGHT: &str = "min_height";
    pub const MAX_WIDTH: &str = "max_width";
    pub const MAX_HEIGHT: &str = "max_height";

    pub const PADDING: &str = "padding";
    pub const PADDING_TOP: &str = "padding_top";
    pub const PADDING_RIGHT: &str = "padding_right";
    pub const PADDING_BOTTOM: &str = "padding_bottom";
    pub const PADDING_LEFT: &str = "padding_left";

    pub const DIRECTION: &str = "direction";
    pub const JUSTIFY: &str = "justify";
    pub const ALIGN: &str = "align";
    pub const GAP: &str = "gap";
    pub const GROW: &str = "grow";

    pub const BORDER: &str = "border";
    pub const BORDER_COLOR: &str = "border_color";
    pub const FG: &str = "fg";
    pub const BG: &str = "bg";
    pub const BOLD: &str = "bold";
    pub const DIM: &str = "dim";
    pub const ITALIC: &str = "italic";
    pub const UNDERLINE: &str = "underline";
    pub const INVERSE: &str = "inverse";
    pub const STRIKETHROUGH: &str = "strikethrough";

    pub const WRAP: &str = "wrap";
    pub const TEXT_ALIGN: &str = "text_align";
    pub const OVERFLOW: &str = "overflow";
    pub const POSITION: &str = "position";
    pub const LEFT: &str = "left";
    pub const TOP: &str = "top";
    pub const Z_INDEX: &str = "z_index";
}

// =============================================================================
// PropValue
// =============================================================================

/// A single prop value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PropValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Color(Color),
    Dimension(Dimension),
    Border(BorderStyle),
    Direction(FlexDirection),
    Justify(JustifyContent),
    Align(AlignItems),
    Overflow(Overflow),
    Position(Position),
    TextAlign(TextAlign),
    Wrap(TextWrap),
}

macro_rules! prop_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for PropValue {
                fn from(value: $ty) -> Self {
                    PropValue::$variant(value.into())
                }
            }
        )*
    };
}

prop_from! {
    bool => Bool,
    i64 => Int,
    i32 => Int,
    u16 => Int,
    f64 => Float,
    String => Str,
    &str => Str,
    Color => Color,
    Dimension => Dimension,
    BorderStyle => Border,
    FlexDirection => Direction,
    JustifyContent => Justify,
    AlignItems => Align,
    Overflow => Overflow,
    Position => Position,
    TextAlign => TextAlign,
    TextWrap => Wrap,
}

/// Conversion out of a [`PropValue`]. A value of the wrong kind is `None`.
pub trait FromPropValue: Sized {
    fn from_prop(value: &PropValue) -> Option<Self>;
}

macro_rules! prop_into {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl FromPropValue for $ty {
                fn from_prop(value: &PropValue) -> Option<Self> {
                    match value {
                        PropValue::$variant(v) => Some(*v),
                        _ => None,
                    }
                }
            }
        )*
    };
}

prop_into! {
    bool => Bool,
    Color => Color,
    BorderStyle => Border,
    FlexDirection => Direction,
    JustifyContent => Justify,
    AlignItems => Align,
    Overflow => Overflow,
    Position => Position,
    TextAlign => TextAlign,
    TextWrap => Wrap,
}

impl FromPropValue for i64 {
    fn from_prop(value: &PropValue) -> Option<Self> {
        match value {
            PropValue::Int(v) => Some(*v),
            PropValue::Float(v) if v.is_finite() => Some(v.trunc() as i64),
            _ => None,
        }
    }
}

impl FromPropValue for Dimension {
    fn from_prop(value: &PropValue) -> Option<Self> {
        match value {
            PropValue::Dimension(d) => Some(*d),
            PropValue::Int(n) => Some(Dimension::Cells(clamp_u16(*n))),
            _ => None,
        }
    }
}

fn clamp_u16(n: i64) -> u16 {
    n.clamp(0, u16::MAX as i64) as u16
}

// =============================================================================
// Props
// =============================================================================

/// Ordered prop map.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Props(BTreeMap<String, PropValue>);

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Typed read; absent or mistyped values are `None`.
    pub fn get_as<T: FromPropValue>(&self, key: &str) -> Option<T> {
        self.get(key).and_then(T::from_prop)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get_as(key)
    }

    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get_as(key)
    }

    /// Integer clamped into `u16`.
    pub fn get_u16(&self, key: &str) -> Option<u16> {
        self.get_i64(key).map(clamp_u16)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(PropValue::Str(s)) => Some(s),
            _ => None,
        }
    }

    pub fn get_color(&self, key: &str) -> Option<Color> {
        match self.get(key) {
            Some(PropValue::Color(c)) => Some(*c),
            Some(PropValue::Str(s)) => Color::parse(s),
            _ => None,
        }
    }

    pub fn get_dimension(&self, key: &str) -> Dimension {
        self.get_as(key).unwrap_or_default()
    }
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NamedColor;

    #[test]
    fn test_typed_accessors() {
        let props = Props::new()
            .with(keys::WIDTH, 10u16)
            .with(keys::BOLD, true)
            .with(keys::FG, Color::Named(NamedColor::Red))
            .with(keys::CONTENT, "hi");

        assert_eq!(props.get_u16(keys::WIDTH), Some(10));
        assert_eq!(props.get_bool(keys::BOLD), Some(true));
        assert_eq!(props.get_color(keys::FG), Some(Color::Named(NamedColor::Red)));
        assert_eq!(props.get_str(keys::CONTENT), Some("hi"));
    }

    #[test]
    fn test_wrong_type_is_absent() {
        let props = Props::new().with(keys::WIDTH, "wide").with(keys::BOLD, 1i64);
        assert_eq!(props.get_u16(keys::WIDTH), None);
        assert_eq!(props.get_bool(keys::BOLD), None);
        assert_eq!(props.get_dimension(keys::WIDTH), Dimension::Auto);
    }

    #[test]
    fn test_integer_clamping() {
        let props = Props::new().with(keys::GAP, -4i64).with(keys::GROW, 100_000i64);
        assert_eq!(props.get_u16(keys::GAP), Some(0));
        assert_eq!(props.get_u16(keys::GROW), Some(u16::MAX));
    }

    #[test]
    fn test_color_from_string_prop() {
        let props = Props::new().with(keys::BG, "#0000ff");
        assert_eq!(props.get_color(keys::BG), Some(Color::rgb(0, 0, 255)));
    }

    #[test]
    fn test_dimension_accepts_plain_ints() {
        let props = Props::new()
            .with(keys::WIDTH, 12u16)
            .with(keys::HEIGHT, Dimension::Percent(50.0));
        assert_eq!(props.get_dimension(keys::WIDTH), Dimension::Cells(12));
        assert_eq!(props.get_dimension(keys::HEIGHT), Dimension::Percent(50.0));
    }

    #[test]
    fn test_insertion_order_does_not_matter() {
        let a: Props = [("b", 2i64), ("a", 1i64)].into_iter().collect();
        let b: Props = [("a", 1i64), ("b", 2i64)].into_iter().collect();
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
