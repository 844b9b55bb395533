use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{Result, ensure};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use svg::node::element::Rectangle;

use crate::geometry::primitives::Rect;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgLayoutTheme,
    ///Draw the axis-aligned bounding box of every sprite, which is what overlap is measured on
    #[serde(default)]
    pub bboxes: bool,
    ///Draw the id of every sprite at its center
    #[serde(default)]
    pub sprite_ids: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            bboxes: true,
            sprite_ids: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f64,
    pub canvas_fill: Color,
    pub sprite_fill: Color,
    pub relaxed_sprite_fill: Color,
    pub bbox_stroke: Color,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        SvgLayoutTheme::EARTH_TONES
    }
}

impl SvgLayoutTheme {
    pub const EARTH_TONES: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.0,
        canvas_fill: Color(0xCC, 0x82, 0x4A),
        sprite_fill: Color(0xFF, 0xC8, 0x79),
        relaxed_sprite_fill: Color(0xFF, 0x00, 0x00), // RED
        bbox_stroke: Color(0x2D, 0x2D, 0x2D),
    };

    pub const GRAY: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.5,
        canvas_fill: Color(0xD3, 0xD3, 0xD3),
        sprite_fill: Color(0x7A, 0x7A, 0x7A),
        relaxed_sprite_fill: Color(0xD0, 0x00, 0x00),
        bbox_stroke: Color(0x63, 0x63, 0x63),
    };
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(u8, u8, u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        ensure!(
            hex.len() == 6 && hex.is_ascii(),
            "invalid color, expected #RRGGBB, got {s}"
        );
        let r = u8::from_str_radix(&hex[0..2], 16)?;
        let g = u8::from_str_radix(&hex[2..4], 16)?;
        let b = u8::from_str_radix(&hex[4..6], 16)?;
        Ok(Color(r, g, b))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_str(&s).map_err(serde::de::Error::custom)
    }
}

pub fn rect_to_svg(rect: &Rect, params: &[(&str, &str)]) -> Rectangle {
    let mut svg_rect = Rectangle::new()
        .set("x", rect.x_min)
        .set("y", rect.y_min)
        .set("width", rect.width())
        .set("height", rect.height());
    for param in params {
        svg_rect = svg_rect.set(param.0, param.1)
    }
    svg_rect
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_round_trips_through_hex() {
        let color = Color::from_str("#FFC879").unwrap();
        assert_eq!(color, Color(0xFF, 0xC8, 0x79));
        assert_eq!(color.to_string(), "#FFC879");
        assert_eq!(Color::from_str("2d2d2d").unwrap(), Color(0x2D, 0x2D, 0x2D));
    }

    #[test]
    fn invalid_colors_are_rejected() {
        assert!(Color::from_str("#FFF").is_err());
        assert!(Color::from_str("#GGGGGG").is_err());
        assert!(serde_json::from_str::<Color>(r#""red""#).is_err());
    }
}
