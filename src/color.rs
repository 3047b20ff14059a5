//! Implements utilities to create color values.
//!
//! Stroke and background colors are plain RGBA values with channels in
//! `0.0..=1.0`; the consuming renderer converts them to whatever its
//! platform surface expects.

use regex::Regex;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    /// Opaque black, the built-in stroke color fallback.
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };

    /// Fully transparent, the universal background default.
    pub const TRANSPARENT: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };

    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        }
    }

    pub fn rgba8(&self) -> (u8, u8, u8, u8) {
        (
            Self::channel8(self.r),
            Self::channel8(self.g),
            Self::channel8(self.b),
            Self::channel8(self.a),
        )
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0.0
    }

    fn channel8(x: f64) -> u8 {
        (x.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

impl FromStr for Color {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let re =
            Regex::new(r"^#([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})?$")
                .unwrap();

        let captures = re
            .captures(s)
            .ok_or("string not in form #RRGGBB or #RRGGBBAA")?;
        let mut values = captures
            .iter()
            .skip(1)
            .map(|c| c.map(|v| u8::from_str_radix(v.as_str(), 16).unwrap()));
        let r = values.next().unwrap().unwrap_or(0) as f64 / 255.0;
        let g = values.next().unwrap().unwrap_or(0) as f64 / 255.0;
        let b = values.next().unwrap().unwrap_or(0) as f64 / 255.0;
        let a = values.next().unwrap().map(|x| x as f64 / 255.0).unwrap_or(1.0);
        Ok(Color { r, g, b, a })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b, a) = self.rgba8();
        if a == 255 {
            write!(f, "#{r:02x}{g:02x}{b:02x}")
        } else {
            write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

struct ColorVisitor;

impl<'de> Visitor<'de> for ColorVisitor {
    type Value = Color;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string in the form #RRGGBBAA or #RRGGBB")
    }

    fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        v.parse::<Color>().map_err(|e| E::custom(e))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Color, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(ColorVisitor)
    }
}
