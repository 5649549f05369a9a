//! Implements utilities to create color values.

use regex::Regex;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: Option<f64>,
}

impl Color {
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: None };
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: None };

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: None,
        }
    }

    /// Same as the CSS `rgba()` notation: 8-bit channels, alpha in `0..=1`.
    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: Some(a),
        }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a: Some(a.clamp(0.0, 1.0)), ..self }
    }

    pub fn components(&self) -> (f64, f64, f64, f64) {
        (self.r, self.g, self.b, self.a.unwrap_or(1.0))
    }

    pub fn alpha(&self) -> f64 {
        self.a.unwrap_or(1.0)
    }
}

fn hex_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^#([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})?$")
            .expect("valid color regex")
    })
}

impl FromStr for Color {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = hex_pattern()
            .captures(s.trim())
            .ok_or("string not in form #RRGGBB or #RRGGBBAA")?;
        let mut values = captures
            .iter()
            .skip(1)
            .map(|c| c.and_then(|v| u8::from_str_radix(v.as_str(), 16).ok()));
        let mut next = || values.next().flatten();
        let r = next().unwrap_or(0) as f64 / 255.0;
        let g = next().unwrap_or(0) as f64 / 255.0;
        let b = next().unwrap_or(0) as f64 / 255.0;
        let a = next().map(|x| x as f64 / 255.0);
        Ok(Color { r, g, b, a })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { r, g, b, a } = *self;
        let r = (r.clamp(0.0, 1.0) * 255.0).round() as u8;
        let g = (g.clamp(0.0, 1.0) * 255.0).round() as u8;
        let b = (b.clamp(0.0, 1.0) * 255.0).round() as u8;
        if let Some(a) = a {
            let a = (a.clamp(0.0, 1.0) * 255.0).round() as u8;
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
        }
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

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
