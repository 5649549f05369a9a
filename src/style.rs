//! Card styles: a closed set of names, each mapped to a pure configuration
//! record that drives the single renderer.

mod builtin;

use crate::error::{Error, Result};
use crate::image::{Color, Fill};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum StyleName {
    Bold,
    Modern,
    Transparent,
    Story,
    Fire,
    Minimal,
    Gradient,
}

impl StyleName {
    pub const ALL: [StyleName; 7] = [
        Self::Bold,
        Self::Modern,
        Self::Transparent,
        Self::Story,
        Self::Fire,
        Self::Minimal,
        Self::Gradient,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Modern => "modern",
            Self::Transparent => "transparent",
            Self::Story => "story",
            Self::Fire => "fire",
            Self::Minimal => "minimal",
            Self::Gradient => "gradient",
        }
    }

    pub fn style(&self) -> RenderStyle {
        builtin::style(*self)
    }
}

impl fmt::Display for StyleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleName {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|n| n.as_str() == key)
            .ok_or_else(|| Error::unknown_style(s))
    }
}

/// Weight, pixel size and color of one text slot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextStyle {
    pub weight: u16,
    pub size: f64,
    pub color: Color,
}

impl TextStyle {
    pub fn new(weight: u16, size: f64, color: Color) -> Self {
        Self {
            weight,
            size,
            color,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextTable {
    pub title: TextStyle,
    pub date: TextStyle,
    pub duration: TextStyle,
    pub exercise: TextStyle,
    pub sets: TextStyle,
    pub group: TextStyle,
    pub brand: TextStyle,
    pub tagline: TextStyle,
}

/// Block heights and gaps of the vertical flow, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing {
    pub title_height: f64,
    pub date_height: f64,
    /// Gap between the date and the duration line.
    pub date_gap: f64,
    pub duration_height: f64,
    pub divider_height: f64,
    pub group_height: f64,
    pub brand_height: f64,
    pub tagline_height: f64,
    /// Gap inserted between the main blocks.
    pub spacing: f64,
}

/// Geometry of one exercise row: the name at the top, the sets label at
/// `sets_offset`, and the cursor advanced by `height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowMetrics {
    pub sets_offset: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Divider {
    pub half_width: f64,
    pub line_width: f64,
    pub color: Color,
}

/// What happens to the duration block of a workout without a duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationGap {
    /// The block height is dropped, its trailing gap is kept.
    Collapse,
    /// The block height and gap are both kept, leaving an empty line.
    Reserve,
}

/// Thin bar drawn above the content block.
#[derive(Debug, Clone, PartialEq)]
pub struct AccentBar {
    pub width: f64,
    pub height: f64,
    /// Distance between the bar's top edge and the content start.
    pub offset: f64,
    pub fill: Fill,
}

/// Glyph painted on both sides of the date line.
#[derive(Debug, Clone, PartialEq)]
pub struct Ornament {
    pub glyph: String,
    pub offset: f64,
    pub color: Color,
}

pub const BRAND: &str = "LINKLY";

#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    pub name: StyleName,
    pub family: String,
    /// Painted bottom to top; empty keeps the card transparent.
    pub background: Vec<Fill>,
    pub text: TextTable,
    pub spacing: Spacing,
    pub row: RowMetrics,
    pub divider: Divider,
    pub duration_gap: DurationGap,
    pub accent_bar: Option<AccentBar>,
    pub date_ornament: Option<Ornament>,
    pub tagline: Option<String>,
    /// Prefix the date with the workout type.
    pub show_kind: bool,
    pub scale: f64,
}

impl RenderStyle {
    pub fn is_transparent(&self) -> bool {
        self.background.is_empty()
    }

    /// Returns a copy with every length multiplied by `s`. Gradient
    /// positions are relative and stay as they are.
    pub fn scaled(&self, s: f64) -> Self {
        let s = if s.is_finite() { s.max(0.0) } else { 1.0 };
        let text = |t: &TextStyle| TextStyle {
            size: t.size * s,
            ..*t
        };
        let sp = &self.spacing;
        Self {
            name: self.name,
            family: self.family.clone(),
            background: self.background.iter().map(|f| f.scaled(s)).collect(),
            text: TextTable {
                title: text(&self.text.title),
                date: text(&self.text.date),
                duration: text(&self.text.duration),
                exercise: text(&self.text.exercise),
                sets: text(&self.text.sets),
                group: text(&self.text.group),
                brand: text(&self.text.brand),
                tagline: text(&self.text.tagline),
            },
            spacing: Spacing {
                title_height: sp.title_height * s,
                date_height: sp.date_height * s,
                date_gap: sp.date_gap * s,
                duration_height: sp.duration_height * s,
                divider_height: sp.divider_height * s,
                group_height: sp.group_height * s,
                brand_height: sp.brand_height * s,
                tagline_height: sp.tagline_height * s,
                spacing: sp.spacing * s,
            },
            row: RowMetrics {
                sets_offset: self.row.sets_offset * s,
                height: self.row.height * s,
            },
            divider: Divider {
                half_width: self.divider.half_width * s,
                line_width: self.divider.line_width * s,
                color: self.divider.color,
            },
            duration_gap: self.duration_gap,
            accent_bar: self.accent_bar.as_ref().map(|bar| AccentBar {
                width: bar.width * s,
                height: bar.height * s,
                offset: bar.offset * s,
                fill: bar.fill.scaled(s),
            }),
            date_ornament: self.date_ornament.as_ref().map(|o| Ornament {
                offset: o.offset * s,
                ..o.clone()
            }),
            tagline: self.tagline.clone(),
            show_kind: self.show_kind,
            scale: self.scale * s,
        }
    }

    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = family.into();
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = vec![Fill::Solid(color)];
        self
    }

    /// Recolors the primary text slots, keeping each slot's opacity.
    pub fn with_text_color(mut self, color: Color) -> Self {
        let t = &mut self.text;
        for slot in [
            &mut t.title,
            &mut t.date,
            &mut t.duration,
            &mut t.exercise,
            &mut t.sets,
            &mut t.group,
            &mut t.tagline,
        ] {
            slot.color = match slot.color.a {
                Some(a) => color.with_alpha(a),
                None => color,
            };
        }
        self
    }

    pub fn with_accent(mut self, color: Color) -> Self {
        self.text.brand.color = color;
        if let Some(o) = self.date_ornament.as_mut() {
            o.color = color;
        }
        if let Some(bar) = self.accent_bar.as_mut() {
            bar.fill = Fill::Solid(color);
        }
        self
    }

    pub fn apply(self, o: &StyleOverride) -> Self {
        let mut style = self;
        if let Some(c) = o.background {
            style = style.with_background(c);
        }
        if let Some(c) = o.text {
            style = style.with_text_color(c);
        }
        if let Some(c) = o.accent {
            style = style.with_accent(c);
        }
        style
    }
}

/// User adjustments to a built-in style.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct StyleOverride {
    pub text: Option<Color>,
    pub accent: Option<Color>,
    pub background: Option<Color>,
}

/// Styles available to a renderer, fixed once built.
#[derive(Debug, Clone)]
pub struct StyleBook {
    styles: HashMap<StyleName, RenderStyle>,
}

impl Default for StyleBook {
    fn default() -> Self {
        Self::builtin()
    }
}

impl StyleBook {
    pub fn builtin() -> Self {
        let styles = StyleName::ALL.into_iter().map(|n| (n, n.style())).collect();
        Self { styles }
    }

    pub fn get(&self, name: StyleName) -> &RenderStyle {
        &self.styles[&name]
    }

    pub fn with_family(self, family: &str) -> Self {
        self.map(|s| s.with_family(family))
    }

    pub fn with_override(mut self, name: StyleName, o: &StyleOverride) -> Self {
        if let Some(style) = self.styles.remove(&name) {
            self.styles.insert(name, style.apply(o));
        }
        self
    }

    fn map(self, f: impl Fn(RenderStyle) -> RenderStyle) -> Self {
        let styles = self.styles.into_iter().map(|(k, v)| (k, f(v))).collect();
        Self { styles }
    }
}
