//! Represents a single line of centered text.

use crate::error::Result;
use crate::image::{Canvas, Color, TextRun};
use crate::layer::Layer;
use crate::style::TextStyle;

#[derive(Debug, Clone)]
pub struct LabelLayer {
    pub text: String,
    pub family: String,
    pub weight: u16,
    pub size: f64,
    pub color: Color,
    pub x: f64,
    pub y: f64,
}

impl LabelLayer {
    pub fn new(text: impl Into<String>, family: &str, style: &TextStyle, x: f64, y: f64) -> Self {
        Self {
            text: text.into(),
            family: family.to_string(),
            weight: style.weight,
            size: style.size,
            color: style.color,
            x,
            y,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Layer for LabelLayer {
    fn render(&self, canvas: &mut dyn Canvas) -> Result<()> {
        canvas.draw_text(&TextRun {
            text: &self.text,
            family: &self.family,
            weight: self.weight,
            size: self.size,
            color: self.color,
            x: self.x,
            y: self.y,
        })
    }
}
