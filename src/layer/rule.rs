//! Horizontal divider line.

use crate::error::Result;
use crate::image::{Canvas, Color};
use crate::layer::Layer;
use crate::style::Divider;

#[derive(Debug, Clone)]
pub struct RuleLayer {
    pub x0: f64,
    pub x1: f64,
    pub y: f64,
    pub width: f64,
    pub color: Color,
}

impl RuleLayer {
    /// A divider centered on `cx`.
    pub fn centered(divider: &Divider, cx: f64, y: f64) -> Self {
        Self {
            x0: cx - divider.half_width,
            x1: cx + divider.half_width,
            y,
            width: divider.line_width,
            color: divider.color,
        }
    }
}

impl Layer for RuleLayer {
    fn render(&self, canvas: &mut dyn Canvas) -> Result<()> {
        if self.width <= 0.0 || self.x1 <= self.x0 {
            return Ok(());
        }
        canvas.stroke_line((self.x0, self.y), (self.x1, self.y), self.width, self.color)
    }
}
