//! The drawing surface seam between layers and pixel backends.

use crate::error::Result;
use crate::image::color::Color;
use crate::image::fill::{Fill, Rect};

/// One line of text, horizontally centered on `x` with its top edge at `y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextRun<'a> {
    pub text: &'a str,
    pub family: &'a str,
    pub weight: u16,
    pub size: f64,
    pub color: Color,
    pub x: f64,
    pub y: f64,
}

/// A 2D drawing target of fixed pixel size.
///
/// Callers own the canvas for the duration of a render; layers never keep a
/// reference to it.
pub trait Canvas {
    fn size(&self) -> (f64, f64);

    /// Resets every pixel to fully transparent.
    fn clear(&mut self) -> Result<()>;

    fn fill_rect(&mut self, fill: &Fill, rect: Rect) -> Result<()>;

    fn stroke_line(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        width: f64,
        color: Color,
    ) -> Result<()>;

    fn draw_text(&mut self, run: &TextRun) -> Result<()>;

    fn bounds(&self) -> Rect {
        let (w, h) = self.size();
        Rect::new(0.0, 0.0, w, h)
    }
}
