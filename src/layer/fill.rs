//! Fills a rectangle with a solid color or gradient: card backgrounds and
//! accent bars.

use crate::error::Result;
use crate::image::{Canvas, Fill, Rect};
use crate::layer::Layer;

#[derive(Debug, Clone)]
pub struct FillLayer {
    pub fill: Fill,
    /// `None` covers the whole canvas.
    pub rect: Option<Rect>,
}

impl FillLayer {
    pub fn background(fill: Fill) -> Self {
        Self { fill, rect: None }
    }

    pub fn rect(fill: Fill, rect: Rect) -> Self {
        Self {
            fill,
            rect: Some(rect),
        }
    }
}

impl Layer for FillLayer {
    fn render(&self, canvas: &mut dyn Canvas) -> Result<()> {
        let rect = self.rect.unwrap_or_else(|| canvas.bounds());
        canvas.fill_rect(&self.fill, rect)
    }
}
