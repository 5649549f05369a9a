//! Cairo image surface backend, with text laid out by pango.

use crate::error::{Error, Result};
use crate::image::canvas::{Canvas, TextRun};
use crate::image::color::Color;
use crate::image::fill::{Fill, Rect};
use crate::text::font;

use cairo::{Context, Format, ImageSurface, LinearGradient, Operator, RadialGradient};

pub struct CairoCanvas {
    surface: ImageSurface,
    cr: Context,
    width: i32,
    height: i32,
}

impl CairoCanvas {
    /// Acquires an ARGB surface and its drawing context. Nothing is painted
    /// if either cannot be created.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|e| Error::surface(width, height, e))?;
        let cr = Context::new(&surface).map_err(|e| Error::surface(width, height, e))?;
        Ok(Self {
            surface,
            cr,
            width,
            height,
        })
    }

    pub fn into_surface(self) -> ImageSurface {
        let Self { surface, cr, .. } = self;
        drop(cr);
        surface.flush();
        surface
    }

    fn set_source(&self, fill: &Fill, rect: Rect) -> Result<()> {
        match fill {
            Fill::Solid(color) => self.set_color(*color),
            Fill::Linear { start, end, stops } => {
                let (x0, y0) = rect.point(*start);
                let (x1, y1) = rect.point(*end);
                let gradient = LinearGradient::new(x0, y0, x1, y1);
                for stop in stops {
                    let (r, g, b, a) = stop.color.components();
                    gradient.add_color_stop_rgba(stop.offset, r, g, b, a);
                }
                self.cr.set_source(&gradient)?;
            }
            Fill::Radial {
                center,
                inner,
                outer,
                stops,
            } => {
                let (cx, cy) = rect.point(*center);
                let gradient = RadialGradient::new(cx, cy, *inner, cx, cy, *outer);
                for stop in stops {
                    let (r, g, b, a) = stop.color.components();
                    gradient.add_color_stop_rgba(stop.offset, r, g, b, a);
                }
                self.cr.set_source(&gradient)?;
            }
        }
        Ok(())
    }

    fn set_color(&self, color: Color) {
        let (r, g, b, a) = color.components();
        self.cr.set_source_rgba(r, g, b, a);
    }
}

impl Canvas for CairoCanvas {
    fn size(&self) -> (f64, f64) {
        (self.width as f64, self.height as f64)
    }

    fn clear(&mut self) -> Result<()> {
        self.cr.save()?;
        self.cr.set_operator(Operator::Clear);
        self.cr.paint()?;
        self.cr.restore()?;
        Ok(())
    }

    fn fill_rect(&mut self, fill: &Fill, rect: Rect) -> Result<()> {
        self.cr.save()?;
        self.set_source(fill, rect)?;
        self.cr.rectangle(rect.x, rect.y, rect.w, rect.h);
        self.cr.fill()?;
        self.cr.restore()?;
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        width: f64,
        color: Color,
    ) -> Result<()> {
        self.cr.save()?;
        self.set_color(color);
        self.cr.set_line_width(width);
        self.cr.move_to(from.0, from.1);
        self.cr.line_to(to.0, to.1);
        self.cr.stroke()?;
        self.cr.restore()?;
        Ok(())
    }

    fn draw_text(&mut self, run: &TextRun) -> Result<()> {
        if run.text.is_empty() || run.size <= 0.0 {
            return Ok(());
        }
        let layout = pangocairo::functions::create_layout(&self.cr);
        let desc = font::describe(run.family, run.weight, run.size);
        layout.set_font_description(Some(&desc));
        layout.set_text(run.text);
        let (w, _h) = layout.pixel_size();

        self.cr.save()?;
        self.set_color(run.color);
        self.cr.move_to(run.x - w as f64 / 2.0, run.y);
        pangocairo::functions::show_layout(&self.cr, &layout);
        self.cr.restore()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_oversized_surfaces() {
        let err = CairoCanvas::new(40_000, 10).err().expect("surface should fail");
        assert!(matches!(err, Error::SurfaceUnavailable(40_000, 10, _)));
    }

    #[test]
    fn reports_size() {
        let canvas = CairoCanvas::new(36, 64).unwrap();
        assert_eq!(canvas.size(), (36.0, 64.0));
        assert_eq!(canvas.bounds(), Rect::new(0.0, 0.0, 36.0, 64.0));
    }
}
