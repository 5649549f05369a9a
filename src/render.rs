//! Paints workout cards onto canvases.

use crate::data::WorkoutSummary;
use crate::decode::WorkoutDecoder;
use crate::error::Result;
use crate::image::{CairoCanvas, Canvas};
use crate::layout::Layout;
use crate::style::RenderStyle;

use cairo::ImageSurface;

/// Renders a card onto a caller-owned canvas, sized already. Returns the
/// layout used, which is fully computed before the first paint call.
pub fn render(
    summary: &WorkoutSummary,
    style: &RenderStyle,
    canvas: &mut dyn Canvas,
) -> Result<Layout> {
    let (width, height) = canvas.size();
    let decoder = WorkoutDecoder::new(style, width, height);
    let layout = decoder.layout(summary);
    let stack = decoder.decode_with(summary, &layout);
    stack.render(canvas)?;
    Ok(layout)
}

/// Renders a card into a new image surface of the given size.
pub fn render_surface(
    summary: &WorkoutSummary,
    style: &RenderStyle,
    width: i32,
    height: i32,
) -> Result<ImageSurface> {
    let mut canvas = CairoCanvas::new(width, height)?;
    render(summary, style, &mut canvas)?;
    Ok(canvas.into_surface())
}
