//! Drawing surfaces and the paint values they accept.

mod canvas;
mod color;
mod fill;
mod record;
mod surface;

pub use crate::image::canvas::{Canvas, TextRun};
pub use crate::image::color::Color;
pub use crate::image::fill::{Fill, GradientStop, Rect};
pub use crate::image::record::{Command, Recorder};
pub use crate::image::surface::CairoCanvas;

use crate::error::{Error, Result};

use cairo::ImageSurface;
use std::io::Cursor;

/// Encodes a surface as PNG bytes.
pub fn encode_png(surface: &ImageSurface) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    surface
        .write_to_png(&mut buffer)
        .map_err(Error::png_encode)?;
    Ok(buffer)
}

/// Reads the pixel dimensions stored in a PNG header.
pub fn png_dimensions(bytes: &[u8]) -> Result<(u32, u32)> {
    let decoder = png::Decoder::new(Cursor::new(bytes));
    let reader = decoder.read_info().map_err(Error::png_decode)?;
    let info = reader.info();
    Ok((info.width, info.height))
}
