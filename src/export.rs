//! Preview and export of rendered cards.
//!
//! Full resolution exports are 1080x1920 (9:16 story format). Previews go
//! through the same renderer with every style length scaled down, so they
//! are faithful miniatures rather than resampled bitmaps.

mod naming;
mod share;

pub use naming::{download_file_name, preview_file_name, share_file_name};
pub use share::{
    FallbackReason, NoShare, ShareError, ShareOutcome, SharePayload, ShareTarget, SHARE_MIME,
    SHARE_TEXT,
};

use crate::data::WorkoutSummary;
use crate::error::{Error, Result};
use crate::image::{self, Color};
use crate::render::render_surface;
use crate::style::{RenderStyle, StyleBook, StyleName};

use cairo::ImageSurface;
use std::fs;
use std::io::Write;
use std::path::{Component, Path, PathBuf};

pub const OUTPUT_WIDTH: i32 = 1080;
pub const OUTPUT_HEIGHT: i32 = 1920;
pub const PREVIEW_SCALE: f64 = 1.0 / 3.0;

/// Painted behind transparent styles in previews.
pub const PREVIEW_BACKDROP: Color = Color {
    r: 0.9607843137254902,
    g: 0.9607843137254902,
    b: 0.9607843137254902,
    a: None,
};

/// Pixel size of a canvas rendered at scale `s`.
pub fn scaled_size(s: f64) -> (i32, i32) {
    let w = (OUTPUT_WIDTH as f64 * s).round() as i32;
    let h = (OUTPUT_HEIGHT as f64 * s).round() as i32;
    (w, h)
}

/// A small rendering of one style, kept as a surface for display.
#[derive(Debug)]
pub struct Preview {
    pub style: StyleName,
    pub surface: ImageSurface,
}

impl Preview {
    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    pub fn png(&self) -> Result<Vec<u8>> {
        image::encode_png(&self.surface)
    }
}

/// A full resolution card encoded as PNG.
#[derive(Debug, Clone)]
pub struct ExportedImage {
    pub style: StyleName,
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub width: i32,
    pub height: i32,
}

impl ExportedImage {
    /// Reads the dimensions back from the encoded PNG header.
    pub fn dimensions(&self) -> Result<(u32, u32)> {
        image::png_dimensions(&self.bytes)
    }
}

#[derive(Debug, Clone)]
pub struct Exporter {
    book: StyleBook,
    preview_scale: f64,
    preview_backdrop: Option<Color>,
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new(StyleBook::builtin())
    }
}

impl Exporter {
    pub fn new(book: StyleBook) -> Self {
        Self {
            book,
            preview_scale: PREVIEW_SCALE,
            preview_backdrop: Some(PREVIEW_BACKDROP),
        }
    }

    pub fn with_preview_scale(mut self, scale: f64) -> Self {
        if scale.is_finite() && scale > 0.0 {
            self.preview_scale = scale;
        }
        self
    }

    /// Sets the color painted behind transparent styles in previews, or
    /// `None` to keep previews transparent.
    pub fn with_preview_backdrop(mut self, backdrop: Option<Color>) -> Self {
        self.preview_backdrop = backdrop;
        self
    }

    pub fn style(&self, name: StyleName) -> &RenderStyle {
        self.book.get(name)
    }

    /// Renders at scale `s` onto a fresh surface of the matching size.
    pub fn render(
        &self,
        summary: &WorkoutSummary,
        style: &RenderStyle,
        s: f64,
    ) -> Result<ImageSurface> {
        let (w, h) = scaled_size(s);
        render_surface(summary, &style.scaled(s), w, h)
    }

    pub fn preview(&self, summary: &WorkoutSummary, name: StyleName) -> Result<Preview> {
        let style = self.style(name);
        let surface = match self.preview_backdrop {
            Some(backdrop) if style.is_transparent() => {
                let style = style.clone().with_background(backdrop);
                self.render(summary, &style, self.preview_scale)?
            }
            _ => self.render(summary, style, self.preview_scale)?,
        };
        Ok(Preview {
            style: name,
            surface,
        })
    }

    /// Renders one preview per style, each on its own surface.
    pub fn previews(
        &self,
        summary: &WorkoutSummary,
        names: &[StyleName],
    ) -> Result<Vec<Preview>> {
        names.iter().map(|n| self.preview(summary, *n)).collect()
    }

    pub fn export(&self, summary: &WorkoutSummary, name: StyleName) -> Result<ExportedImage> {
        let surface = self.render(summary, self.style(name), 1.0)?;
        let (width, height) = (surface.width(), surface.height());
        let bytes = image::encode_png(&surface)?;
        Ok(ExportedImage {
            style: name,
            file_name: download_file_name(&summary.name, name, &summary.short_date()),
            bytes,
            width,
            height,
        })
    }

    /// Exports and writes the card into `dir`, returning the final path.
    pub fn download(
        &self,
        summary: &WorkoutSummary,
        name: StyleName,
        dir: impl AsRef<Path>,
    ) -> Result<PathBuf> {
        let image = self.export(summary, name)?;
        write_atomic(dir.as_ref(), &image.file_name, &image.bytes)
    }

    /// Hands the card to a share target, falling back to a download when
    /// sharing is unavailable or fails. Cancellation writes nothing.
    pub fn share(
        &self,
        summary: &WorkoutSummary,
        name: StyleName,
        target: &mut dyn ShareTarget,
        dir: impl AsRef<Path>,
    ) -> Result<ShareOutcome> {
        let image = self.export(summary, name)?;
        let reason = if !target.is_available() {
            FallbackReason::Unavailable
        } else {
            let payload = SharePayload::new(summary, name, image.bytes.clone());
            if !target.can_share(&payload) {
                FallbackReason::Unsupported
            } else {
                match target.share(&payload) {
                    Ok(()) => return Ok(ShareOutcome::Shared),
                    Err(ShareError::Cancelled) => return Ok(ShareOutcome::Cancelled),
                    Err(ShareError::Failed(e)) => FallbackReason::Failed(Error::share(e)),
                }
            }
        };
        let path = write_atomic(dir.as_ref(), &image.file_name, &image.bytes)?;
        Ok(ShareOutcome::Downloaded { path, reason })
    }
}

/// Writes `bytes` to `dir/file_name` through a hidden sibling file, so the
/// final name only ever points at a complete image. `file_name` must be a
/// single plain component.
pub fn write_atomic(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
    let path = dir.join(file_name);
    let mut components = Path::new(file_name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => {}
        _ => return Err(Error::io(&path, "not a plain file name")),
    }
    let part = dir.join(format!(".{file_name}.part"));
    let write = || -> std::io::Result<()> {
        let mut file = fs::File::create(&part)?;
        file.write_all(bytes)?;
        file.sync_all()?;
        fs::rename(&part, &path)
    };
    match write() {
        Ok(()) => Ok(path),
        Err(e) => {
            let _ = fs::remove_file(&part);
            Err(Error::io(&path, e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_size_is_a_third() {
        assert_eq!(scaled_size(PREVIEW_SCALE), (360, 640));
        assert_eq!(scaled_size(1.0), (OUTPUT_WIDTH, OUTPUT_HEIGHT));
    }

    #[test]
    fn backdrop_is_light_gray() {
        assert_eq!(PREVIEW_BACKDROP.to_string(), "#F5F5F5");
    }

    #[test]
    fn atomic_write_leaves_no_part_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_atomic(dir.path(), "card.png", b"png").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"png");
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, ["card.png"]);
    }

    #[test]
    fn atomic_write_rejects_nested_names() {
        let dir = tempfile::tempdir().unwrap();
        let inner = dir.path().join("inner");
        fs::create_dir(&inner).unwrap();
        for name in ["Push/Pull.png", "../escape.png", "..", "."] {
            let err = write_atomic(&inner, name, b"png").unwrap_err();
            assert!(matches!(err, Error::IoError(..)), "{name}");
        }
        assert_eq!(fs::read_dir(&inner).unwrap().count(), 0);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn atomic_write_reports_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = write_atomic(&missing, "card.png", b"png").unwrap_err();
        assert!(matches!(err, Error::IoError(..)));
        assert!(!missing.exists());
    }
}
