//! Fill paints: solid colors and gradients.

use crate::image::color::Color;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
}

impl GradientStop {
    pub fn new(offset: f64, color: Color) -> Self {
        Self { offset, color }
    }
}

/// A paint applied to a rectangle.
///
/// Gradient points are fractions of the rectangle being filled, so the same
/// fill works at any canvas size. Radial radii are pixels and follow the
/// style scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Fill {
    Solid(Color),
    Linear {
        start: (f64, f64),
        end: (f64, f64),
        stops: Vec<GradientStop>,
    },
    Radial {
        center: (f64, f64),
        inner: f64,
        outer: f64,
        stops: Vec<GradientStop>,
    },
}

impl Fill {
    pub fn vertical(top: Color, bottom: Color) -> Self {
        Self::Linear {
            start: (0.5, 0.0),
            end: (0.5, 1.0),
            stops: vec![GradientStop::new(0.0, top), GradientStop::new(1.0, bottom)],
        }
    }

    pub fn horizontal(left: Color, right: Color) -> Self {
        Self::Linear {
            start: (0.0, 0.5),
            end: (1.0, 0.5),
            stops: vec![GradientStop::new(0.0, left), GradientStop::new(1.0, right)],
        }
    }

    pub fn scaled(&self, s: f64) -> Self {
        match self {
            Self::Radial {
                center,
                inner,
                outer,
                stops,
            } => Self::Radial {
                center: *center,
                inner: inner * s,
                outer: outer * s,
                stops: stops.clone(),
            },
            fill => fill.clone(),
        }
    }
}

/// Axis-aligned rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Resolves a point given in fractions of this rectangle.
    pub fn point(&self, (fx, fy): (f64, f64)) -> (f64, f64) {
        (self.x + fx * self.w, self.y + fy * self.h)
    }
}
