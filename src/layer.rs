//! Implements paint layers that a card is composed of.

mod fill;
mod label;
mod rule;

pub use fill::FillLayer;
pub use label::LabelLayer;
pub use rule::RuleLayer;

use crate::error::Result;
use crate::image::Canvas;

use core::fmt::Debug;

pub trait Layer: Debug {
    fn render(&self, canvas: &mut dyn Canvas) -> Result<()>;
}

/// Layers in paint order, bottom first.
#[derive(Debug, Default)]
pub struct LayerStack(pub Vec<Box<dyn Layer>>);

impl LayerStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, layer: impl Layer + 'static) {
        self.0.push(Box::new(layer));
    }

    /// Clears the canvas, then paints every layer onto it.
    pub fn render(&self, canvas: &mut dyn Canvas) -> Result<()> {
        canvas.clear()?;
        let LayerStack(layers) = self;
        for layer in layers.iter() {
            layer.render(canvas)?;
        }
        Ok(())
    }
}
