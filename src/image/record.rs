//! A canvas that records paint commands instead of rasterizing them.

use crate::error::Result;
use crate::image::canvas::{Canvas, TextRun};
use crate::image::color::Color;
use crate::image::fill::{Fill, Rect};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Clear,
    Fill {
        fill: Fill,
        rect: Rect,
    },
    Line {
        from: (f64, f64),
        to: (f64, f64),
        width: f64,
        color: Color,
    },
    Text {
        text: String,
        family: String,
        weight: u16,
        size: f64,
        color: Color,
        x: f64,
        y: f64,
    },
}

#[derive(Debug, Clone)]
pub struct Recorder {
    width: f64,
    height: f64,
    commands: Vec<Command>,
}

impl Recorder {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Text lines in paint order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                Command::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Top edge of the first text command with exactly this content.
    pub fn text_y(&self, needle: &str) -> Option<f64> {
        self.commands.iter().find_map(|c| match c {
            Command::Text { text, y, .. } if text == needle => Some(*y),
            _ => None,
        })
    }

    pub fn lines(&self) -> Vec<&Command> {
        self.commands
            .iter()
            .filter(|c| matches!(c, Command::Line { .. }))
            .collect()
    }
}

impl Canvas for Recorder {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self) -> Result<()> {
        self.commands.push(Command::Clear);
        Ok(())
    }

    fn fill_rect(&mut self, fill: &Fill, rect: Rect) -> Result<()> {
        self.commands.push(Command::Fill {
            fill: fill.clone(),
            rect,
        });
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        width: f64,
        color: Color,
    ) -> Result<()> {
        self.commands.push(Command::Line {
            from,
            to,
            width,
            color,
        });
        Ok(())
    }

    fn draw_text(&mut self, run: &TextRun) -> Result<()> {
        self.commands.push(Command::Text {
            text: run.text.to_string(),
            family: run.family.to_string(),
            weight: run.weight,
            size: run.size,
            color: run.color,
            x: run.x,
            y: run.y,
        });
        Ok(())
    }
}
