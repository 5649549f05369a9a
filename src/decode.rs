//! Decodes a workout summary into the layers of a card.

use crate::data::format;
use crate::data::WorkoutSummary;
use crate::image::Rect;
use crate::layer::{FillLayer, LabelLayer, LayerStack, RuleLayer};
use crate::layout::{Block, Layout};
use crate::style::{RenderStyle, BRAND};

pub trait Decoder {
    fn decode(&self, summary: &WorkoutSummary) -> LayerStack;
}

/// Lays out and decodes summaries for one style on a canvas of known size.
#[derive(Debug, Clone, Copy)]
pub struct WorkoutDecoder<'s> {
    style: &'s RenderStyle,
    width: f64,
    height: f64,
}

impl<'s> WorkoutDecoder<'s> {
    pub fn new(style: &'s RenderStyle, width: f64, height: f64) -> Self {
        Self {
            style,
            width,
            height,
        }
    }

    pub fn layout(&self, summary: &WorkoutSummary) -> Layout {
        Layout::compute(self.style, summary.shape(), self.height)
    }

    /// Builds the layers from an already computed layout.
    pub fn decode_with(&self, summary: &WorkoutSummary, layout: &Layout) -> LayerStack {
        let style = self.style;
        let family = style.family.as_str();
        let text = &style.text;
        let cx = self.width / 2.0;
        let mut stack = LayerStack::new();

        for fill in style.background.iter() {
            stack.push(FillLayer::background(fill.clone()));
        }
        if let Some(bar) = &style.accent_bar {
            let rect = Rect::new(
                cx - bar.width / 2.0,
                layout.start_y - bar.offset,
                bar.width,
                bar.height,
            );
            stack.push(FillLayer::rect(bar.fill.clone(), rect));
        }

        for placement in layout.placements.iter() {
            let y = placement.y;
            match placement.block {
                Block::Title => {
                    stack.push(LabelLayer::new(summary.title(), family, &text.title, cx, y));
                }
                Block::Date => {
                    let date = summary.short_date();
                    let line = if style.show_kind {
                        format::kind_and_date(summary.kind.as_deref(), &date)
                    } else {
                        date
                    };
                    stack.push(LabelLayer::new(line, family, &text.date, cx, y));
                    if let Some(o) = &style.date_ornament {
                        for x in [cx - o.offset, cx + o.offset] {
                            let glyph = LabelLayer::new(&*o.glyph, family, &text.date, x, y)
                                .with_color(o.color);
                            stack.push(glyph);
                        }
                    }
                }
                Block::Duration => {
                    if let Some(label) = summary.duration_label() {
                        stack.push(LabelLayer::new(label, family, &text.duration, cx, y));
                    }
                }
                Block::Divider => {
                    stack.push(RuleLayer::centered(&style.divider, cx, y));
                }
                Block::Exercise(i) => {
                    if let Some(exercise) = summary.exercises.get(i) {
                        let sets = format::sets(exercise.sets_completed);
                        let sets_y = y + style.row.sets_offset;
                        stack.push(LabelLayer::new(&*exercise.name, family, &text.exercise, cx, y));
                        stack.push(LabelLayer::new(sets, family, &text.sets, cx, sets_y));
                    }
                }
                Block::Group => {
                    if let Some(line) = summary.group_line() {
                        stack.push(LabelLayer::new(line, family, &text.group, cx, y));
                    }
                }
                Block::Brand => {
                    stack.push(LabelLayer::new(BRAND, family, &text.brand, cx, y));
                }
                Block::Tagline => {
                    if let Some(tagline) = &style.tagline {
                        stack.push(LabelLayer::new(&**tagline, family, &text.tagline, cx, y));
                    }
                }
            }
        }
        stack
    }
}

impl Decoder for WorkoutDecoder<'_> {
    fn decode(&self, summary: &WorkoutSummary) -> LayerStack {
        let layout = self.layout(summary);
        self.decode_with(summary, &layout)
    }
}
