//! Vertical flow layout of a card.
//!
//! Every block height and gap comes from the style. The whole flow is summed
//! first, so the content block can be centered in the canvas before anything
//! is painted.

use crate::data::WorkoutShape;
use crate::style::{DurationGap, RenderStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Title,
    Date,
    Duration,
    Divider,
    Exercise(usize),
    Group,
    Brand,
    Tagline,
}

/// Where a block is painted: `y` is its top edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub block: Block,
    pub y: f64,
    pub height: f64,
}

/// One advance of the cursor. `block` is `None` for reserved space that is
/// not painted.
#[derive(Debug, Clone, Copy)]
struct Step {
    block: Option<Block>,
    lead: f64,
    height: f64,
    trail: f64,
}

impl Step {
    fn new(block: Block, height: f64, trail: f64) -> Self {
        Self {
            block: Some(block),
            lead: 0.0,
            height: nonneg(height),
            trail: nonneg(trail),
        }
    }

    fn led(block: Block, lead: f64, height: f64) -> Self {
        Self {
            block: Some(block),
            lead: nonneg(lead),
            height: nonneg(height),
            trail: 0.0,
        }
    }

    fn gap(height: f64) -> Self {
        Self {
            block: None,
            lead: 0.0,
            height: nonneg(height),
            trail: 0.0,
        }
    }

    fn advance(&self) -> f64 {
        self.lead + self.height + self.trail
    }
}

fn nonneg(x: f64) -> f64 {
    if x.is_finite() {
        x.max(0.0)
    } else {
        0.0
    }
}

/// Running vertical position.
#[derive(Debug, Clone, Copy)]
pub struct Cursor {
    y: f64,
}

impl Cursor {
    pub fn new(y: f64) -> Self {
        Self { y }
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Moves down by `by` and returns the position before moving.
    pub fn advance(&mut self, by: f64) -> f64 {
        let y = self.y;
        self.y += by;
        y
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub start_y: f64,
    pub total_height: f64,
    pub placements: Vec<Placement>,
}

impl Layout {
    pub fn compute(style: &RenderStyle, shape: WorkoutShape, canvas_height: f64) -> Self {
        let steps = Self::steps(style, shape);
        let total_height: f64 = steps.iter().map(Step::advance).sum();
        let start_y = (canvas_height - total_height) / 2.0;

        let mut cursor = Cursor::new(start_y);
        let placements = steps
            .iter()
            .filter_map(|step| {
                let top = cursor.advance(step.advance()) + step.lead;
                step.block.map(|block| Placement {
                    block,
                    y: top,
                    height: step.height,
                })
            })
            .collect();

        Self {
            start_y,
            total_height,
            placements,
        }
    }

    fn steps(style: &RenderStyle, shape: WorkoutShape) -> Vec<Step> {
        let sp = &style.spacing;
        let mut steps = Vec::with_capacity(8 + shape.exercise_count);
        steps.push(Step::new(Block::Title, sp.title_height, sp.spacing));
        steps.push(Step::new(Block::Date, sp.date_height, sp.date_gap));
        match (shape.has_duration, style.duration_gap) {
            (true, _) => steps.push(Step::new(Block::Duration, sp.duration_height, sp.spacing)),
            (false, DurationGap::Collapse) => steps.push(Step::gap(sp.spacing)),
            (false, DurationGap::Reserve) => {
                steps.push(Step::gap(nonneg(sp.duration_height) + nonneg(sp.spacing)))
            }
        }
        steps.push(Step::new(Block::Divider, sp.divider_height, sp.spacing));
        steps.extend(
            (0..shape.exercise_count).map(|i| Step::new(Block::Exercise(i), style.row.height, 0.0)),
        );
        if shape.has_group {
            steps.push(Step::led(Block::Group, sp.spacing, sp.group_height));
        }
        steps.push(Step::led(Block::Brand, sp.spacing, sp.brand_height));
        if style.tagline.is_some() {
            steps.push(Step::new(Block::Tagline, sp.tagline_height, 0.0));
        }
        steps
    }

    pub fn get(&self, block: Block) -> Option<&Placement> {
        self.placements.iter().find(|p| p.block == block)
    }

    pub fn y_of(&self, block: Block) -> Option<f64> {
        self.get(block).map(|p| p.y)
    }

    pub fn end_y(&self) -> f64 {
        self.start_y + self.total_height
    }
}
