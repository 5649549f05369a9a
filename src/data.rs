//! Contains representations for workout data consumed by the renderer.

pub mod format;
mod workout;

pub use workout::{ExerciseSummary, WorkoutShape, WorkoutSummary};
