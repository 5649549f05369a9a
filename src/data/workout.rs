//! Workout summaries, as resolved by the surrounding application.

use crate::data::format;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single exercise line of a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseSummary {
    pub name: String,
    #[serde(alias = "sets")]
    pub sets_completed: u32,
}

impl ExerciseSummary {
    pub fn new(name: impl Into<String>, sets_completed: u32) -> Self {
        Self {
            name: name.into(),
            sets_completed,
        }
    }
}

/// Everything a share card shows about one workout session.
///
/// Values are read only while a card is being rendered. Field aliases accept
/// the shorter keys used by hand-written workout files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    pub name: String,
    pub date: NaiveDate,
    #[serde(default, alias = "duration")]
    pub duration_minutes: u32,
    #[serde(default)]
    pub exercises: Vec<ExerciseSummary>,
    #[serde(default, alias = "owner")]
    pub owner_display_name: Option<String>,
    #[serde(default, alias = "partners")]
    pub co_participant_display_names: Vec<String>,
    /// Workout type, e.g. `Push` or `Legs`.
    #[serde(default, alias = "type")]
    pub kind: Option<String>,
}

/// The parts of a summary that affect vertical layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorkoutShape {
    pub has_duration: bool,
    pub exercise_count: usize,
    pub has_group: bool,
}

impl WorkoutSummary {
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            date,
            duration_minutes: 0,
            exercises: Vec::new(),
            owner_display_name: None,
            co_participant_display_names: Vec::new(),
            kind: None,
        }
    }

    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration_minutes = minutes;
        self
    }

    pub fn with_exercise(mut self, name: impl Into<String>, sets: u32) -> Self {
        self.exercises.push(ExerciseSummary::new(name, sets));
        self
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner_display_name = Some(owner.into());
        self
    }

    pub fn with_partner(mut self, partner: impl Into<String>) -> Self {
        self.co_participant_display_names.push(partner.into());
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn is_group(&self) -> bool {
        !self.co_participant_display_names.is_empty()
    }

    pub fn shape(&self) -> WorkoutShape {
        WorkoutShape {
            has_duration: self.duration_minutes > 0,
            exercise_count: self.exercises.len(),
            has_group: self.is_group(),
        }
    }

    pub fn title(&self) -> String {
        self.name.to_uppercase()
    }

    pub fn short_date(&self) -> String {
        format::short_date(self.date)
    }

    pub fn duration_label(&self) -> Option<String> {
        format::duration(self.duration_minutes)
    }

    pub fn group_line(&self) -> Option<String> {
        format::group_line(
            self.owner_display_name.as_deref(),
            &self.co_participant_display_names,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leg_day() -> WorkoutSummary {
        WorkoutSummary::new("Leg Day", NaiveDate::from_ymd_opt(2024, 1, 5).unwrap())
    }

    #[test]
    fn shape_tracks_optional_blocks() {
        let w = leg_day();
        assert_eq!(w.shape(), WorkoutShape::default());

        let w = w.with_duration(45).with_exercise("Squat", 4).with_partner("Sam");
        assert_eq!(
            w.shape(),
            WorkoutShape {
                has_duration: true,
                exercise_count: 1,
                has_group: true
            }
        );
    }

    #[test]
    fn title_is_upper_cased() {
        assert_eq!(leg_day().title(), "LEG DAY");
    }

    #[cfg(feature = "cli")]
    #[test]
    fn deserializes_short_keys() {
        let src = r#"
            name = "Push"
            date = "2024-03-09"
            duration = 90
            owner = "Alex"
            partners = ["Sam", "Jo"]

            [[exercises]]
            name = "Bench Press"
            sets = 5
        "#;
        let w: WorkoutSummary = toml::from_str(src).unwrap();
        assert_eq!(w.duration_minutes, 90);
        assert_eq!(w.owner_display_name.as_deref(), Some("Alex"));
        assert_eq!(w.co_participant_display_names, ["Sam", "Jo"]);
        assert_eq!(w.exercises[0].sets_completed, 5);
        assert_eq!(w.kind, None);
    }
}
