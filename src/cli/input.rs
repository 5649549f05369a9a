//! Workout files given on the command line.

use crate::data::WorkoutSummary;
use crate::error::{Error, Result};

use std::fs;
use std::path::Path;

/// Reads a workout summary from a TOML file.
pub fn read_workout(path: &impl AsRef<Path>) -> Result<WorkoutSummary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| Error::workout_open(path, e))?;
    toml::from_str(&content).map_err(|e| Error::workout_deser(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_hand_written_workout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("legs.toml");
        fs::write(
            &path,
            r#"
            name = "Leg Day"
            date = "2024-01-05"
            duration = 90
            owner = "Alex"
            partners = ["Sam"]

            [[exercises]]
            name = "Squat"
            sets = 4
            "#,
        )
        .unwrap();
        let summary = read_workout(&path).unwrap();
        assert_eq!(summary.name, "Leg Day");
        assert_eq!(summary.duration_minutes, 90);
        assert_eq!(summary.exercises[0].sets_completed, 4);
        assert!(summary.is_group());
    }

    #[test]
    fn reports_bad_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "name = 3").unwrap();
        assert!(matches!(read_workout(&path), Err(Error::WorkoutDeser(..))));
        let missing = dir.path().join("missing.toml");
        assert!(matches!(read_workout(&missing), Err(Error::WorkoutOpen(..))));
    }
}
