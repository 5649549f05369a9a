use linkly_card::data::WorkoutSummary;
use linkly_card::export::{Exporter, OUTPUT_HEIGHT, OUTPUT_WIDTH};
use linkly_card::style::StyleName;
use linkly_card::Error;

use chrono::NaiveDate;
use std::fs;

fn leg_day() -> WorkoutSummary {
    WorkoutSummary::new("Leg Day", NaiveDate::from_ymd_opt(2024, 1, 5).unwrap())
        .with_duration(90)
        .with_exercise("Squat", 4)
        .with_exercise("Lunge", 3)
        .with_owner("Alex")
        .with_partner("Sam")
}

#[test]
fn export_is_full_resolution() {
    let exporter = Exporter::default();
    let image = exporter.export(&leg_day(), StyleName::Story).unwrap();
    assert_eq!((image.width, image.height), (OUTPUT_WIDTH, OUTPUT_HEIGHT));
    assert_eq!(image.dimensions().unwrap(), (1080, 1920));
    assert_eq!(image.file_name, "Leg_Day_story_Jan_5,_2024.png");
}

#[test]
fn export_is_deterministic() {
    let exporter = Exporter::default();
    for name in StyleName::ALL {
        let a = exporter.export(&leg_day(), name).unwrap();
        let b = exporter.export(&leg_day(), name).unwrap();
        assert!(a.bytes == b.bytes, "{name}");
    }
}

#[test]
fn previews_are_a_third() {
    let exporter = Exporter::default();
    let previews = exporter.previews(&leg_day(), &StyleName::ALL).unwrap();
    assert_eq!(previews.len(), StyleName::ALL.len());
    for (preview, name) in previews.iter().zip(StyleName::ALL) {
        assert_eq!(preview.style, name);
        assert_eq!((preview.width(), preview.height()), (360, 640));
    }
    let png = previews[0].png().unwrap();
    assert_eq!(linkly_card::image::png_dimensions(&png).unwrap(), (360, 640));
}

#[test]
fn transparent_preview_gets_backdrop() {
    let summary = leg_day();
    let mut with = Exporter::default()
        .preview(&summary, StyleName::Transparent)
        .unwrap();
    let mut without = Exporter::default()
        .with_preview_backdrop(None)
        .preview(&summary, StyleName::Transparent)
        .unwrap();
    let opaque = with.surface.data().unwrap()[..4].to_vec();
    let clear = without.surface.data().unwrap()[..4].to_vec();
    assert_ne!(opaque, [0, 0, 0, 0]);
    assert_eq!(clear, [0, 0, 0, 0]);
}

#[test]
fn download_writes_named_file_atomically() {
    let dir = tempfile::tempdir().unwrap();
    let path = Exporter::default()
        .download(&leg_day(), StyleName::Bold, dir.path())
        .unwrap();
    assert_eq!(path, dir.path().join("Leg_Day_bold_Jan_5,_2024.png"));
    let bytes = fs::read(&path).unwrap();
    assert_eq!(linkly_card::image::png_dimensions(&bytes).unwrap(), (1080, 1920));
    let entries = fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(entries, 1);
}

#[test]
fn failed_download_leaves_nothing_behind() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");
    let err = Exporter::default()
        .download(&leg_day(), StyleName::Minimal, &missing)
        .unwrap_err();
    assert!(matches!(err, Error::IoError(..)));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn names_with_separators_stay_in_the_output_folder() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("cards");
    fs::create_dir(&dir).unwrap();
    let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
    let exporter = Exporter::default();

    let push_pull = WorkoutSummary::new("Push/Pull", date).with_exercise("Row", 3);
    let path = exporter.download(&push_pull, StyleName::Bold, &dir).unwrap();
    assert_eq!(path, dir.join("Push_Pull_bold_Jan_5,_2024.png"));

    let sneaky = WorkoutSummary::new("./../x", date);
    let path = exporter.download(&sneaky, StyleName::Bold, &dir).unwrap();
    assert_eq!(path.parent(), Some(dir.as_path()));

    assert_eq!(fs::read_dir(&dir).unwrap().count(), 2);
    assert_eq!(fs::read_dir(root.path()).unwrap().count(), 1);
}
