use linkly_card::data::WorkoutSummary;
use linkly_card::export::Exporter;
use linkly_card::logs::{LogVisitor, ProgressBar};
use linkly_card::pipeline::{Job, Output, Pipeline};
use linkly_card::style::StyleName;

use chrono::NaiveDate;
use std::fs;

fn summaries() -> Vec<WorkoutSummary> {
    let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    vec![
        WorkoutSummary::new("Morning Run", date).with_duration(30),
        WorkoutSummary::new("Pull Day", date).with_exercise("Row", 4),
    ]
}

#[test]
fn writes_one_file_per_job() {
    let dir = tempfile::tempdir().unwrap();
    let jobs: Vec<Job> = summaries()
        .iter()
        .flat_map(|s| Job::for_styles(s, &[StyleName::Bold, StyleName::Gradient]))
        .collect();
    let mut pipeline = Pipeline::new(Exporter::default(), ());
    let report = pipeline.run(jobs, &Output::Download(dir.path().to_path_buf()));
    assert!(report.is_success());
    assert_eq!(report.written.len(), 4);
    assert!(dir.path().join("Morning_Run_gradient_Jun_1,_2024.png").exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 4);
}

#[test]
fn previews_are_logged() {
    let dir = tempfile::tempdir().unwrap();
    let jobs = Job::for_styles(&summaries()[1], &[StyleName::Transparent]);
    let pbar = ProgressBar::new(Vec::new()).unwrap();
    let mut pipeline = Pipeline::new(Exporter::default(), LogVisitor::new(pbar));
    let report = pipeline.run(jobs, &Output::Preview(dir.path().to_path_buf()));
    assert_eq!(report.written, [dir.path().join("Pull_Day_transparent_preview.png")]);

    let bytes = fs::read(&report.written[0]).unwrap();
    assert_eq!(linkly_card::image::png_dimensions(&bytes).unwrap(), (360, 640));

    let log = String::from_utf8(pipeline.into_visitor().into_inner().into_inner()).unwrap();
    assert!(log.contains("rendering Pull Day (transparent)..."));
    assert!(log.contains("done! 1 written"));
}
